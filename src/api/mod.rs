//! HTTP API module for the Vacation Entitlement Engine.
//!
//! This module provides the REST endpoints used by the profile view, the
//! request submission flow and the dashboard.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    BalanceInput, BalanceRequest, EmployeePayload, LeaveRequestPayload, SubmissionInput,
    SubmissionRequest,
};
pub use response::{ApiError, ApiErrorResponse, EntitlementsResponse, RemainingResponse};
pub use state::AppState;
