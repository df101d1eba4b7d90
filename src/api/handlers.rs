//! HTTP request handlers for the Vacation Entitlement Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{build_balance_report, check_submission, generate_periods, summarize};
use crate::error::EngineError;

use super::request::{BalanceRequest, SubmissionRequest};
use super::response::{
    ApiError, ApiErrorResponse, EntitlementsResponse, RemainingResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/entitlements", get(entitlements_handler))
        .route("/balance", post(balance_handler))
        .route("/balance/remaining", post(remaining_handler))
        .route("/requests/check", post(check_handler))
        .with_state(state)
}

/// Turns a JSON extraction failure into a 400 response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    (StatusCode::BAD_REQUEST, Json(error)).into_response()
}

/// Logs an engine error and turns it into its mapped response.
fn error_response(err: EngineError, correlation_id: Uuid, context: &str) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "{}", context
    );
    ApiErrorResponse::from(err).into_response()
}

/// Handler for GET /entitlements.
///
/// Returns the active policy and its schedule.
async fn entitlements_handler(State(state): State<AppState>) -> Json<EntitlementsResponse> {
    let config = state.config();
    Json(EntitlementsResponse {
        policy: config.policy().clone(),
        tiers: config.table().tiers().to_vec(),
    })
}

/// Handler for POST /balance.
///
/// Returns the full balance report: periods, summary and audit trace.
async fn balance_handler(
    State(state): State<AppState>,
    payload: Result<Json<BalanceRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing balance request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let input = match request.into_domain() {
        Ok(input) => input,
        Err(err) => return error_response(err, correlation_id, "Invalid balance request"),
    };

    match build_balance_report(
        &input.employee,
        &input.requests,
        input.today,
        state.config().table(),
    ) {
        Ok(report) => {
            let current_label = report.current_period().map(|p| p.label.as_str());
            info!(
                correlation_id = %correlation_id,
                employee_id = %report.employee_id,
                periods_count = report.periods.len(),
                current_period = current_label.unwrap_or("none"),
                current_remaining = report.summary.current_remaining,
                warnings_count = report.audit_trace.warnings.len(),
                duration_us = report.audit_trace.duration_us,
                "Balance computed successfully"
            );
            (StatusCode::OK, Json(report)).into_response()
        }
        Err(err) => error_response(err, correlation_id, "Balance computation failed"),
    }
}

/// Handler for POST /balance/remaining.
///
/// Returns only the current period's remaining days.
async fn remaining_handler(
    State(state): State<AppState>,
    payload: Result<Json<BalanceRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing remaining balance request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let input = match request.into_domain() {
        Ok(input) => input,
        Err(err) => return error_response(err, correlation_id, "Invalid balance request"),
    };

    let periods = match generate_periods(
        input.employee.hire_date,
        &input.requests,
        input.today,
        state.config().table(),
    ) {
        Ok(periods) => periods,
        Err(err) => return error_response(err, correlation_id, "Balance computation failed"),
    };
    let summary = summarize(&periods);

    info!(
        correlation_id = %correlation_id,
        employee_id = %input.employee.id,
        current_remaining = summary.current_remaining,
        "Remaining balance computed"
    );

    Json(RemainingResponse {
        employee_id: input.employee.id,
        as_of: input.today,
        current_remaining: summary.current_remaining,
    })
    .into_response()
}

/// Handler for POST /requests/check.
///
/// Validates that a new or edited request fits in the current balance.
async fn check_handler(
    State(state): State<AppState>,
    payload: Result<Json<SubmissionRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing submission check");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let input = match request.into_domain() {
        Ok(input) => input,
        Err(err) => return error_response(err, correlation_id, "Invalid submission check"),
    };
    let balance = &input.balance;

    let periods = match generate_periods(
        balance.employee.hire_date,
        &balance.requests,
        balance.today,
        state.config().table(),
    ) {
        Ok(periods) => periods,
        Err(err) => return error_response(err, correlation_id, "Balance computation failed"),
    };

    match check_submission(&periods, input.days_requested, input.replacing.as_ref()) {
        Ok(check) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %balance.employee.id,
                requested = check.requested,
                available = check.available,
                "Submission fits current balance"
            );
            (StatusCode::OK, Json(check)).into_response()
        }
        Err(err) => error_response(err, correlation_id, "Submission rejected"),
    }
}
