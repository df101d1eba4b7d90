//! Core data models for the Vacation Entitlement Engine.
//!
//! This module contains the domain models consumed and produced by the engine.

mod balance_report;
mod balance_summary;
mod employee;
mod entitlement_period;
mod leave_request;

pub use balance_report::{AuditStep, AuditTrace, AuditWarning, BalanceReport};
pub use balance_summary::BalanceSummary;
pub use employee::Employee;
pub use entitlement_period::{EntitlementPeriod, PeriodStatus};
pub use leave_request::{LeaveRequest, LeaveStatus};
