//! Request types for the Vacation Entitlement Engine API.
//!
//! Records arrive from the data store loosely typed: dates as strings in
//! whatever shape the store emits and day counts as signed numbers. The
//! conversions in this module are the only place those records are checked;
//! everything past them works on validated domain types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculation::{local_today, parse_calendar_date};
use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, LeaveRequest, LeaveStatus};

/// Request body for the `/balance` and `/balance/remaining` endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceRequest {
    /// The employee whose balance is computed.
    pub employee: EmployeePayload,
    /// The employee's full leave request history.
    #[serde(default)]
    pub requests: Vec<LeaveRequestPayload>,
    /// The date to evaluate against. Defaults to the server's local date.
    #[serde(default)]
    pub today: Option<String>,
}

/// Request body for the `/requests/check` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionRequest {
    /// The employee submitting the request.
    pub employee: EmployeePayload,
    /// The employee's stored leave request history.
    #[serde(default)]
    pub requests: Vec<LeaveRequestPayload>,
    /// The date to evaluate against. Defaults to the server's local date.
    #[serde(default)]
    pub today: Option<String>,
    /// Day count of the new or edited request.
    pub days_requested: i64,
    /// ID of the stored request being edited, if this is an edit.
    #[serde(default)]
    pub replacing_request_id: Option<String>,
}

/// Employee information as sent by the data store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeePayload {
    /// Unique identifier for the employee.
    pub id: String,
    /// Hire date; absent, null or blank when unknown.
    #[serde(default)]
    pub hire_date: Option<String>,
}

/// A leave request record as sent by the data store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRequestPayload {
    /// Unique identifier of the request.
    pub id: String,
    /// First day of leave.
    pub start_date: String,
    /// Last day of leave.
    pub end_date: String,
    /// Number of days consumed.
    pub days_requested: i64,
    /// Decision state.
    pub status: LeaveStatus,
    /// Free-form label.
    #[serde(rename = "type", default)]
    pub leave_type: String,
}

/// Validated input for a balance computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceInput {
    /// The employee.
    pub employee: Employee,
    /// Validated leave history.
    pub requests: Vec<LeaveRequest>,
    /// The evaluation date.
    pub today: NaiveDate,
}

/// Validated input for a submission check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionInput {
    /// The employee, history and evaluation date.
    pub balance: BalanceInput,
    /// Day count of the new or edited request.
    pub days_requested: u32,
    /// The stored version of the request being edited.
    pub replacing: Option<LeaveRequest>,
}

fn parse_day_count(request_id: &str, days: i64) -> EngineResult<u32> {
    if days < 0 {
        return Err(EngineError::InvalidLeaveRequest {
            request_id: request_id.to_string(),
            message: format!("days_requested cannot be negative, got {}", days),
        });
    }
    u32::try_from(days).map_err(|_| EngineError::InvalidLeaveRequest {
        request_id: request_id.to_string(),
        message: format!("days_requested is out of range, got {}", days),
    })
}

fn resolve_today(today: Option<&str>) -> EngineResult<NaiveDate> {
    match today {
        Some(value) => parse_calendar_date("today", value),
        None => Ok(local_today()),
    }
}

fn parse_requests(payloads: Vec<LeaveRequestPayload>) -> EngineResult<Vec<LeaveRequest>> {
    payloads.into_iter().map(LeaveRequest::try_from).collect()
}

impl TryFrom<EmployeePayload> for Employee {
    type Error = EngineError;

    fn try_from(payload: EmployeePayload) -> EngineResult<Self> {
        let hire_date = match payload.hire_date.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(value) => Some(parse_calendar_date("hire_date", value)?),
        };

        Ok(Employee {
            id: payload.id,
            hire_date,
        })
    }
}

impl TryFrom<LeaveRequestPayload> for LeaveRequest {
    type Error = EngineError;

    fn try_from(payload: LeaveRequestPayload) -> EngineResult<Self> {
        if payload.id.trim().is_empty() {
            return Err(EngineError::InvalidLeaveRequest {
                request_id: payload.id,
                message: "id cannot be empty".to_string(),
            });
        }

        let start_date = parse_calendar_date("start_date", &payload.start_date)?;
        let end_date = parse_calendar_date("end_date", &payload.end_date)?;
        if start_date > end_date {
            return Err(EngineError::InvalidLeaveRequest {
                request_id: payload.id,
                message: format!("start_date {} is after end_date {}", start_date, end_date),
            });
        }

        let days_requested = parse_day_count(&payload.id, payload.days_requested)?;

        Ok(LeaveRequest {
            id: payload.id,
            start_date,
            end_date,
            days_requested,
            status: payload.status,
            leave_type: payload.leave_type,
        })
    }
}

impl BalanceRequest {
    /// Validates the payload, failing on the first malformed record.
    pub fn into_domain(self) -> EngineResult<BalanceInput> {
        let today = resolve_today(self.today.as_deref())?;
        Ok(BalanceInput {
            employee: self.employee.try_into()?,
            requests: parse_requests(self.requests)?,
            today,
        })
    }
}

impl SubmissionRequest {
    /// Validates the payload and resolves the request being edited.
    ///
    /// # Errors
    ///
    /// Besides the record-level errors of [`BalanceRequest::into_domain`],
    /// returns `RequestNotFound` if `replacing_request_id` names no request
    /// in the history.
    pub fn into_domain(self) -> EngineResult<SubmissionInput> {
        let candidate_id = self
            .replacing_request_id
            .clone()
            .unwrap_or_else(|| "new".to_string());
        let days_requested = parse_day_count(&candidate_id, self.days_requested)?;

        let balance = BalanceRequest {
            employee: self.employee,
            requests: self.requests,
            today: self.today,
        }
        .into_domain()?;

        let replacing = match self.replacing_request_id {
            Some(id) => Some(
                balance
                    .requests
                    .iter()
                    .find(|r| r.id == id)
                    .cloned()
                    .ok_or(EngineError::RequestNotFound { request_id: id })?,
            ),
            None => None,
        };

        Ok(SubmissionInput {
            balance,
            days_requested,
            replacing,
        })
    }
}
