//! Leave request model and related types.
//!
//! Leave requests are owned by the external data store. The engine only
//! reads them, bucketing each one into an entitlement period by its start date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Decision state of a leave request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    /// Submitted and awaiting a decision. Counts as pending days.
    #[serde(alias = "pending")]
    Requested,
    /// Approved. Counts as taken days.
    Approved,
    /// Rejected. Has no effect on any balance.
    Rejected,
}

impl LeaveStatus {
    /// Returns true if a request in this state consumes balance.
    ///
    /// # Examples
    ///
    /// ```
    /// use vacation_engine::models::LeaveStatus;
    ///
    /// assert!(LeaveStatus::Approved.counts_against_balance());
    /// assert!(LeaveStatus::Requested.counts_against_balance());
    /// assert!(!LeaveStatus::Rejected.counts_against_balance());
    /// ```
    pub fn counts_against_balance(self) -> bool {
        matches!(self, LeaveStatus::Approved | LeaveStatus::Requested)
    }
}

/// A leave request as seen by the engine.
///
/// Values of this type have already passed the input boundary: the dates are
/// calendar dates and `days_requested` is non-negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// Unique identifier of the request.
    pub id: String,
    /// First day of leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of leave (inclusive).
    pub end_date: NaiveDate,
    /// Number of leave days this request consumes, as supplied by the caller.
    pub days_requested: u32,
    /// Current decision state.
    pub status: LeaveStatus,
    /// Free-form label such as "vacation". Never interpreted.
    #[serde(rename = "type", default)]
    pub leave_type: String,
}

impl LeaveRequest {
    /// Returns true if the request starts within `[start, end)`.
    pub fn starts_within(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.start_date >= start && self.start_date < end
    }
}
