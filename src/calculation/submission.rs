//! Balance check for new and edited leave requests.
//!
//! The request submission flow asks whether a request fits in the current
//! period's remaining balance before it is stored. When a request is being
//! edited, its own prior days are already deducted from the balance and are
//! added back before comparing.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{EntitlementPeriod, LeaveRequest, PeriodStatus};

use super::summary::summarize;

/// Outcome of a successful submission check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionCheck {
    /// Days asked for by the new or edited request.
    pub requested: u32,
    /// Days available to this request.
    pub available: u32,
    /// Days left in the current period once the request is counted.
    pub remaining_after: u32,
}

/// Checks a new or edited request against the current balance.
///
/// `available` is the summary's `current_remaining` plus, when editing, the
/// replaced request's own days if that request still counts (approved or
/// requested) and starts inside the current period.
///
/// # Arguments
///
/// * `periods` - Periods generated from the employee's stored history
/// * `days_requested` - Day count of the request being submitted
/// * `replacing` - The stored version of the request when editing
///
/// # Errors
///
/// Returns `InsufficientBalance` if `days_requested` exceeds `available`.
///
/// # Examples
///
/// ```
/// use vacation_engine::calculation::{EntitlementTable, check_submission, generate_periods};
/// use chrono::NaiveDate;
///
/// let hire = NaiveDate::from_ymd_opt(2022, 1, 10).unwrap();
/// let today = NaiveDate::from_ymd_opt(2026, 2, 5).unwrap();
/// let periods = generate_periods(Some(hire), &[], today, &EntitlementTable::statutory()).unwrap();
///
/// let check = check_submission(&periods, 5, None).unwrap();
/// assert_eq!(check.available, 18);
/// assert_eq!(check.remaining_after, 13);
///
/// assert!(check_submission(&periods, 19, None).is_err());
/// ```
pub fn check_submission(
    periods: &[EntitlementPeriod],
    days_requested: u32,
    replacing: Option<&LeaveRequest>,
) -> EngineResult<SubmissionCheck> {
    let current_remaining = summarize(periods).current_remaining;
    let prior = replacing
        .map(|request| prior_contribution(periods, request))
        .unwrap_or(0);
    let available = current_remaining.saturating_add(prior);

    if days_requested > available {
        return Err(EngineError::InsufficientBalance {
            requested: days_requested,
            available,
        });
    }

    Ok(SubmissionCheck {
        requested: days_requested,
        available,
        remaining_after: available - days_requested,
    })
}

/// Days the stored request currently deducts from the current period.
fn prior_contribution(periods: &[EntitlementPeriod], request: &LeaveRequest) -> u32 {
    if !request.status.counts_against_balance() {
        return 0;
    }

    periods
        .iter()
        .find(|p| p.status == PeriodStatus::Current)
        .filter(|p| p.contains_date(request.start_date))
        .map(|_| request.days_requested)
        .unwrap_or(0)
}
