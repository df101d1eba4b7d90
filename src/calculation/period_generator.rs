//! Entitlement period generation.
//!
//! This module builds the sequence of annual entitlement periods from an
//! employee's hire date up to and including the period that contains "today",
//! and books each leave request into the period its start date falls in.

use chrono::NaiveDate;

use crate::error::EngineResult;
use crate::models::{EntitlementPeriod, LeaveRequest, LeaveStatus, PeriodStatus};

use super::date_utils::{add_years, local_today, period_label};
use super::entitlement_table::EntitlementTable;

/// Generates the entitlement periods for an employee, newest first.
///
/// Starting at `hire_date`, each period runs from its start to one year later
/// and the next period starts where it ends, until a period contains `today`. The period built on
/// iteration `k` is entitled to `table.days_for(k)`; the iteration count is the
/// number of completed years and is never recomputed from a date difference.
///
/// Requests are bucketed solely by `start_date`. Approved requests add to
/// `days_taken`, requested ones to `days_pending`, and rejected ones are ignored.
///
/// # Arguments
///
/// * `hire_date` - Start of service, or `None` if unknown
/// * `requests` - The employee's leave request history
/// * `today` - The calendar date the periods are evaluated against
/// * `table` - The entitlement schedule to apply
///
/// # Returns
///
/// The periods in reverse chronological order. An absent hire date or a hire
/// date after `today` yields an empty list.
///
/// # Errors
///
/// Returns `DateOutOfRange` if an anniversary cannot be represented. No partial
/// result is returned in that case.
///
/// # Examples
///
/// ```
/// use vacation_engine::calculation::{EntitlementTable, generate_periods};
/// use vacation_engine::models::PeriodStatus;
/// use chrono::NaiveDate;
///
/// let hire = NaiveDate::from_ymd_opt(2022, 1, 10).unwrap();
/// let today = NaiveDate::from_ymd_opt(2026, 2, 5).unwrap();
///
/// let periods = generate_periods(Some(hire), &[], today, &EntitlementTable::statutory()).unwrap();
///
/// let entitled: Vec<u32> = periods.iter().map(|p| p.days_entitled).collect();
/// assert_eq!(entitled, vec![18, 16, 14, 12, 0]);
/// assert_eq!(periods[0].status, PeriodStatus::Current);
/// assert_eq!(periods[0].label, "2026-2027");
/// ```
pub fn generate_periods(
    hire_date: Option<NaiveDate>,
    requests: &[LeaveRequest],
    today: NaiveDate,
    table: &EntitlementTable,
) -> EngineResult<Vec<EntitlementPeriod>> {
    let Some(hire_date) = hire_date else {
        return Ok(Vec::new());
    };

    let mut periods = Vec::new();
    let mut years_completed: u32 = 0;
    let mut start = hire_date;

    while start <= today {
        let end = add_years(start, 1)?;
        let (days_taken, days_pending) = consumption_within(requests, start, end);

        periods.push(EntitlementPeriod {
            id: years_completed,
            label: period_label(start, end),
            start_date: start,
            end_date: end,
            days_entitled: table.days_for(years_completed),
            days_taken,
            days_pending,
            status: PeriodStatus::classify(start, end, today),
        });

        years_completed += 1;
        start = end;
    }

    periods.reverse();
    Ok(periods)
}

/// Generates the entitlement periods evaluated against the local calendar date.
///
/// See [`generate_periods`] for the full contract.
pub fn generate_periods_as_of_today(
    hire_date: Option<NaiveDate>,
    requests: &[LeaveRequest],
    table: &EntitlementTable,
) -> EngineResult<Vec<EntitlementPeriod>> {
    generate_periods(hire_date, requests, local_today(), table)
}

/// Sums approved and requested days for requests starting in `[start, end)`.
fn consumption_within(requests: &[LeaveRequest], start: NaiveDate, end: NaiveDate) -> (u32, u32) {
    requests
        .iter()
        .filter(|r| r.starts_within(start, end))
        .fold((0u32, 0u32), |(taken, pending), r| match r.status {
            LeaveStatus::Approved => (taken.saturating_add(r.days_requested), pending),
            LeaveStatus::Requested => (taken, pending.saturating_add(r.days_requested)),
            LeaveStatus::Rejected => (taken, pending),
        })
}
