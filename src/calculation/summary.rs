//! Balance summary aggregation.

use crate::models::{BalanceSummary, EntitlementPeriod, PeriodStatus};

/// Reduces a list of entitlement periods into a single [`BalanceSummary`].
///
/// Every period contributes to `total_accrued`, `total_taken` and `future`.
/// Expired periods contribute their unused days, clamped at zero per period,
/// to `accrued_expired`. `current_remaining` is taken from the current period
/// and stays zero if there is none.
///
/// Never fails: an empty list produces the all-zero summary.
///
/// # Examples
///
/// ```
/// use vacation_engine::calculation::summarize;
/// use vacation_engine::models::BalanceSummary;
///
/// assert_eq!(summarize(&[]), BalanceSummary::default());
/// ```
pub fn summarize(periods: &[EntitlementPeriod]) -> BalanceSummary {
    periods
        .iter()
        .fold(BalanceSummary::default(), |mut summary, period| {
            summary.total_accrued = summary.total_accrued.saturating_add(period.days_entitled);
            summary.total_taken = summary.total_taken.saturating_add(period.days_taken);
            summary.future = summary.future.saturating_add(period.days_pending);

            match period.status {
                PeriodStatus::Expired => {
                    summary.accrued_expired =
                        summary.accrued_expired.saturating_add(period.unused_days());
                }
                PeriodStatus::Current => {
                    summary.current_remaining = period.remaining_days();
                }
                PeriodStatus::Future => {}
            }

            summary
        })
}
