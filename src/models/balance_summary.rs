//! Balance summary model.

use serde::{Deserialize, Serialize};

/// A snapshot of an employee's vacation balance across all periods.
///
/// The default value is the all-zero summary returned when there is no
/// entitlement history.
///
/// # Example
///
/// ```
/// use vacation_engine::models::BalanceSummary;
///
/// let summary = BalanceSummary::default();
/// assert_eq!(summary.total_accrued, 0);
/// assert_eq!(summary.current_remaining, 0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSummary {
    /// Sum of statutory entitlement across all periods.
    pub total_accrued: u32,
    /// Lifetime approved consumption.
    pub total_taken: u32,
    /// Unused entitlement of expired periods, forfeited.
    pub accrued_expired: u32,
    /// Days requested and still awaiting a decision, across all periods.
    pub future: u32,
    /// Days still available in the current period.
    pub current_remaining: u32,
}
