//! Entitlement period model.
//!
//! An [`EntitlementPeriod`] is one service year anchored to the hire-date
//! anniversary, together with its statutory entitlement and the consumption
//! booked against it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Where "today" falls relative to a period's window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodStatus {
    /// Today is on or after the period's end date.
    Expired,
    /// Today lies inside `[start_date, end_date)`.
    Current,
    /// Today is before the period's start date.
    Future,
}

impl PeriodStatus {
    /// Classifies `today` against the half-open window `[start, end)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use vacation_engine::models::PeriodStatus;
    /// use chrono::NaiveDate;
    ///
    /// let start = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
    /// let end = NaiveDate::from_ymd_opt(2026, 1, 10).unwrap();
    ///
    /// assert_eq!(PeriodStatus::classify(start, end, start), PeriodStatus::Current);
    /// assert_eq!(PeriodStatus::classify(start, end, end), PeriodStatus::Expired);
    /// assert_eq!(
    ///     PeriodStatus::classify(start, end, start.pred_opt().unwrap()),
    ///     PeriodStatus::Future
    /// );
    /// ```
    pub fn classify(start: NaiveDate, end: NaiveDate, today: NaiveDate) -> Self {
        if today < start {
            PeriodStatus::Future
        } else if today < end {
            PeriodStatus::Current
        } else {
            PeriodStatus::Expired
        }
    }
}

/// A single entitlement period in an employee's accrual history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitlementPeriod {
    /// Completed years of service at the start of the period.
    pub id: u32,
    /// Human-readable span such as "2023-2024".
    pub label: String,
    /// First day of the period (inclusive).
    pub start_date: NaiveDate,
    /// Next anniversary (exclusive).
    pub end_date: NaiveDate,
    /// Statutory days accrued for this period.
    pub days_entitled: u32,
    /// Days of approved leave starting in this period.
    pub days_taken: u32,
    /// Days of requested, undecided leave starting in this period.
    pub days_pending: u32,
    /// Lifecycle status relative to "today".
    pub status: PeriodStatus,
}

impl EntitlementPeriod {
    /// Returns true if `date` lies within `[start_date, end_date)`.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date < self.end_date
    }

    /// Entitlement left over after approved leave, clamped at zero.
    pub fn unused_days(&self) -> u32 {
        self.days_entitled.saturating_sub(self.days_taken)
    }

    /// Entitlement left over after approved and pending leave, clamped at zero.
    pub fn remaining_days(&self) -> u32 {
        self.days_entitled
            .saturating_sub(self.days_taken)
            .saturating_sub(self.days_pending)
    }

    /// Returns true if approved leave exceeds the entitlement.
    pub fn is_over_consumed(&self) -> bool {
        self.days_taken > self.days_entitled
    }
}
