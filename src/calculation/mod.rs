//! Calculation logic for the Vacation Entitlement Engine.
//!
//! This module contains the entitlement table lookup, calendar-date helpers,
//! the period generator, the summary aggregator, the submission balance check
//! and the balance report that ties them together.

mod date_utils;
mod entitlement_table;
mod period_generator;
mod report;
mod submission;
mod summary;

pub use date_utils::{add_years, local_today, parse_calendar_date, period_label};
pub use entitlement_table::{
    EntitlementTable, EntitlementTier, STATUTORY_TIERS, days_for_completed_years,
};
pub use period_generator::{generate_periods, generate_periods_as_of_today};
pub use report::{
    WARNING_HIRE_DATE_IN_FUTURE, WARNING_NO_HIRE_DATE, WARNING_OUTSIDE_SERVICE,
    WARNING_OVER_CONSUMPTION, WARNING_SPANS_PERIOD_BOUNDARY, build_balance_report,
};
pub use submission::{SubmissionCheck, check_submission};
pub use summary::summarize;
