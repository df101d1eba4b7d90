//! Balance report models.
//!
//! This module contains the [`BalanceReport`] type returned to the profile
//! view, together with the audit trace that explains how every period and
//! the final summary were derived.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{BalanceSummary, EntitlementPeriod};

/// A single step in the audit trace recording a derivation.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated while building a report.
///
/// Warnings flag data that was handled by policy (clamping, bucketing by
/// start date) but that a reviewer may want to look at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level ("low", "medium" or "high").
    pub severity: String,
}

/// The complete audit trace for a balance computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// All derivation steps, in order.
    pub steps: Vec<AuditStep>,
    /// Warnings raised along the way.
    pub warnings: Vec<AuditWarning>,
    /// Time taken to build the report, in microseconds.
    pub duration_us: u64,
}

/// The full balance report for one employee.
///
/// Periods are ordered newest first, matching [`crate::calculation::generate_periods`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceReport {
    /// Unique identifier for this report.
    pub report_id: Uuid,
    /// When the report was produced.
    pub timestamp: DateTime<Utc>,
    /// Version of the engine that produced the report.
    pub engine_version: String,
    /// The employee the report is for.
    pub employee_id: String,
    /// The calendar date used as "today".
    pub as_of: NaiveDate,
    /// Entitlement periods, newest first.
    pub periods: Vec<EntitlementPeriod>,
    /// Aggregated balance.
    pub summary: BalanceSummary,
    /// How the result was derived.
    pub audit_trace: AuditTrace,
}

impl BalanceReport {
    /// Returns the period containing `as_of`, if any.
    pub fn current_period(&self) -> Option<&EntitlementPeriod> {
        self.periods
            .iter()
            .find(|p| p.status == super::PeriodStatus::Current)
    }

    /// Returns true if any warning with the given code was raised.
    pub fn has_warning(&self, code: &str) -> bool {
        self.audit_trace.warnings.iter().any(|w| w.code == code)
    }
}
