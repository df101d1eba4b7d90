//! Balance report assembly.
//!
//! Runs the period generator and the summary aggregator for one employee and
//! records an audit step per period plus warnings for data the engine handled
//! by policy rather than by rejecting it.

use std::time::Instant;

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, BalanceReport, BalanceSummary, Employee,
    EntitlementPeriod, LeaveRequest, PeriodStatus,
};

use super::entitlement_table::EntitlementTable;
use super::period_generator::generate_periods;
use super::summary::summarize;

/// Warning code: no hire date is on file.
pub const WARNING_NO_HIRE_DATE: &str = "NO_HIRE_DATE";
/// Warning code: the hire date is after the evaluation date.
pub const WARNING_HIRE_DATE_IN_FUTURE: &str = "HIRE_DATE_IN_FUTURE";
/// Warning code: approved leave exceeds a period's entitlement.
pub const WARNING_OVER_CONSUMPTION: &str = "OVER_CONSUMPTION";
/// Warning code: a counted request ends after its period's anniversary.
pub const WARNING_SPANS_PERIOD_BOUNDARY: &str = "SPANS_PERIOD_BOUNDARY";
/// Warning code: a counted request starts outside every generated period.
pub const WARNING_OUTSIDE_SERVICE: &str = "OUTSIDE_SERVICE";

/// Builds the full balance report for an employee.
///
/// # Arguments
///
/// * `employee` - The employee, carrying the hire date
/// * `requests` - The employee's leave request history
/// * `today` - The calendar date to evaluate against
/// * `table` - The entitlement schedule to apply
///
/// # Errors
///
/// Propagates `DateOutOfRange` from period generation.
///
/// # Examples
///
/// ```
/// use vacation_engine::calculation::{EntitlementTable, build_balance_report};
/// use vacation_engine::models::Employee;
/// use chrono::NaiveDate;
///
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     hire_date: NaiveDate::from_ymd_opt(2022, 1, 10),
/// };
/// let today = NaiveDate::from_ymd_opt(2026, 2, 5).unwrap();
///
/// let report = build_balance_report(&employee, &[], today, &EntitlementTable::statutory()).unwrap();
/// assert_eq!(report.summary.current_remaining, 18);
/// assert_eq!(report.periods.len(), 5);
/// ```
pub fn build_balance_report(
    employee: &Employee,
    requests: &[LeaveRequest],
    today: NaiveDate,
    table: &EntitlementTable,
) -> EngineResult<BalanceReport> {
    let start_time = Instant::now();

    let periods = generate_periods(employee.hire_date, requests, today, table)?;
    let summary = summarize(&periods);

    let mut steps = Vec::with_capacity(periods.len() + 1);
    let mut step_number: u32 = 1;
    for period in periods.iter().rev() {
        steps.push(period_step(period, step_number));
        step_number += 1;
    }
    steps.push(summary_step(&summary, periods.len(), step_number));

    let warnings = collect_warnings(employee, requests, &periods, today);

    Ok(BalanceReport {
        report_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        employee_id: employee.id.clone(),
        as_of: today,
        periods,
        summary,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us: start_time.elapsed().as_micros() as u64,
        },
    })
}

fn status_name(status: PeriodStatus) -> &'static str {
    match status {
        PeriodStatus::Expired => "expired",
        PeriodStatus::Current => "current",
        PeriodStatus::Future => "future",
    }
}

fn period_step(period: &EntitlementPeriod, step_number: u32) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: "entitlement_period".to_string(),
        rule_name: "Entitlement Period".to_string(),
        input: serde_json::json!({
            "completed_years": period.id,
            "start_date": period.start_date.to_string(),
            "end_date": period.end_date.to_string()
        }),
        output: serde_json::json!({
            "days_entitled": period.days_entitled,
            "days_taken": period.days_taken,
            "days_pending": period.days_pending,
            "status": status_name(period.status)
        }),
        reasoning: format!(
            "Period {} starts after {} completed years: {} days entitled, {} taken, {} pending ({})",
            period.label,
            period.id,
            period.days_entitled,
            period.days_taken,
            period.days_pending,
            status_name(period.status)
        ),
    }
}

fn summary_step(summary: &BalanceSummary, period_count: usize, step_number: u32) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: "balance_summary".to_string(),
        rule_name: "Balance Summary".to_string(),
        input: serde_json::json!({ "period_count": period_count }),
        output: serde_json::json!({
            "total_accrued": summary.total_accrued,
            "total_taken": summary.total_taken,
            "accrued_expired": summary.accrued_expired,
            "future": summary.future,
            "current_remaining": summary.current_remaining
        }),
        reasoning: format!(
            "{} days accrued, {} taken, {} forfeited in expired periods, {} pending; {} remaining in the current period",
            summary.total_accrued,
            summary.total_taken,
            summary.accrued_expired,
            summary.future,
            summary.current_remaining
        ),
    }
}

fn warning(code: &str, message: String, severity: &str) -> AuditWarning {
    AuditWarning {
        code: code.to_string(),
        message,
        severity: severity.to_string(),
    }
}

fn collect_warnings(
    employee: &Employee,
    requests: &[LeaveRequest],
    periods: &[EntitlementPeriod],
    today: NaiveDate,
) -> Vec<AuditWarning> {
    let mut warnings = Vec::new();

    match employee.hire_date {
        None => warnings.push(warning(
            WARNING_NO_HIRE_DATE,
            format!("Employee '{}' has no hire date; no entitlement accrued", employee.id),
            "low",
        )),
        Some(hired) if !employee.is_in_service_on(today) => warnings.push(warning(
            WARNING_HIRE_DATE_IN_FUTURE,
            format!("Hire date {} is after {}; no entitlement accrued yet", hired, today),
            "low",
        )),
        Some(_) => {}
    }

    for period in periods.iter().filter(|p| p.is_over_consumed()) {
        warnings.push(warning(
            WARNING_OVER_CONSUMPTION,
            format!(
                "Period {} has {} approved days against {} entitled; unused days clamped to zero",
                period.label, period.days_taken, period.days_entitled
            ),
            "medium",
        ));
    }

    if periods.is_empty() {
        return warnings;
    }

    for request in requests.iter().filter(|r| r.status.counts_against_balance()) {
        match periods.iter().find(|p| p.contains_date(request.start_date)) {
            Some(period) if request.end_date >= period.end_date => {
                warnings.push(warning(
                    WARNING_SPANS_PERIOD_BOUNDARY,
                    format!(
                        "Request '{}' ends {} after period {} closes on {}; all {} days counted in that period",
                        request.id,
                        request.end_date,
                        period.label,
                        period.end_date,
                        request.days_requested
                    ),
                    "low",
                ));
            }
            Some(_) => {}
            None => {
                warnings.push(warning(
                    WARNING_OUTSIDE_SERVICE,
                    format!(
                        "Request '{}' starts {} outside every entitlement period; not counted",
                        request.id, request.start_date
                    ),
                    "medium",
                ));
            }
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LeaveStatus;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn employee(hire_date: Option<NaiveDate>) -> Employee {
        Employee {
            id: "emp_001".to_string(),
            hire_date,
        }
    }

    fn request(
        id: &str,
        start: NaiveDate,
        end: NaiveDate,
        days: u32,
        status: LeaveStatus,
    ) -> LeaveRequest {
        LeaveRequest {
            id: id.to_string(),
            start_date: start,
            end_date: end,
            days_requested: days,
            status,
            leave_type: "vacation".to_string(),
        }
    }

    fn build(
        hire: Option<NaiveDate>,
        requests: &[LeaveRequest],
        today: NaiveDate,
    ) -> BalanceReport {
        build_balance_report(&employee(hire), requests, today, &EntitlementTable::statutory())
            .unwrap()
    }

    #[test]
    fn test_report_for_scenario_b() {
        let requests = vec![request(
            "req_001",
            date(2024, 8, 1),
            date(2024, 8, 5),
            5,
            LeaveStatus::Approved,
        )];

        let report = build(Some(date(2021, 7, 12)), &requests, date(2025, 8, 1));

        assert_eq!(report.employee_id, "emp_001");
        assert_eq!(report.as_of, date(2025, 8, 1));
        assert_eq!(report.periods.len(), 5);
        assert_eq!(report.summary.total_accrued, 60);
        assert_eq!(report.summary.total_taken, 5);
        assert_eq!(report.summary.accrued_expired, 12 + 14 + 11);
        assert_eq!(report.summary.current_remaining, 18);
        assert!(report.audit_trace.warnings.is_empty());
    }

    #[test]
    fn test_steps_cover_every_period_then_summary() {
        let report = build(Some(date(2022, 1, 10)), &[], date(2026, 2, 5));

        let steps = &report.audit_trace.steps;
        assert_eq!(steps.len(), 6);
        assert_eq!(steps[0].rule_id, "entitlement_period");
        assert_eq!(steps[0].input["completed_years"], 0);
        assert_eq!(steps[4].output["days_entitled"], 18);
        assert_eq!(steps[4].output["status"], "current");
        assert_eq!(steps[5].rule_id, "balance_summary");
        assert_eq!(steps[5].output["current_remaining"], 18);
        assert_eq!(steps[5].output["total_accrued"], 60);
        assert_eq!(steps[5].output["accrued_expired"], 42);
        assert_eq!(steps[5].output["total_taken"], 0);
        assert_eq!(steps[5].output["future"], 0);

        for (index, step) in steps.iter().enumerate() {
            assert_eq!(step.step_number, index as u32 + 1);
        }
    }

    #[test]
    fn test_reasoning_mentions_label_and_days() {
        let report = build(Some(date(2022, 1, 10)), &[], date(2026, 2, 5));
        let first = &report.audit_trace.steps[1];
        assert!(first.reasoning.contains("2023-2024"));
        assert!(first.reasoning.contains("12 days entitled"));
    }

    #[test]
    fn test_missing_hire_date_warns_and_zeroes() {
        let report = build(None, &[], date(2026, 2, 5));

        assert!(report.periods.is_empty());
        assert_eq!(report.summary, BalanceSummary::default());
        assert!(report.has_warning(WARNING_NO_HIRE_DATE));
        assert_eq!(report.audit_trace.steps.len(), 1);
    }

    #[test]
    fn test_hired_today_is_in_service_without_warning() {
        let report = build(Some(date(2026, 2, 5)), &[], date(2026, 2, 5));

        assert_eq!(report.periods.len(), 1);
        assert!(!report.has_warning(WARNING_HIRE_DATE_IN_FUTURE));
        assert_eq!(report.current_period().unwrap().days_entitled, 0);
    }

    #[test]
    fn test_future_hire_date_warns() {
        let report = build(Some(date(2027, 1, 1)), &[], date(2026, 2, 5));

        assert!(report.periods.is_empty());
        assert!(report.has_warning(WARNING_HIRE_DATE_IN_FUTURE));
    }

    #[test]
    fn test_over_consumption_warns() {
        let requests = vec![request(
            "req_001",
            date(2023, 2, 1),
            date(2023, 3, 1),
            20,
            LeaveStatus::Approved,
        )];

        let report = build(Some(date(2022, 1, 10)), &requests, date(2026, 2, 5));

        assert!(report.has_warning(WARNING_OVER_CONSUMPTION));
        assert_eq!(report.summary.accrued_expired, 14 + 16);
    }

    #[test]
    fn test_request_spanning_anniversary_warns() {
        let requests = vec![request(
            "req_span",
            date(2025, 1, 5),
            date(2025, 1, 14),
            8,
            LeaveStatus::Requested,
        )];

        let report = build(Some(date(2022, 1, 10)), &requests, date(2026, 2, 5));

        assert!(report.has_warning(WARNING_SPANS_PERIOD_BOUNDARY));
    }

    #[test]
    fn test_rejected_requests_never_warn() {
        let requests = vec![
            request(
                "req_old",
                date(2019, 1, 5),
                date(2019, 1, 6),
                2,
                LeaveStatus::Rejected,
            ),
            request(
                "req_span",
                date(2025, 1, 5),
                date(2025, 1, 14),
                8,
                LeaveStatus::Rejected,
            ),
        ];

        let report = build(Some(date(2022, 1, 10)), &requests, date(2026, 2, 5));

        assert!(report.audit_trace.warnings.is_empty());
    }

    #[test]
    fn test_request_before_hire_warns_outside_service() {
        let requests = vec![request(
            "req_old",
            date(2021, 12, 20),
            date(2021, 12, 21),
            2,
            LeaveStatus::Approved,
        )];

        let report = build(Some(date(2022, 1, 10)), &requests, date(2026, 2, 5));

        assert!(report.has_warning(WARNING_OUTSIDE_SERVICE));
        assert_eq!(report.summary.total_taken, 0);
    }

    #[test]
    fn test_report_carries_engine_version() {
        let report = build(Some(date(2022, 1, 10)), &[], date(2026, 2, 5));
        assert_eq!(report.engine_version, env!("CARGO_PKG_VERSION"));
    }
}
