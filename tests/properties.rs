//! Property-based tests for period generation and balance aggregation.
//!
//! Hire dates, evaluation dates and leave histories are drawn at random; every
//! generated history must satisfy the structural guarantees of the engine.

use chrono::{Days, NaiveDate};
use proptest::prelude::*;

use vacation_engine::calculation::{
    EntitlementTable, add_years, days_for_completed_years, generate_periods, summarize,
};
use vacation_engine::models::{EntitlementPeriod, LeaveRequest, LeaveStatus, PeriodStatus};

// =============================================================================
// Strategies
// =============================================================================

fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1950, 1, 1).unwrap()
}

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (0u64..36_500).prop_map(|offset| epoch() + Days::new(offset))
}

/// A leap-day hire date between 1952 and 2048.
fn arb_leap_day() -> impl Strategy<Value = NaiveDate> {
    (0i32..25).prop_map(|n| NaiveDate::from_ymd_opt(1952 + 4 * n, 2, 29).unwrap())
}

fn arb_hire_and_today() -> impl Strategy<Value = (NaiveDate, NaiveDate)> {
    (prop_oneof![arb_date(), arb_leap_day()], 0u64..20_000)
        .prop_map(|(hire, service)| (hire, hire + Days::new(service)))
}

fn arb_status() -> impl Strategy<Value = LeaveStatus> {
    prop_oneof![
        Just(LeaveStatus::Requested),
        Just(LeaveStatus::Approved),
        Just(LeaveStatus::Rejected),
    ]
}

fn arb_requests(hire: NaiveDate) -> impl Strategy<Value = Vec<LeaveRequest>> {
    prop::collection::vec((0u64..21_000, 0u32..40, arb_status()), 0..20).prop_map(
        move |records| {
            records
                .into_iter()
                .enumerate()
                .map(|(i, (offset, days, status))| {
                    // some records start up to a year before the hire date
                    let start = hire
                        .checked_sub_days(Days::new(365))
                        .unwrap_or(hire)
                        + Days::new(offset);
                    LeaveRequest {
                        id: format!("req_{:03}", i),
                        start_date: start,
                        end_date: start + Days::new(u64::from(days)),
                        days_requested: days,
                        status,
                        leave_type: "vacation".to_string(),
                    }
                })
                .collect()
        },
    )
}

fn arb_scenario() -> impl Strategy<Value = (NaiveDate, NaiveDate, Vec<LeaveRequest>)> {
    arb_hire_and_today().prop_flat_map(|(hire, today)| {
        arb_requests(hire).prop_map(move |requests| (hire, today, requests))
    })
}

// =============================================================================
// Helpers
// =============================================================================

/// Whole years between `hire` and `today`, stepping one year at a time.
fn whole_years(hire: NaiveDate, today: NaiveDate) -> usize {
    std::iter::successors(Some(hire), |&date| Some(add_years(date, 1).unwrap()))
        .skip(1)
        .take_while(|&date| date <= today)
        .count()
}

fn periods_for(
    hire: NaiveDate,
    today: NaiveDate,
    requests: &[LeaveRequest],
) -> Vec<EntitlementPeriod> {
    generate_periods(Some(hire), requests, today, &EntitlementTable::statutory()).unwrap()
}

// =============================================================================
// Period structure
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn period_count_is_whole_years_plus_one((hire, today) in arb_hire_and_today()) {
        let periods = periods_for(hire, today, &[]);
        prop_assert_eq!(periods.len(), whole_years(hire, today) + 1);
    }

    #[test]
    fn periods_are_contiguous_one_year_windows((hire, today) in arb_hire_and_today()) {
        let periods = periods_for(hire, today, &[]);

        prop_assert_eq!(periods.last().unwrap().start_date, hire);
        for pair in periods.windows(2) {
            prop_assert_eq!(pair[1].end_date, pair[0].start_date);
            prop_assert_eq!(pair[0].id, pair[1].id + 1);
        }
        for period in &periods {
            prop_assert_eq!(period.end_date, add_years(period.start_date, 1).unwrap());
        }
    }

    #[test]
    fn exactly_one_current_period_contains_today((hire, today) in arb_hire_and_today()) {
        let periods = periods_for(hire, today, &[]);

        let current: Vec<&EntitlementPeriod> = periods
            .iter()
            .filter(|p| p.status == PeriodStatus::Current)
            .collect();
        prop_assert_eq!(current.len(), 1);
        prop_assert!(current[0].contains_date(today));
        prop_assert_eq!(current[0].id as usize, periods.len() - 1);
        prop_assert!(periods.iter().all(|p| p.status != PeriodStatus::Future));
    }

    #[test]
    fn entitlement_follows_completed_years((hire, today) in arb_hire_and_today()) {
        for period in periods_for(hire, today, &[]) {
            prop_assert_eq!(period.days_entitled, days_for_completed_years(period.id));
        }
    }

    #[test]
    fn hire_after_today_yields_nothing(today in arb_date(), gap in 1u64..4_000) {
        let hire = today + Days::new(gap);
        prop_assert!(periods_for(hire, today, &[]).is_empty());
    }
}

// =============================================================================
// Entitlement schedule
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn entitlement_is_monotone(years in 0u32..1_000) {
        prop_assert!(days_for_completed_years(years) <= days_for_completed_years(years + 1));
    }

    #[test]
    fn entitlement_caps_at_top_tier(years in 31u32..u32::MAX) {
        prop_assert_eq!(days_for_completed_years(years), 32);
    }
}

// =============================================================================
// Balances
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn balances_are_bounded((hire, today, requests) in arb_scenario()) {
        let periods = periods_for(hire, today, &requests);
        let summary = summarize(&periods);

        for period in &periods {
            prop_assert!(period.unused_days() <= period.days_entitled);
            prop_assert!(period.remaining_days() <= period.unused_days());
        }
        prop_assert!(summary.accrued_expired <= summary.total_accrued);
        prop_assert!(summary.current_remaining <= days_for_completed_years(u32::MAX));
    }

    #[test]
    fn consumption_matches_counted_requests((hire, today, requests) in arb_scenario()) {
        let periods = periods_for(hire, today, &requests);
        let summary = summarize(&periods);

        let first = periods.last().unwrap().start_date;
        let last = periods.first().unwrap().end_date;
        let counted = |status: LeaveStatus| -> u32 {
            requests
                .iter()
                .filter(|r| r.status == status && r.starts_within(first, last))
                .map(|r| r.days_requested)
                .sum()
        };

        prop_assert_eq!(summary.total_taken, counted(LeaveStatus::Approved));
        prop_assert_eq!(summary.future, counted(LeaveStatus::Requested));
    }

    #[test]
    fn rejected_requests_are_inert((hire, today, requests) in arb_scenario()) {
        let kept: Vec<LeaveRequest> = requests
            .iter()
            .filter(|r| r.status != LeaveStatus::Rejected)
            .cloned()
            .collect();

        prop_assert_eq!(periods_for(hire, today, &requests), periods_for(hire, today, &kept));
    }

    #[test]
    fn request_order_is_irrelevant((hire, today, requests) in arb_scenario()) {
        let mut reversed = requests.clone();
        reversed.reverse();

        prop_assert_eq!(periods_for(hire, today, &requests), periods_for(hire, today, &reversed));
    }

    #[test]
    fn generation_is_idempotent((hire, today, requests) in arb_scenario()) {
        let first = periods_for(hire, today, &requests);
        let second = periods_for(hire, today, &requests);

        prop_assert_eq!(summarize(&first), summarize(&second));
        prop_assert_eq!(first, second);
    }
}
