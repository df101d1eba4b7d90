//! Entitlement table lookup.
//!
//! Maps completed years of service to statutory vacation days. The table is a
//! step function: each [`EntitlementTier`] covers an inclusive range of
//! completed years and the last tier is open-ended.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// One step of the entitlement schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitlementTier {
    /// Lowest number of completed years covered by this tier (inclusive).
    pub from_years: u32,
    /// Highest number of completed years covered (inclusive). `None` for the last tier.
    #[serde(default)]
    pub to_years: Option<u32>,
    /// Vacation days granted for a period starting in this tier.
    pub days: u32,
}

const fn tier(from_years: u32, to_years: Option<u32>, days: u32) -> EntitlementTier {
    EntitlementTier {
        from_years,
        to_years,
        days,
    }
}

/// The statutory vacation schedule.
pub const STATUTORY_TIERS: &[EntitlementTier] = &[
    tier(0, Some(0), 0),
    tier(1, Some(1), 12),
    tier(2, Some(2), 14),
    tier(3, Some(3), 16),
    tier(4, Some(4), 18),
    tier(5, Some(5), 20),
    tier(6, Some(10), 22),
    tier(11, Some(15), 24),
    tier(16, Some(20), 26),
    tier(21, Some(25), 28),
    tier(26, Some(30), 30),
    tier(31, None, 32),
];

fn lookup(tiers: &[EntitlementTier], years_completed: u32) -> u32 {
    tiers
        .iter()
        .rfind(|t| t.from_years <= years_completed)
        .map(|t| t.days)
        .unwrap_or(0)
}

/// Returns the statutory vacation days for a period that starts after
/// `years_completed` full years of service.
///
/// # Examples
///
/// ```
/// use vacation_engine::calculation::days_for_completed_years;
///
/// assert_eq!(days_for_completed_years(0), 0);
/// assert_eq!(days_for_completed_years(1), 12);
/// assert_eq!(days_for_completed_years(5), 20);
/// assert_eq!(days_for_completed_years(10), 22);
/// assert_eq!(days_for_completed_years(31), 32);
/// assert_eq!(days_for_completed_years(45), 32);
/// ```
pub fn days_for_completed_years(years_completed: u32) -> u32 {
    lookup(STATUTORY_TIERS, years_completed)
}

/// A validated entitlement schedule.
///
/// Construction guarantees the table starts at zero completed years, has no
/// gaps or overlaps, ends with a single open-ended tier, and never decreases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntitlementTable {
    tiers: Vec<EntitlementTier>,
}

impl EntitlementTable {
    /// Validates `tiers` and builds a table from them.
    ///
    /// # Errors
    ///
    /// Returns `InvalidEntitlementTable` if the tiers do not form a
    /// contiguous, non-decreasing step function starting at zero.
    pub fn new(tiers: Vec<EntitlementTier>) -> EngineResult<Self> {
        let invalid = |message: String| EngineError::InvalidEntitlementTable { message };

        let Some(first) = tiers.first() else {
            return Err(invalid("table has no tiers".to_string()));
        };
        if first.from_years != 0 {
            return Err(invalid(format!(
                "table must start at 0 completed years, starts at {}",
                first.from_years
            )));
        }

        for (index, pair) in tiers.windows(2).enumerate() {
            let (prev, next) = (pair[0], pair[1]);
            let Some(prev_to) = prev.to_years else {
                return Err(invalid(format!(
                    "tier {} is open-ended but is not the last tier",
                    index
                )));
            };
            if prev_to < prev.from_years {
                return Err(invalid(format!(
                    "tier {} ends at {} before it starts at {}",
                    index, prev_to, prev.from_years
                )));
            }
            if prev_to.checked_add(1) != Some(next.from_years) {
                return Err(invalid(format!(
                    "tier {} starts at {} but tier {} ends at {}",
                    index + 1,
                    next.from_years,
                    index,
                    prev_to
                )));
            }
            if next.days < prev.days {
                return Err(invalid(format!(
                    "tier {} grants {} days, fewer than the {} of tier {}",
                    index + 1,
                    next.days,
                    prev.days,
                    index
                )));
            }
        }

        if tiers.last().is_some_and(|t| t.to_years.is_some()) {
            return Err(invalid("last tier must be open-ended".to_string()));
        }

        Ok(Self { tiers })
    }

    /// Returns the built-in statutory table.
    pub fn statutory() -> Self {
        Self {
            tiers: STATUTORY_TIERS.to_vec(),
        }
    }

    /// Returns the days granted for a period starting after `years_completed` years.
    pub fn days_for(&self, years_completed: u32) -> u32 {
        lookup(&self.tiers, years_completed)
    }

    /// Returns the tiers of this table, lowest first.
    pub fn tiers(&self) -> &[EntitlementTier] {
        &self.tiers
    }
}

impl Default for EntitlementTable {
    fn default() -> Self {
        Self::statutory()
    }
}
