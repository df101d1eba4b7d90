//! Employee model.
//!
//! The engine only needs an employee's identity and hire date; every other
//! personnel attribute stays with the data store.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An employee whose vacation balance is being computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The date service began. `None` means no entitlement history exists yet.
    #[serde(default)]
    pub hire_date: Option<NaiveDate>,
}

impl Employee {
    /// Returns true if the employee had started service on `date`.
    ///
    /// # Examples
    ///
    /// ```
    /// use vacation_engine::models::Employee;
    /// use chrono::NaiveDate;
    ///
    /// let employee = Employee {
    ///     id: "emp_001".to_string(),
    ///     hire_date: NaiveDate::from_ymd_opt(2022, 1, 10),
    /// };
    /// assert!(employee.is_in_service_on(NaiveDate::from_ymd_opt(2022, 1, 10).unwrap()));
    /// assert!(!employee.is_in_service_on(NaiveDate::from_ymd_opt(2022, 1, 9).unwrap()));
    /// ```
    pub fn is_in_service_on(&self, date: NaiveDate) -> bool {
        self.hire_date.is_some_and(|hired| hired <= date)
    }
}
