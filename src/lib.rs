//! Vacation Entitlement Engine
//!
//! This crate computes statutory vacation entitlement from an employee's hire
//! date and leave history: one entitlement period per service year, the days
//! taken and pending in each, and the balance available today.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
