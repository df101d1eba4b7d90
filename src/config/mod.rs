//! Configuration loading and management for the Vacation Entitlement Engine.
//!
//! This module loads vacation policies (metadata plus the completed-years to
//! days schedule) from YAML files, or provides the built-in statutory policy.
//!
//! # Example
//!
//! ```no_run
//! use vacation_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/lft").unwrap();
//! println!("Loaded policy: {}", config.policy().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EntitlementsConfig, PolicyConfig, PolicyMetadata};
