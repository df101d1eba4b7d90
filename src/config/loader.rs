//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading vacation
//! policies from YAML files.

use std::fs;
use std::path::Path;

use crate::calculation::EntitlementTable;
use crate::error::{EngineError, EngineResult};

use super::types::{EntitlementsConfig, PolicyConfig, PolicyMetadata};

/// Loads and provides access to a vacation policy.
///
/// # Directory Structure
///
/// ```text
/// config/lft/
/// ├── policy.yaml        # Policy metadata
/// └── entitlements.yaml  # Completed years -> days schedule
/// ```
///
/// # Example
///
/// ```no_run
/// use vacation_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/lft").unwrap();
/// println!("Policy: {}", loader.policy().name);
/// println!("Days after 3 years: {}", loader.table().days_for(3));
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PolicyConfig,
}

impl ConfigLoader {
    /// Loads a policy from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the policy directory (e.g., "./config/lft")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - Either file is missing (`ConfigNotFound`)
    /// - Either file contains invalid YAML (`ConfigParseError`)
    /// - The tiers do not form a valid schedule (`InvalidEntitlementTable`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<PolicyMetadata>(&path.join("policy.yaml"))?;
        let entitlements = Self::load_yaml::<EntitlementsConfig>(&path.join("entitlements.yaml"))?;
        let table = EntitlementTable::new(entitlements.tiers)?;

        Ok(Self {
            config: PolicyConfig::new(metadata, table),
        })
    }

    /// Returns a loader holding the built-in statutory policy.
    ///
    /// # Example
    ///
    /// ```
    /// use vacation_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::statutory();
    /// assert_eq!(loader.table().days_for(1), 12);
    /// ```
    pub fn statutory() -> Self {
        Self {
            config: PolicyConfig::new(PolicyMetadata::statutory(), EntitlementTable::statutory()),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the policy metadata.
    pub fn policy(&self) -> &PolicyMetadata {
        self.config.policy()
    }

    /// Returns the entitlement table.
    pub fn table(&self) -> &EntitlementTable {
        self.config.table()
    }
}
