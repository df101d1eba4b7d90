//! Configuration types for vacation policies.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::{Deserialize, Serialize};

use crate::calculation::{EntitlementTable, EntitlementTier};

/// Metadata about the vacation policy.
///
/// Identifies the statute or internal policy the entitlement schedule
/// implements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyMetadata {
    /// Short code for the policy (e.g., "LFT-76").
    pub code: String,
    /// The human-readable name of the policy.
    pub name: String,
    /// The version or effective date of the policy.
    pub version: String,
    /// URL to the official text.
    pub source_url: String,
}

impl PolicyMetadata {
    /// Metadata for the built-in statutory schedule.
    pub fn statutory() -> Self {
        Self {
            code: "LFT-76".to_string(),
            name: "Ley Federal del Trabajo, Art. 76".to_string(),
            version: "2023-01-01".to_string(),
            source_url: "https://www.diputados.gob.mx/LeyesBiblio/pdf/LFT.pdf".to_string(),
        }
    }
}

/// Entitlements configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct EntitlementsConfig {
    /// Tiers of the schedule, lowest completed years first.
    pub tiers: Vec<EntitlementTier>,
}

/// The complete policy configuration.
///
/// The entitlement table has already been validated when this value exists.
#[derive(Debug, Clone)]
pub struct PolicyConfig {
    metadata: PolicyMetadata,
    table: EntitlementTable,
}

impl PolicyConfig {
    /// Creates a new PolicyConfig from its component parts.
    pub fn new(metadata: PolicyMetadata, table: EntitlementTable) -> Self {
        Self { metadata, table }
    }

    /// Returns the policy metadata.
    pub fn policy(&self) -> &PolicyMetadata {
        &self.metadata
    }

    /// Returns the entitlement table.
    pub fn table(&self) -> &EntitlementTable {
        &self.table
    }
}
