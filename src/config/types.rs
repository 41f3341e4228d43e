//! Configuration types for the rotation engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

use crate::models::{Employee, EmployeeRecord};

/// Metadata about the station being planned.
#[derive(Debug, Clone, Deserialize)]
pub struct StationMetadata {
    /// Short station code (e.g., "DKR-01").
    pub code: String,
    /// The human-readable name of the station.
    pub name: String,
    /// Longest span, in days, a single projection request may cover.
    #[serde(default = "default_max_range_days")]
    pub max_range_days: u32,
}

fn default_max_range_days() -> u32 {
    366
}

/// Roster configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct RosterConfig {
    /// Employees in their persisted shape.
    pub employees: Vec<EmployeeRecord>,
}

/// The complete station configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct StationConfig {
    metadata: StationMetadata,
    employees: Vec<Employee>,
}

impl StationConfig {
    /// Creates a new StationConfig from its component parts.
    pub fn new(metadata: StationMetadata, employees: Vec<Employee>) -> Self {
        Self {
            metadata,
            employees,
        }
    }

    /// Returns the station metadata.
    pub fn station(&self) -> &StationMetadata {
        &self.metadata
    }

    /// Returns the roster, in file order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }
}
