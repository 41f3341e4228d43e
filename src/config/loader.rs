//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a station's
//! roster from YAML files.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::Employee;

use super::types::{RosterConfig, StationConfig, StationMetadata};

/// Loads and provides access to a station's roster.
///
/// # Directory Structure
///
/// ```text
/// config/station/
/// ├── station.yaml   # Station metadata
/// └── roster.yaml    # Employees, teams, rest days and default shifts
/// ```
///
/// # Example
///
/// ```no_run
/// use rota_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/station").unwrap();
/// println!("Loaded station: {}", loader.station().name);
/// for employee in loader.employees() {
///     println!("{} ({:?})", employee.name, employee.team);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: StationConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - An employee has an out-of-range rest day or a duplicate id
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<StationMetadata>(&path.join("station.yaml"))?;
        let roster = Self::load_yaml::<RosterConfig>(&path.join("roster.yaml"))?;

        let employees = Self::build_roster(roster)?;
        debug!(
            station = %metadata.code,
            employees = employees.len(),
            "Loaded station roster"
        );

        Ok(Self {
            config: StationConfig::new(metadata, employees),
        })
    }

    /// Builds a loader from an in-memory roster.
    pub fn from_parts(metadata: StationMetadata, employees: Vec<Employee>) -> EngineResult<Self> {
        Self::check_unique_ids(&employees)?;
        Ok(Self {
            config: StationConfig::new(metadata, employees),
        })
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

    /// Converts persisted records into employees.
    fn build_roster(roster: RosterConfig) -> EngineResult<Vec<Employee>> {
        let employees = roster
            .employees
            .into_iter()
            .map(Employee::try_from)
            .collect::<EngineResult<Vec<_>>>()?;
        Self::check_unique_ids(&employees)?;
        Ok(employees)
    }

    fn check_unique_ids(employees: &[Employee]) -> EngineResult<()> {
        let mut seen = HashSet::new();
        for employee in employees {
            if !seen.insert(employee.id.as_str()) {
                return Err(EngineError::InvalidEmployee {
                    field: "id".to_string(),
                    message: format!("duplicate employee id '{}'", employee.id),
                });
            }
        }
        Ok(())
    }

    /// Returns the station metadata.
    pub fn station(&self) -> &StationMetadata {
        self.config.station()
    }

    /// Returns the whole roster.
    pub fn employees(&self) -> &[Employee] {
        self.config.employees()
    }

    /// Gets an employee by id.
    pub fn get_employee(&self, id: &str) -> EngineResult<&Employee> {
        self.employees()
            .iter()
            .find(|employee| employee.id == id)
            .ok_or_else(|| EngineError::EmployeeNotFound { id: id.to_string() })
    }

    /// Returns the employees named in `ids`, or the whole roster for `None`.
    ///
    /// Selected employees keep the order of `ids`.
    pub fn select(&self, ids: Option<&[String]>) -> EngineResult<Vec<Employee>> {
        match ids {
            None => Ok(self.employees().to_vec()),
            Some(ids) => ids
                .iter()
                .map(|id| self.get_employee(id).cloned())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ShiftCode, Team};
    use chrono::Weekday;

    fn test_config_path() -> &'static str {
        "./config/station"
    }

    #[test]
    fn test_load_valid_config() {
        let loader = ConfigLoader::load(test_config_path());
        assert!(loader.is_ok(), "Failed to load config: {:?}", loader.err());
    }

    #[test]
    fn test_station_metadata() {
        let loader = ConfigLoader::load(test_config_path()).unwrap();
        assert_eq!(loader.station().code, "DKR-01");
        assert!(!loader.station().name.is_empty());
        assert_eq!(loader.station().max_range_days, 186);
    }

    #[test]
    fn test_max_range_days_defaults_to_a_year() {
        let metadata: StationMetadata =
            serde_yaml::from_str("code: X\nname: Station X\n").unwrap();
        assert_eq!(metadata.max_range_days, 366);
    }

    #[test]
    fn test_roster_contents() {
        let loader = ConfigLoader::load(test_config_path()).unwrap();
        assert_eq!(loader.employees().len(), 6);

        let stable = loader.get_employee("emp_005").unwrap();
        assert_eq!(stable.team, Team::Fixed);
        assert_eq!(stable.rest_day, Some(Weekday::Mon));
        assert_eq!(stable.default_shift, Some(ShiftCode::Day));

        let rotating = loader.get_employee("emp_001").unwrap();
        assert_eq!(rotating.team, Team::RotatingA);
        assert_eq!(rotating.rest_day, None);
    }

    #[test]
    fn test_missing_directory_returns_config_not_found() {
        let result = ConfigLoader::load("./nonexistent/path");
        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("station.yaml"));
            }
            other => panic!("Expected ConfigNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_get_unknown_employee() {
        let loader = ConfigLoader::load(test_config_path()).unwrap();
        let result = loader.get_employee("ghost");
        assert!(matches!(result, Err(EngineError::EmployeeNotFound { id }) if id == "ghost"));
    }

    #[test]
    fn test_select_keeps_requested_order() {
        let loader = ConfigLoader::load(test_config_path()).unwrap();
        let ids = vec!["emp_003".to_string(), "emp_001".to_string()];
        let selected = loader.select(Some(&ids)).unwrap();
        let selected_ids: Vec<&str> = selected.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(selected_ids, vec!["emp_003", "emp_001"]);

        assert_eq!(loader.select(None).unwrap().len(), 6);
    }

    #[test]
    fn test_invalid_rest_day_is_rejected() {
        let yaml = r#"
employees:
  - id: emp_001
    name: Awa
    team: Stable
    stable_rest_day: 9
"#;
        let roster: RosterConfig = serde_yaml::from_str(yaml).unwrap();
        let result = ConfigLoader::build_roster(roster);
        assert!(matches!(
            result,
            Err(EngineError::InvalidEmployee { field, .. }) if field == "stable_rest_day"
        ));
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let metadata = StationMetadata {
            code: "T".to_string(),
            name: "Test".to_string(),
            max_range_days: 31,
        };
        let employees = vec![
            Employee::new("e1", "A", Team::RotatingA),
            Employee::new("e1", "B", Team::RotatingB),
        ];
        let result = ConfigLoader::from_parts(metadata, employees);
        assert!(matches!(
            result,
            Err(EngineError::InvalidEmployee { field, .. }) if field == "id"
        ));
    }
}
