//! Employee model and related types.
//!
//! This module defines the Employee struct and Team enum describing how a
//! member of staff is scheduled.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

use super::ShiftCode;

/// The scheduling policy an employee belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    /// First rotating team; starts a projection in a day week.
    #[serde(rename = "Equipe 1")]
    RotatingA,
    /// Second rotating team; starts a projection in a night week.
    #[serde(rename = "Equipe 2")]
    RotatingB,
    /// Fixed staff working the same shift every day except a rest day.
    #[serde(rename = "Stable")]
    Fixed,
}

/// A member of staff as seen by the projection engine.
///
/// Serialized in its persisted shape, where the rest day is a day-of-week
/// index with `0` meaning Sunday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EmployeeRecord", into = "EmployeeRecord")]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Role label (e.g. "Pompiste").
    pub role: String,
    /// Scheduling policy.
    pub team: Team,
    /// Fixed weekly rest day, if any.
    pub rest_day: Option<Weekday>,
    /// Shift worked on non-rest days by fixed staff.
    pub default_shift: Option<ShiftCode>,
}

impl Employee {
    /// Creates an employee with no rest day and no default shift.
    pub fn new(id: impl Into<String>, name: impl Into<String>, team: Team) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role: String::new(),
            team,
            rest_day: None,
            default_shift: None,
        }
    }

    /// Sets the fixed weekly rest day.
    pub fn with_rest_day(mut self, day: Weekday) -> Self {
        self.rest_day = Some(day);
        self
    }

    /// Sets the default shift.
    pub fn with_default_shift(mut self, code: ShiftCode) -> Self {
        self.default_shift = Some(code);
        self
    }

    /// Returns true if `day` is this employee's fixed rest day.
    pub fn rests_on(&self, day: Weekday) -> bool {
        self.rest_day == Some(day)
    }
}

/// Persisted shape of an employee row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Role label.
    #[serde(default)]
    pub role: String,
    /// Scheduling policy.
    pub team: Team,
    /// Rest day index, `0` = Sunday through `6` = Saturday.
    #[serde(default)]
    pub stable_rest_day: Option<u8>,
    /// Default shift for fixed staff.
    #[serde(default)]
    pub default_shift: Option<ShiftCode>,
}

/// Converts a day-of-week index (`0` = Sunday) into a weekday.
pub fn weekday_from_index(index: u8) -> Option<Weekday> {
    match index {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}

impl TryFrom<EmployeeRecord> for Employee {
    type Error = EngineError;

    fn try_from(record: EmployeeRecord) -> Result<Self, Self::Error> {
        let rest_day = match record.stable_rest_day {
            Some(index) => Some(weekday_from_index(index).ok_or_else(|| {
                EngineError::InvalidEmployee {
                    field: "stable_rest_day".to_string(),
                    message: format!("{} is not a day index between 0 and 6", index),
                }
            })?),
            None => None,
        };

        Ok(Employee {
            id: record.id,
            name: record.name,
            role: record.role,
            team: record.team,
            rest_day,
            default_shift: record.default_shift,
        })
    }
}

impl From<Employee> for EmployeeRecord {
    fn from(employee: Employee) -> Self {
        EmployeeRecord {
            id: employee.id,
            name: employee.name,
            role: employee.role,
            team: employee.team,
            stable_rest_day: employee
                .rest_day
                .map(|day| day.num_days_from_sunday() as u8),
            default_shift: employee.default_shift,
        }
    }
}
