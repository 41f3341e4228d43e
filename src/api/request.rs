//! Request types for the rotation engine API.
//!
//! This module defines the JSON request structures for the `/project` endpoint.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{AbsenceRange, AssignmentMap, ShiftCode};

/// Request body for the `/project` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionRequest {
    /// First day to project.
    pub start_date: NaiveDate,
    /// Last day to project (inclusive).
    pub end_date: NaiveDate,
    /// Employees to project; the whole roster when absent.
    #[serde(default)]
    pub employee_ids: Option<Vec<String>>,
    /// Planning cells already filled (loaded or edited by hand).
    #[serde(default)]
    pub seed: Vec<SeedEntryRequest>,
    /// Absence ranges expanded into the seed before projecting.
    #[serde(default)]
    pub absences: Vec<AbsenceRange>,
}

/// One filled planning cell in a projection request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedEntryRequest {
    /// The employee the cell belongs to.
    pub employee_id: String,
    /// The calendar day of the cell.
    pub date: NaiveDate,
    /// Shift label; an empty label means the cell is empty.
    pub shift: String,
}

impl ProjectionRequest {
    /// Builds the seed map: parsed cells first, then absences on top.
    pub fn to_seed(&self) -> EngineResult<AssignmentMap> {
        let mut seed = AssignmentMap::new();

        for entry in &self.seed {
            if entry.shift.is_empty() {
                continue;
            }
            let code: ShiftCode = entry.shift.parse()?;
            seed.set(entry.employee_id.as_str(), entry.date, code);
        }

        for absence in &self.absences {
            seed.apply_absence(absence)?;
        }

        Ok(seed)
    }
}
