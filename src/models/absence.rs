//! Absence ranges.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::ShiftCode;

/// A leave or sick period for one employee, both ends inclusive.
///
/// Absences are not stored as such: they are expanded into one planning cell
/// per day with [`AssignmentMap::apply_absence`](super::AssignmentMap::apply_absence).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbsenceRange {
    /// The absent employee.
    pub employee_id: String,
    /// First day of absence.
    #[serde(rename = "start_date")]
    pub start: NaiveDate,
    /// Last day of absence (inclusive).
    #[serde(rename = "end_date")]
    pub end: NaiveDate,
    /// [`ShiftCode::Leave`] or [`ShiftCode::Sick`].
    pub kind: ShiftCode,
}

impl AbsenceRange {
    /// Returns every day covered by the absence.
    ///
    /// Fails if the range is reversed or the kind is not an absence code.
    pub fn dates(&self) -> EngineResult<Vec<NaiveDate>> {
        if !self.kind.is_absence() {
            return Err(EngineError::InvalidAbsence {
                employee_id: self.employee_id.clone(),
                message: format!("kind must be Congé or Maladie, got {}", self.kind),
            });
        }
        if self.end < self.start {
            return Err(EngineError::InvalidDateRange {
                start: self.start,
                end: self.end,
            });
        }

        Ok(self
            .start
            .iter_days()
            .take_while(|date| *date <= self.end)
            .collect())
    }
}
