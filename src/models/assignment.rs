//! Shift assignments keyed by employee and date.
//!
//! This module defines the [`AssignmentMap`] the projection engine consumes
//! and produces, together with the editing operations a planner uses to
//! seed it (single cell cycling, bulk apply, absence ranges).

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;

use super::{AbsenceRange, Employee, ShiftCode, ShiftRank, rank};

/// Composite key of a planning cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AssignmentKey {
    /// The employee the cell belongs to.
    pub employee_id: String,
    /// The calendar day of the cell.
    pub date: NaiveDate,
}

impl AssignmentKey {
    /// Creates a key for the given employee and date.
    pub fn new(employee_id: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            employee_id: employee_id.into(),
            date,
        }
    }
}

/// One persisted planning row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentEntry {
    /// The employee the row belongs to.
    pub employee_id: String,
    /// The calendar day of the row.
    pub date: NaiveDate,
    /// The assigned shift.
    pub shift: ShiftCode,
}

/// Sparse map of planning cells.
///
/// A key is present only when the cell holds a code. Iteration is ordered by
/// employee id, then date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentMap {
    cells: BTreeMap<AssignmentKey, ShiftCode>,
}

impl AssignmentMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the code held by a cell.
    pub fn get(&self, employee_id: &str, date: NaiveDate) -> Option<ShiftCode> {
        self.cells
            .get(&AssignmentKey::new(employee_id, date))
            .copied()
    }

    /// Returns true if the cell holds a code.
    pub fn contains(&self, employee_id: &str, date: NaiveDate) -> bool {
        self.get(employee_id, date).is_some()
    }

    /// Sets a cell, returning the previous code if there was one.
    pub fn set(
        &mut self,
        employee_id: impl Into<String>,
        date: NaiveDate,
        code: ShiftCode,
    ) -> Option<ShiftCode> {
        self.cells.insert(AssignmentKey::new(employee_id, date), code)
    }

    /// Number of filled cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if no cell is filled.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterates over filled cells in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&AssignmentKey, ShiftCode)> {
        self.cells.iter().map(|(key, code)| (key, *code))
    }

    /// Flattens the map into persisted rows, in key order.
    pub fn entries(&self) -> Vec<AssignmentEntry> {
        self.iter()
            .map(|(key, shift)| AssignmentEntry {
                employee_id: key.employee_id.clone(),
                date: key.date,
                shift,
            })
            .collect()
    }

    /// Advances a cell to the next code, treating an empty cell as rest.
    ///
    /// Returns the new code.
    pub fn cycle_cell(&mut self, employee_id: &str, date: NaiveDate) -> ShiftCode {
        let current = self.get(employee_id, date).unwrap_or(ShiftCode::Rest);
        let next = current.next();
        self.set(employee_id, date, next);
        next
    }

    /// Writes `code` into every (employee, date) pair of the selection.
    pub fn apply_bulk<'a, I, D>(&mut self, employee_ids: I, dates: D, code: ShiftCode)
    where
        I: IntoIterator<Item = &'a str>,
        D: IntoIterator<Item = NaiveDate> + Clone,
    {
        for employee_id in employee_ids {
            for date in dates.clone() {
                self.set(employee_id, date, code);
            }
        }
    }

    /// Expands an absence range into the map, overwriting existing cells.
    pub fn apply_absence(&mut self, absence: &AbsenceRange) -> EngineResult<()> {
        for date in absence.dates()? {
            self.set(absence.employee_id.as_str(), date, absence.kind);
        }
        Ok(())
    }

    /// Returns the rows of `self` that are missing from or differ in `baseline`.
    ///
    /// These are the rows a save has to upsert.
    pub fn changes_from(&self, baseline: &AssignmentMap) -> Vec<AssignmentEntry> {
        self.iter()
            .filter(|(key, code)| baseline.cells.get(*key) != Some(code))
            .map(|(key, shift)| AssignmentEntry {
                employee_id: key.employee_id.clone(),
                date: key.date,
                shift,
            })
            .collect()
    }
}

impl FromIterator<AssignmentEntry> for AssignmentMap {
    fn from_iter<T: IntoIterator<Item = AssignmentEntry>>(iter: T) -> Self {
        let mut map = AssignmentMap::new();
        for entry in iter {
            map.set(entry.employee_id, entry.date, entry.shift);
        }
        map
    }
}

/// Orders employees for the daily sheet of `date`.
///
/// Day staff first, then night staff, then everyone off. An empty cell counts
/// as rest. Ties are broken by name, compared case-insensitively with Latin
/// accents folded onto their base letter so that "Élodie" sorts with the E's;
/// names that fold to the same key fall back to their raw bytes.
pub fn daily_order<'a>(
    employees: &'a [Employee],
    assignments: &AssignmentMap,
    date: NaiveDate,
) -> Vec<&'a Employee> {
    let group = |employee: &Employee| -> ShiftRank {
        rank(
            assignments
                .get(&employee.id, date)
                .unwrap_or(ShiftCode::Rest),
        )
    };

    let mut ordered: Vec<&Employee> = employees.iter().collect();
    ordered.sort_by_cached_key(|employee| {
        (group(employee), collation_key(&employee.name), employee.name.clone())
    });
    ordered
}

/// Lowercases `name` and strips the accents used in French and Wolof names.
fn collation_key(name: &str) -> String {
    name.chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
            'ç' => 'c',
            'è' | 'é' | 'ê' | 'ë' => 'e',
            'ì' | 'í' | 'î' | 'ï' => 'i',
            'ñ' => 'n',
            'ò' | 'ó' | 'ô' | 'õ' | 'ö' => 'o',
            'ù' | 'ú' | 'û' | 'ü' => 'u',
            'ý' | 'ÿ' => 'y',
            other => other,
        })
        .collect()
}
