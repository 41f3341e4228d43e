//! Shift vocabulary.
//!
//! This module defines the closed set of shift codes a planning cell can hold
//! and the display grouping used to order staff on a daily sheet.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// A single planning cell value.
///
/// Serialized with the labels used by the planning sheet (`"Jour"`, `"Nuit"`,
/// `"24h"`, `"Repos"`, `"Congé"`, `"Maladie"`).
///
/// # Example
///
/// ```
/// use rota_engine::models::ShiftCode;
///
/// let code: ShiftCode = "24h".parse().unwrap();
/// assert_eq!(code, ShiftCode::TwentyFourHour);
/// assert!(code.is_working());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ShiftCode {
    /// Day shift.
    #[serde(rename = "Jour")]
    Day,
    /// Night shift.
    #[serde(rename = "Nuit")]
    Night,
    /// Twenty-four hour shift, worked on the Sunday closing a day week.
    #[serde(rename = "24h")]
    TwentyFourHour,
    /// Rest day.
    #[serde(rename = "Repos")]
    Rest,
    /// Paid leave.
    #[serde(rename = "Congé")]
    Leave,
    /// Sick leave.
    #[serde(rename = "Maladie")]
    Sick,
}

impl ShiftCode {
    /// Every shift code, in the order a planning cell cycles through them.
    pub const ALL: [ShiftCode; 6] = [
        ShiftCode::Day,
        ShiftCode::Night,
        ShiftCode::TwentyFourHour,
        ShiftCode::Rest,
        ShiftCode::Leave,
        ShiftCode::Sick,
    ];

    /// Returns the label stored in the planning table.
    pub fn label(self) -> &'static str {
        match self {
            ShiftCode::Day => "Jour",
            ShiftCode::Night => "Nuit",
            ShiftCode::TwentyFourHour => "24h",
            ShiftCode::Rest => "Repos",
            ShiftCode::Leave => "Congé",
            ShiftCode::Sick => "Maladie",
        }
    }

    /// Returns true for codes where the employee is on site.
    pub fn is_working(self) -> bool {
        match self {
            ShiftCode::Day | ShiftCode::Night | ShiftCode::TwentyFourHour => true,
            ShiftCode::Rest | ShiftCode::Leave | ShiftCode::Sick => false,
        }
    }

    /// Returns true for the codes an absence range may carry.
    pub fn is_absence(self) -> bool {
        matches!(self, ShiftCode::Leave | ShiftCode::Sick)
    }

    /// Returns the code following this one when a cell is clicked.
    ///
    /// Wraps from [`ShiftCode::Sick`] back to [`ShiftCode::Day`].
    ///
    /// ```
    /// use rota_engine::models::ShiftCode;
    ///
    /// assert_eq!(ShiftCode::Rest.next(), ShiftCode::Leave);
    /// assert_eq!(ShiftCode::Sick.next(), ShiftCode::Day);
    /// ```
    pub fn next(self) -> ShiftCode {
        match self {
            ShiftCode::Day => ShiftCode::Night,
            ShiftCode::Night => ShiftCode::TwentyFourHour,
            ShiftCode::TwentyFourHour => ShiftCode::Rest,
            ShiftCode::Rest => ShiftCode::Leave,
            ShiftCode::Leave => ShiftCode::Sick,
            ShiftCode::Sick => ShiftCode::Day,
        }
    }
}

impl fmt::Display for ShiftCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ShiftCode {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShiftCode::ALL
            .into_iter()
            .find(|code| code.label() == s)
            .ok_or_else(|| EngineError::UnknownShiftCode {
                code: s.to_string(),
            })
    }
}

/// Display group of a shift code on a daily sheet.
///
/// Groups are ordered: day staff first, then night staff, then everyone off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftRank {
    /// Day and twenty-four hour shifts.
    DayGroup,
    /// Night shifts.
    NightGroup,
    /// Rest, leave and sick days.
    Other,
}

/// Returns the display group of a shift code.
///
/// # Example
///
/// ```
/// use rota_engine::models::{rank, ShiftCode, ShiftRank};
///
/// assert_eq!(rank(ShiftCode::TwentyFourHour), ShiftRank::DayGroup);
/// assert_eq!(rank(ShiftCode::Night), ShiftRank::NightGroup);
/// assert_eq!(rank(ShiftCode::Leave), ShiftRank::Other);
/// ```
pub fn rank(code: ShiftCode) -> ShiftRank {
    match code {
        ShiftCode::Day | ShiftCode::TwentyFourHour => ShiftRank::DayGroup,
        ShiftCode::Night => ShiftRank::NightGroup,
        ShiftCode::Rest | ShiftCode::Leave | ShiftCode::Sick => ShiftRank::Other,
    }
}
