//! Rotating-team cycle state machine.
//!
//! Rotating staff alternate between a day week (Monday to Saturday on day
//! shifts, closed by a twenty-four hour Sunday) and a night week (Monday to
//! Saturday on nights, closed by a rest Sunday). The week type only changes
//! on Sundays.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::models::{Employee, ShiftCode, Team};

/// Which week type a rotating employee is currently in.
///
/// # Example
///
/// ```
/// use rota_engine::projection::CycleState;
/// use rota_engine::models::ShiftCode;
/// use chrono::Weekday;
///
/// assert_eq!(CycleState::DayWeek.code_for(Weekday::Tue), ShiftCode::Day);
/// assert_eq!(CycleState::DayWeek.code_for(Weekday::Sun), ShiftCode::TwentyFourHour);
/// assert_eq!(CycleState::DayWeek.advance(Weekday::Sun), CycleState::NightWeek);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CycleState {
    /// Day shifts Monday to Saturday, twenty-four hours on Sunday.
    DayWeek,
    /// Night shifts Monday to Saturday, rest on Sunday.
    NightWeek,
}

impl CycleState {
    /// Returns the code the rotation assigns on `day` in this state.
    pub fn code_for(self, day: Weekday) -> ShiftCode {
        match (self, day) {
            (CycleState::DayWeek, Weekday::Sun) => ShiftCode::TwentyFourHour,
            (CycleState::DayWeek, _) => ShiftCode::Day,
            (CycleState::NightWeek, Weekday::Sun) => ShiftCode::Rest,
            (CycleState::NightWeek, _) => ShiftCode::Night,
        }
    }

    /// Returns the state after `day` has been walked.
    ///
    /// Flips on Sundays and is unchanged otherwise, regardless of what the
    /// cell for that day actually holds.
    pub fn advance(self, day: Weekday) -> CycleState {
        if day == Weekday::Sun {
            self.flipped()
        } else {
            self
        }
    }

    /// Returns the other week type.
    pub fn flipped(self) -> CycleState {
        match self {
            CycleState::DayWeek => CycleState::NightWeek,
            CycleState::NightWeek => CycleState::DayWeek,
        }
    }
}

/// Recovers the cycle state governing the days after `start`.
///
/// With a seeded cell at `start`, a twenty-four hour shift means the day week
/// just closed, so the next week is a night week; any other seeded code leads
/// into a day week. Without a seed the state is inferred from the team and
/// weekday, see [`inferred_start`].
///
/// # Example
///
/// ```
/// use rota_engine::models::{Employee, ShiftCode, Team};
/// use rota_engine::projection::{initial_state, CycleState};
/// use chrono::NaiveDate;
///
/// let employee = Employee::new("emp_001", "Awa", Team::RotatingA);
/// let sunday = NaiveDate::from_ymd_opt(2025, 11, 16).unwrap();
///
/// assert_eq!(
///     initial_state(&employee, sunday, Some(ShiftCode::TwentyFourHour)),
///     CycleState::NightWeek
/// );
/// assert_eq!(
///     initial_state(&employee, sunday, Some(ShiftCode::Rest)),
///     CycleState::DayWeek
/// );
/// ```
pub fn initial_state(
    employee: &Employee,
    start: NaiveDate,
    seed_at_start: Option<ShiftCode>,
) -> CycleState {
    match seed_at_start {
        Some(ShiftCode::TwentyFourHour) => CycleState::NightWeek,
        Some(
            ShiftCode::Day | ShiftCode::Night | ShiftCode::Rest | ShiftCode::Leave | ShiftCode::Sick,
        ) => CycleState::DayWeek,
        None => inferred_start(employee, start).1,
    }
}

/// Infers the code at `start` and the following state for an unseeded start.
///
/// The first team is taken to be in a day week and the second in a night
/// week. On a Sunday the closing code of that week is produced and the state
/// has already flipped. A fixed rest day on `start` replaces the code with
/// [`ShiftCode::Rest`] without affecting the state. Fixed staff have no
/// rotation and are treated like the first team.
pub fn inferred_start(employee: &Employee, start: NaiveDate) -> (ShiftCode, CycleState) {
    let weekday = start.weekday();
    let week = match employee.team {
        Team::RotatingA | Team::Fixed => CycleState::DayWeek,
        Team::RotatingB => CycleState::NightWeek,
    };

    let code = if employee.rests_on(weekday) {
        ShiftCode::Rest
    } else {
        week.code_for(weekday)
    };

    (code, week.advance(weekday))
}
