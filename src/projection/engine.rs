//! Schedule projection over a date range.

use chrono::{Datelike, NaiveDate};
use tracing::{debug, trace};

use crate::error::{EngineError, EngineResult};
use crate::models::{AssignmentMap, Employee, ShiftCode, Team};

use super::cycle::{initial_state, inferred_start};
use super::fixed::fixed_code;

/// Projects the schedule of `employees` over `start..=end`.
///
/// Returns a new map holding every cell of `seed` unchanged plus a code for
/// each (employee, date) pair in range that the seed left empty. Cells of
/// employees not in `employees`, and cells outside the range, are copied
/// as-is and never created.
///
/// Fixed staff get [`fixed_code`] on every empty day. Rotating staff follow
/// the [`CycleState`](super::CycleState) machine: the state is recovered at
/// `start` with [`initial_state`], then walked one day at a time. Seeded
/// days are skipped but a seeded Sunday still flips the state, and a fixed
/// rest day replaces the rotation code without affecting the state.
///
/// # Errors
///
/// Returns [`EngineError::InvalidDateRange`] if `end` is before `start`.
///
/// # Example
///
/// ```
/// use rota_engine::models::{AssignmentMap, Employee, ShiftCode, Team};
/// use rota_engine::projection::project;
/// use chrono::NaiveDate;
///
/// let date = |d| NaiveDate::from_ymd_opt(2025, 11, d).unwrap();
/// let employees = vec![Employee::new("emp_001", "Awa", Team::RotatingA)];
///
/// let mut seed = AssignmentMap::new();
/// seed.set("emp_001", date(16), ShiftCode::TwentyFourHour);
///
/// let schedule = project(date(16), date(23), &employees, &seed).unwrap();
/// assert_eq!(schedule.get("emp_001", date(17)), Some(ShiftCode::Night));
/// assert_eq!(schedule.get("emp_001", date(23)), Some(ShiftCode::Rest));
/// ```
pub fn project(
    start: NaiveDate,
    end: NaiveDate,
    employees: &[Employee],
    seed: &AssignmentMap,
) -> EngineResult<AssignmentMap> {
    if end < start {
        return Err(EngineError::InvalidDateRange { start, end });
    }

    let mut schedule = seed.clone();

    for employee in employees {
        match employee.team {
            Team::Fixed => project_fixed(employee, start, end, seed, &mut schedule),
            Team::RotatingA | Team::RotatingB => {
                project_rotating(employee, start, end, seed, &mut schedule)
            }
        }
    }

    debug!(
        start = %start,
        end = %end,
        employees = employees.len(),
        seeded = seed.len(),
        generated = schedule.len() - seed.len(),
        "Projection completed"
    );

    Ok(schedule)
}

/// Iterates over `from..=end`.
fn days(from: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    from.iter_days().take_while(move |date| *date <= end)
}

fn project_fixed(
    employee: &Employee,
    start: NaiveDate,
    end: NaiveDate,
    seed: &AssignmentMap,
    schedule: &mut AssignmentMap,
) {
    debug!(employee_id = %employee.id, "Projecting fixed schedule");

    for date in days(start, end) {
        if !seed.contains(&employee.id, date) {
            schedule.set(employee.id.as_str(), date, fixed_code(employee, date));
        }
    }
}

fn project_rotating(
    employee: &Employee,
    start: NaiveDate,
    end: NaiveDate,
    seed: &AssignmentMap,
    schedule: &mut AssignmentMap,
) {
    let seed_at_start = seed.get(&employee.id, start);
    let mut state = match seed_at_start {
        Some(code) => initial_state(employee, start, Some(code)),
        None => {
            let (code, state) = inferred_start(employee, start);
            schedule.set(employee.id.as_str(), start, code);
            state
        }
    };

    debug!(
        employee_id = %employee.id,
        team = ?employee.team,
        seeded_start = seed_at_start.is_some(),
        state = ?state,
        "Projecting rotation"
    );

    let Some(first) = start.succ_opt() else {
        return;
    };

    for date in days(first, end) {
        let weekday = date.weekday();

        if seed.contains(&employee.id, date) {
            trace!(employee_id = %employee.id, date = %date, "Keeping seeded cell");
        } else {
            let code = if employee.rests_on(weekday) {
                ShiftCode::Rest
            } else {
                state.code_for(weekday)
            };
            schedule.set(employee.id.as_str(), date, code);
        }

        state = state.advance(weekday);
    }
}
