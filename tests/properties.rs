//! Property tests for the projection engine.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use proptest::prelude::*;

use rota_engine::models::{AssignmentMap, Employee, ShiftCode, Team, weekday_from_index};
use rota_engine::projection::{fixed_code, project};

fn base_date() -> NaiveDate {
    // A Sunday.
    NaiveDate::from_ymd_opt(2025, 11, 16).unwrap()
}

fn arb_code() -> impl Strategy<Value = ShiftCode> {
    prop::sample::select(ShiftCode::ALL.to_vec())
}

fn arb_team() -> impl Strategy<Value = Team> {
    prop_oneof![Just(Team::RotatingA), Just(Team::RotatingB), Just(Team::Fixed)]
}

fn arb_employees() -> impl Strategy<Value = Vec<Employee>> {
    prop::collection::vec(
        (
            arb_team(),
            prop::option::of(0u8..7),
            prop::option::of(arb_code()),
        ),
        0..5,
    )
    .prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (team, rest, default_shift))| Employee {
                id: format!("emp_{:03}", i),
                name: format!("Employee {}", i),
                role: String::new(),
                team,
                rest_day: rest.and_then(weekday_from_index),
                default_shift,
            })
            .collect()
    })
}

/// Start offset from the base date, range length, and seed cells given as
/// (employee index, day offset, code). Seeds may fall before or after the
/// range and on employees that are not in the roster.
fn arb_scenario() -> impl Strategy<Value = (i64, i64, Vec<(usize, i64, ShiftCode)>)> {
    (
        0i64..28,
        0i64..42,
        prop::collection::vec((0usize..6, -7i64..56, arb_code()), 0..20),
    )
}

fn build_seed(cells: &[(usize, i64, ShiftCode)]) -> AssignmentMap {
    let mut seed = AssignmentMap::new();
    for (employee, offset, code) in cells {
        seed.set(
            format!("emp_{:03}", employee),
            base_date() + Duration::days(*offset),
            *code,
        );
    }
    seed
}

fn days(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start.iter_days().take_while(|d| *d <= end).collect()
}

proptest! {
    #[test]
    fn prop_projection_is_idempotent(
        employees in arb_employees(),
        (start_offset, len, cells) in arb_scenario(),
    ) {
        let start = base_date() + Duration::days(start_offset);
        let end = start + Duration::days(len);
        let seed = build_seed(&cells);

        let first = project(start, end, &employees, &seed).unwrap();
        let second = project(start, end, &employees, &seed).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_extending_end_keeps_earlier_cells(
        employees in arb_employees(),
        (start_offset, len, cells) in arb_scenario(),
        extra in 1i64..21,
    ) {
        let start = base_date() + Duration::days(start_offset);
        let end = start + Duration::days(len);
        let seed = build_seed(&cells);

        let short = project(start, end, &employees, &seed).unwrap();
        let long = project(start, end + Duration::days(extra), &employees, &seed).unwrap();
        for (key, code) in short.iter() {
            prop_assert_eq!(
                long.get(&key.employee_id, key.date),
                Some(code),
                "cell {} on {} changed when the range grew",
                key.employee_id,
                key.date
            );
        }
    }

    #[test]
    fn prop_seed_cells_are_never_overwritten(
        employees in arb_employees(),
        (start_offset, len, cells) in arb_scenario(),
    ) {
        let start = base_date() + Duration::days(start_offset);
        let end = start + Duration::days(len);
        let seed = build_seed(&cells);

        let schedule = project(start, end, &employees, &seed).unwrap();
        for (key, code) in seed.iter() {
            prop_assert_eq!(schedule.get(&key.employee_id, key.date), Some(code));
        }
    }

    #[test]
    fn prop_schedule_is_complete_and_bounded(
        employees in arb_employees(),
        (start_offset, len, cells) in arb_scenario(),
    ) {
        let start = base_date() + Duration::days(start_offset);
        let end = start + Duration::days(len);
        let seed = build_seed(&cells);

        let schedule = project(start, end, &employees, &seed).unwrap();

        for employee in &employees {
            for date in days(start, end) {
                prop_assert!(schedule.contains(&employee.id, date));
            }
        }

        // Every new cell belongs to a rostered employee and lies in range.
        for entry in schedule.changes_from(&seed) {
            prop_assert!(employees.iter().any(|e| e.id == entry.employee_id));
            prop_assert!(entry.date >= start && entry.date <= end);
        }
    }

    #[test]
    fn prop_rotation_repeats_every_fourteen_days(weeks_ahead in 0i64..8, len in 15i64..70) {
        let start = base_date() + Duration::weeks(weeks_ahead);
        let end = start + Duration::days(len);
        let employees = vec![Employee::new("emp_000", "A", Team::RotatingA)];
        let mut seed = AssignmentMap::new();
        seed.set("emp_000", start, ShiftCode::TwentyFourHour);

        let schedule = project(start, end, &employees, &seed).unwrap();
        let codes: Vec<ShiftCode> = days(start, end)
            .into_iter()
            .map(|d| schedule.get("emp_000", d).unwrap())
            .collect();

        for i in 1..codes.len().saturating_sub(14) {
            prop_assert_eq!(codes[i], codes[i + 14]);
        }
        prop_assert_eq!(codes[1], ShiftCode::Night);
        prop_assert_eq!(codes[7], ShiftCode::Rest);
        prop_assert_eq!(codes[8], ShiftCode::Day);
        prop_assert_eq!(codes[14], ShiftCode::TwentyFourHour);
    }

    #[test]
    fn prop_rest_day_is_never_worked(
        team in prop_oneof![Just(Team::RotatingA), Just(Team::RotatingB)],
        start_offset in 0i64..28,
        len in 0i64..60,
    ) {
        let start = base_date() + Duration::days(start_offset);
        let end = start + Duration::days(len);
        let employees = vec![Employee::new("emp_000", "R", team).with_rest_day(Weekday::Wed)];

        let schedule = project(start, end, &employees, &AssignmentMap::new()).unwrap();
        for date in days(start, end) {
            if date.weekday() == Weekday::Wed {
                prop_assert_eq!(schedule.get("emp_000", date), Some(ShiftCode::Rest));
            }
        }
    }

    #[test]
    fn prop_fixed_staff_ignore_other_employees(
        others in arb_employees(),
        rest in prop::option::of(0u8..7),
        default_shift in prop::option::of(arb_code()),
        (start_offset, len, cells) in arb_scenario(),
    ) {
        let start = base_date() + Duration::days(start_offset);
        let end = start + Duration::days(len);

        let mut fixed = Employee::new("stable", "S", Team::Fixed);
        fixed.rest_day = rest.and_then(weekday_from_index);
        fixed.default_shift = default_shift;

        let mut roster = others;
        roster.push(fixed.clone());
        let schedule = project(start, end, &roster, &build_seed(&cells)).unwrap();

        for date in days(start, end) {
            prop_assert_eq!(schedule.get("stable", date), Some(fixed_code(&fixed, date)));
        }
    }
}
