//! Fixed-schedule policy for stable staff.

use chrono::{Datelike, NaiveDate};

use crate::models::{Employee, ShiftCode};

/// Returns the code a fixed-schedule employee works on `date`.
///
/// Rest on the configured rest day, the default shift otherwise (day shift
/// when none is configured). Each day is decided on its own.
///
/// # Example
///
/// ```
/// use rota_engine::models::{Employee, ShiftCode, Team};
/// use rota_engine::projection::fixed_code;
/// use chrono::{NaiveDate, Weekday};
///
/// let employee = Employee::new("emp_002", "Moussa", Team::Fixed).with_rest_day(Weekday::Mon);
///
/// // 2025-11-17 is a Monday
/// assert_eq!(fixed_code(&employee, NaiveDate::from_ymd_opt(2025, 11, 17).unwrap()), ShiftCode::Rest);
/// assert_eq!(fixed_code(&employee, NaiveDate::from_ymd_opt(2025, 11, 18).unwrap()), ShiftCode::Day);
/// ```
pub fn fixed_code(employee: &Employee, date: NaiveDate) -> ShiftCode {
    if employee.rests_on(date.weekday()) {
        ShiftCode::Rest
    } else {
        employee.default_shift.unwrap_or(ShiftCode::Day)
    }
}
