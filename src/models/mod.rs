//! Core data models for the rotation engine.
//!
//! This module contains the shift vocabulary, the employee roster types and
//! the assignment map shared by the engine and its callers.

mod absence;
mod assignment;
mod employee;
mod shift_code;

pub use absence::AbsenceRange;
pub use assignment::{AssignmentEntry, AssignmentKey, AssignmentMap, daily_order};
pub use employee::{Employee, EmployeeRecord, Team, weekday_from_index};
pub use shift_code::{ShiftCode, ShiftRank, rank};
