//! Shift Rotation Engine for fuel-station staff planning
//!
//! This crate projects a day/night/rest rotation over a date range from a
//! handful of seeded planning cells, for two rotating teams and for fixed
//! staff, without ever overwriting a cell entered by hand.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod projection;
