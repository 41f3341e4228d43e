//! Projection logic for the rotation engine.
//!
//! This module turns a sparse seed of planning cells into a complete
//! schedule: the rotating-team cycle state machine, the fixed-schedule
//! policy for stable staff, and the [`project`] entry point dispatching
//! between them. Everything here is pure.

mod cycle;
mod engine;
mod fixed;

pub use cycle::{CycleState, inferred_start, initial_state};
pub use engine::project;
pub use fixed::fixed_code;
