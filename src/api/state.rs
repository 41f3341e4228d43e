//! Application state for the rotation engine API.

use std::sync::Arc;

use crate::config::ConfigLoader;

/// Shared application state.
///
/// Holds the station roster loaded at startup. Planning cells are never
/// stored here; every request carries its own seed.
#[derive(Clone)]
pub struct AppState {
    roster: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given roster.
    pub fn new(roster: ConfigLoader) -> Self {
        Self {
            roster: Arc::new(roster),
        }
    }

    /// Returns the loaded roster.
    pub fn roster(&self) -> &ConfigLoader {
        &self.roster
    }
}
