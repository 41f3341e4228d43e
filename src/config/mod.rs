//! Configuration loading and management for the rotation engine.
//!
//! This module loads a station's metadata and staff roster from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use rota_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/station").unwrap();
//! println!("Loaded station: {}", config.station().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{RosterConfig, StationConfig, StationMetadata};
