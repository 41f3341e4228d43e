//! HTTP API module for the rotation engine.
//!
//! This module provides the REST endpoints for projecting a station's
//! planning and listing its roster.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ProjectionRequest, SeedEntryRequest};
pub use response::{ApiError, ApiErrorResponse, ProjectionResponse};
pub use state::AppState;
