//! HTTP request handlers for the rotation engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};
use crate::models::Employee;
use crate::projection::project;

use super::request::ProjectionRequest;
use super::response::{ApiError, ApiErrorResponse, ProjectionResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/project", post(project_handler))
        .route("/roster", get(roster_handler))
        .with_state(state)
}

/// Handler for GET /roster endpoint.
async fn roster_handler(State(state): State<AppState>) -> Json<Vec<Employee>> {
    Json(state.roster().employees().to_vec())
}

/// Handler for POST /project endpoint.
///
/// Accepts a projection request and returns the completed schedule.
async fn project_handler(
    State(state): State<AppState>,
    payload: Result<Json<ProjectionRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing projection request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Project and map engine errors onto HTTP statuses
    match perform_projection(&request, state.roster()) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                start_date = %result.start_date,
                end_date = %result.end_date,
                assignments = result.assignments.len(),
                generated = result.generated.len(),
                duration_us = result.duration_us,
                "Projection completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Projection failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Builds the seed, selects the employees and runs the projection.
fn perform_projection(
    request: &ProjectionRequest,
    roster: &ConfigLoader,
) -> EngineResult<ProjectionResponse> {
    // Reversed ranges are left to the engine, which reports them itself
    let max = roster.station().max_range_days;
    let days = (request.end_date - request.start_date).num_days() + 1;
    if days > i64::from(max) {
        return Err(EngineError::RangeTooLong { days, max });
    }

    // Resolve employees and build the seed
    let employees = roster.select(request.employee_ids.as_deref())?;
    let seed = request.to_seed()?;

    // Run the projection
    let start_time = Instant::now();
    let schedule = project(request.start_date, request.end_date, &employees, &seed)?;
    let duration_us = start_time.elapsed().as_micros() as u64;

    Ok(ProjectionResponse {
        projection_id: Uuid::new_v4(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        start_date: request.start_date,
        end_date: request.end_date,
        assignments: schedule.entries(),
        generated: schedule.changes_from(&seed),
        duration_us,
    })
}
