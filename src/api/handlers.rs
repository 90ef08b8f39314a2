//! HTTP request handlers for the schedule API.
//!
//! This module contains the handler functions for all API endpoints. Store
//! access is synchronous, so service calls run on the blocking pool.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::DayForm;

use super::request::parse_date;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
///
/// | Method | Path                  | Body / result                       |
/// |--------|-----------------------|-------------------------------------|
/// | GET    | `/events`             | calendar events for every shift     |
/// | GET    | `/days/:date`         | the day's `DayForm`                 |
/// | PUT    | `/days/:date`         | `DayForm` in, `SaveOutcome` out     |
/// | GET    | `/days/:date/summary` | the day's `DaySummary`, 404 if none |
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/events", get(events_handler))
        .route("/days/:date", get(load_day_handler).put(save_day_handler))
        .route("/days/:date/summary", get(summary_handler))
        .with_state(state)
}

/// Runs a service call on the blocking pool, mapping both engine errors and
/// task failures to API errors.
async fn run_service<T, F>(call: F) -> Result<T, ApiErrorResponse>
where
    F: FnOnce() -> EngineResult<T> + Send + 'static,
    T: Send + 'static,
{
    match tokio::task::spawn_blocking(call).await {
        Ok(result) => result.map_err(ApiErrorResponse::from),
        Err(err) => Err(ApiErrorResponse::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::internal(err.to_string()),
        )),
    }
}

fn failure(correlation_id: Uuid, error: ApiErrorResponse) -> Response {
    warn!(
        correlation_id = %correlation_id,
        code = %error.error.code,
        message = %error.error.message,
        "Request failed"
    );
    error.into_response()
}

/// Handler for GET /events.
async fn events_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Listing calendar events");

    let service = state.service();
    match run_service(move || service.calendar_events()).await {
        Ok(events) => (StatusCode::OK, Json(events)).into_response(),
        Err(error) => failure(correlation_id, error),
    }
}

/// Handler for GET /days/:date.
async fn load_day_handler(State(state): State<AppState>, Path(date): Path<String>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, date = %date, "Loading day");

    let date = match parse_date(&date) {
        Ok(date) => date,
        Err(err) => return failure(correlation_id, err.into()),
    };

    let service = state.service();
    match run_service(move || service.load_day(date)).await {
        Ok(form) => (StatusCode::OK, Json(form)).into_response(),
        Err(error) => failure(correlation_id, error),
    }
}

/// Handler for PUT /days/:date.
///
/// Answers 200 when stored, 422 with the validation messages when the
/// shifts break a rule, and 500 with a generic message when storage fails.
async fn save_day_handler(
    State(state): State<AppState>,
    Path(date): Path<String>,
    payload: Result<Json<DayForm>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, date = %date, "Saving day");

    let date = match parse_date(&date) {
        Ok(date) => date,
        Err(err) => return failure(correlation_id, err.into()),
    };

    let form = match payload {
        Ok(Json(form)) => form,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => ApiError::malformed_json(err.body_text()),
                JsonRejection::JsonSyntaxError(err) => {
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return failure(
                correlation_id,
                ApiErrorResponse::new(StatusCode::BAD_REQUEST, error),
            );
        }
    };

    let service = state.service();
    match run_service(move || Ok(service.save_day(date, &form))).await {
        Ok(outcome) => {
            let status = if outcome.success {
                StatusCode::OK
            } else if outcome.storage_failure {
                StatusCode::INTERNAL_SERVER_ERROR
            } else {
                StatusCode::UNPROCESSABLE_ENTITY
            };
            info!(
                correlation_id = %correlation_id,
                success = outcome.success,
                errors = outcome.errors.len(),
                "Save finished"
            );
            (status, Json(outcome)).into_response()
        }
        Err(error) => failure(correlation_id, error),
    }
}

/// Handler for GET /days/:date/summary.
async fn summary_handler(State(state): State<AppState>, Path(date): Path<String>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, date = %date, "Loading day summary");

    let date = match parse_date(&date) {
        Ok(date) => date,
        Err(err) => return failure(correlation_id, err.into()),
    };

    let service = state.service();
    match run_service(move || service.day_summary(date)).await {
        Ok(Some(summary)) => (StatusCode::OK, Json(summary)).into_response(),
        Ok(None) => failure(
            correlation_id,
            ApiErrorResponse::new(
                StatusCode::NOT_FOUND,
                ApiError::not_found(format!("No summary stored for {}", date)),
            ),
        ),
        Err(error) => failure(correlation_id, error),
    }
}
