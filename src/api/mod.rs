//! HTTP API module for the schedule engine.
//!
//! This module exposes the schedule service as JSON endpoints for a
//! calendar front end.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::parse_date;
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
