//! Application state for the schedule API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::service::ScheduleService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    service: Arc<ScheduleService>,
}

impl AppState {
    /// Creates a new application state around the given service.
    pub fn new(service: ScheduleService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    /// Returns a handle to the schedule service.
    pub fn service(&self) -> Arc<ScheduleService> {
        Arc::clone(&self.service)
    }
}
