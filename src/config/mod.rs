//! Configuration loading and management for the schedule engine.
//!
//! This module provides the rule configuration (time windows and minimum
//! durations) and loads it from a YAML file, falling back to built-in
//! defaults for anything the file leaves out.
//!
//! # Example
//!
//! ```no_run
//! use schedule_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config").unwrap();
//! println!("Minimum shift: {} minutes", loader.config().min_shift_minutes);
//! ```

mod loader;
mod types;

pub use loader::{CONFIG_FILE_NAME, ConfigLoader};
pub use types::{MaintenanceRule, ScheduleConfig};
