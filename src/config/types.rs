//! Configuration types for schedule rules.
//!
//! This module contains the strongly-typed rule configuration that is
//! deserialized from YAML. Every field has a default, so a partial file only
//! overrides what it names.

use serde::{Deserialize, Serialize};

use crate::calculation::{
    DEFAULT_EARLY_MORNING_WINDOW, DEFAULT_MAINTENANCE_MIN_DURATION, DEFAULT_MAINTENANCE_WINDOWS,
    DEFAULT_MIN_SHIFT_MINUTES, DEFAULT_MIN_SPLIT_TOTAL_MINUTES, DEFAULT_NIGHT_WINDOW,
};
use crate::models::ShiftInterval;

/// Maintenance bonus rule.
///
/// A shift qualifies when it lasts at least `min_duration_minutes` and one of
/// the `windows` lies entirely inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaintenanceRule {
    /// Windows that must be covered; any one is enough.
    pub windows: Vec<ShiftInterval>,
    /// Minimum shift length in minutes.
    pub min_duration_minutes: u32,
}

impl Default for MaintenanceRule {
    fn default() -> Self {
        Self {
            windows: DEFAULT_MAINTENANCE_WINDOWS.to_vec(),
            min_duration_minutes: DEFAULT_MAINTENANCE_MIN_DURATION,
        }
    }
}

/// The complete rule configuration.
///
/// # Example
///
/// ```
/// use schedule_engine::config::ScheduleConfig;
///
/// let config = ScheduleConfig::default();
/// assert_eq!(config.night_window.to_string(), "22:00 - 06:00");
/// assert_eq!(config.min_shift_minutes, 120);
/// assert_eq!(config.min_split_total_minutes, 300);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Window counted as night time.
    pub night_window: ShiftInterval,
    /// Window a shift must start in for the early-morning bonus.
    pub early_morning_window: ShiftInterval,
    /// Maintenance bonus rule.
    pub maintenance: MaintenanceRule,
    /// Minimum length of any single shift, in minutes.
    pub min_shift_minutes: u32,
    /// Minimum combined length of a split-shift day, in minutes.
    pub min_split_total_minutes: u32,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            night_window: DEFAULT_NIGHT_WINDOW,
            early_morning_window: DEFAULT_EARLY_MORNING_WINDOW,
            maintenance: MaintenanceRule::default(),
            min_shift_minutes: DEFAULT_MIN_SHIFT_MINUTES,
            min_split_total_minutes: DEFAULT_MIN_SPLIT_TOTAL_MINUTES,
        }
    }
}
