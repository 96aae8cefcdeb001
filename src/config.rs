//! System configuration parameters
//!
//! All tunable parameters for the irrigation advisor.  The fuzzy rule base
//! itself is fixed; only the plumbing around it (flow rate, progress
//! playback, sprinkler pattern) is configurable.  Values can be overridden
//! via a JSON file loaded through [`ConfigPort`](crate::app::ports::ConfigPort).

use serde::{Deserialize, Serialize};

use crate::app::ports::ConfigError;

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WateringConfig {
    // --- Delivery ---
    /// Sprinkler flow rate in litres per minute
    pub flow_rate_l_per_min: f64,

    // --- Progress indicator ---
    /// Number of progress increments between 0 % and 100 %
    pub progress_steps: u32,
    /// Wall-clock seconds of progress playback per recommended minute
    pub progress_secs_per_minute: f64,

    // --- Sprinkler pattern ---
    /// Number of water streams around the sprinkler head
    pub sprinkler_streams: u16,
    /// Sample points along each stream trajectory
    pub stream_samples: u16,
    /// Animation frame rate (frames per second)
    pub animation_fps: u16,
}

impl Default for WateringConfig {
    fn default() -> Self {
        Self {
            // Delivery
            flow_rate_l_per_min: 2.0,

            // Progress
            progress_steps: 100,
            progress_secs_per_minute: 1.0,

            // Pattern
            sprinkler_streams: 20,
            stream_samples: 100,
            animation_fps: 20,
        }
    }
}

impl WateringConfig {
    /// Range-check every field.  Invalid values are rejected, never clamped.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.flow_rate_l_per_min.is_finite() || self.flow_rate_l_per_min <= 0.0 {
            return Err(ConfigError::ValidationFailed(
                "flow_rate_l_per_min must be a positive number",
            ));
        }
        if !(1..=10_000).contains(&self.progress_steps) {
            return Err(ConfigError::ValidationFailed("progress_steps must be 1–10000"));
        }
        // 60 s per minute is real time.
        if !(0.0..=60.0).contains(&self.progress_secs_per_minute) {
            return Err(ConfigError::ValidationFailed(
                "progress_secs_per_minute must be 0–60",
            ));
        }
        if !(1..=360).contains(&self.sprinkler_streams) {
            return Err(ConfigError::ValidationFailed("sprinkler_streams must be 1–360"));
        }
        if !(2..=1000).contains(&self.stream_samples) {
            return Err(ConfigError::ValidationFailed("stream_samples must be 2–1000"));
        }
        if !(1..=120).contains(&self.animation_fps) {
            return Err(ConfigError::ValidationFailed("animation_fps must be 1–120"));
        }
        Ok(())
    }
}
