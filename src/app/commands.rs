//! Inbound commands to the application service.
//!
//! These represent actions requested by the outside world (CLI, a future
//! form front end) that the [`WateringService`](super::service::WateringService)
//! interprets and acts upon.

use crate::config::WateringConfig;

/// Commands that external adapters can send into the application core.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Compute a recommendation for one pair of readings.
    Calculate { moisture: f64, temperature: f64 },

    /// Hot-reload configuration.
    UpdateConfig(WateringConfig),
}
