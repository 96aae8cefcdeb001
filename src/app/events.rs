//! Outbound application events.
//!
//! The [`WateringService`](super::service::WateringService) emits these
//! through the [`EventSink`](super::ports::EventSink) port.  Adapters on
//! the other side decide what to do with them: log them, print them,
//! record them in a test.

use crate::calculator::{NoWateringReason, WateringResult};
use crate::error::ValidationError;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// A calculation was requested with these raw readings.
    CalculationRequested { moisture: f64, temperature: f64 },

    /// Watering is recommended.
    WateringRecommended(WateringResult),

    /// The soil needs no water.  Informational, not a failure.
    NoWateringNeeded(NoWateringReason),

    /// A reading was outside its domain; nothing was computed.
    InputRejected(ValidationError),

    /// Runtime configuration replaced (carries the new flow rate).
    ConfigUpdated { flow_rate_l_per_min: f64 },
}
