//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the `log` facade.  Whatever logger the binary installs decides where
//! they end up.

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`].
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::CalculationRequested {
                moisture,
                temperature,
            } => {
                info!("CALC | moisture={:.1}% | T={:.1}\u{00b0}C", moisture, temperature);
            }
            AppEvent::WateringRecommended(r) => {
                info!(
                    "WATER | duration={:.2}min | volume={:.2}L",
                    r.duration_minutes, r.volume_liters
                );
            }
            AppEvent::NoWateringNeeded(reason) => {
                info!("SKIP | no watering needed, reason={:?}", reason);
            }
            AppEvent::InputRejected(e) => {
                warn!("REJECT | value={} | {}", e.value(), e);
            }
            AppEvent::ConfigUpdated {
                flow_rate_l_per_min,
            } => {
                info!("CONFIG | flow={:.2}L/min", flow_rate_l_per_min);
            }
        }
    }
}
