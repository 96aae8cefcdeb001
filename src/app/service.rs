//! Application service: the hexagonal core.
//!
//! [`WateringService`] owns the active configuration and the calculator
//! built from it.  It exposes a clean, I/O-free API; every outbound
//! notification flows through an [`EventSink`] injected at call sites,
//! making the service testable with a recording mock.
//!
//! ```text
//!  AppCommand ──▶ ┌────────────────────────┐ ──▶ EventSink
//!                 │    WateringService      │
//!                 │  validate · fuzzy core  │
//!                 └────────────────────────┘
//! ```
//!
//! The service never sleeps.  Progress playback and the sprinkler pattern
//! are derived from an already-returned [`Recommendation`].

use log::info;

use crate::calculator::{InferenceTrace, Recommendation, WateringCalculator};
use crate::config::WateringConfig;
use crate::error::{Result, ValidationError};
use crate::pattern::SprinklerPattern;
use crate::progress::ProgressSchedule;

use super::commands::AppCommand;
use super::events::AppEvent;
use super::ports::{ConfigError, EventSink};

// ───────────────────────────────────────────────────────────────
// WateringService
// ───────────────────────────────────────────────────────────────

/// The application service orchestrates all domain logic.
#[derive(Debug, Clone)]
pub struct WateringService {
    config: WateringConfig,
    calculator: WateringCalculator,
}

impl WateringService {
    /// Construct the service.  The configuration is validated first.
    pub fn new(config: WateringConfig) -> core::result::Result<Self, ConfigError> {
        config.validate()?;
        let calculator = WateringCalculator::from_config(&config);
        Ok(Self { config, calculator })
    }

    // ── Command handling ──────────────────────────────────────

    /// Process an external command.  `Calculate` yields its
    /// recommendation; `UpdateConfig` yields `None`.
    pub fn handle_command(
        &mut self,
        cmd: AppCommand,
        sink: &mut impl EventSink,
    ) -> Result<Option<Recommendation>> {
        match cmd {
            AppCommand::Calculate {
                moisture,
                temperature,
            } => Ok(Some(self.calculate(moisture, temperature, sink)?)),
            AppCommand::UpdateConfig(new_config) => {
                new_config.validate()?;
                self.calculator = WateringCalculator::from_config(&new_config);
                sink.emit(&AppEvent::ConfigUpdated {
                    flow_rate_l_per_min: new_config.flow_rate_l_per_min,
                });
                self.config = new_config;
                info!("Configuration updated at runtime");
                Ok(None)
            }
        }
    }

    /// Run one calculation and report its outcome to `sink`.
    pub fn calculate(
        &self,
        moisture: f64,
        temperature: f64,
        sink: &mut impl EventSink,
    ) -> core::result::Result<Recommendation, ValidationError> {
        self.inspect(moisture, temperature, sink)
            .map(|trace| trace.recommendation)
    }

    /// Like [`calculate`](Self::calculate), but hands back every
    /// intermediate value of the inference.  Events are emitted once.
    pub fn inspect(
        &self,
        moisture: f64,
        temperature: f64,
        sink: &mut impl EventSink,
    ) -> core::result::Result<InferenceTrace, ValidationError> {
        sink.emit(&AppEvent::CalculationRequested {
            moisture,
            temperature,
        });

        match self.calculator.inspect(moisture, temperature) {
            Ok(trace) => {
                match trace.recommendation {
                    Recommendation::Water(result) => sink.emit(&AppEvent::WateringRecommended(result)),
                    Recommendation::NoWateringNeeded { reason } => {
                        sink.emit(&AppEvent::NoWateringNeeded(reason));
                    }
                }
                Ok(trace)
            }
            Err(e) => {
                sink.emit(&AppEvent::InputRejected(e));
                Err(e)
            }
        }
    }

    // ── Presentation helpers ──────────────────────────────────

    /// Progress ticks for a recommendation, to be played back by the caller.
    pub fn progress_for(&self, rec: &Recommendation) -> ProgressSchedule {
        ProgressSchedule::new(rec.result().duration_minutes, &self.config)
    }

    /// Sprinkler stream pattern for a recommendation.
    pub fn pattern_for(&self, rec: &Recommendation) -> SprinklerPattern {
        SprinklerPattern::new(rec.result().duration_minutes, &self.config)
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn config(&self) -> &WateringConfig {
        &self.config
    }

    pub fn calculator(&self) -> WateringCalculator {
        self.calculator
    }
}
