//! Mock adapters for integration tests.
//!
//! Records every emitted event so tests can assert on the full event
//! history, and keeps config in memory instead of on disk.

use std::cell::RefCell;

use sprinkler::app::events::AppEvent;
use sprinkler::app::ports::{ConfigError, ConfigPort, EventSink};
use sprinkler::config::WateringConfig;

// ── RecordingSink ─────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&AppEvent> {
        self.events.last()
    }

    pub fn count_rejections(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, AppEvent::InputRejected(_)))
            .count()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}

// ── MemConfig ─────────────────────────────────────────────────

pub struct MemConfig {
    stored: RefCell<Option<WateringConfig>>,
}

#[allow(dead_code)]
impl MemConfig {
    pub fn new() -> Self {
        Self {
            stored: RefCell::new(None),
        }
    }
}

impl ConfigPort for MemConfig {
    fn load(&self) -> Result<WateringConfig, ConfigError> {
        Ok(self.stored.borrow().clone().unwrap_or_default())
    }

    fn save(&self, config: &WateringConfig) -> Result<(), ConfigError> {
        config.validate()?;
        *self.stored.borrow_mut() = Some(config.clone());
        Ok(())
    }
}
