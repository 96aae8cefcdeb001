//! Progress playback schedule.
//!
//! The progress indicator is a caller-side timer driven by an
//! already-computed duration.  [`ProgressSchedule`] only describes *when*
//! each percentage should be shown; the caller decides how to wait
//! (thread sleep, UI timer, nothing at all in tests).
//!
//! ```text
//!  0 %   1 %   2 %          100 %
//!  │─────│─────│─── ... ─────│
//!  t=0   Δ     2Δ            steps·Δ     Δ = minutes × secs_per_minute / steps
//! ```

use core::time::Duration;

use crate::config::WateringConfig;

/// One point on the progress timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressTick {
    /// Completion percentage, 0–100.
    pub percent: u8,
    /// Offset from the start of playback.
    pub at: Duration,
}

/// Evenly spaced progress ticks from 0 % to 100 %.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressSchedule {
    steps: u32,
    interval: Duration,
}

impl ProgressSchedule {
    /// Schedule for `duration_minutes` of watering.  A zero (or negative)
    /// duration collapses to a single, immediate 100 % tick.
    pub fn new(duration_minutes: f64, config: &WateringConfig) -> Self {
        let total_secs = duration_minutes * config.progress_secs_per_minute;
        if total_secs <= 0.0 || !total_secs.is_finite() {
            return Self {
                steps: 0,
                interval: Duration::ZERO,
            };
        }
        let steps = config.progress_steps.max(1);
        Self {
            steps,
            interval: Duration::try_from_secs_f64(total_secs / f64::from(steps)).unwrap_or(Duration::MAX),
        }
    }

    /// Gap between consecutive ticks.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Number of ticks, including both the 0 % and 100 % ticks.
    pub fn len(&self) -> usize {
        self.steps as usize + 1
    }

    /// Never true: there is always at least the final 100 % tick.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Offset of the final tick.
    pub fn total(&self) -> Duration {
        self.interval.saturating_mul(self.steps)
    }

    pub fn ticks(&self) -> impl Iterator<Item = ProgressTick> + '_ {
        (0..=self.steps).map(move |i| ProgressTick {
            percent: if self.steps == 0 {
                100
            } else {
                (u64::from(i) * 100 / u64::from(self.steps)) as u8
            },
            at: self.interval.saturating_mul(i),
        })
    }
}
