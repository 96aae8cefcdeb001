//! Watering calculator: the single entry point into the fuzzy core.
//!
//! [`WateringCalculator::calculate`] validates both readings, runs the
//! inference pipeline, and converts the resulting duration into a water
//! volume at the configured flow rate.  It is `Copy`, holds no mutable
//! state, and performs no I/O, so independent requests can be evaluated
//! from any thread.
//!
//! Saturated soil is a successful outcome, not an error: callers branch on
//! [`Recommendation::NoWateringNeeded`] to show an informational notice.

use log::{debug, info};
use serde::Serialize;

use crate::config::WateringConfig;
use crate::error::ValidationError;
use crate::fuzzy::membership::{MOISTURE_MAX, TEMP_MAX};
use crate::fuzzy::{
    MoistureMembership, RuleOutcome, TemperatureMembership, defuzzify, evaluate_rules,
    moisture_membership, temperature_membership,
};

/// Flow rate used when no configuration is supplied (litres per minute).
pub const DEFAULT_FLOW_RATE_L_PER_MIN: f64 = 2.0;

/// Final computed pair handed to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct WateringResult {
    pub duration_minutes: f64,
    pub volume_liters: f64,
}

/// Why no watering is recommended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoWateringReason {
    /// Soil moisture fully wet; the rule engine short-circuited.
    SoilSaturated,
    /// Every rule weight was zero (e.g. dry soil on a cold day).
    NoRuleFired,
}

impl NoWateringReason {
    /// Second sentence of the "No Watering Needed" notice.
    pub fn notice(self) -> &'static str {
        match self {
            Self::SoilSaturated => "The soil is already wet. No watering is necessary.",
            Self::NoRuleFired => {
                "It is too cool for the soil to dry out. No watering is necessary."
            }
        }
    }
}

/// Successful outcome of a calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Recommendation {
    /// Water for the given duration.
    Water(WateringResult),
    /// Nothing to do.  Equivalent to a zero duration and volume.
    NoWateringNeeded { reason: NoWateringReason },
}

impl Recommendation {
    /// Duration and volume, zero for [`Recommendation::NoWateringNeeded`].
    pub fn result(&self) -> WateringResult {
        match self {
            Self::Water(r) => *r,
            Self::NoWateringNeeded { .. } => WateringResult::default(),
        }
    }

    /// True when the caller should show the "no watering needed" notice.
    pub fn is_no_watering_needed(&self) -> bool {
        matches!(self, Self::NoWateringNeeded { .. })
    }
}

/// Every intermediate value of one inference, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InferenceTrace {
    pub moisture: MoistureMembership,
    pub temperature: TemperatureMembership,
    pub rules: RuleOutcome,
    pub recommendation: Recommendation,
}

/// Stateless calculator.  The flow rate is the only parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WateringCalculator {
    flow_rate_l_per_min: f64,
}

impl Default for WateringCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl WateringCalculator {
    pub fn new() -> Self {
        Self {
            flow_rate_l_per_min: DEFAULT_FLOW_RATE_L_PER_MIN,
        }
    }

    /// Build a calculator from a (validated) configuration.
    pub fn from_config(config: &WateringConfig) -> Self {
        Self {
            flow_rate_l_per_min: config.flow_rate_l_per_min,
        }
    }

    pub fn flow_rate(&self) -> f64 {
        self.flow_rate_l_per_min
    }

    /// Recommend a watering duration and volume.
    pub fn calculate(&self, moisture: f64, temperature: f64) -> Result<Recommendation, ValidationError> {
        self.inspect(moisture, temperature).map(|t| t.recommendation)
    }

    /// Same as [`calculate`](Self::calculate) but keeps every intermediate
    /// value of the inference.
    pub fn inspect(&self, moisture: f64, temperature: f64) -> Result<InferenceTrace, ValidationError> {
        validate(moisture, temperature).inspect_err(|e| debug!("rejected input: {e}"))?;

        let m = moisture_membership(moisture);
        let t = temperature_membership(temperature);
        debug!(
            "fuzzify: moisture={moisture} -> {m:?}, temperature={temperature} -> {t:?}"
        );

        let rules = evaluate_rules(&m, &t);
        let recommendation = match rules {
            RuleOutcome::Saturated => Recommendation::NoWateringNeeded {
                reason: NoWateringReason::SoilSaturated,
            },
            RuleOutcome::Weights(w) => {
                let duration_minutes = defuzzify(&w);
                if duration_minutes == 0.0 {
                    Recommendation::NoWateringNeeded {
                        reason: NoWateringReason::NoRuleFired,
                    }
                } else {
                    Recommendation::Water(WateringResult {
                        duration_minutes,
                        volume_liters: duration_minutes * self.flow_rate_l_per_min,
                    })
                }
            }
        };
        info!("recommendation for moisture={moisture} temperature={temperature}: {recommendation:?}");

        Ok(InferenceTrace {
            moisture: m,
            temperature: t,
            rules,
            recommendation,
        })
    }
}

/// Reject readings outside their domain.  Moisture is checked first.
/// NaN fails both range checks and is rejected too.
pub fn validate(moisture: f64, temperature: f64) -> Result<(), ValidationError> {
    if !(0.0..=MOISTURE_MAX).contains(&moisture) {
        return Err(ValidationError::MoistureOutOfRange(moisture));
    }
    if !(0.0..=TEMP_MAX).contains(&temperature) {
        return Err(ValidationError::TemperatureOutOfRange(temperature));
    }
    Ok(())
}
