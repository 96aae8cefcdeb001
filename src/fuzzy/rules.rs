//! Rule evaluation.
//!
//! Three fixed rules, each a fuzzy AND (minimum) of its antecedents:
//!
//! | consequent | antecedents                                |
//! |------------|--------------------------------------------|
//! | long       | moisture is dry AND temperature is high    |
//! | medium     | moisture is moderate AND temp is moderate  |
//! | short      | moisture is wet                            |
//!
//! The other combinations of the 3×3 matrix deliberately have no rule.
//! Fully wet soil short-circuits before any weight is computed.

use log::debug;
use serde::Serialize;

use super::membership::{MoistureMembership, TemperatureMembership};

/// Weights of the three duration categories.  Not normalised.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct OutputWeights {
    pub short: f64,
    pub medium: f64,
    pub long: f64,
}

impl OutputWeights {
    /// True when no rule fired at all.
    pub fn is_empty(&self) -> bool {
        self.short == 0.0 && self.medium == 0.0 && self.long == 0.0
    }
}

/// What the rule engine concluded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RuleOutcome {
    /// `wet == 1`: the soil needs no water; defuzzification is skipped.
    Saturated,
    /// Category weights to hand to the defuzzifier.
    Weights(OutputWeights),
}

/// Combine the two membership sets into duration-category weights.
pub fn evaluate_rules(moisture: &MoistureMembership, temperature: &TemperatureMembership) -> RuleOutcome {
    if moisture.wet == 1.0 {
        debug!("rules: soil saturated, skipping weights");
        return RuleOutcome::Saturated;
    }

    let weights = OutputWeights {
        long: moisture.dry.min(temperature.high),
        medium: moisture.moderate.min(temperature.moderate),
        short: moisture.wet,
    };
    debug!(
        "rules: short={:.3} medium={:.3} long={:.3}",
        weights.short, weights.medium, weights.long
    );
    RuleOutcome::Weights(weights)
}
