//! Weighted-centroid defuzzification.

use super::rules::OutputWeights;

/// Representative duration of the "short" category (minutes).
pub const SHORT_MINUTES: f64 = 7.5;
/// Representative duration of the "medium" category (minutes).
pub const MEDIUM_MINUTES: f64 = 15.0;
/// Representative duration of the "long" category (minutes).
pub const LONG_MINUTES: f64 = 22.5;
/// Fixed normalising divisor.  Not the sum of the representatives (45)
/// and not the sum of the weights.
pub const NORMALISER: f64 = 30.0;

/// Collapse category weights into a single duration in minutes.
pub fn defuzzify(weights: &OutputWeights) -> f64 {
    (weights.short * SHORT_MINUTES + weights.medium * MEDIUM_MINUTES + weights.long * LONG_MINUTES)
        / NORMALISER
}
