//! Fuzzy inference pipeline: pure functions, no state.
//!
//! ```text
//!  raw value ──▶ membership ──▶ rules ──▶ defuzz ──▶ minutes
//! ```

pub mod defuzz;
pub mod membership;
pub mod rules;

pub use defuzz::defuzzify;
pub use membership::{MoistureMembership, TemperatureMembership, moisture_membership, temperature_membership};
pub use rules::{OutputWeights, RuleOutcome, evaluate_rules};
