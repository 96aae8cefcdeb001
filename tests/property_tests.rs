//! Property tests for the fuzzy inference core.
//!
//! Every property below must hold across the whole valid input domain,
//! not just at the hand-picked fixtures in the unit tests.

use proptest::prelude::*;
use sprinkler::calculator::{Recommendation, WateringCalculator};
use sprinkler::error::ValidationError;
use sprinkler::fuzzy::{RuleOutcome, evaluate_rules, moisture_membership, temperature_membership};

fn unit(x: f64) -> bool {
    (0.0..=1.0).contains(&x)
}

// ── Membership ────────────────────────────────────────────────

proptest! {
    #[test]
    fn membership_degrees_stay_in_unit_interval(
        m in 0.0f64..=100.0,
        t in 0.0f64..=40.0,
    ) {
        let mm = moisture_membership(m);
        prop_assert!(unit(mm.dry) && unit(mm.moderate) && unit(mm.wet), "{mm:?}");
        let tm = temperature_membership(t);
        prop_assert!(unit(tm.low) && unit(tm.moderate) && unit(tm.high), "{tm:?}");
    }

    /// Below the first breakpoint the soil is purely dry.
    #[test]
    fn dry_plateau(m in 0.0f64..=30.0) {
        let mm = moisture_membership(m);
        prop_assert_eq!((mm.dry, mm.moderate, mm.wet), (1.0, 0.0, 0.0));
    }
}

// ── Rules & calculator ────────────────────────────────────────

proptest! {
    /// From 70 % upward `wet` is exactly 1, so no watering is ever advised.
    #[test]
    fn wet_soil_never_watered(m in 70.0f64..=100.0, t in 0.0f64..=40.0) {
        prop_assert_eq!(
            evaluate_rules(&moisture_membership(m), &temperature_membership(t)),
            RuleOutcome::Saturated
        );
        let rec = WateringCalculator::new().calculate(m, t).unwrap();
        prop_assert!(rec.is_no_watering_needed());
        prop_assert_eq!(rec.result().duration_minutes, 0.0);
        prop_assert_eq!(rec.result().volume_liters, 0.0);
    }

    /// Duration is bounded by all three rules firing fully: 45 / 30.
    #[test]
    fn duration_bounded(m in 0.0f64..=100.0, t in 0.0f64..=40.0) {
        let r = WateringCalculator::new().calculate(m, t).unwrap().result();
        prop_assert!((0.0..=1.5).contains(&r.duration_minutes));
    }

    #[test]
    fn volume_is_duration_times_flow(m in 0.0f64..=100.0, t in 0.0f64..=40.0) {
        let r = WateringCalculator::new().calculate(m, t).unwrap().result();
        prop_assert_eq!(r.volume_liters, r.duration_minutes * 2.0);
    }

    #[test]
    fn calculate_is_pure(m in 0.0f64..=100.0, t in 0.0f64..=40.0) {
        let calc = WateringCalculator::new();
        let a = calc.calculate(m, t).unwrap().result();
        let b = calc.calculate(m, t).unwrap().result();
        prop_assert_eq!(a.duration_minutes.to_bits(), b.duration_minutes.to_bits());
        prop_assert_eq!(a.volume_liters.to_bits(), b.volume_liters.to_bits());
    }

    /// When the heat fully saturates `high`, wetter soil inside the middle
    /// band never gets more water.
    #[test]
    fn wetter_soil_needs_no_more_water_when_hot(
        t in 30.0f64..=40.0,
        a in 30.0f64..=70.0,
        b in 30.0f64..=70.0,
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assume!(lo > 30.0);
        let calc = WateringCalculator::new();
        let d_lo = calc.calculate(lo, t).unwrap().result().duration_minutes;
        let d_hi = calc.calculate(hi, t).unwrap().result().duration_minutes;
        prop_assert!(d_hi <= d_lo + 1e-12, "d({hi})={d_hi} > d({lo})={d_lo} at t={t}");
    }

    #[test]
    fn out_of_domain_moisture_rejected(
        m in prop_oneof![-1.0e6f64..-1.0e-9, 100.0 + 1.0e-9..1.0e6],
        t in 0.0f64..=40.0,
    ) {
        prop_assert_eq!(
            WateringCalculator::new().calculate(m, t),
            Err(ValidationError::MoistureOutOfRange(m))
        );
    }

    #[test]
    fn out_of_domain_temperature_rejected(
        m in 0.0f64..=100.0,
        t in prop_oneof![-1.0e6f64..-1.0e-9, 40.0 + 1.0e-9..1.0e6],
    ) {
        prop_assert_eq!(
            WateringCalculator::new().calculate(m, t),
            Err(ValidationError::TemperatureOutOfRange(t))
        );
    }
}

#[test]
fn dry_plateau_duration_is_constant() {
    // moisture has no effect below 30: only dry∧high can fire.
    let calc = WateringCalculator::new();
    let reference = calc.calculate(0.0, 25.0).unwrap();
    for m in [5.0, 10.0, 20.0, 30.0] {
        assert_eq!(calc.calculate(m, 25.0).unwrap(), reference);
    }
    assert!(matches!(reference, Recommendation::Water(_)));
}
