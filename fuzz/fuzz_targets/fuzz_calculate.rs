//! Fuzz target: `WateringCalculator::calculate`
//!
//! Feeds arbitrary bit patterns (NaN, infinities, subnormals included) as
//! the two readings and verifies:
//! - No panics
//! - Anything outside [0,100] × [0,40] is a typed `ValidationError`
//! - Accepted input yields a finite duration in [0, 1.5] and
//!   volume = duration × flow rate
//!
//! cargo fuzz run fuzz_calculate

#![no_main]

use libfuzzer_sys::fuzz_target;
use sprinkler::calculator::WateringCalculator;

fuzz_target!(|data: &[u8]| {
    if data.len() < 16 {
        return;
    }
    let moisture = f64::from_le_bytes(data[0..8].try_into().unwrap());
    let temperature = f64::from_le_bytes(data[8..16].try_into().unwrap());

    let calc = WateringCalculator::new();
    let in_domain = (0.0..=100.0).contains(&moisture) && (0.0..=40.0).contains(&temperature);

    match calc.calculate(moisture, temperature) {
        Ok(rec) => {
            assert!(in_domain, "accepted out-of-domain input {moisture}, {temperature}");
            let r = rec.result();
            assert!(r.duration_minutes.is_finite());
            assert!((0.0..=1.5).contains(&r.duration_minutes), "duration {}", r.duration_minutes);
            assert_eq!(r.volume_liters, r.duration_minutes * calc.flow_rate());
        }
        Err(_) => assert!(!in_domain, "rejected in-domain input {moisture}, {temperature}"),
    }
});
