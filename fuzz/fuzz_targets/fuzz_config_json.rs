//! Fuzz target: config JSON parsing + validation
//!
//! Arbitrary bytes are parsed as a `WateringConfig`.  Whatever parses and
//! validates must build a working service.
//!
//! cargo fuzz run fuzz_config_json

#![no_main]

use libfuzzer_sys::fuzz_target;
use sprinkler::app::service::WateringService;
use sprinkler::config::WateringConfig;

fuzz_target!(|data: &[u8]| {
    let Ok(cfg) = serde_json::from_slice::<WateringConfig>(data) else {
        return;
    };
    if cfg.validate().is_err() {
        assert!(WateringService::new(cfg).is_err());
        return;
    }
    let svc = WateringService::new(cfg).expect("validated config must build a service");
    let rec = svc.calculator().calculate(50.0, 25.0).expect("fixture is in domain");
    let _ = svc.progress_for(&rec);
    let _ = svc.pattern_for(&rec);
});
