//! ConfigPort → WateringService flow, against the in-memory mock and the
//! real JSON file adapter.

use sprinkler::adapters::file_config::FileConfigStore;
use sprinkler::app::ports::{ConfigError, ConfigPort};
use sprinkler::app::service::WateringService;
use sprinkler::config::WateringConfig;

use super::mock_sink::{MemConfig, RecordingSink};

#[test]
fn fresh_store_boots_with_defaults() {
    let store = MemConfig::new();
    let svc = WateringService::new(store.load().unwrap()).unwrap();
    assert_eq!(svc.calculator().flow_rate(), 2.0);
}

#[test]
fn saved_flow_rate_reaches_calculator() {
    let store = MemConfig::new();
    store
        .save(&WateringConfig {
            flow_rate_l_per_min: 1.0,
            ..Default::default()
        })
        .unwrap();

    let svc = WateringService::new(store.load().unwrap()).unwrap();
    let mut sink = RecordingSink::new();
    let r = svc.calculate(50.0, 25.0, &mut sink).unwrap().result();
    assert_eq!(r.volume_liters, 1.0);
}

#[test]
fn invalid_config_never_persists() {
    let store = MemConfig::new();
    let bad = WateringConfig {
        sprinkler_streams: 0,
        ..Default::default()
    };
    assert!(matches!(store.save(&bad), Err(ConfigError::ValidationFailed(_))));
    assert_eq!(store.load().unwrap(), WateringConfig::default());
}

#[test]
fn json_file_store_round_trip() {
    let dir = std::env::temp_dir().join(format!("sprinkler-it-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("sprinkler.json");

    let store = FileConfigStore::new(&path);
    let cfg = WateringConfig {
        flow_rate_l_per_min: 2.5,
        animation_fps: 25,
        ..Default::default()
    };
    store.save(&cfg).unwrap();

    let svc = WateringService::new(store.load().unwrap()).unwrap();
    assert_eq!(svc.config(), &cfg);

    std::fs::remove_dir_all(dir).ok();
}
