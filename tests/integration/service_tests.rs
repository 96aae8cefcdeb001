//! WateringService → calculator → EventSink.

use sprinkler::app::commands::AppCommand;
use sprinkler::app::events::AppEvent;
use sprinkler::app::service::WateringService;
use sprinkler::calculator::{NoWateringReason, Recommendation, WateringResult};
use sprinkler::config::WateringConfig;
use sprinkler::error::{Error, ValidationError};

use super::mock_sink::RecordingSink;

fn service() -> WateringService {
    WateringService::new(WateringConfig::default()).unwrap()
}

#[test]
fn regression_fixture_through_service() {
    let mut svc = service();
    let mut sink = RecordingSink::new();

    let rec = svc
        .handle_command(
            AppCommand::Calculate {
                moisture: 50.0,
                temperature: 25.0,
            },
            &mut sink,
        )
        .unwrap()
        .unwrap();

    let expected = WateringResult {
        duration_minutes: 1.0,
        volume_liters: 2.0,
    };
    assert_eq!(rec, Recommendation::Water(expected));
    assert_eq!(sink.last(), Some(&AppEvent::WateringRecommended(expected)));
}

#[test]
fn saturated_soil_is_informational_not_error() {
    let svc = service();
    let mut sink = RecordingSink::new();

    let rec = svc.calculate(100.0, 35.0, &mut sink).unwrap();
    assert!(rec.is_no_watering_needed());
    assert_eq!(rec.result().duration_minutes, 0.0);
    assert_eq!(rec.result().volume_liters, 0.0);
    assert_eq!(
        sink.last(),
        Some(&AppEvent::NoWateringNeeded(NoWateringReason::SoilSaturated))
    );
    assert_eq!(sink.count_rejections(), 0);
}

#[test]
fn every_out_of_range_input_is_rejected() {
    let svc = service();
    let mut sink = RecordingSink::new();

    let cases = [
        (-1.0, 20.0, ValidationError::MoistureOutOfRange(-1.0)),
        (101.0, 20.0, ValidationError::MoistureOutOfRange(101.0)),
        (50.0, -1.0, ValidationError::TemperatureOutOfRange(-1.0)),
        (50.0, 41.0, ValidationError::TemperatureOutOfRange(41.0)),
    ];
    for (m, t, expected) in cases {
        assert_eq!(svc.calculate(m, t, &mut sink), Err(expected));
        assert_eq!(sink.last(), Some(&AppEvent::InputRejected(expected)));
    }
    assert_eq!(sink.count_rejections(), 4);
    assert!(
        !sink
            .events
            .iter()
            .any(|e| matches!(e, AppEvent::WateringRecommended(_) | AppEvent::NoWateringNeeded(_)))
    );
}

#[test]
fn rejected_command_surfaces_as_validation_error() {
    let mut svc = service();
    let mut sink = RecordingSink::new();
    let err = svc
        .handle_command(
            AppCommand::Calculate {
                moisture: 150.0,
                temperature: 20.0,
            },
            &mut sink,
        )
        .unwrap_err();
    assert!(matches!(err, Error::Validation(ValidationError::MoistureOutOfRange(_))));
}

#[test]
fn config_update_changes_volume_not_duration() {
    let mut svc = service();
    let mut sink = RecordingSink::new();

    let before = svc.calculate(50.0, 25.0, &mut sink).unwrap().result();

    let cfg = WateringConfig {
        flow_rate_l_per_min: 5.0,
        ..Default::default()
    };
    assert_eq!(svc.handle_command(AppCommand::UpdateConfig(cfg), &mut sink).unwrap(), None);
    assert_eq!(
        sink.last(),
        Some(&AppEvent::ConfigUpdated {
            flow_rate_l_per_min: 5.0
        })
    );

    let after = svc.calculate(50.0, 25.0, &mut sink).unwrap().result();
    assert_eq!(after.duration_minutes, before.duration_minutes);
    assert_eq!(after.volume_liters, 5.0);
}

#[test]
fn presentation_helpers_follow_duration() {
    let svc = service();
    let mut sink = RecordingSink::new();
    let rec = svc.calculate(50.0, 25.0, &mut sink).unwrap();

    let progress = svc.progress_for(&rec);
    assert_eq!(progress.len(), 101);
    assert_eq!(progress.total(), std::time::Duration::from_secs(1));

    let pattern = svc.pattern_for(&rec);
    assert_eq!(pattern.total_frames, 1200);
}

#[test]
fn repeated_calls_are_bit_identical() {
    let svc = service();
    let mut sink = RecordingSink::new();
    let a = svc.calculate(42.5, 33.3, &mut sink).unwrap().result();
    let b = svc.calculate(42.5, 33.3, &mut sink).unwrap().result();
    assert_eq!(a.duration_minutes.to_bits(), b.duration_minutes.to_bits());
    assert_eq!(a.volume_liters.to_bits(), b.volume_liters.to_bits());
}
