use super::*;

#[test]
fn defaults_are_complete_and_valid() {
    let s = Settings::default();
    assert_eq!(s.canvas.width, 1080);
    assert_eq!(s.canvas.height, 1080);
    assert_eq!(s.point_count, 50);
    assert_eq!(s.z_spread, 1.0);
    assert_eq!(s.point_size, 0.5);
    assert_eq!(s.threshold, [0.15, 0.7]);
    assert_eq!(s.speed, 0.3);
    assert!(s.animate);
    assert_eq!(s.mode, VariantMode::Animated);
    assert_eq!(s.capture.fps, 30);
    s.validate().unwrap();
}

#[test]
fn empty_json_parses_to_defaults() {
    let s = Settings::from_reader("{}".as_bytes()).unwrap();
    assert_eq!(s.point_count, Settings::default().point_count);
    s.validate().unwrap();
}

#[test]
fn partial_json_overrides_only_named_fields() {
    let json = r#"{"point_count": 12, "mode": "audio_reactive", "threshold": [0.1, 0.9]}"#;
    let s = Settings::from_reader(json.as_bytes()).unwrap();
    assert_eq!(s.point_count, 12);
    assert_eq!(s.mode, VariantMode::AudioReactive);
    assert_eq!(s.threshold, [0.1, 0.9]);
    assert_eq!(s.speed, Settings::default().speed);
}

#[test]
fn malformed_json_reports_a_validation_error() {
    let err = Settings::from_reader("{not json".as_bytes()).unwrap_err();
    assert!(matches!(err, CellscanError::Validation(_)));
}

#[test]
fn validation_collects_every_violation_with_its_path() {
    let mut s = Settings::default();
    s.canvas.width = 10;
    s.point_count = 500;
    s.threshold = [0.9, 0.1];
    s.speed = 9.0;

    let msg = s.validate().unwrap_err().to_string();
    assert!(msg.contains("$.canvas.width"), "{msg}");
    assert!(msg.contains("$.point_count"), "{msg}");
    assert!(msg.contains("$.threshold"), "{msg}");
    assert!(msg.contains("$.speed"), "{msg}");
}

#[test]
fn non_finite_scalars_are_rejected() {
    let mut s = Settings::default();
    s.z_spread = f32::NAN;
    let msg = s.validate().unwrap_err().to_string();
    assert!(msg.contains("$.z_spread"), "{msg}");
}

#[test]
fn degenerate_threshold_range_is_rejected_at_the_boundary() {
    let mut s = Settings::default();
    s.threshold = [0.5, 0.5];
    assert!(s.validate().is_err());
}

#[test]
fn capture_duration_is_bounded() {
    let mut s = Settings::default();
    s.capture.duration_secs = 45.0;
    assert!(s.validate().is_err());
    s.capture.duration_secs = 0.2;
    assert!(s.validate().is_err());
    s.capture.duration_secs = 30.0;
    s.validate().unwrap();
}
