use super::*;

#[test]
fn frame_range_rejects_inverted_bounds() {
    assert!(FrameRange::new(FrameIndex(5), FrameIndex(4)).is_err());
    assert!(FrameRange::new(FrameIndex(4), FrameIndex(4)).is_ok());
}

#[test]
fn frame_range_len_and_contains() {
    let r = FrameRange::new(FrameIndex(10), FrameIndex(13)).unwrap();
    assert_eq!(r.len_frames(), 3);
    assert!(!r.is_empty());
    assert!(r.contains(FrameIndex(10)));
    assert!(r.contains(FrameIndex(12)));
    assert!(!r.contains(FrameIndex(13)));

    let empty = FrameRange::new(FrameIndex(7), FrameIndex(7)).unwrap();
    assert!(empty.is_empty());
    assert!(!empty.contains(FrameIndex(7)));
}

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
}

#[test]
fn fps_conversions() {
    let fps = Fps::new(30, 1).unwrap();
    assert_eq!(fps.as_f64(), 30.0);
    assert!((fps.frame_duration_secs() - 1.0 / 30.0).abs() < 1e-12);
    assert_eq!(fps.secs_to_frames_floor(10.0), 300);
    assert_eq!(fps.secs_to_frames_floor(-1.0), 0);
}

#[test]
fn canvas_ratio_and_validation() {
    assert!(Canvas::new(0, 100).is_err());
    assert!(Canvas::new(100, 0).is_err());

    let square = Canvas::new(1080, 1080).unwrap();
    assert_eq!(square.ratio(), 1.0);
    assert_eq!(square.pixel_count(), 1080 * 1080);

    let wide = Canvas::new(1920, 1080).unwrap();
    assert!(wide.ratio() > 1.0);
}
