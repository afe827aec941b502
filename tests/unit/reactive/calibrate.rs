use super::*;

#[test]
fn constant_signal_settles_at_half() {
    let mut cal = ReactiveCalibrator::new();
    let raw = BandEnergies {
        bass: 0.4,
        mid: 0.4,
        high: 0.4,
        level: 0.4,
    };
    let mut out = ReactiveChannels::default();
    for _ in 0..50 {
        out = cal.update(raw);
    }
    // A constant signal gives a degenerate min/max window; every channel
    // normalizes to 0.5 and easing starts there, so nothing moves.
    assert_eq!(out.bass, 0.5);
    assert_eq!(out.mid, 0.5);
    assert_eq!(out.high, 0.5);
    assert_eq!(out.avg, 0.5);
    assert_eq!(out.level, 0.5);
}

#[test]
fn outputs_stay_normalized_for_varying_signals() {
    let mut cal = ReactiveCalibrator::new();
    for i in 0..200 {
        let t = (i % 10) as f32 / 10.0;
        let out = cal.update(BandEnergies {
            bass: t,
            mid: 1.0 - t,
            high: t * t,
            level: 0.5 + 0.5 * t,
        });
        for v in [out.bass, out.mid, out.high, out.avg, out.level] {
            assert!((0.0..=1.0).contains(&v));
        }
    }
}

#[test]
fn easing_is_clamped_into_its_contract() {
    let mut cal = ReactiveCalibrator::new();
    cal.set_easing(5.0);
    assert_eq!(cal.easing(), 1.0);
    cal.set_easing(0.0);
    assert_eq!(cal.easing(), 0.01);
    cal.set_easing(0.25);
    assert_eq!(cal.easing(), 0.25);
}

#[test]
fn lower_easing_responds_slower() {
    let jump = |easing: f32| -> f32 {
        let mut cal = ReactiveCalibrator::new();
        cal.set_easing(easing);
        // Establish a window, then jump the signal and watch one frame.
        cal.update(BandEnergies {
            bass: 0.1,
            ..Default::default()
        });
        cal.update(BandEnergies {
            bass: 0.9,
            ..Default::default()
        });
        let out = cal.update(BandEnergies {
            bass: 0.9,
            ..Default::default()
        });
        (out.bass - 0.5).abs()
    };

    assert!(jump(0.5) > jump(0.05));
}

#[test]
fn silence_does_not_collapse_the_window() {
    let mut cal = ReactiveCalibrator::new();
    cal.update(BandEnergies {
        bass: 0.3,
        mid: 0.3,
        high: 0.3,
        level: 0.3,
    });
    cal.update(BandEnergies {
        bass: 0.7,
        mid: 0.7,
        high: 0.7,
        level: 0.7,
    });
    // Zeros must not become the window minimum.
    let out = cal.update(BandEnergies::default());
    assert!((0.0..=1.0).contains(&out.bass));
    let follow = cal.update(BandEnergies {
        bass: 0.3,
        mid: 0.3,
        high: 0.3,
        level: 0.3,
    });
    assert!((0.0..=1.0).contains(&follow.bass));
}
