use super::*;
use crate::reactive::channels::ReactiveChannels;
use crate::render::params::{RenderParameters, ThresholdMapping};

fn base_params(max_dist: f32, threshold: [f32; 2], ratio: f32) -> RenderParameters {
    RenderParameters {
        max_dist,
        threshold,
        ratio,
        mapping: ThresholdMapping::Base,
    }
}

#[test]
fn square_canvas_applies_no_aspect_rescaling() {
    for &(u, v) in &[(0.0f32, 0.0f32), (0.25, 0.75), (1.0, 1.0)] {
        assert_eq!(aspect_correct(u, v, 1.0), (u, v));
    }
}

#[test]
fn wide_canvas_compresses_v_around_the_center() {
    let (u, v) = aspect_correct(0.3, 0.5, 2.0);
    assert_eq!(u, 0.3);
    assert_eq!(v, 0.5);

    let (_, v_top) = aspect_correct(0.3, 0.0, 2.0);
    assert_eq!(v_top, 0.25);
    let (_, v_bottom) = aspect_correct(0.3, 1.0, 2.0);
    assert_eq!(v_bottom, 0.75);
}

#[test]
fn tall_canvas_compresses_u_around_the_center() {
    let (u, v) = aspect_correct(0.5, 0.7, 0.5);
    assert_eq!(u, 0.5);
    assert_eq!(v, 0.7);

    let (u_left, _) = aspect_correct(0.0, 0.7, 0.5);
    assert_eq!(u_left, 0.25);
    let (u_right, _) = aspect_correct(1.0, 0.7, 0.5);
    assert_eq!(u_right, 0.75);
}

#[test]
fn empty_point_set_saturates_at_the_cap() {
    let obs = glam::Vec3::new(0.5, 0.5, 0.0);
    assert_eq!(min_distance(obs, &[], 0.8), 0.8);
}

#[test]
fn min_distance_picks_the_nearest_point() {
    let points = [
        glam::Vec3::new(0.0, 0.0, 0.0),
        glam::Vec3::new(0.5, 0.5, 0.0),
    ];
    let obs = glam::Vec3::new(0.4, 0.5, 0.0);
    let d = min_distance(obs, &points, 1.0);
    assert!((d - 0.1).abs() < 1e-6);
}

#[test]
fn far_points_are_capped() {
    let points = [glam::Vec3::new(1.0, 1.0, 0.0)];
    let obs = glam::Vec3::new(0.0, 0.0, 0.0);
    assert_eq!(min_distance(obs, &points, 0.3), 0.3);
}

#[test]
fn single_point_scenario_end_to_end() {
    // One point at the origin, cap 1, threshold [0,1], observed at depth 0.
    let points = [glam::Vec3::new(0.0, 0.0, 0.0)];
    let params = base_params(1.0, [0.0, 1.0], 1.0);

    // On the point: distance 0, field 0, inverted to white.
    assert_eq!(sample(0.0, 0.0, 0.0, &points, &params), 1.0);

    // Opposite corner: distance sqrt(2), capped to 1, field 1, black.
    assert_eq!(sample(1.0, 1.0, 0.0, &points, &params), 0.0);
}

#[test]
fn cross_wired_mapping_scales_edges_by_high_and_mid() {
    let params = RenderParameters {
        max_dist: 0.8,
        threshold: [0.2, 0.8],
        ratio: 1.0,
        mapping: ThresholdMapping::ReactiveCrossWired {
            channels: ReactiveChannels::new(0.0, 0.5, 0.25, 0.0, 0.0),
        },
    };
    let (e0, e1) = params.threshold_edges();
    assert!((e0 - 0.8 * 0.25 * 0.2).abs() < 1e-6);
    assert!((e1 - 0.8 * 0.5 * 0.8).abs() < 1e-6);
}

#[test]
fn degenerate_threshold_flattens_instead_of_failing() {
    let points = [glam::Vec3::new(0.5, 0.5, 0.0)];
    let params = base_params(0.5, [0.7, 0.7], 1.0);
    // Everything below the shared edge maps to 0 and inverts to 1.
    let v = sample(0.5, 0.5, 0.0, &points, &params);
    assert!(v.is_finite());
    assert_eq!(v, 1.0);
}
