use crate::foundation::math::smoothstep;
use crate::render::params::RenderParameters;
use glam::Vec3;

/// Rescale a normalized texture coordinate so the pattern's spatial frequency
/// stays isotropic on non-square canvases.
///
/// Wide canvases (`ratio > 1`) compress v around 0.5 by `1/ratio`; tall and
/// square canvases rescale u by `ratio`. A square canvas passes (u, v)
/// through exactly.
pub fn aspect_correct(u: f32, v: f32, ratio: f32) -> (f32, f32) {
    if ratio > 1.0 {
        (u, v / ratio - 0.5 / ratio + 0.5)
    } else {
        (u * ratio - 0.5 * ratio + 0.5, v)
    }
}

/// Minimum euclidean distance from `obs` to any point, saturating at `cap`.
///
/// An empty set (or one entirely farther than the cap) yields `cap`, so the
/// field flattens instead of faulting.
pub fn min_distance(obs: Vec3, points: &[Vec3], cap: f32) -> f32 {
    points
        .iter()
        .fold(cap, |closest, p| closest.min(obs.distance(*p)))
}

/// Evaluate one sample of the field and return its grayscale value in [0,1].
///
/// Aspect-correct the coordinate, take the minimum distance from the
/// observation point to the cloud, remap through the smoothstep threshold,
/// invert.
pub fn sample(u: f32, v: f32, depth: f32, points: &[Vec3], params: &RenderParameters) -> f32 {
    let (u, v) = aspect_correct(u, v, params.ratio);
    let obs = Vec3::new(u, v, depth);

    let m_dist = min_distance(obs, points, params.max_dist);

    let (edge0, edge1) = params.threshold_edges();
    let field = smoothstep(edge0, edge1, m_dist);

    1.0 - field
}

#[cfg(test)]
#[path = "../../tests/unit/field/distance.rs"]
mod tests;
