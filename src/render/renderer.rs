use crate::field::distance;
use crate::foundation::error::{CellscanError, CellscanResult};
use crate::render::frame::Frame;
use crate::render::params::FramePlan;
use rayon::prelude::*;

/// Options controlling renderer parallelism.
#[derive(Clone, Copy, Debug)]
pub struct RendererOpts {
    /// Enable row-level parallelism (rayon), using a dedicated thread pool.
    pub parallel: bool,
    /// Override the number of rayon worker threads. `None` uses rayon defaults.
    pub threads: Option<usize>,
}

impl Default for RendererOpts {
    fn default() -> Self {
        Self {
            parallel: true,
            threads: None,
        }
    }
}

/// Rasterizes a [`FramePlan`] into a [`Frame`].
///
/// Per-pixel work is pure and embarrassingly parallel, so rows are fanned out
/// across a dedicated rayon pool; a sequential path remains for hosts that
/// want deterministic single-thread profiles.
pub struct DistanceFieldRenderer {
    pool: Option<rayon::ThreadPool>,
}

impl DistanceFieldRenderer {
    /// Create a renderer, building its thread pool up front.
    pub fn new(opts: RendererOpts) -> CellscanResult<Self> {
        let pool = if opts.parallel {
            Some(build_thread_pool(opts.threads)?)
        } else {
            None
        };
        Ok(Self { pool })
    }

    /// Render one frame.
    ///
    /// Never fails: malformed parameters degrade to a flat or inverted field
    /// per the smoothstep's clamping, and an empty point set saturates at the
    /// distance cap.
    pub fn render(&self, plan: &FramePlan) -> Frame {
        let width = plan.canvas.width;
        let height = plan.canvas.height;
        if width == 0 || height == 0 {
            return Frame {
                width,
                height,
                data: Vec::new(),
            };
        }
        let stride = width as usize * 4;
        let mut data = vec![0u8; plan.canvas.pixel_count() as usize * 4];

        let render_row = |y: usize, row: &mut [u8]| {
            let v = (y as f32 + 0.5) / height as f32;
            for (x, px) in row.chunks_exact_mut(4).enumerate() {
                let u = (x as f32 + 0.5) / width as f32;
                let gray = distance::sample(u, v, plan.depth, &plan.points, &plan.params);
                let byte = (gray.clamp(0.0, 1.0) * 255.0).round() as u8;
                px[0] = byte;
                px[1] = byte;
                px[2] = byte;
                px[3] = 255;
            }
        };

        match self.pool.as_ref() {
            Some(pool) => pool.install(|| {
                data.par_chunks_mut(stride)
                    .enumerate()
                    .for_each(|(y, row)| render_row(y, row));
            }),
            None => {
                for (y, row) in data.chunks_mut(stride).enumerate() {
                    render_row(y, row);
                }
            }
        }

        Frame {
            width,
            height,
            data,
        }
    }
}

fn build_thread_pool(threads: Option<usize>) -> CellscanResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(CellscanError::validation(
            "renderer 'threads' must be >= 1 when set",
        ));
    }
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| CellscanError::render(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/renderer.rs"]
mod tests;
