use crate::jacobian::InverseJacobian;
use crate::sampler::ellipse::{Footprint, FUDGE};
use crate::sampler::ewa;
use crate::sampler::lbb::{lbb, HermiteWeights};
use crate::sampler::refine::refine_stencil;
use crate::sampler::Sampler;
use crate::stats::SampleStats;
use crate::window::WindowSource;

/// Truncation-based floor. Off by one at exact negative integers, which
/// the half pixel shift at the call sites only produces for coordinates
/// already far outside the image.
#[inline]
fn pseudo_floor(v: f32) -> i32 {
    (v as i32) - ((v < 0.0) as i32)
}

/// Jacobian-adaptive sampler.
///
/// Each evaluation blends two reconstructions of the source:
///
/// - an interpolated value from one level of halo-suppressing subdivision
///   followed by a locally bounded bicubic (exact when the destination
///   grid is at least as fine as the source grid), and
/// - an elliptical weighted average with a tent kernel over the footprint
///   of one destination pixel, which takes over as the footprint grows.
///
/// The footprint is derived from the singular values of the inverse
/// Jacobian and clamped to contain a unit disk, so the blend weight of the
/// average is exactly zero at unit scale and approaches one for strong
/// downscaling. Both halves read the same 5x5 window, and both are convex
/// in the source values, so results never overshoot the local pixel range.
///
/// Footprints too large for the resident window are truncated rather than
/// chased across the image; how often that happened is reported through
/// [`clipped_footprints`](Sampler::clipped_footprints).
///
/// ```
/// use fovea_image::{Image, ImageSize};
/// use fovea_resample::jacobian::InverseJacobian;
/// use fovea_resample::sampler::{Adaptive, Sampler};
/// use fovea_resample::window::PaddedSource;
///
/// let image = Image::<f32, 1>::from_size_val(
///     ImageSize {
///         width: 8,
///         height: 8,
///     },
///     3.0,
/// )
/// .unwrap();
/// let src = PaddedSource::new(&image, 2).unwrap();
///
/// // Footprint of one destination pixel when halving the resolution.
/// let jinv = InverseJacobian::from_scale(2.0, 2.0);
/// let sampler = Adaptive::new();
/// let value = sampler.sample(&src, 3.5, 3.5, &jinv);
/// assert!((value[0] - 3.0).abs() < 1e-5);
/// ```
#[derive(Debug, Default)]
pub struct Adaptive {
    stats: SampleStats,
}

impl Adaptive {
    /// Create an adaptive sampler with a fresh truncation counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counters accumulated by this sampler across all evaluations.
    pub fn stats(&self) -> &SampleStats {
        &self.stats
    }
}

impl Sampler for Adaptive {
    const SUPPORT: usize = 2;

    fn sample<const C: usize, S: WindowSource<C>>(
        &self,
        src: &S,
        x: f32,
        y: f32,
        jinv: &InverseJacobian,
    ) -> [f32; C] {
        // Anchor pixel and the sample offsets to it, each in [-0.5, 0.5].
        let ix = pseudo_floor(x + 0.5);
        let iy = pseudo_floor(y + 0.5);
        let x0 = x - ix as f32;
        let y0 = y - iy as f32;
        let sign_x: i32 = if x0 >= 0.0 { 1 } else { -1 };
        let sign_y: i32 = if y0 >= 0.0 { 1 } else { -1 };

        let window = src.fetch(ix, iy);

        // Cell-local coordinates in the subdivided grid, both in [0, 1].
        let weights =
            HermiteWeights::new((2 * sign_x) as f32 * x0, (2 * sign_y) as f32 * y0);

        let mut out = [0.0f32; C];
        for (ch, value) in out.iter_mut().enumerate() {
            // The stencil is gathered reflected so that the quadrant
            // holding the sample maps to nonnegative offsets; subdivision
            // and the bicubic are symmetric under the reflection.
            let mut stencil = [[0.0f32; 5]; 5];
            for (r, row) in stencil.iter_mut().enumerate() {
                let dy = sign_y * (r as i32 - 2);
                for (c, entry) in row.iter_mut().enumerate() {
                    *entry = window.channel(sign_x * (c as i32 - 2), dy, ch);
                }
            }
            *value = lbb(&weights, &refine_stencil(&stencil));
        }

        let footprint = match Footprint::compute(jinv) {
            Some(footprint) => footprint,
            // No direction of the mapping is coarser than the source
            // grid; interpolation alone is the answer.
            None => return out,
        };

        let (ewa_sums, total_weight) = ewa::accumulate(&footprint, window, x0, y0);

        // The resident window covers box distance 2 from the anchor, so
        // footprints reaching past distance 3 lose pixels to truncation.
        let critical = 3.0 + FUDGE;
        if f64::from(x0.abs()) + footprint.half_width >= critical
            || f64::from(y0.abs()) + footprint.half_height >= critical
        {
            self.stats.record_clipped_footprint();
        }

        debug_assert!(total_weight > 0.0);
        let theta = (1.0 / footprint.area) as f32;
        let beta = (1.0 - theta) / total_weight;
        for (value, ewa_sum) in out.iter_mut().zip(ewa_sums.iter()) {
            *value = theta * *value + beta * ewa_sum;
        }
        out
    }

    fn clipped_footprints(&self) -> u64 {
        self.stats.clipped_footprints()
    }
}
