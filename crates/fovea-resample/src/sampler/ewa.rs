//! Clamped elliptical weighted averaging.
//!
//! Downsampling stage of the adaptive sampler: pixels in the resident
//! window are averaged with a tent-shaped radial weight supported on the
//! footprint ellipse. Because the ellipse is clamped to contain a unit
//! disk, the center pixel always carries positive weight and the average
//! is well defined.

use crate::sampler::ellipse::Footprint;
use crate::window::SampleWindow;

/// Tent weight of a source offset `(s, t)`: one at the ellipse center,
/// falling linearly to zero at its edge.
#[inline]
fn teepee(footprint: &Footprint, s: f32, t: f32) -> f32 {
    let q1 = s * footprint.c_major.0 + t * footprint.c_major.1;
    let q2 = s * footprint.c_minor.0 + t * footprint.c_minor.1;
    let r2 = q1 * q1 + q2 * q2;
    if r2 < 1.0 {
        1.0 - r2.sqrt()
    } else {
        0.0
    }
}

/// Tent-weighted sums over the 5x5 window around the anchor, with
/// `(x0, y0)` the sample position relative to the anchor pixel.
///
/// Returns the per-channel weighted sums and the total weight. The total
/// is at least `1 - sqrt(0.5)` because the anchor pixel is never farther
/// than half a pixel step from the sample position.
pub(crate) fn accumulate<const C: usize>(
    footprint: &Footprint,
    window: SampleWindow<'_, C>,
    x0: f32,
    y0: f32,
) -> ([f32; C], f32) {
    let mut sums = [0.0f32; C];
    let mut total_weight = 0.0f32;
    for i in -2..=2i32 {
        for j in -2..=2i32 {
            let weight = teepee(footprint, x0 - j as f32, y0 - i as f32);
            let pixel = window.pixel(j, i);
            for (sum, &value) in sums.iter_mut().zip(pixel.iter()) {
                *sum += weight * value;
            }
            total_weight += weight;
        }
    }
    (sums, total_weight)
}
