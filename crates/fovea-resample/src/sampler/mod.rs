//! Pixel samplers for image transformations.
//!
//! A sampler reconstructs a continuous image from discrete pixels and
//! evaluates it at arbitrary coordinates. The workhorses here are the
//! classic fixed-footprint kernels and one density-adaptive kernel:
//!
//! - **Nearest**: fastest, uses the nearest pixel value (no interpolation)
//! - **Bilinear**: smooth linear interpolation between adjacent pixels
//! - **CatmullRom**: separable cubic interpolation over a 4x4 stencil
//! - **Adaptive**: halo-suppressed bicubic blended with clamped elliptical
//!   averaging, driven by the local inverse Jacobian so that downscaling
//!   does not alias
//!
//! All samplers read pixels through a [`WindowSource`](crate::window::WindowSource),
//! which keeps border handling out of the per-sample hot path.

mod adaptive;
mod bilinear;
mod catmull;
mod ellipse;
mod ewa;
mod lbb;
mod nearest;
mod refine;

pub use adaptive::Adaptive;
pub use bilinear::Bilinear;
pub use catmull::CatmullRom;
pub use nearest::Nearest;

use crate::jacobian::InverseJacobian;
use crate::window::WindowSource;
use fovea_image::PixelDtype;

/// A resampling kernel evaluated at continuous source coordinates.
///
/// Coordinates follow the convention that integer values land on pixel
/// centers, so `(0.0, 0.0)` is the center of the top-left pixel. Samplers
/// do not fail at evaluation time: window sources guarantee residency, and
/// coordinates outside the source rectangle degrade to edge behavior.
pub trait Sampler: Send + Sync {
    /// Half-extent of the pixel window read around the anchor pixel.
    ///
    /// Window sources consumed by this sampler must be built with at least
    /// this margin.
    const SUPPORT: usize;

    /// Evaluate the source at `(x, y)`.
    ///
    /// `jinv` describes the local footprint of one destination pixel.
    /// Samplers that do not adapt to the sampling density ignore it.
    fn sample<const C: usize, S: WindowSource<C>>(
        &self,
        src: &S,
        x: f32,
        y: f32,
        jinv: &InverseJacobian,
    ) -> [f32; C];

    /// Evaluate the source at `(x, y)` and store the result as `T`.
    ///
    /// This is the single point where resampled values leave `f32`
    /// arithmetic; `pixel` must hold `C` values.
    fn sample_into<T: PixelDtype, const C: usize, S: WindowSource<C>>(
        &self,
        src: &S,
        x: f32,
        y: f32,
        jinv: &InverseJacobian,
        pixel: &mut [T],
    ) {
        let values = self.sample(src, x, y, jinv);
        for (dst, &val) in pixel.iter_mut().zip(values.iter()) {
            *dst = T::from_f32(val);
        }
    }

    /// Number of evaluations so far whose averaging footprint was truncated
    /// to the resident window.
    ///
    /// Samplers without an adaptive footprint always report zero.
    fn clipped_footprints(&self) -> u64 {
        0
    }
}
