use crate::jacobian::InverseJacobian;
use crate::sampler::Sampler;
use crate::window::WindowSource;

/// Nearest neighbor sampler.
///
/// Snaps the coordinate to the closest pixel center and returns that pixel
/// unchanged. Halfway cases round up, matching the anchor rule of the other
/// samplers in this module.
#[derive(Clone, Copy, Debug, Default)]
pub struct Nearest;

impl Sampler for Nearest {
    const SUPPORT: usize = 0;

    fn sample<const C: usize, S: WindowSource<C>>(
        &self,
        src: &S,
        x: f32,
        y: f32,
        _jinv: &InverseJacobian,
    ) -> [f32; C] {
        let ix = (x + 0.5).floor() as i32;
        let iy = (y + 0.5).floor() as i32;
        let window = src.fetch(ix, iy);
        let mut out = [0.0; C];
        out.copy_from_slice(window.pixel(0, 0));
        out
    }
}
