use crate::jacobian::InverseJacobian;
use crate::sampler::Sampler;
use crate::window::WindowSource;

/// Bilinear sampler.
///
/// Interpolates linearly between the four pixels surrounding the sample
/// coordinate, one axis at a time.
///
/// ```
/// use fovea_image::{Image, ImageSize};
/// use fovea_resample::jacobian::InverseJacobian;
/// use fovea_resample::sampler::{Bilinear, Sampler};
/// use fovea_resample::window::PaddedSource;
///
/// let image = Image::<f32, 1>::new(
///     ImageSize {
///         width: 2,
///         height: 2,
///     },
///     vec![0.0, 1.0, 2.0, 3.0],
/// )
/// .unwrap();
/// let src = PaddedSource::new(&image, 1).unwrap();
///
/// let value = Bilinear.sample(&src, 0.5, 0.5, &InverseJacobian::IDENTITY);
/// assert_eq!(value, [1.5]);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Bilinear;

impl Sampler for Bilinear {
    const SUPPORT: usize = 1;

    fn sample<const C: usize, S: WindowSource<C>>(
        &self,
        src: &S,
        x: f32,
        y: f32,
        _jinv: &InverseJacobian,
    ) -> [f32; C] {
        let ix = x.floor() as i32;
        let iy = y.floor() as i32;
        let dx = x - ix as f32;
        let dy = y - iy as f32;

        let window = src.fetch(ix, iy);
        let mut out = [0.0; C];
        for (ch, value) in out.iter_mut().enumerate() {
            let top =
                window.channel(0, 0, ch) * (1.0 - dx) + window.channel(1, 0, ch) * dx;
            let bottom =
                window.channel(0, 1, ch) * (1.0 - dx) + window.channel(1, 1, ch) * dx;
            *value = top * (1.0 - dy) + bottom * dy;
        }
        out
    }
}
