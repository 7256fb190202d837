use crate::jacobian::InverseJacobian;
use crate::sampler::Sampler;
use crate::window::WindowSource;

/// Catmull-Rom sampler.
///
/// Separable cubic interpolation over the 4x4 pixel stencil around the
/// sample coordinate. Sharper than [`Bilinear`](crate::sampler::Bilinear),
/// at the cost of mild overshoot near strong edges.
#[derive(Clone, Copy, Debug, Default)]
pub struct CatmullRom;

/// Catmull-Rom weights for the four taps at offsets -1..=2, given the
/// fractional coordinate `f` in `[0, 1)`. The weights sum to one.
#[inline]
fn tap_weights(f: f32) -> [f32; 4] {
    [
        ((2.0 - f) * f - 1.0) * f * 0.5,
        (3.0 * f * f * f - 5.0 * f * f + 2.0) * 0.5,
        ((4.0 - 3.0 * f) * f + 1.0) * f * 0.5,
        (f - 1.0) * f * f * 0.5,
    ]
}

impl Sampler for CatmullRom {
    const SUPPORT: usize = 2;

    fn sample<const C: usize, S: WindowSource<C>>(
        &self,
        src: &S,
        x: f32,
        y: f32,
        _jinv: &InverseJacobian,
    ) -> [f32; C] {
        let ix = x.floor() as i32;
        let iy = y.floor() as i32;
        let wx = tap_weights(x - ix as f32);
        let wy = tap_weights(y - iy as f32);

        let window = src.fetch(ix, iy);
        let mut out = [0.0; C];
        for (ch, value) in out.iter_mut().enumerate() {
            let mut acc = 0.0;
            for (i, weight_y) in wy.iter().enumerate() {
                let dy = i as i32 - 1;
                let mut row = 0.0;
                for (j, weight_x) in wx.iter().enumerate() {
                    let dx = j as i32 - 1;
                    row += weight_x * window.channel(dx, dy, ch);
                }
                acc += weight_y * row;
            }
            *value = acc;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::PaddedSource;
    use approx::assert_relative_eq;
    use fovea_image::{Image, ImageError, ImageSize};

    #[test]
    fn weights_partition_unity() {
        for k in 0..10 {
            let f = k as f32 / 10.0;
            let sum: f32 = tap_weights(f).iter().sum();
            assert_relative_eq!(sum, 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn matches_pixels_at_integer_coordinates() -> Result<(), ImageError> {
        let image = Image::<f32, 1>::new(
            ImageSize {
                width: 4,
                height: 3,
            },
            (0..12).map(|v| v as f32).collect(),
        )?;
        let src = PaddedSource::new(&image, 2)?;
        let jinv = InverseJacobian::IDENTITY;

        for y in 0..3 {
            for x in 0..4 {
                let expected = image.get_pixel(x, y, 0)?;
                let got = CatmullRom.sample(&src, x as f32, y as f32, &jinv);
                assert_relative_eq!(got[0], expected, epsilon = 1e-5);
            }
        }
        Ok(())
    }

    #[test]
    fn reproduces_linear_ramps() -> Result<(), ImageError> {
        let image = Image::<f32, 1>::new(
            ImageSize {
                width: 6,
                height: 1,
            },
            vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0],
        )?;
        let src = PaddedSource::new(&image, 2)?;
        let jinv = InverseJacobian::IDENTITY;

        let got = CatmullRom.sample(&src, 2.5, 0.0, &jinv);
        assert_relative_eq!(got[0], 2.5, epsilon = 1e-5);

        let got = CatmullRom.sample(&src, 1.75, 0.0, &jinv);
        assert_relative_eq!(got[0], 1.75, epsilon = 1e-5);
        Ok(())
    }
}
