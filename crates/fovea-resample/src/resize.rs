//! Image resizing.

use fovea_image::{Image, PixelDtype};

use crate::error::ResampleError;
use crate::jacobian::InverseJacobian;
use crate::parallel;
use crate::sampler::Sampler;
use crate::window::PaddedSource;

/// Distance in source pixels between two neighboring destination samples
/// along one axis. Sample positions are aligned to both image edges, so a
/// single destination sample sits on the first source pixel.
fn axis_step(src_extent: usize, dst_extent: usize) -> f64 {
    if dst_extent > 1 {
        (src_extent - 1) as f64 / (dst_extent - 1) as f64
    } else {
        0.0
    }
}

/// Resize an image to a new size.
///
/// The destination size defines the sampling grid: its corners coincide
/// with the source corners and interior samples are spaced evenly between
/// them. The per-axis sample spacing doubles as the inverse Jacobian of
/// the map, which lets the [`Adaptive`] sampler widen its averaging
/// footprint exactly as much as the shrink factor requires.
///
/// [`Adaptive`]: crate::sampler::Adaptive
///
/// # Arguments
///
/// * `src` - The input image container.
/// * `dst` - The output image container; its size and dtype define the
///   output.
/// * `sampler` - The sampler used to evaluate source pixels.
///
/// # Example
///
/// ```
/// use fovea_image::{Image, ImageSize};
/// use fovea_resample::resize::resize;
/// use fovea_resample::sampler::Adaptive;
///
/// let image = Image::<_, 3>::new(
///     ImageSize {
///         width: 4,
///         height: 5,
///     },
///     vec![0f32; 4 * 5 * 3],
/// )
/// .unwrap();
///
/// let new_size = ImageSize {
///     width: 2,
///     height: 3,
/// };
/// let mut resized = Image::<f32, 3>::from_size_val(new_size, 0.0).unwrap();
///
/// resize(&image, &mut resized, &Adaptive::new()).unwrap();
///
/// assert_eq!(resized.num_channels(), 3);
/// assert_eq!(resized.size().width, 2);
/// assert_eq!(resized.size().height, 3);
/// ```
pub fn resize<T, S, const C: usize>(
    src: &Image<f32, C>,
    dst: &mut Image<T, C>,
    sampler: &S,
) -> Result<(), ResampleError>
where
    T: PixelDtype,
    S: Sampler,
{
    let step_x = axis_step(src.width(), dst.width());
    let step_y = axis_step(src.height(), dst.height());
    let jinv = InverseJacobian::from_scale(step_x, step_y);

    let source = PaddedSource::new(src, S::SUPPORT)?;
    let clipped_before = sampler.clipped_footprints();

    parallel::par_iter_rows(dst, |col, row, dst_pixel| {
        let u = (col as f64 * step_x) as f32;
        let v = (row as f64 * step_y) as f32;
        sampler.sample_into(&source, u, v, &jinv, dst_pixel);
    });

    let clipped = sampler.clipped_footprints() - clipped_before;
    if clipped > 0 {
        log::debug!(
            "resize truncated the averaging footprint of {clipped} of {} pixels",
            dst.cols() * dst.rows()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::{Adaptive, Bilinear, CatmullRom, Nearest};
    use approx::assert_relative_eq;
    use fovea_image::{Image, ImageSize};

    #[test]
    fn resize_smoke_ch3() -> Result<(), ResampleError> {
        let image = Image::<_, 3>::new(
            ImageSize {
                width: 4,
                height: 5,
            },
            vec![0f32; 4 * 5 * 3],
        )?;

        let new_size = ImageSize {
            width: 2,
            height: 3,
        };
        let mut resized = Image::<f32, 3>::from_size_val(new_size, 0.0)?;

        resize(&image, &mut resized, &Nearest)?;

        assert_eq!(resized.num_channels(), 3);
        assert_eq!(resized.size().width, 2);
        assert_eq!(resized.size().height, 3);

        Ok(())
    }

    #[test]
    fn same_size_is_the_identity() -> Result<(), ResampleError> {
        let image = Image::<f32, 1>::new(
            ImageSize {
                width: 4,
                height: 3,
            },
            (0..12).map(|x| x as f32).collect(),
        )?;

        let mut resized = Image::<f32, 1>::from_size_val(image.size(), 0.0)?;
        resize(&image, &mut resized, &CatmullRom)?;

        assert_eq!(resized.as_slice(), image.as_slice());
        Ok(())
    }

    #[test]
    fn upscale_keeps_corners_and_averages_midpoints() -> Result<(), ResampleError> {
        let image = Image::<f32, 1>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![0.0, 2.0, 4.0, 6.0],
        )?;

        let mut resized = Image::<f32, 1>::from_size_val(
            ImageSize {
                width: 3,
                height: 3,
            },
            0.0,
        )?;
        resize(&image, &mut resized, &Bilinear)?;

        assert_relative_eq!(resized.get_pixel(0, 0, 0)?, 0.0);
        assert_relative_eq!(resized.get_pixel(2, 0, 0)?, 2.0);
        assert_relative_eq!(resized.get_pixel(0, 2, 0)?, 4.0);
        assert_relative_eq!(resized.get_pixel(2, 2, 0)?, 6.0);
        assert_relative_eq!(resized.get_pixel(1, 1, 0)?, 3.0);
        Ok(())
    }

    #[test]
    fn downscale_averages_with_the_adaptive_sampler() -> Result<(), ResampleError> {
        // Checkerboard: point sampling returns 0 or 1, averaging must not.
        let size = ImageSize {
            width: 16,
            height: 16,
        };
        let data = (0..256)
            .map(|k| ((k % 16 + k / 16) % 2) as f32)
            .collect();
        let image = Image::<f32, 1>::new(size, data)?;

        let mut resized = Image::<f32, 1>::from_size_val(
            ImageSize {
                width: 4,
                height: 4,
            },
            0.0,
        )?;
        resize(&image, &mut resized, &Adaptive::new())?;

        for &value in resized.as_slice() {
            assert!(
                (0.2..=0.8).contains(&value),
                "checkerboard not averaged: {value}"
            );
        }
        Ok(())
    }

    #[test]
    fn single_pixel_destination_reads_the_origin() -> Result<(), ResampleError> {
        let image = Image::<f32, 1>::new(
            ImageSize {
                width: 5,
                height: 5,
            },
            (0..25).map(|x| x as f32).collect(),
        )?;

        let mut resized = Image::<f32, 1>::from_size_val(
            ImageSize {
                width: 1,
                height: 1,
            },
            -1.0,
        )?;
        resize(&image, &mut resized, &Adaptive::new())?;

        assert_relative_eq!(resized.get_pixel(0, 0, 0)?, 0.0);
        Ok(())
    }

    #[test]
    fn resize_into_u8() -> Result<(), ResampleError> {
        let image = Image::<f32, 1>::from_size_val(
            ImageSize {
                width: 8,
                height: 8,
            },
            99.7,
        )?;

        let mut resized = Image::<u8, 1>::from_size_val(
            ImageSize {
                width: 4,
                height: 4,
            },
            0,
        )?;
        resize(&image, &mut resized, &Adaptive::new())?;

        for &value in resized.as_slice() {
            assert_eq!(value, 100);
        }
        Ok(())
    }
}
