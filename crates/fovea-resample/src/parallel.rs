//! Row-parallel execution helper for resampling drivers.

use fovea_image::Image;
use rayon::prelude::*;

/// Apply a function to every destination pixel in parallel, one row chunk
/// per rayon task.
///
/// The function receives the destination column, row and the interleaved
/// pixel slice to fill. Row chunking keeps writes cache friendly and lets
/// each task derive its sampling coordinates from the indices alone.
pub fn par_iter_rows<T, const C: usize>(
    dst: &mut Image<T, C>,
    f: impl Fn(usize, usize, &mut [T]) + Send + Sync,
) where
    T: Send + Sync,
{
    let cols = dst.cols();
    if cols * C == 0 {
        return;
    }
    dst.as_slice_mut()
        .par_chunks_exact_mut(C * cols)
        .enumerate()
        .for_each(|(row, dst_chunk)| {
            dst_chunk
                .chunks_exact_mut(C)
                .enumerate()
                .for_each(|(col, dst_pixel)| {
                    f(col, row, dst_pixel);
                });
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use fovea_image::{ImageError, ImageSize};

    #[test]
    fn visits_every_pixel_once() -> Result<(), ImageError> {
        let mut dst = Image::<f32, 1>::from_size_val(
            ImageSize {
                width: 4,
                height: 3,
            },
            -1.0,
        )?;
        par_iter_rows(&mut dst, |col, row, pixel| {
            pixel[0] = (col + 10 * row) as f32;
        });

        for row in 0..3 {
            for col in 0..4 {
                assert_eq!(dst.get_pixel(col, row, 0)?, (col + 10 * row) as f32);
            }
        }
        Ok(())
    }

    #[test]
    fn writes_all_channels() -> Result<(), ImageError> {
        let mut dst = Image::<u8, 3>::from_size_val(
            ImageSize {
                width: 2,
                height: 2,
            },
            0,
        )?;
        par_iter_rows(&mut dst, |col, row, pixel| {
            pixel.copy_from_slice(&[col as u8, row as u8, 7]);
        });

        assert_eq!(dst.get_pixel(1, 0, 0)?, 1);
        assert_eq!(dst.get_pixel(0, 1, 1)?, 1);
        assert_eq!(dst.get_pixel(1, 1, 2)?, 7);
        Ok(())
    }

    #[test]
    fn empty_images_are_a_no_op() -> Result<(), ImageError> {
        let mut dst = Image::<f32, 1>::new(
            ImageSize {
                width: 0,
                height: 0,
            },
            vec![],
        )?;
        par_iter_rows(&mut dst, |_, _, _| panic!("no pixels to visit"));
        Ok(())
    }
}
