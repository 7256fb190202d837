use fovea_image::{Image, ImageError};

/// Borrowed view of source pixels around an anchor pixel.
///
/// Neighbors are addressed by their offset from the anchor; offsets whose
/// box distance is within the half-extent the window was fetched for are
/// guaranteed resident.
#[derive(Clone, Copy)]
pub struct SampleWindow<'a, const C: usize> {
    data: &'a [f32],
    center: usize,
    row_stride: usize,
}

impl<'a, const C: usize> SampleWindow<'a, C> {
    /// Get the interleaved pixel values at offset `(dx, dy)` from the anchor.
    #[inline]
    pub fn pixel(&self, dx: i32, dy: i32) -> &'a [f32] {
        let idx = (self.center as isize
            + dy as isize * self.row_stride as isize
            + dx as isize * C as isize) as usize;
        &self.data[idx..idx + C]
    }

    /// Get one channel of the pixel at offset `(dx, dy)` from the anchor.
    #[inline]
    pub fn channel(&self, dx: i32, dy: i32, ch: usize) -> f32 {
        self.data[(self.center as isize
            + dy as isize * self.row_stride as isize
            + dx as isize * C as isize) as usize
            + ch]
    }
}

/// Source of resident pixel windows for samplers.
///
/// Implementors guarantee that every fetched window can be read up to the
/// half-extent the source was built for, whatever the anchor. How pixels
/// beyond the image rectangle are synthesized is the implementor's choice.
pub trait WindowSource<const C: usize>: Sync {
    /// Fetch the window anchored at pixel `(ix, iy)`.
    fn fetch(&self, ix: i32, iy: i32) -> SampleWindow<'_, C>;
}

/// A window source backed by an edge-padded copy of an image.
///
/// The source image is copied once into a buffer with `margin + 1` extra
/// pixels on every side, filled by clamping to the nearest edge pixel. The
/// extra pixel beyond the requested margin keeps anchors one past the rim
/// resident, which samplers that round to the nearest pixel produce for
/// coordinates within half a pixel of the edge. Fetching a window
/// afterwards is a constant time operation with no allocation, which keeps
/// per-sample work independent of how close the anchor is to the image
/// border.
pub struct PaddedSource<const C: usize> {
    data: Vec<f32>,
    width: usize,
    height: usize,
    pad: usize,
    row_stride: usize,
}

impl<const C: usize> PaddedSource<C> {
    /// Create a padded source from an image.
    ///
    /// # Arguments
    ///
    /// * `image` - The source image, which must not be empty.
    /// * `margin` - The half-extent windows must be readable for, typically
    ///   the `SUPPORT` of the sampler that will consume the source.
    ///
    /// # Example
    ///
    /// ```
    /// use fovea_image::{Image, ImageSize};
    /// use fovea_resample::window::{PaddedSource, WindowSource};
    ///
    /// let image = Image::<f32, 1>::new(
    ///     ImageSize {
    ///         width: 3,
    ///         height: 2,
    ///     },
    ///     vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0],
    /// )
    /// .unwrap();
    ///
    /// let source = PaddedSource::new(&image, 2).unwrap();
    /// let window = source.fetch(0, 0);
    ///
    /// assert_eq!(window.channel(0, 0, 0), 0.0);
    /// // off-image neighbors replicate the nearest edge pixel
    /// assert_eq!(window.channel(-2, -1, 0), 0.0);
    /// assert_eq!(window.channel(2, 0, 0), 2.0);
    /// ```
    pub fn new(image: &Image<f32, C>, margin: usize) -> Result<Self, ImageError> {
        let (width, height) = (image.width(), image.height());
        if width == 0 || height == 0 {
            return Err(ImageError::InvalidImageSize(width, height, 1, 1));
        }

        // One extra pixel of padding beyond the requested margin keeps
        // windows anchored one past the rim fully resident.
        let pad = margin + 1;
        let padded_w = width + 2 * pad;
        let padded_h = height + 2 * pad;
        let src = image.as_slice();

        let mut data = vec![0.0f32; padded_w * padded_h * C];
        for py in 0..padded_h {
            let sy = (py as i64 - pad as i64).clamp(0, height as i64 - 1) as usize;
            let src_row = &src[sy * width * C..(sy + 1) * width * C];
            let dst_row = &mut data[py * padded_w * C..(py + 1) * padded_w * C];
            for px in 0..padded_w {
                let sx = (px as i64 - pad as i64).clamp(0, width as i64 - 1) as usize;
                dst_row[px * C..(px + 1) * C].copy_from_slice(&src_row[sx * C..(sx + 1) * C]);
            }
        }

        Ok(Self {
            data,
            width,
            height,
            pad,
            row_stride: padded_w * C,
        })
    }

    /// Width of the underlying image in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the underlying image in pixels.
    pub fn height(&self) -> usize {
        self.height
    }
}

impl<const C: usize> WindowSource<C> for PaddedSource<C> {
    /// Fetch the window anchored at `(ix, iy)`.
    ///
    /// Anchors up to one pixel past the image rectangle are served centered
    /// where requested, with off-image neighbors replicating the nearest
    /// edge pixel. Anchors farther out are clamped to that one-pixel rim,
    /// so the window contents degrade to edge replication rather than going
    /// out of bounds.
    fn fetch(&self, ix: i32, iy: i32) -> SampleWindow<'_, C> {
        let ix = (ix.clamp(-1, self.width as i32) + self.pad as i32) as usize;
        let iy = (iy.clamp(-1, self.height as i32) + self.pad as i32) as usize;
        let center = iy * self.row_stride + ix * C;

        SampleWindow {
            data: &self.data,
            center,
            row_stride: self.row_stride,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{PaddedSource, WindowSource};
    use fovea_image::{Image, ImageError, ImageSize};

    fn ramp_image() -> Result<Image<f32, 1>, ImageError> {
        Image::new(
            ImageSize {
                width: 4,
                height: 3,
            },
            (0..12).map(|v| v as f32).collect(),
        )
    }

    #[test]
    fn interior_window() -> Result<(), ImageError> {
        let source = PaddedSource::new(&ramp_image()?, 1)?;
        let window = source.fetch(1, 1);

        assert_eq!(window.channel(0, 0, 0), 5.0);
        assert_eq!(window.channel(-1, 0, 0), 4.0);
        assert_eq!(window.channel(1, 1, 0), 10.0);
        assert_eq!(window.pixel(0, -1), &[1.0]);

        Ok(())
    }

    #[test]
    fn edges_replicate() -> Result<(), ImageError> {
        let source = PaddedSource::new(&ramp_image()?, 2)?;
        let window = source.fetch(0, 0);

        assert_eq!(window.channel(-2, -2, 0), 0.0);
        assert_eq!(window.channel(-1, 2, 0), 8.0);

        let window = source.fetch(3, 2);
        assert_eq!(window.channel(2, 2, 0), 11.0);
        assert_eq!(window.channel(2, -1, 0), 7.0);

        Ok(())
    }

    #[test]
    fn anchors_one_past_the_rim_stay_centered() -> Result<(), ImageError> {
        let source = PaddedSource::new(&ramp_image()?, 1)?;

        // Rounding samplers anchor at the column past the last pixel for
        // coordinates within half a pixel of the right edge; the window
        // must stay centered there instead of shifting one pixel left.
        let window = source.fetch(4, 1);
        assert_eq!(window.channel(-1, 0, 0), 7.0);
        assert_eq!(window.channel(0, 0, 0), 7.0);
        assert_eq!(window.channel(1, 1, 0), 11.0);

        let window = source.fetch(-1, -1);
        assert_eq!(window.channel(1, 1, 0), 0.0);
        assert_eq!(window.channel(-1, -1, 0), 0.0);

        Ok(())
    }

    #[test]
    fn anchor_clamped_to_image() -> Result<(), ImageError> {
        let source = PaddedSource::new(&ramp_image()?, 1)?;

        let inside = source.fetch(3, 2);
        let outside = source.fetch(10, 7);
        assert_eq!(outside.channel(0, 0, 0), inside.channel(0, 0, 0));

        let negative = source.fetch(-3, -3);
        assert_eq!(negative.channel(0, 0, 0), 0.0);

        Ok(())
    }

    #[test]
    fn empty_image_rejected() -> Result<(), ImageError> {
        let image = Image::<f32, 1>::new(
            ImageSize {
                width: 0,
                height: 0,
            },
            vec![],
        )?;
        assert!(PaddedSource::new(&image, 2).is_err());

        Ok(())
    }

    #[test]
    fn multi_channel_pixels_stay_interleaved() -> Result<(), ImageError> {
        let image = Image::<f32, 3>::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
        )?;
        let source = PaddedSource::new(&image, 1)?;
        let window = source.fetch(0, 0);

        assert_eq!(window.pixel(0, 0), &[1.0, 2.0, 3.0]);
        assert_eq!(window.pixel(1, 0), &[4.0, 5.0, 6.0]);
        assert_eq!(window.channel(1, -1, 2), 6.0);

        Ok(())
    }
}
