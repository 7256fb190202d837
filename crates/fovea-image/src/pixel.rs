/// Trait for pixel data types that resamplers can write to.
///
/// Resampling arithmetic happens in `f32`; a single conversion through this
/// trait happens when the computed pixel is stored. Send and Sync are
/// required so that destination images can be filled from parallel row
/// iterators.
pub trait PixelDtype: Copy + Default + Send + Sync {
    /// Convert a f32 value to the pixel data type.
    fn from_f32(x: f32) -> Self;

    /// Convert the pixel data type to a f32 value.
    fn to_f32(self) -> f32;
}

impl PixelDtype for f32 {
    fn from_f32(x: f32) -> Self {
        x
    }

    fn to_f32(self) -> f32 {
        self
    }
}

impl PixelDtype for u8 {
    fn from_f32(x: f32) -> Self {
        x.round().clamp(0.0, 255.0) as u8
    }

    fn to_f32(self) -> f32 {
        self as f32
    }
}
