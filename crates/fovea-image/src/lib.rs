#![deny(missing_docs)]
//! Image containers and pixel type conversions for resampling

/// image representation for resampling purposes.
pub mod image;

/// Error types for the image module.
pub mod error;

/// pixel data type conversions.
pub mod pixel;

pub use crate::error::ImageError;
pub use crate::image::{Image, ImageSize};
pub use crate::pixel::PixelDtype;
