#![doc = include_str!("../README.md")]

#[doc(inline)]
pub use fovea_image as image;

#[doc(inline)]
pub use fovea_resample as resample;
