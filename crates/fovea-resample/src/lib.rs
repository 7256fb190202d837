#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for resampling operations.
pub mod error;

/// inverse Jacobian of the resampling transformation.
pub mod jacobian;

/// module containing parallelization utilities.
pub mod parallel;

/// utility functions for resizing images.
pub mod resize;

/// the sampler family: nearest, bilinear, Catmull-Rom and the adaptive sampler.
pub mod sampler;

/// counters describing resampling quality compromises.
pub mod stats;

/// image geometric transformations module.
pub mod warp;

/// source pixel windows for samplers.
pub mod window;

pub use crate::error::ResampleError;
