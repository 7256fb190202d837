use fovea_image::ImageError;

/// An error type for resampling operations.
///
/// Errors surface only when a driver sets up an operation; the per-sample
/// hot path is infallible by contract.
#[derive(thiserror::Error, Debug)]
pub enum ResampleError {
    /// Error when a source or destination image container is not valid.
    #[error(transparent)]
    Image(#[from] ImageError),
}

#[cfg(test)]
mod tests {
    use super::ResampleError;
    use fovea_image::{Image, ImageSize};

    #[test]
    fn wraps_image_errors() {
        let failed = Image::<f32, 1>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![0.0; 3],
        );
        let err: ResampleError = failed.expect_err("length mismatch").into();
        assert!(matches!(err, ResampleError::Image(_)));
    }
}
