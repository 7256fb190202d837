//! Affine warping of images.

use std::f32::consts::PI;

use fovea_image::{Image, PixelDtype};

use crate::error::ResampleError;
use crate::jacobian::InverseJacobian;
use crate::parallel;
use crate::sampler::Sampler;
use crate::window::PaddedSource;

/// Inverts a 2x3 affine transformation matrix.
///
/// Arguments:
///
/// * `m` - The 2x3 affine transformation matrix, row major.
///
/// Returns:
///
/// The inverted 2x3 affine transformation matrix. Degenerate matrices
/// invert to all zeros, following the OpenCV convention.
pub fn invert_affine_transform(m: &[f32; 6]) -> [f32; 6] {
    let (a, b, c, d, e, f) = (m[0], m[1], m[2], m[3], m[4], m[5]);

    let determinant = a * e - b * d;
    let inv_determinant = if determinant != 0.0 {
        1.0 / determinant
    } else {
        0.0
    };

    let new_a = e * inv_determinant;
    let new_b = -b * inv_determinant;
    let new_d = -d * inv_determinant;
    let new_e = a * inv_determinant;
    let new_c = -(new_a * c + new_b * f);
    let new_f = -(new_d * c + new_e * f);

    [new_a, new_b, new_c, new_d, new_e, new_f]
}

/// Returns a 2x3 rotation matrix for a 2D rotation around a center point.
///
/// The rotation matrix is defined as:
///
/// | alpha  beta  tx |
/// | -beta  alpha ty |
///
/// where:
///
/// alpha = scale * cos(angle)
/// beta = scale * sin(angle)
/// tx = (1 - alpha) * center.x - beta * center.y
/// ty = beta * center.x + (1 - alpha) * center.y
///
/// # Arguments
///
/// * `center` - The center point of the rotation.
/// * `angle` - The angle of rotation in degrees.
/// * `scale` - The scale factor.
///
/// # Example
///
/// ```
/// use fovea_resample::warp::get_rotation_matrix2d;
///
/// let center = (0.0, 0.0);
/// let angle = 90.0;
/// let scale = 1.0;
/// let rotation_matrix = get_rotation_matrix2d(center, angle, scale);
/// ```
pub fn get_rotation_matrix2d(center: (f32, f32), angle: f32, scale: f32) -> [f32; 6] {
    let angle = angle * PI / 180.0f32;
    let alpha = scale * angle.cos();
    let beta = scale * angle.sin();

    let tx = (1.0 - alpha) * center.0 - beta * center.1;
    let ty = beta * center.0 + (1.0 - alpha) * center.1;

    [alpha, beta, tx, -beta, alpha, ty]
}

/// Applies an affine transformation to a point.
fn transform_point(x: f32, y: f32, m: &[f32; 6]) -> (f32, f32) {
    let u = m[0] * x + m[1] * y + m[2];
    let v = m[3] * x + m[4] * y + m[5];
    (u, v)
}

/// Applies an affine transformation to an image.
///
/// Every destination pixel is mapped through the inverted transform and
/// evaluated in the source with `sampler`; with the [`Adaptive`] sampler
/// the constant inverse Jacobian of the map drives the averaging
/// footprint, so shrinking transforms do not alias. Destination pixels
/// that land outside the source rectangle are left untouched.
///
/// [`Adaptive`]: crate::sampler::Adaptive
///
/// # Arguments
///
/// * `src` - The input image with shape (height, width, channels).
/// * `dst` - The output image; its size defines the output rectangle and
///   its dtype is produced by rounding and clamping where lossy.
/// * `m` - The 2x3 affine transformation matrix mapping source to
///   destination coordinates.
/// * `sampler` - The sampler used to evaluate source pixels.
///
/// # Example
///
/// ```
/// use fovea_image::{Image, ImageSize};
/// use fovea_resample::sampler::Bilinear;
/// use fovea_resample::warp::warp_affine;
///
/// let src = Image::<_, 3>::from_size_val(
///     ImageSize {
///         width: 4,
///         height: 5,
///     },
///     1f32,
/// )
/// .unwrap();
///
/// let m = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
/// let mut dst = Image::<f32, 3>::from_size_val(src.size(), 0.0).unwrap();
///
/// warp_affine(&src, &mut dst, &m, &Bilinear).unwrap();
///
/// assert_eq!(dst.size().width, 4);
/// assert_eq!(dst.size().height, 5);
/// ```
pub fn warp_affine<T, S, const C: usize>(
    src: &Image<f32, C>,
    dst: &mut Image<T, C>,
    m: &[f32; 6],
    sampler: &S,
) -> Result<(), ResampleError>
where
    T: PixelDtype,
    S: Sampler,
{
    // Positions in src are found from dst through the inverted transform,
    // whose linear part is also the inverse Jacobian of the map.
    let m_inv = invert_affine_transform(m);
    let jinv = InverseJacobian::from_affine(&m_inv);

    let source = PaddedSource::new(src, S::SUPPORT)?;
    let (src_cols, src_rows) = (src.cols() as f32, src.rows() as f32);
    let clipped_before = sampler.clipped_footprints();

    parallel::par_iter_rows(dst, |col, row, dst_pixel| {
        let (u, v) = transform_point(col as f32, row as f32, &m_inv);
        if u >= 0.0 && u < src_cols && v >= 0.0 && v < src_rows {
            sampler.sample_into(&source, u, v, &jinv, dst_pixel);
        }
    });

    let clipped = sampler.clipped_footprints() - clipped_before;
    if clipped > 0 {
        log::debug!(
            "warp_affine truncated the averaging footprint of {clipped} of {} pixels",
            dst.cols() * dst.rows()
        );
    }

    Ok(())
}
