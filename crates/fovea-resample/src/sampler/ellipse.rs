//! Averaging footprint geometry.
//!
//! The adaptive sampler needs to know how one destination pixel maps back
//! into the source grid. The image of a unit disk under the inverse
//! Jacobian is an ellipse; its axes come out of a small closed-form
//! singular value decomposition. Singular values are clamped up to one so
//! the footprint never shrinks below a pixel, which is what makes the
//! scheme degrade gracefully to pure interpolation near unit scale.

use crate::jacobian::InverseJacobian;

/// Elbow room for the near-identity early out and for footprint
/// containment tests.
pub(crate) const FUDGE: f64 = 1e-6;

/// Geometry of the clamped averaging ellipse in source pixel units.
#[derive(Debug)]
pub(crate) struct Footprint {
    /// Major axis direction divided by the major radius. Dotting a source
    /// offset with this vector gives its first coordinate in the space
    /// where the ellipse is the unit disk.
    pub(crate) c_major: (f32, f32),
    /// Minor axis counterpart of `c_major`.
    pub(crate) c_minor: (f32, f32),
    /// Product of the clamped singular values; the area of the ellipse
    /// relative to the unit disk.
    pub(crate) area: f64,
    /// Axis-aligned half extents of the ellipse.
    pub(crate) half_width: f64,
    pub(crate) half_height: f64,
}

impl Footprint {
    /// Computes the averaging ellipse for an inverse Jacobian.
    ///
    /// Returns `None` when the largest singular value is at most one,
    /// meaning no direction of the destination grid is coarser than the
    /// source grid and plain interpolation needs no help.
    pub(crate) fn compute(jinv: &InverseJacobian) -> Option<Self> {
        let (a, b, c, d) = (jinv.xx, jinv.xy, jinv.yx, jinv.yy);

        // Eigenvalues of n = Jinv * transpose(Jinv) are the squares of
        // the singular values of Jinv, and its eigenvectors are the left
        // singular vectors.
        let n11 = a * a + b * b;
        let n12 = a * c + b * d;
        let n22 = c * c + d * d;
        let det = a * d - b * c;
        let frobenius_squared = n11 + n22;
        let twice_det = det + det;
        let discriminant =
            (frobenius_squared + twice_det) * (frobenius_squared - twice_det);
        let sqrt_discriminant = discriminant.sqrt();

        let twice_s1s1 = frobenius_squared + sqrt_discriminant;
        if twice_s1s1 < 2.0 + FUDGE {
            return None;
        }

        let s1s1 = 0.5 * twice_s1s1;
        let s2s2 = 0.5 * (frobenius_squared - sqrt_discriminant);

        // Left singular vector for the largest singular value, taken from
        // the largest row of n - s1^2 I. When that matrix vanishes every
        // vector is an eigenvector and the norm is zero, so the fallback
        // [1, 0] covers all cases.
        let row1 = s1s1 - n11;
        let row2 = s1s1 - n22;
        let (raw_u11, raw_u21) = if row1 * row1 >= row2 * row2 {
            (n12, row1)
        } else {
            (row2, n12)
        };
        let norm = (raw_u11 * raw_u11 + raw_u21 * raw_u21).sqrt();
        let (u11, u21) = if norm > 0.0 {
            (raw_u11 / norm, raw_u21 / norm)
        } else {
            (1.0, 0.0)
        };

        // Singular values clamped up to 1 so the ellipse always contains
        // a unit disk.
        let major_mag = if s1s1 <= 1.0 { 1.0 } else { s1s1.sqrt() };
        let minor_mag = if s2s2 <= 1.0 { 1.0 } else { s2s2.sqrt() };

        let major = (major_mag * u11, major_mag * u21);
        let minor = (-minor_mag * u21, minor_mag * u11);

        Some(Self {
            c_major: ((u11 / major_mag) as f32, (u21 / major_mag) as f32),
            c_minor: ((-u21 / minor_mag) as f32, (u11 / minor_mag) as f32),
            area: major_mag * minor_mag,
            half_width: (major.0 * major.0 + minor.0 * minor.0).sqrt(),
            half_height: (major.1 * major.1 + minor.1 * minor.1).sqrt(),
        })
    }
}
