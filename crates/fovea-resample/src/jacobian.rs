/// Inverse Jacobian of the destination-to-source coordinate map.
///
/// Resampling pulls destination pixel locations back into the source image.
/// The first-order behavior of that pullback around a sampling location is
/// the 2x2 matrix
///
/// ```text
/// | xx  xy |   | dx/du  dx/dv |
/// | yx  yy | = | dy/du  dy/dv |
/// ```
///
/// where `(x, y)` are source coordinates and `(u, v)` destination
/// coordinates. Samplers that adapt to the local sampling density read the
/// footprint of one destination pixel from this matrix; the identity matrix
/// describes a transformation that preserves pixel density.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InverseJacobian {
    /// Rate of change of the source x coordinate per destination x step.
    pub xx: f64,
    /// Rate of change of the source x coordinate per destination y step.
    pub xy: f64,
    /// Rate of change of the source y coordinate per destination x step.
    pub yx: f64,
    /// Rate of change of the source y coordinate per destination y step.
    pub yy: f64,
}

impl InverseJacobian {
    /// The inverse Jacobian of a density preserving transformation.
    pub const IDENTITY: Self = Self {
        xx: 1.0,
        xy: 0.0,
        yx: 0.0,
        yy: 1.0,
    };

    /// Create an inverse Jacobian from its four entries.
    pub fn new(xx: f64, xy: f64, yx: f64, yy: f64) -> Self {
        Self { xx, xy, yx, yy }
    }

    /// Create the inverse Jacobian of an axis-aligned scaling.
    ///
    /// # Arguments
    ///
    /// * `sx` - Source pixels consumed per destination pixel along x.
    /// * `sy` - Source pixels consumed per destination pixel along y.
    ///
    /// # Example
    ///
    /// ```
    /// use fovea_resample::jacobian::InverseJacobian;
    ///
    /// // a 4x downscale in both directions
    /// let jinv = InverseJacobian::from_scale(4.0, 4.0);
    /// assert_eq!(jinv.xx, 4.0);
    /// assert_eq!(jinv.yy, 4.0);
    /// ```
    pub fn from_scale(sx: f64, sy: f64) -> Self {
        Self {
            xx: sx,
            xy: 0.0,
            yx: 0.0,
            yy: sy,
        }
    }

    /// Create an inverse Jacobian from the linear part of a 2x3 affine map.
    ///
    /// The matrix must map destination coordinates to source coordinates,
    /// i.e. it is the inverse of the transformation being applied.
    pub fn from_affine(m: &[f32; 6]) -> Self {
        Self {
            xx: m[0] as f64,
            xy: m[1] as f64,
            yx: m[3] as f64,
            yy: m[4] as f64,
        }
    }
}

impl Default for InverseJacobian {
    fn default() -> Self {
        Self::IDENTITY
    }
}
