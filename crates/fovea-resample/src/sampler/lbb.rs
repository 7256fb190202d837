//! Locally bounded bicubic interpolation.
//!
//! Second stage of the adaptive sampler: a Hermite bicubic evaluated over
//! one cell of the subdivided grid, with derivative limiters that keep the
//! surface between the local pixel minima and maxima (Robidoux and
//! Racette's LBB method, after Brodlie, Mashwama and Butt). When the
//! limiters stay inactive the result is plain Catmull-Rom; near edges the
//! limiters engage and suppress over- and undershoot instead of clamping
//! after the fact.

/// Grid positions of the four cell corners, `(row, col)` into the 4x4
/// subdivided grid. Order is `00, 10, 01, 11` with the first digit naming
/// the x side.
const CORNERS: [(usize, usize); 4] = [(1, 1), (1, 2), (2, 1), (2, 2)];

/// Hermite bicubic weights for one evaluation point, shared by all
/// channels of a pixel.
#[derive(Debug)]
pub(crate) struct HermiteWeights {
    value: [f32; 4],
    dx: [f32; 4],
    dy: [f32; 4],
    cross: [f32; 4],
}

/// Cubic Hermite basis at `t` in `[0, 1]`: value and derivative weights
/// for the near end, then value and derivative weights for the far end.
#[inline]
fn hermite_basis(t: f32) -> [f32; 4] {
    let omt = 1.0 - t;
    [
        (1.0 + 2.0 * t) * omt * omt,
        t * omt * omt,
        t * t * (3.0 - 2.0 * t),
        t * t * (t - 1.0),
    ]
}

impl HermiteWeights {
    /// Weights for the cell-local coordinates `(xp, yp)`, both in `[0, 1]`.
    pub(crate) fn new(xp: f32, yp: f32) -> Self {
        let hx = hermite_basis(xp);
        let hy = hermite_basis(yp);
        // Near/far selection per corner, following the order of CORNERS.
        let sides = [(0, 0), (2, 0), (0, 2), (2, 2)];
        let mut value = [0.0; 4];
        let mut dx = [0.0; 4];
        let mut dy = [0.0; 4];
        let mut cross = [0.0; 4];
        for (k, &(sx, sy)) in sides.iter().enumerate() {
            value[k] = hx[sx] * hy[sy];
            dx[k] = hx[sx + 1] * hy[sy];
            dy[k] = hx[sx] * hy[sy + 1];
            cross[k] = hx[sx + 1] * hy[sy + 1];
        }
        Self {
            value,
            dx,
            dy,
            cross,
        }
    }
}

/// Clamps a doubled centered difference `d` to `limit` in magnitude,
/// preserving its sign.
#[inline]
fn clamp_slope(d: f32, limit: f32) -> f32 {
    let sign = if d >= 0.0 { 1.0 } else { -1.0 };
    if sign * d <= limit {
        d
    } else {
        sign * limit
    }
}

/// Evaluates the locally bounded bicubic over the central cell of the 4x4
/// grid `s` (rows indexed by y), at the point described by `weights`.
///
/// The result is contained between the minimum and maximum of `s`, so no
/// clamping of the output is ever needed.
pub(crate) fn lbb(weights: &HermiteWeights, s: &[[f32; 4]; 4]) -> f32 {
    let mut value_part = 0.0;
    let mut slope_part = 0.0;
    let mut cross_part = 0.0;

    for (k, &(r, c)) in CORNERS.iter().enumerate() {
        let value = s[r][c];

        let mut lo = value;
        let mut hi = value;
        for row in s.iter().take(r + 2).skip(r - 1) {
            for &q in row.iter().take(c + 2).skip(c - 1) {
                lo = lo.min(q);
                hi = hi.max(q);
            }
        }
        // Distances to the local extrema; both are nonnegative.
        let u = value - lo;
        let v = hi - value;

        // Doubled centered differences and the quadrupled cross
        // derivative. The factors of 1/2 and 1/4 are folded into the
        // final accumulation.
        let raw_dx = s[r][c + 1] - s[r][c - 1];
        let raw_dy = s[r + 1][c] - s[r - 1][c];
        let raw_cross =
            (s[r + 1][c + 1] - s[r + 1][c - 1]) - (s[r - 1][c + 1] - s[r - 1][c - 1]);

        // First derivatives are limited so the patch stays between the
        // local planes through the extrema. Key multiplier is 3, doubled
        // because the differences are doubled.
        let slope_limit = 6.0 * u.min(v);
        let dx = clamp_slope(raw_dx, slope_limit);
        let dy = clamp_slope(raw_dy, slope_limit);

        // The cross derivative is boxed in by four sequential limiters
        // built from the limited slopes.
        let twelve_sum = 6.0 * (dx + dy);
        let twelve_dif = 6.0 * (dx - dy);
        let abs_sum = twelve_sum.abs();
        let abs_dif = twelve_dif.abs();
        let u36 = 36.0 * u;
        let v36 = 36.0 * v;
        let cross = raw_cross
            .max(abs_sum - u36)
            .min(v36 - abs_sum)
            .max(abs_dif - v36)
            .min(u36 - abs_dif);

        value_part += weights.value[k] * value;
        slope_part += weights.dx[k] * dx + weights.dy[k] * dy;
        cross_part += weights.cross[k] * cross;
    }

    value_part + 0.5 * slope_part + 0.25 * cross_part
}
