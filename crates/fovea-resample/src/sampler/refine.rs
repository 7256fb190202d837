//! Edge-preserving stencil subdivision.
//!
//! First stage of the adaptive sampler: one level of Nohalo subdivision
//! turns the 5x5 pixel stencil around the anchor into a 4x4 grid at half
//! pixel spacing, inserting midpoints and cell centers with minmod-limited
//! slope corrections. The limiter keeps every inserted value inside the
//! range of its neighbors, so the subdivided surface cannot overshoot.

/// Minmod slope limiter: the smaller of two one-sided differences when they
/// agree in sign, zero otherwise.
#[inline]
pub(crate) fn minmod(fwd: f32, bck: f32) -> f32 {
    if fwd * bck >= 0.0 {
        if fwd.abs() <= bck.abs() {
            fwd
        } else {
            bck
        }
    } else {
        0.0
    }
}

/// Subdivides the 5x5 stencil `v` (rows indexed by y, anchor at `v[2][2]`)
/// into a 4x4 grid at half pixel spacing.
///
/// The output grid covers coordinates `{-0.5, 0.0, 0.5, 1.0}` along each
/// axis, relative to the anchor. Even indices are inserted values, odd
/// indices coincide with input pixels, so `out[1][1] == v[2][2]`.
pub(crate) fn refine_stencil(v: &[[f32; 5]; 5]) -> [[f32; 4]; 4] {
    // Limited slopes over the interior 3x3 of the stencil; positions
    // outside it are never dereferenced below.
    let mut slope_x = [[0.0f32; 3]; 3];
    let mut slope_y = [[0.0f32; 3]; 3];
    for r in 1..=3 {
        for c in 1..=3 {
            slope_x[r - 1][c - 1] = minmod(v[r][c + 1] - v[r][c], v[r][c] - v[r][c - 1]);
            slope_y[r - 1][c - 1] = minmod(v[r + 1][c] - v[r][c], v[r][c] - v[r - 1][c]);
        }
    }
    let sx = |r: usize, c: usize| slope_x[r - 1][c - 1];
    let sy = |r: usize, c: usize| slope_y[r - 1][c - 1];

    // Midpoint between (r, c) and its right neighbor.
    let mid_h = |r: usize, c: usize| {
        0.5 * (v[r][c] + v[r][c + 1]) + 0.25 * (sx(r, c) - sx(r, c + 1))
    };
    // Midpoint between (r, c) and its bottom neighbor.
    let mid_v = |r: usize, c: usize| {
        0.5 * (v[r][c] + v[r + 1][c]) + 0.25 * (sy(r, c) - sy(r + 1, c))
    };
    // Center of the cell whose top-left pixel is (r, c).
    let center = |r: usize, c: usize| {
        0.25 * (v[r][c] + v[r][c + 1] + v[r + 1][c] + v[r + 1][c + 1])
            + 0.125
                * (sx(r, c) - sx(r, c + 1) + sx(r + 1, c) - sx(r + 1, c + 1) + sy(r, c)
                    + sy(r, c + 1)
                    - sy(r + 1, c)
                    - sy(r + 1, c + 1))
    };

    let mut out = [[0.0f32; 4]; 4];
    for (row, out_row) in out.iter_mut().enumerate() {
        let on_row = row % 2 != 0;
        let r = if on_row { 2 + (row - 1) / 2 } else { 1 + row / 2 };
        for (col, value) in out_row.iter_mut().enumerate() {
            let on_col = col % 2 != 0;
            let c = if on_col { 2 + (col - 1) / 2 } else { 1 + col / 2 };
            *value = match (on_row, on_col) {
                (true, true) => v[r][c],
                (true, false) => mid_h(r, c),
                (false, true) => mid_v(r, c),
                (false, false) => center(r, c),
            };
        }
    }
    out
}
