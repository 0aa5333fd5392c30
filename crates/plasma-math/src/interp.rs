//! One-dimensional interpolation on tabulated data.
//!
//! Abscissae must be strictly increasing. Both interpolants clamp or
//! extrapolate at the ends as documented per function.

/// Locate the segment `[i, i+1]` containing `x`, clamped to the table.
fn segment(xs: &[f64], x: f64) -> usize {
    debug_assert!(xs.len() >= 2, "interpolation table needs at least two points");
    match xs.partition_point(|&v| v <= x) {
        0 => 0,
        n if n >= xs.len() => xs.len() - 2,
        n => n - 1,
    }
}

/// Piecewise-linear interpolation. Returns the end value outside the table.
pub fn interp1d(xs: &[f64], ys: &[f64], x: f64) -> f64 {
    debug_assert_eq!(xs.len(), ys.len());
    if x <= xs[0] {
        return ys[0];
    }
    let last = xs.len() - 1;
    if x >= xs[last] {
        return ys[last];
    }
    let i = segment(xs, x);
    let t = (x - xs[i]) / (xs[i + 1] - xs[i]);
    ys[i] + t * (ys[i + 1] - ys[i])
}

/// Linear interpolation in (ln x, ln y).
///
/// Below the first point the end segment is extended as a power law;
/// above the last point the end value is held. Requires x > 0 and a
/// strictly positive table.
pub fn interp_loglog(xs: &[f64], ys: &[f64], x: f64) -> f64 {
    debug_assert_eq!(xs.len(), ys.len());
    let last = xs.len() - 1;
    if x >= xs[last] {
        return ys[last];
    }
    let i = segment(xs, x);
    let (lx0, lx1) = (xs[i].ln(), xs[i + 1].ln());
    let (ly0, ly1) = (ys[i].ln(), ys[i + 1].ln());
    let slope = (ly1 - ly0) / (lx1 - lx0);
    (ly0 + slope * (x.ln() - lx0)).exp()
}
