// ─────────────────────────────────────────────────────────────────────
// SCPN Plasma Source — Quadrature
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Trapezoid quadrature on non-uniform grids.

use ndarray::{Array1, ArrayView1};

/// ∫ y dx by the trapezoid rule.
pub fn trapezoid(x: ArrayView1<f64>, y: ArrayView1<f64>) -> f64 {
    debug_assert_eq!(x.len(), y.len());
    (1..x.len())
        .map(|i| 0.5 * (y[i] + y[i - 1]) * (x[i] - x[i - 1]))
        .sum()
}

/// Running trapezoid integral; element 0 is 0 and the last element equals
/// `trapezoid(x, y)`.
pub fn cumulative_trapezoid(x: ArrayView1<f64>, y: ArrayView1<f64>) -> Array1<f64> {
    debug_assert_eq!(x.len(), y.len());
    let mut out = Array1::zeros(x.len());
    for i in 1..x.len() {
        out[i] = out[i - 1] + 0.5 * (y[i] + y[i - 1]) * (x[i] - x[i - 1]);
    }
    out
}
