//! Flux-surface (a, α) → cylindrical (R, Z) coordinate transform.
//!
//!   Δ_sh = S·(1 − (a/a_minor)²)
//!   R    = R0 + a·cos(α + δ·sin α) + Δ_sh
//!   Z    = κ·a·sin α

use ndarray::{Array1, ArrayView1, Zip};
use plasma_types::error::{SourceError, SourceResult};

use crate::params::PlasmaParameters;

fn transform_unchecked(params: &PlasmaParameters, a: f64, alpha: f64) -> (f64, f64) {
    let rho = a / params.minor_radius();
    let shafranov_shift = params.shafranov_factor() * (1.0 - rho * rho);
    let r = params.major_radius()
        + a * (alpha + params.triangularity() * alpha.sin()).cos()
        + shafranov_shift;
    let z = params.elongation() * a * alpha.sin();
    (r, z)
}

fn negative_radius(a: f64) -> SourceError {
    SourceError::Domain(format!("radius 'a' must not be negative, got {a}"))
}

/// Map one flux-coordinate sample to (R, Z) [m].
pub fn flux_to_cylindrical(params: &PlasmaParameters, a: f64, alpha: f64) -> SourceResult<(f64, f64)> {
    if !(a >= 0.0) {
        return Err(negative_radius(a));
    }
    Ok(transform_unchecked(params, a, alpha))
}

/// Batch form of [`flux_to_cylindrical`]; returns `(R, Z)` arrays.
pub fn flux_to_cylindrical_array(
    params: &PlasmaParameters,
    a: ArrayView1<f64>,
    alpha: ArrayView1<f64>,
) -> SourceResult<(Array1<f64>, Array1<f64>)> {
    if a.len() != alpha.len() {
        return Err(SourceError::Domain(format!(
            "sample arrays differ in length: a has {}, alpha has {}",
            a.len(),
            alpha.len()
        )));
    }
    if let Some(&bad) = a.iter().find(|v| !(**v >= 0.0)) {
        return Err(negative_radius(bad));
    }

    let mut r = Array1::zeros(a.len());
    let mut z = Array1::zeros(a.len());
    Zip::from(&mut r)
        .and(&mut z)
        .and(a)
        .and(alpha)
        .for_each(|r, z, &a, &alpha| {
            (*r, *z) = transform_unchecked(params, a, alpha);
        });
    Ok((r, z))
}
