// ─────────────────────────────────────────────────────────────────────
// SCPN Plasma Source — Radial Profiles
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Analytic ion density and temperature profiles (Fausser et al. 2012).
//!
//! L-mode:
//!   n(r) = n0·(1 − (r/R)²)^α_n
//!   T(r) = T0·(1 − (r/R)²)^α_T
//! H/A-mode, r < r_ped:
//!   n(r) = (n0 − n_ped)·(1 − (r/r_ped)²)^α_n + n_ped
//!   T(r) = (T0 − T_ped)·(1 − (r/r_ped)^β_T)^α_T + T_ped
//! H/A-mode, r ≥ r_ped:
//!   f(r) = (f_ped − f_sep)·(R − r)/(R − r_ped) + f_sep
//!
//! R is the major radius throughout. At r = r_ped exactly the outer linear
//! branch is taken; the two branches are not required to agree there.

use ndarray::{Array1, ArrayView1};
use plasma_types::error::{SourceError, SourceResult};

use crate::params::PlasmaParameters;

fn check_radius(r: f64) -> SourceResult<()> {
    if r >= 0.0 {
        Ok(())
    } else {
        Err(SourceError::Domain(format!(
            "minor radius must not be negative, got {r}"
        )))
    }
}

fn check_radii(r: ArrayView1<f64>) -> SourceResult<()> {
    match r.iter().find(|v| !(**v >= 0.0)) {
        Some(&bad) => check_radius(bad),
        None => Ok(()),
    }
}

/// Linear taper between pedestal and separatrix values.
fn edge_taper(params: &PlasmaParameters, r: f64, f_ped: f64, f_sep: f64) -> f64 {
    let big_r = params.major_radius();
    (f_ped - f_sep) * (big_r - r) / (big_r - params.pedestal_radius()) + f_sep
}

fn density_unchecked(params: &PlasmaParameters, r: f64) -> f64 {
    let n = params.density();
    if !params.mode().has_pedestal() {
        let x = r / params.major_radius();
        return n.centre * (1.0 - x * x).powf(n.peaking_factor);
    }
    let r_ped = params.pedestal_radius();
    if r < r_ped {
        let x = r / r_ped;
        (n.centre - n.pedestal) * (1.0 - x * x).powf(n.peaking_factor) + n.pedestal
    } else {
        edge_taper(params, r, n.pedestal, n.separatrix)
    }
}

fn temperature_unchecked(params: &PlasmaParameters, r: f64) -> f64 {
    let t = params.temperature();
    if !params.mode().has_pedestal() {
        let x = r / params.major_radius();
        return t.centre * (1.0 - x * x).powf(t.peaking_factor);
    }
    let r_ped = params.pedestal_radius();
    if r < r_ped {
        let x = r / r_ped;
        (t.centre - t.pedestal) * (1.0 - x.powf(t.beta)).powf(t.peaking_factor) + t.pedestal
    } else {
        edge_taper(params, r, t.pedestal, t.separatrix)
    }
}

/// Ion density [m⁻³] at minor radius `r` [m].
pub fn ion_density(params: &PlasmaParameters, r: f64) -> SourceResult<f64> {
    check_radius(r)?;
    Ok(density_unchecked(params, r))
}

/// Ion temperature [keV] at minor radius `r` [m].
pub fn ion_temperature(params: &PlasmaParameters, r: f64) -> SourceResult<f64> {
    check_radius(r)?;
    Ok(temperature_unchecked(params, r))
}

/// Batch form of [`ion_density`]. Fails before evaluating anything if any
/// radius is negative.
pub fn ion_density_array(params: &PlasmaParameters, r: ArrayView1<f64>) -> SourceResult<Array1<f64>> {
    check_radii(r)?;
    Ok(r.mapv(|v| density_unchecked(params, v)))
}

/// Batch form of [`ion_temperature`].
pub fn ion_temperature_array(
    params: &PlasmaParameters,
    r: ArrayView1<f64>,
) -> SourceResult<Array1<f64>> {
    check_radii(r)?;
    Ok(r.mapv(|v| temperature_unchecked(params, v)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use plasma_types::config::{ConfinementMode, TokamakConfig};

    fn params_with_mode(mode: ConfinementMode) -> PlasmaParameters {
        let mut cfg = TokamakConfig::iter_like();
        cfg.mode = mode;
        PlasmaParameters::from_config(&cfg).unwrap()
    }

    #[test]
    fn test_centre_values() {
        for mode in [ConfinementMode::L, ConfinementMode::H, ConfinementMode::A] {
            let p = params_with_mode(mode);
            assert!((ion_density(&p, 0.0).unwrap() - 1.09e20).abs() < 1.0);
            assert!((ion_temperature(&p, 0.0).unwrap() - 45.9).abs() < 1e-12);
        }
    }

    #[test]
    fn test_l_mode_uses_major_radius() {
        let p = params_with_mode(ConfinementMode::L);
        let r: f64 = 1.5;
        let x = r / 9.06;
        let expected_n = 1.09e20 * (1.0 - x * x);
        let expected_t = 45.9 * (1.0 - x * x).powf(8.06);
        assert!(((ion_density(&p, r).unwrap() - expected_n) / expected_n).abs() < 1e-12);
        assert!(((ion_temperature(&p, r).unwrap() - expected_t) / expected_t).abs() < 1e-12);
    }

    #[test]
    fn test_h_mode_inner_branch() {
        let p = params_with_mode(ConfinementMode::H);
        let r_ped = p.pedestal_radius();
        let r = 0.5 * r_ped;
        let expected_t = (45.9 - 6.09) * (1.0 - 0.5_f64.powf(6.0)).powf(8.06) + 6.09;
        let got = ion_temperature(&p, r).unwrap();
        assert!((got - expected_t).abs() < 1e-10, "T = {got}, expected {expected_t}");
        // n_centre == n_pedestal for the ITER-like case: flat inside the pedestal
        assert!((ion_density(&p, r).unwrap() - 1.09e20).abs() < 1.0);
    }

    #[test]
    fn test_pedestal_boundary_takes_outer_branch() {
        // Zero exponents make the inner branch flat at the centre value,
        // so the two branches give different answers at r_ped.
        let mut cfg = TokamakConfig::iter_like();
        cfg.ion_density.peaking_factor = 0.0;
        cfg.ion_density.pedestal = 8e19;
        cfg.ion_temperature.peaking_factor = 0.0;
        for mode in [ConfinementMode::H, ConfinementMode::A] {
            cfg.mode = mode;
            let p = PlasmaParameters::from_config(&cfg).unwrap();
            let r_ped = p.pedestal_radius();

            let inner_t = ion_temperature(&p, r_ped * (1.0 - 1e-9)).unwrap();
            let inner_n = ion_density(&p, r_ped * (1.0 - 1e-9)).unwrap();
            assert!((inner_t - 45.9).abs() < 1e-9);
            assert!((inner_n - 1.09e20).abs() / 1.09e20 < 1e-12);

            let t = ion_temperature(&p, r_ped).unwrap();
            let n = ion_density(&p, r_ped).unwrap();
            assert!((t - 6.09).abs() < 1e-12, "expected pedestal temperature, got {t}");
            assert!((n - 8e19).abs() / 8e19 < 1e-12, "expected pedestal density, got {n}");
        }
    }

    #[test]
    fn test_outer_branch_linear_taper() {
        let p = params_with_mode(ConfinementMode::A);
        let r = p.minor_radius();
        let big_r = p.major_radius();
        let r_ped = p.pedestal_radius();
        let expected = (6.09 - 0.1) * (big_r - r) / (big_r - r_ped) + 0.1;
        assert!((ion_temperature(&p, r).unwrap() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_negative_radius_is_domain_error_for_every_mode() {
        for mode in [ConfinementMode::L, ConfinementMode::H, ConfinementMode::A] {
            let p = params_with_mode(mode);
            assert!(matches!(ion_density(&p, -0.1), Err(SourceError::Domain(_))));
            assert!(matches!(ion_temperature(&p, -1e-12), Err(SourceError::Domain(_))));
            let radii = Array1::from(vec![0.1, 0.2, -0.3]);
            assert!(matches!(
                ion_density_array(&p, radii.view()),
                Err(SourceError::Domain(_))
            ));
            assert!(matches!(
                ion_temperature_array(&p, radii.view()),
                Err(SourceError::Domain(_))
            ));
        }
    }

    #[test]
    fn test_nan_radius_rejected() {
        let p = params_with_mode(ConfinementMode::H);
        assert!(ion_density(&p, f64::NAN).is_err());
    }

    #[test]
    fn test_batch_matches_scalar() {
        let p = params_with_mode(ConfinementMode::H);
        let radii = Array1::linspace(0.0, p.minor_radius(), 37);
        let n = ion_density_array(&p, radii.view()).unwrap();
        let t = ion_temperature_array(&p, radii.view()).unwrap();
        for (i, &r) in radii.iter().enumerate() {
            assert_eq!(n[i], ion_density(&p, r).unwrap());
            assert_eq!(t[i], ion_temperature(&p, r).unwrap());
        }
    }

    #[test]
    fn test_temperature_decreases_outward_in_h_mode() {
        let p = params_with_mode(ConfinementMode::H);
        let radii = Array1::linspace(0.0, p.minor_radius(), 50);
        let t = ion_temperature_array(&p, radii.view()).unwrap();
        for i in 1..t.len() {
            assert!(t[i] <= t[i - 1] + 1e-12, "T not monotone at {i}");
        }
    }
}
