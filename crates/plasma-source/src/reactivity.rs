// ─────────────────────────────────────────────────────────────────────
// SCPN Plasma Source — Reactivity
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Maxwell-averaged fusion reactivities ⟨σv⟩ [m³/s] as functions of ion
//! temperature [keV].
//!
//! - DT: Sadler–Van Belle fit.
//! - DD (neutron branch): Bosch–Hale 1992 parametrisation.
//! - TT: log-log interpolation on the NRL Plasma Formulary table.

use ndarray::{Array1, ArrayView1};
use plasma_math::interp::interp_loglog;
use plasma_types::constants::CM3_TO_M3;
use plasma_types::error::{SourceError, SourceResult};

/// Sadler–Van Belle coefficients c0..c6.
const SVB_DT: [f64; 7] = [
    2.5663271e-18,
    19.983026,
    2.5077133e-2,
    2.5773408e-3,
    6.1880463e-5,
    6.6024089e-2,
    8.1215505e-3,
];

/// Bosch–Hale parametrisation for one reaction.
struct BoschHale {
    /// Gamow constant B_G [keV^½].
    bg: f64,
    /// Reduced mass energy m_r c² [keV].
    mrc2: f64,
    /// C1..C7; C1 in cm³/s.
    c: [f64; 7],
}

/// D(d,n)³He.
const BOSCH_HALE_DD_N: BoschHale = BoschHale {
    bg: 31.3970,
    mrc2: 937_814.0,
    c: [5.43360e-12, 5.85778e-3, 7.68222e-3, 0.0, -2.964e-6, 0.0, 0.0],
};

/// T(t,2n)⁴He ⟨σv⟩ [cm³/s] on temperature nodes [keV].
const TT_TABLE_KEV: [f64; 10] = [1.0, 2.0, 5.0, 10.0, 20.0, 50.0, 100.0, 200.0, 500.0, 1000.0];
const TT_TABLE_CM3: [f64; 10] = [
    3.3e-22, 7.1e-21, 1.4e-19, 7.2e-19, 2.5e-18, 8.7e-18, 1.9e-17, 4.2e-17, 8.4e-17, 8.0e-17,
];

fn check_temperature(t_kev: f64) -> SourceResult<()> {
    if t_kev > 0.0 && t_kev.is_finite() {
        Ok(())
    } else {
        Err(SourceError::Domain(format!(
            "ion temperature must be finite and > 0 keV, got {t_kev}"
        )))
    }
}

/// Sadler–Van Belle D-T reactivity [m³/s].
///
///   U = 1 − T·(c2 + T·(c3 − c4·T)) / (1 + T·(c5 + c6·T))
///   ⟨σv⟩ = c0·exp(−c1·(U/T)^⅓) / (U^⅚·T^⅔)
pub fn sadler_van_belle_dt(t_kev: f64) -> SourceResult<f64> {
    check_temperature(t_kev)?;
    let c = &SVB_DT;
    let t = t_kev;
    let u = 1.0 - t * (c[2] + t * (c[3] - c[4] * t)) / (1.0 + t * (c[5] + c[6] * t));
    let val = c[0] * (-c[1] * (u / t).cbrt()).exp() / (u.powf(5.0 / 6.0) * t.powf(2.0 / 3.0));
    if val.is_finite() {
        Ok(val)
    } else {
        Err(SourceError::Domain(format!(
            "Sadler-Van Belle reactivity is not finite at T = {t_kev} keV"
        )))
    }
}

fn bosch_hale(fit: &BoschHale, t_kev: f64) -> SourceResult<f64> {
    check_temperature(t_kev)?;
    let c = &fit.c;
    let t = t_kev;
    let theta = t / (1.0 - t * (c[1] + t * (c[3] + t * c[5])) / (1.0 + t * (c[2] + t * (c[4] + t * c[6]))));
    let xi = (fit.bg * fit.bg / (4.0 * theta)).cbrt();
    let sigma_v = c[0] * theta * (xi / (fit.mrc2 * t.powi(3))).sqrt() * (-3.0 * xi).exp();
    Ok(sigma_v * CM3_TO_M3)
}

/// Bosch–Hale D(d,n)³He reactivity [m³/s].
pub fn bosch_hale_dd(t_kev: f64) -> SourceResult<f64> {
    bosch_hale(&BOSCH_HALE_DD_N, t_kev)
}

/// Tabulated T-T reactivity [m³/s], held constant above 1 MeV.
///
/// Below the first node the curve follows the Sadler–Van Belle DT shape,
/// so the TT/DT ratio stays at its 1 keV value in a cold edge.
pub fn tt_reactivity(t_kev: f64) -> SourceResult<f64> {
    check_temperature(t_kev)?;
    let t_min = TT_TABLE_KEV[0];
    if t_kev < t_min {
        let anchor = TT_TABLE_CM3[0] * CM3_TO_M3;
        return Ok(anchor * sadler_van_belle_dt(t_kev)? / sadler_van_belle_dt(t_min)?);
    }
    Ok(interp_loglog(&TT_TABLE_KEV, &TT_TABLE_CM3, t_kev) * CM3_TO_M3)
}

/// Relative emission weight n² · ⟨σv⟩_DT for ion density `n`.
///
/// Not the physical rate: an equimolar DT mix of total density n reacts at
/// n²/4 · ⟨σv⟩. The constant factor drops out once strengths are normalized.
pub fn neutron_source_density(ion_density: f64, t_kev: f64) -> SourceResult<f64> {
    Ok(ion_density * ion_density * sadler_van_belle_dt(t_kev)?)
}

/// Batch form of [`neutron_source_density`].
pub fn neutron_source_density_array(
    ion_density: ArrayView1<f64>,
    t_kev: ArrayView1<f64>,
) -> SourceResult<Array1<f64>> {
    ion_density
        .iter()
        .zip(t_kev.iter())
        .map(|(&n, &t)| neutron_source_density(n, t))
        .collect::<SourceResult<Vec<f64>>>()
        .map(Array1::from)
}
