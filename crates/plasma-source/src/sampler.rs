// ─────────────────────────────────────────────────────────────────────
// SCPN Plasma Source — Cross-Section Sampler
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Monte Carlo draws over the plasma cross-section and their evaluation
//! into a [`SampledPlasma`].
//!
//! `a` is drawn uniformly in minor radius, not in area, so the core is
//! over-sampled relative to a volume-uniform draw.

use std::f64::consts::PI;

use ndarray::{Array1, Array2, ArrayView1, Axis};
use plasma_types::error::{SourceError, SourceResult};
use plasma_types::state::SampledPlasma;
use rand::Rng;

use crate::fuel::FuelComposition;
use crate::geometry::flux_to_cylindrical_array;
use crate::params::PlasmaParameters;
use crate::profiles::{ion_density_array, ion_temperature_array};

/// Raw flux-coordinate draws.
#[derive(Debug, Clone, PartialEq)]
pub struct FluxSamples {
    pub a: Array1<f64>,
    pub alpha: Array1<f64>,
}

/// Draw `n` pairs `a ~ U(0, minor_radius)`, `α ~ U(0, 2π)`.
pub fn draw_flux_samples<R: Rng + ?Sized>(rng: &mut R, minor_radius: f64, n: usize) -> FluxSamples {
    let mut a = Array1::zeros(n);
    let mut alpha = Array1::zeros(n);
    for i in 0..n {
        a[i] = minor_radius * rng.gen::<f64>();
        alpha[i] = 2.0 * PI * rng.gen::<f64>();
    }
    FluxSamples { a, alpha }
}

/// Evaluate profiles, geometry and per-channel emission at the given flux
/// coordinates.
///
/// Strengths are the per-sample all-channel source densities normalized
/// over the whole pass; `channel_fractions` splits each sample's strength
/// between the fuel's active channels. Fails with `Domain` on a negative
/// radius, a non-positive temperature, or a pass with no emission at all.
pub fn evaluate(
    params: &PlasmaParameters,
    fuel: &FuelComposition,
    a: ArrayView1<f64>,
    alpha: ArrayView1<f64>,
) -> SourceResult<SampledPlasma> {
    let (r, z) = flux_to_cylindrical_array(params, a, alpha)?;
    let ion_density = ion_density_array(params, a)?;
    let ion_temperature = ion_temperature_array(params, a)?;

    let tables = fuel.channels();
    let n = a.len();
    let mut coefficients = Array2::<f64>::zeros((n, tables.len()));
    for (k, table) in tables.iter().enumerate() {
        for i in 0..n {
            coefficients[[i, k]] =
                table.emission_coefficient(ion_temperature[i], fuel.deuterium(), fuel.tritium())?;
        }
    }

    let per_sample = coefficients.sum_axis(Axis(1));
    let neutron_source_density = &ion_density * &ion_density * &per_sample;
    let total = neutron_source_density.sum();
    if !(total > 0.0 && total.is_finite()) {
        return Err(SourceError::Domain(format!(
            "total neutron source density over {n} samples is not positive ({total})"
        )));
    }
    let strengths = &neutron_source_density / total;

    let mut channel_fractions = coefficients;
    for (mut row, &sum) in channel_fractions.outer_iter_mut().zip(per_sample.iter()) {
        if sum > 0.0 {
            row /= sum;
        }
    }

    Ok(SampledPlasma {
        a: a.to_owned(),
        alpha: alpha.to_owned(),
        ion_density,
        ion_temperature,
        r,
        z,
        neutron_source_density,
        strengths,
        channels: tables.iter().map(|t| t.reaction).collect(),
        channel_fractions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use plasma_types::config::TokamakConfig;
    use plasma_types::reaction::Reaction;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn params() -> PlasmaParameters {
        PlasmaParameters::from_config(&TokamakConfig::iter_like()).unwrap()
    }

    #[test]
    fn test_draws_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let s = draw_flux_samples(&mut rng, 2.9, 2000);
        assert_eq!(s.a.len(), 2000);
        assert!(s.a.iter().all(|&a| (0.0..2.9).contains(&a)));
        assert!(s.alpha.iter().all(|&x| (0.0..2.0 * PI).contains(&x)));
    }

    #[test]
    fn test_draws_are_reproducible() {
        let s1 = draw_flux_samples(&mut StdRng::seed_from_u64(7), 1.0, 50);
        let s2 = draw_flux_samples(&mut StdRng::seed_from_u64(7), 1.0, 50);
        assert_eq!(s1, s2);
    }

    #[test]
    fn test_strengths_and_fractions_normalized() {
        let p = params();
        let fuel = FuelComposition::equimolar_dt();
        let s = draw_flux_samples(&mut StdRng::seed_from_u64(1), p.minor_radius(), 300);
        let state = evaluate(&p, &fuel, s.a.view(), s.alpha.view()).unwrap();

        assert_eq!(state.channels, vec![Reaction::DT, Reaction::DD, Reaction::TT]);
        assert!((state.strengths.sum() - 1.0).abs() < 1e-9);
        for row in state.channel_fractions.outer_iter() {
            assert!((row.sum() - 1.0).abs() < 1e-12);
            assert!(row[0] > 0.9, "DT must dominate, row {row}");
        }
    }

    #[test]
    fn test_hotter_core_emits_more() {
        let p = params();
        let fuel = FuelComposition::equimolar_dt();
        let a = Array1::from(vec![0.0, 0.5 * p.minor_radius(), 0.95 * p.minor_radius()]);
        let alpha = Array1::zeros(3);
        let state = evaluate(&p, &fuel, a.view(), alpha.view()).unwrap();
        assert!(state.strengths[0] > state.strengths[1]);
        assert!(state.strengths[1] > state.strengths[2]);
    }

    #[test]
    fn test_pure_deuterium_has_single_channel() {
        let p = params();
        let fuel = FuelComposition::new([("D", 1.0)]).unwrap();
        let a = Array1::from(vec![0.1, 1.0]);
        let alpha = Array1::from(vec![0.0, 1.0]);
        let state = evaluate(&p, &fuel, a.view(), alpha.view()).unwrap();
        assert_eq!(state.channels, vec![Reaction::DD]);
        assert!(state.channel_fractions.iter().all(|&f| f == 1.0));
    }

    #[test]
    fn test_negative_radius_aborts_pass() {
        let p = params();
        let fuel = FuelComposition::equimolar_dt();
        let a = Array1::from(vec![0.1, -0.2]);
        let alpha = Array1::from(vec![0.0, 0.0]);
        assert!(matches!(
            evaluate(&p, &fuel, a.view(), alpha.view()),
            Err(SourceError::Domain(_))
        ));
    }

    #[test]
    fn test_empty_pass_is_domain_error() {
        let p = params();
        let fuel = FuelComposition::equimolar_dt();
        let empty = Array1::<f64>::zeros(0);
        assert!(matches!(
            evaluate(&p, &fuel, empty.view(), empty.view()),
            Err(SourceError::Domain(_))
        ));
    }
}
