// ─────────────────────────────────────────────────────────────────────
// SCPN Plasma Source — Neutron Energy Spectra
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Thermal neutron spectra per channel.
//!
//! DT and DD are near-Gaussian: mean and width follow the Ballabio et al.
//! (1998) fits, or the simpler Muir form. TT is a three-body continuum with
//! a ⁵He ground-state peak and is always tabulated.

use std::f64::consts::PI;

use ndarray::{Array1, ArrayView1};
use plasma_types::config::SpectrumModel;
use plasma_types::constants::{
    A_HELIUM4, A_HELIUM5, A_NEUTRON, FWHM_PER_SIGMA, GAMMA_HE5_MEV, KEV_TO_EV, MEV_TO_EV,
    MUIR_E0_DD_EV, MUIR_E0_DT_EV, MUIR_MASS_RATIO_DD, MUIR_MASS_RATIO_DT, Q_HE5_BREAKUP_MEV,
    Q_TT_MEV,
};
use plasma_types::error::{SourceError, SourceResult};
use plasma_types::reaction::Reaction;

use crate::channels::relative_yields;
use crate::distribution::{EnergyDistribution, TabulatedEnergy};
use crate::fuel::FuelComposition;

/// Upper edge of the TT spectrum grid [MeV].
pub const TT_GRID_MAX_MEV: f64 = 12.0;

/// Share of TT neutrons emitted through the ⁵He ground state.
const TT_HE5_PEAK_FRACTION: f64 = 0.2;

/// Ballabio fit coefficients for one reaction. Temperatures in keV.
struct BallabioFit {
    /// Zero-temperature mean neutron energy [MeV].
    baseline_mev: f64,
    /// Mean shift a1..a4.
    a: [f64; 4],
    /// Width prefactor w0 [keV^½].
    w0: f64,
    /// Width correction b1..b4.
    b: [f64; 4],
}

const BALLABIO_DT: BallabioFit = BallabioFit {
    baseline_mev: 14.021,
    a: [5.30509, 2.4736e-3, 1.84, 1.3818],
    w0: 177.259,
    b: [5.1068e-4, 7.6223e-3, 1.78, 8.7691e-5],
};

const BALLABIO_DD: BallabioFit = BallabioFit {
    baseline_mev: 2.4495,
    a: [4.69515, -0.040729, 0.47, 0.81844],
    w0: 82.542,
    b: [1.7013e-3, 0.16888, 0.49, 7.9460e-4],
};

fn ballabio_term(c: &[f64; 4], t: f64) -> f64 {
    c[0] * t.powf(2.0 / 3.0) / (1.0 + c[1] * t.powf(c[2])) + c[3] * t
}

fn check_temperature(t_kev: f64) -> SourceResult<()> {
    if t_kev > 0.0 && t_kev.is_finite() {
        Ok(())
    } else {
        Err(SourceError::Domain(format!(
            "ion temperature must be finite and > 0 keV, got {t_kev}"
        )))
    }
}

/// Mean and standard deviation of a Gaussian channel spectrum [eV].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectrumMoments {
    pub mean_ev: f64,
    pub std_dev_ev: f64,
}

/// Ballabio mean energy and width for DT or DD at ion temperature
/// `t_kev`. TT has no Gaussian form and yields `InvalidReaction`.
pub fn ballabio_moments(reaction: Reaction, t_kev: f64) -> SourceResult<SpectrumMoments> {
    let fit = match reaction {
        Reaction::DT => &BALLABIO_DT,
        Reaction::DD => &BALLABIO_DD,
        Reaction::TT => {
            return Err(SourceError::InvalidReaction(
                "Ballabio moments exist only for DT and DD".to_string(),
            ))
        }
    };
    check_temperature(t_kev)?;

    let mean_shift_kev = ballabio_term(&fit.a, t_kev);
    let delta = ballabio_term(&fit.b, t_kev);
    let fwhm_kev = fit.w0 * (1.0 + delta) * t_kev.sqrt();

    Ok(SpectrumMoments {
        mean_ev: fit.baseline_mev * MEV_TO_EV + mean_shift_kev * KEV_TO_EV,
        std_dev_ev: fwhm_kev / FWHM_PER_SIGMA * KEV_TO_EV,
    })
}

/// [`ballabio_moments`] keyed by label ("DT", "DD").
pub fn ballabio_moments_for_label(label: &str, t_kev: f64) -> SourceResult<SpectrumMoments> {
    ballabio_moments(label.parse()?, t_kev)
}

/// Muir distribution for DT or DD at ion temperature `t_kev`.
pub fn muir_distribution(reaction: Reaction, t_kev: f64) -> SourceResult<EnergyDistribution> {
    let (e0, mass_ratio) = match reaction {
        Reaction::DT => (MUIR_E0_DT_EV, MUIR_MASS_RATIO_DT),
        Reaction::DD => (MUIR_E0_DD_EV, MUIR_MASS_RATIO_DD),
        Reaction::TT => {
            return Err(SourceError::InvalidReaction(
                "Muir distribution exists only for DT and DD".to_string(),
            ))
        }
    };
    check_temperature(t_kev)?;
    EnergyDistribution::muir(e0, mass_ratio, t_kev * KEV_TO_EV)
}

/// Uniform energy grid from 0 to `max_mev` with `points` nodes [eV].
pub fn energy_grid(max_mev: f64, points: usize) -> SourceResult<Array1<f64>> {
    if points < 2 {
        return Err(SourceError::validation(format!(
            "energy grid needs at least 2 points, got {points}"
        )));
    }
    if !(max_mev > 0.0 && max_mev.is_finite()) {
        return Err(SourceError::Domain(format!(
            "energy grid upper edge must be > 0 MeV, got {max_mev}"
        )));
    }
    Ok(Array1::linspace(0.0, max_mev * MEV_TO_EV, points))
}

/// TT neutron energy density [1/eV] at each grid energy [eV].
///
/// Sum of a three-body phase-space continuum
///   c(E) ∝ sqrt(E·(E_max − E)),  E_max = Q_TT·(m_α + m_n)/(m_α + 2m_n)
/// and a Gaussian ⁵He ground-state peak at
///   E_pk = (Q_TT − Q_⁵He)·m_⁵He/(m_⁵He + m_n)
/// whose width combines the ⁵He resonance width with Doppler broadening.
/// Each component integrates to one over the real line.
pub fn tt_spectrum(energies_ev: ArrayView1<f64>, t_kev: f64) -> SourceResult<Array1<f64>> {
    check_temperature(t_kev)?;

    let e_max = Q_TT_MEV * (A_HELIUM4 + A_NEUTRON) / (A_HELIUM4 + 2.0 * A_NEUTRON);
    let continuum_norm = 8.0 / (PI * e_max * e_max);

    let e_peak = (Q_TT_MEV - Q_HE5_BREAKUP_MEV) * A_HELIUM5 / (A_HELIUM5 + A_NEUTRON);
    let t_mev = t_kev * KEV_TO_EV / MEV_TO_EV;
    let natural = GAMMA_HE5_MEV / FWHM_PER_SIGMA;
    let doppler_sq = 2.0 * A_NEUTRON / (A_NEUTRON + A_HELIUM5) * e_peak * t_mev;
    let sigma = (natural * natural + doppler_sq).sqrt();
    let peak_norm = 1.0 / (sigma * (2.0 * PI).sqrt());

    Ok(energies_ev.mapv(|e_ev| {
        let e = e_ev / MEV_TO_EV;
        let continuum = if e > 0.0 && e < e_max {
            continuum_norm * (e * (e_max - e)).sqrt()
        } else {
            0.0
        };
        let z = (e - e_peak) / sigma;
        let peak = peak_norm * (-0.5 * z * z).exp();
        // per MeV → per eV
        ((1.0 - TT_HE5_PEAK_FRACTION) * continuum + TT_HE5_PEAK_FRACTION * peak) / MEV_TO_EV
    }))
}

/// Tabulated TT distribution on `points` nodes over 0..12 MeV.
pub fn tt_distribution(t_kev: f64, points: usize) -> SourceResult<EnergyDistribution> {
    let grid = energy_grid(TT_GRID_MAX_MEV, points)?;
    let density = tt_spectrum(grid.view(), t_kev)?;
    Ok(EnergyDistribution::Tabulated(TabulatedEnergy::new(
        grid.view(),
        density.view(),
    )?))
}

/// Energy distribution of one channel at ion temperature `t_kev`.
/// `points` is only used by the tabulated TT channel.
pub fn channel_distribution(
    reaction: Reaction,
    t_kev: f64,
    model: SpectrumModel,
    points: usize,
) -> SourceResult<EnergyDistribution> {
    match (reaction, model) {
        (Reaction::TT, _) => tt_distribution(t_kev, points),
        (_, SpectrumModel::Ballabio) => {
            let m = ballabio_moments(reaction, t_kev)?;
            EnergyDistribution::normal(m.mean_ev, m.std_dev_ev)
        }
        (_, SpectrumModel::Muir) => muir_distribution(reaction, t_kev),
    }
}

/// One channel of a fuel's neutron spectrum.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelSpectrum {
    pub reaction: Reaction,
    /// Share of all emitted neutrons; sums to 1 over the fuel's channels.
    pub strength: f64,
    pub distribution: EnergyDistribution,
}

/// Per-channel energy distributions and normalized strengths for `fuel`
/// at ion temperature `t_kev`.
pub fn neutron_energy_distributions(
    t_kev: f64,
    fuel: &FuelComposition,
    model: SpectrumModel,
    points: usize,
) -> SourceResult<Vec<ChannelSpectrum>> {
    relative_yields(fuel, t_kev)?
        .into_iter()
        .map(|(reaction, strength)| -> SourceResult<ChannelSpectrum> {
            Ok(ChannelSpectrum {
                reaction,
                strength,
                distribution: channel_distribution(reaction, t_kev, model, points)?,
            })
        })
        .collect()
}

/// Yield-weighted sum of the channel densities discretized on the fuel's
/// energy grid (0..5 MeV for D, 0..12 MeV for T, 0..20 MeV for D-T).
pub fn combined_spectrum(
    t_kev: f64,
    fuel: &FuelComposition,
    points: usize,
) -> SourceResult<TabulatedEnergy> {
    let grid = energy_grid(fuel.spectrum_max_energy_mev(), points)?;
    let channels = neutron_energy_distributions(t_kev, fuel, SpectrumModel::Ballabio, points)?;

    let mut density = Array1::<f64>::zeros(grid.len());
    for channel in &channels {
        let part = match channel.reaction {
            Reaction::TT => tt_spectrum(grid.view(), t_kev)?,
            _ => grid.mapv(|e| channel.distribution.pdf(e)),
        };
        density.scaled_add(channel.strength, &part);
    }
    TabulatedEnergy::new(grid.view(), density.view())
}
