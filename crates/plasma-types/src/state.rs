// ─────────────────────────────────────────────────────────────────────
// SCPN Plasma Source — State
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use ndarray::{Array1, Array2};

use crate::reaction::Reaction;

/// One sampling pass over the plasma cross-section.
/// Every array has length `n_samples`; `channel_fractions` is `[n_samples, n_channels]`.
#[derive(Debug, Clone)]
pub struct SampledPlasma {
    pub a: Array1<f64>,                     // Minor-radius position [m]
    pub alpha: Array1<f64>,                 // Poloidal angle [rad]
    pub ion_density: Array1<f64>,           // [m⁻³]
    pub ion_temperature: Array1<f64>,       // [keV]
    pub r: Array1<f64>,                     // Major-radius coordinate [m]
    pub z: Array1<f64>,                     // Height [m]
    pub neutron_source_density: Array1<f64>, // All channels [n/(m³·s)]
    pub strengths: Array1<f64>,             // Normalized, sums to 1
    pub channels: Vec<Reaction>,            // Column order of channel_fractions
    pub channel_fractions: Array2<f64>,     // Per-sample channel share, rows sum to 1
}

impl SampledPlasma {
    pub fn len(&self) -> usize {
        self.a.len()
    }

    pub fn is_empty(&self) -> bool {
        self.a.is_empty()
    }

    /// Relative strength of `channel` at sample `i`, i.e. the weight its
    /// emitted source carries.
    pub fn channel_strength(&self, i: usize, channel: usize) -> f64 {
        self.strengths[i] * self.channel_fractions[[i, channel]]
    }
}
