// ─────────────────────────────────────────────────────────────────────
// SCPN Plasma Source — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::f64::consts::PI;

/// Top-level tokamak source configuration.
/// Maps 1:1 to the JSON files under `configs/`.
/// This is plain input data; domain constructors validate it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokamakConfig {
    /// Plasma major radius [m].
    pub major_radius: f64,
    /// Plasma minor radius [m].
    pub minor_radius: f64,
    pub elongation: f64,
    pub triangularity: f64,
    /// Outward displacement of magnetic surfaces on axis [m].
    pub shafranov_factor: f64,
    /// Minor radius at the pedestal top [m].
    pub pedestal_radius: f64,
    pub mode: ConfinementMode,
    pub ion_density: DensityProfileConfig,
    pub ion_temperature: TemperatureProfileConfig,
    /// Isotope symbol → atomic fraction.
    #[serde(default = "default_fuel")]
    pub fuel: BTreeMap<String, f64>,
    #[serde(default)]
    pub sampling: SamplingConfig,
    /// Seed for reproducible sampling runs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

/// Plasma confinement mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfinementMode {
    #[serde(rename = "L")]
    L,
    #[serde(rename = "H")]
    H,
    #[serde(rename = "A")]
    A,
}

impl ConfinementMode {
    /// H- and A-mode share the pedestal profile shape.
    pub fn has_pedestal(self) -> bool {
        matches!(self, ConfinementMode::H | ConfinementMode::A)
    }
}

/// Ion density profile parameters [m⁻³].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DensityProfileConfig {
    pub centre: f64,
    /// Density exponent α_n.
    pub peaking_factor: f64,
    pub pedestal: f64,
    pub separatrix: f64,
}

/// Ion temperature profile parameters [keV].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureProfileConfig {
    pub centre: f64,
    /// Temperature exponent α_T.
    pub peaking_factor: f64,
    /// Temperature exponent β_T (pedestal modes only).
    pub beta: f64,
    pub pedestal: f64,
    pub separatrix: f64,
}

/// How the Gaussian-shaped channels (DT, DD) are parametrised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpectrumModel {
    /// Normal distribution with Ballabio mean and width.
    #[default]
    Ballabio,
    /// Muir distribution with fixed e0 and reactant mass ratio.
    Muir,
}

/// How per-sample channel contributions are handed to the transport engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmissionMode {
    /// One source per sample per active channel.
    #[default]
    PerChannel,
    /// One source per sample carrying a mixture of the active channels.
    Mixture,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplingConfig {
    /// Number of (a, α) draws (default: 1000)
    #[serde(default = "default_sample_size")]
    pub sample_size: usize,
    /// Toroidal sweep [start, stop] in radians (default: [0, 2π])
    #[serde(default = "default_angles")]
    pub angles: [f64; 2],
    /// Points on the tabulated TT energy grid (default: 50)
    #[serde(default = "default_energy_bins")]
    pub energy_bins: usize,
    #[serde(default)]
    pub spectrum_model: SpectrumModel,
    #[serde(default)]
    pub emission: EmissionMode,
}

fn default_fuel() -> BTreeMap<String, f64> {
    BTreeMap::from([("D".to_string(), 0.5), ("T".to_string(), 0.5)])
}
fn default_sample_size() -> usize {
    1000
}
fn default_angles() -> [f64; 2] {
    [0.0, 2.0 * PI]
}
fn default_energy_bins() -> usize {
    50
}

impl Default for SamplingConfig {
    fn default() -> Self {
        SamplingConfig {
            sample_size: default_sample_size(),
            angles: default_angles(),
            energy_bins: default_energy_bins(),
            spectrum_model: SpectrumModel::default(),
            emission: EmissionMode::default(),
        }
    }
}

impl TokamakConfig {
    /// Load from a JSON file.
    pub fn from_file(path: &str) -> crate::error::SourceResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn from_json_str(contents: &str) -> crate::error::SourceResult<Self> {
        let config: Self = serde_json::from_str(contents)?;
        Ok(config)
    }

    /// ITER-like H-mode reference plasma.
    pub fn iter_like() -> Self {
        TokamakConfig {
            major_radius: 9.06,
            minor_radius: 2.92258,
            elongation: 1.557,
            triangularity: 0.270,
            shafranov_factor: 0.44789,
            pedestal_radius: 0.8 * 2.92258,
            mode: ConfinementMode::H,
            ion_density: DensityProfileConfig {
                centre: 1.09e20,
                peaking_factor: 1.0,
                pedestal: 1.09e20,
                separatrix: 3e19,
            },
            ion_temperature: TemperatureProfileConfig {
                centre: 45.9,
                peaking_factor: 8.06,
                beta: 6.0,
                pedestal: 6.09,
                separatrix: 0.1,
            },
            fuel: default_fuel(),
            sampling: SamplingConfig::default(),
            seed: None,
        }
    }
}
