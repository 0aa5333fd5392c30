// ─────────────────────────────────────────────────────────────────────
// SCPN Plasma Source — Tokamak Source
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Tokamak plasma neutron source: sample the cross-section, weight each
//! point by its fusion emission and emit ring sources swept toroidally.

use log::{debug, info, warn};
use plasma_types::config::{EmissionMode, SamplingConfig, SpectrumModel, TokamakConfig};
use plasma_types::error::{SourceError, SourceResult, ValidationReport};
use plasma_types::reaction::Reaction;
use plasma_types::state::SampledPlasma;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::distribution::{AngularDistribution, EnergyDistribution, SpatialPlacement};
use crate::fuel::FuelComposition;
use crate::params::PlasmaParameters;
use crate::sampler::{draw_flux_samples, evaluate};
use crate::source::{check_angles, SourceSink, WeightedSource};
use crate::spectrum::channel_distribution;

/// A channel whose share of the total emission falls below this is logged.
const NEGLIGIBLE_CHANNEL_SHARE: f64 = 1e-6;

/// Validated sampling controls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingSettings {
    sample_size: usize,
    angles: [f64; 2],
    energy_bins: usize,
    spectrum_model: SpectrumModel,
    emission: EmissionMode,
}

impl SamplingSettings {
    pub fn new(cfg: &SamplingConfig) -> SourceResult<Self> {
        let mut report = ValidationReport::new();
        report.require(cfg.sample_size > 0, || {
            "sample_size must be a positive integer, got 0".to_string()
        });
        check_angles(&mut report, cfg.angles);
        report.require(cfg.energy_bins >= 2, || {
            format!("energy_bins must be at least 2, got {}", cfg.energy_bins)
        });
        report.into_result()?;

        Ok(Self {
            sample_size: cfg.sample_size,
            angles: cfg.angles,
            energy_bins: cfg.energy_bins,
            spectrum_model: cfg.spectrum_model,
            emission: cfg.emission,
        })
    }

    pub fn sample_size(&self) -> usize {
        self.sample_size
    }
    pub fn angles(&self) -> [f64; 2] {
        self.angles
    }
    pub fn energy_bins(&self) -> usize {
        self.energy_bins
    }
    pub fn spectrum_model(&self) -> SpectrumModel {
        self.spectrum_model
    }
    pub fn emission(&self) -> EmissionMode {
        self.emission
    }
}

impl Default for SamplingSettings {
    fn default() -> Self {
        let cfg = SamplingConfig::default();
        Self {
            sample_size: cfg.sample_size,
            angles: cfg.angles,
            energy_bins: cfg.energy_bins,
            spectrum_model: cfg.spectrum_model,
            emission: cfg.emission,
        }
    }
}

/// Fully validated tokamak neutron source.
#[derive(Debug, Clone)]
pub struct TokamakSource {
    params: PlasmaParameters,
    fuel: FuelComposition,
    settings: SamplingSettings,
    seed: Option<u64>,
}

impl TokamakSource {
    /// Assemble from already validated parts.
    pub fn new(params: PlasmaParameters, fuel: FuelComposition, settings: SamplingSettings) -> Self {
        Self {
            params,
            fuel,
            settings,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate a whole configuration. Geometry, fuel and sampling problems
    /// are reported together in one `Validation` error.
    pub fn from_config(cfg: &TokamakConfig) -> SourceResult<Self> {
        let mut report = ValidationReport::new();
        let params = report.absorb(PlasmaParameters::from_config(cfg));
        let fuel = report.absorb(FuelComposition::from_map(&cfg.fuel));
        let settings = report.absorb(SamplingSettings::new(&cfg.sampling));
        report.into_result()?;

        let (Some(params), Some(fuel), Some(settings)) = (params, fuel, settings) else {
            return Err(SourceError::validation("tokamak configuration is incomplete"));
        };
        let source = Self {
            params,
            fuel,
            settings,
            seed: cfg.seed,
        };
        info!(
            "Tokamak source: {:?}-mode, R0={} m, a={} m, fuel {}, channels {:?}, {} samples",
            params.mode(),
            params.major_radius(),
            params.minor_radius(),
            fuel,
            source.reactions(),
            settings.sample_size()
        );
        Ok(source)
    }

    pub fn params(&self) -> &PlasmaParameters {
        &self.params
    }

    pub fn fuel(&self) -> &FuelComposition {
        &self.fuel
    }

    pub fn settings(&self) -> &SamplingSettings {
        &self.settings
    }

    pub fn reactions(&self) -> Vec<Reaction> {
        self.fuel.reactions()
    }

    /// RNG seeded from the configured seed, or from OS entropy.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// One sampling pass: draw, evaluate and normalize.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> SourceResult<SampledPlasma> {
        let draws = draw_flux_samples(rng, self.params.minor_radius(), self.settings.sample_size);
        let state = evaluate(&self.params, &self.fuel, draws.a.view(), draws.alpha.view())?;

        debug!(
            "Sampled {} points, total source density {:.4e} n/(m³·s)",
            state.len(),
            state.neutron_source_density.sum()
        );
        for (k, reaction) in state.channels.iter().enumerate() {
            let share: f64 = (0..state.len()).map(|i| state.channel_strength(i, k)).sum();
            if share < NEGLIGIBLE_CHANNEL_SHARE {
                warn!("{reaction} channel contributes a negligible share ({share:.3e}) of the emission");
            }
        }
        Ok(state)
    }

    /// Turn a sampling pass into weighted ring sources. Nothing is returned
    /// unless every source could be built.
    pub fn make_sources(&self, state: &SampledPlasma) -> SourceResult<Vec<WeightedSource>> {
        let [phi_start, phi_stop] = self.settings.angles;
        let model = self.settings.spectrum_model;
        let bins = self.settings.energy_bins;
        let mut sources = Vec::with_capacity(state.len() * state.channels.len());

        for i in 0..state.len() {
            let space = SpatialPlacement::Ring {
                radius: state.r[i],
                z: state.z[i],
                phi_start,
                phi_stop,
            };
            let t_kev = state.ion_temperature[i];
            let mut channels = state
                .channels
                .iter()
                .enumerate()
                .map(|(k, &reaction)| {
                    channel_distribution(reaction, t_kev, model, bins)
                        .map(|dist| (state.channel_fractions[[i, k]], dist))
                })
                .collect::<SourceResult<Vec<_>>>()?;

            match self.settings.emission {
                EmissionMode::PerChannel => {
                    for (fraction, energy) in channels {
                        sources.push(WeightedSource {
                            space,
                            angle: AngularDistribution::Isotropic,
                            energy,
                            strength: state.strengths[i] * fraction,
                        });
                    }
                }
                EmissionMode::Mixture => {
                    let energy = if channels.len() == 1 {
                        channels.swap_remove(0).1
                    } else {
                        EnergyDistribution::mixture(channels)?
                    };
                    sources.push(WeightedSource {
                        space,
                        angle: AngularDistribution::Isotropic,
                        energy,
                        strength: state.strengths[i],
                    });
                }
            }
        }
        Ok(sources)
    }

    /// Sample and build all sources.
    pub fn build<R: Rng + ?Sized>(&self, rng: &mut R) -> SourceResult<Vec<WeightedSource>> {
        let state = self.sample(rng)?;
        self.make_sources(&state)
    }

    /// Build all sources and hand them to `sink`; returns how many were
    /// emitted. The sink sees nothing if the build fails.
    pub fn emit_into<S, R>(&self, sink: &mut S, rng: &mut R) -> SourceResult<usize>
    where
        S: SourceSink + ?Sized,
        R: Rng + ?Sized,
    {
        let sources = self.build(rng)?;
        let count = sources.len();
        for source in sources {
            sink.accept(source);
        }
        info!("Emitted {count} weighted sources");
        Ok(count)
    }
}
