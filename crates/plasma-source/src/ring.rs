//! Fixed-temperature fusion ring source.

use plasma_types::config::SamplingConfig;
use plasma_types::error::{SourceResult, ValidationReport};

use crate::distribution::{AngularDistribution, SpatialPlacement};
use crate::fuel::FuelComposition;
use crate::source::{check_angles, WeightedSource};
use crate::spectrum::neutron_energy_distributions;

/// Isotropic ring of fusion neutrons at a single ion temperature.
///
/// Emits one source per active channel of `fuel`, each on a ring of
/// `radius` [m] at height `z_placement` [m] swept over `angles` [rad].
/// Strengths are the channels' relative yields and sum to 1.
pub fn fusion_ring_source(
    radius: f64,
    angles: [f64; 2],
    z_placement: f64,
    t_kev: f64,
    fuel: &FuelComposition,
) -> SourceResult<Vec<WeightedSource>> {
    let mut report = ValidationReport::new();
    report.require_positive("ring radius", radius);
    check_angles(&mut report, angles);
    report.require_finite("z_placement", z_placement);
    report.require_positive("ion temperature", t_kev);
    report.into_result()?;

    let defaults = SamplingConfig::default();
    let space = SpatialPlacement::Ring {
        radius,
        z: z_placement,
        phi_start: angles[0],
        phi_stop: angles[1],
    };
    let sources = neutron_energy_distributions(t_kev, fuel, defaults.spectrum_model, defaults.energy_bins)?
        .into_iter()
        .map(|channel| WeightedSource {
            space,
            angle: AngularDistribution::Isotropic,
            energy: channel.distribution,
            strength: channel.strength,
        })
        .collect();
    Ok(sources)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::EnergyDistribution;
    use std::f64::consts::PI;

    #[test]
    fn test_dt_ring_has_three_channels() {
        let fuel = FuelComposition::equimolar_dt();
        let sources = fusion_ring_source(6.2, [0.0, 2.0 * PI], 0.0, 20.0, &fuel).unwrap();
        assert_eq!(sources.len(), 3);
        let sum: f64 = sources.iter().map(|s| s.strength).sum();
        assert!((sum - 1.0).abs() < 1e-12);
        assert!(matches!(sources[2].energy, EnergyDistribution::Tabulated(_)));
    }

    #[test]
    fn test_pure_tritium_ring() {
        let fuel = FuelComposition::new([("T", 1.0)]).unwrap();
        let sources = fusion_ring_source(3.0, [0.0, PI], 1.0, 10.0, &fuel).unwrap();
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].strength, 1.0);
    }

    #[test]
    fn test_ring_validation_collects_everything() {
        let fuel = FuelComposition::equimolar_dt();
        let err = fusion_ring_source(-1.0, [0.0, 7.0], f64::NAN, 0.0, &fuel).unwrap_err();
        assert_eq!(err.violations().len(), 4, "{:?}", err.violations());
    }
}
