//! Fixed-temperature fusion point source.

use plasma_types::config::SamplingConfig;
use plasma_types::error::{SourceResult, ValidationReport};

use crate::distribution::{AngularDistribution, SpatialPlacement};
use crate::fuel::FuelComposition;
use crate::source::WeightedSource;
use crate::spectrum::neutron_energy_distributions;

/// Isotropic point emitter at `coordinate` [m]; one source per active
/// channel with strengths summing to 1.
pub fn fusion_point_source(
    coordinate: [f64; 3],
    t_kev: f64,
    fuel: &FuelComposition,
) -> SourceResult<Vec<WeightedSource>> {
    let mut report = ValidationReport::new();
    for (axis, value) in ["x", "y", "z"].iter().zip(coordinate) {
        report.require_finite(&format!("point coordinate {axis}"), value);
    }
    report.require_positive("ion temperature", t_kev);
    report.into_result()?;

    let defaults = SamplingConfig::default();
    let [x, y, z] = coordinate;
    let space = SpatialPlacement::Point { x, y, z };
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
    use plasma_types::reaction::Reaction;

    #[test]
    fn test_point_source_at_origin() {
        let fuel = FuelComposition::new([("D", 1.0)]).unwrap();
        let sources = fusion_point_source([0.0, 0.0, 0.0], 20.0, &fuel).unwrap();
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].strength, 1.0);
        assert_eq!(
            sources[0].space,
            SpatialPlacement::Point {
                x: 0.0,
                y: 0.0,
                z: 0.0
            }
        );
        assert!((sources[0].energy.mean() - 2.5e6).abs() < 0.1e6);
        assert_eq!(fuel.reactions(), vec![Reaction::DD]);
    }

    #[test]
    fn test_point_source_rejects_bad_input() {
        let fuel = FuelComposition::equimolar_dt();
        let err = fusion_point_source([f64::INFINITY, 0.0, f64::NAN], -5.0, &fuel).unwrap_err();
        assert_eq!(err.violations().len(), 3);
    }
}
