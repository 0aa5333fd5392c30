// ─────────────────────────────────────────────────────────────────────
// SCPN Plasma Source — Plasma Parameters
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Validated, immutable plasma geometry and profile parameters.

use plasma_types::config::{
    ConfinementMode, DensityProfileConfig, TemperatureProfileConfig, TokamakConfig,
};
use plasma_types::error::{SourceResult, ValidationReport};

/// Plasma geometry and radial profile parameters.
///
/// Only constructible through [`PlasmaParameters::new`], which checks every
/// invariant at once and reports all violations together:
/// `0 < pedestal_radius < minor_radius < major_radius`,
/// `|shafranov_factor| < 0.5 · minor_radius`, `triangularity ∈ [-1, 1]`,
/// `elongation > 0`, and non-negative density/temperature reference values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlasmaParameters {
    major_radius: f64,
    minor_radius: f64,
    elongation: f64,
    triangularity: f64,
    shafranov_factor: f64,
    pedestal_radius: f64,
    mode: ConfinementMode,
    density: DensityProfileConfig,
    temperature: TemperatureProfileConfig,
}

impl PlasmaParameters {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        major_radius: f64,
        minor_radius: f64,
        elongation: f64,
        triangularity: f64,
        shafranov_factor: f64,
        pedestal_radius: f64,
        mode: ConfinementMode,
        density: DensityProfileConfig,
        temperature: TemperatureProfileConfig,
    ) -> SourceResult<Self> {
        let mut report = ValidationReport::new();

        report.require_positive("major_radius", major_radius);
        report.require_positive("minor_radius", minor_radius);
        report.require_positive("elongation", elongation);
        report.require_positive("pedestal_radius", pedestal_radius);
        report.require_finite("shafranov_factor", shafranov_factor);
        report.require(
            triangularity.is_finite() && (-1.0..=1.0).contains(&triangularity),
            || format!("triangularity must be within [-1, 1], got {triangularity}"),
        );
        report.require(minor_radius < major_radius, || {
            format!(
                "minor_radius ({minor_radius}) must be smaller than major_radius ({major_radius})"
            )
        });
        report.require(pedestal_radius < minor_radius, || {
            format!(
                "pedestal_radius ({pedestal_radius}) must be smaller than minor_radius ({minor_radius})"
            )
        });
        report.require(shafranov_factor.abs() < 0.5 * minor_radius, || {
            format!(
                "|shafranov_factor| ({}) must be smaller than 0.5 * minor_radius ({})",
                shafranov_factor.abs(),
                0.5 * minor_radius
            )
        });

        report.require_non_negative("ion_density.centre", density.centre);
        report.require_non_negative("ion_density.pedestal", density.pedestal);
        report.require_non_negative("ion_density.separatrix", density.separatrix);
        report.require_finite("ion_density.peaking_factor", density.peaking_factor);

        report.require_non_negative("ion_temperature.centre", temperature.centre);
        report.require_non_negative("ion_temperature.pedestal", temperature.pedestal);
        report.require_non_negative("ion_temperature.separatrix", temperature.separatrix);
        report.require_finite("ion_temperature.peaking_factor", temperature.peaking_factor);
        report.require_finite("ion_temperature.beta", temperature.beta);

        report.into_result()?;

        Ok(Self {
            major_radius,
            minor_radius,
            elongation,
            triangularity,
            shafranov_factor,
            pedestal_radius,
            mode,
            density,
            temperature,
        })
    }

    pub fn from_config(cfg: &TokamakConfig) -> SourceResult<Self> {
        Self::new(
            cfg.major_radius,
            cfg.minor_radius,
            cfg.elongation,
            cfg.triangularity,
            cfg.shafranov_factor,
            cfg.pedestal_radius,
            cfg.mode,
            cfg.ion_density,
            cfg.ion_temperature,
        )
    }

    pub fn major_radius(&self) -> f64 {
        self.major_radius
    }
    pub fn minor_radius(&self) -> f64 {
        self.minor_radius
    }
    pub fn elongation(&self) -> f64 {
        self.elongation
    }
    pub fn triangularity(&self) -> f64 {
        self.triangularity
    }
    pub fn shafranov_factor(&self) -> f64 {
        self.shafranov_factor
    }
    pub fn pedestal_radius(&self) -> f64 {
        self.pedestal_radius
    }
    pub fn mode(&self) -> ConfinementMode {
        self.mode
    }
    pub fn density(&self) -> &DensityProfileConfig {
        &self.density
    }
    pub fn temperature(&self) -> &TemperatureProfileConfig {
        &self.temperature
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iter_params(cfg: &TokamakConfig) -> SourceResult<PlasmaParameters> {
        PlasmaParameters::from_config(cfg)
    }

    #[test]
    fn test_iter_like_is_valid() {
        let params = iter_params(&TokamakConfig::iter_like()).unwrap();
        assert_eq!(params.mode(), ConfinementMode::H);
        assert!((params.minor_radius() - 2.92258).abs() < 1e-12);
    }

    #[test]
    fn test_minor_equal_major_rejected() {
        let mut cfg = TokamakConfig::iter_like();
        cfg.minor_radius = cfg.major_radius;
        let err = iter_params(&cfg).unwrap_err();
        assert!(err
            .violations()
            .iter()
            .any(|v| v.contains("smaller than major_radius")));
    }

    #[test]
    fn test_pedestal_radius_must_be_inside() {
        let mut cfg = TokamakConfig::iter_like();
        cfg.pedestal_radius = cfg.minor_radius;
        let err = iter_params(&cfg).unwrap_err();
        assert!(err.violations().iter().any(|v| v.contains("pedestal_radius")));
    }

    #[test]
    fn test_shafranov_bound_is_strict() {
        let mut cfg = TokamakConfig::iter_like();
        cfg.shafranov_factor = -0.5 * cfg.minor_radius;
        assert!(iter_params(&cfg).is_err());
        cfg.shafranov_factor = 0.49 * cfg.minor_radius;
        assert!(iter_params(&cfg).is_ok());
    }

    #[test]
    fn test_triangularity_bounds_inclusive() {
        let mut cfg = TokamakConfig::iter_like();
        cfg.triangularity = 1.0;
        assert!(iter_params(&cfg).is_ok());
        cfg.triangularity = -1.0;
        assert!(iter_params(&cfg).is_ok());
        cfg.triangularity = 1.0001;
        assert!(iter_params(&cfg).is_err());
    }

    #[test]
    fn test_all_violations_reported_together() {
        let mut cfg = TokamakConfig::iter_like();
        cfg.minor_radius = 10.0; // > major radius
        cfg.elongation = 0.0;
        cfg.ion_density.centre = -1.0;
        cfg.ion_temperature.separatrix = -0.1;
        cfg.triangularity = 2.0;
        let err = iter_params(&cfg).unwrap_err();
        let v = err.violations();
        assert!(v.len() >= 5, "violations: {v:?}");
        assert!(v.iter().any(|m| m.contains("elongation")));
        assert!(v.iter().any(|m| m.contains("ion_density.centre")));
        assert!(v.iter().any(|m| m.contains("ion_temperature.separatrix")));
        assert!(v.iter().any(|m| m.contains("triangularity")));
        assert!(v.iter().any(|m| m.contains("major_radius")));
    }

    #[test]
    fn test_non_finite_rejected() {
        let mut cfg = TokamakConfig::iter_like();
        cfg.ion_temperature.beta = f64::NAN;
        cfg.major_radius = f64::INFINITY;
        let err = iter_params(&cfg).unwrap_err();
        assert!(err.violations().iter().any(|m| m.contains("beta")));
        assert!(err.violations().iter().any(|m| m.contains("major_radius")));
    }
}
