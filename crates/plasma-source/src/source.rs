//! Weighted neutron sources and the hand-off to a transport engine.
//!
//! A [`WeightedSource`] bundles where a neutron is born, its direction
//! distribution, its energy distribution and its relative strength. The
//! strengths of one emitted collection sum to 1.

use std::f64::consts::PI;

use plasma_types::error::ValidationReport;
use rand::Rng;
use serde::Serialize;

use crate::distribution::{AngularDistribution, EnergyDistribution, SpatialPlacement};

/// Absolute bound on either toroidal sweep angle [rad].
pub const MAX_SWEEP_ANGLE: f64 = 2.0 * PI;

/// One independent source term.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightedSource {
    pub space: SpatialPlacement,
    pub angle: AngularDistribution,
    pub energy: EnergyDistribution,
    pub strength: f64,
}

/// A single sampled neutron birth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourceParticle {
    pub position: [f64; 3],
    pub direction: [f64; 3],
    pub energy_ev: f64,
    pub weight: f64,
}

impl WeightedSource {
    /// Draw one neutron from this source. The particle weight is the
    /// source strength.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> SourceParticle {
        SourceParticle {
            position: self.space.sample(rng),
            direction: self.angle.sample(rng),
            energy_ev: self.energy.sample(rng),
            weight: self.strength,
        }
    }
}

/// Receiver of emitted sources, typically a transport engine's source bank.
pub trait SourceSink {
    fn accept(&mut self, source: WeightedSource);
}

impl SourceSink for Vec<WeightedSource> {
    fn accept(&mut self, source: WeightedSource) {
        self.push(source);
    }
}

/// Sum of strengths of a source collection.
pub fn total_strength(sources: &[WeightedSource]) -> f64 {
    sources.iter().map(|s| s.strength).sum()
}

/// Record violations of the toroidal sweep constraints: both bounds within
/// [−2π, 2π] and `start < stop`.
pub(crate) fn check_angles(report: &mut ValidationReport, angles: [f64; 2]) {
    let [start, stop] = angles;
    for (name, value) in [("start", start), ("stop", stop)] {
        report.require(value.is_finite() && value.abs() <= MAX_SWEEP_ANGLE, || {
            format!("toroidal {name} angle must be within [-2π, 2π], got {value}")
        });
    }
    report.require(start < stop, || {
        format!("toroidal start angle ({start}) must be smaller than stop angle ({stop})")
    });
}
