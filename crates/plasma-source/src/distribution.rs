//! Distributions handed to the transport engine: energy, angle, space.

use std::f64::consts::PI;

use ndarray::{Array1, ArrayView1};
use plasma_math::interp::interp1d;
use plasma_math::quadrature::{cumulative_trapezoid, trapezoid};
use plasma_types::error::{SourceError, SourceResult};
use rand::Rng;
use rand_distr::StandardNormal;
use serde::Serialize;

/// Piecewise-linear probability density over an energy grid [eV].
/// Normalized to unit area at construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabulatedEnergy {
    energies_ev: Vec<f64>,
    pdf: Vec<f64>,
    #[serde(skip)]
    cdf: Vec<f64>,
}

impl TabulatedEnergy {
    pub fn new(energies_ev: ArrayView1<f64>, density: ArrayView1<f64>) -> SourceResult<Self> {
        if energies_ev.len() != density.len() {
            return Err(SourceError::Domain(format!(
                "energy grid has {} points but density has {}",
                energies_ev.len(),
                density.len()
            )));
        }
        if energies_ev.len() < 2 {
            return Err(SourceError::Domain(
                "tabulated energy distribution needs at least two points".to_string(),
            ));
        }
        if energies_ev
            .iter()
            .zip(energies_ev.iter().skip(1))
            .any(|(lo, hi)| !(hi > lo))
        {
            return Err(SourceError::Domain(
                "energy grid must be strictly increasing".to_string(),
            ));
        }
        if density.iter().any(|p| !(p.is_finite() && *p >= 0.0)) {
            return Err(SourceError::Domain(
                "probability density must be finite and non-negative".to_string(),
            ));
        }
        let area = trapezoid(energies_ev, density);
        if !(area > 0.0) {
            return Err(SourceError::Domain(
                "probability density integrates to zero over the grid".to_string(),
            ));
        }
        let pdf = density.mapv(|p| p / area);
        let mut cdf = cumulative_trapezoid(energies_ev, pdf.view());
        // Pin the end exactly so inverse sampling never runs off the table.
        let last = cdf.len() - 1;
        cdf[last] = 1.0;

        Ok(Self {
            energies_ev: energies_ev.to_vec(),
            pdf: pdf.to_vec(),
            cdf: cdf.to_vec(),
        })
    }

    pub fn energies_ev(&self) -> &[f64] {
        &self.energies_ev
    }

    pub fn pdf_values(&self) -> &[f64] {
        &self.pdf
    }

    pub fn pdf(&self, e_ev: f64) -> f64 {
        let last = self.energies_ev.len() - 1;
        if e_ev < self.energies_ev[0] || e_ev > self.energies_ev[last] {
            return 0.0;
        }
        interp1d(&self.energies_ev, &self.pdf, e_ev)
    }

    pub fn mean(&self) -> f64 {
        let e = Array1::from(self.energies_ev.clone());
        let ep = Array1::from_shape_fn(e.len(), |i| self.energies_ev[i] * self.pdf[i]);
        trapezoid(e.view(), ep.view())
    }

    /// Inverse-CDF sampling of the piecewise-linear density.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let u: f64 = rng.gen();
        let n = self.cdf.len();
        let i = self.cdf.partition_point(|&c| c <= u).clamp(1, n - 1) - 1;

        let (e0, e1) = (self.energies_ev[i], self.energies_ev[i + 1]);
        let (p0, p1) = (self.pdf[i], self.pdf[i + 1]);
        let width = e1 - e0;
        let target = u - self.cdf[i];
        let slope = (p1 - p0) / width;

        // Solve p0·x + slope·x²/2 = target for x ∈ [0, width]
        let x = if slope.abs() * width < 1e-12 * p0.max(f64::MIN_POSITIVE) {
            if p0 > 0.0 {
                target / p0
            } else {
                0.5 * width
            }
        } else {
            let disc = (p0 * p0 + 2.0 * slope * target).max(0.0);
            (disc.sqrt() - p0) / slope
        };
        e0 + x.clamp(0.0, width)
    }
}

/// Neutron energy distribution [eV].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum EnergyDistribution {
    Normal { mean_ev: f64, std_dev_ev: f64 },
    /// Gaussian with σ = sqrt(2·e0·kT / m_rat).
    Muir { e0_ev: f64, mass_ratio: f64, kt_ev: f64 },
    Tabulated(TabulatedEnergy),
    /// Weighted components; weights need not be normalized.
    Mixture(Vec<(f64, EnergyDistribution)>),
}

fn muir_sigma(e0_ev: f64, mass_ratio: f64, kt_ev: f64) -> f64 {
    (2.0 * e0_ev * kt_ev / mass_ratio).sqrt()
}

fn gaussian_pdf(x: f64, mean: f64, sigma: f64) -> f64 {
    let z = (x - mean) / sigma;
    (-0.5 * z * z).exp() / (sigma * (2.0 * PI).sqrt())
}

impl EnergyDistribution {
    pub fn normal(mean_ev: f64, std_dev_ev: f64) -> SourceResult<Self> {
        if !(mean_ev.is_finite() && std_dev_ev.is_finite() && std_dev_ev > 0.0) {
            return Err(SourceError::Domain(format!(
                "normal distribution needs finite mean and std_dev > 0, got ({mean_ev}, {std_dev_ev})"
            )));
        }
        Ok(Self::Normal {
            mean_ev,
            std_dev_ev,
        })
    }

    pub fn muir(e0_ev: f64, mass_ratio: f64, kt_ev: f64) -> SourceResult<Self> {
        let ok = [e0_ev, mass_ratio, kt_ev]
            .iter()
            .all(|v| v.is_finite() && *v > 0.0);
        if !ok {
            return Err(SourceError::Domain(format!(
                "Muir distribution needs e0, m_rat, kt > 0, got ({e0_ev}, {mass_ratio}, {kt_ev})"
            )));
        }
        Ok(Self::Muir {
            e0_ev,
            mass_ratio,
            kt_ev,
        })
    }

    pub fn mixture(components: Vec<(f64, EnergyDistribution)>) -> SourceResult<Self> {
        let total: f64 = components.iter().map(|(w, _)| *w).sum();
        if components.is_empty()
            || components.iter().any(|(w, _)| !(w.is_finite() && *w >= 0.0))
            || !(total > 0.0)
        {
            return Err(SourceError::Domain(
                "mixture needs at least one component and non-negative weights with a positive sum"
                    .to_string(),
            ));
        }
        Ok(Self::Mixture(components))
    }

    pub fn mean(&self) -> f64 {
        match self {
            Self::Normal { mean_ev, .. } => *mean_ev,
            Self::Muir { e0_ev, .. } => *e0_ev,
            Self::Tabulated(tab) => tab.mean(),
            Self::Mixture(components) => {
                let total: f64 = components.iter().map(|(w, _)| *w).sum();
                components.iter().map(|(w, d)| w * d.mean()).sum::<f64>() / total
            }
        }
    }

    /// Probability density [1/eV] at `e_ev`.
    pub fn pdf(&self, e_ev: f64) -> f64 {
        match self {
            Self::Normal {
                mean_ev,
                std_dev_ev,
            } => gaussian_pdf(e_ev, *mean_ev, *std_dev_ev),
            Self::Muir {
                e0_ev,
                mass_ratio,
                kt_ev,
            } => gaussian_pdf(e_ev, *e0_ev, muir_sigma(*e0_ev, *mass_ratio, *kt_ev)),
            Self::Tabulated(tab) => tab.pdf(e_ev),
            Self::Mixture(components) => {
                let total: f64 = components.iter().map(|(w, _)| *w).sum();
                components.iter().map(|(w, d)| w * d.pdf(e_ev)).sum::<f64>() / total
            }
        }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match self {
            Self::Normal {
                mean_ev,
                std_dev_ev,
            } => {
                let z: f64 = rng.sample(StandardNormal);
                mean_ev + std_dev_ev * z
            }
            Self::Muir {
                e0_ev,
                mass_ratio,
                kt_ev,
            } => {
                let z: f64 = rng.sample(StandardNormal);
                e0_ev + muir_sigma(*e0_ev, *mass_ratio, *kt_ev) * z
            }
            Self::Tabulated(tab) => tab.sample(rng),
            Self::Mixture(components) => {
                let total: f64 = components.iter().map(|(w, _)| *w).sum();
                let mut pick = rng.gen::<f64>() * total;
                for (w, d) in components {
                    if pick < *w {
                        return d.sample(rng);
                    }
                    pick -= w;
                }
                // Rounding can leave `pick` marginally above the last weight.
                match components.iter().rev().find(|(w, _)| *w > 0.0) {
                    Some((_, d)) => d.sample(rng),
                    None => f64::NAN,
                }
            }
        }
    }
}

/// Angular distribution of emitted neutrons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AngularDistribution {
    Isotropic,
}

impl AngularDistribution {
    /// Sample a unit direction vector.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> [f64; 3] {
        match self {
            AngularDistribution::Isotropic => {
                let mu: f64 = 2.0 * rng.gen::<f64>() - 1.0;
                let phi = 2.0 * PI * rng.gen::<f64>();
                let s = (1.0 - mu * mu).max(0.0).sqrt();
                [s * phi.cos(), s * phi.sin(), mu]
            }
        }
    }
}

/// Where a source emits from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum SpatialPlacement {
    /// Fixed Cartesian point [m].
    Point { x: f64, y: f64, z: f64 },
    /// Ring of given radius at height `z`, swept uniformly over
    /// `phi_start..phi_stop` around the Z axis.
    Ring {
        radius: f64,
        z: f64,
        phi_start: f64,
        phi_stop: f64,
    },
}

impl SpatialPlacement {
    /// Sample a Cartesian position [m].
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> [f64; 3] {
        match *self {
            SpatialPlacement::Point { x, y, z } => [x, y, z],
            SpatialPlacement::Ring {
                radius,
                z,
                phi_start,
                phi_stop,
            } => {
                let phi = phi_start + (phi_stop - phi_start) * rng.gen::<f64>();
                [radius * phi.cos(), radius * phi.sin(), z]
            }
        }
    }
}
