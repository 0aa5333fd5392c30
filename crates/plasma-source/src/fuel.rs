// ─────────────────────────────────────────────────────────────────────
// SCPN Plasma Source — Fuel Composition
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Fuel isotope fractions and the reaction channels they open.

use std::collections::BTreeMap;
use std::fmt;

use plasma_types::error::{SourceResult, ValidationReport};
use plasma_types::reaction::Reaction;

use crate::channels::{self, ReactionTable};

/// Slack on the fraction sum so that e.g. 0.1 + 0.9 is accepted.
const FRACTION_SUM_TOLERANCE: f64 = 1e-12;

/// Fusing hydrogen isotope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Isotope {
    Deuterium,
    Tritium,
}

impl Isotope {
    pub fn symbol(self) -> &'static str {
        match self {
            Isotope::Deuterium => "D",
            Isotope::Tritium => "T",
        }
    }

    fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "D" => Some(Isotope::Deuterium),
            "T" => Some(Isotope::Tritium),
            _ => None,
        }
    }
}

impl fmt::Display for Isotope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Validated atomic fractions of D and T.
///
/// Each fraction lies in [0, 1]; their sum is positive and at most 1, the
/// remainder being non-fusing dilution. An isotope is present when its
/// fraction is strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuelComposition {
    deuterium: f64,
    tritium: f64,
}

impl FuelComposition {
    /// Build from `(symbol, fraction)` pairs. Symbols are case-sensitive
    /// ("D", "T"); a missing isotope has fraction 0. All violations are
    /// reported together.
    pub fn new<I, K>(fractions: I) -> SourceResult<Self>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: AsRef<str>,
    {
        let mut report = ValidationReport::new();
        let mut deuterium = None;
        let mut tritium = None;

        for (key, value) in fractions {
            let key = key.as_ref();
            let Some(isotope) = Isotope::from_symbol(key) else {
                report.require(false, || {
                    format!("fuel isotope '{key}' is not supported, expected 'D' or 'T'")
                });
                continue;
            };
            report.require(value.is_finite() && (0.0..=1.0).contains(&value), || {
                format!("fuel fraction for {key} must be within [0, 1], got {value}")
            });
            let slot = match isotope {
                Isotope::Deuterium => &mut deuterium,
                Isotope::Tritium => &mut tritium,
            };
            report.require(slot.is_none(), || format!("fuel isotope {key} given twice"));
            *slot = Some(value);
        }

        let deuterium = deuterium.unwrap_or(0.0);
        let tritium = tritium.unwrap_or(0.0);
        let sum = deuterium + tritium;
        if sum.is_finite() {
            report.require(sum <= 1.0 + FRACTION_SUM_TOLERANCE, || {
                format!("fuel fractions must sum to at most 1, got {sum}")
            });
            report.require(sum > 0.0, || {
                "fuel must contain a positive fraction of D or T".to_string()
            });
        }
        report.into_result()?;

        Ok(Self { deuterium, tritium })
    }

    pub fn from_map(fractions: &BTreeMap<String, f64>) -> SourceResult<Self> {
        Self::new(fractions.iter().map(|(k, v)| (k.as_str(), *v)))
    }

    /// 50/50 D-T.
    pub fn equimolar_dt() -> Self {
        Self {
            deuterium: 0.5,
            tritium: 0.5,
        }
    }

    pub fn fraction(&self, isotope: Isotope) -> f64 {
        match isotope {
            Isotope::Deuterium => self.deuterium,
            Isotope::Tritium => self.tritium,
        }
    }

    pub fn deuterium(&self) -> f64 {
        self.deuterium
    }

    pub fn tritium(&self) -> f64 {
        self.tritium
    }

    pub fn contains(&self, isotope: Isotope) -> bool {
        self.fraction(isotope) > 0.0
    }

    /// Channel tables whose reactants are all present, in canonical order.
    pub fn channels(&self) -> Vec<&'static ReactionTable> {
        Reaction::ALL
            .iter()
            .map(|&r| channels::table(r))
            .filter(|t| t.reactants.iter().all(|&iso| self.contains(iso)))
            .collect()
    }

    /// Active reaction set: {DT, DD, TT} for mixed fuel, {DD} for pure D,
    /// {TT} for pure T.
    pub fn reactions(&self) -> Vec<Reaction> {
        self.channels().iter().map(|t| t.reaction).collect()
    }

    /// Reactant density factor κ such that the reaction rate density is
    /// κ·n²·⟨σv⟩ for total ion density n.
    pub fn density_factor(&self, reaction: Reaction) -> f64 {
        channels::table(reaction).density_factor(self.deuterium, self.tritium)
    }

    /// Upper edge of the energy grid used for this fuel's combined spectrum
    /// [MeV].
    pub fn spectrum_max_energy_mev(&self) -> f64 {
        match (self.contains(Isotope::Deuterium), self.contains(Isotope::Tritium)) {
            (true, false) => 5.0,
            (false, true) => 12.0,
            _ => 20.0,
        }
    }
}

impl fmt::Display for FuelComposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "D {:.3} / T {:.3}", self.deuterium, self.tritium)
    }
}
