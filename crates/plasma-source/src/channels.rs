// ─────────────────────────────────────────────────────────────────────
// SCPN Plasma Source — Reaction Channels
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Per-channel coefficient tables and channel yield ratios.
//!
//! The reaction rate density of channel r in a plasma of total ion density n
//! is κ_r·n²·⟨σv⟩_r, with κ_r = f_a·f_b for distinct reactants and f_a²/2
//! for identical ones. Each reaction releases ν_r neutrons.

use plasma_types::error::{SourceError, SourceResult};
use plasma_types::reaction::Reaction;

use crate::fuel::{FuelComposition, Isotope};
use crate::reactivity::{bosch_hale_dd, sadler_van_belle_dt, tt_reactivity};

/// Static description of one neutron-producing channel.
#[derive(Debug)]
pub struct ReactionTable {
    pub reaction: Reaction,
    pub reactants: [Isotope; 2],
    /// Neutrons released per reaction.
    pub neutrons_per_reaction: f64,
    /// ⟨σv⟩ [m³/s] as a function of ion temperature [keV].
    pub reactivity: fn(f64) -> SourceResult<f64>,
}

static DT_TABLE: ReactionTable = ReactionTable {
    reaction: Reaction::DT,
    reactants: [Isotope::Deuterium, Isotope::Tritium],
    neutrons_per_reaction: 1.0,
    reactivity: sadler_van_belle_dt,
};

static DD_TABLE: ReactionTable = ReactionTable {
    reaction: Reaction::DD,
    reactants: [Isotope::Deuterium, Isotope::Deuterium],
    neutrons_per_reaction: 1.0,
    reactivity: bosch_hale_dd,
};

static TT_TABLE: ReactionTable = ReactionTable {
    reaction: Reaction::TT,
    reactants: [Isotope::Tritium, Isotope::Tritium],
    neutrons_per_reaction: 2.0,
    reactivity: tt_reactivity,
};

/// Resolve a reaction to its coefficient table.
pub fn table(reaction: Reaction) -> &'static ReactionTable {
    match reaction {
        Reaction::DT => &DT_TABLE,
        Reaction::DD => &DD_TABLE,
        Reaction::TT => &TT_TABLE,
    }
}

impl ReactionTable {
    /// Reactant density factor κ for the given D and T fractions.
    pub fn density_factor(&self, frac_d: f64, frac_t: f64) -> f64 {
        let frac = |iso: Isotope| match iso {
            Isotope::Deuterium => frac_d,
            Isotope::Tritium => frac_t,
        };
        let [a, b] = self.reactants;
        let product = frac(a) * frac(b);
        if a == b {
            0.5 * product
        } else {
            product
        }
    }

    /// Neutron emission coefficient κ·ν·⟨σv⟩ [m³/s]; multiply by n² to get
    /// the neutron source density.
    pub fn emission_coefficient(&self, t_kev: f64, frac_d: f64, frac_t: f64) -> SourceResult<f64> {
        let kappa = self.density_factor(frac_d, frac_t);
        Ok(kappa * self.neutrons_per_reaction * (self.reactivity)(t_kev)?)
    }
}

/// Neutron yield of `reaction` given a DT neutron yield `dt_yield` from the
/// same plasma:
///
///   Y_r = Y_DT · κ_r·ν_r·⟨σv⟩_r / (f_D·f_T·⟨σv⟩_DT)
pub fn yield_ratio(
    reaction: Reaction,
    dt_yield: f64,
    t_kev: f64,
    frac_d: f64,
    frac_t: f64,
) -> SourceResult<f64> {
    if !(dt_yield.is_finite() && dt_yield >= 0.0) {
        return Err(SourceError::Domain(format!(
            "DT reference yield must be finite and non-negative, got {dt_yield}"
        )));
    }
    let fractions_ok = [frac_d, frac_t]
        .iter()
        .all(|f| f.is_finite() && *f > 0.0 && *f <= 1.0);
    if !fractions_ok {
        return Err(SourceError::Domain(format!(
            "yield ratio needs D and T fractions in (0, 1], got ({frac_d}, {frac_t})"
        )));
    }
    let reference = DT_TABLE.emission_coefficient(t_kev, frac_d, frac_t)?;
    let channel = table(reaction).emission_coefficient(t_kev, frac_d, frac_t)?;
    Ok(dt_yield * channel / reference)
}

/// Emission coefficients κ·ν·⟨σv⟩ of every active channel of `fuel`, in
/// the fuel's channel order.
pub fn emission_coefficients(fuel: &FuelComposition, t_kev: f64) -> SourceResult<Vec<(Reaction, f64)>> {
    fuel.channels()
        .into_iter()
        .map(|t| {
            t.emission_coefficient(t_kev, fuel.deuterium(), fuel.tritium())
                .map(|c| (t.reaction, c))
        })
        .collect()
}

/// Fraction of emitted neutrons coming from each active channel; sums to 1.
pub fn relative_yields(fuel: &FuelComposition, t_kev: f64) -> SourceResult<Vec<(Reaction, f64)>> {
    let coefficients = emission_coefficients(fuel, t_kev)?;
    let total: f64 = coefficients.iter().map(|(_, c)| c).sum();
    if !(total > 0.0 && total.is_finite()) {
        return Err(SourceError::Domain(format!(
            "total neutron emission is not positive at T = {t_kev} keV"
        )));
    }
    Ok(coefficients
        .into_iter()
        .map(|(r, c)| (r, c / total))
        .collect())
}
