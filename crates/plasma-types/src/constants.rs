// ─────────────────────────────────────────────────────────────────────
// SCPN Plasma Source — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// eV per keV.
pub const KEV_TO_EV: f64 = 1.0e3;

/// eV per MeV.
pub const MEV_TO_EV: f64 = 1.0e6;

/// cm³ to m³ (reactivity tables are published in cm³/s).
pub const CM3_TO_M3: f64 = 1.0e-6;

/// FWHM / σ for a Gaussian: 2·sqrt(2·ln 2).
pub const FWHM_PER_SIGMA: f64 = 2.354_820_045_030_949;

/// Neutron mass number used in kinematic energy splits.
pub const A_NEUTRON: f64 = 1.0;

/// Helium-4 mass number.
pub const A_HELIUM4: f64 = 4.0;

/// Helium-5 mass number (TT intermediate state).
pub const A_HELIUM5: f64 = 5.0;

/// T + T → ⁴He + 2n total energy release [MeV].
pub const Q_TT_MEV: f64 = 11.332;

/// ⁵He → ⁴He + n breakup energy [MeV].
pub const Q_HE5_BREAKUP_MEV: f64 = 0.798;

/// Natural width of the ⁵He ground state [MeV].
pub const GAMMA_HE5_MEV: f64 = 0.648;

/// Muir mean energy for D-T neutrons [eV].
pub const MUIR_E0_DT_EV: f64 = 14.08e6;

/// Muir mean energy for D-D neutrons [eV].
pub const MUIR_E0_DD_EV: f64 = 2.45e6;

/// Muir reactant mass ratio for D-T (D + T in amu).
pub const MUIR_MASS_RATIO_DT: f64 = 5.0;

/// Muir reactant mass ratio for D-D (D + D in amu).
pub const MUIR_MASS_RATIO_DD: f64 = 4.0;
