// ─────────────────────────────────────────────────────────────────────
// SCPN Plasma Source — Property-Based Tests (proptest) for plasma-types
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for plasma-types using proptest.
//!
//! Covers: reaction label parsing, validation report accumulation,
//! configuration defaults, sampled-state strength bookkeeping.

use ndarray::{Array1, Array2};
use plasma_types::config::TokamakConfig;
use plasma_types::error::{SourceError, ValidationReport};
use plasma_types::reaction::Reaction;
use plasma_types::state::SampledPlasma;
use proptest::prelude::*;

// ── Reaction Labels ──────────────────────────────────────────────────

proptest! {
    /// Any label other than the three canonical ones is an InvalidReaction.
    #[test]
    fn unknown_labels_rejected(label in "[A-Za-z0-9 ]{0,6}") {
        prop_assume!(!["DT", "DD", "TT"].contains(&label.as_str()));
        let parsed = label.parse::<Reaction>();
        prop_assert!(matches!(parsed, Err(SourceError::InvalidReaction(_))));
    }
}

// ── Validation Report ────────────────────────────────────────────────

proptest! {
    /// Every failed requirement is recorded, none are dropped.
    #[test]
    fn report_counts_every_violation(flags in prop::collection::vec(any::<bool>(), 0..20)) {
        let mut report = ValidationReport::new();
        for (i, ok) in flags.iter().enumerate() {
            report.require(*ok, || format!("check {i} failed"));
        }
        let failed = flags.iter().filter(|ok| !**ok).count();
        prop_assert_eq!(report.violations().len(), failed);
        match report.into_result() {
            Ok(()) => prop_assert_eq!(failed, 0),
            Err(err) => prop_assert_eq!(err.violations().len(), failed),
        }
    }

    /// Absorbing a nested validation error keeps all of its violations.
    #[test]
    fn absorb_merges_nested_violations(outer in 0usize..5, inner in 1usize..5) {
        let mut nested = ValidationReport::new();
        for i in 0..inner {
            nested.require(false, || format!("inner {i}"));
        }
        let mut report = ValidationReport::new();
        for i in 0..outer {
            report.require(false, || format!("outer {i}"));
        }
        let value: Option<()> = report.absorb(nested.into_result());
        prop_assert!(value.is_none());
        prop_assert_eq!(report.violations().len(), outer + inner);
    }
}

// ── Configuration ────────────────────────────────────────────────────

proptest! {
    /// Omitted sampling fields fall back to their defaults for any sample size.
    #[test]
    fn sampling_defaults_fill_gaps(sample_size in 1usize..100_000) {
        let mut value = serde_json::to_value(TokamakConfig::iter_like()).unwrap();
        value["sampling"] = serde_json::json!({ "sample_size": sample_size });
        let cfg: TokamakConfig = serde_json::from_value(value).unwrap();
        prop_assert_eq!(cfg.sampling.sample_size, sample_size);
        prop_assert_eq!(cfg.sampling.energy_bins, 50);
        prop_assert!((cfg.sampling.angles[1] - 2.0 * std::f64::consts::PI).abs() < 1e-15);
    }
}

// ── Sampled State ────────────────────────────────────────────────────

proptest! {
    /// With normalized strengths and row-normalized channel fractions, the
    /// emitted channel strengths sum to 1.
    #[test]
    fn channel_strengths_sum_to_one(
        raw in prop::collection::vec((0.01f64..10.0, 0.01f64..1.0, 0.01f64..1.0), 1..40),
    ) {
        let n = raw.len();
        let total: f64 = raw.iter().map(|r| r.0).sum();
        let strengths = Array1::from_iter(raw.iter().map(|r| r.0 / total));
        let fractions = Array2::from_shape_fn((n, 2), |(i, k)| {
            let (_, p, q) = raw[i];
            if k == 0 { p / (p + q) } else { q / (p + q) }
        });
        let state = SampledPlasma {
            a: Array1::zeros(n),
            alpha: Array1::zeros(n),
            ion_density: Array1::zeros(n),
            ion_temperature: Array1::zeros(n),
            r: Array1::zeros(n),
            z: Array1::zeros(n),
            neutron_source_density: Array1::from_iter(raw.iter().map(|r| r.0)),
            strengths,
            channels: vec![Reaction::DT, Reaction::DD],
            channel_fractions: fractions,
        };
        let sum: f64 = (0..n)
            .flat_map(|i| (0..2).map(move |k| (i, k)))
            .map(|(i, k)| state.channel_strength(i, k))
            .sum();
        prop_assert!((sum - 1.0).abs() < 1e-12, "sum = {}", sum);
    }
}
