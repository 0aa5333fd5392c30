// ─────────────────────────────────────────────────────────────────────
// SCPN Plasma Source — Reaction Labels
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Neutron-producing fusion channels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SourceError;

/// A neutron-producing fusion reaction channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Reaction {
    /// D + T → ⁴He + n
    DT,
    /// D + D → ³He + n (neutron branch only)
    DD,
    /// T + T → ⁴He + 2n
    TT,
}

impl Reaction {
    /// All channels in canonical order.
    pub const ALL: [Reaction; 3] = [Reaction::DT, Reaction::DD, Reaction::TT];

    pub fn label(self) -> &'static str {
        match self {
            Reaction::DT => "DT",
            Reaction::DD => "DD",
            Reaction::TT => "TT",
        }
    }
}

impl fmt::Display for Reaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Reaction {
    type Err = SourceError;

    /// Labels are case-sensitive: only "DT", "DD" and "TT" are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DT" => Ok(Reaction::DT),
            "DD" => Ok(Reaction::DD),
            "TT" => Ok(Reaction::TT),
            other => Err(SourceError::InvalidReaction(format!(
                "unknown reaction label '{other}', expected one of DT, DD, TT"
            ))),
        }
    }
}
