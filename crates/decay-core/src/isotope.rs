// ─────────────────────────────────────────────────────────────────────
// SCPN Decay Lab — Isotope
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Radioactive isotope value object.
//!
//! A transient view over one reference-table entry, constructed per decay
//! evaluation. Nothing here owns state: the table owns the physics data,
//! the inventory owns the quantities.

use std::collections::BTreeMap;

use decay_types::table::IsotopeSpec;

/// One radioactive species, borrowed from the reference table.
#[derive(Debug, Clone, Copy)]
pub struct Isotope<'a> {
    identifier: &'a str,
    spec: &'a IsotopeSpec,
}

impl<'a> Isotope<'a> {
    pub fn new(identifier: &'a str, spec: &'a IsotopeSpec) -> Self {
        Isotope { identifier, spec }
    }

    pub fn identifier(&self) -> &str {
        self.identifier
    }

    /// Half-life [s].
    pub fn half_life_s(&self) -> f64 {
        self.spec.half_life_s
    }

    /// Branch fractions per daughter, in identifier order.
    pub fn daughters(&self) -> &'a BTreeMap<String, f64> {
        &self.spec.daughters
    }

    /// Probability that a sample of this isotope decays within `t` seconds:
    /// `1 - 2^(-t / half_life)`.
    ///
    /// Closed form of the exponential decay law, exact for any `t`; this is
    /// not a small-step linearization, so step sizes spanning many
    /// half-lives saturate toward 1 instead of overshooting.
    pub fn decay_chance(&self, t: f64) -> f64 {
        1.0 - (-t / self.spec.half_life_s).exp2()
    }
}

/// Equality is by identifier alone. Two views of the same species compare
/// equal even if their reference entries disagree.
impl PartialEq for Isotope<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.identifier == other.identifier
    }
}

impl Eq for Isotope<'_> {}
