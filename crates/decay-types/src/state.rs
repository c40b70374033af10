// ─────────────────────────────────────────────────────────────────────
// SCPN Decay Lab — Simulation State
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use std::collections::BTreeMap;

use serde::Serialize;

/// Per-step inventory: isotope identifier -> relative abundance.
///
/// Fractions are unitless relative quantities. They need not sum to 1 and
/// may transiently exceed the seeded total when branch fractions overlap.
/// Each step produces a fresh map; recorded history is never mutated.
/// Identifier-ordered so stepping and recording walk entries in the same
/// order on every run, keeping results bit-reproducible.
pub type Inventory = BTreeMap<String, f64>;

/// Recorded time series of a simulation run.
///
/// One series per isotope that existed at any point in the run, each an
/// append-only sequence of (elapsed seconds, fraction) samples. Isotopes
/// born mid-run as daughters get a series that starts partway through, so
/// series lengths are not required to match.
#[derive(Debug, Clone, Serialize)]
pub struct DecayHistory {
    /// Number of recorded samples per full-length series.
    pub steps: usize,
    /// Width of one sub-interval [s].
    pub step_size_s: f64,
    /// Samples keyed by isotope identifier, in identifier order.
    pub series: BTreeMap<String, Vec<(f64, f64)>>,
}

impl DecayHistory {
    pub fn new(steps: usize, step_size_s: f64) -> Self {
        DecayHistory {
            steps,
            step_size_s,
            series: BTreeMap::new(),
        }
    }

    /// Append one sample per isotope present in `inventory` at `elapsed_s`.
    pub fn record(&mut self, elapsed_s: f64, inventory: &Inventory) {
        for (identifier, fraction) in inventory {
            self.series
                .entry(identifier.clone())
                .or_default()
                .push((elapsed_s, *fraction));
        }
    }

    /// Samples for one isotope, or `None` if it never appeared.
    pub fn series_for(&self, identifier: &str) -> Option<&[(f64, f64)]> {
        self.series.get(identifier).map(|samples| samples.as_slice())
    }

    /// Identifiers with at least one recorded sample, in identifier order.
    pub fn isotopes(&self) -> impl Iterator<Item = &String> {
        self.series.keys()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}
