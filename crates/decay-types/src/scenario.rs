// ─────────────────────────────────────────────────────────────────────
// SCPN Decay Lab — Scenario Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{DecayError, DecayResult};
use crate::units::time_to_seconds;

/// One runnable simulation scenario.
/// Maps 1:1 to the scenarios/*.json schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    /// Initial inventory: isotope identifier -> starting fraction.
    pub seeds: BTreeMap<String, f64>,
    /// Total simulated span as a `[value, unit]` pair.
    pub duration: (f64, String),
    /// Number of equal sub-intervals the span is divided into.
    pub divisions: usize,
}

impl Scenario {
    /// Load a scenario from a JSON file and validate it.
    /// A scenario that fails validation never reaches the driver.
    pub fn from_file(path: &str) -> DecayResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let scenario: Self = serde_json::from_str(&contents)?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Total duration normalized to seconds.
    pub fn duration_seconds(&self) -> DecayResult<f64> {
        time_to_seconds(self.duration.0, &self.duration.1)
    }

    /// Fail-fast structural checks, applied before any stepping begins.
    pub fn validate(&self) -> DecayResult<()> {
        if self.seeds.is_empty() {
            return Err(DecayError::ConfigError(format!(
                "scenario '{}' has no seed isotopes",
                self.name
            )));
        }
        for (identifier, fraction) in &self.seeds {
            if !fraction.is_finite() || *fraction < 0.0 {
                return Err(DecayError::ConfigError(format!(
                    "scenario '{}': seed fraction for '{}' is {} (must be finite and >= 0)",
                    self.name, identifier, fraction
                )));
            }
        }
        let duration_s = self.duration_seconds()?;
        if !duration_s.is_finite() || duration_s <= 0.0 {
            return Err(DecayError::ConfigError(format!(
                "scenario '{}': duration {} {} is not a positive timespan",
                self.name, self.duration.0, self.duration.1
            )));
        }
        if self.divisions == 0 {
            return Err(DecayError::ConfigError(format!(
                "scenario '{}': divisions must be >= 1",
                self.name
            )));
        }
        Ok(())
    }
}
