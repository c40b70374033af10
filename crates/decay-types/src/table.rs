// ─────────────────────────────────────────────────────────────────────
// SCPN Decay Lab — Isotope Reference Table
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{DecayError, DecayResult};
use crate::units::time_to_seconds;

/// One raw reference-table entry as it appears on disk.
/// Maps 1:1 to the isotopes.json schema: a `[value, unit]` half-life pair
/// and a daughter -> branch-fraction map.
///
/// Maps are identifier-ordered so validation and reporting walk entries
/// in the same order on every run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IsotopeEntry {
    #[serde(rename = "half-life")]
    pub half_life: (f64, String),
    /// Branch fractions per daughter. Fractions need not sum to 1:
    /// untracked decay products (alpha particles, metastable losses)
    /// are simply absent.
    #[serde(default)]
    pub daughters: BTreeMap<String, f64>,
}

/// A validated reference entry with the half-life normalized to seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct IsotopeSpec {
    /// Half-life [s], finite and strictly positive.
    pub half_life_s: f64,
    /// Branch fractions per daughter, each in [0, 1].
    pub daughters: BTreeMap<String, f64>,
}

/// Immutable isotope reference table, loaded once at startup.
///
/// Every radioactive species the simulation knows about appears here.
/// Absence from the table is meaningful, not an error: an identifier
/// without an entry is treated as stable and never decays.
#[derive(Debug, Clone, Default)]
pub struct IsotopeTable {
    entries: BTreeMap<String, IsotopeSpec>,
}

impl IsotopeTable {
    /// Load and validate a reference table from a JSON file.
    /// Any malformed entry aborts the load; nothing partial survives.
    pub fn from_file(path: &str) -> DecayResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let document: BTreeMap<String, IsotopeEntry> = serde_json::from_str(&contents)?;
        Self::from_document(document)
    }

    /// Validate a raw document into a resolved table.
    ///
    /// Rejects non-finite or non-positive half-lives and branch fractions
    /// outside [0, 1]. Unit labels are checked by the conversion itself.
    pub fn from_document(document: BTreeMap<String, IsotopeEntry>) -> DecayResult<Self> {
        let mut entries = BTreeMap::new();
        for (identifier, entry) in document {
            let (value, unit) = &entry.half_life;
            let half_life_s = time_to_seconds(*value, unit)?;
            if !half_life_s.is_finite() || half_life_s <= 0.0 {
                return Err(DecayError::InvalidHalfLife {
                    isotope: identifier,
                    value: *value,
                    unit: unit.clone(),
                });
            }
            let mut daughters = BTreeMap::new();
            for (daughter, fraction) in entry.daughters {
                if !fraction.is_finite() || !(0.0..=1.0).contains(&fraction) {
                    return Err(DecayError::InvalidBranch {
                        parent: identifier,
                        daughter,
                        fraction,
                    });
                }
                daughters.insert(daughter, fraction);
            }
            entries.insert(
                identifier,
                IsotopeSpec {
                    half_life_s,
                    daughters,
                },
            );
        }
        Ok(IsotopeTable { entries })
    }

    /// Look up an identifier. `None` means stable / non-radioactive.
    pub fn get(&self, identifier: &str) -> Option<&IsotopeSpec> {
        self.entries.get(identifier)
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.entries.contains_key(identifier)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &IsotopeSpec)> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    /// CARGO_MANIFEST_DIR points to crates/decay-types/ at compile time,
    /// so the repository root with isotopes.json is 2 levels up.
    fn repo_path(relative: &str) -> String {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join(relative)
            .to_string_lossy()
            .to_string()
    }

    fn table_from_json(json: &str) -> DecayResult<IsotopeTable> {
        let document: BTreeMap<String, IsotopeEntry> = serde_json::from_str(json).unwrap();
        IsotopeTable::from_document(document)
    }

    #[test]
    fn test_load_reference_table() {
        let table = IsotopeTable::from_file(&repo_path("isotopes.json")).unwrap();
        assert!(table.contains("Pu244"));
        assert!(table.contains("K40"));
        assert!(table.contains("Cs137"));
        // Chain terminators stay out of the table on purpose.
        assert!(!table.contains("U240"));
        assert!(!table.contains("Ar40"));
    }

    #[test]
    fn test_pu244_entry_resolved_to_seconds() {
        let table = IsotopeTable::from_file(&repo_path("isotopes.json")).unwrap();
        let pu = table.get("Pu244").unwrap();
        assert_eq!(pu.half_life_s, 8.08e7 * 31_556_952.0);
        assert_eq!(pu.daughters.len(), 1);
        assert!((pu.daughters["U240"] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_k40_branching_entry() {
        let table = IsotopeTable::from_file(&repo_path("isotopes.json")).unwrap();
        let k40 = table.get("K40").unwrap();
        assert_eq!(k40.daughters.len(), 2);
        assert!((k40.daughters["Ca40"] - 0.8928).abs() < 1e-12);
        assert!((k40.daughters["Ar40"] - 0.1072).abs() < 1e-12);
        // Branches sum to 1 here, but the loader must not require it.
        let sum: f64 = k40.daughters.values().sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_entry_without_daughters_key() {
        let table = table_from_json(r#"{"H3": {"half-life": [12.32, "yr"]}}"#).unwrap();
        let h3 = table.get("H3").unwrap();
        assert!(h3.daughters.is_empty());
    }

    #[test]
    fn test_unrecognized_unit_aborts_load() {
        let err = table_from_json(r#"{"X": {"half-life": [1.0, "eons"]}}"#).unwrap_err();
        match err {
            DecayError::UnrecognizedUnit(label) => assert_eq!(label, "eons"),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_zero_half_life_rejected() {
        let err = table_from_json(r#"{"X": {"half-life": [0.0, "s"]}}"#).unwrap_err();
        match err {
            DecayError::InvalidHalfLife { isotope, value, .. } => {
                assert_eq!(isotope, "X");
                assert_eq!(value, 0.0);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_negative_half_life_rejected() {
        let err = table_from_json(r#"{"X": {"half-life": [-5.0, "min"]}}"#).unwrap_err();
        assert!(matches!(err, DecayError::InvalidHalfLife { .. }));
    }

    #[test]
    fn test_branch_fraction_above_one_rejected() {
        let err =
            table_from_json(r#"{"X": {"half-life": [1.0, "s"], "daughters": {"Y": 1.5}}}"#)
                .unwrap_err();
        match err {
            DecayError::InvalidBranch {
                parent,
                daughter,
                fraction,
            } => {
                assert_eq!(parent, "X");
                assert_eq!(daughter, "Y");
                assert!((fraction - 1.5).abs() < 1e-12);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_negative_branch_fraction_rejected() {
        let err =
            table_from_json(r#"{"X": {"half-life": [1.0, "s"], "daughters": {"Y": -0.1}}}"#)
                .unwrap_err();
        assert!(matches!(err, DecayError::InvalidBranch { .. }));
    }

    #[test]
    fn test_branch_sum_above_one_is_allowed_per_branch() {
        // Each branch is valid on its own; the sum is not constrained.
        let table = table_from_json(
            r#"{"X": {"half-life": [1.0, "s"], "daughters": {"Y": 0.9, "Z": 0.9}}}"#,
        )
        .unwrap();
        assert_eq!(table.get("X").unwrap().daughters.len(), 2);
    }

    #[test]
    fn test_roundtrip_raw_document() {
        let contents = std::fs::read_to_string(repo_path("isotopes.json")).unwrap();
        let document: BTreeMap<String, IsotopeEntry> = serde_json::from_str(&contents).unwrap();
        let json = serde_json::to_string_pretty(&document).unwrap();
        let document2: BTreeMap<String, IsotopeEntry> = serde_json::from_str(&json).unwrap();
        assert_eq!(document.len(), document2.len());
        let (v, u) = &document2["Pu244"].half_life;
        assert!((v - 8.08e7).abs() < 1.0);
        assert_eq!(u, "yr");
    }
}
