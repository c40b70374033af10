// ─────────────────────────────────────────────────────────────────────
// SCPN Decay Lab — Decay Step
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! The per-interval decay transformation.

use decay_types::state::Inventory;
use decay_types::table::IsotopeTable;

use crate::isotope::Isotope;

/// Advance an inventory by one interval of `t` seconds.
///
/// Each parent's decay volume is sized from the frozen input inventory and
/// applied to a fresh output map seeded as a copy of the input. No read
/// ever touches a value another parent already modified, so the result is
/// independent of the order entries are visited.
///
/// Identifiers without a reference-table entry are stable: their fractions
/// pass through untouched. Resulting fractions are never clamped or
/// otherwise adjusted after the arithmetic.
pub fn decay_step(inventory: &Inventory, table: &IsotopeTable, t: f64) -> Inventory {
    let mut next = inventory.clone();
    for (identifier, &fraction) in inventory {
        let spec = match table.get(identifier) {
            Some(spec) => spec,
            // Stable species: absent from the table, never decays.
            None => continue,
        };
        let isotope = Isotope::new(identifier, spec);
        let decay_volume = isotope.decay_chance(t) * fraction;
        // A zero volume moves nothing and must not invent zero-valued
        // daughter entries, so the whole transfer is skipped.
        if decay_volume == 0.0 {
            continue;
        }
        if let Some(remaining) = next.get_mut(identifier) {
            *remaining -= decay_volume;
        }
        for (daughter, branch) in isotope.daughters() {
            *next.entry(daughter.clone()).or_insert(0.0) += decay_volume * branch;
        }
    }
    next
}
