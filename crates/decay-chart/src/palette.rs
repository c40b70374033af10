// ─────────────────────────────────────────────────────────────────────
// SCPN Decay Lab — Series Palette
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Deterministic per-isotope display colors.

/// Display colors, all valid SVG color keywords.
pub const PALETTE: [&str; 10] = [
    "red", "orange", "yellow", "green", "blue", "purple", "pink", "brown", "grey", "black",
];

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// FNV-1a over the identifier bytes. Chosen over the standard library
/// hasher because the mapping must not change across processes or
/// platform versions.
fn fnv1a(identifier: &str) -> u64 {
    let mut hash = FNV_OFFSET_BASIS;
    for byte in identifier.bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Color for one isotope identifier.
///
/// Pure function of the identifier alone, so the same species draws in
/// the same color in every run, chart, and process. Distinct identifiers
/// may share a color once more than ten species are in play.
pub fn color_for(identifier: &str) -> &'static str {
    PALETTE[(fnv1a(identifier) % PALETTE.len() as u64) as usize]
}
