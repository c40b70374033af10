// ─────────────────────────────────────────────────────────────────────
// SCPN Decay Lab — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Seconds per minute [s]
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Seconds per hour [s]
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Seconds per day [s]
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Seconds per year [s] - mean calendar year of 365.2425 days,
/// so century-scale half-lives stay leap-year accurate.
pub const SECONDS_PER_YEAR: f64 = 365.2425 * 86_400.0;
