// ─────────────────────────────────────────────────────────────────────
// SCPN Decay Lab — Time Units
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use crate::constants::{SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE, SECONDS_PER_YEAR};
use crate::error::{DecayError, DecayResult};

/// Unit labels accepted by [`time_to_seconds`], in seconds-per-unit order.
pub const RECOGNIZED_UNITS: [&str; 5] = ["s", "min", "h", "d", "yr"];

/// Convert a (value, unit label) pair into seconds.
///
/// Half-lives and durations are stored in whatever unit reads naturally
/// ("8.08e7 yr", "2.552 min") and normalized here exactly once. Any label
/// outside [`RECOGNIZED_UNITS`] is a configuration error, surfaced before
/// a simulation starts.
pub fn time_to_seconds(value: f64, unit: &str) -> DecayResult<f64> {
    let multiplier = match unit {
        "s" => 1.0,
        "min" => SECONDS_PER_MINUTE,
        "h" => SECONDS_PER_HOUR,
        "d" => SECONDS_PER_DAY,
        "yr" => SECONDS_PER_YEAR,
        other => return Err(DecayError::UnrecognizedUnit(other.to_string())),
    };
    Ok(value * multiplier)
}
