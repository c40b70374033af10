use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecayError {
    #[error("Unrecognized time unit '{0}' (expected one of: s, min, h, d, yr)")]
    UnrecognizedUnit(String),

    #[error("Invalid half-life for '{isotope}': {value} {unit} (must be finite and > 0)")]
    InvalidHalfLife {
        isotope: String,
        value: f64,
        unit: String,
    },

    #[error("Invalid branch fraction {fraction} for {parent} -> {daughter} (must lie in [0, 1])")]
    InvalidBranch {
        parent: String,
        daughter: String,
        fraction: f64,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type DecayResult<T> = Result<T, DecayError>;
