use std::path::PathBuf;

//=====================================================================
// Error taxonomy for the SLBW synthesis pipeline. All errors are
// raised at the point of detection and propagate uncaught to the
// pipeline caller; no component attempts recovery or partial output.
//=====================================================================

#[derive(Debug, thiserror::Error)]
pub enum SlbwError {
    #[error("resonance parameter file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("malformed record on line {line}: {reason} (raw: {text:?})")]
    ParseError {
        line: usize,
        text: String,
        reason: String,
    },

    #[error("malformed fixed-width field {field:?}: {reason}")]
    MalformedField { field: String, reason: String },

    #[error("requested {requested} positive resonances, only {available} available")]
    InsufficientData { requested: usize, available: usize },

    #[error("numeric domain violation in {context}: got {value}")]
    NumericDomain { context: &'static str, value: f64 },

    #[error("energies must be strictly increasing, index {index} has {current} after {previous}")]
    NonIncreasingEnergy {
        index: usize,
        previous: f64,
        current: f64,
    },

    #[error("cross section must be non-negative, index {index} has {value} barns")]
    NegativeCrossSection { index: usize, value: f64 },

    #[error("energy/cross-section length mismatch: {energies} energies vs {xs} values")]
    LengthMismatch { energies: usize, xs: usize },

    #[error("failed to write cross-section table to {path}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("output file already exists and overwrite is disabled: {path}")]
    AlreadyExists { path: PathBuf },

    #[error("failed to read {path}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, SlbwError>;
