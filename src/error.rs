//! Error taxonomy for share decoding, screening, and reconstruction

use thiserror::Error;

/// Errors surfaced by the decoding, screening, and reconstruction core.
///
/// The CLI layers wrap these in `anyhow` context; library callers match on
/// the variant to tell the data-validity failures apart.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecoveryError {
    /// Radix field that is not an integer in the supported range.
    #[error("invalid numeral base {base:?}: expected an integer in 2..=36")]
    InvalidBase { base: String },

    /// Digit string that is empty or holds a character invalid for its base.
    #[error("cannot decode {value:?} as a base-{base} integer")]
    Parse { value: String, base: u32 },

    /// Anomaly screening invoked on zero shares.
    #[error("cannot screen an empty share set")]
    EmptyShareSet,

    /// Fewer shares than the reconstruction threshold.
    #[error("not enough shares to reconstruct the secret (need {needed}, got {available})")]
    InsufficientShares { needed: u32, available: usize },

    /// An interpolation term did not divide exactly. The share set cannot be
    /// a consistent threshold encoding, and truncating would yield a
    /// valid-looking but wrong secret.
    #[error("interpolation term for share {index} is not an exact integer")]
    InexactDivision { index: u32 },
}
