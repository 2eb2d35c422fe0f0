//! Error types for decoding shares and reconstructing the secret

use num_bigint::BigInt;
use thiserror::Error;

/// Errors raised by the share decoder, the interpolator and the domain types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecoverError {
    /// A share's identifier, base or digit string could not be decoded
    #[error("malformed share {id:?}: {reason}")]
    MalformedShare {
        id: String,
        #[source]
        reason: MalformedReason,
    },

    #[error("insufficient shares: need at least {needed}, but only {available} available")]
    InsufficientShares { needed: usize, available: usize },

    /// Two shares denote the same x-coordinate
    #[error("duplicate x-coordinate {x}")]
    DuplicateXCoordinate { x: BigInt },

    /// The Lagrange sum at zero is not an integer
    #[error(
        "inconsistent share set: interpolated value {numerator}/{denominator} is not an integer"
    )]
    InconsistentShareSet {
        numerator: BigInt,
        denominator: BigInt,
    },

    /// A share outside the selected subset does not lie on the reconstructed polynomial
    #[error("share at x = {x} does not lie on the reconstructed polynomial")]
    ShareOffPolynomial { x: BigInt },

    #[error("threshold must be at least 2 (got {k})")]
    InvalidThreshold { k: usize },

    #[error("share count must be at least 1 (got {n})")]
    InvalidShareCount { n: usize },
}

/// Why a single share failed to decode
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedReason {
    #[error("base {0:?} is not a decimal integer")]
    InvalidBase(String),

    #[error("base {0} is outside the supported range 2..=62")]
    UnsupportedBase(u32),

    #[error("empty value")]
    EmptyValue,

    #[error("invalid digit {digit:?} at position {position} for base {base}")]
    InvalidDigit {
        digit: char,
        position: usize,
        base: u32,
    },

    #[error("identifier {0:?} is not a decimal integer")]
    InvalidIdentifier(String),

    /// x = 0 would be the secret itself
    #[error("identifier must be a positive integer (got {0})")]
    NonPositiveIdentifier(BigInt),
}
