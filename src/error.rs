use thiserror::Error;

/// Errors surfaced by profile validation and password rendering.
///
/// Every variant is a caller input-contract violation detected before or
/// during setup; derivation itself has no failure modes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unsupported digest: {0}")]
    InvalidDigest(String),

    #[error("iteration count must be positive, got {0}")]
    InvalidIterationCount(u32),

    #[error("no character class enabled")]
    NoCharacterClassEnabled,

    #[error("password length {length} is below the minimum of {minimum}")]
    InvalidLength { length: usize, minimum: usize },

    #[error("entropy is not a valid hexadecimal string")]
    InvalidEntropy,
}

pub type Result<T> = std::result::Result<T, Error>;
