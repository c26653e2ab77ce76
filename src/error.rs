use num_bigint::BigUint;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SharingError {
    #[error("Invalid threshold {threshold} for {share_count} shares (need 1 < t <= n)")]
    InvalidThreshold { threshold: usize, share_count: usize },

    #[error("Secret is not smaller than the modulus")]
    SecretOutOfRange,

    #[error("Two shares have the same x coordinate ({0})")]
    DuplicateShareX(usize),

    #[error("Prime generation failed: {0}")]
    GenerationError(String),

    #[error("Invalid modulus")]
    InvalidModulus,

    #[error("Too many shares: {share_count} x coordinates do not fit below modulus {modulus}")]
    TooManyShares { share_count: usize, modulus: BigUint },

    #[error("Not enough shares: needed {needed}, got {provided}")]
    NotEnoughShares { needed: usize, provided: usize },
}

pub type Result<T> = std::result::Result<T, SharingError>;
