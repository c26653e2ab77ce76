use bc_rand::RandomNumberGenerator;
use num_bigint::BigUint;

use crate::{SharingError, ShamirScheme, Share, TrivialScheme, error::Result};

/// The split/reconstruct capability shared by every sharing scheme.
pub trait SecretSharing {
    type Share: Clone;

    /// The modulus the secret and shares live under.
    fn modulus(&self) -> &BigUint;

    /// Split `secret` into `share_count` shares, any `threshold` of which
    /// recover it.
    fn split_secret(
        &self,
        secret: &BigUint,
        share_count: usize,
        threshold: usize,
        rng: &mut impl RandomNumberGenerator,
    ) -> Result<Vec<Self::Share>>;

    /// Recover the secret from every share in `shares`.
    fn recover_secret(&self, shares: &[Self::Share]) -> Result<BigUint>;
}

impl SecretSharing for ShamirScheme {
    type Share = Share;

    fn modulus(&self) -> &BigUint {
        ShamirScheme::modulus(self)
    }

    fn split_secret(
        &self,
        secret: &BigUint,
        share_count: usize,
        threshold: usize,
        rng: &mut impl RandomNumberGenerator,
    ) -> Result<Vec<Share>> {
        self.split(secret, share_count, threshold, rng)
    }

    fn recover_secret(&self, shares: &[Share]) -> Result<BigUint> {
        self.reconstruct(shares, None)
    }
}

/// The trivial scheme only supports `threshold == share_count`.
impl SecretSharing for TrivialScheme {
    type Share = BigUint;

    fn modulus(&self) -> &BigUint {
        TrivialScheme::modulus(self)
    }

    fn split_secret(
        &self,
        secret: &BigUint,
        share_count: usize,
        threshold: usize,
        rng: &mut impl RandomNumberGenerator,
    ) -> Result<Vec<BigUint>> {
        if threshold != share_count {
            return Err(SharingError::InvalidThreshold { threshold, share_count });
        }
        self.split(secret, share_count, rng)
    }

    fn recover_secret(&self, shares: &[BigUint]) -> Result<BigUint> {
        self.reconstruct(shares)
    }
}
