use bc_rand::RandomNumberGenerator;
use num_bigint::BigUint;
use num_traits::Zero;
use tracing::debug;

use crate::{SharingError, error::Result, hazmat::{random_below, sub_mod}};

/// Additive n-out-of-n sharing over Z_k, kept as a baseline for comparison
/// with [`ShamirScheme`](crate::ShamirScheme).
///
/// The shares sum to the secret mod k. All n of them are needed; there is no
/// threshold below n. Anyone holding n - 1 shares and the secret can compute
/// the missing share exactly, and the scheme offers no partial-secrecy
/// guarantee comparable to Shamir's. `k` need not be prime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrivialScheme {
    modulus: BigUint,
}

impl TrivialScheme {
    /// `modulus` must be at least 2.
    pub fn new(modulus: BigUint) -> Result<Self> {
        if modulus < BigUint::from(2u32) {
            return Err(SharingError::InvalidModulus);
        }
        Ok(Self { modulus })
    }

    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// A uniformly random secret in `[0, k)`.
    pub fn random_secret(&self, rng: &mut impl RandomNumberGenerator) -> BigUint {
        random_below(&self.modulus, rng)
    }

    /// Draw `share_count - 1` uniform shares and set the last one so that all
    /// of them sum to `secret` mod k.
    pub fn split(
        &self,
        secret: &BigUint,
        share_count: usize,
        rng: &mut impl RandomNumberGenerator,
    ) -> Result<Vec<BigUint>> {
        if secret >= &self.modulus {
            return Err(SharingError::SecretOutOfRange);
        }
        if share_count < 2 {
            return Err(SharingError::InvalidThreshold {
                threshold: share_count,
                share_count,
            });
        }
        debug!(share_count, "splitting secret additively");

        let mut shares: Vec<BigUint> = (1..share_count)
            .map(|_| random_below(&self.modulus, rng))
            .collect();
        let sum = shares.iter().fold(BigUint::zero(), |acc, s| (acc + s) % &self.modulus);
        shares.push(sub_mod(secret, &sum, &self.modulus));
        Ok(shares)
    }

    /// Sum of all shares mod k. Every share from the split must be present;
    /// a missing share yields an unrelated value.
    pub fn reconstruct(&self, shares: &[BigUint]) -> Result<BigUint> {
        if shares.is_empty() {
            return Err(SharingError::NotEnoughShares { needed: 1, provided: 0 });
        }
        Ok(shares
            .iter()
            .fold(BigUint::zero(), |acc, s| (acc + s) % &self.modulus))
    }
}
