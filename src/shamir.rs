use bc_rand::RandomNumberGenerator;
use num_bigint::BigUint;
use num_traits::Zero;
use tracing::debug;

use crate::{
    SharingError,
    constants::{DEFAULT_MILLER_RABIN_ROUNDS, DEFAULT_PRIME_BITS},
    error::Result,
    hazmat::random_below,
    interpolate::interpolate,
    polynomial::{Polynomial, make_polynomial},
    primality::is_probable_prime,
    prime::generate_prime,
};

/// One point `(x, f(x) mod p)` of a sharing polynomial.
///
/// `x` is never 0; that position holds the secret.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Share {
    pub x: usize,
    pub y: BigUint,
}

impl Share {
    pub fn new(x: usize, y: BigUint) -> Self {
        Self { x, y }
    }
}

impl From<(usize, BigUint)> for Share {
    fn from((x, y): (usize, BigUint)) -> Self {
        Self::new(x, y)
    }
}

/// Shamir's (t, n) threshold scheme over the prime field Z_p.
///
/// Any `t` of the `n` shares produced by [`split`](Self::split) reconstruct
/// the secret exactly. Any `t - 1` of them are consistent with every
/// possible secret in equal measure, so they reveal nothing about it.
///
/// Share holders are assumed honest: a forged share is not detected and
/// silently yields a wrong secret.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShamirScheme {
    modulus: BigUint,
}

impl ShamirScheme {
    /// Build a scheme from an optional modulus or an optional bit length.
    ///
    /// If `modulus` is given it is used (and `bit_length` ignored). Otherwise
    /// a fresh prime of `bit_length` bits is generated, defaulting to
    /// [`DEFAULT_PRIME_BITS`].
    pub fn new(
        modulus: Option<BigUint>,
        bit_length: Option<usize>,
        rng: &mut impl RandomNumberGenerator,
    ) -> Result<Self> {
        match modulus {
            Some(modulus) => Self::with_modulus(modulus, rng),
            None => Self::generate(bit_length.unwrap_or(DEFAULT_PRIME_BITS), rng),
        }
    }

    /// Use a caller-supplied modulus, which must be an odd prime. Primality is
    /// checked with Miller-Rabin bases drawn from `rng`.
    pub fn with_modulus(modulus: BigUint, rng: &mut impl RandomNumberGenerator) -> Result<Self> {
        if modulus <= BigUint::from(2u32)
            || !is_probable_prime(&modulus, DEFAULT_MILLER_RABIN_ROUNDS, rng)
        {
            return Err(SharingError::InvalidModulus);
        }
        Ok(Self { modulus })
    }

    /// Generate a fresh prime modulus of `bit_length` bits.
    pub fn generate(bit_length: usize, rng: &mut impl RandomNumberGenerator) -> Result<Self> {
        let modulus = generate_prime(bit_length, rng)?;
        Ok(Self { modulus })
    }

    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// A uniformly random secret in `[0, p)`.
    pub fn random_secret(&self, rng: &mut impl RandomNumberGenerator) -> BigUint {
        random_below(&self.modulus, rng)
    }

    fn validate_parameters(&self, secret: &BigUint, share_count: usize, threshold: usize) -> Result<()> {
        if secret >= &self.modulus {
            return Err(SharingError::SecretOutOfRange);
        } else if threshold <= 1 || threshold > share_count {
            return Err(SharingError::InvalidThreshold { threshold, share_count });
        } else if BigUint::from(share_count) >= self.modulus {
            return Err(SharingError::TooManyShares {
                share_count,
                modulus: self.modulus.clone(),
            });
        }
        Ok(())
    }

    /// Split `secret` into `share_count` shares, any `threshold` of which
    /// reconstruct it. Shares are evaluated at `x = 1..=share_count`.
    pub fn split(
        &self,
        secret: &BigUint,
        share_count: usize,
        threshold: usize,
        rng: &mut impl RandomNumberGenerator,
    ) -> Result<Vec<Share>> {
        self.split_with_polynomial(secret, share_count, threshold, rng)
            .map(|(shares, _)| shares)
    }

    /// Like [`split`](Self::split), also returning the sharing polynomial so
    /// callers can inspect or plot it.
    ///
    /// The polynomial determines the secret; it must not outlive the split
    /// anywhere a share holder could read it.
    pub fn split_with_polynomial(
        &self,
        secret: &BigUint,
        share_count: usize,
        threshold: usize,
        rng: &mut impl RandomNumberGenerator,
    ) -> Result<(Vec<Share>, Polynomial)> {
        self.validate_parameters(secret, share_count, threshold)?;
        debug!(
            share_count,
            threshold,
            modulus_bits = self.modulus.bits(),
            "splitting secret"
        );

        let polynomial = make_polynomial(secret, threshold, &self.modulus, rng);
        let shares = (1..=share_count)
            .map(|x| Share::new(x, polynomial.evaluate(&BigUint::from(x))))
            .collect();
        Ok((shares, polynomial))
    }

    /// Recover the secret by Lagrange interpolation at `x = 0`.
    ///
    /// With `threshold` set, only the first `threshold` shares are used;
    /// otherwise all of them are.
    ///
    /// # Hazard
    ///
    /// The scheme does not know the threshold used at split time. Passing
    /// fewer shares than that threshold is not an error: it returns a value
    /// that is consistent with those shares but unrelated to the secret.
    /// Making sure enough shares are supplied is the caller's job.
    ///
    /// # Errors
    ///
    /// - [`SharingError::DuplicateShareX`] if two used shares have the same x.
    /// - [`SharingError::NotEnoughShares`] if no shares are given, or
    ///   `threshold` exceeds the number of shares.
    /// - [`SharingError::InvalidThreshold`] if `threshold` is zero.
    pub fn reconstruct(&self, shares: &[Share], threshold: Option<usize>) -> Result<BigUint> {
        let used = match threshold {
            Some(0) => {
                return Err(SharingError::InvalidThreshold {
                    threshold: 0,
                    share_count: shares.len(),
                });
            }
            Some(t) if t > shares.len() => {
                return Err(SharingError::NotEnoughShares {
                    needed: t,
                    provided: shares.len(),
                });
            }
            Some(t) => &shares[..t],
            None => shares,
        };
        if used.is_empty() {
            return Err(SharingError::NotEnoughShares { needed: 1, provided: 0 });
        }

        debug!(shares = used.len(), "reconstructing secret");
        interpolate(used, &BigUint::zero(), &self.modulus)
    }
}
