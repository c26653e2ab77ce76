use bc_rand::RandomNumberGenerator;
use num_bigint::BigUint;
use tracing::{debug, trace};

use crate::{
    SharingError,
    constants::{DEFAULT_MILLER_RABIN_ROUNDS, MIN_PRIME_BITS, MIN_PRIME_VALUE},
    error::Result,
    hazmat::random_odd_with_bits,
    primality::is_probable_prime,
};

/// Generates prime moduli for Shamir sharing.
///
/// Candidates are random odd integers of exactly the requested bit length.
/// A candidate is kept once it passes the primality test and is at least
/// [`MIN_PRIME_VALUE`]; otherwise a fresh one is drawn.
///
/// With `max_attempts` unset the draw loop has no upper bound. By the prime
/// number theorem it needs O(bit_length) draws on average and terminates
/// with probability one, but there is no deterministic bound: treat it as a
/// liveness assumption. Set `max_attempts` to get a
/// [`SharingError::GenerationError`] instead of an open-ended loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrimeGenerator {
    rounds: usize,
    max_attempts: Option<usize>,
}

impl Default for PrimeGenerator {
    fn default() -> Self {
        Self {
            rounds: DEFAULT_MILLER_RABIN_ROUNDS,
            max_attempts: None,
        }
    }
}

impl PrimeGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Miller-Rabin rounds applied to each candidate.
    pub fn with_rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }

    /// Give up after `max_attempts` candidates.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    pub fn rounds(&self) -> usize {
        self.rounds
    }

    pub fn max_attempts(&self) -> Option<usize> {
        self.max_attempts
    }

    pub fn generate(
        &self,
        bit_length: usize,
        rng: &mut impl RandomNumberGenerator,
    ) -> Result<BigUint> {
        if bit_length < MIN_PRIME_BITS {
            return Err(SharingError::GenerationError(format!(
                "bit length {} is below the minimum of {}",
                bit_length, MIN_PRIME_BITS
            )));
        }

        let floor = BigUint::from(MIN_PRIME_VALUE);
        let mut attempts = 0usize;
        loop {
            if let Some(max) = self.max_attempts {
                if attempts >= max {
                    return Err(SharingError::GenerationError(format!(
                        "no {}-bit prime found in {} attempts",
                        bit_length, max
                    )));
                }
            }
            attempts += 1;

            let candidate = random_odd_with_bits(bit_length, rng);
            if candidate < floor {
                trace!(bit_length, attempts, "candidate below floor");
                continue;
            }
            if is_probable_prime(&candidate, self.rounds, rng) {
                debug!(bit_length, attempts, "generated prime modulus");
                return Ok(candidate);
            }
        }
    }
}

/// Generate a prime of exactly `bit_length` bits with the default generator.
pub fn generate_prime(
    bit_length: usize,
    rng: &mut impl RandomNumberGenerator,
) -> Result<BigUint> {
    PrimeGenerator::default().generate(bit_length, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primality::is_prime;
    use bc_rand::make_fake_random_number_generator;

    #[test]
    fn test_generate_prime_sizes() {
        let mut rng = make_fake_random_number_generator();
        for bits in [10usize, 11, 16, 32, 64, 128, 256] {
            let p = generate_prime(bits, &mut rng).unwrap();
            assert_eq!(p.bits() as usize, bits);
            assert!(p.bit(0));
            assert!(p >= BigUint::from(MIN_PRIME_VALUE));
            assert!(is_prime(&p, 20));
        }
    }

    #[test]
    fn test_ten_bit_primes_respect_floor() {
        let mut rng = make_fake_random_number_generator();
        let allowed = [1009u32, 1013, 1019, 1021].map(BigUint::from);
        for _ in 0..20 {
            let p = generate_prime(10, &mut rng).unwrap();
            assert!(allowed.contains(&p), "{p}");
        }
    }

    #[test]
    fn test_bit_length_too_small() {
        let mut rng = make_fake_random_number_generator();
        for bits in 0..MIN_PRIME_BITS {
            assert!(matches!(
                generate_prime(bits, &mut rng),
                Err(SharingError::GenerationError(_))
            ));
        }
    }

    #[test]
    fn test_attempt_budget_exhausted() {
        let mut rng = make_fake_random_number_generator();
        let generator = PrimeGenerator::new().with_max_attempts(0);
        assert_eq!(generator.max_attempts(), Some(0));
        assert!(matches!(
            generator.generate(64, &mut rng),
            Err(SharingError::GenerationError(_))
        ));
    }

    #[test]
    fn test_generous_budget_succeeds() {
        let mut rng = make_fake_random_number_generator();
        let generator = PrimeGenerator::new().with_rounds(10).with_max_attempts(10_000);
        assert_eq!(generator.rounds(), 10);
        let p = generator.generate(48, &mut rng).unwrap();
        assert_eq!(p.bits(), 48);
    }
}
