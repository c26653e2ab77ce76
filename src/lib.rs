#![doc(html_root_url = "https://docs.rs/threshold-shamir/0.1.0")]
#![warn(rust_2018_idioms)]

//! Threshold secret sharing over prime fields.
//!
//! [`ShamirScheme`] splits a secret into `n` shares such that any `t` of them
//! reconstruct it exactly, while any `t - 1` reveal nothing. [`TrivialScheme`]
//! is the additive n-out-of-n baseline. Both implement [`SecretSharing`].
//!
//! All randomness is drawn from a caller-supplied
//! [`RandomNumberGenerator`]. Use [`SecureRandomNumberGenerator`] outside of
//! tests.
//!
//! ```
//! use num_bigint::BigUint;
//! use threshold_shamir::{SecureRandomNumberGenerator, ShamirScheme};
//!
//! let mut rng = SecureRandomNumberGenerator;
//! let scheme = ShamirScheme::generate(64, &mut rng).unwrap();
//! let secret = BigUint::from(123_456u32);
//! let shares = scheme.split(&secret, 5, 3, &mut rng).unwrap();
//! assert_eq!(scheme.reconstruct(&shares[2..], None).unwrap(), secret);
//! ```

mod constants;
pub use constants::{
    DEFAULT_MILLER_RABIN_ROUNDS, DEFAULT_PRIME_BITS, MIN_PRIME_BITS, MIN_PRIME_VALUE, SMALL_PRIMES,
};

mod error;
pub use error::{Result, SharingError};

mod hazmat;

mod primality;
pub use primality::{is_prime, is_probable_prime};

mod prime;
pub use prime::{PrimeGenerator, generate_prime};

mod polynomial;
pub use polynomial::{Polynomial, evaluate, make_polynomial};

mod interpolate;
pub use interpolate::interpolate;

mod scheme;
pub use scheme::SecretSharing;

mod shamir;
pub use shamir::{ShamirScheme, Share};

mod trivial;
pub use trivial::TrivialScheme;

pub use bc_rand::{RandomNumberGenerator, SecureRandomNumberGenerator};

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;
    use rand::{CryptoRng, RngCore};

    /// Replays a fixed byte script, wrapping around at the end.
    #[derive(Debug)]
    struct FakeRandomNumberGenerator {
        script: Vec<u8>,
        position: usize,
    }

    impl FakeRandomNumberGenerator {
        fn new(script: &[u8]) -> Self {
            Self {
                script: script.to_vec(),
                position: 0,
            }
        }
    }

    impl RngCore for FakeRandomNumberGenerator {
        fn next_u32(&mut self) -> u32 {
            let mut bytes = [0u8; 4];
            self.fill_bytes(&mut bytes);
            u32::from_le_bytes(bytes)
        }

        fn next_u64(&mut self) -> u64 {
            let mut bytes = [0u8; 8];
            self.fill_bytes(&mut bytes);
            u64::from_le_bytes(bytes)
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            for byte in dest.iter_mut() {
                *byte = self.script[self.position % self.script.len()];
                self.position += 1;
            }
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    impl CryptoRng for FakeRandomNumberGenerator {}

    impl RandomNumberGenerator for FakeRandomNumberGenerator {
        fn random_data(&mut self, size: usize) -> Vec<u8> {
            let mut data = vec![0u8; size];
            self.fill_bytes(&mut data);
            data
        }

        fn fill_random_data(&mut self, data: &mut [u8]) {
            self.fill_bytes(data);
        }
    }

    fn big(v: u32) -> BigUint {
        BigUint::from(v)
    }

    #[test]
    fn test_shamir_scenario() {
        // Coefficients 3 and 2 come straight from the script: f(x) = 7 + 3x + 2x^2.
        let mut rng = FakeRandomNumberGenerator::new(&[3, 2]);
        // 17 is one of the trial-division primes, so no bytes are consumed here.
        let scheme = ShamirScheme::with_modulus(big(17), &mut rng).unwrap();
        let shares = scheme.split(&big(7), 5, 3, &mut rng).unwrap();
        let expected: Vec<Share> = [(1, 12), (2, 4), (3, 0), (4, 0), (5, 4)]
            .into_iter()
            .map(|(x, y)| Share::new(x, big(y)))
            .collect();
        assert_eq!(shares, expected);

        let picked = [shares[0].clone(), shares[2].clone(), shares[4].clone()];
        assert_eq!(scheme.reconstruct(&picked, None).unwrap(), big(7));
    }

    #[test]
    fn test_trivial_scenario() {
        let mut rng = FakeRandomNumberGenerator::new(&[17, 53, 9]);
        let scheme = TrivialScheme::new(big(100)).unwrap();
        let shares = scheme.split(&big(42), 4, &mut rng).unwrap();
        assert_eq!(shares, [17, 53, 9, 63].map(big));
        assert_eq!(scheme.reconstruct(&shares).unwrap(), big(42));
    }

    #[test]
    fn test_errors_display() {
        assert_eq!(SharingError::SecretOutOfRange.to_string(), "Secret is not smaller than the modulus");
        assert_eq!(
            SharingError::InvalidThreshold { threshold: 5, share_count: 3 }.to_string(),
            "Invalid threshold 5 for 3 shares (need 1 < t <= n)"
        );
        assert_eq!(
            SharingError::DuplicateShareX(4).to_string(),
            "Two shares have the same x coordinate (4)"
        );
    }
}
