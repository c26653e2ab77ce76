use bc_rand::{RandomNumberGenerator, SecureRandomNumberGenerator};
use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::{constants::SMALL_PRIMES, hazmat::random_below};

/// Probabilistic primality test.
///
/// Trial-divides by [`SMALL_PRIMES`], then runs `rounds` rounds of
/// Miller-Rabin with bases drawn uniformly from `[2, n - 2]` using `rng`.
/// A prime always passes; a composite passes with probability at most
/// `4^-rounds`. `rounds` of zero is treated as one.
pub fn is_probable_prime(
    n: &BigUint,
    rounds: usize,
    rng: &mut impl RandomNumberGenerator,
) -> bool {
    let one = BigUint::one();
    if n <= &one {
        return false;
    }

    for p in SMALL_PRIMES {
        let p = BigUint::from(p);
        if n == &p {
            return true;
        }
        if (n % &p).is_zero() {
            return false;
        }
    }

    // n - 1 = d * 2^r with d odd
    let n_minus_1 = n - &one;
    let mut d = n_minus_1.clone();
    let mut r = 0u32;
    while !d.bit(0) {
        d >>= 1;
        r += 1;
    }

    // n > 29 here, so the base range is non-empty.
    let base_span = n - 3u32;
    let two = BigUint::from(2u32);

    for _ in 0..rounds.max(1) {
        let a = random_below(&base_span, rng) + 2u32;
        let mut x = a.modpow(&d, n);
        if x == one || x == n_minus_1 {
            continue;
        }

        let mut passed = false;
        for _ in 1..r {
            x = x.modpow(&two, n);
            if x == n_minus_1 {
                passed = true;
                break;
            }
        }

        if !passed {
            return false;
        }
    }

    true
}

/// [`is_probable_prime`] driven by the operating system's secure generator.
pub fn is_prime(n: &BigUint, rounds: usize) -> bool {
    let mut rng = SecureRandomNumberGenerator;
    is_probable_prime(n, rounds, &mut rng)
}
