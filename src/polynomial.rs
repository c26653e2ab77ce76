use std::fmt;

use bc_rand::RandomNumberGenerator;
use num_bigint::BigUint;
use num_traits::Zero;

use crate::hazmat::random_below;

/// A polynomial over Z_p, stored as coefficients `[a0, a1, ..., a(t-1)]`.
///
/// For a sharing polynomial `a0` is the secret and the rest are uniform in
/// `[0, p)`. `Debug` output shows the degree and modulus only.
#[derive(Clone, PartialEq, Eq)]
pub struct Polynomial {
    coefficients: Vec<BigUint>,
    modulus: BigUint,
}

impl fmt::Debug for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Polynomial")
            .field("degree", &self.degree())
            .field("modulus", &self.modulus)
            .finish_non_exhaustive()
    }
}

impl Polynomial {
    /// Build a polynomial from explicit coefficients. Each coefficient is
    /// reduced mod `modulus`; an empty list is the zero polynomial.
    ///
    /// # Panics
    ///
    /// If `modulus` is zero.
    pub fn from_coefficients(coefficients: Vec<BigUint>, modulus: BigUint) -> Self {
        let mut coefficients: Vec<BigUint> =
            coefficients.into_iter().map(|c| c % &modulus).collect();
        if coefficients.is_empty() {
            coefficients.push(BigUint::zero());
        }
        Self { coefficients, modulus }
    }

    pub fn coefficients(&self) -> &[BigUint] {
        &self.coefficients
    }

    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// The constant term, i.e. f(0).
    pub fn secret(&self) -> &BigUint {
        &self.coefficients[0]
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    pub fn evaluate(&self, x: &BigUint) -> BigUint {
        evaluate(&self.coefficients, x, &self.modulus)
    }
}

/// Random polynomial of degree `threshold - 1` with `secret` as constant term.
///
/// The caller guarantees `secret < modulus` and `threshold >= 1`.
/// Coefficients come from `rng`, which must be cryptographically secure
/// outside of tests: predictable coefficients leak the secret.
pub fn make_polynomial(
    secret: &BigUint,
    threshold: usize,
    modulus: &BigUint,
    rng: &mut impl RandomNumberGenerator,
) -> Polynomial {
    let mut coefficients = Vec::with_capacity(threshold.max(1));
    coefficients.push(secret.clone());
    for _ in 1..threshold {
        coefficients.push(random_below(modulus, rng));
    }
    Polynomial::from_coefficients(coefficients, modulus.clone())
}

/// Evaluate `Σ coefficients[j] · x^j mod modulus` by Horner's rule,
/// reducing after every step.
///
/// # Panics
///
/// If `modulus` is zero.
pub fn evaluate(coefficients: &[BigUint], x: &BigUint, modulus: &BigUint) -> BigUint {
    let x = x % modulus;
    coefficients
        .iter()
        .rev()
        .fold(BigUint::zero(), |acc, c| (acc * &x + c) % modulus)
}
