use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::{
    SharingError,
    error::Result,
    hazmat::{mod_inverse, sub_mod},
    shamir::Share,
};

/// Calculate the Lagrange basis value for point `i` at `x`:
///
/// ```text
///              ---    (x - xs[j])
///   l_i(x) =   | |   -------------
///            j != i  (xs[i] - xs[j])
/// ```
///
/// The numerator and denominator are accumulated separately so that only one
/// inversion is needed per point.
fn lagrange_basis(shares: &[Share], i: usize, x: &BigUint, p: &BigUint) -> Result<BigUint> {
    let xi = BigUint::from(shares[i].x);
    let mut numerator = BigUint::one();
    let mut denominator = BigUint::one();

    for (j, share) in shares.iter().enumerate() {
        if j == i {
            continue;
        }
        let xj = BigUint::from(share.x);
        let difference = sub_mod(&xi, &xj, p);
        if difference.is_zero() {
            return Err(SharingError::DuplicateShareX(share.x));
        }
        numerator = (numerator * sub_mod(x, &xj, p)) % p;
        denominator = (denominator * difference) % p;
    }

    let inverse = mod_inverse(&denominator, p).ok_or(SharingError::DuplicateShareX(shares[i].x))?;
    Ok((numerator * inverse) % p)
}

/// Evaluate at `x` the unique polynomial of degree `< shares.len()` that
/// passes through every share, working in Z_p.
///
/// `p` must be prime: inverses are taken as `a^(p-2)`, which is only correct
/// in a field. A composite `p` is not detected and gives a wrong result.
///
/// # Errors
///
/// - [`SharingError::InvalidModulus`] if `p < 2`.
/// - [`SharingError::DuplicateShareX`] if two shares have x values that are
///   equal mod `p`, since the interpolating polynomial is then undefined.
pub fn interpolate(shares: &[Share], x: &BigUint, p: &BigUint) -> Result<BigUint> {
    if p < &BigUint::from(2u32) {
        return Err(SharingError::InvalidModulus);
    }
    let mut result = BigUint::zero();
    for (i, share) in shares.iter().enumerate() {
        let basis = lagrange_basis(shares, i, x, p)?;
        result = (result + (&share.y % p) * basis) % p;
    }
    Ok(result)
}
