use bc_crypto::memzero;
use bc_rand::RandomNumberGenerator;
use num_bigint::BigUint;
use num_traits::Zero;

/// Draw a uniform value in `[0, upper)`.
///
/// Rejection-samples random bytes masked to the bit length of `upper`, so
/// there is no modulo bias and fewer than two draws are needed on average.
/// Returns zero when `upper` is zero.
pub fn random_below(upper: &BigUint, rng: &mut impl RandomNumberGenerator) -> BigUint {
    if upper.is_zero() {
        return BigUint::zero();
    }

    let bits = upper.bits() as usize;
    let top_bits = bits % 8;
    let mut buf = vec![0u8; bits.div_ceil(8)];

    loop {
        rng.fill_random_data(&mut buf);
        if top_bits != 0 {
            buf[0] &= (1u8 << top_bits) - 1;
        }

        let candidate = BigUint::from_bytes_be(&buf);
        if &candidate < upper {
            // clean up sampling buffer
            memzero(buf.as_mut_slice());
            return candidate;
        }
    }
}

/// Draw a random odd integer of exactly `bits` bits (top and bottom bit set).
/// `bits` must be at least 2.
pub fn random_odd_with_bits(bits: usize, rng: &mut impl RandomNumberGenerator) -> BigUint {
    debug_assert!(bits >= 2);
    let top_bits = bits % 8;
    let mut buf = vec![0u8; bits.div_ceil(8)];
    rng.fill_random_data(&mut buf);

    if top_bits != 0 {
        buf[0] &= (1u8 << top_bits) - 1;
        buf[0] |= 1u8 << (top_bits - 1);
    } else {
        buf[0] |= 0x80;
    }
    let last = buf.len() - 1;
    buf[last] |= 1;

    let candidate = BigUint::from_bytes_be(&buf);
    memzero(buf.as_mut_slice());
    candidate
}

/// `(a - b) mod p` for any `a`, `b`.
pub fn sub_mod(a: &BigUint, b: &BigUint, p: &BigUint) -> BigUint {
    ((a % p) + p - (b % p)) % p
}

/// Inverse of `a` in Z_p via Fermat's little theorem: `a^(p-2) mod p`.
/// `p` must be prime. Returns `None` when `a ≡ 0 (mod p)`.
pub fn mod_inverse(a: &BigUint, p: &BigUint) -> Option<BigUint> {
    let a = a % p;
    if a.is_zero() {
        return None;
    }
    Some(a.modpow(&(p - 2u32), p))
}
