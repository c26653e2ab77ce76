/// Primes used for trial division before Miller-Rabin.
pub const SMALL_PRIMES: [u32; 10] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29];

/// Miller-Rabin rounds used when the caller does not choose. False-positive
/// probability is at most 4^-rounds.
pub const DEFAULT_MILLER_RABIN_ROUNDS: usize = 5;

/// Generated moduli must be at least this large.
pub const MIN_PRIME_VALUE: u32 = 1000;

/// Smallest bit length that can still produce a prime of at least `MIN_PRIME_VALUE`.
pub const MIN_PRIME_BITS: usize = 10;

/// Bit length of the field generated when a scheme is built without a modulus.
pub const DEFAULT_PRIME_BITS: usize = 10;
