//! Fixed protocol configuration.
//!
//! Prover and verifier must agree on every value here without talking to each
//! other, so these are compile-time constants and are never changed at runtime.

/// Widest supported range, in bits.
pub const MAX_BIT_LENGTH: usize = 32;

/// Largest supported range end; proofs cover `[0, 2^32)` at most.
pub const MAX_RANGE_END: u64 = 1 << MAX_BIT_LENGTH;

/// Seed for the blinding base `h` and, suffixed with `g{i}` / `h{i}`, for the
/// generator vectors.
pub const SEED_H: &str = "BulletproofsRangeProofNoTrustedSetupH";

/// Seed for the inner-product generator `u`.
pub const SEED_U: &str = "BulletproofsRangeProofNoTrustedSetupU";

/// Domain prefix mixed into every hash-to-curve digest.
pub const HASH_TO_POINT_DOMAIN: &[u8] = b"bulletproofs_generator_";
