//! Fiat-Shamir challenge derivation
//!
//! Challenges are SHA-256 digests of canonical point encodings, read as
//! big-endian integers and reduced modulo the group order. Scalars fed into a
//! digest use the same big-endian encoding. Prover and verifier
//! call the same functions on the same inputs, so they always agree.

use crate::{BulletproofsError, BulletproofsResult, GroupElement};
use curve25519_dalek::scalar::Scalar;
use sha2::{Digest, Sha256};

const LOG_TARGET: &str = "bulletproofs_core::transcript";

/// Reduce a 32-byte big-endian digest into a scalar
fn scalar_from_digest(digest: &[u8]) -> Scalar {
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(digest);
    bytes.reverse();
    Scalar::from_bytes_mod_order(bytes)
}

/// Big-endian encoding of a scalar, the inverse of [`scalar_from_digest`]
/// for canonical values
fn scalar_to_be_bytes(s: &Scalar) -> [u8; 32] {
    let mut bytes = s.to_bytes();
    bytes.reverse();
    bytes
}

/// Derive two challenges from a pair of commitments.
///
/// `c1 = H(p1 || p2)` and `c2 = H(p1 || p2 || c1)`, with `c1` fed back in
/// the same big-endian encoding its digest is read with.
pub fn hash_to_two_scalars(p1: &GroupElement, p2: &GroupElement) -> (Scalar, Scalar) {
    let mut hasher = Sha256::new();
    hasher.update(p1.to_bytes());
    hasher.update(p2.to_bytes());
    let c1 = scalar_from_digest(&hasher.clone().finalize());

    hasher.update(scalar_to_be_bytes(&c1));
    let c2 = scalar_from_digest(&hasher.finalize());

    (c1, c2)
}

/// Bind an inner-product instance `(g_vec, h_vec, p, c)` into one challenge.
///
/// Hashes `p`, then each `(g_i, h_i)` pair in order, then `c`.
pub fn hash_commitment_to_scalar(
    g_vec: &[GroupElement],
    h_vec: &[GroupElement],
    p: &GroupElement,
    c: &Scalar,
    n: usize,
) -> BulletproofsResult<Scalar> {
    if g_vec.len() != n {
        return Err(BulletproofsError::length_mismatch(n, g_vec.len()));
    }
    if h_vec.len() != n {
        return Err(BulletproofsError::length_mismatch(n, h_vec.len()));
    }

    let mut hasher = Sha256::new();
    hasher.update(p.to_bytes());
    for (g, h) in g_vec.iter().zip(h_vec.iter()) {
        hasher.update(g.to_bytes());
        hasher.update(h.to_bytes());
    }
    hasher.update(scalar_to_be_bytes(c));

    tracing::trace!(target: LOG_TARGET, n, "bound inner-product instance");
    Ok(scalar_from_digest(&hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{base_g, base_h, GeneratorSet};

    #[test]
    fn test_challenges_deterministic() {
        let (a1, b1) = hash_to_two_scalars(&base_g(), &base_h());
        let (a2, b2) = hash_to_two_scalars(&base_g(), &base_h());

        assert_eq!(a1, a2);
        assert_eq!(b1, b2);
        assert_ne!(a1, b1);
        assert_ne!(a1, Scalar::ZERO);
    }

    #[test]
    fn test_challenges_depend_on_order() {
        let (forward, _) = hash_to_two_scalars(&base_g(), &base_h());
        let (backward, _) = hash_to_two_scalars(&base_h(), &base_g());

        assert_ne!(forward, backward);
    }

    #[test]
    fn test_second_challenge_chains_first() {
        let (c1, c2) = hash_to_two_scalars(&base_g(), &base_h());

        let mut hasher = Sha256::new();
        hasher.update(base_g().to_bytes());
        hasher.update(base_h().to_bytes());
        let mut c1_be = c1.to_bytes();
        c1_be.reverse();
        hasher.update(c1_be);

        assert_eq!(c2, scalar_from_digest(&hasher.finalize()));
    }

    #[test]
    fn test_scalar_encoding_is_big_endian() {
        let encoded = scalar_to_be_bytes(&Scalar::from(0x0102u64));
        assert_eq!(encoded[30..], [0x01, 0x02]);
        assert!(encoded[..30].iter().all(|b| *b == 0));

        let c = Scalar::from(123_456_789u64);
        assert_eq!(scalar_from_digest(&scalar_to_be_bytes(&c)), c);
    }

    #[test]
    fn test_digest_is_big_endian() {
        let mut digest = [0u8; 32];
        digest[31] = 5;
        assert_eq!(scalar_from_digest(&digest), Scalar::from(5u64));
    }

    #[test]
    fn test_commitment_hash_binds_every_input() {
        let generators = GeneratorSet::new(4);
        let p = base_g();
        let c = Scalar::from(9u64);
        let hash = |g: &[GroupElement], h: &[GroupElement], p: &GroupElement, c: &Scalar| {
            hash_commitment_to_scalar(g, h, p, c, 4).unwrap()
        };

        let reference = hash(&generators.g_vec, &generators.h_vec, &p, &c);
        assert_eq!(reference, hash(&generators.g_vec, &generators.h_vec, &p, &c));

        assert_ne!(reference, hash(&generators.h_vec, &generators.g_vec, &p, &c));
        assert_ne!(reference, hash(&generators.g_vec, &generators.h_vec, &base_h(), &c));
        assert_ne!(
            reference,
            hash(&generators.g_vec, &generators.h_vec, &p, &Scalar::from(10u64))
        );
    }

    #[test]
    fn test_commitment_hash_checks_lengths() {
        let generators = GeneratorSet::new(4);
        let result = hash_commitment_to_scalar(
            &generators.g_vec[..3],
            &generators.h_vec,
            &base_g(),
            &Scalar::ONE,
            4,
        );

        assert_eq!(result, Err(BulletproofsError::length_mismatch(4, 3)));
    }
}
