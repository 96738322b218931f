//! Scalar and vector arithmetic for Bulletproofs operations
//!
//! All scalar arithmetic is modulo the group order, which [`Scalar`] enforces
//! for us. Binary vector operations reject inputs of different lengths.

use crate::{BulletproofsError, BulletproofsResult, GroupElement};
use curve25519_dalek::scalar::Scalar;
use rand_core::{CryptoRng, RngCore};

fn check_lengths<A, B>(a: &[A], b: &[B]) -> BulletproofsResult<()> {
    if a.len() != b.len() {
        return Err(BulletproofsError::length_mismatch(a.len(), b.len()));
    }
    Ok(())
}

/// Add two scalar vectors element-wise
pub fn vector_add(a: &[Scalar], b: &[Scalar]) -> BulletproofsResult<Vec<Scalar>> {
    check_lengths(a, b)?;
    Ok(a.iter().zip(b.iter()).map(|(ai, bi)| ai + bi).collect())
}

/// Subtract two scalar vectors element-wise: a - b
pub fn vector_sub(a: &[Scalar], b: &[Scalar]) -> BulletproofsResult<Vec<Scalar>> {
    check_lengths(a, b)?;
    Ok(a.iter().zip(b.iter()).map(|(ai, bi)| ai - bi).collect())
}

/// Scale a vector by a scalar
pub fn vector_scalar_mul(a: &[Scalar], s: &Scalar) -> Vec<Scalar> {
    a.iter().map(|ai| ai * s).collect()
}

/// Hadamard (element-wise) product of two scalar vectors
pub fn vector_mul(a: &[Scalar], b: &[Scalar]) -> BulletproofsResult<Vec<Scalar>> {
    check_lengths(a, b)?;
    Ok(a.iter().zip(b.iter()).map(|(ai, bi)| ai * bi).collect())
}

/// Compute the inner product of two scalar vectors
pub fn scalar_product(a: &[Scalar], b: &[Scalar]) -> BulletproofsResult<Scalar> {
    check_lengths(a, b)?;
    Ok(a.iter().zip(b.iter()).map(|(ai, bi)| ai * bi).sum())
}

/// Multi-exponentiation `Π bases_i^{exps_i}`, written additively.
///
/// Empty input yields the identity.
pub fn vector_exp(bases: &[GroupElement], exps: &[Scalar]) -> BulletproofsResult<GroupElement> {
    check_lengths(bases, exps)?;
    Ok(GroupElement::multiscalar_mul(
        exps.iter().copied(),
        bases.iter().map(|base| base.0),
    ))
}

/// Compute powers of a scalar: [1, x, x^2, x^3, ..., x^(n-1)]
pub fn power_of(x: &Scalar, n: usize) -> Vec<Scalar> {
    let mut powers = Vec::with_capacity(n);
    let mut current = Scalar::ONE;

    for _ in 0..n {
        powers.push(current);
        current *= x;
    }

    powers
}

/// A vector holding `n` copies of `value`
pub fn vector_copy(value: Scalar, n: usize) -> Vec<Scalar> {
    vec![value; n]
}

/// Check if a number is a power of 2
pub fn is_power_of_two(x: u64) -> bool {
    x != 0 && (x & (x - 1)) == 0
}

/// `log2(x)` when `x` is an exact power of two
pub fn log2_exact(x: u64) -> Option<u32> {
    is_power_of_two(x).then(|| x.trailing_zeros())
}

/// Little-endian bit decomposition of `value` into `bits` scalars.
///
/// Bits above `bits` are dropped without complaint.
pub fn bit_decomposition(value: u64, bits: usize) -> Vec<Scalar> {
    (0..bits)
        .map(|i| {
            let bit = if i < 64 { (value >> i) & 1 } else { 0 };
            Scalar::from(bit)
        })
        .collect()
}

/// Sample a uniform scalar, surfacing RNG failure instead of panicking
pub fn random_scalar<R: RngCore + CryptoRng>(rng: &mut R) -> BulletproofsResult<Scalar> {
    let mut bytes = [0u8; 64];
    rng.try_fill_bytes(&mut bytes)
        .map_err(|e| BulletproofsError::Randomness(e.to_string()))?;
    Ok(Scalar::from_bytes_mod_order_wide(&bytes))
}

/// Sample `n` uniform scalars
pub fn random_vector<R: RngCore + CryptoRng>(
    rng: &mut R,
    n: usize,
) -> BulletproofsResult<Vec<Scalar>> {
    (0..n).map(|_| random_scalar(rng)).collect()
}
