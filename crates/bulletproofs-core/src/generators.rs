//! Deterministic generator derivation
//!
//! Every generator except the basepoint `g` is produced by hashing a public
//! label to the curve, so two parties derive identical bases with no trusted
//! setup and no coordination beyond the seeds in [`crate::config`].

use crate::{
    config::{HASH_TO_POINT_DOMAIN, SEED_H, SEED_U},
    GroupElement,
};
use curve25519_dalek::{constants::RISTRETTO_BASEPOINT_POINT, ristretto::RistrettoPoint};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha512};

/// Hash arbitrary bytes to a group element (deterministic)
pub fn hash_to_point(label: &[u8]) -> GroupElement {
    let mut hasher = Sha512::new();
    hasher.update(HASH_TO_POINT_DOMAIN);
    hasher.update(label);

    let mut bytes = [0u8; 64];
    bytes.copy_from_slice(&hasher.finalize());

    GroupElement(RistrettoPoint::from_uniform_bytes(&bytes))
}

/// Value-commitment base `g` (the Ristretto basepoint)
pub fn base_g() -> GroupElement {
    GroupElement(RISTRETTO_BASEPOINT_POINT)
}

/// Blinding base `h`
pub fn base_h() -> GroupElement {
    hash_to_point(SEED_H.as_bytes())
}

/// Inner-product base `u`
pub fn base_u() -> GroupElement {
    hash_to_point(SEED_U.as_bytes())
}

/// Derive the `n`-length vectors `(g_vec, h_vec)` for `seed`.
///
/// `g_vec[i]` hashes `"{seed}g{i}"` and `h_vec[i]` hashes `"{seed}h{i}"`.
pub fn derive_generators(seed: &str, n: usize) -> (Vec<GroupElement>, Vec<GroupElement>) {
    let derive = |tag: char| -> Vec<GroupElement> {
        (0..n)
            .into_par_iter()
            .map(|i| hash_to_point(format!("{seed}{tag}{i}").as_bytes()))
            .collect()
    };

    (derive('g'), derive('h'))
}

/// Generator set for Bulletproofs operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorSet {
    /// Primary generator G
    pub g: GroupElement,
    /// Secondary generator H
    pub h: GroupElement,
    /// Generator for inner product
    pub u: GroupElement,
    /// Vector generators for left side
    pub g_vec: Vec<GroupElement>,
    /// Vector generators for right side
    pub h_vec: Vec<GroupElement>,
}

impl GeneratorSet {
    /// Create the standard generator set with the specified vector length
    pub fn new(vector_length: usize) -> Self {
        let (g_vec, h_vec) = derive_generators(SEED_H, vector_length);

        Self {
            g: base_g(),
            h: base_h(),
            u: base_u(),
            g_vec,
            h_vec,
        }
    }
}
