//! One round of the inner-product folding, shared by prover and verifier.
//!
//! Both sides must combine generators and commitments identically; keeping the
//! algebra here means they cannot drift apart.

use bulletproofs_core::{hash_to_two_scalars, GroupElement};
use curve25519_dalek::scalar::Scalar;
use rayon::prelude::*;

/// Round challenge `x = H(L, R)` together with its inverse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundChallenge {
    pub x: Scalar,
    pub x_inv: Scalar,
}

impl RoundChallenge {
    pub fn derive(l: &GroupElement, r: &GroupElement) -> Self {
        let (x, _) = hash_to_two_scalars(l, r);
        Self {
            x,
            x_inv: x.invert(),
        }
    }
}

/// Halve the generator vectors:
/// `g' = g_L^{x^-1} * g_R^x`, `h' = h_L^x * h_R^{x^-1}`.
pub fn fold_generators(
    g: &[GroupElement],
    h: &[GroupElement],
    challenge: &RoundChallenge,
) -> (Vec<GroupElement>, Vec<GroupElement>) {
    let m = g.len() / 2;
    let (g_l, g_r) = g.split_at(m);
    let (h_l, h_r) = h.split_at(m);
    let RoundChallenge { x, x_inv } = *challenge;

    let folded_g = g_l
        .par_iter()
        .zip(g_r.par_iter())
        .map(|(gl, gr)| *gl * x_inv + *gr * x)
        .collect();
    let folded_h = h_l
        .par_iter()
        .zip(h_r.par_iter())
        .map(|(hl, hr)| *hl * x + *hr * x_inv)
        .collect();

    (folded_g, folded_h)
}

/// `P' = L^{x^2} * P * R^{x^-2}`
pub fn fold_commitment(
    l: &GroupElement,
    r: &GroupElement,
    p: &GroupElement,
    challenge: &RoundChallenge,
) -> GroupElement {
    let x_sq = challenge.x * challenge.x;
    let x_inv_sq = challenge.x_inv * challenge.x_inv;

    GroupElement::multiscalar_mul([x_sq, Scalar::ONE, x_inv_sq], [l.0, p.0, r.0])
}
