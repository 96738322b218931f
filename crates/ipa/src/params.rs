//! Inner-product instance parameters

use bulletproofs_core::{
    base_h, base_u,
    config::SEED_H,
    derive_generators,
    utils::{is_power_of_two, vector_exp},
    BulletproofsError, BulletproofsResult, GroupElement,
};
use curve25519_dalek::scalar::Scalar;
use serde::{Deserialize, Serialize};

const LOG_TARGET: &str = "bulletproofs_ipa::params";

/// Public parameters of one inner-product instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InnerProductParams {
    /// Vector length, a power of two
    pub n: usize,
    /// Claimed inner product `<a, b>`
    pub c: Scalar,
    /// Generator carrying the inner product
    pub u: GroupElement,
    /// Blinding base
    pub h: GroupElement,
    pub g_vec: Vec<GroupElement>,
    pub h_vec: Vec<GroupElement>,
    /// Commitment being opened; the identity until a proof fills it in
    pub p: GroupElement,
}

/// Build the parameters for proving `<a, b> = c` over vectors of length `n`.
///
/// Missing bases are derived from the fixed seeds, so independent parties get
/// the same values.
pub fn setup_inner_product(
    h: Option<GroupElement>,
    g_vec: Option<Vec<GroupElement>>,
    h_vec: Option<Vec<GroupElement>>,
    c: Scalar,
    n: usize,
) -> BulletproofsResult<InnerProductParams> {
    if n == 0 {
        return Err(BulletproofsError::InvalidParameters(
            "Vector length must be greater than zero".to_string(),
        ));
    }
    if !is_power_of_two(n as u64) {
        return Err(BulletproofsError::InvalidParameters(format!(
            "Vector length {n} is not a power of two"
        )));
    }

    let (g_vec, h_vec) = match (g_vec, h_vec) {
        (Some(g_vec), Some(h_vec)) => (g_vec, h_vec),
        (g_vec, h_vec) => {
            let (derived_g, derived_h) = derive_generators(SEED_H, n);
            (g_vec.unwrap_or(derived_g), h_vec.unwrap_or(derived_h))
        }
    };

    for len in [g_vec.len(), h_vec.len()] {
        if len != n {
            return Err(BulletproofsError::length_mismatch(n, len));
        }
    }

    tracing::debug!(target: LOG_TARGET, n, "inner-product parameters ready");

    Ok(InnerProductParams {
        n,
        c,
        u: base_u(),
        h: h.unwrap_or_else(base_h),
        g_vec,
        h_vec,
        p: GroupElement::identity(),
    })
}

/// Vector commitment `g^a * h^b` without the inner-product term
pub fn commit_inner_product(
    g_vec: &[GroupElement],
    h_vec: &[GroupElement],
    a: &[Scalar],
    b: &[Scalar],
) -> BulletproofsResult<GroupElement> {
    Ok(vector_exp(g_vec, a)? + vector_exp(h_vec, b)?)
}
