//! Range proof setup parameters

use bulletproofs_core::{
    config::MAX_RANGE_END,
    utils::{is_power_of_two, log2_exact, power_of},
    BulletproofsError, BulletproofsResult, GeneratorSet, GroupElement,
};
use bulletproofs_ipa::{setup_inner_product, InnerProductParams};
use curve25519_dalek::scalar::Scalar;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

const LOG_TARGET: &str = "bulletproofs_range::setup";

/// Public parameters for proving values in `[0, 2^n)`.
///
/// Built once by [`setup`] and shared, read-only, by provers and verifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeProofSetupParams {
    /// Value base
    pub g: GroupElement,
    /// Blinding base
    pub h: GroupElement,
    /// Bit width of the range
    pub n: usize,
    pub g_vec: Vec<GroupElement>,
    pub h_vec: Vec<GroupElement>,
    /// Inner-product instance; a template here, filled in by each proof
    pub inner_product_params: InnerProductParams,
}

/// Create parameters for proofs over `[0, range_end)`.
///
/// `range_end` must be a power of two no larger than `2^32`, and its bit
/// width `n = log2(range_end)` must itself be a power of two.
pub fn setup(range_end: u64) -> BulletproofsResult<RangeProofSetupParams> {
    let invalid = |reason: &str| BulletproofsError::InvalidRange {
        range_end,
        reason: reason.to_string(),
    };

    if range_end > MAX_RANGE_END {
        return Err(invalid("range end exceeds 2^32"));
    }
    let n = log2_exact(range_end).ok_or_else(|| invalid("range end is not a power of two"))?;
    if !is_power_of_two(n as u64) {
        return Err(invalid("log2 of the range end is not a power of two"));
    }
    let n = n as usize;

    let generators = GeneratorSet::new(n);
    let inner_product_params = setup_inner_product(
        Some(generators.h),
        Some(generators.g_vec.clone()),
        Some(generators.h_vec.clone()),
        Scalar::ZERO,
        n,
    )?;

    tracing::debug!(target: LOG_TARGET, range_end, n, "range proof parameters ready");

    Ok(RangeProofSetupParams {
        g: generators.g,
        h: generators.h,
        n,
        g_vec: generators.g_vec,
        h_vec: generators.h_vec,
        inner_product_params,
    })
}

impl RangeProofSetupParams {
    /// Exclusive upper bound of provable values, `None` if `2^n` overflows
    pub fn range_end(&self) -> Option<u64> {
        u32::try_from(self.n).ok().and_then(|n| 1u64.checked_shl(n))
    }

    /// Pedersen commitment `g^value * h^blinding`
    pub fn commit(&self, value: u64, blinding: Scalar) -> GroupElement {
        self.commit_scalar(Scalar::from(value), blinding)
    }

    /// Pedersen commitment to a value already reduced to a scalar
    pub fn commit_scalar(&self, value: Scalar, blinding: Scalar) -> GroupElement {
        GroupElement::multiscalar_mul([value, blinding], [self.g.0, self.h.0])
    }

    /// `h'_i = h_i^{y^{-i}}`, the right-hand bases after the `y` challenge
    pub fn scaled_h_vec(&self, y: &Scalar) -> Vec<GroupElement> {
        let y_inv_powers = power_of(&y.invert(), self.h_vec.len());

        self.h_vec
            .par_iter()
            .zip(y_inv_powers.par_iter())
            .map(|(h, y_inv)| *h * *y_inv)
            .collect()
    }
}
