//! Range proof verifier implementation

use crate::{RangeProof, RangeProofSetupParams};
use bulletproofs_core::{
    hash_to_two_scalars,
    utils::{power_of, scalar_product, vector_add, vector_copy, vector_exp, vector_scalar_mul},
    BulletproofsResult, GroupElement, Scalar,
};
use bulletproofs_ipa::setup_inner_product;
use rayon::prelude::*;

const LOG_TARGET: &str = "bulletproofs_range::verifier";

/// `delta(y, z) = (z - z^2) * <1, y^n> - z^3 * <1, 2^n>`
pub fn delta(y: &Scalar, z: &Scalar, n: usize) -> BulletproofsResult<Scalar> {
    let ones = vector_copy(Scalar::ONE, n);
    let z_sq = z * z;
    let z_cube = z_sq * z;

    let sum_y = scalar_product(&ones, &power_of(y, n))?;
    let sum_two = scalar_product(&ones, &power_of(&Scalar::from(2u64), n))?;

    Ok((z - z_sq) * sum_y - z_cube * sum_two)
}

impl RangeProof {
    /// Check the proof. Any failure, including a malformed proof, is `false`.
    pub fn verify(&self) -> bool {
        self.try_verify().unwrap_or_else(|err| {
            tracing::debug!(target: LOG_TARGET, %err, "rejecting malformed proof");
            false
        })
    }

    /// Check the proof against parameters the caller trusts.
    ///
    /// [`Self::verify`] uses the parameters carried inside the proof; this
    /// additionally requires them to be `params`.
    pub fn verify_with(&self, params: &RangeProofSetupParams) -> bool {
        let carried = &self.params;
        if carried.n != params.n
            || carried.g != params.g
            || carried.h != params.h
            || carried.g_vec != params.g_vec
            || carried.h_vec != params.h_vec
        {
            tracing::debug!(target: LOG_TARGET, "proof was made for different parameters");
            return false;
        }

        self.verify()
    }

    /// Check the proof, reporting malformed shapes as errors.
    ///
    /// All three checks always run; the result does not reveal which failed.
    #[tracing::instrument(target = "bulletproofs_range::verifier", skip_all, fields(n = self.params.n))]
    pub fn try_verify(&self) -> BulletproofsResult<bool> {
        self.validate_structure()?;

        let params = &self.params;
        let n = params.n;

        let (x, _) = hash_to_two_scalars(&self.t1, &self.t2);
        let (y, z) = hash_to_two_scalars(&self.a, &self.s);
        let h_prime = params.scaled_h_vec(&y);

        let z_sq = z * z;
        let x_sq = x * x;

        // g^t' * h^taux == V^{z^2} * g^delta * T1^x * T2^{x^2}
        let lhs = params.commit_scalar(self.tprime, self.taux);
        let rhs = GroupElement::multiscalar_mul(
            [z_sq, delta(&y, &z, n)?, x, x_sq],
            [self.v.0, params.g.0, self.t1.0, self.t2.0],
        );
        let polynomial_ok = (lhs - rhs).is_identity();

        // A * S^x * g^{-z} * h'^{z.y^n + z^2.2^n} == h^mu * commit
        let exponents = vector_add(
            &vector_scalar_mul(&power_of(&y, n), &z),
            &vector_scalar_mul(&power_of(&Scalar::from(2u64), n), &z_sq),
        )?;
        let p = self.a
            + self.s * x
            + vector_exp(&params.g_vec, &vector_copy(-z, n))?
            + vector_exp(&h_prime, &exponents)?;
        let commitment_ok = (params.h * self.mu + self.commit - p).is_identity();

        // The inner-product proof must open `commit` to `tprime` over (g, h')
        let expected = setup_inner_product(
            Some(params.h),
            Some(params.g_vec.clone()),
            Some(h_prime),
            self.tprime,
            n,
        )?;
        let inner_product_ok = self.inner_product_proof.verify_instance(&expected, &self.commit);

        tracing::debug!(
            target: LOG_TARGET,
            polynomial_ok,
            commitment_ok,
            inner_product_ok,
            "range proof checks"
        );

        Ok(polynomial_ok && commitment_ok && inner_product_ok)
    }
}

/// Verify independent proofs in parallel; `true` iff every one verifies
pub fn verify_batch(proofs: &[RangeProof]) -> bool {
    proofs.par_iter().all(RangeProof::verify)
}
