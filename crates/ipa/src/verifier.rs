//! Inner Product Argument verifier implementation

use crate::{
    folding::{fold_commitment, fold_generators, RoundChallenge},
    InnerProductParams, InnerProductProof,
};
use bulletproofs_core::{hash_commitment_to_scalar, BulletproofsResult, GroupElement};

const LOG_TARGET: &str = "bulletproofs_ipa::verifier";

impl InnerProductProof {
    /// Verify the proof against its own recorded instance.
    ///
    /// Malformed proofs are reported as `false`; use [`Self::try_verify`] to
    /// tell them apart from proofs that are well formed but wrong.
    pub fn verify(&self) -> bool {
        self.try_verify().unwrap_or_else(|err| {
            tracing::debug!(target: LOG_TARGET, %err, "rejecting malformed proof");
            false
        })
    }

    /// Replay the folding rounds and check the final opening.
    ///
    /// Errors only on malformed shapes. A wrong proof yields `Ok(false)`.
    #[tracing::instrument(target = "bulletproofs_ipa::verifier", skip_all, fields(n = self.n))]
    pub fn try_verify(&self) -> BulletproofsResult<bool> {
        self.validate_structure()?;

        let mut g = self.params.g_vec.clone();
        let mut h = self.params.h_vec.clone();
        let mut p = self.params.p;

        for (round, (l, r)) in self.l_vec.iter().zip(self.r_vec.iter()).enumerate() {
            let challenge = RoundChallenge::derive(l, r);
            let (folded_g, folded_h) = fold_generators(&g, &h, &challenge);
            p = fold_commitment(l, r, &p, &challenge);
            g = folded_g;
            h = folded_h;
            tracing::trace!(target: LOG_TARGET, round, "replayed");
        }

        // rhs = g'^a * h'^b * u^{a*b}
        let rhs = GroupElement::multiscalar_mul(
            [self.a, self.b, self.a * self.b],
            [g[0].0, h[0].0, self.u.0],
        );

        let valid = (p - rhs).is_identity();
        if !valid {
            tracing::debug!(target: LOG_TARGET, "final opening does not match");
        }
        Ok(valid)
    }

    /// Verify that this proof opens `commitment` for exactly the instance
    /// described by `params`, then check the proof itself.
    ///
    /// [`Self::verify`] trusts the instance stored inside the proof; callers
    /// that know which statement they expect should use this instead.
    pub fn verify_instance(&self, params: &InnerProductParams, commitment: &GroupElement) -> bool {
        let x = match hash_commitment_to_scalar(
            &params.g_vec,
            &params.h_vec,
            commitment,
            &params.c,
            params.n,
        ) {
            Ok(x) => x,
            Err(err) => {
                tracing::debug!(target: LOG_TARGET, %err, "expected instance is malformed");
                return false;
            }
        };
        let u = params.u * x;
        let expected = InnerProductParams {
            p: *commitment + u * params.c,
            ..params.clone()
        };

        if self.n != params.n || self.u != u || self.params != expected {
            tracing::debug!(target: LOG_TARGET, "proof was made for a different instance");
            return false;
        }

        self.verify()
    }
}
