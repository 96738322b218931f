//! Range proof structure

use crate::RangeProofSetupParams;
use bulletproofs_core::{
    config::MAX_BIT_LENGTH, utils::is_power_of_two, BulletproofsError, BulletproofsResult,
    GroupElement, Scalar,
};
use bulletproofs_ipa::InnerProductProof;
use serde::{Deserialize, Serialize};

/// A range proof that a committed value lies in `[0, 2^n)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeProof {
    /// Commitment to the value being proven
    pub v: GroupElement,
    /// Commitment to the bit vectors
    pub a: GroupElement,
    /// Commitment to the blinding vectors
    pub s: GroupElement,
    /// Commitments to the coefficients of `t(X)`
    pub t1: GroupElement,
    pub t2: GroupElement,
    /// Blinding of `t(x)`
    pub taux: Scalar,
    /// Blinding of `A * S^x`
    pub mu: Scalar,
    /// `t(x) = <l(x), r(x)>`
    pub tprime: Scalar,
    /// `g^l(x) * h'^r(x)`, the commitment opened by the inner-product proof
    pub commit: GroupElement,
    pub inner_product_proof: InnerProductProof,
    pub params: RangeProofSetupParams,
}

impl RangeProof {
    /// Bit width this proof covers
    pub fn bit_length(&self) -> usize {
        self.params.n
    }

    /// Check the carried parameters before any of them is used for sizing.
    pub fn validate_structure(&self) -> BulletproofsResult<()> {
        let n = self.params.n;
        if n == 0 || n > MAX_BIT_LENGTH || !is_power_of_two(n as u64) {
            return Err(BulletproofsError::InvalidProof(format!(
                "Unsupported bit length {n}"
            )));
        }
        for len in [self.params.g_vec.len(), self.params.h_vec.len()] {
            if len != n {
                return Err(BulletproofsError::length_mismatch(n, len));
            }
        }

        Ok(())
    }

    /// Group elements in the proof body, excluding the public parameters
    pub fn size_group_elements(&self) -> usize {
        // V, A, S, T1, T2, commit
        6 + self.inner_product_proof.size_group_elements()
    }
}

#[cfg(test)]
mod tests {
    use crate::{prove, setup};
    use bulletproofs_core::{utils::random_scalar, BulletproofsError};
    use rand::thread_rng;

    #[test]
    fn test_validate_structure() {
        let mut rng = thread_rng();
        let params = setup(1 << 4).unwrap();
        let gamma = random_scalar(&mut rng).unwrap();
        let proof = prove(3, gamma, params.commit(3, gamma), &params, &mut rng).unwrap();
        assert!(proof.validate_structure().is_ok());

        for n in [0usize, 3, 64, usize::MAX / 2] {
            let mut forged = proof.clone();
            forged.params.n = n;
            assert!(matches!(
                forged.validate_structure(),
                Err(BulletproofsError::InvalidProof(_))
            ));
        }

        let mut forged = proof.clone();
        forged.params.h_vec.truncate(2);
        assert_eq!(
            forged.validate_structure(),
            Err(BulletproofsError::length_mismatch(4, 2))
        );
    }
}
