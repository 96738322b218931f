//! Inner Product Argument proof structure

use crate::InnerProductParams;
use bulletproofs_core::{utils::log2_exact, BulletproofsError, BulletproofsResult, GroupElement};
use curve25519_dalek::scalar::Scalar;
use serde::{Deserialize, Serialize};

/// An inner product argument proof
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InnerProductProof {
    /// Length of the original vectors
    pub n: usize,
    /// L values from each folding round (log_2(n) elements)
    pub l_vec: Vec<GroupElement>,
    /// R values from each folding round (log_2(n) elements)
    pub r_vec: Vec<GroupElement>,
    /// Inner-product generator after scaling by the binding challenge
    pub u: GroupElement,
    /// Commitment after the last fold
    pub p: GroupElement,
    /// Final folded generators
    pub g: GroupElement,
    pub h: GroupElement,
    /// Final scalar value a
    pub a: Scalar,
    /// Final scalar value b
    pub b: Scalar,
    /// Instance parameters; `params.p` is the commitment before folding
    pub params: InnerProductParams,
}

impl InnerProductProof {
    /// Get the number of folding rounds
    pub fn num_rounds(&self) -> usize {
        self.l_vec.len()
    }

    /// Number of group elements carried by the L/R rounds
    pub fn size_group_elements(&self) -> usize {
        self.l_vec.len() + self.r_vec.len()
    }

    /// Validate proof structure
    pub fn validate_structure(&self) -> BulletproofsResult<()> {
        if self.l_vec.len() != self.r_vec.len() {
            return Err(BulletproofsError::InvalidProof(
                "L and R vectors must have the same length".to_string(),
            ));
        }

        let rounds = log2_exact(self.n as u64).ok_or_else(|| {
            BulletproofsError::InvalidProof(format!(
                "Vector length {} is not a power of two",
                self.n
            ))
        })?;
        if self.num_rounds() != rounds as usize {
            return Err(BulletproofsError::InvalidProof(format!(
                "Expected {} rounds for vector length {}, got {}",
                rounds,
                self.n,
                self.num_rounds()
            )));
        }

        if self.params.n != self.n {
            return Err(BulletproofsError::length_mismatch(self.n, self.params.n));
        }
        for len in [self.params.g_vec.len(), self.params.h_vec.len()] {
            if len != self.n {
                return Err(BulletproofsError::length_mismatch(self.n, len));
            }
        }

        Ok(())
    }
}
