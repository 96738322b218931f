//! # Bulletproofs Range Proofs
//!
//! This crate implements range proofs using the inner product argument.
//! Range proofs allow proving that a committed value lies within a specified range
//! without revealing the actual value.
//!
//! ## Mathematical Background
//!
//! A range proof for `V = g^v * h^gamma` with `v` in `[0, 2^n)` works by:
//!
//! 1. **Bit Decomposition**: Express `v = Σ(a_L[i] * 2^i)` and set `a_R = a_L - 1`,
//!    so that `a_L ∘ a_R = 0` holds exactly when every `a_L[i]` is a bit
//! 2. **Vector Commitment**: Commit to `(a_L, a_R)` as `A` and to random
//!    blinding vectors `(s_L, s_R)` as `S`
//! 3. **Polynomial**: Challenges `y, z` turn the constraints into the constant
//!    term of `t(X) = <l(X), r(X)>`, whose other coefficients are committed as
//!    `T1` and `T2`
//! 4. **Inner Product**: At the challenge `x` the prover reveals `t(x)` and proves
//!    `<l(x), r(x)> = t(x)` with the inner product argument over `(g, h')`,
//!    where `h'_i = h_i^{y^{-i}}`
//!
//! All challenges are derived by hashing the preceding commitments, so the
//! proof is non-interactive.
//!
//! ## Usage
//!
//! ```rust
//! use bulletproofs_range::{prove, setup};
//! use bulletproofs_core::utils::random_scalar;
//! use rand::thread_rng;
//!
//! let mut rng = thread_rng();
//!
//! // Prove that 42 lies in [0, 2^8)
//! let params = setup(1 << 8).unwrap();
//! let gamma = random_scalar(&mut rng).unwrap();
//! let v = params.commit(42, gamma);
//!
//! let proof = prove(42, gamma, v, &params, &mut rng).unwrap();
//! assert!(proof.verify());
//! ```

pub mod proof;
pub mod prover;
pub mod setup;
pub mod verifier;


pub use bulletproofs_core::{BulletproofsError, BulletproofsResult};
pub use proof::*;
pub use prover::*;
pub use setup::*;
pub use verifier::*;
