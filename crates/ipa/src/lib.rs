//! # Inner Product Argument (IPA)
//!
//! This crate implements the inner product argument, which is the core component
//! of Bulletproofs. The IPA allows proving knowledge of vectors `a` and `b` such that:
//!
//! ```text
//! P = g^a * h^b * u^<a,b>
//! ```
//!
//! ## Mathematical Background
//!
//! The inner product argument uses a recursive folding approach:
//!
//! 1. **Binding**: A challenge `x = H(g, h, P, c)` gives `u' = u^x` and
//!    `P' = P * u'^c`, tying the claimed product `c` into the commitment.
//!
//! 2. **Recursive Case**: For vectors of length `n > 1`:
//!    - Split vectors: `a = (a_L, a_R)`, `b = (b_L, b_R)`
//!    - Compute cross terms:
//!      - `L = g_R^{a_L} * h_L^{b_R} * u^{<a_L, b_R>}`
//!      - `R = g_L^{a_R} * h_R^{b_L} * u^{<a_R, b_L>}`
//!    - Get challenge `x = H(L, R)` from Fiat-Shamir
//!    - Fold vectors:
//!      - `a' = a_L * x + a_R * x^{-1}`
//!      - `b' = b_L * x^{-1} + b_R * x`
//!    - Fold generators:
//!      - `g' = g_L^{x^{-1}} * g_R^x`
//!      - `h' = h_L^x * h_R^{x^{-1}}`
//!    - Fold the commitment: `P' = L^{x^2} * P * R^{x^{-2}}`
//!
//! 3. **Base Case**: For vectors of length 1, the proof carries the values `a` and `b`.
//!
//! The proof consists of all the L and R values from each folding round.
//!
//! ## Usage
//!
//! ```rust
//! use bulletproofs_ipa::{commit_inner_product, prove_inner_product, setup_inner_product};
//! use bulletproofs_core::{utils::scalar_product, Scalar};
//!
//! let a: Vec<Scalar> = (1..=4u64).map(Scalar::from).collect();
//! let b: Vec<Scalar> = (5..=8u64).map(Scalar::from).collect();
//! let c = scalar_product(&a, &b).unwrap();
//!
//! let params = setup_inner_product(None, None, None, c, 4).unwrap();
//! let p = commit_inner_product(&params.g_vec, &params.h_vec, &a, &b).unwrap();
//! let proof = prove_inner_product(&a, &b, p, &params).unwrap();
//!
//! assert!(proof.verify());
//! ```

pub mod folding;
pub mod params;
pub mod proof;
pub mod prover;
pub mod verifier;

pub use bulletproofs_core::{BulletproofsError, BulletproofsResult};
pub use params::*;
pub use proof::*;
pub use prover::*;
