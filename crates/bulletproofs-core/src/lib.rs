//! # Bulletproofs Core
//!
//! This crate provides the foundational types and utilities shared by the
//! inner-product argument and the range proof built on top of it:
//!
//! - Group elements over Ristretto255 and deterministic generator derivation
//! - Scalar vector arithmetic and multi-scalar multiplication
//! - Hash-based Fiat-Shamir challenge derivation
//! - Fixed protocol configuration and error types
//!
//! ## Mathematical Background
//!
//! Bulletproofs operate over an elliptic curve group of prime order with generators:
//! - `G`: primary generator for commitments
//! - `H`: secondary generator for blinding
//! - `{g_i}`: vector of generators for left commitments
//! - `{h_i}`: vector of generators for right commitments
//! - `u`: generator for inner product
//!
//! The core mathematical relationship is proving knowledge of vectors `a, b` such that:
//! ```text
//! P = g^a * h^b * u^<a,b>
//! ```
//! where `<a,b>` denotes the inner product of vectors `a` and `b`.

pub mod config;
pub mod errors;
pub mod generators;
pub mod group;
pub mod transcript;
pub mod utils;

pub use errors::*;
pub use generators::*;
pub use group::*;
pub use transcript::*;

/// Re-export commonly used types from curve25519-dalek
pub use curve25519_dalek::{
    ristretto::{CompressedRistretto, RistrettoPoint},
    scalar::Scalar,
};
