//! Error types for Bulletproofs operations
//!
//! A proof that fails to verify is not an error: verifiers report it as
//! `false`. The variants here cover bad inputs and failing collaborators.

use thiserror::Error;

/// Main error type for Bulletproofs operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BulletproofsError {
    /// The requested range cannot be proven with this construction
    #[error("Invalid range end {range_end}: {reason}")]
    InvalidRange { range_end: u64, reason: String },

    /// Vector length mismatch
    #[error("Vector length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Invalid parameters provided
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// Invalid proof format or structure
    #[error("Invalid proof format: {0}")]
    InvalidProof(String),

    /// The randomness source could not produce bytes
    #[error("Randomness source failure: {0}")]
    Randomness(String),
}

impl BulletproofsError {
    /// Shorthand for a length check that failed.
    pub fn length_mismatch(expected: usize, actual: usize) -> Self {
        Self::LengthMismatch { expected, actual }
    }
}

/// Result type for Bulletproofs operations
pub type BulletproofsResult<T> = Result<T, BulletproofsError>;
