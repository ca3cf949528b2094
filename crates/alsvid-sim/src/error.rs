//! Error types for the sim crate.

use thiserror::Error;

/// Errors produced during operator expansion or circuit evaluation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SimError {
    /// An instruction carried a malformed qubit specification.
    #[error("Circuit IR error: {0}")]
    Ir(#[from] alsvid_ir::IrError),
}

/// Result type for evaluation operations.
pub type SimResult<T> = Result<T, SimError>;
