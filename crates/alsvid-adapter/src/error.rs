//! Error types for request decoding and the simulate entry point.

use thiserror::Error;

/// Errors surfaced to the network layer.
///
/// All of these mean the request was malformed or unsupported, not that
/// anything transient failed — none are retryable, and the core never logs
/// or recovers from them.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AdapterError {
    /// The gate kind string is not in the supported set.
    #[error("Unknown gate type: {0}")]
    UnknownGate(String),

    /// A rotation gate arrived without an angle in either field.
    #[error("Gate '{gate}' requires an angle but neither thetaValue nor theta was supplied")]
    MissingParameter {
        /// The gate kind as it appeared on the wire.
        gate: String,
    },

    /// The angle expression does not fit the closed arithmetic grammar.
    #[error("Cannot parse angle expression at position {position}: {message}")]
    AngleParse {
        /// Byte offset of the offending token.
        position: usize,
        /// What went wrong.
        message: String,
    },

    /// A gate record is missing one of its qubit operand fields.
    #[error("Gate '{gate}' is missing required operand field '{field}'")]
    MissingOperand {
        /// The gate kind as it appeared on the wire.
        gate: String,
        /// The absent wire field.
        field: &'static str,
    },

    /// Qubit count exceeds the boundary limit (operator construction is
    /// O(4ⁿ), so the adapter refuses oversized registers up front).
    #[error("Circuit requests {requested} qubits but the limit is {limit}")]
    TooManyQubits {
        /// Requested register width.
        requested: u32,
        /// Configured maximum.
        limit: u32,
    },

    /// Malformed qubit specification caught at circuit construction.
    #[error("Circuit error: {0}")]
    Ir(#[from] alsvid_ir::IrError),

    /// Malformed qubit specification caught during evaluation.
    #[error("Evaluation error: {0}")]
    Sim(#[from] alsvid_sim::SimError),
}

/// Result type for adapter operations.
pub type AdapterResult<T> = Result<T, AdapterError>;
