//! Error types for the IR crate.

use crate::qubit::QubitId;
use thiserror::Error;

/// Errors that can occur when describing a circuit.
///
/// These are the malformed-qubit-specification failures: wrong operand
/// count, out-of-range index, or a degenerate control/target or swap pair.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Qubit index is outside `[0, num_qubits)`.
    #[error("Qubit {qubit} out of range for a {num_qubits}-qubit circuit (gate: {gate_name})")]
    QubitOutOfRange {
        /// The offending qubit.
        qubit: QubitId,
        /// Width of the circuit.
        num_qubits: u32,
        /// Name of the gate being applied.
        gate_name: &'static str,
    },

    /// Gate was given the wrong number of qubit operands.
    #[error("Gate '{gate_name}' requires {expected} qubit(s), got {got}")]
    QubitCountMismatch {
        /// Name of the gate.
        gate_name: &'static str,
        /// Expected number of operands.
        expected: u32,
        /// Actual number of operands provided.
        got: u32,
    },

    /// The same qubit was used twice in one two-qubit gate.
    #[error("Duplicate qubit {qubit} in operands of gate '{gate_name}'")]
    DuplicateQubit {
        /// The duplicate qubit.
        qubit: QubitId,
        /// Name of the gate.
        gate_name: &'static str,
    },

    /// A circuit must contain at least one qubit.
    #[error("Circuit must have at least 1 qubit, got {0}")]
    EmptyRegister(u32),
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
