//! Instructions combining a gate with its qubit operands.

use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::gate::GateKind;
use crate::qubit::QubitId;

/// A gate applied to specific qubits.
///
/// For [`GateKind::Cnot`] the operand order is `(control, target)`; for
/// [`GateKind::Swap`] the two operands are symmetric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    /// The gate being applied.
    pub kind: GateKind,
    /// Qubits this gate operates on, in operand order.
    pub qubits: Vec<QubitId>,
}

impl Instruction {
    /// Create an instruction from a gate and its operands.
    pub fn new(kind: GateKind, qubits: impl IntoIterator<Item = QubitId>) -> Self {
        Self {
            kind,
            qubits: qubits.into_iter().collect(),
        }
    }

    /// Create a single-qubit gate instruction.
    pub fn single(kind: GateKind, qubit: QubitId) -> Self {
        Self::new(kind, [qubit])
    }

    /// Create a two-qubit gate instruction.
    pub fn pair(kind: GateKind, q1: QubitId, q2: QubitId) -> Self {
        Self::new(kind, [q1, q2])
    }

    /// Check this instruction against a circuit of the given width.
    ///
    /// Verifies the operand count matches the gate arity, every index lies
    /// in `[0, num_qubits)`, and two-qubit gates name two distinct qubits.
    pub fn validate(&self, num_qubits: u32) -> IrResult<()> {
        let expected = self.kind.num_qubits();
        let got = u32::try_from(self.qubits.len()).unwrap_or(u32::MAX);
        if got != expected {
            return Err(IrError::QubitCountMismatch {
                gate_name: self.kind.name(),
                expected,
                got,
            });
        }
        for &qubit in &self.qubits {
            if qubit.0 >= num_qubits {
                return Err(IrError::QubitOutOfRange {
                    qubit,
                    num_qubits,
                    gate_name: self.kind.name(),
                });
            }
        }
        if expected == 2 && self.qubits[0] == self.qubits[1] {
            return Err(IrError::DuplicateQubit {
                qubit: self.qubits[0],
                gate_name: self.kind.name(),
            });
        }
        Ok(())
    }
}
