//! High-level circuit builder API.

use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::gate::GateKind;
use crate::instruction::Instruction;
use crate::qubit::QubitId;

/// An ordered sequence of gates over a fixed-width qubit register.
///
/// Gates are applied left to right: the first instruction acts first on the
/// initial state. Instructions are validated as they are appended, so a
/// constructed `Circuit` never carries an out-of-range or degenerate
/// operand list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    /// Number of qubits in the register.
    num_qubits: u32,
    /// Instructions in application order.
    instructions: Vec<Instruction>,
}

impl Circuit {
    /// Create a new empty circuit over `num_qubits` qubits.
    pub fn new(num_qubits: u32) -> IrResult<Self> {
        if num_qubits == 0 {
            return Err(IrError::EmptyRegister(0));
        }
        Ok(Self {
            num_qubits,
            instructions: vec![],
        })
    }

    /// Get the number of qubits.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// The dimension of the state space, `2^num_qubits`.
    #[inline]
    pub fn dim(&self) -> usize {
        1 << self.num_qubits
    }

    /// Number of instructions in the circuit.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Whether the circuit contains no instructions.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// The instructions in application order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Append a validated instruction.
    pub fn push(&mut self, instruction: Instruction) -> IrResult<&mut Self> {
        instruction.validate(self.num_qubits)?;
        self.instructions.push(instruction);
        Ok(self)
    }

    // =========================================================================
    // Single-qubit gates
    // =========================================================================

    /// Apply Pauli-X gate.
    pub fn x(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::single(GateKind::X, qubit))
    }

    /// Apply Pauli-Y gate.
    pub fn y(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::single(GateKind::Y, qubit))
    }

    /// Apply Pauli-Z gate.
    pub fn z(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::single(GateKind::Z, qubit))
    }

    /// Apply S gate.
    pub fn s(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::single(GateKind::S, qubit))
    }

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::single(GateKind::H, qubit))
    }

    /// Apply T gate.
    pub fn t(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::single(GateKind::T, qubit))
    }

    /// Apply rotation around X.
    pub fn rx(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::single(GateKind::Rx(theta), qubit))
    }

    /// Apply rotation around Y.
    pub fn ry(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::single(GateKind::Ry(theta), qubit))
    }

    /// Apply rotation around Z.
    pub fn rz(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::single(GateKind::Rz(theta), qubit))
    }

    // =========================================================================
    // Two-qubit gates
    // =========================================================================

    /// Apply CNOT gate.
    pub fn cnot(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::pair(GateKind::Cnot, control, target))
    }

    /// Apply SWAP gate.
    pub fn swap(&mut self, q1: QubitId, q2: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::pair(GateKind::Swap, q1, q2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_chain() {
        let mut circuit = Circuit::new(2).unwrap();
        circuit.h(QubitId(0)).unwrap();
        circuit.cnot(QubitId(0), QubitId(1)).unwrap();

        assert_eq!(circuit.num_qubits(), 2);
        assert_eq!(circuit.dim(), 4);
        assert_eq!(circuit.len(), 2);
        assert_eq!(circuit.instructions()[0].kind, GateKind::H);
    }

    #[test]
    fn test_zero_qubits_rejected() {
        assert!(matches!(Circuit::new(0), Err(IrError::EmptyRegister(0))));
    }

    #[test]
    fn test_push_rejects_bad_operands() {
        let mut circuit = Circuit::new(1).unwrap();
        assert!(circuit.x(QubitId(1)).is_err());
        assert!(circuit.is_empty());
    }
}
