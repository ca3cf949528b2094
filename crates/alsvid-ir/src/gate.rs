//! The supported gate set.

use serde::{Deserialize, Serialize};

/// The closed set of gates the evaluator supports.
///
/// Rotation gates carry their angle (in radians) inside the variant, so a
/// constructed `GateKind` is always fully specified — there is no separate
/// parameter-binding step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GateKind {
    /// Pauli-X gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z gate.
    Z,
    /// S gate (sqrt(Z)).
    S,
    /// Hadamard gate.
    H,
    /// T gate (fourth root of Z).
    T,
    /// Rotation around the X axis.
    Rx(f64),
    /// Rotation around the Y axis.
    Ry(f64),
    /// Rotation around the Z axis.
    Rz(f64),
    /// Controlled-NOT gate (control, target).
    Cnot,
    /// SWAP gate.
    Swap,
}

impl GateKind {
    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            GateKind::X => "x",
            GateKind::Y => "y",
            GateKind::Z => "z",
            GateKind::S => "s",
            GateKind::H => "h",
            GateKind::T => "t",
            GateKind::Rx(_) => "rx",
            GateKind::Ry(_) => "ry",
            GateKind::Rz(_) => "rz",
            GateKind::Cnot => "cnot",
            GateKind::Swap => "swap",
        }
    }

    /// Get the number of qubits this gate operates on.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            GateKind::X
            | GateKind::Y
            | GateKind::Z
            | GateKind::S
            | GateKind::H
            | GateKind::T
            | GateKind::Rx(_)
            | GateKind::Ry(_)
            | GateKind::Rz(_) => 1,

            GateKind::Cnot | GateKind::Swap => 2,
        }
    }

    /// Check if this gate carries a rotation angle.
    pub fn is_parameterized(&self) -> bool {
        matches!(self, GateKind::Rx(_) | GateKind::Ry(_) | GateKind::Rz(_))
    }

    /// The rotation angle, if this gate has one.
    pub fn angle(&self) -> Option<f64> {
        match self {
            GateKind::Rx(theta) | GateKind::Ry(theta) | GateKind::Rz(theta) => Some(*theta),
            _ => None,
        }
    }

    /// Whether this gate is embedded as a full-register basis permutation
    /// rather than a local tensor factor.
    pub fn is_permutation(&self) -> bool {
        matches!(self, GateKind::Cnot | GateKind::Swap)
    }
}
