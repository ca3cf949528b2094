//! Composing gate operators and evolving the initial state.

use ndarray::{Array1, Array2};
use num_complex::Complex64;
use tracing::debug;

use alsvid_ir::Circuit;

use crate::error::SimResult;
use crate::expand::expand;

/// Outputs of one circuit evaluation.
///
/// The composed operator is exposed alongside the statevector: downstream
/// consumers only need the state, but the operator is what unitarity checks
/// and tests inspect.
#[derive(Debug, Clone)]
pub struct Evaluation {
    /// The composed system unitary `U_total`.
    pub unitary: Array2<Complex64>,
    /// The final amplitude vector `U_total · |0…0⟩`.
    pub state: Array1<Complex64>,
}

/// Evaluate a circuit: compose all gate operators and apply the result to
/// the canonical initial state.
///
/// Pure and deterministic — identical input circuits always yield identical
/// outputs, and nothing is retained between calls.
pub fn evaluate(circuit: &Circuit) -> SimResult<Evaluation> {
    let unitary = system_unitary(circuit)?;
    let state = unitary.dot(&initial_state(circuit.num_qubits()));
    Ok(Evaluation { unitary, state })
}

/// Fold the expanded gate operators into one system transformation.
///
/// Starting from the identity, each gate in declaration order left-
/// multiplies the running product (`U ← U_gate · U`), so earlier gates end
/// up as right-most factors — conventional circuit-composition order.
pub fn system_unitary(circuit: &Circuit) -> SimResult<Array2<Complex64>> {
    debug!(
        num_qubits = circuit.num_qubits(),
        num_gates = circuit.len(),
        "composing system unitary"
    );

    let mut unitary = Array2::<Complex64>::eye(circuit.dim());
    for instruction in circuit.instructions() {
        let gate = expand(instruction, circuit.num_qubits())?;
        unitary = gate.dot(&unitary);
    }
    Ok(unitary)
}

/// The canonical initial state |0…0⟩: amplitude 1 at basis index 0.
pub fn initial_state(num_qubits: u32) -> Array1<Complex64> {
    let mut state = Array1::<Complex64>::zeros(1 << num_qubits);
    state[0] = Complex64::new(1.0, 0.0);
    state
}
