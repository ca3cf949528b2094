//! Property test: every composed system operator is unitary.

use alsvid_ir::{Circuit, GateKind, Instruction, QubitId};
use alsvid_sim::system_unitary;
use num_complex::Complex64;
use proptest::prelude::*;

/// One valid instruction over a register of the given width (≥ 2).
fn arb_instruction(num_qubits: u32) -> impl Strategy<Value = Instruction> {
    (
        0..11usize,
        0..num_qubits,
        0..num_qubits - 1,
        -6.3f64..6.3,
    )
        .prop_map(move |(kind, q1, q2, theta)| {
            let a = QubitId(q1);
            // Offset trick keeps the second operand distinct from the first.
            let b = QubitId(if q2 >= q1 { q2 + 1 } else { q2 });
            match kind {
                0 => Instruction::single(GateKind::X, a),
                1 => Instruction::single(GateKind::Y, a),
                2 => Instruction::single(GateKind::Z, a),
                3 => Instruction::single(GateKind::S, a),
                4 => Instruction::single(GateKind::H, a),
                5 => Instruction::single(GateKind::T, a),
                6 => Instruction::single(GateKind::Rx(theta), a),
                7 => Instruction::single(GateKind::Ry(theta), a),
                8 => Instruction::single(GateKind::Rz(theta), a),
                9 => Instruction::pair(GateKind::Cnot, a, b),
                _ => Instruction::pair(GateKind::Swap, a, b),
            }
        })
}

fn arb_circuit() -> impl Strategy<Value = Circuit> {
    (2u32..=4).prop_flat_map(|num_qubits| {
        prop::collection::vec(arb_instruction(num_qubits), 0..12).prop_map(move |instructions| {
            let mut circuit = Circuit::new(num_qubits).unwrap();
            for instruction in instructions {
                circuit.push(instruction).unwrap();
            }
            circuit
        })
    })
}

proptest! {
    #[test]
    fn composed_operator_is_unitary(circuit in arb_circuit()) {
        let unitary = system_unitary(&circuit).unwrap();
        let adjoint = unitary.t().mapv(|z| z.conj());
        let product = adjoint.dot(&unitary);

        let dim = circuit.dim();
        for i in 0..dim {
            for j in 0..dim {
                let expected = if i == j {
                    Complex64::new(1.0, 0.0)
                } else {
                    Complex64::new(0.0, 0.0)
                };
                prop_assert!(
                    (product[[i, j]] - expected).norm() < 1e-9,
                    "U†U deviates at ({}, {})", i, j
                );
            }
        }
    }
}
