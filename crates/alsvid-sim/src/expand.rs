//! Embedding local gates into the full 2ⁿ×2ⁿ operator space.
//!
//! Single-qubit gates are embedded as an ordered Kronecker product of `n`
//! factors, one per qubit from qubit 0 (most significant) to qubit `n-1`
//! (least significant). CNOT and SWAP are not tensor products over a fixed
//! bipartition, so their operators are built directly as basis-index
//! permutation matrices.

use ndarray::{Array2, linalg::kron};
use num_complex::Complex64;

use alsvid_ir::{Instruction, QubitId};

use crate::catalog::{LocalOperator, local_operator};
use crate::error::SimResult;

/// Produce the full-register operator for one instruction.
///
/// Validates the instruction's qubit specification against the register
/// width before constructing anything.
pub fn expand(instruction: &Instruction, num_qubits: u32) -> SimResult<Array2<Complex64>> {
    instruction.validate(num_qubits)?;

    Ok(match local_operator(&instruction.kind) {
        LocalOperator::Single(local) => embed_single(&local, instruction.qubits[0], num_qubits),
        LocalOperator::Permutation => match instruction.kind {
            alsvid_ir::GateKind::Cnot => {
                cnot_matrix(num_qubits, instruction.qubits[0], instruction.qubits[1])
            }
            alsvid_ir::GateKind::Swap => {
                swap_matrix(num_qubits, instruction.qubits[0], instruction.qubits[1])
            }
            _ => unreachable!("only CNOT and SWAP take the permutation path"),
        },
    })
}

/// The single 1-bit mask for `qubit` under the MSB-first convention.
#[inline]
fn bit_mask(qubit: QubitId, num_qubits: u32) -> usize {
    1 << (num_qubits - 1 - qubit.0)
}

/// Tensor-product embedding of a 2×2 operator at the target position.
///
/// Factor order must match the bit-significance convention: qubit 0 is the
/// leftmost Kronecker factor. Getting this order wrong does not fail — it
/// silently permutes probabilities across qubits.
fn embed_single(local: &Array2<Complex64>, target: QubitId, num_qubits: u32) -> Array2<Complex64> {
    let identity = Array2::<Complex64>::eye(2);
    let mut full = Array2::<Complex64>::eye(1);
    for q in 0..num_qubits {
        full = if QubitId(q) == target {
            kron(&full, local)
        } else {
            kron(&full, &identity)
        };
    }
    full
}

/// CNOT as an explicit permutation matrix.
///
/// For each basis index `i` (column), the row is `i` with the target bit
/// flipped when the control bit of `i` is set, else `i` itself. Exactly one
/// 1 per row and column.
fn cnot_matrix(num_qubits: u32, control: QubitId, target: QubitId) -> Array2<Complex64> {
    let dim = 1usize << num_qubits;
    let control_mask = bit_mask(control, num_qubits);
    let target_mask = bit_mask(target, num_qubits);

    let mut matrix = Array2::<Complex64>::zeros((dim, dim));
    for col in 0..dim {
        let row = if col & control_mask != 0 {
            col ^ target_mask
        } else {
            col
        };
        matrix[[row, col]] = Complex64::new(1.0, 0.0);
    }
    matrix
}

/// SWAP as an explicit permutation matrix: exchanges the two qubits' bits
/// in every basis index where they differ.
fn swap_matrix(num_qubits: u32, q1: QubitId, q2: QubitId) -> Array2<Complex64> {
    let dim = 1usize << num_qubits;
    let mask1 = bit_mask(q1, num_qubits);
    let mask2 = bit_mask(q2, num_qubits);

    let mut matrix = Array2::<Complex64>::zeros((dim, dim));
    for col in 0..dim {
        let b1 = col & mask1 != 0;
        let b2 = col & mask2 != 0;
        let row = if b1 != b2 { col ^ mask1 ^ mask2 } else { col };
        matrix[[row, col]] = Complex64::new(1.0, 0.0);
    }
    matrix
}

#[cfg(test)]
mod tests {
    use super::*;
    use alsvid_ir::GateKind;

    fn assert_permutation(m: &Array2<Complex64>) {
        let (rows, cols) = m.dim();
        assert_eq!(rows, cols);
        for col in 0..cols {
            let ones = (0..rows)
                .filter(|&row| (m[[row, col]] - Complex64::new(1.0, 0.0)).norm() < 1e-15)
                .count();
            let zeros = (0..rows).filter(|&row| m[[row, col]].norm() < 1e-15).count();
            assert_eq!(ones, 1, "column {col} must have exactly one 1");
            assert_eq!(zeros, rows - 1);
        }
    }

    #[test]
    fn test_embed_x_on_qubit0_msb() {
        // X on qubit 0 of a 2-qubit register maps |00⟩ → |10⟩ (index 2).
        let inst = Instruction::single(GateKind::X, QubitId(0));
        let u = expand(&inst, 2).unwrap();
        assert!((u[[2, 0]] - Complex64::new(1.0, 0.0)).norm() < 1e-15);
        assert!(u[[1, 0]].norm() < 1e-15);
    }

    #[test]
    fn test_embed_x_on_qubit1_lsb() {
        // X on qubit 1 flips the least significant bit: |00⟩ → |01⟩.
        let inst = Instruction::single(GateKind::X, QubitId(1));
        let u = expand(&inst, 2).unwrap();
        assert!((u[[1, 0]] - Complex64::new(1.0, 0.0)).norm() < 1e-15);
        assert!(u[[2, 0]].norm() < 1e-15);
    }

    #[test]
    fn test_cnot_permutation_structure() {
        let inst = Instruction::pair(GateKind::Cnot, QubitId(0), QubitId(2));
        let u = expand(&inst, 3).unwrap();
        assert_permutation(&u);
    }

    #[test]
    fn test_cnot_control_low_leaves_state() {
        // Control bit 0 in every basis index below 2^(n-1): identity action.
        let inst = Instruction::pair(GateKind::Cnot, QubitId(0), QubitId(1));
        let u = expand(&inst, 2).unwrap();
        for col in 0..2 {
            assert!((u[[col, col]] - Complex64::new(1.0, 0.0)).norm() < 1e-15);
        }
        // Control set: |10⟩ ↔ |11⟩.
        assert!((u[[3, 2]] - Complex64::new(1.0, 0.0)).norm() < 1e-15);
        assert!((u[[2, 3]] - Complex64::new(1.0, 0.0)).norm() < 1e-15);
    }

    #[test]
    fn test_swap_exchanges_bits() {
        let inst = Instruction::pair(GateKind::Swap, QubitId(0), QubitId(1));
        let u = expand(&inst, 2).unwrap();
        assert_permutation(&u);
        // |10⟩ (index 2) ↔ |01⟩ (index 1); |00⟩ and |11⟩ fixed.
        assert!((u[[1, 2]] - Complex64::new(1.0, 0.0)).norm() < 1e-15);
        assert!((u[[2, 1]] - Complex64::new(1.0, 0.0)).norm() < 1e-15);
        assert!((u[[0, 0]] - Complex64::new(1.0, 0.0)).norm() < 1e-15);
        assert!((u[[3, 3]] - Complex64::new(1.0, 0.0)).norm() < 1e-15);
    }

    #[test]
    fn test_expand_rejects_bad_operands() {
        let inst = Instruction::pair(GateKind::Cnot, QubitId(1), QubitId(1));
        assert!(expand(&inst, 2).is_err());

        let inst = Instruction::single(GateKind::H, QubitId(4));
        assert!(expand(&inst, 2).is_err());
    }
}
