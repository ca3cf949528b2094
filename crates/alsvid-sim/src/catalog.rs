//! Canonical local unitaries for the supported gate set.

use ndarray::{Array2, arr2};
use num_complex::Complex64;
use std::f64::consts::PI;

use alsvid_ir::GateKind;

/// How a gate acts on the register, as seen by the expander.
#[derive(Debug, Clone, PartialEq)]
pub enum LocalOperator {
    /// A 2×2 unitary on one qubit, embedded by tensor product.
    Single(Array2<Complex64>),
    /// A full-register basis permutation (CNOT, SWAP); the expander builds
    /// the 2ⁿ×2ⁿ matrix directly from the instruction's operands.
    Permutation,
}

/// The canonical operator for a gate kind.
///
/// Total over the closed gate set: every single-qubit kind yields its fixed
/// (or angle-dependent) 2×2 matrix, and the two entangling kinds are
/// flagged for the permutation path.
pub fn local_operator(kind: &GateKind) -> LocalOperator {
    let zero = Complex64::new(0.0, 0.0);
    let one = Complex64::new(1.0, 0.0);

    let matrix = match kind {
        GateKind::X => arr2(&[[zero, one], [one, zero]]),
        GateKind::Y => arr2(&[
            [zero, Complex64::new(0.0, -1.0)],
            [Complex64::new(0.0, 1.0), zero],
        ]),
        GateKind::Z => arr2(&[[one, zero], [zero, Complex64::new(-1.0, 0.0)]]),
        GateKind::S => arr2(&[[one, zero], [zero, Complex64::new(0.0, 1.0)]]),
        GateKind::H => {
            let inv_sqrt_2 = Complex64::new(1.0 / 2.0_f64.sqrt(), 0.0);
            arr2(&[[inv_sqrt_2, inv_sqrt_2], [inv_sqrt_2, -inv_sqrt_2]])
        }
        GateKind::T => arr2(&[[one, zero], [zero, Complex64::from_polar(1.0, PI / 4.0)]]),
        GateKind::Rx(theta) => {
            let cos = Complex64::new((theta / 2.0).cos(), 0.0);
            let neg_i_sin = Complex64::new(0.0, -(theta / 2.0).sin());
            arr2(&[[cos, neg_i_sin], [neg_i_sin, cos]])
        }
        GateKind::Ry(theta) => {
            let cos = Complex64::new((theta / 2.0).cos(), 0.0);
            let sin = Complex64::new((theta / 2.0).sin(), 0.0);
            arr2(&[[cos, -sin], [sin, cos]])
        }
        GateKind::Rz(theta) => arr2(&[
            [Complex64::from_polar(1.0, -theta / 2.0), zero],
            [zero, Complex64::from_polar(1.0, theta / 2.0)],
        ]),
        GateKind::Cnot | GateKind::Swap => return LocalOperator::Permutation,
    };

    LocalOperator::Single(matrix)
}
