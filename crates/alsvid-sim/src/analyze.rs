//! Measurement statistics derived from a final amplitude vector.

use ndarray::Array1;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Born-rule probabilities: `p_i = |amplitude_i|²` per basis index.
///
/// Sums to 1 within floating-point tolerance for any unitarily evolved
/// state.
pub fn probabilities(state: &Array1<Complex64>) -> Vec<f64> {
    state.iter().map(Complex64::norm_sqr).collect()
}

/// Binary labels for every basis index, in ascending index order.
///
/// Labels are `num_qubits` characters wide, most significant bit first, so
/// qubit 0 is the leftmost character.
pub fn basis_labels(num_qubits: u32) -> Vec<String> {
    let width = num_qubits as usize;
    (0..1usize << num_qubits)
        .map(|i| format!("{i:0width$b}"))
        .collect()
}

/// Polar and azimuthal angles of one qubit on the Bloch sphere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlochAngles {
    /// Polar angle θ ∈ [0, π].
    pub theta: f64,
    /// Azimuthal angle φ.
    pub phi: f64,
}

/// Per-qubit Bloch angles from the full amplitude vector.
///
/// For each qubit the amplitudes are reduced by summation: α over every
/// basis index where the qubit's bit is 0, β over every index where it is
/// 1. Then θ = 2·acos(|α|) (0 when β vanishes, π when α vanishes) and
/// φ = arg β − arg α.
///
/// This reduction is exact only when the qubit is unentangled from the rest
/// of the register. For entangled states it still yields a pair of angles,
/// but they are a visualization approximation, not a partial-trace reduced
/// state; |α| is clamped to 1 so such inputs stay finite.
pub fn bloch_angles(state: &Array1<Complex64>, num_qubits: u32) -> Vec<BlochAngles> {
    let mut angles = Vec::with_capacity(num_qubits as usize);

    for qubit in 0..num_qubits {
        let mask = 1usize << (num_qubits - 1 - qubit);
        let mut alpha = Complex64::new(0.0, 0.0);
        let mut beta = Complex64::new(0.0, 0.0);
        for (i, amplitude) in state.iter().enumerate() {
            if i & mask == 0 {
                alpha += amplitude;
            } else {
                beta += amplitude;
            }
        }

        let theta = if beta.norm() == 0.0 {
            0.0
        } else if alpha.norm() == 0.0 {
            PI
        } else {
            2.0 * alpha.norm().min(1.0).acos()
        };
        let phi = beta.arg() - alpha.arg();

        angles.push(BlochAngles { theta, phi });
    }

    angles
}
