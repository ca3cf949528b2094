//! `alsvid-sim` — dense statevector circuit evaluation.
//!
//! Takes an `alsvid_ir::Circuit`, builds the full 2ⁿ×2ⁿ system unitary by
//! composing each gate's expanded operator, evolves the canonical initial
//! state |0…0⟩ through it, and derives measurement statistics:
//!
//! - **catalog** — canonical 2×2 unitaries for the local gate set
//! - **expand** — embedding into the full operator space (Kronecker
//!   products for single-qubit gates, explicit basis permutations for
//!   CNOT and SWAP)
//! - **evaluate** — operator composition and state evolution
//! - **analyze** — Born-rule probabilities, basis labels, Bloch angles
//!
//! Evaluation is synchronous, purely CPU-bound, and deterministic: the same
//! circuit always produces the same outputs, and nothing is shared between
//! evaluations. Operator construction is O(4ⁿ) in the qubit count, so
//! callers should bound `n` at their boundary.
//!
//! # Quick start
//!
//! ```rust
//! use alsvid_ir::{Circuit, QubitId};
//! use alsvid_sim::{evaluate, probabilities};
//!
//! // Bell pair: |00⟩ → (|00⟩ + |11⟩)/√2
//! let mut circuit = Circuit::new(2).unwrap();
//! circuit.h(QubitId(0)).unwrap();
//! circuit.cnot(QubitId(0), QubitId(1)).unwrap();
//!
//! let evaluation = evaluate(&circuit).unwrap();
//! let probs = probabilities(&evaluation.state);
//! assert!((probs[0] - 0.5).abs() < 1e-12);
//! assert!((probs[3] - 0.5).abs() < 1e-12);
//! ```

pub mod analyze;
pub mod catalog;
pub mod error;
pub mod evaluate;
pub mod expand;

pub use analyze::{BlochAngles, basis_labels, bloch_angles, probabilities};
pub use catalog::{LocalOperator, local_operator};
pub use error::{SimError, SimResult};
pub use evaluate::{Evaluation, evaluate, initial_state, system_unitary};
pub use expand::expand;
