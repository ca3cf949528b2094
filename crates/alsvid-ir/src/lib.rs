//! Alsvid circuit intermediate representation.
//!
//! This crate provides the data structures for describing a quantum circuit
//! to be evaluated by `alsvid-sim`: qubit identifiers, a closed set of
//! supported gates, instructions, and the [`Circuit`] builder.
//!
//! # Conventions
//!
//! Qubit 0 is the **most significant** bit of every basis index: in the
//! binary label of a basis state, qubit 0 is the leftmost character and
//! qubit `n-1` the rightmost. Every consumer of this IR (operator
//! expansion, analysis, labelling) applies this convention uniformly.
//!
//! # Example: preparing a Bell pair description
//!
//! ```rust
//! use alsvid_ir::{Circuit, QubitId};
//!
//! let mut circuit = Circuit::new(2).unwrap();
//! circuit.h(QubitId(0)).unwrap();
//! circuit.cnot(QubitId(0), QubitId(1)).unwrap();
//!
//! assert_eq!(circuit.num_qubits(), 2);
//! assert_eq!(circuit.len(), 2);
//! ```
//!
//! A `Circuit` is built fresh from one request, is immutable once handed to
//! the evaluator, and is discarded afterwards — nothing in this crate holds
//! process-wide state.

pub mod circuit;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod qubit;

pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::GateKind;
pub use instruction::Instruction;
pub use qubit::QubitId;
