//! Serde types for the decoded request/response contract.
//!
//! Field names mirror what the circuit editor actually sends; the adapter
//! defines no wire format beyond these decoded values.

use serde::{Deserialize, Serialize};

/// One circuit description, decoded from a request payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CircuitRequest {
    /// Number of qubits in the register.
    pub qubits: u32,
    /// Gate records in application order.
    pub gates: Vec<GateRecord>,
}

/// One gate record as it appears on the wire.
///
/// Which fields are meaningful depends on the kind: single-qubit gates use
/// `q`; CNOT uses `controls` (first entry) plus `q` as the target; SWAP
/// uses `twoQubits`. Rotation gates take `thetaValue` when present and
/// fall back to parsing `theta`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateRecord {
    /// Gate kind identifier, e.g. `"H"`, `"RX"`, `"CNOT"`.
    #[serde(rename = "type")]
    pub kind: String,

    /// Target qubit index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q: Option<u32>,

    /// Textual angle expression (rotation gates).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theta: Option<String>,

    /// Numeric angle; takes precedence over `theta`.
    #[serde(rename = "thetaValue", default, skip_serializing_if = "Option::is_none")]
    pub theta_value: Option<f64>,

    /// Control qubit indices (CNOT); only the first is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controls: Option<Vec<u32>>,

    /// The two qubits of a SWAP.
    #[serde(rename = "twoQubits", default, skip_serializing_if = "Option::is_none")]
    pub two_qubits: Option<Vec<u32>>,

    /// Editor bookkeeping; carried on the wire but ignored here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
}

/// Numeric results of one evaluation, ready for encoding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResponse {
    /// `(re, im)` pairs, one per basis index in ascending order.
    pub state_vector: Vec<(f64, f64)>,
    /// Binary basis labels matching `state_vector` order, qubit 0 leftmost.
    pub basis_vectors: Vec<String>,
    /// Born-rule probability per basis index.
    pub probabilities: Vec<f64>,
    /// `(theta, phi)` per qubit.
    pub bloch_angles: Vec<(f64, f64)>,
}
