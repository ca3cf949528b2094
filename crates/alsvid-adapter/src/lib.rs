//! `alsvid-adapter` — the decoded request/response contract.
//!
//! The network layer (HTTP framework, CORS, static assets) lives elsewhere;
//! this crate owns everything between a decoded JSON payload and the
//! numeric results: wire types, gate-record decoding, the closed-grammar
//! angle-expression parser, and the [`simulate`] entry point.
//!
//! `simulate` is a pure function — each call builds its own circuit and
//! operators and shares nothing, so concurrent requests need no locking.
//!
//! ```rust
//! use alsvid_adapter::{CircuitRequest, simulate};
//!
//! let request: CircuitRequest = serde_json::from_str(
//!     r#"{"qubits": 1, "gates": [{"type": "H", "q": 0}]}"#,
//! ).unwrap();
//!
//! let response = simulate(&request).unwrap();
//! assert_eq!(response.basis_vectors, vec!["0", "1"]);
//! assert!((response.probabilities[0] - 0.5).abs() < 1e-12);
//! ```

pub mod angle;
pub mod decode;
pub mod error;
pub mod wire;

pub use angle::parse_angle;
pub use decode::{DecodeLimits, decode};
pub use error::{AdapterError, AdapterResult};
pub use wire::{CircuitRequest, GateRecord, SimulationResponse};

use alsvid_sim::{basis_labels, bloch_angles, evaluate, probabilities};

/// Evaluate a decoded circuit request with the default boundary limits.
pub fn simulate(request: &CircuitRequest) -> AdapterResult<SimulationResponse> {
    simulate_with_limits(request, &DecodeLimits::default())
}

/// Evaluate a decoded circuit request under explicit boundary limits.
pub fn simulate_with_limits(
    request: &CircuitRequest,
    limits: &DecodeLimits,
) -> AdapterResult<SimulationResponse> {
    let circuit = decode(request, limits)?;
    let evaluation = evaluate(&circuit)?;

    Ok(SimulationResponse {
        state_vector: evaluation.state.iter().map(|c| (c.re, c.im)).collect(),
        basis_vectors: basis_labels(circuit.num_qubits()),
        probabilities: probabilities(&evaluation.state),
        bloch_angles: bloch_angles(&evaluation.state, circuit.num_qubits())
            .into_iter()
            .map(|angle| (angle.theta, angle.phi))
            .collect(),
    })
}
