//! End-to-end: JSON payload in, numeric response out.

use alsvid_adapter::{AdapterError, CircuitRequest, DecodeLimits, simulate, simulate_with_limits};
use std::f64::consts::PI;

fn request(json: &str) -> CircuitRequest {
    serde_json::from_str(json).unwrap()
}

#[test]
fn empty_circuit_response() {
    let response = simulate(&request(r#"{"qubits": 2, "gates": []}"#)).unwrap();

    assert_eq!(response.state_vector.len(), 4);
    assert_eq!(response.state_vector[0], (1.0, 0.0));
    assert_eq!(response.basis_vectors, vec!["00", "01", "10", "11"]);
    assert_eq!(response.probabilities, vec![1.0, 0.0, 0.0, 0.0]);
    assert_eq!(response.bloch_angles.len(), 2);
    assert_eq!(response.bloch_angles[0].0, 0.0);
}

#[test]
fn bell_pair_over_the_wire() {
    let response = simulate(&request(
        r#"{
            "qubits": 2,
            "gates": [
                {"type": "H", "q": 0},
                {"type": "CNOT", "q": 1, "controls": [0]}
            ]
        }"#,
    ))
    .unwrap();

    assert!((response.probabilities[0] - 0.5).abs() < 1e-12);
    assert!((response.probabilities[3] - 0.5).abs() < 1e-12);
    assert!(response.probabilities[1].abs() < 1e-12);
    assert!(response.probabilities[2].abs() < 1e-12);
}

#[test]
fn x_then_cnot_reaches_11() {
    let response = simulate(&request(
        r#"{
            "qubits": 2,
            "gates": [
                {"type": "X", "q": 0},
                {"type": "CNOT", "q": 1, "controls": [0]}
            ]
        }"#,
    ))
    .unwrap();

    assert!((response.probabilities[3] - 1.0).abs() < 1e-12);
    assert_eq!(response.basis_vectors[3], "11");
}

#[test]
fn swap_moves_excitation() {
    let response = simulate(&request(
        r#"{
            "qubits": 2,
            "gates": [
                {"type": "X", "q": 0},
                {"type": "SWAP", "twoQubits": [0, 1]}
            ]
        }"#,
    ))
    .unwrap();

    assert!((response.probabilities[1] - 1.0).abs() < 1e-12);
}

#[test]
fn textual_angle_expression() {
    // RX(pi) ≡ X up to global phase: all probability on |1⟩.
    let response = simulate(&request(
        r#"{
            "qubits": 1,
            "gates": [{"type": "RX", "q": 0, "theta": "pi"}]
        }"#,
    ))
    .unwrap();

    assert!(response.probabilities[0].abs() < 1e-12);
    assert!((response.probabilities[1] - 1.0).abs() < 1e-12);
}

#[test]
fn hadamard_bloch_angles() {
    let response = simulate(&request(
        r#"{"qubits": 1, "gates": [{"type": "H", "q": 0}]}"#,
    ))
    .unwrap();

    let (theta, phi) = response.bloch_angles[0];
    assert!((theta - PI / 2.0).abs() < 1e-9);
    assert!(phi.abs() < 1e-9);
}

#[test]
fn placeholder_cells_ignored() {
    let response = simulate(&request(
        r#"{
            "qubits": 1,
            "gates": [{"type": "Q", "q": 0}, {"type": "X", "q": 0}]
        }"#,
    ))
    .unwrap();

    assert!((response.probabilities[1] - 1.0).abs() < 1e-12);
}

#[test]
fn bad_angle_expression_is_rejected() {
    let result = simulate(&request(
        r#"{
            "qubits": 1,
            "gates": [{"type": "RZ", "q": 0, "theta": "exec('rm -rf /')"}]
        }"#,
    ));
    assert!(matches!(result, Err(AdapterError::AngleParse { .. })));
}

#[test]
fn qubit_limit_is_configurable() {
    let payload = request(r#"{"qubits": 5, "gates": []}"#);
    let strict = DecodeLimits { max_qubits: 4 };
    assert!(matches!(
        simulate_with_limits(&payload, &strict),
        Err(AdapterError::TooManyQubits { requested: 5, limit: 4 })
    ));
    assert!(simulate(&payload).is_ok());
}

#[test]
fn response_encodes_to_expected_json_shape() {
    let response = simulate(&request(r#"{"qubits": 1, "gates": []}"#)).unwrap();
    let value: serde_json::Value = serde_json::to_value(&response).unwrap();

    assert!(value.get("state_vector").is_some());
    assert!(value.get("basis_vectors").is_some());
    assert!(value.get("probabilities").is_some());
    assert!(value.get("bloch_angles").is_some());
    assert_eq!(value["state_vector"][0][0], 1.0);
    assert_eq!(value["basis_vectors"][1], "1");
}
