//! Decoding wire gate records into IR circuits.

use tracing::debug;

use alsvid_ir::{Circuit, GateKind, Instruction, QubitId};

use crate::angle::parse_angle;
use crate::error::{AdapterError, AdapterResult};
use crate::wire::{CircuitRequest, GateRecord};

/// Boundary limits applied before any operator is allocated.
#[derive(Debug, Clone, Copy)]
pub struct DecodeLimits {
    /// Maximum register width. Operator construction is O(4ⁿ): the default
    /// of 12 qubits already means a 4096-dimensional state and a
    /// 16M-entry unitary.
    pub max_qubits: u32,
}

impl Default for DecodeLimits {
    fn default() -> Self {
        Self { max_qubits: 12 }
    }
}

/// Decode a request into a validated [`Circuit`].
pub fn decode(request: &CircuitRequest, limits: &DecodeLimits) -> AdapterResult<Circuit> {
    if request.qubits > limits.max_qubits {
        return Err(AdapterError::TooManyQubits {
            requested: request.qubits,
            limit: limits.max_qubits,
        });
    }

    debug!(
        num_qubits = request.qubits,
        num_records = request.gates.len(),
        "decoding circuit request"
    );

    let mut circuit = Circuit::new(request.qubits)?;
    for record in &request.gates {
        if let Some(instruction) = decode_record(record)? {
            circuit.push(instruction)?;
        }
    }
    Ok(circuit)
}

/// Decode one record; `None` for editor placeholder cells (`"Q"`).
fn decode_record(record: &GateRecord) -> AdapterResult<Option<Instruction>> {
    let kind = match record.kind.as_str() {
        "X" => GateKind::X,
        "Y" => GateKind::Y,
        "Z" => GateKind::Z,
        "S" => GateKind::S,
        "H" => GateKind::H,
        "T" => GateKind::T,
        "RX" => GateKind::Rx(rotation_angle(record)?),
        "RY" => GateKind::Ry(rotation_angle(record)?),
        "RZ" => GateKind::Rz(rotation_angle(record)?),
        "CNOT" => GateKind::Cnot,
        "SWAP" => GateKind::Swap,
        "Q" => return Ok(None),
        other => return Err(AdapterError::UnknownGate(other.to_string())),
    };

    let qubits = operands(&kind, record)?;
    Ok(Some(Instruction::new(kind, qubits)))
}

fn rotation_angle(record: &GateRecord) -> AdapterResult<f64> {
    if let Some(value) = record.theta_value {
        return Ok(value);
    }
    match &record.theta {
        Some(expression) => parse_angle(expression),
        None => Err(AdapterError::MissingParameter {
            gate: record.kind.clone(),
        }),
    }
}

fn operands(kind: &GateKind, record: &GateRecord) -> AdapterResult<Vec<QubitId>> {
    match kind {
        GateKind::Cnot => {
            let control = record
                .controls
                .as_deref()
                .and_then(|controls| controls.first().copied())
                .ok_or_else(|| AdapterError::MissingOperand {
                    gate: record.kind.clone(),
                    field: "controls",
                })?;
            let target = target_qubit(record)?;
            Ok(vec![QubitId(control), QubitId(target)])
        }
        GateKind::Swap => match record.two_qubits.as_deref() {
            Some([q1, q2]) => Ok(vec![QubitId(*q1), QubitId(*q2)]),
            _ => Err(AdapterError::MissingOperand {
                gate: record.kind.clone(),
                field: "twoQubits",
            }),
        },
        _ => Ok(vec![QubitId(target_qubit(record)?)]),
    }
}

fn target_qubit(record: &GateRecord) -> AdapterResult<u32> {
    record.q.ok_or_else(|| AdapterError::MissingOperand {
        gate: record.kind.clone(),
        field: "q",
    })
}
