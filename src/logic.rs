//! Bit logic - the lowest pipeline stage
//!
//! Inputs are expected to be 0 or 1; callers go through [`BitPair`](crate::types::BitPair)
//! which enforces that.

use serde::{Deserialize, Serialize};

/// A two-input gate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GateOp {
    And,
    Or,
    Xor,
}

impl GateOp {
    pub fn apply(self, a: u8, b: u8) -> u8 {
        match self {
            GateOp::And => a & b,
            GateOp::Or => a | b,
            GateOp::Xor => a ^ b,
        }
    }
}

impl std::fmt::Display for GateOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GateOp::And => write!(f, "AND"),
            GateOp::Or => write!(f, "OR"),
            GateOp::Xor => write!(f, "XOR"),
        }
    }
}

/// Stateless gate set
#[derive(Debug, Clone, Copy, Default)]
pub struct LogicGate;

impl LogicGate {
    pub fn and(&self, a: u8, b: u8) -> u8 {
        GateOp::And.apply(a, b)
    }

    pub fn or(&self, a: u8, b: u8) -> u8 {
        GateOp::Or.apply(a, b)
    }

    pub fn xor(&self, a: u8, b: u8) -> u8 {
        GateOp::Xor.apply(a, b)
    }
}
