// Checked arithmetic behind the calculator endpoints
// Author: kelexine (https://github.com/kelexine)

use crate::error::{ApiError, Result};
use serde::{Deserialize, Serialize};

/// Numeric result of an operation.
///
/// Serialized untagged so `{"result": 5}` and `{"result": 5.0}` keep the
/// integer/real distinction on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Computed {
    Integer(i64),
    Real(f64),
}

/// Two-operand operations exposed as query endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOp {
    pub fn name(self) -> &'static str {
        match self {
            BinaryOp::Add => "add",
            BinaryOp::Subtract => "subtract",
            BinaryOp::Multiply => "multiply",
            BinaryOp::Divide => "divide",
        }
    }

    /// Apply the operation to `a` and `b`.
    ///
    /// Division always yields a [`Computed::Real`]; a zero divisor is rejected
    /// before anything is computed.
    pub fn apply(self, a: i64, b: i64) -> Result<Computed> {
        let checked = match self {
            BinaryOp::Add => a.checked_add(b),
            BinaryOp::Subtract => a.checked_sub(b),
            BinaryOp::Multiply => a.checked_mul(b),
            BinaryOp::Divide => {
                if b == 0 {
                    return Err(ApiError::DivisionByZero);
                }
                return Ok(Computed::Real(a as f64 / b as f64));
            }
        };

        checked.map(Computed::Integer).ok_or(ApiError::Overflow)
    }
}

/// x * x * x
pub fn cube(x: i64) -> Result<i64> {
    x.checked_mul(x)
        .and_then(|square| square.checked_mul(x))
        .ok_or(ApiError::Overflow)
}

/// Area of a `width` by `height` rectangle.
pub fn area(width: i64, height: i64) -> Result<i64> {
    width.checked_mul(height).ok_or(ApiError::Overflow)
}
