// Operand parsing and JSON dimension coercion
// Author: kelexine (https://github.com/kelexine)

use crate::error::{ApiError, Result};
use serde_json::Value;
use std::num::ParseIntError;

/// Parse a single query operand.
///
/// A missing operand is `0`. A present operand must be a base-10 integer,
/// optionally signed and surrounded by whitespace.
pub fn parse_operand(raw: Option<&str>) -> std::result::Result<i64, ParseIntError> {
    match raw {
        None => Ok(0),
        Some(value) => value.trim().parse::<i64>(),
    }
}

/// Parse the `a`/`b` pair used by the two-operand endpoints.
pub fn parse_operands(a: Option<&str>, b: Option<&str>) -> Result<(i64, i64)> {
    let a = parse_operand(a).map_err(|_| ApiError::InvalidOperands)?;
    let b = parse_operand(b).map_err(|_| ApiError::InvalidOperands)?;
    Ok((a, b))
}

/// Parse the lone `x` operand used by `/cube`.
pub fn parse_single(x: Option<&str>) -> Result<i64> {
    parse_operand(x).map_err(|_| ApiError::InvalidOperand)
}

/// Coerce a `width`/`height` JSON value into an integer.
///
/// Integers pass through, finite floats truncate toward zero, strings must
/// hold a base-10 integer and booleans count as `1`/`0`. Null, arrays and
/// objects are not dimensions at all and report [`ApiError::InvalidJson`].
pub fn coerce_dimension(value: &Value) -> Result<i64> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Ok(i);
            }
            if n.is_u64() {
                return Err(ApiError::Overflow);
            }
            // Only non-finite magnitudes (e.g. 1e400) fail to convert
            let f = n.as_f64().ok_or(ApiError::Overflow)?;
            let truncated = f.trunc();
            // i64::MAX as f64 rounds up to 2^63, which is itself out of range
            if truncated >= -(i64::MIN as f64) || truncated < i64::MIN as f64 {
                return Err(ApiError::Overflow);
            }
            Ok(truncated as i64)
        }
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| ApiError::NonIntegerDimensions),
        Value::Bool(b) => Ok(i64::from(*b)),
        Value::Null | Value::Array(_) | Value::Object(_) => Err(ApiError::InvalidJson),
    }
}

/// Extract and coerce `width` and `height` from an `/area` body.
///
/// A non-object body only gets past the key check when it still "contains"
/// both names (a string holding both words, an array holding both strings);
/// such bodies have no fields to read and report [`ApiError::InvalidJson`].
pub fn dimensions(data: &Value) -> Result<(i64, i64)> {
    let (width, height) = match data {
        Value::Object(map) => match (map.get("width"), map.get("height")) {
            (Some(width), Some(height)) => (width, height),
            _ => return Err(ApiError::MissingDimensions),
        },
        Value::String(s) if s.contains("width") && s.contains("height") => {
            return Err(ApiError::InvalidJson)
        }
        Value::Array(items)
            if items.iter().any(|v| v == "width") && items.iter().any(|v| v == "height") =>
        {
            return Err(ApiError::InvalidJson)
        }
        _ => return Err(ApiError::MissingDimensions),
    };

    Ok((coerce_dimension(width)?, coerce_dimension(height)?))
}
