//! Pure arithmetic and input coercion for the calculator endpoints.
//!
//! Nothing in this module knows about HTTP. Handlers in `server` hand it the
//! raw query strings or JSON values they extracted and turn the returned
//! [`ApiError`](crate::error::ApiError) into a response.
//!
//! # Submodules
//!
//! - `arithmetic`: Checked integer operations and real-valued division.
//! - `input`: Parsing of query operands and JSON rectangle dimensions.
//!
//! Author: kelexine (<https://github.com/kelexine>)

pub mod arithmetic;
pub mod input;

pub use arithmetic::{area, cube, BinaryOp, Computed};
pub use input::{coerce_dimension, dimensions, parse_operand, parse_operands, parse_single};
