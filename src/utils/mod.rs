//! Cross-cutting helpers for calculator-api.
//!
//! # Submodules
//!
//! - `logging`: Tracing subscriber initialization.
//!
//! Author: kelexine (<https://github.com/kelexine>)

pub mod logging;
