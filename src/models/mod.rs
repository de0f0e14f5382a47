//! Wire models for the calculator API.
//!
//! This module contains the JSON bodies returned by every endpoint
//! (`responses`) and the fixed strings the API promises to clients.

// Author: kelexine (https://github.com/kelexine)

pub mod responses;

pub use responses::*;

/// Service name reported by `/health`.
pub const SERVICE_NAME: &str = "calculator-api";

/// Plain-text body served at `/`.
pub const ROOT_GREETING: &str = "Hello,This is a simple REST API.";

/// Units label attached to `/area` results.
pub const AREA_UNITS: &str = "square units";

/// Name used by `/greet_optional/` when no segment is given.
pub const DEFAULT_GUEST_NAME: &str = "Guest";
