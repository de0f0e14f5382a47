// Response bodies
// Author: kelexine (https://github.com/kelexine)

use super::{AREA_UNITS, SERVICE_NAME};
use crate::calculator::Computed;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `{"result": ...}` from the query arithmetic endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationResponse {
    pub result: Computed,
}

/// `/area` result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaResponse {
    pub result: i64,
    pub units: String,
}

impl AreaResponse {
    pub fn new(result: i64) -> Self {
        Self {
            result,
            units: AREA_UNITS.to_string(),
        }
    }
}

/// Greeting endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreetingResponse {
    pub message: String,
}

impl GreetingResponse {
    pub fn welcome(name: &str) -> Self {
        Self {
            message: format!("Hello, {}! Welcome to the API.", name),
        }
    }

    pub fn optional(name: &str) -> Self {
        Self {
            message: format!("Hello, {}! This name was optional.", name),
        }
    }
}

/// `/echo` wraps whatever JSON it was sent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EchoResponse {
    pub received_data: Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            service: SERVICE_NAME.to_string(),
        }
    }
}

/// Body of every error response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
