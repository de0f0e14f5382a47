// HTTP request handlers
// Author: kelexine (https://github.com/kelexine)

use crate::calculator::{self, BinaryOp};
use crate::error::{ApiError, Result};
use crate::models::{
    AreaResponse, EchoResponse, GreetingResponse, HealthResponse, OperationResponse,
    DEFAULT_GUEST_NAME, ROOT_GREETING,
};
use axum::{
    body::Bytes,
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query,
    },
    http::{Method, Uri},
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

/// Raw query string pairs, in request order.
///
/// Kept as a list rather than a map so a repeated key resolves to its first
/// occurrence.
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct QueryArgs(Vec<(String, String)>);

impl QueryArgs {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

type QueryResult = std::result::Result<Query<QueryArgs>, QueryRejection>;
type PathResult = std::result::Result<Path<String>, PathRejection>;

/// Decoded `:name` segment, or a JSON 400 when it cannot be decoded
fn path_segment(segment: PathResult) -> Result<String> {
    segment.map(|Path(name)| name).map_err(|e| {
        debug!("Undecodable path segment: {}", e);
        ApiError::InvalidPath(e.body_text())
    })
}

async fn binary_operation(op: BinaryOp, query: QueryResult) -> Result<Json<OperationResponse>> {
    let Query(args) = query.map_err(|e| {
        debug!("Unreadable query for /{}: {}", op.name(), e);
        ApiError::InvalidOperands
    })?;

    let (a, b) = calculator::parse_operands(args.get("a"), args.get("b"))?;
    let result = op.apply(a, b)?;

    debug!("{} a={} b={} -> {:?}", op.name(), a, b, result);
    Ok(Json(OperationResponse { result }))
}

/// GET / (plain text, not JSON)
pub async fn root_handler() -> &'static str {
    ROOT_GREETING
}

/// GET /add?a=..&b=..
pub async fn add_handler(query: QueryResult) -> Result<Json<OperationResponse>> {
    binary_operation(BinaryOp::Add, query).await
}

/// GET /subtract?a=..&b=..
pub async fn subtract_handler(query: QueryResult) -> Result<Json<OperationResponse>> {
    binary_operation(BinaryOp::Subtract, query).await
}

/// GET /multiply?a=..&b=..
pub async fn multiply_handler(query: QueryResult) -> Result<Json<OperationResponse>> {
    binary_operation(BinaryOp::Multiply, query).await
}

/// GET /divide?a=..&b=..
pub async fn divide_handler(query: QueryResult) -> Result<Json<OperationResponse>> {
    binary_operation(BinaryOp::Divide, query).await
}

/// GET /cube?x=..
pub async fn cube_handler(query: QueryResult) -> Result<Json<OperationResponse>> {
    let Query(args) = query.map_err(|e| {
        debug!("Unreadable query for /cube: {}", e);
        ApiError::InvalidOperand
    })?;

    let x = calculator::parse_single(args.get("x"))?;
    let result = calculator::cube(x)?;

    Ok(Json(OperationResponse {
        result: calculator::Computed::Integer(result),
    }))
}

/// GET /greet_user/:name
pub async fn greet_user_handler(name: PathResult) -> Result<Json<GreetingResponse>> {
    let name = path_segment(name)?;
    Ok(Json(GreetingResponse::welcome(&name)))
}

/// GET /greet_optional/:name
pub async fn greet_optional_handler(name: PathResult) -> Result<Json<GreetingResponse>> {
    let name = path_segment(name)?;
    Ok(Json(GreetingResponse::optional(&name)))
}

/// GET /greet_optional/ and /greet_optional
pub async fn greet_guest_handler() -> Json<GreetingResponse> {
    Json(GreetingResponse::optional(DEFAULT_GUEST_NAME))
}

/// POST /area with `{"width": .., "height": ..}`
///
/// The body is read raw rather than through `Json` so every failure maps to
/// one of the API's own error messages regardless of content type.
pub async fn area_handler(body: Bytes) -> Result<Json<AreaResponse>> {
    let data: Value = serde_json::from_slice(&body).map_err(|e| {
        debug!("Malformed /area body: {}", e);
        ApiError::InvalidJson
    })?;

    let (width, height) = calculator::dimensions(&data)?;
    let area = calculator::area(width, height)?;

    Ok(Json(AreaResponse::new(area)))
}

/// POST /echo
pub async fn echo_handler(body: Bytes) -> Result<Json<EchoResponse>> {
    let data: Value = serde_json::from_slice(&body).map_err(|e| {
        debug!("Unparseable /echo body: {}", e);
        ApiError::BodyNotJson
    })?;

    // A bare `null` carries no data to echo
    if data.is_null() {
        return Err(ApiError::BodyNotJson);
    }

    Ok(Json(EchoResponse {
        received_data: data,
    }))
}

/// GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// Anything the router does not know
pub async fn not_found_handler(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}

/// Known path, wrong method
pub async fn method_not_allowed_handler(method: Method, uri: Uri) -> ApiError {
    ApiError::MethodNotAllowed {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}
