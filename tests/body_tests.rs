// JSON body endpoint tests (/area, /echo)
// Author: kelexine (https://github.com/kelexine)

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use calculator_api::config::AppConfig;
use calculator_api::server::create_router;
use common::{get, post_json, post_raw};
use serde_json::json;

#[tokio::test]
async fn test_area() {
    let reply = post_json("/area", &json!({"width": 5, "height": 10})).await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.json(), json!({"result": 50, "units": "square units"}));
}

#[tokio::test]
async fn test_area_missing_dimension() {
    for payload in [json!({"width": 5}), json!({"height": 5}), json!({}), json!([5, 10])] {
        let reply = post_json("/area", &payload).await;
        assert_eq!(reply.status, StatusCode::BAD_REQUEST, "{}", payload);
        assert_eq!(reply.error(), "Missing 'width' or 'height' in JSON body");
    }
}

#[tokio::test]
async fn test_area_non_integer_dimension() {
    let reply = post_json("/area", &json!({"width": "wide", "height": 10})).await;
    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert_eq!(reply.error(), "Width and height must be integers");
}

#[tokio::test]
async fn test_area_coerces_numeric_strings_and_floats() {
    let reply = post_json("/area", &json!({"width": "6", "height": 7})).await;
    assert_eq!(reply.json()["result"], 42);

    let reply = post_json("/area", &json!({"width": 2.9, "height": 10})).await;
    assert_eq!(reply.json()["result"], 20);
}

#[tokio::test]
async fn test_area_structured_dimension_is_invalid_json() {
    let reply = post_json("/area", &json!({"width": null, "height": 10})).await;
    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert_eq!(reply.error(), "Invalid JSON format");

    let reply = post_json("/area", &json!({"width": [1], "height": 10})).await;
    assert_eq!(reply.error(), "Invalid JSON format");
}

#[tokio::test]
async fn test_area_malformed_body() {
    let reply = post_raw("/area", "{\"width\": 5,").await;
    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert_eq!(reply.error(), "Invalid JSON format");

    let reply = post_raw("/area", Body::empty()).await;
    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert_eq!(reply.error(), "Invalid JSON format");
}

#[tokio::test]
async fn test_area_non_object_body() {
    let reply = post_raw("/area", r#""width height""#).await;
    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert_eq!(reply.error(), "Invalid JSON format");

    let reply = post_raw("/area", r#"["width", "height"]"#).await;
    assert_eq!(reply.error(), "Invalid JSON format");

    let reply = post_raw("/area", r#""width""#).await;
    assert_eq!(reply.error(), "Missing 'width' or 'height' in JSON body");
}

#[tokio::test]
async fn test_area_oversized_dimension() {
    let reply = post_raw("/area", r#"{"width": 123456789012345678901234567890, "height": 1}"#).await;
    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert_eq!(reply.error(), "Result is outside the 64-bit integer range");
}

#[tokio::test]
async fn test_area_wrong_method() {
    let reply = get("/area").await;
    assert_eq!(reply.status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(reply.content_type.as_deref(), Some("application/json"));
    assert_eq!(reply.error(), "Method GET is not allowed for /area");
}

#[tokio::test]
async fn test_echo_round_trips_structure() {
    let payload = json!({
        "status": "ok",
        "data": [1, 2, 3],
        "ratio": 0.1,
        "whole_float": 2.0,
        "big": 9007199254740993_u64,
        "nested": {"flag": true, "nothing": null, "list": [[], {}]}
    });

    let reply = post_json("/echo", &payload).await;
    assert_eq!(reply.status, StatusCode::OK);

    let body = reply.json();
    assert_eq!(body["received_data"], payload);
    assert!(body["received_data"]["data"][0].is_i64());
    assert!(body["received_data"]["whole_float"].is_f64());
    assert_eq!(body["received_data"]["big"].as_u64(), Some(9007199254740993));
}

#[tokio::test]
async fn test_echo_keeps_number_text() {
    let reply = post_raw("/echo", r#"{"n": 123456789012345678901234567890, "z": -0}"#).await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(
        reply.text(),
        r#"{"received_data":{"n":123456789012345678901234567890,"z":-0}}"#
    );
}

#[tokio::test]
async fn test_echo_accepts_scalars_and_arrays() {
    for payload in [json!(42), json!("text"), json!([1, "two", 3.5]), json!(false)] {
        let reply = post_json("/echo", &payload).await;
        assert_eq!(reply.status, StatusCode::OK, "{}", payload);
        assert_eq!(reply.json()["received_data"], payload);
    }
}

#[tokio::test]
async fn test_echo_rejects_non_json() {
    for body in ["", "not json", "{\"open\": ", "null"] {
        let reply = post_raw("/echo", body).await;
        assert_eq!(reply.status, StatusCode::BAD_REQUEST, "{:?}", body);
        assert_eq!(reply.error(), "Request body must be valid JSON");
    }
}

#[tokio::test]
async fn test_body_limit_is_enforced() {
    let mut config = AppConfig::default();
    config.limits.max_body_bytes = 16;
    let app = create_router(&config);

    let payload = r#"{"padding": "this body is longer than sixteen bytes"}"#;
    let request = Request::builder()
        .method("POST")
        .uri("/echo")
        .header("content-type", "application/json")
        .header("content-length", payload.len())
        .body(Body::from(payload))
        .unwrap();

    let reply = common::send(app, request).await;
    assert_eq!(reply.status, StatusCode::PAYLOAD_TOO_LARGE);
}
