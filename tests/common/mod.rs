//! Shared helpers for driving the router in-process.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use calculator_api::config::AppConfig;
use calculator_api::server::create_router;
use serde_json::Value;
use tower::ServiceExt;

/// Router built from default configuration.
pub fn app() -> Router {
    create_router(&AppConfig::default())
}

/// Raw response pieces: status, content type and body bytes.
pub struct Reply {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub request_id: Option<String>,
    pub body: Vec<u8>,
}

impl Reply {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is JSON")
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).expect("response body is UTF-8")
    }

    /// The `error` field of a JSON error body.
    pub fn error(&self) -> String {
        self.json()["error"]
            .as_str()
            .expect("error field is a string")
            .to_string()
    }
}

pub async fn send(app: Router, request: Request<Body>) -> Reply {
    let response = app.oneshot(request).await.unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get("content-type")
        .map(|v| v.to_str().unwrap().to_string());
    let request_id = response
        .headers()
        .get("x-request-id")
        .map(|v| v.to_str().unwrap().to_string());
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec();

    Reply {
        status,
        content_type,
        request_id,
        body,
    }
}

pub async fn get(uri: &str) -> Reply {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app(), request).await
}

pub async fn post_raw(uri: &str, body: impl Into<Body>) -> Reply {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap();
    send(app(), request).await
}

pub async fn post_json(uri: &str, payload: &Value) -> Reply {
    post_raw(uri, serde_json::to_vec(payload).unwrap()).await
}
