// HTTP routes configuration
// Author: kelexine (https://github.com/kelexine)

use super::handlers::{
    add_handler, area_handler, cube_handler, divide_handler, echo_handler, greet_guest_handler,
    greet_optional_handler, greet_user_handler, health_handler, method_not_allowed_handler,
    multiply_handler, not_found_handler, root_handler, subtract_handler,
};
use super::middleware::{panic_response, request_id_layers, trace_layer};
use crate::config::AppConfig;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::limit::RequestBodyLimitLayer;

/// Build the application router.
///
/// Handlers are stateless; `config` only sizes the middleware.
pub fn create_router(config: &AppConfig) -> Router {
    let (set_request_id, propagate_request_id) = request_id_layers();

    Router::new()
        .route("/", get(root_handler))
        // Arithmetic (query parameters)
        .route("/add", get(add_handler))
        .route("/subtract", get(subtract_handler))
        .route("/multiply", get(multiply_handler))
        .route("/divide", get(divide_handler))
        .route("/cube", get(cube_handler))
        // Greetings (path parameters)
        .route("/greet_user/:name", get(greet_user_handler))
        .route("/greet_optional", get(greet_guest_handler))
        .route("/greet_optional/", get(greet_guest_handler))
        .route("/greet_optional/:name", get(greet_optional_handler))
        // JSON bodies
        .route("/area", post(area_handler))
        .route("/echo", post(echo_handler))
        // Utility
        .route("/health", get(health_handler))
        // Only covers the routes above, so it must follow them
        .method_not_allowed_fallback(method_not_allowed_handler)
        .fallback(not_found_handler)
        // RequestBodyLimitLayer replaces axum's built-in 2MB cap
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(config.limits.max_body_bytes))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(trace_layer())
        .layer(propagate_request_id)
        .layer(set_request_id)
}
