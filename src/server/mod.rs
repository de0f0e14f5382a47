//! Axum-based HTTP server for calculator-api.
//!
//! This module sets up the router, the endpoint handlers and the tower
//! middleware wrapped around them.
//!
//! # Components
//!
//! - `handlers`: Implementation of the individual endpoints (arithmetic, greetings, area, echo, health).
//! - `middleware`: Request ID, tracing span and panic-to-JSON layers.
//! - `routes`: The router configuration that ties everything together.
//!
//! Author: kelexine (<https://github.com/kelexine>)

mod handlers;
mod middleware;
mod routes;

pub use routes::create_router;
