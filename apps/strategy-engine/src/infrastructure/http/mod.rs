//! HTTP/REST API adapter.
//!
//! Inbound adapter exposing `POST /calculate-strategy`, plus the server that hosts it.

mod controller;
mod cors;
mod error;
mod response;
mod server;

pub use controller::{AppState, CALCULATE_STRATEGY_PATH, create_router};
pub use cors::cors_layer;
pub use error::ApiError;
pub use response::*;
pub use server::{HttpServer, HttpServerError};
