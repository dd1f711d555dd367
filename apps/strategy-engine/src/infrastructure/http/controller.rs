//! HTTP Controller (Driver Adapter)
//!
//! Axum-based REST API that delegates to the calculation use case.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    Json, Router,
    body::Body,
    extract::{MatchedPath, Request, State, rejection::JsonRejection},
    middleware::{self, Next},
    response::Response,
    routing::post,
};
use serde_json::Value;
use tower::ServiceBuilder;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use tracing::Span;

use crate::application::ports::CalculationObserverPort;
use crate::application::use_cases::CalculateStrategyUseCase;
use crate::domain::calculation::CalculationError;
use crate::infrastructure::config::CorsSettings;
use crate::infrastructure::health::{self, HealthState};
use crate::infrastructure::metrics::record_http_request;

use super::cors::cors_layer;
use super::error::ApiError;
use super::response::CalculateStrategyResponse;

/// Route of the strategy calculation endpoint.
pub const CALCULATE_STRATEGY_PATH: &str = "/calculate-strategy";

/// Application state shared across handlers.
pub struct AppState<O>
where
    O: CalculationObserverPort,
{
    /// Use case for calculating strategies.
    pub calculate_strategy: Arc<CalculateStrategyUseCase<O>>,
    /// Application version.
    pub version: String,
    /// Process start, for uptime reporting.
    pub started_at: Instant,
}

impl<O> AppState<O>
where
    O: CalculationObserverPort,
{
    /// Create state around a use case, stamping the start time now.
    pub fn new(calculate_strategy: CalculateStrategyUseCase<O>, version: impl Into<String>) -> Self {
        Self {
            calculate_strategy: Arc::new(calculate_strategy),
            version: version.into(),
            started_at: Instant::now(),
        }
    }
}

impl<O> Clone for AppState<O>
where
    O: CalculationObserverPort,
{
    fn clone(&self) -> Self {
        Self {
            calculate_strategy: Arc::clone(&self.calculate_strategy),
            version: self.version.clone(),
            started_at: self.started_at,
        }
    }
}

/// Create the HTTP router with all endpoints and middleware.
pub fn create_router<O>(state: AppState<O>, cors: &CorsSettings) -> Router
where
    O: CalculationObserverPort + 'static,
{
    let health = health::router(HealthState::new(state.version.clone(), state.started_at));

    Router::new()
        .route(CALCULATE_STRATEGY_PATH, post(calculate_strategy))
        .with_state(state)
        .merge(health)
        .route_layer(middleware::from_fn(track_requests))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(cors_layer(cors)),
        )
}

/// Strategy calculation endpoint.
///
/// Body extraction failures (wrong content type, malformed JSON) are
/// reported the same way as calculation failures.
async fn calculate_strategy<O>(
    State(state): State<AppState<O>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<CalculateStrategyResponse>, ApiError>
where
    O: CalculationObserverPort,
{
    let Json(body) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "Rejected strategy request body");
        CalculationError::invalid_body(rejection.body_text())
    })?;

    let calculation = state.calculate_strategy.execute(&body)?;

    Ok(Json(CalculateStrategyResponse::from(calculation)))
}

/// Count routed requests by matched path and status.
async fn track_requests(request: Request, next: Next) -> Response {
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map_or_else(|| "unmatched".to_string(), |path| path.as_str().to_owned());

    let response = next.run(request).await;
    record_http_request(&route, response.status().as_u16());
    response
}

fn make_request_span(request: &axum::http::Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("-");

    tracing::info_span!(
        "http_request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
    )
}
