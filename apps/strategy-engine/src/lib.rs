#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::needless_pass_by_value,
        clippy::items_after_statements
    )
)]

//! Strategy Engine - Strategy Calculation Service
//!
//! A stateless HTTP/JSON service that evaluates a placeholder payoff for a
//! strategy request (`|spot - strike| * 0.5`). It sits next to the Node.js
//! gateway (port 5000) and is called directly by the browser dashboard, so
//! every origin is allowed through CORS by default.
//!
//! # Layers (inside → outside)
//!
//! - **Domain**: Strategy inputs, payoff arithmetic, calculation errors
//!   - `calculation`: `StrategyInputs`, `calculate`, `CalculationError`
//!
//! - **Application**: Use cases and port definitions
//!   - `ports`: `CalculationObserverPort` for latency/outcome reporting
//!   - `use_cases`: `CalculateStrategyUseCase`
//!   - `dto`: `StrategyCalculationDto`
//!
//! - **Infrastructure**: Adapters and external integrations
//!   - `http`: Axum router, `POST /calculate-strategy`, CORS, server
//!   - `health`: `/health`, `/healthz`, `/metrics`
//!   - `config`: Environment-driven configuration
//!   - `metrics`: Prometheus recorder
//!   - `telemetry`: tracing subscriber and OpenTelemetry export
//!
//! # Request Flow
//!
//! ```text
//! Browser / Node gateway
//!        │  POST /calculate-strategy
//!        ▼
//!  CORS → request id → trace ─► controller ─► CalculateStrategyUseCase ─► domain::calculate
//!                                   │
//!                                   └── ApiError → 500 {"error": "..."}
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Module Declarations
// =============================================================================

/// Domain layer - Payoff arithmetic with no framework dependencies.
pub mod domain;

/// Application layer - Use cases and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

// =============================================================================
// Re-exports
// =============================================================================

// Domain
pub use domain::calculation::{
    CalculationError, CalculationResult, PAYOFF_MULTIPLIER, StrategyInputs, calculate,
};

// Application
pub use application::dto::StrategyCalculationDto;
pub use application::ports::{
    CalculationObserverPort, CalculationOutcome, NoOpCalculationObserver,
};
pub use application::use_cases::CalculateStrategyUseCase;

// Infrastructure
pub use infrastructure::config::{ConfigError, CorsSettings, ServerSettings, ServiceConfig};
pub use infrastructure::http::{AppState, HttpServer, HttpServerError, create_router};
pub use infrastructure::metrics::{PrometheusCalculationObserver, init_metrics};
pub use infrastructure::telemetry::{TelemetryConfig, TelemetryGuard, init as init_telemetry};
