//! Domain Layer - Core strategy calculation logic.
//!
//! Pure Rust types and arithmetic with no HTTP or runtime dependencies.

/// Strategy inputs, payoff calculation and calculation errors.
pub mod calculation;
