//! Strategy Calculation
//!
//! Reads the loosely-typed strategy request into [`StrategyInputs`] and
//! computes the placeholder payoff `|spot - strike| * 0.5`.
//!
//! The `strategy` label never influences the result.

mod errors;
mod inputs;
mod payoff;

pub use errors::CalculationError;
pub use inputs::{SPOT_FIELD, STRATEGY_FIELD, STRIKE_FIELD, StrategyInputs};
pub use payoff::{CalculationResult, PAYOFF_MULTIPLIER, calculate};
