//! Strategy calculation DTO.

use serde::{Deserialize, Serialize};

use crate::domain::calculation::{CalculationResult, StrategyInputs};

/// Outcome of a successful strategy calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyCalculationDto {
    /// Strategy label from the request, if it was a string.
    pub strategy: Option<String>,
    /// Spot price used.
    pub spot: f64,
    /// Strike price used.
    pub strike: f64,
    /// Computed value.
    pub value: f64,
}

impl StrategyCalculationDto {
    /// Build from the inputs and their result.
    #[must_use]
    pub fn new(inputs: StrategyInputs, result: CalculationResult) -> Self {
        Self {
            strategy: inputs.strategy,
            spot: inputs.spot,
            strike: inputs.strike,
            value: result.value(),
        }
    }
}
