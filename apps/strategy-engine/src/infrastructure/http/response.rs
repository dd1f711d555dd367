//! HTTP response DTOs.

use serde::{Deserialize, Serialize};

use crate::application::dto::StrategyCalculationDto;

/// Status text of a successful calculation.
pub const PROCESSED_STATUS: &str = "Processed by Python";

/// Greeting returned with a successful calculation.
pub const PROCESSED_MESSAGE: &str = "Hello from Flask!";

/// Response from a successful strategy calculation.
///
/// The literal `status`/`message` values and the `python_calculation` key are
/// what the dashboard front end reads, so they are kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculateStrategyResponse {
    /// Constant processing status.
    pub status: String,
    /// Computed value, written as a JSON float.
    pub python_calculation: f64,
    /// Constant message.
    pub message: String,
}

impl From<StrategyCalculationDto> for CalculateStrategyResponse {
    fn from(dto: StrategyCalculationDto) -> Self {
        Self {
            status: PROCESSED_STATUS.to_string(),
            python_calculation: dto.value,
            message: PROCESSED_MESSAGE.to_string(),
        }
    }
}

/// Error response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Description of the failure.
    pub error: String,
}
