//! Calculation errors.

use thiserror::Error;

/// Errors raised while reading a strategy request or computing its payoff.
///
/// Every variant collapses to the same HTTP 500 shape on the wire; the
/// variant only feeds logs through [`CalculationError::reason`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculationError {
    /// The request body could not be read as JSON.
    #[error("{message}")]
    InvalidBody {
        /// Description from the body parser.
        message: String,
    },

    /// A numeric field held a JSON value that is not a number.
    #[error("field '{field}' must be a number, got {found}")]
    NotANumber {
        /// Name of the offending field.
        field: &'static str,
        /// JSON type that was found instead.
        found: &'static str,
    },

    /// The payoff left the finite `f64` range and cannot be written as JSON.
    #[error("calculation result is not a finite number")]
    NonFinite,
}

impl CalculationError {
    /// Create an invalid body error.
    #[must_use]
    pub fn invalid_body(message: impl Into<String>) -> Self {
        Self::InvalidBody {
            message: message.into(),
        }
    }

    /// Machine-readable reason, used as a log field.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::InvalidBody { .. } => "INVALID_BODY",
            Self::NotANumber { .. } => "NOT_A_NUMBER",
            Self::NonFinite => "NON_FINITE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_a_number_message_names_field_and_type() {
        let error = CalculationError::NotANumber {
            field: "spot",
            found: "string",
        };
        assert_eq!(error.to_string(), "field 'spot' must be a number, got string");
        assert_eq!(error.reason(), "NOT_A_NUMBER");
    }

    #[test]
    fn invalid_body_displays_parser_message() {
        let error = CalculationError::invalid_body("EOF while parsing an object");
        assert_eq!(error.to_string(), "EOF while parsing an object");
        assert_eq!(error.reason(), "INVALID_BODY");
    }

    #[test]
    fn non_finite_reason() {
        assert_eq!(CalculationError::NonFinite.reason(), "NON_FINITE");
        assert_eq!(
            CalculationError::NonFinite.to_string(),
            "calculation result is not a finite number"
        );
    }
}
