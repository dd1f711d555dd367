//! Strategy request inputs.

use serde_json::{Map, Value};

use super::CalculationError;

/// JSON key carrying the strategy label.
pub const STRATEGY_FIELD: &str = "strategy";

/// JSON key carrying the spot price.
pub const SPOT_FIELD: &str = "spot";

/// JSON key carrying the strike price.
pub const STRIKE_FIELD: &str = "strike";

/// Typed inputs of a strategy calculation.
///
/// Absent prices default to zero. A body that is valid JSON but not an
/// object yields all defaults.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StrategyInputs {
    /// Opaque strategy label, used for logging only.
    pub strategy: Option<String>,
    /// Spot price.
    pub spot: f64,
    /// Strike price.
    pub strike: f64,
}

impl StrategyInputs {
    /// Create inputs from explicit prices.
    #[must_use]
    pub const fn new(spot: f64, strike: f64) -> Self {
        Self {
            strategy: None,
            spot,
            strike,
        }
    }

    /// Attach a strategy label.
    #[must_use]
    pub fn with_strategy(mut self, strategy: impl Into<String>) -> Self {
        self.strategy = Some(strategy.into());
        self
    }

    /// Read inputs from a parsed JSON body.
    ///
    /// Only JSON numbers are accepted for `spot` and `strike`, taken as the
    /// nearest `f64` whatever their magnitude. Strings (numeric-looking or
    /// not), booleans, `null`, arrays and objects are rejected with
    /// [`CalculationError::NotANumber`].
    pub fn from_json(body: &Value) -> Result<Self, CalculationError> {
        let Some(fields) = body.as_object() else {
            return Ok(Self::default());
        };

        Ok(Self {
            strategy: fields
                .get(STRATEGY_FIELD)
                .and_then(Value::as_str)
                .map(str::to_owned),
            spot: read_price(fields, SPOT_FIELD)?,
            strike: read_price(fields, STRIKE_FIELD)?,
        })
    }
}

fn read_price(
    fields: &Map<String, Value>,
    field: &'static str,
) -> Result<f64, CalculationError> {
    match fields.get(field) {
        None => Ok(0.0),
        // Without `arbitrary_precision` every JSON number has an f64 form.
        Some(Value::Number(number)) => number.as_f64().ok_or(CalculationError::NotANumber {
            field,
            found: "unrepresentable number",
        }),
        Some(other) => Err(CalculationError::NotANumber {
            field,
            found: json_type_name(other),
        }),
    }
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
