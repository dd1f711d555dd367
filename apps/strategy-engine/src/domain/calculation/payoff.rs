//! Placeholder payoff arithmetic.

use super::{CalculationError, StrategyInputs};

/// Multiplier applied to the absolute spot/strike spread.
pub const PAYOFF_MULTIPLIER: f64 = 0.5;

/// Result of a strategy calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationResult {
    value: f64,
}

impl CalculationResult {
    /// The computed value. Always finite and non-negative.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }
}

/// Compute `|spot - strike| * 0.5` in double precision.
///
/// # Errors
///
/// Returns [`CalculationError::NonFinite`] when the spread overflows `f64`
/// (only reachable with prices near `f64::MAX`), since JSON has no infinity.
pub fn calculate(inputs: &StrategyInputs) -> Result<CalculationResult, CalculationError> {
    let value = (inputs.spot - inputs.strike).abs() * PAYOFF_MULTIPLIER;

    if !value.is_finite() {
        return Err(CalculationError::NonFinite);
    }

    Ok(CalculationResult { value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use test_case::test_case;

    #[test_case(100.0, 95.0, 2.5 ; "spot above strike")]
    #[test_case(95.0, 100.0, 2.5 ; "strike above spot")]
    #[test_case(0.0, 10.0, 5.0 ; "zero spot")]
    #[test_case(42.0, 42.0, 0.0 ; "at the money")]
    #[test_case(-20.0, 20.0, 20.0 ; "negative spot")]
    #[test_case(1e29, 0.0, 5e28 ; "huge spot")]
    #[test_case(5e28, -5e28, 5e28 ; "huge spread")]
    #[test_case(1e-30, 0.0, 5e-31 ; "tiny spot")]
    #[test_case(f64::MAX, 0.0, f64::MAX * 0.5 ; "largest double")]
    fn computes_half_the_absolute_spread(spot: f64, strike: f64, expected: f64) {
        let result = calculate(&StrategyInputs::new(spot, strike)).unwrap();
        assert_eq!(result.value(), expected);
    }

    #[test]
    #[allow(clippy::excessive_precision)]
    fn keeps_float_rounding_of_the_formula() {
        let spot = 123_456_789.123_456_789;
        let result = calculate(&StrategyInputs::new(spot, 0.0)).unwrap();
        assert_eq!(result.value().to_bits(), (spot * 0.5).to_bits());
        assert_eq!(result.value(), 61_728_394.561_728_396);
    }

    #[test]
    fn strategy_label_does_not_change_result() {
        let plain = calculate(&StrategyInputs::new(100.0, 95.0)).unwrap();
        let labelled =
            calculate(&StrategyInputs::new(100.0, 95.0).with_strategy("iron-condor")).unwrap();
        assert_eq!(plain, labelled);
    }

    #[test]
    fn infinite_spread_is_reported() {
        let inputs = StrategyInputs::new(f64::MAX, f64::MIN);
        assert_eq!(calculate(&inputs), Err(CalculationError::NonFinite));
    }

    fn finite() -> impl Strategy<Value = f64> {
        prop::num::f64::NORMAL | prop::num::f64::SUBNORMAL | prop::num::f64::ZERO
    }

    proptest! {
        #[test]
        fn matches_float_formula(spot in finite(), strike in finite()) {
            let expected = (spot - strike).abs() * 0.5;
            match calculate(&StrategyInputs::new(spot, strike)) {
                Ok(result) => prop_assert_eq!(result.value().to_bits(), expected.to_bits()),
                Err(error) => {
                    prop_assert_eq!(error, CalculationError::NonFinite);
                    prop_assert!(expected.is_infinite());
                }
            }
        }

        #[test]
        fn integer_prices_never_fail(spot in -1_000_000i64..1_000_000, strike in -1_000_000i64..1_000_000) {
            #[allow(clippy::cast_precision_loss)]
            let (spot, strike) = (spot as f64, strike as f64);
            let forward = calculate(&StrategyInputs::new(spot, strike)).unwrap();
            let reverse = calculate(&StrategyInputs::new(strike, spot)).unwrap();
            prop_assert_eq!(forward, reverse);
            prop_assert!(forward.value() >= 0.0);
        }
    }
}
