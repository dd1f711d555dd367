//! Calculate Strategy Use Case

use std::sync::Arc;
use std::time::Instant;

use serde_json::Value;

use crate::application::dto::StrategyCalculationDto;
use crate::application::ports::{CalculationObserverPort, CalculationOutcome};
use crate::domain::calculation::{
    CalculationError, STRATEGY_FIELD, StrategyInputs, calculate,
};

/// Use case for evaluating a strategy request.
pub struct CalculateStrategyUseCase<O>
where
    O: CalculationObserverPort,
{
    observer: Arc<O>,
}

impl<O> CalculateStrategyUseCase<O>
where
    O: CalculationObserverPort,
{
    /// Create a new CalculateStrategyUseCase.
    pub const fn new(observer: Arc<O>) -> Self {
        Self { observer }
    }

    /// Execute the use case against a parsed JSON body.
    ///
    /// The strategy label is logged before the prices are read, so rejected
    /// requests still show up with their label.
    pub fn execute(&self, body: &Value) -> Result<StrategyCalculationDto, CalculationError> {
        let started = Instant::now();

        tracing::info!(strategy = %strategy_label(body), "Strategy calculation requested");

        let outcome = StrategyInputs::from_json(body).and_then(|inputs| {
            let result = calculate(&inputs)?;
            Ok(StrategyCalculationDto::new(inputs, result))
        });

        match &outcome {
            Ok(dto) => {
                tracing::debug!(
                    spot = dto.spot,
                    strike = dto.strike,
                    value = dto.value,
                    "Strategy calculated"
                );
                self.observer
                    .calculation_completed(CalculationOutcome::Success, started.elapsed());
            }
            Err(e) => {
                tracing::warn!(error = %e, reason = e.reason(), "Strategy calculation failed");
                self.observer
                    .calculation_completed(CalculationOutcome::Error, started.elapsed());
            }
        }

        outcome
    }
}

/// Label for logs: the raw string, the JSON text of any other value, or `-`.
fn strategy_label(body: &Value) -> String {
    match body.get(STRATEGY_FIELD) {
        Some(Value::String(label)) => label.clone(),
        Some(other) => other.to_string(),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::time::Duration;

    use serde_json::json;

    #[derive(Default)]
    struct RecordingObserver {
        outcomes: Mutex<Vec<CalculationOutcome>>,
    }

    impl CalculationObserverPort for RecordingObserver {
        fn calculation_completed(&self, outcome: CalculationOutcome, _elapsed: Duration) {
            self.outcomes.lock().unwrap().push(outcome);
        }
    }

    fn make_use_case() -> (
        CalculateStrategyUseCase<RecordingObserver>,
        Arc<RecordingObserver>,
    ) {
        let observer = Arc::new(RecordingObserver::default());
        (CalculateStrategyUseCase::new(Arc::clone(&observer)), observer)
    }

    #[test]
    fn calculates_iron_condor_example() {
        let (use_case, observer) = make_use_case();

        let dto = use_case
            .execute(&json!({"strategy": "iron-condor", "spot": 100, "strike": 95}))
            .unwrap();

        assert_eq!(dto.strategy.as_deref(), Some("iron-condor"));
        assert_eq!(dto.value, 2.5);
        assert_eq!(
            *observer.outcomes.lock().unwrap(),
            vec![CalculationOutcome::Success]
        );
    }

    #[test]
    fn missing_spot_defaults_to_zero() {
        let (use_case, _) = make_use_case();
        let dto = use_case.execute(&json!({"strike": 10})).unwrap();
        assert_eq!(dto.spot, 0.0);
        assert_eq!(dto.value, 5.0);
    }

    #[test]
    fn rejected_input_is_reported_as_error() {
        let (use_case, observer) = make_use_case();

        let error = use_case
            .execute(&json!({"spot": "abc", "strike": "def"}))
            .unwrap_err();

        assert!(matches!(error, CalculationError::NotANumber { field: "spot", .. }));
        assert_eq!(
            *observer.outcomes.lock().unwrap(),
            vec![CalculationOutcome::Error]
        );
    }

    #[test]
    fn huge_prices_still_succeed() {
        let (use_case, observer) = make_use_case();
        let dto = use_case
            .execute(&json!({"spot": 5e28, "strike": -5e28}))
            .unwrap();
        assert_eq!(dto.value, 5e28);
        assert_eq!(
            *observer.outcomes.lock().unwrap(),
            vec![CalculationOutcome::Success]
        );
    }

    #[test]
    fn strategy_label_variants() {
        assert_eq!(strategy_label(&json!({"strategy": "straddle"})), "straddle");
        assert_eq!(strategy_label(&json!({"strategy": 3})), "3");
        assert_eq!(strategy_label(&json!({})), "-");
        assert_eq!(strategy_label(&json!([1, 2])), "-");
    }
}
