//! Calculation Observer Port
//!
//! Outbound port notified after each calculation attempt.

use std::time::Duration;

/// Outcome of a calculation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalculationOutcome {
    /// A value was computed.
    Success,
    /// Inputs were rejected or the arithmetic failed.
    Error,
}

impl CalculationOutcome {
    /// Label value for metrics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Port for observing calculation attempts.
pub trait CalculationObserverPort: Send + Sync {
    /// Called once per attempt with its outcome and elapsed time.
    fn calculation_completed(&self, outcome: CalculationOutcome, elapsed: Duration);
}

/// Observer that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpCalculationObserver;

impl CalculationObserverPort for NoOpCalculationObserver {
    fn calculation_completed(&self, _outcome: CalculationOutcome, _elapsed: Duration) {}
}
