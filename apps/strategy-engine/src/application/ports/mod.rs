//! Port Interfaces
//!
//! Contracts that infrastructure adapters implement.
//!
//! ## Driven Ports (Outbound)
//!
//! - `CalculationObserverPort`: receives the outcome and latency of every calculation

mod calculation_observer_port;

pub use calculation_observer_port::{
    CalculationObserverPort, CalculationOutcome, NoOpCalculationObserver,
};
