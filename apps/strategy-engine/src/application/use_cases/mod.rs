//! Application Use Cases
//!
//! Use cases orchestrate domain logic to fulfill application requirements.

mod calculate_strategy;

pub use calculate_strategy::CalculateStrategyUseCase;
