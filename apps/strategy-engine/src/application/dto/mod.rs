//! Data Transfer Objects
//!
//! Values handed from use cases to inbound adapters.

mod strategy_dto;

pub use strategy_dto::StrategyCalculationDto;
