//! Application Layer - Use cases and port definitions.
//!
//! Orchestrates the domain calculation and reports outcomes through ports.

/// Data transfer objects returned by use cases.
pub mod dto;

/// Port interfaces for external systems.
pub mod ports;

/// Application use cases.
pub mod use_cases;
