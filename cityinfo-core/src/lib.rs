//! Core types and service wiring for the city-info aggregator.

/// Domain models returned by providers and by the service.
pub mod model;
/// Traits describing the provider interfaces and their errors.
pub mod ports;
/// High-level service facade that fans out to both providers.
pub mod service;
/// Observability sinks for failed lookups.
pub mod sink;
/// In-memory provider implementations for tests and offline runs.
pub mod stub;

pub use model::*;
pub use ports::*;
pub use service::*;
pub use sink::*;
