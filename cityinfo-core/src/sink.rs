//! Side channels that receive every failed lookup.

use crate::service::LookupError;

/// Receiver for lookup failures.
///
/// Called once per failed lookup before the error is handed back to the
/// caller. Implementations must not block and must not panic.
pub trait ErrorSink: Send + Sync {
    /// Record a failed lookup.
    fn record(&self, error: &LookupError);
}

#[derive(Debug, Clone, Copy, Default)]
/// Sink that emits one `tracing` error event per failure.
pub struct TracingSink;

impl ErrorSink for TracingSink {
    fn record(&self, error: &LookupError) {
        tracing::error!(
            city = error.city(),
            source = error.source_name(),
            kind = %error.kind(),
            "{error}"
        );
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Sink that drops everything.
pub struct NullSink;

impl ErrorSink for NullSink {
    fn record(&self, _error: &LookupError) {}
}
