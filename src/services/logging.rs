// Logger implementations for production and for the absent-logger case
//
// TracingLogger is the real adapter: it forwards each level to the matching
// tracing macro, so the host application controls formatting and filtering
// through its own subscriber. NoopLogger is the explicit "no logger" value;
// constructing a service without a logger selects it, which keeps call
// sites free of presence checks.

use super::traits::Logger;
use serde_json::Value;

/// Logger adapter backed by the `tracing` macros
///
/// The context slice is recorded as a debug field when non-empty. This
/// crate never installs a subscriber; without one, tracing drops the events
/// itself, which makes the adapter safe in library position.
///
/// Usage:
///     let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
///     logger.debug("text processed", &[json!({"chars": 5})]);
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str, context: &[Value]) {
        if context.is_empty() {
            tracing::info!("{message}");
        } else {
            tracing::info!(?context, "{message}");
        }
    }

    fn warn(&self, message: &str, context: &[Value]) {
        if context.is_empty() {
            tracing::warn!("{message}");
        } else {
            tracing::warn!(?context, "{message}");
        }
    }

    fn error(&self, message: &str, context: &[Value]) {
        if context.is_empty() {
            tracing::error!("{message}");
        } else {
            tracing::error!(?context, "{message}");
        }
    }

    fn debug(&self, message: &str, context: &[Value]) {
        if context.is_empty() {
            tracing::debug!("{message}");
        } else {
            tracing::debug!(?context, "{message}");
        }
    }
}

/// Logger that discards everything
///
/// Stands in when no logger is supplied at construction time.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl Logger for NoopLogger {
    fn info(&self, _message: &str, _context: &[Value]) {}

    fn warn(&self, _message: &str, _context: &[Value]) {}

    fn error(&self, _message: &str, _context: &[Value]) {}

    fn debug(&self, _message: &str, _context: &[Value]) {}
}
