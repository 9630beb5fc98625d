// Core trait definitions for service layer dependency injection
//
// Design Decision: capability contracts as object-safe traits
//
// Each external dependency of the library (logging, configuration
// retrieval, key-value caching) is described by a trait and consumed as
// Arc<dyn Trait> via constructor injection, never via global lookup. All
// traits are Send + Sync so implementations can be shared freely; automock
// derives a mock for each contract in test builds.
//
// The contracts themselves are synchronous: every operation in this library
// runs to completion before returning, so there are no suspension points to
// model.

use crate::version;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

/// Logging capability
///
/// Four level methods, each taking a message and an open-ended list of
/// auxiliary context values. No return value; implementations may no-op.
///
/// Services hold a logger unconditionally: "no logger" is the
/// [`NoopLogger`](super::NoopLogger) implementation, selected at
/// construction, so call sites never branch on presence.
///
/// Usage:
///     let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
///     logger.info("library ready", &[]);
#[cfg_attr(test, automock)]
pub trait Logger: Send + Sync {
    /// Record an informational message
    fn info(&self, message: &str, context: &[Value]);

    /// Record a warning
    fn warn(&self, message: &str, context: &[Value]);

    /// Record an error
    fn error(&self, message: &str, context: &[Value]);

    /// Record a debug-level message
    fn debug(&self, message: &str, context: &[Value]);
}

/// Configuration retrieval capability
///
/// Implementations must be side-effect-free and fast: both methods may be
/// called synchronously and repeatedly.
///
/// Usage:
///     let provider: Arc<dyn ConfigProvider> =
///         Arc::new(StaticConfigProvider::new(config));
///     let config = provider.get_config();
#[cfg_attr(test, automock)]
pub trait ConfigProvider: Send + Sync {
    /// Return the configuration value this provider supplies
    fn get_config(&self) -> AppConfig;

    /// Whether this provider considers itself valid
    ///
    /// A provider reporting `false` makes the whole configuration invalid,
    /// regardless of the config value it returns.
    fn is_valid(&self) -> bool;
}

/// Key-value caching capability
///
/// Values are `serde_json::Value` so any serializable payload can be
/// stored. Time-to-live is explicit: `None` means the entry never expires,
/// `Some(Duration::ZERO)` means it expires immediately. Expired entries are
/// evicted lazily, on the next access that touches them.
///
/// Implementations own their internal consistency; the library performs no
/// concurrent mutation of its own.
#[cfg_attr(test, automock)]
pub trait Cache: Send + Sync {
    /// Look up a value, evicting it first if its TTL has passed
    fn get(&self, key: &str) -> Option<Value>;

    /// Store a value, replacing any previous entry under the same key
    fn set(&self, key: &str, value: Value, ttl: Option<Duration>);

    /// Remove an entry, returning whether the key was present
    fn delete(&self, key: &str) -> bool;

    /// Whether a live (non-expired) entry exists for the key
    fn has(&self, key: &str) -> bool;
}

/// Application configuration value
///
/// Three required text fields; immutable once constructed. Produced by a
/// [`ConfigProvider`], consumed by the config service and the library
/// facade. A plain value, not an owned resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Library or application name
    pub name: String,

    /// Version string (semver or the development fallback)
    pub version: String,

    /// Human-readable description
    pub description: String,
}

impl AppConfig {
    /// Narrow an untyped JSON value into a config, if it has the right shape
    ///
    /// Returns `None` for null, primitives, arrays, objects with a missing
    /// field, or objects where a field is not a string. Extra fields are
    /// tolerated.
    pub fn from_value(value: &Value) -> Option<Self> {
        serde_json::from_value(value.clone()).ok()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: "svckit".to_string(),
            version: version::resolve(),
            description: "Stateless arithmetic and text processing services".to_string(),
        }
    }
}
