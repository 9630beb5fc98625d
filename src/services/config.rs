// Configuration service implementation
//
// Design Decision: the service owns no configuration data of its own. All
// values come from an injected ConfigProvider; the service adds the
// validation layer on top (provider self-report plus structural shape
// check). Swapping file, env or test configuration is a constructor
// argument, not a code change.

use super::traits::{AppConfig, ConfigProvider};
use serde_json::Value;
use std::sync::Arc;

/// Configuration access and validation service
///
/// Wraps a [`ConfigProvider`] and exposes the typed configuration along
/// with validity checks. The provider decides where configuration comes
/// from; this service decides whether it is usable.
///
/// Usage:
///     let provider = Arc::new(EnvConfigProvider::load());
///     let config = ConfigService::new(provider);
///     if config.is_config_valid() {
///         println!("{}", config.get_config().name);
///     }
pub struct ConfigService {
    provider: Arc<dyn ConfigProvider>,
}

impl ConfigService {
    /// Create a config service backed by the given provider
    pub fn new(provider: Arc<dyn ConfigProvider>) -> Self {
        Self { provider }
    }

    /// The current configuration, as reported by the provider
    pub fn get_config(&self) -> AppConfig {
        self.provider.get_config()
    }

    /// Whether the active configuration is usable
    ///
    /// True only when the provider reports itself valid and the
    /// configuration it returns passes the structural check in
    /// [`ConfigService::is_valid_config`]. A provider claiming validity is
    /// not trusted on its word alone.
    pub fn is_config_valid(&self) -> bool {
        if !self.provider.is_valid() {
            return false;
        }

        serde_json::to_value(self.provider.get_config())
            .map(|value| Self::is_valid_config(&value))
            .unwrap_or(false)
    }

    /// Whether an untyped JSON value has the configuration shape
    ///
    /// Accepts objects carrying string `name`, `version` and `description`
    /// fields; extra fields are tolerated. Null, arrays, primitives,
    /// missing fields and wrongly-typed fields are all rejected. Useful for
    /// vetting configuration read from JSON files or network payloads
    /// before deserializing.
    pub fn is_valid_config(value: &Value) -> bool {
        AppConfig::from_value(value).is_some()
    }

    /// The built-in default configuration
    ///
    /// Carries the crate name, the version resolved from the build manifest
    /// at runtime, and a fixed description. Providers fall back to these
    /// values field by field when their own source has gaps.
    pub fn default_config() -> AppConfig {
        AppConfig::default()
    }
}
