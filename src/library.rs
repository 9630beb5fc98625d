// Library facade for programmatic access to all services
//
// Design principle: everything the crate can do is reachable from one
// wired object. The facade owns one instance of each service; dependencies
// come in through the builder and the same logger instance is shared by the
// facade and the string service.

use crate::services::traits::AppConfig;
use crate::services::{
    CalculatorService, ConfigProvider, ConfigService, EnvConfigProvider, Logger, NoopLogger,
    StringService,
};
use serde_json::Value;
use std::sync::Arc;

/// Entry point bundling the calculator, string and config services
///
/// Construct via [`Library::builder`] or the [`create_library`] /
/// [`create_library_with_logger`] factories. Accessors hand out references
/// to the long-lived service instances; nothing is rebuilt per call.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use svckit::{create_library, EnvConfigProvider};
///
/// let library = create_library(Arc::new(EnvConfigProvider::load()));
/// let info = library.get_info();
/// println!("{} v{}", info.name, info.version);
/// ```
pub struct Library {
    calculator: CalculatorService,
    strings: StringService,
    config: ConfigService,
    logger: Arc<dyn Logger>,
}

impl Library {
    /// Start building a library instance
    pub fn builder() -> LibraryBuilder {
        LibraryBuilder::new()
    }

    /// The arithmetic service
    pub fn calculator(&self) -> &CalculatorService {
        &self.calculator
    }

    /// The text processing service
    pub fn string_service(&self) -> &StringService {
        &self.strings
    }

    /// The configuration service
    pub fn config_service(&self) -> &ConfigService {
        &self.config
    }

    /// The active configuration, logged at info level on each call
    ///
    /// Returns exactly what [`ConfigService::get_config`] returns; the log
    /// entry carries the full configuration as context.
    pub fn get_info(&self) -> AppConfig {
        let config = self.config.get_config();
        let context = serde_json::to_value(&config).unwrap_or(Value::Null);
        self.logger.info("library info requested", &[context]);
        config
    }

    /// Whether the library considers its configuration usable
    ///
    /// Mirrors [`ConfigService::is_config_valid`]. Callers can gate startup
    /// on this without reaching into the config service.
    pub fn is_ready(&self) -> bool {
        self.config.is_config_valid()
    }
}

/// Builder for [`Library`] with overridable dependencies
///
/// Both dependencies have working defaults, so `build()` cannot fail:
/// configuration falls back to [`EnvConfigProvider::load`] and logging to
/// the silent [`NoopLogger`].
///
/// Usage:
///     let library = Library::builder()
///         .with_provider(Arc::new(StaticConfigProvider::new(config)))
///         .with_logger(Arc::new(TracingLogger))
///         .build();
pub struct LibraryBuilder {
    provider: Option<Arc<dyn ConfigProvider>>,
    logger: Option<Arc<dyn Logger>>,
}

impl LibraryBuilder {
    /// Create a builder with no overrides
    pub fn new() -> Self {
        Self {
            provider: None,
            logger: None,
        }
    }

    /// Override the configuration provider
    pub fn with_provider(mut self, provider: Arc<dyn ConfigProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Override the logger
    ///
    /// The instance is shared: the facade logs `get_info` calls through it
    /// and the string service logs its processing through it.
    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Build the wired library, filling unset dependencies with defaults
    pub fn build(self) -> Library {
        let provider = self
            .provider
            .unwrap_or_else(|| Arc::new(EnvConfigProvider::load()));
        let logger = self.logger.unwrap_or_else(|| Arc::new(NoopLogger));

        Library {
            calculator: CalculatorService::new(),
            strings: StringService::with_logger(logger.clone()),
            config: ConfigService::new(provider),
            logger,
        }
    }
}

impl Default for LibraryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a library wired to the given configuration provider
///
/// Logging defaults to the silent [`NoopLogger`].
pub fn create_library(provider: Arc<dyn ConfigProvider>) -> Library {
    Library::builder().with_provider(provider).build()
}

/// Create a library with both a configuration provider and a logger
pub fn create_library_with_logger(
    provider: Arc<dyn ConfigProvider>,
    logger: Arc<dyn Logger>,
) -> Library {
    Library::builder()
        .with_provider(provider)
        .with_logger(logger)
        .build()
}
