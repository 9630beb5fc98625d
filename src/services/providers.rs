// Configuration provider implementations
//
// Design Decision: environment variables with defaults, snapshot at load
//
// EnvConfigProvider reads its values once at construction (after loading a
// .env file if present) and serves the snapshot from memory, so repeated
// get_config/is_valid calls stay side-effect-free and fast as the contract
// requires. StaticConfigProvider wraps a fixed value for embedders that
// configure programmatically.

use super::traits::{AppConfig, ConfigProvider};

/// Environment variable holding the configured name
pub const ENV_NAME: &str = "SVCKIT_NAME";

/// Environment variable holding the configured version
pub const ENV_VERSION: &str = "SVCKIT_VERSION";

/// Environment variable holding the configured description
pub const ENV_DESCRIPTION: &str = "SVCKIT_DESCRIPTION";

/// Configuration provider backed by environment variables
///
/// Loads `.env` via dotenvy (ignored if absent), then reads `SVCKIT_NAME`,
/// `SVCKIT_VERSION` and `SVCKIT_DESCRIPTION`. Missing variables fall back
/// to the corresponding [`AppConfig::default`] field. The provider reports
/// itself valid only when all three variables were explicitly set;
/// defaulted fields mean an incomplete environment.
///
/// Usage:
///     let provider = EnvConfigProvider::load();
///     if provider.is_valid() {
///         println!("configured as {}", provider.get_config().name);
///     }
#[derive(Debug, Clone)]
pub struct EnvConfigProvider {
    config: AppConfig,
    complete: bool,
}

impl EnvConfigProvider {
    /// Capture configuration from the environment
    pub fn load() -> Self {
        // Load .env file (ignore if not found)
        dotenvy::dotenv().ok();

        let name = std::env::var(ENV_NAME).ok();
        let version = std::env::var(ENV_VERSION).ok();
        let description = std::env::var(ENV_DESCRIPTION).ok();

        let complete = name.is_some() && version.is_some() && description.is_some();
        let defaults = AppConfig::default();

        let config = AppConfig {
            name: name.unwrap_or(defaults.name),
            version: version.unwrap_or(defaults.version),
            description: description.unwrap_or(defaults.description),
        };

        Self { config, complete }
    }
}

impl ConfigProvider for EnvConfigProvider {
    fn get_config(&self) -> AppConfig {
        self.config.clone()
    }

    fn is_valid(&self) -> bool {
        self.complete
    }
}

/// Configuration provider wrapping a fixed value
///
/// Always valid. The usual choice when the embedding application already
/// holds its configuration in memory.
///
/// Usage:
///     let provider = StaticConfigProvider::new(AppConfig {
///         name: "my-app".to_string(),
///         version: "1.0.0".to_string(),
///         description: "example".to_string(),
///     });
#[derive(Debug, Clone)]
pub struct StaticConfigProvider {
    config: AppConfig,
}

impl StaticConfigProvider {
    /// Wrap a fixed configuration value
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }
}

impl ConfigProvider for StaticConfigProvider {
    fn get_config(&self) -> AppConfig {
        self.config.clone()
    }

    fn is_valid(&self) -> bool {
        true
    }
}
