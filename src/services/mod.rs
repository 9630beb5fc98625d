// Service layer for dependency injection and testability
//
// Design Decision: trait-based capability contracts with constructor
// injection. Traits define the ports (logging, configuration, caching);
// concrete adapters (TracingLogger, EnvConfigProvider, MemoryCache) plug
// into them; the stateless services carry the business logic. Tests swap
// in mockall doubles without touching any real environment.
//
// Usage:
//     // Production code
//     let provider = Arc::new(EnvConfigProvider::load());
//     let config = ConfigService::new(provider);
//
//     // Test code
//     let provider = Arc::new(create_valid_provider(test_config));
//     let config = ConfigService::new(provider); // no env access
//
// Extension Points: add new capability traits as infrastructure needs grow
// (persistence, metrics, remote config, etc.)

pub mod cache;
pub mod calculator;
pub mod config;
pub mod logging;
#[cfg(test)]
pub mod mocks;
pub mod providers;
pub mod strings;
pub mod traits;

// Re-export commonly used types
pub use cache::MemoryCache;
pub use calculator::{Calculation, CalculatorService, Operation};
pub use config::ConfigService;
pub use logging::{NoopLogger, TracingLogger};
pub use providers::{EnvConfigProvider, StaticConfigProvider};
pub use strings::{ProcessOptions, ProcessedText, StringService};
pub use traits::{AppConfig, Cache, ConfigProvider, Logger};
