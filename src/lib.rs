// Library interface for svckit
// This exposes stateless calculation, text processing and configuration
// services that can be:
// - Used programmatically from Rust code
// - Wired with custom providers and loggers for testing
// - Embedded into larger applications via the Library facade

pub mod error;
pub mod library;
pub mod services; // Service layer for dependency injection
pub mod version;

// Re-export commonly used types for convenience
pub use error::{ErrorCode, Result, ServiceError};
pub use library::{create_library, create_library_with_logger, Library, LibraryBuilder};
pub use services::{
    AppConfig, Cache, Calculation, CalculatorService, ConfigProvider, ConfigService,
    EnvConfigProvider, Logger, MemoryCache, NoopLogger, Operation, ProcessOptions, ProcessedText,
    StaticConfigProvider, StringService, TracingLogger,
};
