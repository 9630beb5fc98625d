// Mock test helpers and common mock patterns
//
// Design Decision: centralized mock constructors with sensible defaults so
// individual tests only spell out the behavior they actually assert on.
//
// Usage:
//     use crate::services::mocks::test_helpers::*;
//     let provider = create_valid_provider(create_test_config("app", "1.0.0", "demo"));

#[cfg(test)]
pub mod test_helpers {
    use super::super::traits::*;
    use std::sync::Mutex;

    /// Serializes tests that touch process environment variables
    ///
    /// The environment is process-global and the test harness runs tests in
    /// parallel; every test that reads or writes env vars takes this lock
    /// first.
    pub static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Create a test AppConfig with the given fields
    pub fn create_test_config(name: &str, version: &str, description: &str) -> AppConfig {
        AppConfig {
            name: name.to_string(),
            version: version.to_string(),
            description: description.to_string(),
        }
    }

    /// Create a mock provider that reports itself valid and serves `config`
    pub fn create_valid_provider(config: AppConfig) -> MockConfigProvider {
        provider_with_validity(config, true)
    }

    /// Create a mock provider that serves `config` but reports itself invalid
    pub fn create_invalid_provider(config: AppConfig) -> MockConfigProvider {
        provider_with_validity(config, false)
    }

    fn provider_with_validity(config: AppConfig, valid: bool) -> MockConfigProvider {
        let mut mock = MockConfigProvider::new();

        mock.expect_get_config().returning(move || config.clone());
        mock.expect_is_valid().returning(move || valid);

        mock
    }

    /// Create a mock logger that silently accepts calls at every level
    ///
    /// Use when a test needs a logger present but makes no assertions about
    /// logging. Build a bare `MockLogger` with explicit expectations when
    /// the logging itself is under test.
    pub fn create_mock_logger() -> MockLogger {
        let mut mock = MockLogger::new();

        mock.expect_info().returning(|_, _| ());
        mock.expect_warn().returning(|_, _| ());
        mock.expect_error().returning(|_, _| ());
        mock.expect_debug().returning(|_, _| ());

        mock
    }

    /// Create a mock cache that behaves as permanently empty
    ///
    /// Default behavior:
    /// - get() returns None
    /// - has() returns false
    /// - set() is accepted and dropped
    /// - delete() reports nothing removed
    pub fn create_empty_cache() -> MockCache {
        let mut mock = MockCache::new();

        mock.expect_get().returning(|_| None);
        mock.expect_set().returning(|_, _, _| ());
        mock.expect_delete().returning(|_| false);
        mock.expect_has().returning(|_| false);

        mock
    }
}

#[cfg(test)]
mod tests {
    use super::super::traits::*;
    use super::test_helpers::*;
    use serde_json::json;
    use std::sync::Arc;

    #[test]
    fn test_create_test_config() {
        let config = create_test_config("app", "1.0.0", "demo");

        assert_eq!(config.name, "app");
        assert_eq!(config.version, "1.0.0");
        assert_eq!(config.description, "demo");
    }

    #[test]
    fn test_valid_provider_serves_config() {
        let config = create_test_config("app", "1.0.0", "demo");
        let provider = create_valid_provider(config.clone());

        assert_eq!(provider.get_config(), config);
        assert!(provider.is_valid());
    }

    #[test]
    fn test_invalid_provider_reports_invalid() {
        let provider = create_invalid_provider(create_test_config("app", "1.0.0", "demo"));

        assert!(!provider.is_valid());
    }

    #[test]
    fn test_mock_logger_accepts_all_levels() {
        let logger: Arc<dyn Logger> = Arc::new(create_mock_logger());

        logger.info("info", &[]);
        logger.warn("warn", &[json!({"key": "value"})]);
        logger.error("error", &[]);
        logger.debug("debug", &[]);
    }

    #[test]
    fn test_empty_cache_always_misses() {
        let cache = create_empty_cache();

        cache.set("key", json!(1), None);
        assert_eq!(cache.get("key"), None);
        assert!(!cache.has("key"));
        assert!(!cache.delete("key"));
    }
}
