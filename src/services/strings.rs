// String service: text transformation operations
//
// All operations work on Unicode code points, never raw bytes, so
// multi-byte characters survive reversal and truncation intact. The one
// deliberate exception is the reported length of processed text, which
// counts UTF-16 code units so that counts line up with JavaScript's
// String.length for consumers comparing output across runtimes.

use super::logging::NoopLogger;
use super::traits::Logger;
use crate::error::{Result, ServiceError};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use unicode_normalization::UnicodeNormalization;

/// Suffix appended by [`StringService::truncate`]
pub const DEFAULT_TRUNCATE_SUFFIX: &str = "...";

/// Options for [`StringService::process`]
///
/// Unset options default to absent/false. Transformations apply in fixed
/// order: trim, then uppercase, then prefix, then suffix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessOptions {
    /// Trim leading and trailing whitespace
    pub trim: bool,

    /// Convert to uppercase
    pub uppercase: bool,

    /// Text prepended after trim/uppercase have run
    pub prefix: Option<String>,

    /// Text appended last
    pub suffix: Option<String>,
}

/// Outcome of a successful [`StringService::process`] call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedText {
    /// The unmodified input text
    pub original: String,

    /// The text after all requested transformations
    pub processed: String,

    /// Length of `processed` in UTF-16 code units
    ///
    /// Not a code-point or byte count: characters outside the Basic
    /// Multilingual Plane count as two units, matching JavaScript's
    /// `String.length`.
    pub length: usize,
}

/// Text transformation service
///
/// Construct with [`StringService::new`] for silent operation or
/// [`StringService::with_logger`] to record successful `process` calls at
/// debug level.
///
/// Usage:
///     let strings = StringService::new();
///     let options = ProcessOptions { trim: true, uppercase: true, ..Default::default() };
///     let result = strings.process("  hi  ", &options)?;
///     assert_eq!(result.processed, "HI");
pub struct StringService {
    logger: Arc<dyn Logger>,
}

impl StringService {
    /// Create a string service that does not log
    pub fn new() -> Self {
        Self {
            logger: Arc::new(NoopLogger),
        }
    }

    /// Create a string service that logs successful processing
    pub fn with_logger(logger: Arc<dyn Logger>) -> Self {
        Self { logger }
    }

    /// Transform text according to the given options
    ///
    /// Applies trim, uppercase, prefix and suffix in that order, each only
    /// when requested. On success a single debug entry records input and
    /// output; failures log nothing.
    ///
    /// # Errors
    /// `ServiceError::EmptyInput` when `text` is the empty string. Only the
    /// empty string is rejected; whitespace-only text is accepted.
    pub fn process(&self, text: &str, options: &ProcessOptions) -> Result<ProcessedText> {
        if text.is_empty() {
            return Err(ServiceError::EmptyInput);
        }

        let mut processed = text.to_string();

        if options.trim {
            processed = processed.trim().to_string();
        }

        if options.uppercase {
            processed = processed.to_uppercase();
        }

        if let Some(prefix) = &options.prefix {
            processed = format!("{prefix}{processed}");
        }

        if let Some(suffix) = &options.suffix {
            processed.push_str(suffix);
        }

        let length = processed.encode_utf16().count();

        self.logger.debug(
            "text processed",
            &[json!({ "input": text, "output": processed })],
        );

        Ok(ProcessedText {
            original: text.to_string(),
            processed,
            length,
        })
    }

    /// Reverse the sequence of Unicode code points
    ///
    /// Multi-byte characters stay intact: `reverse("Hello 世界")` is
    /// `"界世 olleH"`. The operation is an involution.
    pub fn reverse(&self, text: &str) -> String {
        text.chars().rev().collect()
    }

    /// Whether the text reads the same forwards and backwards
    ///
    /// Comparison is case-insensitive and ignores everything that is not a
    /// Unicode letter or digit. Text is decomposed (NFD) first, so the
    /// filter also drops combining marks and accented forms compare equal
    /// to their base letters. The empty string is a palindrome.
    pub fn is_palindrome(&self, text: &str) -> bool {
        let normalized: String = text
            .to_lowercase()
            .nfd()
            .filter(|c| c.is_alphanumeric())
            .collect();

        let reversed: String = normalized.chars().rev().collect();
        normalized == reversed
    }

    /// Count whitespace-separated words
    ///
    /// Zero for empty or whitespace-only text; runs of consecutive
    /// whitespace count as a single separator.
    pub fn count_words(&self, text: &str) -> usize {
        text.split_whitespace().count()
    }

    /// Shorten text to at most `max_length` code points, ending in `"..."`
    ///
    /// See [`StringService::truncate_with`] for the exact rules.
    pub fn truncate(&self, text: &str, max_length: usize) -> String {
        self.truncate_with(text, max_length, DEFAULT_TRUNCATE_SUFFIX)
    }

    /// Shorten text to at most `max_length` code points with a custom suffix
    ///
    /// Text no longer than `max_length` is returned unchanged. When the
    /// suffix alone is as long as or longer than `max_length`, the first
    /// `max_length` code points of the text are returned and the suffix is
    /// dropped entirely, never partially applied. Otherwise the result is
    /// `max_length - suffix_length` code points of text plus the full
    /// suffix, for a total length of exactly `max_length`.
    pub fn truncate_with(&self, text: &str, max_length: usize, suffix: &str) -> String {
        let text_length = text.chars().count();

        if text_length <= max_length {
            return text.to_string();
        }

        let suffix_length = suffix.chars().count();

        if suffix_length >= max_length {
            return text.chars().take(max_length).collect();
        }

        let mut result: String = text.chars().take(max_length - suffix_length).collect();
        result.push_str(suffix);
        result
    }
}

impl Default for StringService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::services::traits::MockLogger;

    #[test]
    fn test_process_empty_input_fails() {
        let strings = StringService::new();

        let err = strings.process("", &ProcessOptions::default()).unwrap_err();
        assert_eq!(err, ServiceError::EmptyInput);
        assert_eq!(err.code(), ErrorCode::EmptyInput);
        assert_eq!(err.to_string(), "Input text cannot be empty");
    }

    #[test]
    fn test_process_accepts_whitespace_only_text() {
        let strings = StringService::new();

        let result = strings.process("   ", &ProcessOptions::default()).unwrap();
        assert_eq!(result.processed, "   ");
        assert_eq!(result.length, 3);
    }

    #[test]
    fn test_process_without_options_is_identity() {
        let strings = StringService::new();

        let result = strings.process("Hello", &ProcessOptions::default()).unwrap();
        assert_eq!(result.original, "Hello");
        assert_eq!(result.processed, "Hello");
        assert_eq!(result.length, 5);
    }

    #[test]
    fn test_process_trim_and_uppercase() {
        let strings = StringService::new();
        let options = ProcessOptions {
            trim: true,
            uppercase: true,
            ..Default::default()
        };

        let result = strings.process("  hi  ", &options).unwrap();
        assert_eq!(result.original, "  hi  ");
        assert_eq!(result.processed, "HI");
        assert_eq!(result.length, 2);
    }

    #[test]
    fn test_process_applies_options_in_fixed_order() {
        let strings = StringService::new();
        let options = ProcessOptions {
            trim: true,
            uppercase: true,
            prefix: Some(">> ".to_string()),
            suffix: Some(" <<".to_string()),
        };

        // Prefix and suffix attach after trim/uppercase, untouched by them
        let result = strings.process("  core  ", &options).unwrap();
        assert_eq!(result.processed, ">> CORE <<");
    }

    #[test]
    fn test_process_options_deserialize_from_partial_json() {
        // Unmentioned fields take their defaults
        let options: ProcessOptions = serde_json::from_str(r#"{"trim": true}"#).unwrap();
        assert!(options.trim);
        assert!(!options.uppercase);
        assert_eq!(options.prefix, None);
        assert_eq!(options.suffix, None);

        let empty: ProcessOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, ProcessOptions::default());
    }

    #[test]
    fn test_process_length_counts_utf16_units() {
        let strings = StringService::new();

        let accented = strings.process("héllo", &ProcessOptions::default()).unwrap();
        assert_eq!(accented.length, 5);

        let cjk = strings.process("世界", &ProcessOptions::default()).unwrap();
        assert_eq!(cjk.length, 2);

        // Outside the BMP a character takes a surrogate pair: two units
        let emoji = strings.process("👍", &ProcessOptions::default()).unwrap();
        assert_eq!(emoji.length, 2);
    }

    #[test]
    fn test_process_logs_success_with_context() {
        let mut mock = MockLogger::new();
        mock.expect_debug()
            .withf(|message, context| {
                message == "text processed"
                    && context.len() == 1
                    && context[0]["input"] == "  hi  "
                    && context[0]["output"] == "HI"
            })
            .times(1)
            .returning(|_, _| ());

        let strings = StringService::with_logger(Arc::new(mock));
        let options = ProcessOptions {
            trim: true,
            uppercase: true,
            ..Default::default()
        };

        strings.process("  hi  ", &options).unwrap();
    }

    #[test]
    fn test_process_logs_nothing_on_failure() {
        let mut mock = MockLogger::new();
        mock.expect_debug().never();

        let strings = StringService::with_logger(Arc::new(mock));
        assert!(strings.process("", &ProcessOptions::default()).is_err());
    }

    #[test]
    fn test_reverse_preserves_multibyte_characters() {
        let strings = StringService::new();

        assert_eq!(strings.reverse("Hello 世界"), "界世 olleH");
        assert_eq!(strings.reverse("abc"), "cba");
        assert_eq!(strings.reverse(""), "");
    }

    #[test]
    fn test_reverse_is_an_involution() {
        let strings = StringService::new();

        for text in ["", "a", "Hello 世界", "héllo 👍", "  spaced  "] {
            assert_eq!(strings.reverse(&strings.reverse(text)), text);
        }
    }

    #[test]
    fn test_is_palindrome_basics() {
        let strings = StringService::new();

        assert!(strings.is_palindrome(""));
        assert!(strings.is_palindrome("a"));
        assert!(strings.is_palindrome("ABBA"));
        assert!(strings.is_palindrome("12321"));
        assert!(!strings.is_palindrome("hello"));
    }

    #[test]
    fn test_is_palindrome_ignores_case_and_punctuation() {
        let strings = StringService::new();

        assert!(strings.is_palindrome("A man a plan a canal Panama"));
        assert!(strings.is_palindrome("No 'x' in Nixon"));
        assert!(!strings.is_palindrome("almost a palindrome, this is not"));
    }

    #[test]
    fn test_is_palindrome_is_accent_insensitive() {
        let strings = StringService::new();

        // Decomposition strips the combining marks before comparison
        assert!(strings.is_palindrome("Évé"));
        assert!(strings.is_palindrome("sées"));
    }

    #[test]
    fn test_count_words() {
        let strings = StringService::new();

        assert_eq!(strings.count_words(""), 0);
        assert_eq!(strings.count_words("   "), 0);
        assert_eq!(strings.count_words("hello"), 1);
        assert_eq!(strings.count_words("a  b"), 2);
        assert_eq!(strings.count_words("  lorem ipsum dolor  "), 3);
        assert_eq!(strings.count_words("a\tb\nc"), 3);
    }

    #[test]
    fn test_truncate_short_text_unchanged() {
        let strings = StringService::new();

        assert_eq!(strings.truncate("hi", 10), "hi");
        assert_eq!(strings.truncate("hello", 5), "hello");
    }

    #[test]
    fn test_truncate_long_text_to_exact_length() {
        let strings = StringService::new();

        let result = strings.truncate("hello world", 8);
        assert_eq!(result, "hello...");
        assert_eq!(result.chars().count(), 8);
    }

    #[test]
    fn test_truncate_drops_suffix_when_it_would_not_fit() {
        let strings = StringService::new();

        // Suffix as long as the limit: plain cut, no partial suffix
        assert_eq!(strings.truncate("hello world", 3), "hel");
        assert_eq!(strings.truncate("hello world", 2), "he");
        assert_eq!(strings.truncate("hello world", 0), "");
    }

    #[test]
    fn test_truncate_counts_code_points() {
        let strings = StringService::new();

        // 8 characters of Japanese text cut down to 5
        let result = strings.truncate("日本語のテキスト", 5);
        assert_eq!(result, "日本...");
        assert_eq!(result.chars().count(), 5);
    }

    #[test]
    fn test_truncate_with_custom_suffix() {
        let strings = StringService::new();

        let result = strings.truncate_with("hello world", 8, "…");
        assert_eq!(result, "hello w…");
        assert_eq!(result.chars().count(), 8);

        assert_eq!(strings.truncate_with("hello world", 5, ""), "hello");
    }

    #[test]
    fn test_truncate_never_exceeds_max_length() {
        let strings = StringService::new();

        for max_length in 0..15 {
            let result = strings.truncate("hello wonderful world", max_length);
            assert!(result.chars().count() <= max_length);
        }
    }
}
