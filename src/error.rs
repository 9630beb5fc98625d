// Centralized error handling using thiserror for type-safe error management
//
// Design Decision: a closed two-variant error enum plus a stable code enum.
// Every fallible operation in the crate returns Result<T>; failure is an
// ordinary return value, never a panic. Callers are expected to branch on
// ErrorCode (or the variant itself), not on message text.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error type for all fallible service operations
///
/// Exactly two failure conditions exist in the library; each carries a fixed
/// human-readable message (via `Display`) and maps to a stable
/// machine-readable [`ErrorCode`].
///
/// Usage:
///     match calculator.divide(1.0, 0.0) {
///         Ok(result) => println!("{}", result.value),
///         Err(e) if e.code() == ErrorCode::DivisionByZero => { /* handle */ }
///         Err(e) => eprintln!("{e}"),
///     }
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// Divisor was exactly zero in a division
    ///
    /// Raised only by `CalculatorService::divide`. Note that `-0.0` compares
    /// equal to zero and also triggers this error.
    #[error("Division by zero is not allowed")]
    DivisionByZero,

    /// Empty input text passed to text processing
    ///
    /// Raised only by `StringService::process`. Whitespace-only text is not
    /// empty and is accepted.
    #[error("Input text cannot be empty")]
    EmptyInput,
}

impl ServiceError {
    /// Stable machine-readable code for this error
    ///
    /// Codes are the contract surface for programmatic handling; messages
    /// may be reworded, codes may not.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::DivisionByZero => ErrorCode::DivisionByZero,
            Self::EmptyInput => ErrorCode::EmptyInput,
        }
    }
}

/// Stable error code tokens
///
/// Serializes as the SCREAMING_SNAKE_CASE token (`"DIVISION_BY_ZERO"`,
/// `"EMPTY_INPUT"`) so the code survives a JSON boundary unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    DivisionByZero,
    EmptyInput,
}

impl ErrorCode {
    /// The token form of this code
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DivisionByZero => "DIVISION_BY_ZERO",
            Self::EmptyInput => "EMPTY_INPUT",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type alias for Result with ServiceError
///
/// Use this instead of `std::result::Result<T, ServiceError>` for
/// convenience.
pub type Result<T> = std::result::Result<T, ServiceError>;
