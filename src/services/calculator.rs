// Calculator service: pure arithmetic over f64 operands
//
// Every operation is deterministic and self-contained: no injected
// capabilities, no shared state between calls. The four arithmetic
// operations return a Result so failure (division by zero) is an ordinary
// value; the sign helpers are plain total functions and skip the Result
// wrapper entirely.

use crate::error::{Result, ServiceError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tag identifying which arithmetic operation produced a result
///
/// Serializes as the lowercase operation name (`"add"`, `"subtract"`,
/// `"multiply"`, `"divide"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// The lowercase name of this operation
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a successful arithmetic operation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    /// Which operation produced the value
    pub operation: Operation,

    /// The numeric result under IEEE double semantics
    pub value: f64,
}

/// Stateless arithmetic service
///
/// Usage:
///     let calculator = CalculatorService::new();
///     let sum = calculator.add(2.0, 3.0)?;
///     assert_eq!(sum.value, 5.0);
#[derive(Debug, Clone, Copy, Default)]
pub struct CalculatorService;

impl CalculatorService {
    /// Create a new calculator service
    pub fn new() -> Self {
        Self
    }

    /// Add two numbers; never fails
    pub fn add(&self, a: f64, b: f64) -> Result<Calculation> {
        Ok(Calculation {
            operation: Operation::Add,
            value: a + b,
        })
    }

    /// Subtract `b` from `a`; never fails
    pub fn subtract(&self, a: f64, b: f64) -> Result<Calculation> {
        Ok(Calculation {
            operation: Operation::Subtract,
            value: a - b,
        })
    }

    /// Multiply two numbers; never fails
    pub fn multiply(&self, a: f64, b: f64) -> Result<Calculation> {
        Ok(Calculation {
            operation: Operation::Multiply,
            value: a * b,
        })
    }

    /// Divide `a` by `b`
    ///
    /// Ordinary floating-point division, fractional results included.
    ///
    /// # Errors
    /// `ServiceError::DivisionByZero` when `b` is exactly zero (`-0.0`
    /// compares equal to zero and counts).
    pub fn divide(&self, a: f64, b: f64) -> Result<Calculation> {
        if b == 0.0 {
            return Err(ServiceError::DivisionByZero);
        }

        Ok(Calculation {
            operation: Operation::Divide,
            value: a / b,
        })
    }

    /// Absolute value
    pub fn abs(&self, x: f64) -> f64 {
        x.abs()
    }

    /// Whether `x` is strictly greater than zero
    pub fn is_positive(&self, x: f64) -> bool {
        x > 0.0
    }

    /// Whether `x` is strictly less than zero
    pub fn is_negative(&self, x: f64) -> bool {
        x < 0.0
    }

    /// Whether `x` equals zero
    ///
    /// Zero is neither positive nor negative; over the reals the three
    /// predicates are mutually exclusive and cover every value.
    pub fn is_zero(&self, x: f64) -> bool {
        x == 0.0
    }
}
