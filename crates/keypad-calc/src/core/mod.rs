//! Core calculator module
//!
//! The expression engine, its typed keys, the left-to-right evaluator and
//! the number formatter. Engine operations are total: the only fallible
//! calls are the conversions from raw text or characters into typed keys.

pub mod engine;
pub mod evaluator;
pub mod format;
pub mod token;

pub use engine::{EngineSnapshot, ExpressionEngine, Phase};
pub use evaluator::evaluate;
pub use format::format_number;
pub use token::{Digit, Key, Operator};

use thiserror::Error;

/// Result type for key conversions
pub type CalcResult<T> = Result<T, CalcError>;

/// Errors raised while turning raw input into typed keys
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Character or value is not a decimal digit
    #[error("Invalid digit: '{0}'")]
    InvalidDigit(String),

    /// Text does not name any keypad button
    #[error("Unknown key: '{0}'")]
    UnknownKey(String),
}

impl CalcError {
    /// Create an unknown key error
    #[must_use]
    pub fn unknown_key(text: impl Into<String>) -> Self {
        Self::UnknownKey(text.into())
    }
}
