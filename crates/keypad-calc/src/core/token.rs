//! Typed keypad input
//!
//! Type-safe digits, operators and keys keep invalid input out of the
//! engine: anything that reaches an engine operation is already valid.

use crate::core::{CalcError, CalcResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single decimal digit (0-9)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    /// Creates a digit, or `None` when the value is above 9
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 9 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Returns the numeric value
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns the character this digit types
    #[must_use]
    pub const fn as_char(self) -> char {
        (b'0' + self.0) as char
    }
}

impl TryFrom<char> for Digit {
    type Error = CalcError;

    fn try_from(ch: char) -> CalcResult<Self> {
        ch.to_digit(10)
            .and_then(|d| Self::new(d as u8))
            .ok_or_else(|| CalcError::InvalidDigit(ch.to_string()))
    }
}

impl TryFrom<u8> for Digit {
    type Error = CalcError;

    fn try_from(value: u8) -> CalcResult<Self> {
        Self::new(value).ok_or_else(|| CalcError::InvalidDigit(value.to_string()))
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// The four keypad operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
}

impl Operator {
    /// All operators in keypad order (top to bottom)
    pub const ALL: [Self; 4] = [Self::Divide, Self::Multiply, Self::Subtract, Self::Add];

    /// Returns the glyph shown on the display and the button
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '×',
            Self::Divide => '÷',
        }
    }

    /// Parses a display glyph or one of its ASCII aliases
    #[must_use]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '×' | '*' | 'x' | 'X' => Some(Self::Multiply),
            '÷' | '/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Parses a display token such as `"×"`; multi-character text never matches
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Self::from_symbol(ch),
            _ => None,
        }
    }

    /// Applies the operator with IEEE-754 semantics (x / 0 is infinite or NaN)
    #[must_use]
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => a / b,
        }
    }

    /// Returns true for `+` and `-`, where a percent operand is a share of the running result
    #[must_use]
    pub const fn is_additive(self) -> bool {
        matches!(self, Self::Add | Self::Subtract)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One keypad button press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    /// Type a digit
    Digit(Digit),
    /// Type the decimal point
    Decimal,
    /// Choose an operator
    Operator(Operator),
    /// Toggle the sign of the current operand (+/-)
    ToggleSign,
    /// Mark the current operand as a percentage
    Percent,
    /// Evaluate the expression
    Equals,
    /// Reset everything (AC)
    Clear,
}

impl Key {
    /// Returns the button caption
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operator(op) => op.to_string(),
            Self::ToggleSign => "+/-".to_string(),
            Self::Percent => "%".to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "AC".to_string(),
        }
    }

    /// Maps a single typed character to a key, if any
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        if let Ok(digit) = Digit::try_from(ch) {
            return Some(Self::Digit(digit));
        }
        if let Some(op) = Operator::from_symbol(ch) {
            return Some(Self::Operator(op));
        }
        match ch {
            '.' | ',' => Some(Self::Decimal),
            '%' => Some(Self::Percent),
            '=' => Some(Self::Equals),
            '±' | 'n' | 'N' => Some(Self::ToggleSign),
            'c' | 'C' => Some(Self::Clear),
            _ => None,
        }
    }
}

impl From<Digit> for Key {
    fn from(digit: Digit) -> Self {
        Self::Digit(digit)
    }
}

impl From<Operator> for Key {
    fn from(op: Operator) -> Self {
        Self::Operator(op)
    }
}

impl FromStr for Key {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        let text = s.trim();
        match text.to_ascii_lowercase().as_str() {
            "ac" | "clear" => return Ok(Self::Clear),
            "+/-" | "neg" | "sign" => return Ok(Self::ToggleSign),
            "enter" | "equals" => return Ok(Self::Equals),
            _ => {}
        }

        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Self::from_char(ch).ok_or_else(|| CalcError::unknown_key(text)),
            _ => Err(CalcError::unknown_key(text)),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}
