//! Keypad Calculator - expression engine for a four-function keypad
//!
//! Turns a stream of button presses (digits, decimal point, operators,
//! sign toggle, percent, clear, equals) into a display string, and reduces
//! that string left to right on equals. There is no operator precedence:
//! `2 + 3 × 4` is `20`.
//!
//! Every engine operation is total. A shell calls one operation per key and
//! renders the returned display verbatim.
//!
//! # Example
//!
//! ```rust
//! use keypad_calc::prelude::*;
//!
//! let mut engine = ExpressionEngine::new();
//! for key in ["5", "0", "+", "1", "0", "%"] {
//!     engine.press(key.parse().unwrap());
//! }
//! assert_eq!(engine.display(), "50 + 10%");
//!
//! // Percent after + or - is a share of the running result
//! assert_eq!(engine.equals(), "55");
//!
//! // The evaluator can also be used on its own
//! assert_eq!(evaluate("10 ÷ 4"), 2.5);
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;
pub mod keypad;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::{
        evaluate, format_number, CalcError, CalcResult, Digit, EngineSnapshot, ExpressionEngine,
        Key, Operator, Phase,
    };
    pub use crate::driver::{EngineDriver, KeypadDriver};
    pub use crate::keypad::{ButtonStyle, Keypad, KeypadButton};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let mut engine = ExpressionEngine::new();
        engine.press(Key::Digit(Digit::new(2).unwrap()));
        assert_eq!(engine.display(), "2");
    }

    #[test]
    fn test_evaluate_round_trips() {
        assert_eq!(evaluate("3 + 4"), 7.0);
        assert_eq!(evaluate("10 ÷ 4"), 2.5);
        assert_eq!(evaluate("50 + 10%"), 55.0);
        assert_eq!(evaluate("50 × 10%"), 5.0);
        assert_eq!(evaluate("5"), 5.0);
    }

    #[test]
    fn test_keypad_drives_engine() {
        let keypad = Keypad::new();
        let mut engine = ExpressionEngine::new();
        for id in ["btn-9", "btn-percent", "btn-equals"] {
            let key = keypad.handle_click(id).unwrap();
            engine.press(key);
        }
        assert_eq!(engine.display(), "0.09");
    }

    #[test]
    fn test_result_formatting_matches_display() {
        let mut engine = ExpressionEngine::new();
        for key in ["1", "÷", "3", "="] {
            engine.press(key.parse().unwrap());
        }
        assert_eq!(engine.display(), format_number(1.0 / 3.0));
    }
}
