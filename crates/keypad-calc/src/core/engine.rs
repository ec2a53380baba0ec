//! Expression engine state machine
//!
//! Owns the display string and turns key presses into edits of it.
//!
//! ```text
//!                digit / .                    operator
//! EnteringFirstOperand ──────────► (same) ───────────────► OperatorChosen
//!        ▲                                                    │  ▲
//!        │ equals (result seeds the next operand)     digit / │  │ operator
//!        │                                                  . ▼  │
//!        └──────────────────────────────────────────── EnteringOperand
//! ```
//!
//! `clear` forces `EnteringFirstOperand` from any state. Every operation is
//! total and leaves the display renderable.

use crate::core::evaluator::{self, PERCENT_MARKER};
use crate::core::format::format_number;
use crate::core::{Digit, Key, Operator};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Display shown by a fresh or cleared engine
pub const INITIAL_DISPLAY: &str = "0";

/// Where the engine is in the operand/operator cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Typing the first operand, or looking at a result
    EnteringFirstOperand,
    /// An operator was chosen and its right operand is not started yet
    OperatorChosen,
    /// Typing the second or a later operand
    EnteringOperand,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EnteringFirstOperand => write!(f, "entering first operand"),
            Self::OperatorChosen => write!(f, "operator chosen"),
            Self::EnteringOperand => write!(f, "entering operand"),
        }
    }
}

/// Serializable copy of the engine state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    /// Text shown to the user
    pub display: String,
    /// Most recently chosen operator
    pub pending_operator: Option<Operator>,
    /// True between choosing an operator (or `=`) and typing the next operand
    pub awaiting_operand: bool,
    /// Derived state machine phase
    pub phase: Phase,
}

/// Keypad calculator engine
///
/// The display is a space-separated sequence of operands and operators,
/// e.g. `"12 + 3.5 × "`, evaluated left to right on `equals`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionEngine {
    display: String,
    pending_operator: Option<Operator>,
    awaiting_operand: bool,
}

impl Default for ExpressionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpressionEngine {
    /// Creates an engine showing `"0"`
    #[must_use]
    pub fn new() -> Self {
        Self {
            display: INITIAL_DISPLAY.to_string(),
            pending_operator: None,
            awaiting_operand: false,
        }
    }

    /// Returns the display string
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Returns the most recently chosen operator
    #[must_use]
    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending_operator
    }

    /// Returns true while the next digit starts a new operand
    #[must_use]
    pub fn awaiting_operand(&self) -> bool {
        self.awaiting_operand
    }

    /// Returns the current state machine phase
    #[must_use]
    pub fn phase(&self) -> Phase {
        match (self.pending_operator, self.awaiting_operand) {
            (Some(_), true) => Phase::OperatorChosen,
            (Some(_), false) => Phase::EnteringOperand,
            (None, _) => Phase::EnteringFirstOperand,
        }
    }

    /// Returns a serializable copy of the state
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            display: self.display.clone(),
            pending_operator: self.pending_operator,
            awaiting_operand: self.awaiting_operand,
            phase: self.phase(),
        }
    }

    /// Dispatches a key press to its operation
    pub fn press(&mut self, key: Key) -> &str {
        match key {
            Key::Digit(d) => self.input_digit(d),
            Key::Decimal => self.input_decimal_point(),
            Key::Operator(op) => self.choose_operator(op),
            Key::ToggleSign => self.toggle_sign(),
            Key::Percent => self.percent(),
            Key::Equals => self.equals(),
            Key::Clear => self.clear(),
        }
    }

    /// Types a digit into the current operand
    ///
    /// A lone `0` operand is replaced rather than extended. Right after
    /// `equals` the digit starts a fresh number.
    pub fn input_digit(&mut self, digit: Digit) -> &str {
        let ch = digit.as_char();

        if self.showing_result() {
            self.display = ch.to_string();
        } else if self.ends_with_operator() {
            self.display.push(ch);
        } else {
            let start = self.operand_start();
            let keep = match &self.display[start..] {
                operand if operand.ends_with(PERCENT_MARKER) => None,
                "0" => Some(start),
                "-0" => Some(start + 1),
                _ => Some(self.display.len()),
            };
            if let Some(keep) = keep {
                self.display.truncate(keep);
                self.display.push(ch);
            }
        }

        self.awaiting_operand = false;
        self.rendered("input_digit")
    }

    /// Types the decimal point into the current operand, at most once
    pub fn input_decimal_point(&mut self) -> &str {
        if self.showing_result() {
            self.display = "0.".to_string();
        } else if self.ends_with_operator() {
            self.display.push_str("0.");
        } else {
            let operand = self.current_operand();
            if !operand.contains('.') && !operand.ends_with(PERCENT_MARKER) {
                self.display.push('.');
            }
        }

        self.awaiting_operand = false;
        self.rendered("input_decimal_point")
    }

    /// Chooses an operator
    ///
    /// Re-pressing the same operator before an operand is typed does nothing;
    /// pressing a different one replaces the dangling operator.
    pub fn choose_operator(&mut self, op: Operator) -> &str {
        match (self.pending_operator, self.awaiting_operand) {
            (Some(pending), true) if pending == op => {}
            (Some(pending), true) => {
                let old = operator_suffix(pending);
                if self.display.ends_with(&old) {
                    let keep = self.display.len() - old.len();
                    self.display.truncate(keep);
                }
                self.display.push_str(&operator_suffix(op));
            }
            _ => self.display.push_str(&operator_suffix(op)),
        }

        self.pending_operator = Some(op);
        self.awaiting_operand = true;
        self.rendered("choose_operator")
    }

    /// Toggles the leading `-` of the current operand
    ///
    /// A lone `"0"` keeps its sign, a trailing operand must parse as a number,
    /// and a dangling operator makes this a no-op.
    pub fn toggle_sign(&mut self) -> &str {
        let start = match self.operand_count_shape() {
            OperandShape::Single if self.display != INITIAL_DISPLAY => Some(0),
            OperandShape::Complete
                if evaluator::operand_value(self.current_operand()).is_some() =>
            {
                Some(self.operand_start())
            }
            _ => None,
        };

        if let Some(start) = start {
            if self.display[start..].starts_with('-') {
                self.display.remove(start);
            } else {
                self.display.insert(start, '-');
            }
        }

        self.rendered("toggle_sign")
    }

    /// Appends the percent marker to the current operand
    ///
    /// Skipped for a `"0"` operand, an operand already marked, or a
    /// dangling operator. The marker is resolved on `equals`.
    pub fn percent(&mut self) -> &str {
        if matches!(
            self.operand_count_shape(),
            OperandShape::Single | OperandShape::Complete
        ) {
            let operand = self.current_operand();
            if operand != "0" && !operand.ends_with(PERCENT_MARKER) {
                self.display.push(PERCENT_MARKER);
            }
        }

        self.rendered("percent")
    }

    /// Evaluates the display and replaces it with the result
    pub fn equals(&mut self) -> &str {
        let trimmed = self.display.trim();
        if trimmed.is_empty() || trimmed == INITIAL_DISPLAY {
            return self.rendered("equals");
        }

        let result = evaluator::evaluate(&self.display);
        debug!(expression = %self.display, result, "equals");

        self.display = format_number(result);
        self.pending_operator = None;
        self.awaiting_operand = true;
        self.rendered("equals")
    }

    /// Resets to the initial state
    pub fn clear(&mut self) -> &str {
        self.display.clear();
        self.display.push_str(INITIAL_DISPLAY);
        self.pending_operator = None;
        self.awaiting_operand = false;
        self.rendered("clear")
    }

    /// True right after `equals`, when the display holds a result
    fn showing_result(&self) -> bool {
        self.awaiting_operand && self.pending_operator.is_none()
    }

    fn ends_with_operator(&self) -> bool {
        self.operand_count_shape() == OperandShape::Dangling
    }

    fn operand_count_shape(&self) -> OperandShape {
        match evaluator::tokenize(&self.display).len() {
            1 => OperandShape::Single,
            n if n % 2 == 1 => OperandShape::Complete,
            _ => OperandShape::Dangling,
        }
    }

    /// Byte offset where the last token starts
    fn operand_start(&self) -> usize {
        self.display.rfind(' ').map_or(0, |i| i + 1)
    }

    /// The last token; empty while an operator dangles
    fn current_operand(&self) -> &str {
        &self.display[self.operand_start()..]
    }

    fn rendered(&self, action: &'static str) -> &str {
        debug!(
            action,
            display = %self.display,
            pending = ?self.pending_operator,
            awaiting = self.awaiting_operand,
            "engine updated"
        );
        &self.display
    }
}

impl fmt::Display for ExpressionEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

/// Token-count classes of the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OperandShape {
    /// One token: the first operand is being typed
    Single,
    /// Odd count of three or more: ends in an operand
    Complete,
    /// Even count: ends in an operator awaiting its operand
    Dangling,
}

fn operator_suffix(op: Operator) -> String {
    format!(" {} ", op.symbol())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digit(d: u8) -> Digit {
        Digit::new(d).unwrap()
    }

    fn type_keys(engine: &mut ExpressionEngine, keys: &str) {
        for text in keys.split_whitespace() {
            engine.press(text.parse().unwrap());
        }
    }

    fn engine_after(keys: &str) -> ExpressionEngine {
        let mut engine = ExpressionEngine::new();
        type_keys(&mut engine, keys);
        engine
    }

    // ===== Constructor tests =====

    #[test]
    fn test_engine_new() {
        let engine = ExpressionEngine::new();
        assert_eq!(engine.display(), "0");
        assert_eq!(engine.pending_operator(), None);
        assert!(!engine.awaiting_operand());
        assert_eq!(engine.phase(), Phase::EnteringFirstOperand);
    }

    #[test]
    fn test_engine_default_matches_new() {
        assert_eq!(ExpressionEngine::default(), ExpressionEngine::new());
    }

    // ===== input_digit tests =====

    #[test]
    fn test_digit_replaces_initial_zero() {
        let mut engine = ExpressionEngine::new();
        assert_eq!(engine.input_digit(digit(7)), "7");
    }

    #[test]
    fn test_digits_concatenate() {
        assert_eq!(engine_after("1 2 3").display(), "123");
    }

    #[test]
    fn test_zero_does_not_accumulate() {
        assert_eq!(engine_after("0 0 0").display(), "0");
        assert_eq!(engine_after("0 0 5").display(), "5");
    }

    #[test]
    fn test_digit_after_operator_starts_operand() {
        let engine = engine_after("5 + 3");
        assert_eq!(engine.display(), "5 + 3");
        assert!(!engine.awaiting_operand());
        assert_eq!(engine.phase(), Phase::EnteringOperand);
    }

    #[test]
    fn test_zero_operand_replaced_after_operator() {
        assert_eq!(engine_after("5 + 0 7").display(), "5 + 7");
    }

    #[test]
    fn test_negative_zero_operand_replaced_keeps_sign() {
        assert_eq!(engine_after("5 + 0 +/- 7").display(), "5 + -7");
    }

    #[test]
    fn test_digit_after_equals_starts_fresh() {
        assert_eq!(engine_after("5 + 3 = 2").display(), "2");
    }

    #[test]
    fn test_digit_after_percent_ignored() {
        assert_eq!(engine_after("9 % 1").display(), "9%");
    }

    // ===== input_decimal_point tests =====

    #[test]
    fn test_decimal_point_once_per_operand() {
        assert_eq!(engine_after("1 . 5 .").display(), "1.5");
        assert_eq!(engine_after(". .").display(), "0.");
    }

    #[test]
    fn test_decimal_point_in_later_operand() {
        assert_eq!(engine_after("1 . 5 + 2 . 5").display(), "1.5 + 2.5");
    }

    #[test]
    fn test_decimal_point_after_operator_starts_zero() {
        let engine = engine_after("5 + .");
        assert_eq!(engine.display(), "5 + 0.");
        assert!(!engine.awaiting_operand());
    }

    #[test]
    fn test_decimal_point_after_equals_starts_fresh() {
        assert_eq!(engine_after("1 ÷ 4 = .").display(), "0.");
    }

    #[test]
    fn test_decimal_point_on_percent_ignored() {
        assert_eq!(engine_after("9 % .").display(), "9%");
    }

    // ===== choose_operator tests =====

    #[test]
    fn test_operator_appends() {
        let engine = engine_after("7 +");
        assert_eq!(engine.display(), "7 + ");
        assert_eq!(engine.pending_operator(), Some(Operator::Add));
        assert!(engine.awaiting_operand());
        assert_eq!(engine.phase(), Phase::OperatorChosen);
    }

    #[test]
    fn test_same_operator_twice_is_noop() {
        let mut engine = engine_after("7 +");
        let before = engine.snapshot();
        engine.choose_operator(Operator::Add);
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn test_switching_operator_replaces_it() {
        let engine = engine_after("7 + ×");
        assert_eq!(engine.display(), "7 × ");
        assert_eq!(engine.pending_operator(), Some(Operator::Multiply));
        assert!(engine.awaiting_operand());
    }

    #[test]
    fn test_switching_operator_repeatedly_collapses() {
        assert_eq!(engine_after("7 + × - ÷ -").display(), "7 - ");
    }

    #[test]
    fn test_operator_chain_appends() {
        assert_eq!(engine_after("1 + 2 × 3").display(), "1 + 2 × 3");
    }

    #[test]
    fn test_operator_after_equals_continues_from_result() {
        let engine = engine_after("5 + 3 = ×");
        assert_eq!(engine.display(), "8 × ");
        assert_eq!(engine.pending_operator(), Some(Operator::Multiply));
    }

    #[test]
    fn test_operator_from_initial_zero() {
        assert_eq!(engine_after("-").display(), "0 - ");
    }

    // ===== toggle_sign tests =====

    #[test]
    fn test_toggle_sign_single_operand() {
        assert_eq!(engine_after("4 2 +/-").display(), "-42");
        assert_eq!(engine_after("4 2 +/- +/-").display(), "42");
    }

    #[test]
    fn test_toggle_sign_zero_ignored() {
        assert_eq!(engine_after("+/-").display(), "0");
    }

    #[test]
    fn test_toggle_sign_last_operand_only() {
        assert_eq!(engine_after("5 + 3 +/-").display(), "5 + -3");
        assert_eq!(engine_after("5 + 3 +/- +/-").display(), "5 + 3");
    }

    #[test]
    fn test_toggle_sign_dangling_operator_is_noop() {
        let mut engine = engine_after("5 +");
        let before = engine.snapshot();
        engine.toggle_sign();
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn test_toggle_sign_percent_operand() {
        assert_eq!(engine_after("5 + 1 0 % +/-").display(), "5 + -10%");
    }

    #[test]
    fn test_toggle_sign_unparseable_last_operand_ignored() {
        let mut engine = ExpressionEngine::new();
        engine.display = "5 + .".to_string();
        engine.pending_operator = Some(Operator::Add);
        engine.toggle_sign();
        assert_eq!(engine.display(), "5 + .");
    }

    #[test]
    fn test_toggle_sign_result() {
        assert_eq!(engine_after("2 - 5 = +/-").display(), "3");
    }

    // ===== percent tests =====

    #[test]
    fn test_percent_single_operand() {
        assert_eq!(engine_after("9 %").display(), "9%");
    }

    #[test]
    fn test_percent_once() {
        assert_eq!(engine_after("9 % %").display(), "9%");
    }

    #[test]
    fn test_percent_zero_ignored() {
        assert_eq!(engine_after("%").display(), "0");
        assert_eq!(engine_after("5 + 0 %").display(), "5 + 0");
    }

    #[test]
    fn test_percent_last_operand() {
        assert_eq!(engine_after("5 0 + 1 0 %").display(), "50 + 10%");
    }

    #[test]
    fn test_percent_dangling_operator_is_noop() {
        assert_eq!(engine_after("5 + %").display(), "5 + ");
    }

    // ===== equals tests =====

    #[test]
    fn test_equals_simple() {
        let engine = engine_after("5 + 3 =");
        assert_eq!(engine.display(), "8");
        assert_eq!(engine.pending_operator(), None);
        assert!(engine.awaiting_operand());
        assert_eq!(engine.phase(), Phase::EnteringFirstOperand);
    }

    #[test]
    fn test_equals_repeat_is_stable() {
        assert_eq!(engine_after("5 + 3 = =").display(), "8");
    }

    #[test]
    fn test_equals_on_zero_is_noop() {
        let mut engine = ExpressionEngine::new();
        engine.equals();
        assert_eq!(engine, ExpressionEngine::new());
    }

    #[test]
    fn test_equals_left_to_right() {
        assert_eq!(engine_after("2 + 3 × 4 =").display(), "20");
    }

    #[test]
    fn test_equals_percent_single() {
        assert_eq!(engine_after("9 % =").display(), "0.09");
    }

    #[test]
    fn test_equals_percent_of_result() {
        assert_eq!(engine_after("5 0 + 1 0 % =").display(), "55");
        assert_eq!(engine_after("5 0 × 1 0 % =").display(), "5");
    }

    #[test]
    fn test_equals_dangling_operator() {
        let engine = engine_after("5 + =");
        assert_eq!(engine.display(), "5");
        assert_eq!(engine.pending_operator(), None);
        assert_eq!(engine_after("5 + 3 × =").display(), "8");
    }

    #[test]
    fn test_equals_division_by_zero() {
        assert_eq!(engine_after("1 ÷ 0 =").display(), "Infinity");
        assert_eq!(engine_after("0 . ÷ 0 =").display(), "NaN");
    }

    #[test]
    fn test_equals_result_chains() {
        assert_eq!(engine_after("1 0 ÷ 4 = × 2 =").display(), "5");
    }

    // ===== clear tests =====

    #[test]
    fn test_clear_resets_everything() {
        let mut engine = engine_after("1 2 + 3 ×");
        assert_eq!(engine.clear(), "0");
        assert_eq!(engine, ExpressionEngine::new());
    }

    #[test]
    fn test_clear_after_equals() {
        let mut engine = engine_after("1 2 + 3 =");
        engine.clear();
        assert!(!engine.awaiting_operand());
        assert_eq!(engine.phase(), Phase::EnteringFirstOperand);
    }

    // ===== snapshot tests =====

    #[test]
    fn test_snapshot_fields() {
        let snapshot = engine_after("7 + ×").snapshot();
        assert_eq!(snapshot.display, "7 × ");
        assert_eq!(snapshot.pending_operator, Some(Operator::Multiply));
        assert!(snapshot.awaiting_operand);
        assert_eq!(snapshot.phase, Phase::OperatorChosen);
    }

    #[test]
    fn test_snapshot_serializes() {
        let json = serde_json::to_value(engine_after("5 +").snapshot()).unwrap();
        assert_eq!(json["display"], "5 + ");
        assert_eq!(json["pending_operator"], "add");
        assert_eq!(json["phase"], "operator_chosen");
    }

    #[test]
    fn test_engine_display_trait() {
        assert_eq!(engine_after("1 + 2").to_string(), "1 + 2");
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(Phase::OperatorChosen.to_string(), "operator chosen");
    }
}
