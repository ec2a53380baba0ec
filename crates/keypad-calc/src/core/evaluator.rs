//! Left-to-right expression evaluator
//!
//! Reduces a display string such as `"50 + 10%"` to a number. There is no
//! operator precedence: each `(operator, operand)` pair is applied to the
//! running result in the order it was typed.

use crate::core::Operator;
use tracing::{debug, trace};

/// Percent marker carried by an operand until evaluation
pub const PERCENT_MARKER: char = '%';

/// Splits a display string on single spaces, dropping empty fragments
#[must_use]
pub fn tokenize(expression: &str) -> Vec<&str> {
    expression.split(' ').filter(|t| !t.is_empty()).collect()
}

/// Parses a bare operand (no percent marker)
#[must_use]
pub fn parse_operand(token: &str) -> Option<f64> {
    token.parse().ok()
}

/// Parses an operand, turning a percent-marked operand into a fraction (`9%` is 0.09)
#[must_use]
pub fn operand_value(token: &str) -> Option<f64> {
    match token.strip_suffix(PERCENT_MARKER) {
        Some(bare) => parse_operand(bare).map(|p| p / 100.0),
        None => parse_operand(token),
    }
}

/// Evaluates a display string left to right
///
/// An expression with fewer than three tokens is a single operand. A pair
/// whose operand does not parse, or whose operator is not recognized, is
/// skipped and the running result is left unchanged.
#[must_use]
pub fn evaluate(expression: &str) -> f64 {
    let tokens = tokenize(expression);

    let Some(first) = tokens.first() else {
        return 0.0;
    };
    let mut result = operand_value(first).unwrap_or(0.0);

    if tokens.len() >= 3 {
        for pair in tokens[1..].chunks(2) {
            let [op_token, operand] = pair else {
                trace!(token = pair[0], "dangling operator ignored");
                continue;
            };
            let Some(op) = Operator::from_token(op_token) else {
                trace!(token = op_token, "unrecognized operator skipped");
                continue;
            };
            let Some(value) = effective_operand(result, op, operand) else {
                trace!(token = operand, "malformed operand skipped");
                continue;
            };
            result = op.apply(result, value);
            trace!(%op, value, result, "applied");
        }
    }

    debug!(expression, result, "evaluated");
    result
}

/// Resolves the right-hand value of one pair
///
/// `+`/`-` with `p%` use `p` percent of the running result; `×`/`÷` use `p / 100`.
fn effective_operand(result: f64, op: Operator, operand: &str) -> Option<f64> {
    match operand.strip_suffix(PERCENT_MARKER) {
        Some(bare) => {
            let p = parse_operand(bare)?;
            if op.is_additive() {
                Some(result * p / 100.0)
            } else {
                Some(p / 100.0)
            }
        }
        None => parse_operand(operand),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== Tokenizer tests =====

    #[test]
    fn test_tokenize_drops_empty_fragments() {
        assert_eq!(tokenize("5 + "), vec!["5", "+"]);
        assert_eq!(tokenize("  3  ×  4 "), vec!["3", "×", "4"]);
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_operand_value() {
        assert_eq!(operand_value("12.5"), Some(12.5));
        assert_eq!(operand_value("9%"), Some(0.09));
        assert_eq!(operand_value("-50%"), Some(-0.5));
        assert_eq!(operand_value("%"), None);
        assert_eq!(operand_value("abc"), None);
    }

    // ===== Single operand tests =====

    #[test]
    fn test_evaluate_single_number() {
        assert_eq!(evaluate("5"), 5.0);
        assert_eq!(evaluate("-3.25"), -3.25);
    }

    #[test]
    fn test_evaluate_single_percent() {
        assert_eq!(evaluate("9%"), 0.09);
    }

    #[test]
    fn test_evaluate_unparseable_single_is_zero() {
        assert_eq!(evaluate("."), 0.0);
        assert_eq!(evaluate(""), 0.0);
        assert_eq!(evaluate("   "), 0.0);
    }

    #[test]
    fn test_evaluate_dangling_operator_uses_first_operand() {
        assert_eq!(evaluate("5 + "), 5.0);
    }

    // ===== Binary tests =====

    #[test]
    fn test_evaluate_all_operators() {
        assert_eq!(evaluate("3 + 4"), 7.0);
        assert_eq!(evaluate("10 - 4"), 6.0);
        assert_eq!(evaluate("6 × 7"), 42.0);
        assert_eq!(evaluate("10 ÷ 4"), 2.5);
    }

    #[test]
    fn test_evaluate_left_to_right_without_precedence() {
        // (2 + 3) × 4, not 2 + (3 × 4)
        assert_eq!(evaluate("2 + 3 × 4"), 20.0);
        assert_eq!(evaluate("10 - 4 ÷ 2"), 3.0);
    }

    #[test]
    fn test_evaluate_percent_of_running_result() {
        assert_eq!(evaluate("50 + 10%"), 55.0);
        assert_eq!(evaluate("200 - 25%"), 150.0);
    }

    #[test]
    fn test_evaluate_percent_as_fraction() {
        assert_eq!(evaluate("50 × 10%"), 5.0);
        assert_eq!(evaluate("5 ÷ 50%"), 10.0);
    }

    #[test]
    fn test_evaluate_percent_first_operand() {
        assert_eq!(evaluate("50% + 1"), 1.5);
    }

    #[test]
    fn test_evaluate_negative_operands() {
        assert_eq!(evaluate("-5 + 10"), 5.0);
        assert_eq!(evaluate("5 × -2"), -10.0);
    }

    // ===== Tolerance tests =====

    #[test]
    fn test_evaluate_skips_malformed_operand() {
        assert_eq!(evaluate("5 + . × 2"), 10.0);
        assert_eq!(evaluate("5 + abc"), 5.0);
    }

    #[test]
    fn test_evaluate_skips_unknown_operator() {
        assert_eq!(evaluate("5 ^ 2 + 1"), 6.0);
    }

    #[test]
    fn test_evaluate_trailing_operator_ignored() {
        assert_eq!(evaluate("5 + 3 × "), 8.0);
    }

    #[test]
    fn test_evaluate_division_by_zero() {
        assert!(evaluate("1 ÷ 0").is_infinite());
        assert!(evaluate("-1 ÷ 0").is_sign_negative());
        assert!(evaluate("0 ÷ 0").is_nan());
    }

    #[test]
    fn test_evaluate_non_finite_operand_round_trips() {
        assert!(evaluate("Infinity - 1").is_infinite());
        assert!(evaluate("NaN + 1").is_nan());
    }
}
