//! Shell-independent keypad driver
//!
//! Every presentation shell exposes the same three calls: press a key,
//! read the display, clear. Scenario checks are written once against
//! [`KeypadDriver`] and run against any shell.

use crate::core::{CalcResult, ExpressionEngine, Key};

/// Abstract driver for keypad interactions
///
/// # Example
///
/// ```rust
/// use keypad_calc::driver::{EngineDriver, KeypadDriver};
///
/// let mut driver = EngineDriver::new();
/// assert_eq!(driver.press_str("5 + 3 =").unwrap(), "8");
/// ```
pub trait KeypadDriver {
    /// Presses one key
    fn press(&mut self, key: Key);

    /// Returns the current display text
    fn display(&self) -> String;

    /// Returns the calculator to its initial state
    fn clear(&mut self);

    /// Presses keys in order and returns the final display
    fn press_sequence(&mut self, keys: &[Key]) -> String {
        for key in keys {
            self.press(*key);
        }
        self.display()
    }

    /// Parses whitespace-separated key captions (`"9 % ="`) and presses them
    ///
    /// Nothing is pressed if any caption is unknown.
    fn press_str(&mut self, keys: &str) -> CalcResult<String> {
        let keys = parse_keys(keys)?;
        Ok(self.press_sequence(&keys))
    }
}

/// Parses whitespace-separated key captions
pub fn parse_keys(text: &str) -> CalcResult<Vec<Key>> {
    text.split_whitespace().map(str::parse).collect()
}

/// Driver wrapping a bare [`ExpressionEngine`]
#[derive(Debug, Default)]
pub struct EngineDriver {
    engine: ExpressionEngine,
}

impl EngineDriver {
    /// Creates a driver around a fresh engine
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the underlying engine
    #[must_use]
    pub fn engine(&self) -> &ExpressionEngine {
        &self.engine
    }
}

impl KeypadDriver for EngineDriver {
    fn press(&mut self, key: Key) {
        self.engine.press(key);
    }

    fn display(&self) -> String {
        self.engine.display().to_string()
    }

    fn clear(&mut self) {
        self.engine.clear();
    }
}

// ===== Unified Scenario Checks =====
// These work with ANY KeypadDriver implementation

/// Verifies the four operators
pub fn verify_basic_arithmetic<D: KeypadDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear();
    assert_eq!(driver.press_str("5 + 3 =")?, "8");
    driver.clear();
    assert_eq!(driver.press_str("1 0 - 4 =")?, "6");
    driver.clear();
    assert_eq!(driver.press_str("6 × 7 =")?, "42");
    driver.clear();
    assert_eq!(driver.press_str("1 0 ÷ 4 =")?, "2.5");
    driver.clear();
    Ok(())
}

/// Verifies that operators apply in typing order, without precedence
pub fn verify_left_to_right<D: KeypadDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear();
    assert_eq!(driver.press_str("2 + 3 × 4 =")?, "20");
    driver.clear();
    // A result seeds the next calculation
    assert_eq!(driver.press_str("5 + 3 = × 2 =")?, "16");
    driver.clear();
    Ok(())
}

/// Verifies both percent rules
pub fn verify_percent<D: KeypadDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear();
    assert_eq!(driver.press_str("9 %")?, "9%");
    assert_eq!(driver.press_str("=")?, "0.09");
    driver.clear();
    assert_eq!(driver.press_str("5 0 + 1 0 % =")?, "55");
    driver.clear();
    assert_eq!(driver.press_str("5 0 × 1 0 % =")?, "5");
    driver.clear();
    Ok(())
}

/// Verifies that a second operator replaces a dangling one
pub fn verify_operator_switching<D: KeypadDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear();
    assert_eq!(driver.press_str("7 + ×")?, "7 × ");
    assert_eq!(driver.press_str("×")?, "7 × ");
    assert_eq!(driver.press_str("3 =")?, "21");
    driver.clear();
    Ok(())
}

/// Verifies sign toggling on the first and on a trailing operand
pub fn verify_sign_toggle<D: KeypadDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear();
    assert_eq!(driver.press_str("+/-")?, "0");
    assert_eq!(driver.press_str("4 +/-")?, "-4");
    assert_eq!(driver.press_str("+ +/-")?, "-4 + ");
    assert_eq!(driver.press_str("6 +/- =")?, "-10");
    driver.clear();
    Ok(())
}

/// Runs every scenario check
pub fn run_all_scenarios<D: KeypadDriver>(driver: &mut D) -> CalcResult<()> {
    verify_basic_arithmetic(driver)?;
    verify_left_to_right(driver)?;
    verify_percent(driver)?;
    verify_operator_switching(driver)?;
    verify_sign_toggle(driver)
}
