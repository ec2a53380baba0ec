//! On-screen keypad layout
//!
//! Describes which button sits where so every shell draws the same grid and
//! maps a click or a typed character back to a [`Key`].

use crate::core::{Digit, Key, Operator};
use serde::{Deserialize, Serialize};

/// Visual group of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonStyle {
    /// AC, +/- and % (light grey)
    Function,
    /// Digits and the decimal point (dark grey)
    Digit,
    /// Operators and = (orange)
    Operator,
}

impl ButtonStyle {
    /// Returns the style group of a key
    #[must_use]
    pub const fn of(key: Key) -> Self {
        match key {
            Key::Clear | Key::ToggleSign | Key::Percent => Self::Function,
            Key::Digit(_) | Key::Decimal => Self::Digit,
            Key::Operator(_) | Key::Equals => Self::Operator,
        }
    }
}

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeypadButton {
    /// The key this button presses
    pub key: Key,
    /// Stable element ID (`btn-7`, `btn-plus`, ...)
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
    /// Number of columns covered
    pub span: usize,
}

impl KeypadButton {
    /// Creates a one-column button
    #[must_use]
    pub fn new(key: Key, row: usize, col: usize) -> Self {
        Self::wide(key, row, col, 1)
    }

    /// Creates a button covering `span` columns
    #[must_use]
    pub fn wide(key: Key, row: usize, col: usize, span: usize) -> Self {
        Self {
            key,
            id: button_id(key),
            row,
            col,
            span: span.max(1),
        }
    }

    /// Returns the caption
    #[must_use]
    pub fn label(&self) -> String {
        self.key.label()
    }

    /// Returns the style group
    #[must_use]
    pub fn style(&self) -> ButtonStyle {
        ButtonStyle::of(self.key)
    }

    /// Returns true if the button covers the given cell
    #[must_use]
    pub fn covers(&self, row: usize, col: usize) -> bool {
        self.row == row && (self.col..self.col + self.span).contains(&col)
    }
}

fn button_id(key: Key) -> String {
    match key {
        Key::Digit(d) => format!("btn-{d}"),
        Key::Decimal => "btn-decimal".to_string(),
        Key::Operator(op) => format!("btn-{}", op_name(op)),
        Key::ToggleSign => "btn-sign".to_string(),
        Key::Percent => "btn-percent".to_string(),
        Key::Equals => "btn-equals".to_string(),
        Key::Clear => "btn-clear".to_string(),
    }
}

/// Returns a name for an operator (for element IDs)
fn op_name(op: Operator) -> &'static str {
    match op {
        Operator::Add => "plus",
        Operator::Subtract => "minus",
        Operator::Multiply => "times",
        Operator::Divide => "divide",
    }
}

/// Keypad layout
/// ```text
/// [ AC ] [ +/- ] [ % ] [ ÷ ]
/// [ 7  ] [  8  ] [ 9 ] [ × ]
/// [ 4  ] [  5  ] [ 6 ] [ - ]
/// [ 1  ] [  2  ] [ 3 ] [ + ]
/// [      0     ] [ . ] [ = ]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
    cols: usize,
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard four-function keypad
    #[must_use]
    pub fn new() -> Self {
        let mut buttons = vec![
            KeypadButton::new(Key::Clear, 0, 0),
            KeypadButton::new(Key::ToggleSign, 0, 1),
            KeypadButton::new(Key::Percent, 0, 2),
            KeypadButton::new(Key::Operator(Operator::Divide), 0, 3),
        ];

        // Rows 1-3: digit triples with an operator on the right
        let rows = [
            ([7, 8, 9], Operator::Multiply),
            ([4, 5, 6], Operator::Subtract),
            ([1, 2, 3], Operator::Add),
        ];
        for (offset, (digits, op)) in rows.into_iter().enumerate() {
            let row = offset + 1;
            for (col, d) in digits.into_iter().enumerate() {
                if let Some(digit) = Digit::new(d) {
                    buttons.push(KeypadButton::new(Key::Digit(digit), row, col));
                }
            }
            buttons.push(KeypadButton::new(Key::Operator(op), row, 3));
        }

        if let Some(zero) = Digit::new(0) {
            buttons.push(KeypadButton::wide(Key::Digit(zero), 4, 0, 2));
        }
        buttons.push(KeypadButton::new(Key::Decimal, 4, 2));
        buttons.push(KeypadButton::new(Key::Equals, 4, 3));

        Self {
            buttons,
            cols: 4,
            rows: 5,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns all buttons in row-major order
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButton] {
        &self.buttons
    }

    /// Returns the buttons of one row, left to right
    pub fn row(&self, row: usize) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter().filter(move |b| b.row == row)
    }

    /// Gets the button covering a cell; a wide button answers for each of its columns
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row < self.rows && col < self.cols {
            self.buttons.iter().find(|b| b.covers(row, col))
        } else {
            None
        }
    }

    /// Finds a button by element ID
    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Finds the button that presses a key
    #[must_use]
    pub fn find_button_by_key(&self, key: Key) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.key == key)
    }

    /// Processes a click on an element ID and returns the key it presses
    #[must_use]
    pub fn handle_click(&self, element_id: &str) -> Option<Key> {
        self.find_button_by_id(element_id).map(|b| b.key)
    }
}
