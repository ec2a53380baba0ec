//! Keyboard input handling
//!
//! Maps terminal key events onto keypad keys. Only key presses count;
//! repeats and releases are ignored so one tap is one key.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use keypad_calc::core::{Key, Operator};

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Press a keypad key
    Press(Key),
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = event;

        if kind != KeyEventKind::Press {
            return KeyAction::None;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q' | 'd') => KeyAction::Quit,
                KeyCode::Char('l' | 'u') => KeyAction::Press(Key::Clear),
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char('q' | 'Q') | KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char(ch) => Key::from_char(ch).map_or(KeyAction::None, KeyAction::Press),
            KeyCode::Enter => KeyAction::Press(Key::Equals),
            KeyCode::Backspace | KeyCode::Delete => KeyAction::Press(Key::Clear),
            _ => KeyAction::None,
        }
    }
}

/// Keyboard shortcuts shown under the keypad
#[must_use]
pub fn shortcut_help() -> Vec<(&'static str, String)> {
    vec![
        ("0-9 .", "digits".to_string()),
        (
            "+ - * /",
            format!(
                "{} {} {} {}",
                Operator::Add,
                Operator::Subtract,
                Operator::Multiply,
                Operator::Divide
            ),
        ),
        ("n", "+/-".to_string()),
        ("%", "percent".to_string()),
        ("Enter =", "equals".to_string()),
        ("c Bksp", "AC".to_string()),
        ("q Esc", "quit".to_string()),
        ("click", "press a button".to_string()),
    ]
}
