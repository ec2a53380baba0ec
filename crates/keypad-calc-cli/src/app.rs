//! Interactive application state
//!
//! Wraps the engine with what the terminal shell needs on top of it: the
//! keypad layout, the last pressed button for highlighting, and a quit flag.

use keypad_calc::core::{ExpressionEngine, Key};
use keypad_calc::driver::KeypadDriver;
use keypad_calc::keypad::Keypad;
use tracing::debug;

use crate::input::KeyAction;

/// Terminal keypad application state
#[derive(Debug, Default)]
pub struct KeypadApp {
    engine: ExpressionEngine,
    keypad: Keypad,
    last_pressed: Option<Key>,
    should_quit: bool,
}

impl KeypadApp {
    /// Creates an app with a fresh engine
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the engine
    #[must_use]
    pub fn engine(&self) -> &ExpressionEngine {
        &self.engine
    }

    /// Returns the keypad layout
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns the most recently pressed key
    #[must_use]
    pub fn last_pressed(&self) -> Option<Key> {
        self.last_pressed
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Applies one input action
    pub fn apply(&mut self, action: KeyAction) {
        match action {
            KeyAction::Press(key) => self.press(key),
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
    }

    /// Presses the button with the given element ID, if it exists
    pub fn click(&mut self, element_id: &str) -> bool {
        match self.keypad.handle_click(element_id) {
            Some(key) => {
                self.press(key);
                true
            }
            None => false,
        }
    }
}

impl KeypadDriver for KeypadApp {
    fn press(&mut self, key: Key) {
        let shown = self.engine.press(key);
        debug!(key = %key, display = %shown, "key");
        self.last_pressed = Some(key);
    }

    fn display(&self) -> String {
        self.engine.display().to_string()
    }

    fn clear(&mut self) {
        self.engine.clear();
        self.last_pressed = None;
    }
}
