//! Command handlers
//!
//! Each handler writes to a caller-supplied sink so it can be tested
//! without a terminal. Only the interactive handler needs a real one.

pub mod eval;
pub mod interactive;
pub mod keypad;
pub mod press;

pub use eval::execute_eval;
pub use interactive::{closing_line, draw_screen, execute_interactive, handle_event};
pub use keypad::execute_keypad;
pub use press::{collect_keys, execute_press};
