//! Keypad command handler

use std::io::Write;

use keypad_calc::keypad::{ButtonStyle, Keypad};

use crate::error::CliResult;
use crate::render::{keypad_width, render_keypad};

fn style_name(style: ButtonStyle) -> &'static str {
    match style {
        ButtonStyle::Function => "function",
        ButtonStyle::Digit => "digit",
        ButtonStyle::Operator => "operator",
    }
}

/// Execute the keypad command: the grid, a rule, then one line per button
pub fn execute_keypad<W: Write>(out: &mut W) -> CliResult<()> {
    let keypad = Keypad::new();
    for line in render_keypad(&keypad, None) {
        writeln!(out, "{line}")?;
    }
    writeln!(out, "{}", "-".repeat(keypad_width(&keypad)))?;
    for button in keypad.buttons() {
        writeln!(
            out,
            "{:<12} {:<4} {:<9} row {} col {}",
            button.id,
            button.label(),
            style_name(button.style()),
            button.row,
            button.col
        )?;
    }
    Ok(())
}
