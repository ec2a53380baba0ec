//! Text rendering for the terminal keypad
//!
//! Produces plain lines; the interactive loop and the `keypad` command
//! decide where they go.

use keypad_calc::core::Key;
use keypad_calc::keypad::{Keypad, KeypadButton};

use crate::app::KeypadApp;
use crate::input::shortcut_help;

/// Inner width of one keypad cell
const CELL_WIDTH: usize = 5;

/// Marker shown when the start of the display is cut off
const ELLIPSIS: char = '…';

/// Screen row of the first keypad row in [`render_screen`]
pub const KEYPAD_TOP: u16 = 4;

/// Keeps the newest characters of a display that does not fit
///
/// The display scrolls left as it grows, so the operand being typed stays
/// visible.
#[must_use]
pub fn visible_tail(display: &str, width: usize) -> String {
    let len = display.chars().count();
    if len <= width {
        return display.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let tail: String = display.chars().skip(len - (width - 1)).collect();
    format!("{ELLIPSIS}{tail}")
}

/// Right-aligns the visible part of a display in `width` columns
#[must_use]
pub fn render_display(display: &str, width: usize) -> String {
    format!("{:>width$}", visible_tail(display, width), width = width)
}

fn render_cell(button: &KeypadButton, highlight: Option<Key>) -> String {
    let width = CELL_WIDTH * button.span + 3 * (button.span - 1);
    let label = format!("{:^width$}", button.label(), width = width);
    if highlight == Some(button.key) {
        format!("<{label}>")
    } else {
        format!("[{label}]")
    }
}

/// Renders the keypad grid, marking the highlighted key with `< >`
#[must_use]
pub fn render_keypad(keypad: &Keypad, highlight: Option<Key>) -> Vec<String> {
    let (rows, _) = keypad.dimensions();
    (0..rows)
        .map(|row| {
            keypad
                .row(row)
                .map(|button| render_cell(button, highlight))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Width of a rendered keypad row
#[must_use]
pub fn keypad_width(keypad: &Keypad) -> usize {
    let (_, cols) = keypad.dimensions();
    cols * (CELL_WIDTH + 2) + cols.saturating_sub(1)
}

/// Finds the button drawn at a screen cell of [`render_screen`]
///
/// The space between two cells belongs to the cell on its left.
#[must_use]
pub fn button_at(keypad: &Keypad, column: u16, row: u16) -> Option<&KeypadButton> {
    let grid_row = row.checked_sub(KEYPAD_TOP)?;
    let grid_col = usize::from(column) / (CELL_WIDTH + 3);
    keypad.get_button_at(usize::from(grid_row), grid_col)
}

/// Renders the whole interactive screen: display, keypad and shortcuts
#[must_use]
pub fn render_screen(app: &KeypadApp, display_width: usize) -> Vec<String> {
    let keypad = app.keypad();
    let width = display_width.max(1);
    let frame = "-".repeat(width + 2);

    let mut lines = vec![
        format!("+{frame}+"),
        format!("| {} |", render_display(app.engine().display(), width)),
        format!("+{frame}+"),
    ];
    lines.resize(usize::from(KEYPAD_TOP), String::new());
    lines.extend(render_keypad(keypad, app.last_pressed()));
    lines.push(String::new());
    lines.push(format!("phase: {}", app.engine().phase()));
    for (keys, action) in shortcut_help() {
        lines.push(format!("  {keys:<8} {action}"));
    }
    lines
}
