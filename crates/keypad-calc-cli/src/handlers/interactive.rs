//! Interactive command handler
//!
//! Raw-mode keypad on the alternate screen. Keys are typed or clicked with
//! the mouse. The terminal is restored when the guard drops, including on
//! error.

use std::io::{self, Write};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEvent,
        MouseEventKind,
    },
    execute, queue,
    style::Print,
    terminal::{
        disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use keypad_calc::driver::KeypadDriver;
use tracing::{debug, info};

use crate::app::KeypadApp;
use crate::config::CliConfig;
use crate::error::CliResult;
use crate::input::InputHandler;
use crate::render::{button_at, render_screen, visible_tail};

struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> CliResult<Self> {
        enable_raw_mode()?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture, Hide) {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), Show, DisableMouseCapture, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

/// Draws one frame
///
/// Raw mode does not return the carriage on newline, so each line is
/// positioned explicitly.
pub fn draw_screen<W: Write>(out: &mut W, app: &KeypadApp, display_width: usize) -> CliResult<()> {
    queue!(out, Clear(ClearType::All))?;
    for (row, line) in render_screen(app, display_width).iter().enumerate() {
        let row = u16::try_from(row).unwrap_or(u16::MAX);
        queue!(out, MoveTo(0, row), Print(line))?;
    }
    out.flush()?;
    Ok(())
}

/// Applies one terminal event to the app
///
/// A left click presses the keypad button under the pointer.
pub fn handle_event(app: &mut KeypadApp, handler: &InputHandler, event: Event) {
    match event {
        Event::Key(key) => app.apply(handler.handle_key(key)),
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) => {
            let id = button_at(app.keypad(), column, row).map(|b| b.id.clone());
            if let Some(id) = id {
                app.click(&id);
            }
        }
        Event::Resize(cols, rows) => debug!(cols, rows, "resize"),
        _ => {}
    }
}

/// Line printed after the session, unless quiet
#[must_use]
pub fn closing_line(app: &KeypadApp, config: &CliConfig) -> Option<String> {
    if config.verbosity.is_quiet() {
        None
    } else {
        Some(visible_tail(&app.display(), config.display_width))
    }
}

/// Execute the interactive command
///
/// Prints the last display to stdout after the screen is restored.
pub fn execute_interactive(config: &CliConfig) -> CliResult<()> {
    let mut app = KeypadApp::new();
    let handler = InputHandler::new();

    {
        let _guard = TerminalGuard::enter()?;
        info!("interactive session started");
        let mut stdout = io::stdout();
        while !app.should_quit() {
            draw_screen(&mut stdout, &app, config.display_width)?;
            handle_event(&mut app, &handler, event::read()?);
        }
    }

    info!("interactive session ended");
    if let Some(line) = closing_line(&app, config) {
        println!("{line}");
    }
    Ok(())
}
