//! Press command handler

use std::io::Write;

use keypad_calc::core::Key;
use keypad_calc::driver::{parse_keys, EngineDriver, KeypadDriver};
use tracing::debug;

use crate::commands::PressArgs;
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::render::visible_tail;

/// Parses every argument into keys; one argument may hold several
///
/// Fails before anything is pressed if any caption is unknown.
pub fn collect_keys(args: &[String]) -> CliResult<Vec<Key>> {
    let mut keys = Vec::new();
    for arg in args {
        keys.extend(parse_keys(arg)?);
    }
    if keys.is_empty() {
        return Err(CliError::invalid_argument("no keys to press"));
    }
    Ok(keys)
}

/// Execute the press command
pub fn execute_press<W: Write>(config: &CliConfig, args: &PressArgs, out: &mut W) -> CliResult<()> {
    let keys = collect_keys(&args.keys)?;
    debug!(count = keys.len(), "pressing keys");

    let mut driver = EngineDriver::new();
    for key in keys {
        driver.press(key);
        if args.trace {
            writeln!(
                out,
                "{:>3}  {}",
                key.label(),
                visible_tail(&driver.display(), config.display_width)
            )?;
        }
    }

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &driver.engine().snapshot())?;
        writeln!(out)?;
    } else if !args.trace {
        writeln!(out, "{}", visible_tail(&driver.display(), config.display_width))?;
    }
    Ok(())
}
