//! Eval command handler

use std::io::Write;

use keypad_calc::core::{evaluate, format_number};

use crate::commands::EvalArgs;
use crate::error::CliResult;

/// Execute the eval command
///
/// Uses the same reduction and result formatting as `=` on the keypad.
pub fn execute_eval<W: Write>(args: &EvalArgs, out: &mut W) -> CliResult<()> {
    let value = evaluate(&args.expression);
    writeln!(out, "{}", format_number(value))?;
    Ok(())
}
