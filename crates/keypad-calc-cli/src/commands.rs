//! CLI command definitions using clap

use clap::{Args, Parser, Subcommand};

use crate::config::{CliConfig, Verbosity, DEFAULT_DISPLAY_WIDTH};

/// Keypad calculator: four functions, evaluated left to right
#[derive(Parser, Debug)]
#[command(name = "keypad-calc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Columns available for the display; longer displays keep their newest characters
    #[arg(
        long,
        default_value_t = DEFAULT_DISPLAY_WIDTH,
        env = "KEYPAD_CALC_WIDTH",
        global = true,
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    pub width: u16,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Builds the runtime configuration from the parsed arguments
    #[must_use]
    pub fn config(&self) -> CliConfig {
        CliConfig::new()
            .with_verbosity(Verbosity::from_flags(self.quiet, self.verbose))
            .with_display_width(usize::from(self.width))
    }
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Press keys and print the display
    ///
    /// Keys are button captions or aliases: 0-9 . + - × * x ÷ / % = +/- neg AC C
    Press(PressArgs),

    /// Evaluate an expression left to right, e.g. "50 + 10%"
    Eval(EvalArgs),

    /// Print the keypad layout
    Keypad,

    /// Run the interactive terminal keypad
    Interactive,
}

/// Arguments for the press command
#[derive(Args, Debug)]
pub struct PressArgs {
    /// Keys to press, in order (each argument may hold several, space-separated)
    #[arg(required = true, allow_hyphen_values = true)]
    pub keys: Vec<String>,

    /// Print the display after every key
    #[arg(long)]
    pub trace: bool,

    /// Print the final engine state as JSON
    #[arg(long, conflicts_with = "trace")]
    pub json: bool,
}

/// Arguments for the eval command
#[derive(Args, Debug)]
pub struct EvalArgs {
    /// Expression with space-separated tokens
    #[arg(allow_hyphen_values = true)]
    pub expression: String,
}
