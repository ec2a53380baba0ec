//! Keypad Calculator CLI
//!
//! ## Usage
//!
//! ```bash
//! keypad-calc press 5 + 3 =        # prints 8
//! keypad-calc press --trace 9 % =  # display after every key
//! keypad-calc eval "50 + 10%"      # prints 55
//! keypad-calc keypad               # button layout
//! keypad-calc interactive          # terminal keypad
//! ```

use std::io;
use std::process::ExitCode;

use clap::Parser;
use keypad_calc_cli::{handlers, init_tracing, Cli, CliResult, Commands};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = cli.config();
    init_tracing(config.verbosity);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Commands::Press(args) => handlers::execute_press(&config, &args, &mut out),
        Commands::Eval(args) => handlers::execute_eval(&args, &mut out),
        Commands::Keypad => handlers::execute_keypad(&mut out),
        Commands::Interactive => {
            drop(out);
            handlers::execute_interactive(&config)
        }
    }
}
