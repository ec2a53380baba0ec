//! Keypad Calculator CLI library
//!
//! Scripting and terminal front ends over the `keypad-calc` engine.

#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod app;
mod commands;
mod config;
mod error;
pub mod handlers;
pub mod input;
pub mod logging;
pub mod render;

pub use app::KeypadApp;
pub use commands::{Cli, Commands, EvalArgs, PressArgs};
pub use config::{CliConfig, Verbosity, DEFAULT_DISPLAY_WIDTH};
pub use error::{CliError, CliResult};
pub use input::{InputHandler, KeyAction};
pub use logging::init_tracing;
