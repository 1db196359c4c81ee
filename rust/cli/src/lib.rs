//! # drawodds CLI Library
//!
//! Command-line interface for the drawodds opening-hand probability engine.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["drawodds", "calc", "--group", "Starters=15:1:15"];
//! let code = drawodds_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `calc`: Probability that an opening hand satisfies every group
//! - `series`: Probability as a group's copy count is swept
//! - `presets`: Prebuilt example scenarios
//! - `starters`: "At least one starter" reference table
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;

pub mod cli;
mod commands;
mod config;
mod error;
mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
#[macro_use]
mod macros;
pub mod ui;
pub mod validation;

use cli::{Commands, DrawoddsCli};
use commands::{
    handle_calc_command, handle_cfg_command, handle_presets_command, handle_series_command,
    handle_starters_command,
};

pub use error::CliError;

const COMMANDS: &[&str] = &["calc", "series", "presets", "starters", "cfg"];

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let args = ["drawodds", "calc", "--deck", "40", "--hand", "5", "--group", "Starters=15:1:15"];
/// let code = drawodds_cli::run(args, &mut out, &mut err);
/// assert_eq!(code, 0);
/// assert!(String::from_utf8(out).unwrap().contains("91.93%"));
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match DrawoddsCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                if write!(out, "{}", e).is_err() {
                    return exit_code::ERROR;
                }
                return exit_code::SUCCESS;
            }
            write_or_exit!(err, "{}", e);
            write_or_exit!(err, "drawodds opening-hand calculator");
            write_or_exit!(err, "Usage: drawodds <command> [options]\n");
            write_or_exit!(err, "Commands:");
            for c in COMMANDS {
                write_or_exit!(err, "  {}", c);
            }
            write_or_exit!(err, "\nFor full help, run: drawodds --help");
            return exit_code::ERROR;
        }
    };

    let result = match cli.cmd {
        Commands::Calc { input, json } => handle_calc_command(&input, json, out, err),
        Commands::Series {
            input,
            max,
            mode,
            json,
        } => handle_series_command(&input, max, mode, json, out, err),
        Commands::Presets { json } => handle_presets_command(json, out),
        Commands::Starters {
            deck,
            hand,
            max,
            json,
        } => handle_starters_command(deck, hand, max, json, out, err),
        Commands::Cfg => handle_cfg_command(out, err),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        // Already reported by the handler.
        Err(CliError::Config(_)) => exit_code::ERROR,
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}
