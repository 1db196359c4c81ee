//! # Test helpers
//!
//! - `cli_runner`: `CliRunner` drives `drawodds_cli::run` in-process with
//!   temporary environment overrides and captures stdout, stderr and the exit
//!   code.
//! - `temp_files`: `TempFileManager` owns a scratch directory for scenario and
//!   config files, removed on drop.
//!
//! ```ignore
//! use crate::helpers::{cli_runner::CliRunner, temp_files::TempFileManager};
//!
//! let tmp = TempFileManager::new().expect("temp dir");
//! let path = tmp.create_file("deck.json", r#"{"totalCards":40,"handSize":5}"#).expect("write");
//! let res = CliRunner::new().run(&["calc", "--scenario", path.to_str().unwrap()]);
//! assert_eq!(res.exit_code, 2);
//! ```
pub mod cli_runner;
pub mod temp_files;
