//! Command-line interface.
//!
//! Flags are handled early in `main()`, before the terminal is taken over:
//!
//! ```ignore
//! use chatshell::cli::{parse_args, CliCommand};
//!
//! match parse_args(std::env::args())? {
//!     CliCommand::RunTui(overrides) => { /* start the TUI */ }
//!     other => { /* version, help, or check */ }
//! }
//! ```

pub mod args;
pub mod check;
pub mod version;

pub use args::{parse_args, CliCommand, USAGE};
pub use check::{handle_check_command, run_check};
pub use version::{handle_version_command, version_string, VERSION};
