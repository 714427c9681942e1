//! CLI module.
//!
//! - Argument parsing
//! - Version and usage display
//! - Non-interactive chat code decoding
//!
//! # Usage
//!
//! The dispatcher runs early in `main()`, before the terminal is touched:
//!
//! ```ignore
//! use gw2link::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! if let Some(result) = run_cli_command(&command) {
//!     return result;
//! }
//! // No CLI command, continue to TUI
//! ```

pub mod args;
pub mod decode;
pub mod version;

pub use args::{initial_link_text, parse_args, CliCommand};
pub use decode::{decode_input, handle_decode_command, render_decode_report, DecodedLink};
pub use version::{handle_help_command, handle_version_command, USAGE, VERSION};

use color_eyre::Result;

/// Run a CLI command if applicable.
///
/// * `None` - the command is `RunTui` (no CLI action needed)
/// * `Some(Ok(()))` - a CLI command executed successfully
/// * `Some(Err(e))` - a CLI command failed
///
/// `Version` and `Help` exit the process directly.
pub fn run_cli_command(command: &CliCommand) -> Option<Result<()>> {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => handle_help_command(),
        CliCommand::Decode(input) => Some(handle_decode_command(input)),
        CliCommand::RunTui { .. } => None,
    }
}
