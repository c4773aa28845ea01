//! CLI module for triagem.
//!
//! The dispatcher runs early in `main()`, before the terminal is touched:
//!
//! ```ignore
//! use triagem::cli::{parse_args, run_cli_command, CliCommand};
//!
//! let command = parse_args(std::env::args())?;
//! let overrides = run_cli_command(command);
//! // continue to the TUI with `overrides`
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, CliOverrides, USAGE};
pub use version::{handle_version_command, version_line, VERSION};

/// Run a CLI command if applicable.
///
/// `Version` and `Help` print and exit; `RunTui` hands its overrides back.
pub fn run_cli_command(command: CliCommand) -> CliOverrides {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => {
            print!("{}", USAGE);
            std::process::exit(0)
        }
        CliCommand::RunTui(overrides) => overrides,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_tui_returns_overrides() {
        let overrides = CliOverrides {
            url: Some("http://x".to_string()),
            ..Default::default()
        };
        assert_eq!(
            run_cli_command(CliCommand::RunTui(overrides.clone())),
            overrides
        );
    }

    #[test]
    fn test_usage_mentions_every_flag() {
        let flags = [
            "--url",
            "--timeout",
            "--max-file-mb",
            "--field",
            "--log-file",
            "--version",
            "--help",
        ];
        for flag in flags {
            assert!(USAGE.contains(flag), "usage is missing {flag}");
        }
    }
}
