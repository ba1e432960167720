//! Command-line argument parsing for the lectern CLI.
//!
//! This module handles parsing command-line arguments and determining
//! which command to execute.

/// Parsed CLI command to execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Run the TUI application (default)
    RunTui,
}

/// Parsed command-line arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    /// The command to execute
    pub command: CliCommand,
    /// Feed location override (`--feed <path-or-url>`)
    pub feed: Option<String>,
}

/// Parse command-line arguments.
///
/// Unknown flags are ignored. A trailing `--feed` with no value is treated
/// as absent.
///
/// # Examples
///
/// ```
/// use lectern::cli::{parse_args, CliCommand};
///
/// let args = vec!["lectern".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()).command, CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliArgs
where
    I: Iterator<Item = String>,
{
    let mut command = CliCommand::RunTui;
    let mut feed = None;

    let mut args = args.skip(1); // Skip the program name
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => command = CliCommand::Version,
            "--feed" | "-f" => {
                if let Some(value) = args.next() {
                    feed = Some(value);
                }
            }
            other => {
                if let Some(value) = other.strip_prefix("--feed=") {
                    feed = Some(value.to_string());
                }
            }
        }
    }

    CliArgs { command, feed }
}
