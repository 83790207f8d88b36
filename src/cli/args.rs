//! Command-line argument parsing.
//!
//! Flags are few enough that a hand-rolled parser keeps the binary lean.

use crate::error::{ConfigError, ConfigResult};
use crate::startup::CliOverrides;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Print usage
    Help,
    /// Probe the dialogue service and exit
    Check(CliOverrides),
    /// Run the TUI application (default)
    RunTui(CliOverrides),
}

/// Usage text printed by `--help`.
pub const USAGE: &str = "\
Usage: chatshell [OPTIONS]

Options:
      --url <URL>    Dialogue service root (default http://127.0.0.1:5000)
      --dark         Start in the dark theme
      --autostart    Send the start trigger as soon as the UI is up
      --check        Probe the service and exit
  -V, --version      Print version
  -h, --help         Print this help

Environment:
  CHATSHELL_URL, CHATSHELL_CHAT_PATH, CHATSHELL_TIMEOUT_SECS,
  CHATSHELL_LOG, CHATSHELL_LOG_FILE, CHATSHELL_DARK";

/// Parse command-line arguments and return the command to run.
///
/// # Examples
///
/// ```
/// use chatshell::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["chatshell".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), Ok(CliCommand::Version));
/// ```
pub fn parse_args<I>(args: I) -> ConfigResult<CliCommand>
where
    I: Iterator<Item = String>,
{
    let mut overrides = CliOverrides::default();
    let mut check = false;

    // Skip the program name
    let mut args = args.skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--dark" => overrides.dark_mode = true,
            "--autostart" => overrides.autostart = true,
            "--check" => check = true,
            "--url" => {
                let value = args
                    .next()
                    .ok_or_else(|| ConfigError::MissingValue("--url".to_string()))?;
                overrides.base_url = Some(value);
            }
            other => match other.strip_prefix("--url=") {
                Some(value) if !value.is_empty() => overrides.base_url = Some(value.to_string()),
                Some(_) => return Err(ConfigError::MissingValue("--url".to_string())),
                None => return Err(ConfigError::UnknownArgument(other.to_string())),
            },
        }
    }

    if check {
        Ok(CliCommand::Check(overrides))
    } else {
        Ok(CliCommand::RunTui(overrides))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> ConfigResult<CliCommand> {
        let mut all = vec!["chatshell".to_string()];
        all.extend(args.iter().map(|s| s.to_string()));
        parse_args(all.into_iter())
    }

    #[test]
    fn test_parse_version_flag() {
        assert_eq!(parse(&["--version"]), Ok(CliCommand::Version));
        assert_eq!(parse(&["-V"]), Ok(CliCommand::Version));
    }

    #[test]
    fn test_parse_help_flag() {
        assert_eq!(parse(&["-h"]), Ok(CliCommand::Help));
        assert_eq!(parse(&["--dark", "--help"]), Ok(CliCommand::Help));
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(parse(&[]), Ok(CliCommand::RunTui(CliOverrides::default())));
    }

    #[test]
    fn test_parse_tui_flags() {
        let expected = CliOverrides {
            base_url: Some("http://bot:8000".to_string()),
            dark_mode: true,
            autostart: true,
        };
        assert_eq!(
            parse(&["--url", "http://bot:8000", "--dark", "--autostart"]),
            Ok(CliCommand::RunTui(expected.clone()))
        );
        assert_eq!(
            parse(&["--autostart", "--url=http://bot:8000", "--dark"]),
            Ok(CliCommand::RunTui(expected))
        );
    }

    #[test]
    fn test_parse_check() {
        let result = parse(&["--check", "--url", "http://bot"]);
        assert_eq!(
            result,
            Ok(CliCommand::Check(CliOverrides {
                base_url: Some("http://bot".to_string()),
                ..Default::default()
            }))
        );
    }

    #[test]
    fn test_parse_url_missing_value() {
        assert_eq!(
            parse(&["--url"]),
            Err(ConfigError::MissingValue("--url".to_string()))
        );
        assert_eq!(
            parse(&["--url="]),
            Err(ConfigError::MissingValue("--url".to_string()))
        );
    }

    #[test]
    fn test_parse_unknown_flag() {
        assert_eq!(
            parse(&["--sync"]),
            Err(ConfigError::UnknownArgument("--sync".to_string()))
        );
    }
}
