//! Command-line argument parsing.
//!
//! Flags are matched by hand; the first positional argument is taken as the
//! initial chat code for the interactive viewer.

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Decode chat codes found in the text and print them as JSON
    Decode(String),
    /// Run the TUI application (default)
    RunTui { initial: Option<String> },
}

/// Parse command-line arguments and return the appropriate command.
///
/// The first item is the program name and is skipped. Unknown flags are
/// ignored.
///
/// # Examples
///
/// ```
/// use gw2link::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["gw2link".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
///
/// let args = vec!["gw2link".to_string(), "/[&AgGqtgAA]".to_string()];
/// assert_eq!(
///     parse_args(args.into_iter()),
///     CliCommand::RunTui { initial: Some("[&AgGqtgAA]".to_string()) }
/// );
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut initial = None;
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--decode" | "-d" => {
                let rest: Vec<String> = args.collect();
                return CliCommand::Decode(rest.join(" "));
            }
            flag if flag.starts_with("--") => {}
            _ => {
                if initial.is_none() {
                    initial = Some(initial_link_text(&arg));
                }
            }
        }
    }

    CliCommand::RunTui { initial }
}

/// Normalise a chat code given in URL path form.
///
/// Strips one leading `/` and applies percent-decoding, so both
/// `/%5B%26AgGqtgAA%5D` and `[&AgGqtgAA]` yield `[&AgGqtgAA]`.
pub fn initial_link_text(arg: &str) -> String {
    let path = arg.strip_prefix('/').unwrap_or(arg);
    match urlencoding::decode(path) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliCommand {
        let mut all = vec!["gw2link".to_string()];
        all.extend(args.iter().map(|s| s.to_string()));
        parse_args(all.into_iter())
    }

    #[test]
    fn test_parse_version_flags() {
        assert_eq!(parse(&["--version"]), CliCommand::Version);
        assert_eq!(parse(&["-V"]), CliCommand::Version);
    }

    #[test]
    fn test_parse_help_flags() {
        assert_eq!(parse(&["--help"]), CliCommand::Help);
        assert_eq!(parse(&["-h"]), CliCommand::Help);
    }

    #[test]
    fn test_parse_decode_takes_remaining_args() {
        assert_eq!(
            parse(&["--decode", "buy", "[&AgGqtgAA]", "now"]),
            CliCommand::Decode("buy [&AgGqtgAA] now".to_string())
        );
        assert_eq!(parse(&["-d"]), CliCommand::Decode(String::new()));
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(parse(&[]), CliCommand::RunTui { initial: None });
    }

    #[test]
    fn test_parse_unknown_flag() {
        assert_eq!(parse(&["--unknown"]), CliCommand::RunTui { initial: None });
    }

    #[test]
    fn test_parse_first_positional_is_initial() {
        assert_eq!(
            parse(&["[&CkYSAAA=]", "[&AdsnAAA=]"]),
            CliCommand::RunTui {
                initial: Some("[&CkYSAAA=]".to_string())
            }
        );
    }

    #[test]
    fn test_initial_link_text() {
        assert_eq!(initial_link_text("/[&AgGqtgAA]"), "[&AgGqtgAA]");
        assert_eq!(initial_link_text("/%5B%26AgGqtgAA%5D"), "[&AgGqtgAA]");
        assert_eq!(initial_link_text("[&CkYSAAA=]"), "[&CkYSAAA=]");
        assert_eq!(initial_link_text("/"), "");
    }
}
