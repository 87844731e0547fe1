//! ArgMatches → action / config conversion.
//!
//! - Shell lines → `CliAction::Execute(AppCommand)` or `CliAction::Meta`
//! - Process flags → `AppConfig` layered over the config file

use std::path::PathBuf;

use clap::ArgMatches;
use vendorbook::{AppConfig, BehaviorConfig};

/// The result of parsing a shell line.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    /// A page command.
    Execute(AppCommand),
    /// A shell-only meta-command.
    Meta(MetaCommand),
}

/// Page commands.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    Go { path: String },
    Search { text: String },
    Refresh,
    Retry,
    Back,
    Show,
}

impl AppCommand {
    /// Whether the page should be allowed to settle before printing.
    pub fn waits_for_page(&self) -> bool {
        !matches!(self, AppCommand::Show)
    }
}

/// Shell meta-commands.
#[derive(Debug, PartialEq)]
pub enum MetaCommand {
    Help,
    Quit,
}

/// Check for meta-commands before delegating to clap.
pub fn check_meta_command(line: &str) -> Option<MetaCommand> {
    let cmd = line.split_whitespace().next()?;
    match cmd {
        "quit" | "exit" => Some(MetaCommand::Quit),
        "help" | "?" => Some(MetaCommand::Help),
        _ => None,
    }
}

/// Split a shell line and convert it into an action.
pub fn parse_line(line: &str) -> Result<CliAction, String> {
    if let Some(meta) = check_meta_command(line) {
        return Ok(CliAction::Meta(meta));
    }
    let words = shlex::split(line).ok_or_else(|| "Unbalanced quotes".to_string())?;
    let matches = crate::commands::build_shell_cli()
        .try_get_matches_from(words)
        .map_err(|e| first_line(&e.to_string()))?;
    matches_to_action(&matches)
}

/// Convert shell ArgMatches into a CliAction.
pub fn matches_to_action(matches: &ArgMatches) -> Result<CliAction, String> {
    let (sub_name, sub_matches) = matches
        .subcommand()
        .ok_or_else(|| "No command provided".to_string())?;

    let cmd = match sub_name {
        "go" => {
            let path = sub_matches
                .get_one::<String>("path")
                .cloned()
                .ok_or("go needs a path")?;
            AppCommand::Go { path }
        }
        "search" => {
            let text = sub_matches
                .get_many::<String>("text")
                .map(|words| words.map(String::as_str).collect::<Vec<_>>().join(" "))
                .unwrap_or_default();
            AppCommand::Search { text }
        }
        "refresh" => AppCommand::Refresh,
        "retry" => AppCommand::Retry,
        "back" => AppCommand::Back,
        "show" => AppCommand::Show,
        other => return Err(format!("Unknown command: {}", other)),
    };
    Ok(CliAction::Execute(cmd))
}

/// Build the config layer given by process flags.
pub fn flags_to_config(matches: &ArgMatches) -> Result<AppConfig, String> {
    let (latency_min_ms, latency_max_ms) = match matches.get_one::<String>("latency") {
        Some(raw) => {
            let (min, max) = parse_latency(raw)?;
            (Some(min), Some(max))
        }
        None => (None, None),
    };
    Ok(AppConfig {
        fixtures_dir: matches.get_one::<String>("fixtures").map(PathBuf::from),
        debounce_ms: matches.get_one::<u64>("debounce-ms").copied(),
        seed: matches.get_one::<u64>("seed").copied(),
        behavior: BehaviorConfig {
            failure_rate: matches.get_one::<f64>("failure-rate").copied(),
            latency_min_ms,
            latency_max_ms,
        },
    })
}

/// Parse `MIN..MAX` (or a single `MS` for a fixed delay).
pub fn parse_latency(raw: &str) -> Result<(u64, u64), String> {
    let parse = |s: &str| {
        s.trim()
            .parse::<u64>()
            .map_err(|e| format!("Invalid latency '{}': {}", raw, e))
    };
    match raw.split_once("..") {
        Some((min, max)) => Ok((parse(min)?, parse(max)?)),
        None => {
            let fixed = parse(raw)?;
            Ok((fixed, fixed))
        }
    }
}

fn first_line(text: &str) -> String {
    text.lines().next().unwrap_or_default().trim_start_matches("error: ").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cmd(line: &str) -> AppCommand {
        match parse_line(line).unwrap() {
            CliAction::Execute(cmd) => cmd,
            other => panic!("expected command, got {:?}", other),
        }
    }

    #[test]
    fn test_meta_commands() {
        assert_eq!(check_meta_command("quit"), Some(MetaCommand::Quit));
        assert_eq!(check_meta_command("  exit  "), Some(MetaCommand::Quit));
        assert_eq!(check_meta_command("help go"), Some(MetaCommand::Help));
        assert_eq!(check_meta_command("go /vendors"), None);
        assert_eq!(check_meta_command(""), None);
    }

    #[test]
    fn test_page_commands() {
        assert_eq!(
            cmd("go /vendors/V1"),
            AppCommand::Go {
                path: "/vendors/V1".into()
            }
        );
        assert_eq!(cmd("refresh"), AppCommand::Refresh);
        assert_eq!(cmd("retry"), AppCommand::Retry);
        assert_eq!(cmd("back"), AppCommand::Back);
        assert_eq!(cmd("show"), AppCommand::Show);
    }

    #[test]
    fn test_search_joins_words() {
        assert_eq!(
            cmd("search stark electronics"),
            AppCommand::Search {
                text: "stark electronics".into()
            }
        );
        assert_eq!(
            cmd("search \"acme corp\""),
            AppCommand::Search {
                text: "acme corp".into()
            }
        );
        assert_eq!(cmd("search"), AppCommand::Search { text: String::new() });
    }

    #[test]
    fn test_bad_lines() {
        assert!(parse_line("frobnicate").is_err());
        assert!(parse_line("go").is_err());
        assert!(parse_line("search \"open").is_err());
    }

    #[test]
    fn test_parse_latency() {
        assert_eq!(parse_latency("150..650"), Ok((150, 650)));
        assert_eq!(parse_latency("0"), Ok((0, 0)));
        assert!(parse_latency("fast").is_err());
        assert!(parse_latency("10..").is_err());
    }

    #[test]
    fn test_flags_to_config() {
        let matches = crate::commands::build_cli()
            .try_get_matches_from([
                "vendorbook",
                "--fixtures",
                "./data",
                "--seed",
                "9",
                "--failure-rate",
                "0",
                "--latency",
                "5..10",
                "/vendors",
            ])
            .unwrap();
        let config = flags_to_config(&matches).unwrap();

        assert_eq!(config.fixtures_dir, Some(PathBuf::from("./data")));
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.debounce_ms, None);
        assert_eq!(config.behavior.failure_rate, Some(0.0));
        assert_eq!(config.behavior.latency_min_ms, Some(5));
        assert_eq!(config.behavior.latency_max_ms, Some(10));
        assert_eq!(
            matches.get_one::<String>("path").map(String::as_str),
            Some("/vendors")
        );
    }
}
