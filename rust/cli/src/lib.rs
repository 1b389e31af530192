//! # Convoca CLI Library
//!
//! Command-line interface for deterministic team splits. The primary entry
//! point is [`run`], which parses arguments and dispatches to a subcommand.
//!
//! ## Example Usage
//!
//! ```
//! use std::io;
//! let args = vec!["convoca", "split", "--seed", "conv-123", "--player", "a", "--player", "b"];
//! let code = convoca_cli::run_with_env(args, |_| None, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `split`: Split a roster into shirts and coletes
//! - `hash`: Show the numeric seed for a seed string
//! - `rng`: Print the seeded generator stream
//! - `verify`: Re-check a JSONL log of recorded splits
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;
pub mod cli;
mod commands;
mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod ui;

use cli::{Commands, ConvocaCli};
use commands::{
    SplitArgs, handle_cfg_command, handle_hash_command, handle_rng_command, handle_split_command,
    handle_verify_command,
};

pub use cli::OutputFormat;
pub use error::CliError;

const COMMANDS: &[&str] = &["split", "hash", "rng", "verify", "cfg"];

/// Main entry point for the CLI application.
///
/// Configuration variables are read from the process environment.
///
/// # Returns
///
/// Exit code: [`exit_code::SUCCESS`] or [`exit_code::ERROR`]
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    run_with_env(args, |key| std::env::var(key).ok(), out, err)
}

/// Same as [`run`], with `CONVOCA_*` variables looked up through `env`.
pub fn run_with_env<I, S, E>(args: I, env: E, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    E: Fn(&str) -> Option<String>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match ConvocaCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return report_parse_error(e, out, err),
    };

    let resolved = || config::load_from(&env).map_err(|e| CliError::Config(e.to_string()));

    let result = match cli.cmd {
        Commands::Split {
            seed,
            roster,
            players,
            format,
            log,
        } => resolved().and_then(|r| {
            handle_split_command(
                SplitArgs {
                    seed,
                    roster,
                    players,
                    format,
                    log,
                },
                &r.config,
                out,
                err,
            )
        }),
        Commands::Hash { seed } => handle_hash_command(&seed, out),
        Commands::Rng { seed, count } => {
            let count = match count {
                Some(n) => Ok(usize::from(n)),
                None => resolved().map(|r| r.config.rng_count),
            };
            count.and_then(|count| handle_rng_command(seed.as_deref(), count, out))
        }
        Commands::Verify { input } => handle_verify_command(&input, out, err),
        Commands::Cfg => resolved().and_then(|r| handle_cfg_command(&r, out)),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

fn report_parse_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version go to stdout and succeed
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        return match write!(out, "{}", e) {
            Ok(()) => exit_code::SUCCESS,
            Err(_) => exit_code::ERROR,
        };
    }

    let _ = writeln!(err, "{}", e);
    let _ = writeln!(err, "Usage: convoca <command> [options]\n");
    let _ = writeln!(err, "Commands:");
    for c in COMMANDS {
        let _ = writeln!(err, "  {}", c);
    }
    let _ = writeln!(err, "\nFor full help, run: convoca --help");
    exit_code::ERROR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_command_parses() {
        let commands = vec![
            vec!["convoca", "split", "--seed", "s", "--player", "a"],
            vec!["convoca", "hash", "--seed", "s"],
            vec!["convoca", "rng"],
            vec!["convoca", "verify", "--input", "log.jsonl"],
            vec!["convoca", "cfg"],
        ];
        assert_eq!(commands.len(), COMMANDS.len());
        for cmd_args in commands {
            let result = ConvocaCli::try_parse_from(&cmd_args);
            assert!(result.is_ok(), "Failed to parse: {:?}", cmd_args);
        }
    }

    #[test]
    fn roster_and_inline_players_conflict() {
        let result = ConvocaCli::try_parse_from([
            "convoca", "split", "--seed", "s", "--roster", "r.txt", "--player", "a",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn rng_count_is_bounded() {
        assert!(ConvocaCli::try_parse_from(["convoca", "rng", "--count", "0"]).is_err());
        assert!(ConvocaCli::try_parse_from(["convoca", "rng", "--count", "1001"]).is_err());
        assert!(ConvocaCli::try_parse_from(["convoca", "rng", "--count", "1000"]).is_ok());
    }

    #[test]
    fn unknown_command_lists_commands() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run_with_env(["convoca", "deal"], |_| None, &mut out, &mut err);
        assert_eq!(code, exit_code::ERROR);
        let stderr = String::from_utf8(err).unwrap();
        for c in COMMANDS {
            assert!(stderr.contains(c), "missing {c} in usage");
        }
    }

    #[test]
    fn rng_count_falls_back_to_environment() {
        let env = |key: &str| (key == config::RNG_COUNT_ENV).then(|| "3".to_string());
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run_with_env(["convoca", "rng", "--seed", "s"], env, &mut out, &mut err);
        assert_eq!(code, exit_code::SUCCESS);
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 2 + 3);
    }

    #[test]
    fn invalid_environment_is_a_config_error() {
        let env = |key: &str| (key == config::FORMAT_ENV).then(|| "yaml".to_string());
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run_with_env(["convoca", "cfg"], env, &mut out, &mut err);
        assert_eq!(code, exit_code::ERROR);
        assert!(String::from_utf8(err).unwrap().contains("Configuration error"));
    }

    #[test]
    fn help_goes_to_stdout() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(["convoca", "--help"], &mut out, &mut err);
        assert_eq!(code, exit_code::SUCCESS);
        assert!(String::from_utf8(out).unwrap().contains("split"));
    }
}
