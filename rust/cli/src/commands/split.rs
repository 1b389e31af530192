//! Split command handler.
//!
//! Reads a roster (file or inline `--player` flags), splits it with the
//! given seed, prints both teams, and optionally appends a replayable
//! record to a JSONL log.

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::error::CliError;
use crate::formatters::format_split;
use crate::io_utils::read_text_auto;
use crate::ui;
use convoca_engine::record::{SplitLogger, SplitRecord};
use convoca_engine::roster::{parse_entry, Player, Roster};
use std::io::Write;

/// Parsed arguments of `convoca split`.
#[derive(Debug, Clone, Default)]
pub struct SplitArgs {
    pub seed: String,
    pub roster: Option<String>,
    pub players: Vec<String>,
    pub format: Option<OutputFormat>,
    pub log: Option<String>,
}

/// Handle the split command.
///
/// Flags win over configuration for `format` and `log`.
///
/// # Errors
///
/// Returns `CliError::InvalidInput` when no roster is given or it fails to
/// parse, and `CliError::Io` on read/write failures.
pub fn handle_split_command(
    args: SplitArgs,
    cfg: &Config,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let format = args.format.unwrap_or(cfg.format);
    let log = args.log.or_else(|| cfg.log.clone());

    let roster = load_roster(args.roster.as_deref(), &args.players)?;
    if roster.is_empty() {
        ui::display_warning(err, "roster is empty; both teams will be empty")?;
    }

    let players = roster.into_players();
    let record = SplitRecord::new(players, args.seed);

    match format {
        OutputFormat::Text => {
            writeln!(out, "Seed: {} (hash {})", record.seed, record.seed_hash)?;
            write!(out, "{}", format_split(&record.teams))?;
        }
        OutputFormat::Json => {
            let body = serde_json::json!({
                "seed": record.seed,
                "seedHash": record.seed_hash,
                "teams": record.teams,
            });
            let json_str = serde_json::to_string_pretty(&body).map_err(std::io::Error::other)?;
            writeln!(out, "{}", json_str)?;
        }
    }

    if let Some(path) = log {
        SplitLogger::create(&path)?.write(&record)?;
    }
    Ok(())
}

fn load_roster(path: Option<&str>, inline: &[String]) -> Result<Roster, CliError> {
    match path {
        Some(path) => {
            let text = read_text_auto(path).map_err(CliError::InvalidInput)?;
            if text.trim_start().starts_with('[') {
                Ok(Roster::from_json(&text)?)
            } else {
                Ok(Roster::parse_lines(&text)?)
            }
        }
        None if inline.is_empty() => Err(CliError::InvalidInput(
            "roster required: pass --roster FILE or --player ID[:NAME]".into(),
        )),
        None => {
            let players = inline
                .iter()
                .map(|entry| {
                    parse_entry(entry)
                        .ok_or_else(|| CliError::InvalidInput(format!("empty player id in `{entry}`")))
                })
                .collect::<Result<Vec<Player>, _>>()?;
            Ok(Roster::new(players)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inline(ids: &[&str]) -> SplitArgs {
        SplitArgs {
            seed: "conv-123".into(),
            players: ids.iter().map(|s| s.to_string()).collect(),
            format: Some(OutputFormat::Text),
            ..SplitArgs::default()
        }
    }

    #[test]
    fn text_output_lists_both_teams() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        handle_split_command(
            inline(&["a", "b", "c", "d", "e"]),
            &Config::default(),
            &mut out,
            &mut err,
        ).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert_eq!(
            output,
            "Seed: conv-123 (hash 567203815)\n\
             Shirts (3):\n   1. e\n   2. b\n   3. d\n\
             Coletes (2):\n   1. a\n   2. c\n"
        );
    }

    #[test]
    fn missing_roster_is_invalid_input() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_split_command(inline(&[]), &Config::default(), &mut out, &mut err);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn duplicate_inline_players_are_rejected() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_split_command(
            inline(&["a", "a:Again"]),
            &Config::default(),
            &mut out,
            &mut err,
        );
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn configured_log_receives_records_unless_flag_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let configured = dir.path().join("configured.jsonl");
        let flagged = dir.path().join("flagged.jsonl");
        let cfg = Config {
            log: Some(configured.to_string_lossy().to_string()),
            ..Config::default()
        };

        let mut out = Vec::new();
        let mut err = Vec::new();
        handle_split_command(inline(&["a", "b"]), &cfg, &mut out, &mut err).unwrap();
        let args = SplitArgs {
            log: Some(flagged.to_string_lossy().to_string()),
            ..inline(&["a", "b"])
        };
        handle_split_command(args, &cfg, &mut out, &mut err).unwrap();

        assert_eq!(std::fs::read_to_string(&configured).unwrap().lines().count(), 1);
        assert_eq!(std::fs::read_to_string(&flagged).unwrap().lines().count(), 1);
    }

    #[test]
    fn empty_roster_file_warns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.txt");
        std::fs::write(&path, "# nobody confirmed\n").unwrap();

        let mut out = Vec::new();
        let mut err = Vec::new();
        let args = SplitArgs {
            seed: "s".into(),
            roster: Some(path.to_string_lossy().to_string()),
            format: Some(OutputFormat::Text),
            ..SplitArgs::default()
        };
        handle_split_command(args, &Config::default(), &mut out, &mut err).unwrap();
        assert!(String::from_utf8(err).unwrap().contains("roster is empty"));
    }
}
