//! Command-line argument definitions.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(
    name = "convoca",
    version,
    about = "Deterministic team splits for convocations"
)]
pub struct ConvocaCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split a roster into shirts and coletes
    Split {
        /// Seed string, normally the convocation id
        #[arg(long)]
        seed: String,
        /// Roster file: JSON array of {id, name} or one `id[:name]` per line
        #[arg(long, conflicts_with = "players")]
        roster: Option<String>,
        /// Player given inline as `id` or `id:name`, in confirmation order
        #[arg(long = "player", value_name = "ID[:NAME]")]
        players: Vec<String>,
        /// Output format (defaults to the configured format)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
        /// Append a split record to this JSONL file
        #[arg(long)]
        log: Option<String>,
    },
    /// Print the numeric seed derived from a seed string
    Hash {
        #[arg(long)]
        seed: String,
    },
    /// Print the first values of the seeded generator
    Rng {
        /// Seed string (random numeric seed when omitted)
        #[arg(long)]
        seed: Option<String>,
        #[arg(long, value_parser = clap::value_parser!(u16).range(1..=1000))]
        count: Option<u16>,
    },
    /// Re-check recorded splits (.jsonl or .jsonl.zst)
    Verify {
        #[arg(long)]
        input: String,
    },
    /// Display the resolved configuration and where each value came from
    Cfg,
}

/// Output format for `split`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Numbered team listing
    Text,
    /// Pretty-printed JSON
    Json,
}
