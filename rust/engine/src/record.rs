use serde::{Deserialize, Serialize};

use crate::errors::RecordError;
use crate::roster::Player;
use crate::seed::hash_seed;
use crate::split::{split_teams, TeamSplit};

/// A split as it was handed out, kept so it can be replayed later.
/// Serialized to JSONL, one record per line.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct SplitRecord {
    /// Seed string, normally the convocation id
    pub seed: String,
    /// Numeric seed derived from `seed`
    pub seed_hash: u32,
    /// Roster in the pre-shuffle order
    pub roster: Vec<Player>,
    pub teams: TeamSplit,
    /// Timestamp when the split was recorded (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

impl SplitRecord {
    pub fn new(roster: Vec<Player>, seed: impl Into<String>) -> Self {
        let seed = seed.into();
        let teams = split_teams(&roster, &seed);
        Self {
            seed_hash: hash_seed(&seed),
            seed,
            roster,
            teams,
            ts: None,
        }
    }

    /// Re-runs the split and checks it against what was recorded.
    pub fn verify(&self) -> Result<(), RecordError> {
        let computed = hash_seed(&self.seed);
        if computed != self.seed_hash {
            return Err(RecordError::SeedHashMismatch {
                seed: self.seed.clone(),
                recorded: self.seed_hash,
                computed,
            });
        }
        if split_teams(&self.roster, &self.seed) != self.teams {
            return Err(RecordError::TeamsMismatch {
                seed: self.seed.clone(),
            });
        }
        Ok(())
    }
}

/// Parses JSONL text into records, skipping blank lines.
/// Errors carry the 1-based line number.
pub fn read_records(text: &str) -> Vec<(usize, Result<SplitRecord, RecordError>)> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            (
                idx + 1,
                serde_json::from_str::<SplitRecord>(line).map_err(RecordError::from),
            )
        })
        .collect()
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct SplitLogger {
    writer: BufWriter<File>,
}

impl SplitLogger {
    /// Opens `path` for appending, creating parent directories as needed.
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: BufWriter::new(f),
        })
    }

    pub fn write(&mut self, record: &SplitRecord) -> Result<(), RecordError> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec)?;
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}
