use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RosterError {
    #[error("Empty player id on line {line}")]
    EmptyId { line: usize },
    #[error("Player {id} listed more than once")]
    DuplicateId { id: String },
    #[error("Invalid roster JSON: {0}")]
    InvalidJson(String),
}

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid split record: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Seed hash mismatch for seed {seed:?}: recorded {recorded}, computed {computed}")]
    SeedHashMismatch {
        seed: String,
        recorded: u32,
        computed: u32,
    },
    #[error("Recorded teams for seed {seed:?} do not match a fresh split")]
    TeamsMismatch { seed: String },
}
