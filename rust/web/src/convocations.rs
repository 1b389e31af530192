use chrono::{DateTime, Utc};
use convoca_engine::roster::Player;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use thiserror::Error;

/// A scheduled session and the players who confirmed for it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Convocation {
    pub id: String,
    pub team_name: String,
    pub scheduled_at: DateTime<Utc>,
    /// Confirmed players in confirmation order
    #[serde(default)]
    pub roster: Vec<Player>,
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Convocation storage lock poisoned")]
    StoragePoisoned,
    #[error("Failed to read convocations from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid convocation data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Where convocations and their confirmed rosters come from.
pub trait ConvocationSource: Send + Sync + fmt::Debug {
    fn convocation(&self, id: &str) -> Result<Option<Convocation>, SourceError>;
}

/// Convocations held in process memory, optionally loaded from a JSON file.
#[derive(Debug, Default)]
pub struct InMemoryConvocations {
    entries: RwLock<HashMap<String, Convocation>>,
}

impl InMemoryConvocations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON array of convocations. A repeated id keeps the last entry.
    pub fn from_json_str(text: &str) -> Result<Self, SourceError> {
        let convocations: Vec<Convocation> = serde_json::from_str(text)?;
        let entries = convocations
            .into_iter()
            .map(|c| (c.id.clone(), c))
            .collect();
        Ok(Self {
            entries: RwLock::new(entries),
        })
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Inserts or replaces a convocation.
    pub fn insert(&self, convocation: Convocation) -> Result<(), SourceError> {
        let mut guard = self
            .entries
            .write()
            .map_err(|_| SourceError::StoragePoisoned)?;
        guard.insert(convocation.id.clone(), convocation);
        Ok(())
    }

    pub fn len(&self) -> Result<usize, SourceError> {
        self.entries
            .read()
            .map(|guard| guard.len())
            .map_err(|_| SourceError::StoragePoisoned)
    }

    pub fn is_empty(&self) -> Result<bool, SourceError> {
        self.len().map(|n| n == 0)
    }
}

impl ConvocationSource for InMemoryConvocations {
    fn convocation(&self, id: &str) -> Result<Option<Convocation>, SourceError> {
        let guard = self
            .entries
            .read()
            .map_err(|_| SourceError::StoragePoisoned)?;
        Ok(guard.get(id).cloned())
    }
}
