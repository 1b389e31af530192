use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::errors::RosterError;

/// A confirmed player for a convocation.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Player {
    /// Unique player/user identifier
    pub id: String,
    /// Display name
    pub name: String,
}

impl Player {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Players in confirmation order. The order is the pre-shuffle input order.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Builds a roster, rejecting empty or repeated ids.
    pub fn new(players: Vec<Player>) -> Result<Self, RosterError> {
        let mut seen = HashSet::with_capacity(players.len());
        for (idx, player) in players.iter().enumerate() {
            if player.id.trim().is_empty() {
                return Err(RosterError::EmptyId { line: idx + 1 });
            }
            if !seen.insert(player.id.as_str()) {
                return Err(RosterError::DuplicateId {
                    id: player.id.clone(),
                });
            }
        }
        Ok(Self { players })
    }

    /// Parses one player per line as `id` or `id:name`.
    ///
    /// Blank lines and lines starting with `#` are skipped. A missing name
    /// defaults to the id. Line numbers in errors are 1-based and count
    /// skipped lines.
    pub fn parse_lines(text: &str) -> Result<Self, RosterError> {
        let mut players = Vec::new();
        let mut seen = HashSet::new();
        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let player = parse_entry(line).ok_or(RosterError::EmptyId { line: idx + 1 })?;
            if !seen.insert(player.id.clone()) {
                return Err(RosterError::DuplicateId { id: player.id });
            }
            players.push(player);
        }
        Ok(Self { players })
    }

    /// Parses a JSON array of `{ "id": ..., "name": ... }` objects.
    pub fn from_json(text: &str) -> Result<Self, RosterError> {
        let players: Vec<Player> =
            serde_json::from_str(text).map_err(|e| RosterError::InvalidJson(e.to_string()))?;
        Self::new(players)
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn into_players(self) -> Vec<Player> {
        self.players
    }
}

/// Parses a single `id` or `id:name` entry. Returns `None` for an empty id.
pub fn parse_entry(entry: &str) -> Option<Player> {
    let (id, name) = match entry.split_once(':') {
        Some((id, name)) => (id.trim(), name.trim()),
        None => (entry.trim(), ""),
    };
    if id.is_empty() {
        return None;
    }
    let name = if name.is_empty() { id } else { name };
    Some(Player::new(id, name))
}
