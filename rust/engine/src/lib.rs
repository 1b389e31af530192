//! # convoca-engine: Deterministic Team Splitting Core
//!
//! Splits the confirmed roster of a convocation into two teams ("shirts" and
//! "coletes"/vests). The split is seeded from a string, normally the
//! convocation identifier, so repeated requests for the same convocation
//! always return the same teams.
//!
//! ## Core Modules
//!
//! - [`roster`] - Player type and roster parsing (line and JSON formats)
//! - [`seed`] - 32-bit rolling hash turning a seed string into a number
//! - [`rng`] - Mulberry32 pseudo-random generator
//! - [`split`] - Fisher-Yates shuffle and ceil-midpoint partition
//! - [`record`] - JSONL split records and replay verification
//! - [`errors`] - Error types for roster parsing and records
//!
//! ## Quick Start
//!
//! ```rust
//! use convoca_engine::roster::Player;
//! use convoca_engine::split::split_teams;
//!
//! let roster: Vec<Player> = ["a", "b", "c", "d", "e"]
//!     .iter()
//!     .map(|id| Player::new(*id, *id))
//!     .collect();
//!
//! let teams = split_teams(&roster, "conv-123");
//! assert_eq!(teams.shirts.len(), 3);
//! assert_eq!(teams.vests.len(), 2);
//! ```
//!
//! ## Deterministic Splits
//!
//! The same seed and roster order always produce the same teams:
//!
//! ```rust
//! use convoca_engine::split::split_teams;
//!
//! let roster = vec!["ana", "bia", "caio", "duda"];
//! assert_eq!(split_teams(&roster, "conv-7"), split_teams(&roster, "conv-7"));
//! ```

pub mod errors;
pub mod record;
pub mod rng;
pub mod roster;
pub mod seed;
pub mod split;
