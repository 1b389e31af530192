//! Team and player formatters for terminal display.
//!
//! ```rust
//! use convoca_engine::roster::Player;
//! use convoca_cli::formatters::format_player;
//!
//! assert_eq!(format_player(&Player::new("u1", "Ana")), "Ana (u1)");
//! assert_eq!(format_player(&Player::new("u2", "u2")), "u2");
//! ```

use convoca_engine::roster::Player;
use convoca_engine::split::TeamSplit;

/// Display name with the id in parentheses, or just the id when they match.
pub fn format_player(player: &Player) -> String {
    if player.name == player.id {
        player.id.clone()
    } else {
        format!("{} ({})", player.name, player.id)
    }
}

/// Heading plus one numbered line per player.
pub fn format_team(label: &str, players: &[Player]) -> String {
    let mut s = format!("{} ({}):\n", label, players.len());
    for (idx, player) in players.iter().enumerate() {
        s.push_str(&format!("  {:>2}. {}\n", idx + 1, format_player(player)));
    }
    s
}

pub fn format_split(teams: &TeamSplit) -> String {
    format!(
        "{}{}",
        format_team("Shirts", &teams.shirts),
        format_team("Coletes", &teams.vests)
    )
}
