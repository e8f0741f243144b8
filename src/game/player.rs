use serde::{Deserialize, Serialize};

use super::board::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    #[default]
    A,
    B,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// Color of this player's pieces
    pub fn color(self) -> Color {
        match self {
            Player::A => Color::PlayerA,
            Player::B => Color::PlayerB,
        }
    }

    /// Owner of a piece color; `None` for `Empty`
    pub fn from_color(color: Color) -> Option<Player> {
        match color {
            Color::Empty => None,
            Color::PlayerA => Some(Player::A),
            Color::PlayerB => Some(Player::B),
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::A => "Player A",
            Player::B => "Player B",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_player() {
        assert_eq!(Player::A.other(), Player::B);
        assert_eq!(Player::B.other(), Player::A);
    }

    #[test]
    fn test_color_mapping() {
        for player in [Player::A, Player::B] {
            assert_eq!(Player::from_color(player.color()), Some(player));
        }
        assert_eq!(Player::from_color(Color::Empty), None);
    }

    #[test]
    fn test_player_name() {
        assert_eq!(Player::A.name(), "Player A");
        assert_eq!(Player::B.name(), "Player B");
    }
}
