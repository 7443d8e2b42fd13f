use super::Player;
use serde::{Deserialize, Serialize};

/// A named, ordered roster of players.
///
/// The roster is append-only: players can be added but never removed, and
/// teams live for the lifetime of the registry that owns them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Team {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub players: Vec<Player>,
}

impl Team {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            players: Vec::new(),
        }
    }

    /// Append a player to the roster and return a reference to it.
    pub fn add_player(&mut self, player: Player) -> &Player {
        self.players.push(player);
        &self.players[self.players.len() - 1]
    }

    /// First roster entry with the given id, if any.
    pub fn find_player(&self, player_id: u32) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }
}
