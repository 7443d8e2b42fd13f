use serde::{Deserialize, Serialize};
use std::fmt;

/// A single squad member.
///
/// Players are immutable after creation; a correction means replacing the
/// record. Ids are unique within a team by convention only, nothing checks
/// them globally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub id: u32,
    pub name: String,
    /// Free-text skill or position label (e.g. "Beginner", "Striker").
    pub skill: String,
    #[serde(default)]
    pub matches_played: u32,
    /// Runs or goals, depending on the sport.
    #[serde(default)]
    pub score: u32,
}

impl Player {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        skill: impl Into<String>,
        matches_played: u32,
        score: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            skill: skill.into(),
            matches_played,
            score,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "ID: {} | Name: {} | Skill: {} | Matches: {} | Score: {}",
            self.id, self.name, self.skill, self.matches_played, self.score
        )
    }
}
