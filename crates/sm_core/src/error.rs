use thiserror::Error;

/// Errors reported by [`crate::Registry`] operations.
///
/// Every failure aborts the operation with no partial mutation; nothing is
/// fatal and nothing is retried automatically.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("team id {id} is already registered")]
    DuplicateTeamId { id: u32 },

    #[error("team name '{name}' is already registered")]
    DuplicateTeamName { name: String },

    #[error("team {id} not found")]
    TeamNotFound { id: u32 },

    #[error("fixture {id} not found")]
    FixtureNotFound { id: u32 },

    #[error("need at least two registered teams to schedule a fixture, have {registered}")]
    InsufficientTeams { registered: usize },
}

pub type Result<T> = std::result::Result<T, RegistryError>;
