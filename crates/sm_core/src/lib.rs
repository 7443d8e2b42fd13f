//! # sm_core - Sport Team & Fixture Registry
//!
//! This library provides an in-memory registry of sports teams, their
//! player rosters, and scheduled fixtures, with a JSON API for easy
//! integration with interactive front-ends.
//!
//! ## Features
//! - Owned [`Registry`] value, no global state
//! - Configurable uniqueness policy for team registration
//! - JSON API for form-based shells (see [`api`])

pub mod api;
pub mod error;
pub mod models;
pub mod registry;

// Re-export main API functions
pub use api::{
    add_player_json, add_team_json, registry_snapshot_json, schedule_fixture_json,
    update_result_json,
};
pub use error::{RegistryError, Result};
pub use models::{Fixture, Player, Team, PENDING_RESULT};
pub use registry::{Registry, UniquenessPolicy};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_season_workflow() {
        let mut registry = Registry::new();

        registry.add_team(1, "Tigers").unwrap();
        registry.add_team(2, "Lions").unwrap();

        let fixture = registry
            .schedule_fixture(100, 1, 2, "01-01-2030", "Stadium")
            .unwrap();
        assert_eq!(fixture.result, PENDING_RESULT);

        registry.update_result(100, "Tigers Won").unwrap();
        assert_eq!(registry.fixtures()[0].result, "Tigers Won");
    }

    #[test]
    fn test_add_player_to_missing_team_leaves_registry_unchanged() {
        let mut registry = Registry::new();

        let err = registry
            .add_player(99, Player::new(7, "Nobody", "Beginner", 0, 0))
            .unwrap_err();

        assert_eq!(err, RegistryError::TeamNotFound { id: 99 });
        assert!(registry.teams().is_empty());
        assert!(registry.fixtures().is_empty());
    }
}
