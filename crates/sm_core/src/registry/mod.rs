//! In-Memory Registry
//!
//! This module provides the owned store of all teams and fixtures. The
//! `Registry` struct is plain data passed explicitly to callers; there is
//! no global state. All lookups are linear scans, which is fine at the
//! roster sizes this tool is meant for.

use serde::{Deserialize, Serialize};

use crate::error::{RegistryError, Result};
use crate::models::{Fixture, Player, Team};

/// How `add_team` treats colliding ids and names.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum UniquenessPolicy {
    /// Reject duplicate team ids and (case-insensitively) duplicate names.
    #[default]
    Strict,
    /// Append without checking. Duplicate ids then resolve to the most
    /// recently added team on lookup.
    Lenient,
}

/// The in-memory store of all teams and fixtures.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Registry {
    teams: Vec<Team>,
    fixtures: Vec<Fixture>,
    policy: UniquenessPolicy,
}

impl Registry {
    /// Create an empty registry with the strict uniqueness policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry with an explicit uniqueness policy.
    pub fn with_policy(policy: UniquenessPolicy) -> Self {
        Self {
            teams: Vec::new(),
            fixtures: Vec::new(),
            policy,
        }
    }

    pub fn policy(&self) -> UniquenessPolicy {
        self.policy
    }

    // ========================
    // Team Management
    // ========================

    /// Register a new team.
    ///
    /// Under [`UniquenessPolicy::Strict`] a colliding id or name aborts the
    /// operation; under [`UniquenessPolicy::Lenient`] the team is appended
    /// unconditionally.
    pub fn add_team(&mut self, id: u32, name: &str) -> Result<&Team> {
        if self.policy == UniquenessPolicy::Strict {
            if self.teams.iter().any(|t| t.id == id) {
                return Err(RegistryError::DuplicateTeamId { id });
            }
            if let Some(existing) = self
                .teams
                .iter()
                .find(|t| t.name.eq_ignore_ascii_case(name))
            {
                return Err(RegistryError::DuplicateTeamName {
                    name: existing.name.clone(),
                });
            }
        }

        let idx = self.teams.len();
        self.teams.push(Team::new(id, name));
        log::info!("registered team {} ({})", id, name);
        Ok(&self.teams[idx])
    }

    /// Find a team by id, scanning the whole list.
    ///
    /// The scan deliberately does not short-circuit: with the lenient
    /// policy, duplicate ids resolve to the last team registered.
    pub fn find_team(&self, id: u32) -> Option<&Team> {
        let mut found = None;
        for team in &self.teams {
            if team.id == id {
                found = Some(team);
            }
        }
        found
    }

    /// Append a player to the roster of the team with the given id.
    pub fn add_player(&mut self, team_id: u32, player: Player) -> Result<&Player> {
        let idx = self
            .find_team_index(team_id)
            .ok_or(RegistryError::TeamNotFound { id: team_id })?;
        let team = &mut self.teams[idx];
        log::debug!("adding player {} to team {}", player.id, team_id);
        Ok(team.add_player(player))
    }

    /// Scan all rosters for a player id; first match wins.
    pub fn find_player(&self, player_id: u32) -> Option<(&Team, &Player)> {
        for team in &self.teams {
            if let Some(player) = team.find_player(player_id) {
                return Some((team, player));
            }
        }
        None
    }

    /// All teams, in registration order.
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    // ========================
    // Fixture Management
    // ========================

    /// Schedule a match between two registered teams.
    ///
    /// The fixture starts with the `"Pending"` result. Fixture ids are not
    /// checked for uniqueness, matching the rest of the tool's bookkeeping.
    pub fn schedule_fixture(
        &mut self,
        id: u32,
        team_a: u32,
        team_b: u32,
        date: &str,
        venue: &str,
    ) -> Result<&Fixture> {
        if self.teams.len() < 2 {
            return Err(RegistryError::InsufficientTeams {
                registered: self.teams.len(),
            });
        }
        if self.find_team(team_a).is_none() {
            return Err(RegistryError::TeamNotFound { id: team_a });
        }
        if self.find_team(team_b).is_none() {
            return Err(RegistryError::TeamNotFound { id: team_b });
        }

        let idx = self.fixtures.len();
        self.fixtures.push(Fixture::new(id, team_a, team_b, date, venue));
        log::info!("scheduled fixture {} ({} vs {})", id, team_a, team_b);
        Ok(&self.fixtures[idx])
    }

    /// Overwrite the result of the first fixture with the given id.
    pub fn update_result(&mut self, fixture_id: u32, result: &str) -> Result<()> {
        let fixture = self
            .fixtures
            .iter_mut()
            .find(|f| f.id == fixture_id)
            .ok_or(RegistryError::FixtureNotFound { id: fixture_id })?;
        fixture.set_result(result);
        log::info!("fixture {} result set to '{}'", fixture_id, result);
        Ok(())
    }

    /// All fixtures, in scheduling order.
    pub fn fixtures(&self) -> &[Fixture] {
        &self.fixtures
    }

    // ========================
    // Internal helpers
    // ========================

    /// Index of the team a given id resolves to (last match, like
    /// `find_team`).
    fn find_team_index(&self, id: u32) -> Option<usize> {
        let mut found = None;
        for (idx, team) in self.teams.iter().enumerate() {
            if team.id == id {
                found = Some(idx);
            }
        }
        found
    }
}
