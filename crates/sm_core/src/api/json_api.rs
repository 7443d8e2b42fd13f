//! JSON API
//!
//! String-in/string-out entry points for form-based shells. Each request
//! carries a `schema_version` field; unsupported versions are rejected
//! before anything is mutated. Errors come back as plain formatted strings
//! so callers can drop them straight into a message dialog.

use serde::{Deserialize, Serialize};

use crate::models::{Fixture, Player, Team};
use crate::registry::Registry;
use crate::SCHEMA_VERSION;

#[derive(Debug, Deserialize)]
pub struct AddTeamRequest {
    pub schema_version: u8,
    pub team_id: u32,
    pub team_name: String,
}

#[derive(Debug, Deserialize)]
pub struct AddPlayerRequest {
    pub schema_version: u8,
    pub team_id: u32,
    pub player: PlayerData,
}

#[derive(Debug, Deserialize)]
pub struct PlayerData {
    pub id: u32,
    pub name: String,
    pub skill: String,
    #[serde(default)]
    pub matches_played: u32,
    #[serde(default)]
    pub score: u32,
}

#[derive(Debug, Deserialize)]
pub struct ScheduleFixtureRequest {
    pub schema_version: u8,
    pub fixture_id: u32,
    pub team_a: u32,
    pub team_b: u32,
    pub date: String,
    pub venue: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateResultRequest {
    pub schema_version: u8,
    pub fixture_id: u32,
    pub result: String,
}

#[derive(Debug, Serialize)]
pub struct AckResponse {
    pub schema_version: u8,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct SnapshotResponse<'a> {
    pub schema_version: u8,
    pub teams: &'a [Team],
    pub fixtures: &'a [Fixture],
}

fn parse_request<'a, T: Deserialize<'a>>(request_json: &'a str) -> Result<T, String> {
    serde_json::from_str(request_json).map_err(|e| format!("Invalid JSON request: {}", e))
}

fn check_schema(version: u8) -> Result<(), String> {
    if version != SCHEMA_VERSION {
        return Err(format!("Unsupported schema version: {}", version));
    }
    Ok(())
}

fn ack(message: String) -> Result<String, String> {
    serde_json::to_string(&AckResponse {
        schema_version: SCHEMA_VERSION,
        message,
    })
    .map_err(|e| format!("Response serialization failed: {}", e))
}

/// Register a team from an [`AddTeamRequest`] JSON payload.
pub fn add_team_json(registry: &mut Registry, request_json: &str) -> Result<String, String> {
    let request: AddTeamRequest = parse_request(request_json)?;
    check_schema(request.schema_version)?;

    let team = registry
        .add_team(request.team_id, &request.team_name)
        .map_err(|e| e.to_string())?;

    ack(format!("Team '{}' registered", team.name))
}

/// Append a player to a team's roster from an [`AddPlayerRequest`] payload.
pub fn add_player_json(registry: &mut Registry, request_json: &str) -> Result<String, String> {
    let request: AddPlayerRequest = parse_request(request_json)?;
    check_schema(request.schema_version)?;

    let PlayerData {
        id,
        name,
        skill,
        matches_played,
        score,
    } = request.player;

    let player = registry
        .add_player(request.team_id, Player::new(id, name, skill, matches_played, score))
        .map_err(|e| e.to_string())?;

    ack(format!("Player '{}' added to team {}", player.name, request.team_id))
}

/// Schedule a fixture from a [`ScheduleFixtureRequest`] payload.
pub fn schedule_fixture_json(
    registry: &mut Registry,
    request_json: &str,
) -> Result<String, String> {
    let request: ScheduleFixtureRequest = parse_request(request_json)?;
    check_schema(request.schema_version)?;

    let fixture = registry
        .schedule_fixture(
            request.fixture_id,
            request.team_a,
            request.team_b,
            &request.date,
            &request.venue,
        )
        .map_err(|e| e.to_string())?;

    ack(format!("Fixture {} scheduled for {}", fixture.id, fixture.date))
}

/// Overwrite a fixture result from an [`UpdateResultRequest`] payload.
pub fn update_result_json(registry: &mut Registry, request_json: &str) -> Result<String, String> {
    let request: UpdateResultRequest = parse_request(request_json)?;
    check_schema(request.schema_version)?;

    registry
        .update_result(request.fixture_id, &request.result)
        .map_err(|e| e.to_string())?;

    ack(format!("Fixture {} result recorded", request.fixture_id))
}

/// Serialize every team and fixture, for a scrollback or overview pane.
pub fn registry_snapshot_json(registry: &Registry) -> Result<String, String> {
    serde_json::to_string(&SnapshotResponse {
        schema_version: SCHEMA_VERSION,
        teams: registry.teams(),
        fixtures: registry.fixtures(),
    })
    .map_err(|e| format!("Response serialization failed: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_add_team_json_roundtrip() {
        let mut registry = Registry::new();
        let request = json!({
            "schema_version": 1,
            "team_id": 1,
            "team_name": "Tigers"
        });

        let response = add_team_json(&mut registry, &request.to_string()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&response).unwrap();

        assert_eq!(parsed["schema_version"], 1);
        assert_eq!(parsed["message"], "Team 'Tigers' registered");
        assert_eq!(registry.teams().len(), 1);
    }

    #[test]
    fn test_schema_version_mismatch_rejected_before_mutation() {
        let mut registry = Registry::new();
        let request = json!({
            "schema_version": 9,
            "team_id": 1,
            "team_name": "Tigers"
        });

        let err = add_team_json(&mut registry, &request.to_string()).unwrap_err();
        assert_eq!(err, "Unsupported schema version: 9");
        assert!(registry.teams().is_empty());
    }

    #[test]
    fn test_malformed_json_reported() {
        let mut registry = Registry::new();
        let err = add_team_json(&mut registry, "{not json").unwrap_err();
        assert!(err.starts_with("Invalid JSON request:"));
    }

    #[test]
    fn test_add_player_json_unknown_team() {
        let mut registry = Registry::new();
        let request = json!({
            "schema_version": 1,
            "team_id": 99,
            "player": { "id": 7, "name": "Nobody", "skill": "Beginner" }
        });

        let err = add_player_json(&mut registry, &request.to_string()).unwrap_err();
        assert_eq!(err, "team 99 not found");
    }

    #[test]
    fn test_full_workflow_and_snapshot() {
        let mut registry = Registry::new();

        for (id, name) in [(1, "Tigers"), (2, "Lions")] {
            let request = json!({
                "schema_version": 1,
                "team_id": id,
                "team_name": name
            });
            add_team_json(&mut registry, &request.to_string()).unwrap();
        }

        let request = json!({
            "schema_version": 1,
            "team_id": 1,
            "player": { "id": 10, "name": "Asha Rao", "skill": "Pro", "matches_played": 12, "score": 31 }
        });
        add_player_json(&mut registry, &request.to_string()).unwrap();

        let request = json!({
            "schema_version": 1,
            "fixture_id": 100,
            "team_a": 1,
            "team_b": 2,
            "date": "01-01-2030",
            "venue": "Stadium"
        });
        schedule_fixture_json(&mut registry, &request.to_string()).unwrap();

        let request = json!({
            "schema_version": 1,
            "fixture_id": 100,
            "result": "Tigers Won"
        });
        update_result_json(&mut registry, &request.to_string()).unwrap();

        let snapshot = registry_snapshot_json(&registry).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&snapshot).unwrap();

        assert_eq!(parsed["teams"].as_array().unwrap().len(), 2);
        assert_eq!(parsed["teams"][0]["players"][0]["name"], "Asha Rao");
        assert_eq!(parsed["fixtures"][0]["result"], "Tigers Won");
    }

    #[test]
    fn test_update_result_json_unknown_fixture() {
        let mut registry = Registry::new();
        let request = json!({
            "schema_version": 1,
            "fixture_id": 5,
            "result": "Draw"
        });

        let err = update_result_json(&mut registry, &request.to_string()).unwrap_err();
        assert_eq!(err, "fixture 5 not found");
    }
}
