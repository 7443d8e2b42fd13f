pub mod json_api;

pub use json_api::{
    add_player_json, add_team_json, registry_snapshot_json, schedule_fixture_json,
    update_result_json, AckResponse, AddPlayerRequest, AddTeamRequest, PlayerData,
    ScheduleFixtureRequest, SnapshotResponse, UpdateResultRequest,
};
