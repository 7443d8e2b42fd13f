//! Menu loops and record rendering.

use anyhow::Result;
use std::io::BufRead;

use sm_core::{Player, Registry};

use crate::prompt;

/// Top-level menu loop. Returns when the user picks Exit (or stdin closes).
pub fn main_menu<R: BufRead>(registry: &mut Registry, input: &mut R) -> Result<()> {
    loop {
        println!("\n==== SPORT MANAGEMENT SYSTEM ====");
        println!("1. Manage Teams");
        println!("2. Manage Fixtures");
        println!("3. View All Data");
        println!("0. Exit");

        match prompt::number(input, "Enter your choice: ")? {
            Some(1) => team_menu(registry, input)?,
            Some(2) => fixture_menu(registry, input)?,
            Some(3) => view_all(registry),
            Some(0) => {
                println!("Exiting. Goodbye!");
                return Ok(());
            }
            Some(_) => println!("Invalid menu option!"),
            None => {}
        }
    }
}

fn team_menu<R: BufRead>(registry: &mut Registry, input: &mut R) -> Result<()> {
    loop {
        println!("\n-- TEAM MANAGEMENT --");
        println!("1. Add Team");
        println!("2. Add Player to Team");
        println!("3. View Teams");
        println!("4. Find Player by ID");
        println!("0. Back");

        match prompt::number(input, "Enter your choice: ")? {
            Some(1) => add_team(registry, input)?,
            Some(2) => add_player(registry, input)?,
            Some(3) => print_teams(registry),
            Some(4) => find_player(registry, input)?,
            Some(0) => return Ok(()),
            Some(_) => println!("Invalid choice!"),
            None => {}
        }
    }
}

fn fixture_menu<R: BufRead>(registry: &mut Registry, input: &mut R) -> Result<()> {
    loop {
        println!("\n-- FIXTURE MANAGEMENT --");
        println!("1. Schedule Fixture");
        println!("2. Update Result");
        println!("3. View Fixtures");
        println!("0. Back");

        match prompt::number(input, "Enter your choice: ")? {
            Some(1) => schedule_fixture(registry, input)?,
            Some(2) => update_result(registry, input)?,
            Some(3) => print_fixtures(registry),
            Some(0) => return Ok(()),
            Some(_) => println!("Invalid choice!"),
            None => {}
        }
    }
}

// ========================
// Team operations
// ========================

fn add_team<R: BufRead>(registry: &mut Registry, input: &mut R) -> Result<()> {
    let Some(id) = prompt::number(input, "Enter Team ID: ")? else {
        return Ok(());
    };
    let name = prompt::line(input, "Enter Team Name: ")?;

    match registry.add_team(id, &name) {
        Ok(team) => println!("Team '{}' added successfully!", team.name),
        Err(e) => println!("Could not add team: {}", e),
    }
    Ok(())
}

fn add_player<R: BufRead>(registry: &mut Registry, input: &mut R) -> Result<()> {
    if registry.teams().is_empty() {
        println!("No teams available. Add a team first!");
        return Ok(());
    }

    let Some(team_id) = prompt::number(input, "Enter Team ID to add player: ")? else {
        return Ok(());
    };
    if registry.find_team(team_id).is_none() {
        println!("Team not found!");
        return Ok(());
    }

    let Some(id) = prompt::number(input, "Enter Player ID: ")? else {
        return Ok(());
    };
    let name = prompt::line(input, "Enter Player Name: ")?;
    let skill = prompt::line(input, "Enter Skill Level (Beginner/Intermediate/Pro): ")?;
    let Some(matches_played) = prompt::number(input, "Enter Matches Played: ")? else {
        return Ok(());
    };
    let Some(score) = prompt::number(input, "Enter Runs/Goals: ")? else {
        return Ok(());
    };

    match registry.add_player(team_id, Player::new(id, name, skill, matches_played, score)) {
        Ok(player) => println!("Player '{}' added successfully!", player.name),
        Err(e) => println!("Could not add player: {}", e),
    }
    Ok(())
}

fn find_player<R: BufRead>(registry: &Registry, input: &mut R) -> Result<()> {
    let Some(id) = prompt::number(input, "Enter Player ID: ")? else {
        return Ok(());
    };

    match registry.find_player(id) {
        Some((team, player)) => {
            println!("Found in team '{}':", team.name);
            println!("{}", player);
        }
        None => println!("Player not found!"),
    }
    Ok(())
}

// ========================
// Fixture operations
// ========================

fn schedule_fixture<R: BufRead>(registry: &mut Registry, input: &mut R) -> Result<()> {
    if registry.teams().len() < 2 {
        println!("Need at least two teams to schedule a fixture!");
        return Ok(());
    }

    let Some(id) = prompt::number(input, "Enter Fixture ID: ")? else {
        return Ok(());
    };
    let Some(team_a) = prompt::number(input, "Enter Team A ID: ")? else {
        return Ok(());
    };
    let Some(team_b) = prompt::number(input, "Enter Team B ID: ")? else {
        return Ok(());
    };
    let date = prompt::line(input, "Enter Date (DD-MM-YYYY): ")?;
    let venue = prompt::line(input, "Enter Venue: ")?;

    match registry.schedule_fixture(id, team_a, team_b, &date, &venue) {
        Ok(_) => println!("Fixture scheduled successfully!"),
        Err(e) => println!("Could not schedule fixture: {}", e),
    }
    Ok(())
}

fn update_result<R: BufRead>(registry: &mut Registry, input: &mut R) -> Result<()> {
    if registry.fixtures().is_empty() {
        println!("No fixtures found!");
        return Ok(());
    }

    let Some(id) = prompt::number(input, "Enter Fixture ID: ")? else {
        return Ok(());
    };
    let result = prompt::line(input, "Enter Result (e.g., TeamA Won / TeamB Won / Draw): ")?;

    match registry.update_result(id, &result) {
        Ok(()) => println!("Result updated successfully!"),
        Err(e) => println!("Could not update result: {}", e),
    }
    Ok(())
}

// ========================
// Rendering
// ========================

fn print_teams(registry: &Registry) {
    if registry.teams().is_empty() {
        println!("No teams available!");
        return;
    }
    for team in registry.teams() {
        println!("\nTeam ID: {} | Team Name: {}", team.id, team.name);
        println!("Players:");
        for player in &team.players {
            println!("{}", player);
        }
    }
}

fn print_fixtures(registry: &Registry) {
    if registry.fixtures().is_empty() {
        println!("No fixtures available!");
        return;
    }
    for fixture in registry.fixtures() {
        let team_a = team_name(registry, fixture.team_a);
        let team_b = team_name(registry, fixture.team_b);
        println!("\nFixture ID: {} | {} vs {}", fixture.id, team_a, team_b);
        println!(
            "Date: {} | Venue: {} | Result: {}",
            fixture.date, fixture.venue, fixture.result
        );
    }
}

fn view_all(registry: &Registry) {
    print_teams(registry);
    print_fixtures(registry);
}

fn team_name(registry: &Registry, id: u32) -> &str {
    registry.find_team(id).map(|t| t.name.as_str()).unwrap_or("?")
}
