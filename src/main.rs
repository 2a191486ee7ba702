//! Terminal driver for the exploration core.
//! Run with: cargo run -- [scenario.json]
//!
//! Stands in for the map/capital/tile screens: each command becomes a
//! `PlayerCommand`, one frame applies them, and the snapshot is printed.
//! Several commands separated by `;` are sent in one frame, in order.

use std::io::{self, BufRead, Write};
use std::path::Path;

use bevy::log::LogPlugin;
use bevy::prelude::*;
use stolen_lands::constants::DEFAULT_SCENARIO_PATH;
use stolen_lands::map::{PartyPosition, Scenario, ScenarioError, TileRoster};
use stolen_lands::messages::PlayerCommand;
use stolen_lands::movement::{JourneyLog, legal_moves};
use stolen_lands::ui::MapSnapshot;

fn load_scenario(arg: Option<String>) -> Result<Scenario, ScenarioError> {
    match arg {
        Some(path) => Scenario::load_from_path(path),
        None if Path::new(DEFAULT_SCENARIO_PATH).exists() => {
            Scenario::load_from_path(DEFAULT_SCENARIO_PATH)
        }
        None => Ok(Scenario::stolen_lands()),
    }
}

fn send(app: &mut App, command: PlayerCommand) {
    app.world_mut()
        .resource_mut::<Messages<PlayerCommand>>()
        .write(command);
}

/// Parse one `verb [argument]` segment into a world command.
fn parse_command(segment: &str) -> Option<PlayerCommand> {
    let (verb, argument) = segment.split_once(' ').unwrap_or((segment, ""));
    match verb {
        "move" => Some(PlayerCommand::move_to(argument.trim())),
        "enter" => Some(PlayerCommand::EnterCapital),
        "back" => Some(PlayerCommand::BackToGlobal),
        "rename" => Some(PlayerCommand::rename(argument)),
        _ => None,
    }
}

fn print_snapshot(app: &App) {
    let snapshot = app.world().resource::<MapSnapshot>();
    println!("{}", snapshot.status_text());
    for tile in &snapshot.tiles {
        let marker = if tile.has_party { '@' } else { ' ' };
        let name = if tile.discovered { tile.name.as_str() } else { "???" };
        println!(
            " {} {:<16} ({:>2},{:>2}) {:<12} {}",
            marker,
            tile.id.as_str(),
            tile.q,
            tile.r,
            tile.region.display_name(),
            name
        );
    }
}

fn print_last_move(app: &App) {
    if let Some(entry) = app.world().resource::<JourneyLog>().last() {
        println!("{} -> {}: {}", entry.from, entry.to, entry.outcome.describe());
    }
}

fn print_legal_moves(app: &App) {
    let world = app.world();
    let roster = world.resource::<TileRoster>();
    let party = world.resource::<PartyPosition>();
    let moves: Vec<String> = legal_moves(roster, party.tile())
        .into_iter()
        .map(|id| id.to_string())
        .collect();
    println!("Legal moves: {}", moves.join(", "));
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let scenario = load_scenario(std::env::args().nth(1))?;
    let initial = scenario.build()?;

    let mut app = stolen_lands::app(initial);
    app.add_plugins(LogPlugin::default());
    app.update();

    println!("Scenario '{}' loaded.", scenario.name);
    println!("Commands: move <id> | enter | back | rename <name> | moves | show | quit");
    println!("Join commands with ';' to send them in one frame.");
    print_snapshot(&app);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();

        match line {
            "moves" => print_legal_moves(&app),
            "show" => print_snapshot(&app),
            "quit" | "exit" => break,
            "" => {}
            _ => {
                let mut sent = 0;
                for segment in line.split(';').map(str::trim).filter(|s| !s.is_empty()) {
                    match parse_command(segment) {
                        Some(command) => {
                            send(&mut app, command);
                            sent += 1;
                        }
                        None => println!("Unknown command '{segment}'"),
                    }
                }
                if sent > 0 {
                    app.update();
                    print_last_move(&app);
                    print_snapshot(&app);
                }
            }
        }
        stdout.flush()?;
    }

    Ok(())
}
