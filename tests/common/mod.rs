#![allow(dead_code)]

use bevy::prelude::*;
use stolen_lands::map::{PartyPosition, Scenario, TileId, TileRoster};
use stolen_lands::messages::PlayerCommand;
use stolen_lands::ui::Screen;

pub const STOLEN_LANDS_SCENARIO: &str = "assets/scenarios/stolen_lands.json";
pub const FOG_OF_WAR_SCENARIO: &str = "assets/scenarios/fog_of_war.json";

/// Headless app built from a scenario, already past its first frame
pub fn create_test_app(scenario: Scenario) -> App {
    let initial = scenario.build().expect("scenario is valid");
    let mut app = stolen_lands::app(initial);
    app.update();
    app
}

pub fn fixture_path(relative: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join(relative)
}

/// Queue commands without running a frame
pub fn queue(app: &mut App, commands: impl IntoIterator<Item = PlayerCommand>) {
    let mut inbox = app.world_mut().resource_mut::<Messages<PlayerCommand>>();
    for command in commands {
        inbox.write(command);
    }
}

/// Deliver one command and run exactly one frame.
pub fn send(app: &mut App, command: PlayerCommand) {
    queue(app, [command]);
    app.update();
}

pub fn move_to(app: &mut App, to: &str) {
    send(app, PlayerCommand::move_to(to));
}

pub fn enter_capital(app: &mut App) {
    send(app, PlayerCommand::EnterCapital);
}

pub fn back_to_global(app: &mut App) {
    send(app, PlayerCommand::BackToGlobal);
}

pub fn rename_capital(app: &mut App, name: &str) {
    send(app, PlayerCommand::rename(name));
}

pub fn screen(app: &App) -> Screen {
    app.world().resource::<State<Screen>>().get().clone()
}

pub fn party_tile(app: &App) -> TileId {
    app.world().resource::<PartyPosition>().tile().clone()
}

pub fn discovered(app: &App) -> Vec<(String, bool)> {
    app.world()
        .resource::<TileRoster>()
        .iter()
        .map(|tile| (tile.id.to_string(), tile.discovered()))
        .collect()
}

pub fn is_discovered(app: &App, id: &str) -> bool {
    app.world()
        .resource::<TileRoster>()
        .lookup(&TileId::from(id))
        .is_some_and(|tile| tile.discovered())
}
