//! Testing utilities for the exploration core
//!
//! Helpers and fixtures for unit testing map, movement and navigation systems
//! in isolation against a hand-built ECS world.

use bevy::prelude::*;
use hexx::Hex;

use crate::map::{CapitalName, PartyPosition, Region, Tile, TileId, TileKind, TileRoster};
use crate::messages::{CapitalRenameRejected, CapitalRenamed, MoveResolved, PlayerCommand};
use crate::movement::JourneyLog;
use crate::ui::mode::Screen;

/// Capital hub at the origin with one tile of each neighbouring region.
///
/// `greenbelt-nw` (0,-1) and `pitax` (-1,0) touch each other but sit in
/// different peripheral regions. `greenbelt-far` is two steps out.
pub fn regioned_roster() -> TileRoster {
    TileRoster::from_tiles([
        Tile::new("capital", "Capital", Hex::ZERO, Region::Hub, TileKind::Capital),
        Tile::new(
            "greenbelt-nw",
            "Greenbelt Glade",
            Hex::new(0, -1),
            Region::Greenbelt,
            TileKind::Wild,
        ),
        Tile::new("pitax", "Road to Pitax", Hex::new(-1, 0), Region::Pitax, TileKind::Wild),
        Tile::new(
            "greenbelt-ne",
            "Greenbelt Ridge",
            Hex::new(1, -1),
            Region::Greenbelt,
            TileKind::Wild,
        ),
        Tile::new(
            "greenbelt-far",
            "Deep Greenbelt",
            Hex::new(0, -2),
            Region::Greenbelt,
            TileKind::Wild,
        ),
        Tile::new("hub-east", "Hub Fields", Hex::new(1, 0), Region::Hub, TileKind::Wild),
    ])
    .expect("fixture roster is valid")
}

pub fn id(raw: &str) -> TileId {
    TileId::from(raw)
}

/// Party placed on `start` of the regioned fixture.
pub fn party_at(roster: &TileRoster, start: &str) -> PartyPosition {
    PartyPosition::place(roster, id(start)).expect("fixture tile exists")
}

/// Creates a minimal ECS world with the regioned map and every message
/// resource the command and movement systems use.
pub fn create_test_world(start: &str) -> World {
    let mut world = World::new();
    let roster = regioned_roster();
    let party = party_at(&roster, start);

    world.insert_resource(roster);
    world.insert_resource(party);
    world.insert_resource(CapitalName::default());
    world.init_resource::<JourneyLog>();
    world.insert_resource(State::new(Screen::Global));
    world.init_resource::<NextState<Screen>>();

    world.init_resource::<Messages<PlayerCommand>>();
    world.init_resource::<Messages<MoveResolved>>();
    world.init_resource::<Messages<CapitalRenamed>>();
    world.init_resource::<Messages<CapitalRenameRejected>>();

    world
}

pub fn send_command(world: &mut World, command: PlayerCommand) {
    world
        .resource_mut::<Messages<PlayerCommand>>()
        .write(command);
}

pub fn request_move(world: &mut World, to: &str) {
    send_command(world, PlayerCommand::move_to(to));
}
