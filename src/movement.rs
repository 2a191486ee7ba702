use bevy::prelude::*;
use std::collections::VecDeque;
use thiserror::Error;

use crate::constants::JOURNEY_LOG_CAPACITY;
use crate::map::hex::{bounded_neighbors, is_adjacent};
use crate::map::{PartyPosition, Tile, TileId, TileRoster};
use crate::commands::CommandSet;
use crate::messages::MoveResolved;

/// Where the UI should go after a committed move
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NavigationDirective {
    /// Landing on the capital keeps the overview; the interior is a separate action.
    StayOnGlobalView,
    OpenTileDetail(TileId),
}

/// Why a move was refused. Refusals are ordinary results, never panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum MoveRejection {
    #[error("tile does not exist")]
    UnknownTile,
    #[error("tile is not adjacent to the party")]
    NotAdjacent,
    #[error("peripheral regions only connect through the hub")]
    CrossRegion,
}

impl MoveRejection {
    pub fn code(self) -> &'static str {
        match self {
            MoveRejection::UnknownTile => "unknown-tile",
            MoveRejection::NotAdjacent => "not-adjacent",
            MoveRejection::CrossRegion => "cross-region",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved { directive: NavigationDirective },
    Invalid { reason: MoveRejection },
    NoOp,
}

impl MoveOutcome {
    pub fn is_moved(&self) -> bool {
        matches!(self, MoveOutcome::Moved { .. })
    }

    pub fn describe(&self) -> String {
        match self {
            MoveOutcome::Moved { .. } => "moved".to_string(),
            MoveOutcome::Invalid { reason } => format!("invalid ({})", reason.code()),
            MoveOutcome::NoOp => "no-op".to_string(),
        }
    }
}

/// Check a single step without touching any state.
///
/// Order matters: self-move, existence, adjacency, then the hub rule.
pub fn evaluate_move(roster: &TileRoster, from: &TileId, to: &TileId) -> MoveOutcome {
    if from == to {
        return MoveOutcome::NoOp;
    }
    match validate_step(roster, from, to) {
        Ok(destination) => MoveOutcome::Moved {
            directive: directive_for(destination),
        },
        Err(reason) => MoveOutcome::Invalid { reason },
    }
}

fn validate_step<'a>(
    roster: &'a TileRoster,
    from: &TileId,
    to: &TileId,
) -> Result<&'a Tile, MoveRejection> {
    let origin = roster.lookup(from).ok_or(MoveRejection::UnknownTile)?;
    let destination = roster.lookup(to).ok_or(MoveRejection::UnknownTile)?;

    if !is_adjacent(origin.axial, destination.axial) {
        return Err(MoveRejection::NotAdjacent);
    }

    if origin.region != destination.region
        && !origin.region.is_hub()
        && !destination.region.is_hub()
    {
        return Err(MoveRejection::CrossRegion);
    }

    Ok(destination)
}

fn directive_for(destination: &Tile) -> NavigationDirective {
    if destination.is_capital() {
        NavigationDirective::StayOnGlobalView
    } else {
        NavigationDirective::OpenTileDetail(destination.id.clone())
    }
}

/// Move the party onto `to` if the step is legal.
///
/// Position and discovery are written together only after every check has
/// passed; refused moves leave both resources untouched.
pub fn attempt_move(
    roster: &mut TileRoster,
    party: &mut PartyPosition,
    to: &TileId,
) -> MoveOutcome {
    let outcome = evaluate_move(roster, party.tile(), to);
    if outcome.is_moved() {
        party.0 = to.clone();
        roster.mark_discovered(to);
    }
    outcome
}

/// Every tile a single legal step away from `from`, in neighbour order.
pub fn legal_moves(roster: &TileRoster, from: &TileId) -> Vec<TileId> {
    let Some(origin) = roster.lookup(from) else {
        return Vec::new();
    };
    bounded_neighbors(origin.axial)
        .filter_map(|hex| roster.tile_at(hex))
        .filter(|tile| evaluate_move(roster, from, &tile.id).is_moved())
        .map(|tile| tile.id.clone())
        .collect()
}

/// Bounded history of resolved moves, newest last
#[derive(Resource, Debug)]
pub struct JourneyLog {
    entries: VecDeque<MoveResolved>,
    capacity: usize,
}

impl Default for JourneyLog {
    fn default() -> Self {
        Self::new(JOURNEY_LOG_CAPACITY)
    }
}

impl JourneyLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn record(&mut self, entry: MoveResolved) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn entries(&self) -> impl Iterator<Item = &MoveResolved> {
        self.entries.iter()
    }

    pub fn last(&self) -> Option<&MoveResolved> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of moves that actually changed the party's position
    pub fn steps_taken(&self) -> usize {
        self.entries.iter().filter(|e| e.outcome.is_moved()).count()
    }
}

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<MoveResolved>()
            .init_resource::<JourneyLog>()
            .add_systems(PreUpdate, record_journey.after(CommandSet));
    }
}

fn record_journey(mut resolved: MessageReader<MoveResolved>, mut log: ResMut<JourneyLog>) {
    for entry in resolved.read() {
        log.record(entry.clone());
    }
}
