use bevy::prelude::*;

use crate::map::TileId;
use crate::movement::MoveOutcome;

/// Request to move the party one step onto `to`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRequest {
    pub to: TileId,
}

impl MoveRequest {
    pub fn new(to: impl Into<TileId>) -> Self {
        Self { to: to.into() }
    }
}

/// Emitted for every processed move, whatever its outcome.
#[derive(Message, Debug, Clone, PartialEq)]
pub struct MoveResolved {
    pub from: TileId,
    pub to: TileId,
    pub outcome: MoveOutcome,
}
