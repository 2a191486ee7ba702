use bevy::prelude::*;

use crate::map::TileId;
use crate::messages::{MoveRequest, RenameCapital};

/// Everything the player can ask of the exploration core.
///
/// One message type keeps commands in the order they were written; they are
/// applied one after another in that order.
#[derive(Message, Debug, Clone, PartialEq)]
pub enum PlayerCommand {
    Move(MoveRequest),
    /// Open the capital interior. Ignored unless the party stands on the capital.
    EnterCapital,
    /// Return to the overview map from any screen.
    BackToGlobal,
    RenameCapital(RenameCapital),
}

impl PlayerCommand {
    pub fn move_to(to: impl Into<TileId>) -> Self {
        PlayerCommand::Move(MoveRequest::new(to))
    }

    pub fn rename(name: impl Into<String>) -> Self {
        PlayerCommand::RenameCapital(RenameCapital { name: name.into() })
    }
}

impl From<MoveRequest> for PlayerCommand {
    fn from(request: MoveRequest) -> Self {
        PlayerCommand::Move(request)
    }
}

impl From<RenameCapital> for PlayerCommand {
    fn from(request: RenameCapital) -> Self {
        PlayerCommand::RenameCapital(request)
    }
}
