use bevy::prelude::*;

use crate::map::TileId;
use crate::movement::{MoveOutcome, NavigationDirective};

/// Which view is active. Exactly one at a time.
#[derive(States, Debug, Clone, Eq, PartialEq, Hash, Default, Reflect)]
pub enum Screen {
    /// Hex map overview
    #[default]
    Global,
    /// Detail panel for the tile the party just entered
    TileDetail(TileId),
    /// Capital interior
    Capital,
}

impl Screen {
    /// Screen after a resolved move. Refused and no-op moves keep the view.
    pub fn after_move(&self, outcome: &MoveOutcome) -> Screen {
        match outcome {
            MoveOutcome::Moved {
                directive: NavigationDirective::OpenTileDetail(tile),
            } => Screen::TileDetail(tile.clone()),
            MoveOutcome::Moved {
                directive: NavigationDirective::StayOnGlobalView,
            } => Screen::Global,
            MoveOutcome::Invalid { .. } | MoveOutcome::NoOp => self.clone(),
        }
    }

    /// Open the capital interior when the party stands on the capital.
    ///
    /// Tile detail never leads straight into the capital; it has to go
    /// through the overview first.
    pub fn enter_capital(&self, party_on_capital: bool) -> Screen {
        match self {
            Screen::Global | Screen::Capital if party_on_capital => Screen::Capital,
            _ => self.clone(),
        }
    }

    pub fn back_to_global(&self) -> Screen {
        Screen::Global
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Screen::Global => "global",
            Screen::TileDetail(_) => "tile_detail",
            Screen::Capital => "capital",
        }
    }

    pub fn detail_tile(&self) -> Option<&TileId> {
        match self {
            Screen::TileDetail(tile) => Some(tile),
            _ => None,
        }
    }
}
