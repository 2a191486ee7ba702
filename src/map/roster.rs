use std::collections::HashMap;

use bevy::prelude::*;
use hexx::Hex;
use thiserror::Error;

use crate::map::tiles::{Tile, TileId};

/// Startup validation failures. Any of these aborts world initialisation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("tile roster is empty")]
    Empty,
    #[error("tile roster has no capital tile")]
    MissingCapital,
    #[error("tile roster has more than one capital: '{first}' and '{second}'")]
    DuplicateCapital { first: TileId, second: TileId },
    #[error("tile id '{0}' defined more than once")]
    DuplicateTileId(TileId),
    #[error("tiles '{first}' and '{second}' share axial coordinate ({q}, {r})")]
    DuplicateAxial {
        q: i32,
        r: i32,
        first: TileId,
        second: TileId,
    },
    #[error("party start tile '{0}' is not on the map")]
    UnknownPartyStart(TileId),
}

/// The full, fixed set of map tiles keyed by id.
///
/// Built once from initialisation data; the only mutation afterwards is
/// flipping `discovered` to true.
#[derive(Resource, Debug, Clone)]
pub struct TileRoster {
    tiles: Vec<Tile>,
    index: HashMap<TileId, usize>,
    by_axial: HashMap<Hex, usize>,
    capital: usize,
}

impl TileRoster {
    pub fn from_tiles(tiles: impl IntoIterator<Item = Tile>) -> Result<Self, RosterError> {
        let tiles: Vec<Tile> = tiles.into_iter().collect();
        if tiles.is_empty() {
            return Err(RosterError::Empty);
        }

        let mut index = HashMap::with_capacity(tiles.len());
        let mut by_axial = HashMap::with_capacity(tiles.len());
        let mut capital: Option<usize> = None;

        for (i, tile) in tiles.iter().enumerate() {
            if index.insert(tile.id.clone(), i).is_some() {
                return Err(RosterError::DuplicateTileId(tile.id.clone()));
            }
            if let Some(&other) = by_axial.get(&tile.axial) {
                let other: &Tile = &tiles[other];
                return Err(RosterError::DuplicateAxial {
                    q: tile.axial.x,
                    r: tile.axial.y,
                    first: other.id.clone(),
                    second: tile.id.clone(),
                });
            }
            by_axial.insert(tile.axial, i);

            if tile.is_capital() {
                if let Some(first) = capital {
                    return Err(RosterError::DuplicateCapital {
                        first: tiles[first].id.clone(),
                        second: tile.id.clone(),
                    });
                }
                capital = Some(i);
            }
        }

        let capital = capital.ok_or(RosterError::MissingCapital)?;
        let mut roster = Self {
            tiles,
            index,
            by_axial,
            capital,
        };
        // The capital is always known ground.
        roster.tiles[capital].discovered = true;
        Ok(roster)
    }

    /// Look up a tile by id. `None` is an ordinary answer for unknown ids.
    pub fn lookup(&self, id: &TileId) -> Option<&Tile> {
        self.index.get(id).map(|&i| &self.tiles[i])
    }

    pub fn contains(&self, id: &TileId) -> bool {
        self.index.contains_key(id)
    }

    pub fn tile_at(&self, axial: Hex) -> Option<&Tile> {
        self.by_axial.get(&axial).map(|&i| &self.tiles[i])
    }

    pub fn capital(&self) -> &Tile {
        &self.tiles[self.capital]
    }

    /// Reveal a tile. Idempotent; unknown ids are ignored.
    pub fn mark_discovered(&mut self, id: &TileId) {
        if let Some(&i) = self.index.get(id) {
            self.tiles[i].discovered = true;
        }
    }

    /// Tiles in initialisation order.
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn discovered_count(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.discovered).count()
    }
}

/// The tile the party currently stands on. Always a valid roster id.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct PartyPosition(pub(crate) TileId);

impl PartyPosition {
    /// Place the party on `start`, failing if the roster does not know it.
    pub fn place(roster: &TileRoster, start: TileId) -> Result<Self, RosterError> {
        if roster.contains(&start) {
            Ok(Self(start))
        } else {
            Err(RosterError::UnknownPartyStart(start))
        }
    }

    /// Start the party on the capital.
    pub fn at_capital(roster: &TileRoster) -> Self {
        Self(roster.capital().id.clone())
    }

    pub fn tile(&self) -> &TileId {
        &self.0
    }
}
