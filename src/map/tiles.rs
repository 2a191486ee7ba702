use std::fmt;

use bevy::prelude::*;
use hexx::Hex;
use serde::{Deserialize, Serialize};

/// Stable identifier of a map tile
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Reflect, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TileId(pub String);

impl TileId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TileId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Regions of the Stolen Lands. `Hub` is the capital's region and the only
/// one that borders every other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    Hub,
    Greenbelt,
    Narlmarches,
    Tuskwater,
    Hooktongue,
    Pitax,
    Kamelands,
}

impl Region {
    pub fn is_hub(self) -> bool {
        self == Region::Hub
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Region::Hub => "Capital Hub",
            Region::Greenbelt => "Greenbelt",
            Region::Narlmarches => "Narlmarches",
            Region::Tuskwater => "Tuskwater",
            Region::Hooktongue => "Hooktongue",
            Region::Pitax => "Pitax",
            Region::Kamelands => "Kamelands",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TileKind {
    Capital,
    Wild,
}

/// A single hex of the world map.
///
/// Everything except `discovered` is fixed once the roster is built; the
/// roster only exposes `discovered` through `TileRoster::mark_discovered`.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pub id: TileId,
    pub name: String,
    pub axial: Hex,
    pub region: Region,
    pub kind: TileKind,
    pub(crate) discovered: bool,
}

impl Tile {
    pub fn new(
        id: impl Into<TileId>,
        name: impl Into<String>,
        axial: Hex,
        region: Region,
        kind: TileKind,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            axial,
            region,
            kind,
            discovered: false,
        }
    }

    pub fn with_discovered(mut self, discovered: bool) -> Self {
        self.discovered = discovered;
        self
    }

    pub fn is_capital(&self) -> bool {
        self.kind == TileKind::Capital
    }

    pub fn discovered(&self) -> bool {
        self.discovered
    }
}

impl From<String> for TileId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_hub_is_hub() {
        assert!(Region::Hub.is_hub());
        assert!(!Region::Greenbelt.is_hub());
        assert!(!Region::Pitax.is_hub());
    }

    #[test]
    fn new_tiles_start_hidden() {
        let tile = Tile::new("pitax", "Pitax Road", Hex::new(-1, 0), Region::Pitax, TileKind::Wild);
        assert!(!tile.discovered());
        assert!(!tile.is_capital());
        assert!(tile.with_discovered(true).discovered());
    }

    #[test]
    fn regions_use_snake_case_on_the_wire() {
        let json = serde_json::to_string(&Region::Greenbelt).unwrap();
        assert_eq!(json, "\"greenbelt\"");
        let kind: TileKind = serde_json::from_str("\"capital\"").unwrap();
        assert_eq!(kind, TileKind::Capital);
    }
}
