//! Scenario description of the starting map
//!
//! A scenario is plain data: the ordered tile list, where the party starts and
//! an optional initial capital name. Whether wild tiles start hidden (fog of
//! war) is decided per tile by the scenario, never by the movement rules.

use std::fs;
use std::path::{Path, PathBuf};

use bevy::prelude::*;
use hexx::Hex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::map::capital::{CapitalName, RenameError, validate_capital_name};
use crate::map::roster::{PartyPosition, RosterError, TileRoster};
use crate::map::tiles::{Region, Tile, TileId, TileKind};

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse scenario: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tile roster: {0}")]
    Roster(#[from] RosterError),
    #[error("invalid capital name: {0}")]
    CapitalName(#[from] RenameError),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    #[serde(default)]
    pub capital_name: Option<String>,
    /// Defaults to the capital when omitted
    #[serde(default)]
    pub party_start: Option<TileId>,
    pub tiles: Vec<TileSpec>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileSpec {
    pub id: TileId,
    pub name: String,
    /// Axial `[q, r]`
    pub axial: (i32, i32),
    pub region: Region,
    pub kind: TileKind,
    #[serde(default)]
    pub discovered: bool,
}

impl TileSpec {
    fn wild(id: &str, name: &str, axial: (i32, i32), region: Region, discovered: bool) -> Self {
        Self {
            id: TileId::from(id),
            name: name.to_string(),
            axial,
            region,
            kind: TileKind::Wild,
            discovered,
        }
    }

    fn capital(id: &str, name: &str) -> Self {
        Self {
            id: TileId::from(id),
            name: name.to_string(),
            axial: (0, 0),
            region: Region::Hub,
            kind: TileKind::Capital,
            discovered: true,
        }
    }

    fn to_tile(&self) -> Tile {
        Tile::new(
            self.id.clone(),
            self.name.clone(),
            Hex::new(self.axial.0, self.axial.1),
            self.region,
            self.kind,
        )
        .with_discovered(self.discovered)
    }
}

/// Validated starting state, ready to be inserted into an ECS world.
#[derive(Debug, Clone)]
pub struct InitialWorld {
    pub roster: TileRoster,
    pub party: PartyPosition,
    pub capital_name: CapitalName,
}

impl InitialWorld {
    pub fn insert_into(self, world: &mut World) {
        world.insert_resource(self.roster);
        world.insert_resource(self.party);
        world.insert_resource(self.capital_name);
    }
}

impl Scenario {
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, ScenarioError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Validate the scenario and build the starting world state.
    pub fn build(&self) -> Result<InitialWorld, ScenarioError> {
        let mut roster = TileRoster::from_tiles(self.tiles.iter().map(TileSpec::to_tile))?;
        let party = match &self.party_start {
            Some(start) => PartyPosition::place(&roster, start.clone())?,
            None => PartyPosition::at_capital(&roster),
        };
        // Nobody stands on unknown ground.
        roster.mark_discovered(party.tile());

        let capital_name = match &self.capital_name {
            Some(name) => CapitalName::new(Some(validate_capital_name(name)?.to_string())),
            None => CapitalName::default(),
        };

        debug!(
            "Scenario '{}' built: {} tiles, {} discovered, party at '{}'",
            self.name,
            roster.len(),
            roster.discovered_count(),
            party.tile()
        );

        Ok(InitialWorld {
            roster,
            party,
            capital_name,
        })
    }

    /// Seven tiles around the capital in a single region, wild tiles hidden.
    pub fn fog_of_war() -> Self {
        Self {
            name: "fog_of_war".to_string(),
            capital_name: None,
            party_start: None,
            tiles: vec![
                TileSpec::capital("capital", "Oleg's Trading Post"),
                TileSpec::wild("east-meadow", "East Meadow", (1, 0), Region::Hub, false),
                TileSpec::wild("ne-ridge", "Northeast Ridge", (1, -1), Region::Hub, false),
                TileSpec::wild("nw-woods", "Northwest Woods", (0, -1), Region::Hub, false),
                TileSpec::wild("west-ford", "West Ford", (-1, 0), Region::Hub, false),
                TileSpec::wild("sw-marsh", "Southwest Marsh", (-1, 1), Region::Hub, false),
                TileSpec::wild("se-hills", "Southeast Hills", (0, 1), Region::Hub, false),
            ],
        }
    }

    /// Seven tiles split across regions, everything already mapped.
    pub fn stolen_lands() -> Self {
        Self {
            name: "stolen_lands".to_string(),
            capital_name: None,
            party_start: None,
            tiles: vec![
                TileSpec::capital("capital", "Capital"),
                TileSpec::wild("tuskwater-e", "Tuskwater Shore", (1, 0), Region::Tuskwater, true),
                TileSpec::wild(
                    "narlmarches-ne",
                    "Narlmarches Edge",
                    (1, -1),
                    Region::Narlmarches,
                    true,
                ),
                TileSpec::wild("greenbelt-nw", "Greenbelt Glade", (0, -1), Region::Greenbelt, true),
                TileSpec::wild("pitax", "Road to Pitax", (-1, 0), Region::Pitax, true),
                TileSpec::wild(
                    "greenbelt-sw",
                    "Greenbelt Thicket",
                    (-1, 1),
                    Region::Greenbelt,
                    true,
                ),
                TileSpec::wild(
                    "hooktongue-se",
                    "Hooktongue Slough",
                    (0, 1),
                    Region::Hooktongue,
                    true,
                ),
            ],
        }
    }
}
