use bevy::prelude::*;
use serde::Serialize;

use crate::constants::HEX_SIZE;
use crate::map::hex::axial_to_pixel;
use crate::map::{CapitalName, PartyPosition, Region, TileId, TileKind, TileRoster};
use crate::ui::mode::Screen;

/// One tile as the renderer sees it, with the capital name overlay applied
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileView {
    pub id: TileId,
    pub name: String,
    pub q: i32,
    pub r: i32,
    /// Pixel centre for a pointy-top layout of `HEX_SIZE`
    pub center: [f32; 2],
    pub region: Region,
    pub kind: TileKind,
    pub discovered: bool,
    pub has_party: bool,
}

/// Centralized read-only view of the map consumed by screens and renderers
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize)]
pub struct MapSnapshot {
    pub tiles: Vec<TileView>,
    pub party_tile: Option<TileId>,
    pub screen: ScreenView,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScreenView {
    pub tag: &'static str,
    pub tile: Option<TileId>,
}

impl From<&Screen> for ScreenView {
    fn from(screen: &Screen) -> Self {
        Self {
            tag: screen.tag(),
            tile: screen.detail_tile().cloned(),
        }
    }
}

impl MapSnapshot {
    pub fn capture(
        roster: &TileRoster,
        party: &PartyPosition,
        capital_name: &CapitalName,
        screen: &Screen,
    ) -> Self {
        let tiles = roster
            .iter()
            .map(|tile| {
                let name = if tile.is_capital() {
                    capital_name.effective(roster).to_string()
                } else {
                    tile.name.clone()
                };
                let center = axial_to_pixel(tile.axial, HEX_SIZE);
                TileView {
                    id: tile.id.clone(),
                    name,
                    q: tile.axial.x,
                    r: tile.axial.y,
                    center: [center.x, center.y],
                    region: tile.region,
                    kind: tile.kind,
                    discovered: tile.discovered(),
                    has_party: &tile.id == party.tile(),
                }
            })
            .collect();

        Self {
            tiles,
            party_tile: Some(party.tile().clone()),
            screen: screen.into(),
        }
    }

    pub fn tile(&self, id: &TileId) -> Option<&TileView> {
        self.tiles.iter().find(|tile| &tile.id == id)
    }

    pub fn discovered_count(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.discovered).count()
    }

    /// Human-readable one-line status
    pub fn status_text(&self) -> String {
        let location = self
            .party_tile
            .as_ref()
            .and_then(|id| self.tile(id))
            .map(|tile| tile.name.as_str())
            .unwrap_or("nowhere");
        format!(
            "Party at {} - {} of {} tiles discovered - screen: {}",
            location,
            self.discovered_count(),
            self.tiles.len(),
            self.screen.tag
        )
    }
}

/// Refresh the snapshot whenever anything it mirrors has changed
pub fn collect_map_snapshot(
    mut snapshot: ResMut<MapSnapshot>,
    roster: Res<TileRoster>,
    party: Res<PartyPosition>,
    capital_name: Res<CapitalName>,
    screen: Res<State<Screen>>,
) {
    let stale = snapshot.party_tile.is_none()
        || roster.is_changed()
        || party.is_changed()
        || capital_name.is_changed()
        || screen.is_changed();
    if stale {
        *snapshot = MapSnapshot::capture(&roster, &party, &capital_name, screen.get());
    }
}
