//! Stolen Lands - movement and map-state core of a hex exploration game
//!
//! This library exposes the exploration rules for testing and for whatever
//! screens sit on top of them.

use bevy::app::PluginGroup;
#[cfg(feature = "debug")]
use bevy::dev_tools::states::log_transitions;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use crate::commands::CommandPlugin;
use crate::map::{InitialWorld, MapPlugin};
use crate::movement::MovementPlugin;
use crate::ui::NavigationPlugin;
#[cfg(feature = "debug")]
use crate::ui::mode::Screen;

pub mod commands;
pub mod constants;
pub mod map;
pub mod messages;
pub mod movement;
pub mod ui;

/// Plugin group for the exploration core (headless-compatible)
pub struct ExplorationPlugins {
    initial: InitialWorld,
}

impl ExplorationPlugins {
    pub fn new(initial: InitialWorld) -> Self {
        Self { initial }
    }
}

impl PluginGroup for ExplorationPlugins {
    fn build(self) -> bevy::app::PluginGroupBuilder {
        bevy::app::PluginGroupBuilder::start::<Self>()
            .add(MapPlugin::new(self.initial))
            .add(MovementPlugin)
            .add(NavigationPlugin)
            .add(CommandPlugin)
    }
}

/// Headless app driven one `update()` per batch of player input.
///
/// Commands written before an `update()` are fully applied, screen included,
/// by the time it returns.
pub fn app(initial: InitialWorld) -> App {
    let mut app = App::new();

    app.add_plugins((MinimalPlugins, StatesPlugin))
        .add_plugins(ExplorationPlugins::new(initial));

    #[cfg(feature = "debug")]
    app.add_systems(Update, log_transitions::<Screen>);

    app
}

#[cfg(test)]
pub mod test_utils;
