use bevy::prelude::*;

use crate::messages::{CapitalRenameRejected, CapitalRenamed};

// Map-related modules
pub mod capital;
pub mod hex;
pub mod roster;
pub mod scenario;
pub mod tiles;

// Re-exports for convenience
pub use capital::*;
pub use hex::*;
pub use roster::*;
pub use scenario::*;
pub use tiles::*;

/// Plugin that installs the validated starting world and the capital
/// rename reports.
pub struct MapPlugin {
    initial: InitialWorld,
}

impl MapPlugin {
    pub fn new(initial: InitialWorld) -> Self {
        Self { initial }
    }
}

impl Plugin for MapPlugin {
    fn build(&self, app: &mut App) {
        self.initial.clone().insert_into(app.world_mut());

        app.add_message::<CapitalRenamed>()
            .add_message::<CapitalRenameRejected>();
    }
}
