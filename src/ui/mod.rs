pub mod mode;
pub mod state;

use bevy::prelude::*;

pub use mode::Screen;
pub use state::MapSnapshot;

/// Owns the `Screen` state and the snapshot handed to the screens.
///
/// Screen changes are queued by `CommandPlugin`; the snapshot is rebuilt in
/// `PostUpdate`, after that frame's `StateTransition` has applied them.
pub struct NavigationPlugin;

impl Plugin for NavigationPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<Screen>()
            .init_resource::<MapSnapshot>()
            .add_systems(PostUpdate, state::collect_map_snapshot);
    }
}
