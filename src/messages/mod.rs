pub mod capital;
pub mod commands;
pub mod movement;

pub use capital::{CapitalRenameRejected, CapitalRenamed, RenameCapital};
pub use commands::PlayerCommand;
pub use movement::{MoveRequest, MoveResolved};
