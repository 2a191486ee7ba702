use bevy::prelude::*;

use crate::map::RenameError;

/// Payload of `PlayerCommand::RenameCapital`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameCapital {
    pub name: String,
}

/// Message sent after the capital's display name changed.
#[derive(Message, Debug, Clone)]
pub struct CapitalRenamed {
    pub name: String,
}

#[derive(Message, Debug, Clone, Copy)]
pub struct CapitalRenameRejected {
    pub reason: RenameError,
}
