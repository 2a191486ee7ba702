use bevy::prelude::*;
use thiserror::Error;

use crate::constants::CAPITAL_NAME_MAX_LEN;
use crate::map::roster::TileRoster;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RenameError {
    #[error("capital name cannot be empty")]
    Empty,
    #[error("capital name is {len} characters long, the limit is {max}")]
    TooLong { len: usize, max: usize },
}

impl RenameError {
    /// Short reason code for UI feedback
    pub fn code(self) -> &'static str {
        match self {
            RenameError::Empty => "empty",
            RenameError::TooLong { .. } => "too-long",
        }
    }
}

/// Player-chosen display name for the capital.
///
/// Kept apart from the tile's stored name and applied only when the map is
/// projected for display.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct CapitalName(Option<String>);

impl CapitalName {
    pub fn new(name: Option<String>) -> Self {
        Self(name)
    }

    /// Validate and apply a new name. On error nothing changes.
    pub fn rename(&mut self, new_name: &str) -> Result<&str, RenameError> {
        let trimmed = validate_capital_name(new_name)?;
        let stored = self.0.insert(trimmed.to_string());
        Ok(stored.as_str())
    }

    pub fn custom(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// The name to show for the capital tile.
    pub fn effective<'a>(&'a self, roster: &'a TileRoster) -> &'a str {
        self.0.as_deref().unwrap_or(&roster.capital().name)
    }
}

/// Trim `name` and check it against the length rules.
pub fn validate_capital_name(name: &str) -> Result<&str, RenameError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(RenameError::Empty);
    }
    let len = trimmed.chars().count();
    if len > CAPITAL_NAME_MAX_LEN {
        return Err(RenameError::TooLong {
            len,
            max: CAPITAL_NAME_MAX_LEN,
        });
    }
    Ok(trimmed)
}
