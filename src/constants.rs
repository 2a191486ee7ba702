//! Game constants and configuration values
//!
//! This module centralizes all magic numbers and configuration values used throughout the game.

// ============================================================================
// MAP CONSTANTS
// ============================================================================

/// Circumradius of a rendered hex (pixels)
pub const HEX_SIZE: f32 = 48.0;

/// Scenario loaded by the terminal driver when no path is given
pub const DEFAULT_SCENARIO_PATH: &str = "assets/scenarios/stolen_lands.json";

// ============================================================================
// CAPITAL CONSTANTS
// ============================================================================

/// Maximum length of a player-chosen capital name, counted in characters
pub const CAPITAL_NAME_MAX_LEN: usize = 30;

// ============================================================================
// JOURNEY LOG
// ============================================================================

/// Number of resolved moves kept in the journey log
pub const JOURNEY_LOG_CAPACITY: usize = 64;
