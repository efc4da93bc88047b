//! Game tuning parameters
//!
//! Defaults match the shipped game. Tests shorten games through these,
//! and the emulator can load overrides from a TOML file.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tuning knobs for one game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameTuning {
    /// Total length of the playing phase in ticks
    pub total_play_ticks: u16,
    /// Ticks between obstacle updates at game start (0 is lifted to 1)
    pub initial_ticks_per_update: u8,
    /// Ticks between difficulty steps; 0 disables the ramp
    pub ramp_interval: u16,
    /// Spawn probability per update, out of 100
    pub spawn_chance: u8,
}

impl Default for GameTuning {
    fn default() -> Self {
        Self {
            total_play_ticks: 500,
            initial_ticks_per_update: 5,
            ramp_interval: 100,
            spawn_chance: 50,
        }
    }
}
