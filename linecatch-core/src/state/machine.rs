//! Phase state machine for the game lifecycle
//!
//! All screen, audio, and score behavior is a function of the current
//! phase and an input.

/// Game lifecycle phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Waiting for the player, prompt blinking
    Idle,
    /// Start requested; the next tick plays the intro cue and begins play
    Intro,
    /// Active gameplay
    Playing,
    /// Play time expired; the final frame holds for one tick
    Done,
    /// Final score shown, holds until restart
    Score,
}

/// Inputs that drive phase transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PhaseInput {
    /// Primary (alarm) button pressed
    PrimaryPress,
    /// Periodic tick; `clock_expired` is set once play time has run out
    Tick { clock_expired: bool },
}

impl Phase {
    /// Check if the gameplay simulation runs in this phase
    pub fn is_playing(&self) -> bool {
        matches!(self, Phase::Playing)
    }

    /// Process an input and return the next phase
    ///
    /// Inputs outside the edge set are ignored, not errors; no phase is
    /// exempt from tick delivery.
    pub fn transition(self, input: PhaseInput) -> Self {
        use Phase::*;
        use PhaseInput::*;

        match (self, input) {
            // Starting a game, first or again
            (Idle, PrimaryPress) => Intro,
            (Score, PrimaryPress) => Intro,

            // Intro is transient; the first tick begins play
            (Intro, Tick { .. }) => Playing,

            // Play runs until the clock expires
            (Playing, Tick { clock_expired: true }) => Done,

            // Done holds the final frame for exactly one tick
            (Done, Tick { .. }) => Score,

            // Default: stay in current phase
            _ => self,
        }
    }
}
