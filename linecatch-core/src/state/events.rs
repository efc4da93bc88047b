//! Host events delivered to the face

/// Events the host's face dispatcher can deliver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaceEvent {
    /// Face just became visible; doubles as the first tick
    Activate,
    /// Periodic tick at the requested frequency
    Tick,
    /// Reduced-rate tick while the watch sleeps
    LowEnergyTick,
    /// Primary (alarm) button pressed
    PrimaryButtonDown,
    /// Secondary (light) button pressed
    SecondaryButtonDown,
    /// Mode button released; the player wants the next face
    ModeButtonUp,
}

impl FaceEvent {
    /// Check if this event advances the simulation
    pub fn is_tick(&self) -> bool {
        matches!(self, FaceEvent::Activate | FaceEvent::Tick)
    }

    /// Check if this event came from a button
    pub fn is_button(&self) -> bool {
        matches!(
            self,
            FaceEvent::PrimaryButtonDown
                | FaceEvent::SecondaryButtonDown
                | FaceEvent::ModeButtonUp
        )
    }
}
