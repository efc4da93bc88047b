//! Buzzer and indicator LED capabilities

/// Notes the face's cues use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Note {
    B6,
    C7,
    D7,
    E7,
    G7,
    A7,
}

/// Piezo buzzer
pub trait Buzzer {
    /// Sound a note for the given duration, blocking until it ends
    ///
    /// The block is real: nothing else runs in the face while a note
    /// plays, which is how the cues pace themselves.
    fn play_note(&mut self, note: Note, duration_ms: u16);
}

/// Colors of the bi-color indicator LED; both channels lit make yellow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedColor {
    Off,
    Red,
    Green,
    Yellow,
}

/// Indicator LED above the display
pub trait IndicatorLed {
    /// Switch the LED to a color, or off
    fn set_led(&mut self, color: LedColor);
}
