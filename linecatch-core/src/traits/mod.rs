//! Capability traits for the watch host
//!
//! The face talks to the hardware through these narrow contracts. On
//! the real watch the calls are synchronous register writes with no
//! failure signaling, so the methods are infallible; hosts on other
//! targets absorb their own errors.

pub mod display;
pub mod feedback;
pub mod host;

pub use display::SegmentDisplay;
pub use feedback::{Buzzer, IndicatorLed, LedColor, Note};
pub use host::HostControl;

/// Everything the face needs from its host, in one bound
pub trait WatchHost: SegmentDisplay + Buzzer + IndicatorLed + HostControl {}

// Blanket implementation: providing the four capabilities is enough
impl<T: SegmentDisplay + Buzzer + IndicatorLed + HostControl> WatchHost for T {}
