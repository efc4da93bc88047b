//! Game lifecycle state
//!
//! The phase machine is explicit, finite, and deterministic; the
//! session wraps it with the counters, the obstacle lanes, and the
//! side-effect reporting one tick needs.

pub mod events;
pub mod machine;
pub mod session;

pub use events::FaceEvent;
pub use machine::{Phase, PhaseInput};
pub use session::{Cue, GameSession, TickEffects};
