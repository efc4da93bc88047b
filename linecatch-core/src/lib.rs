//! Board-agnostic logic for the "Catch the Lines" watch face
//!
//! This crate contains the whole game face without any hardware
//! dependencies:
//!
//! - Capability traits for the watch host (display, buzzer, LED, lifecycle)
//! - Phase state machine for the game lifecycle
//! - Obstacle track simulation (spawn, decay, catch resolution)
//! - Render adapter producing primitive draw calls
//! - Event dispatcher conforming to the host's face contract
//!
//! The face is tick-driven: the host delivers discrete events one at a
//! time and the handlers return before the next event arrives. Nothing
//! here blocks except the buzzer cues, which are blocking by contract.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod face;
pub mod render;
pub mod rng;
pub mod state;
pub mod track;
pub mod traits;
