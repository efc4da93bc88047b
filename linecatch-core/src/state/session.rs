//! Game session bookkeeping
//!
//! Owns everything that survives between ticks: the current phase, the
//! per-phase tick counter, score, the player's lane, and both obstacle
//! tracks. The host delivers one event at a time and each handler runs
//! to completion, so the session needs no locking of any kind.

use heapless::Vec;

use super::machine::{Phase, PhaseInput};
use crate::config::GameTuning;
use crate::rng::RandomSource;
use crate::track::{Lane, Lanes, MAX_ARRIVALS};

/// Audio cue fired by a phase transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Cue {
    /// Title card jingle; owns the screen for its tick
    Intro,
    /// End-of-game jingle, played over the score frame
    Outro,
}

/// Synchronous side effects one tick asks the face to perform, in order
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickEffects {
    /// Lanes where an obstacle was caught this tick, feedback due first
    pub catches: Vec<Lane, MAX_ARRIVALS>,
    /// Cue to play once the frame is on screen
    pub cue: Option<Cue>,
}

/// Root game entity, fully reset on every activation
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GameSession {
    phase: Phase,
    /// Ticks since the current phase was entered
    elapsed_ticks: u16,
    score: u16,
    player_lane: Lane,
    /// Ticks between obstacle updates; shrinks as the game ramps, floor 1
    ticks_per_update: u8,
    lanes: Lanes,
    tuning: GameTuning,
}

impl GameSession {
    /// Create a session waiting at the idle prompt
    pub fn new(tuning: GameTuning) -> Self {
        Self {
            phase: Phase::Idle,
            elapsed_ticks: 0,
            score: 0,
            player_lane: Lane::Bottom,
            ticks_per_update: tuning.initial_ticks_per_update.max(1),
            lanes: Lanes::new(),
            tuning,
        }
    }

    /// Return to the idle prompt, discarding any game in progress
    pub fn reset(&mut self) {
        *self = Self::new(self.tuning);
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn elapsed_ticks(&self) -> u16 {
        self.elapsed_ticks
    }

    pub fn score(&self) -> u16 {
        self.score
    }

    pub fn player_lane(&self) -> Lane {
        self.player_lane
    }

    pub fn ticks_per_update(&self) -> u8 {
        self.ticks_per_update
    }

    pub fn lanes(&self) -> &Lanes {
        &self.lanes
    }

    pub fn tuning(&self) -> GameTuning {
        self.tuning
    }

    /// Advance one tick and report the side effects due this tick
    ///
    /// Every phase tolerates ticks; only `Playing` runs the simulation.
    pub fn handle_tick<R: RandomSource>(&mut self, rng: &mut R) -> TickEffects {
        let mut effects = TickEffects::default();

        match self.phase {
            Phase::Idle | Phase::Score => {
                // Drives the prompt blink; wraps harmlessly
                self.elapsed_ticks = self.elapsed_ticks.wrapping_add(1);
            }
            Phase::Playing => self.playing_tick(rng, &mut effects),
            Phase::Intro | Phase::Done => {}
        }

        let clock_expired = self.phase.is_playing()
            && self.elapsed_ticks >= self.tuning.total_play_ticks;
        let next = self.phase.transition(PhaseInput::Tick { clock_expired });
        if next != self.phase {
            match (self.phase, next) {
                (Phase::Intro, Phase::Playing) => {
                    self.start_game();
                    effects.cue = Some(Cue::Intro);
                }
                (Phase::Done, Phase::Score) => effects.cue = Some(Cue::Outro),
                _ => {}
            }
            self.enter(next);
        }

        effects
    }

    /// Handle the primary (alarm) button
    ///
    /// Mid-game it swaps the player's lane; elsewhere it drives the
    /// start/restart edge of the phase machine.
    pub fn handle_primary_press(&mut self) {
        if self.phase.is_playing() {
            self.player_lane = self.player_lane.other();
        } else {
            let next = self.phase.transition(PhaseInput::PrimaryPress);
            if next != self.phase {
                self.enter(next);
            }
        }
    }

    fn playing_tick<R: RandomSource>(&mut self, rng: &mut R, effects: &mut TickEffects) {
        self.elapsed_ticks = self.elapsed_ticks.wrapping_add(1);

        if self.elapsed_ticks % u16::from(self.ticks_per_update) == 0 {
            let outcome =
                self.lanes
                    .update_and_spawn(self.player_lane, self.tuning.spawn_chance, rng);
            for arrival in &outcome.arrivals {
                if arrival.caught {
                    self.score = self.score.saturating_add(1);
                    let _ = effects.catches.push(arrival.lane);
                }
            }
        }

        let ramp = self.tuning.ramp_interval;
        if ramp > 0 && self.elapsed_ticks % ramp == 0 && self.ticks_per_update > 1 {
            self.ticks_per_update -= 1;
        }
    }

    /// Reset the per-game counters for a fresh run
    fn start_game(&mut self) {
        self.score = 0;
        self.player_lane = Lane::Bottom;
        self.ticks_per_update = self.tuning.initial_ticks_per_update.max(1);
        self.lanes.clear();
    }

    /// Enter a phase; the elapsed counter restarts on every entry
    fn enter(&mut self, phase: Phase) {
        self.phase = phase;
        self.elapsed_ticks = 0;
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameTuning::default())
    }
}
