//! Face dispatcher and lifecycle
//!
//! Conforms to the host's face contract: activate on every switch-in,
//! one handler call per delivered event, resign on the way out. The
//! handler owns the per-tick choreography; the session itself never
//! touches the hardware.

use crate::config::GameTuning;
use crate::render::{render, DrawOp};
use crate::rng::RandomSource;
use crate::state::{Cue, FaceEvent, GameSession};
use crate::track::Lane;
use crate::traits::{LedColor, Note, WatchHost};

/// Tick frequency the game asks its host for
pub const TICK_HZ: u8 = 32;

/// Duration of the catch feedback beep
const CATCH_BEEP_MS: u16 = 20;

/// Lifecycle contract a face exposes to the host dispatcher
///
/// Construction stands in for the one-time setup call; with statically
/// sized state there is nothing left that can fail there.
pub trait WatchFace<W: WatchHost> {
    /// Called every time the face becomes visible; resets everything
    fn activate(&mut self, watch: &mut W);

    /// Handle one host event; false asks the host to dismiss the face
    fn on_event(&mut self, event: FaceEvent, watch: &mut W) -> bool;

    /// Called when the face stops being visible
    fn resign(&mut self, watch: &mut W);

    /// Whether the face wants updates while invisible
    fn wants_background_task(&self) -> bool {
        false
    }
}

/// The "Catch the Lines" game face
pub struct GameFace<R: RandomSource> {
    session: GameSession,
    rng: R,
}

impl<R: RandomSource> GameFace<R> {
    /// Create the face with default tuning
    ///
    /// The random source is seeded by the caller, once; see
    /// [`crate::rng::Xorshift32::new`].
    pub fn new(rng: R) -> Self {
        Self::with_tuning(rng, GameTuning::default())
    }

    /// Create the face with explicit tuning
    pub fn with_tuning(rng: R, tuning: GameTuning) -> Self {
        Self {
            session: GameSession::new(tuning),
            rng,
        }
    }

    /// Read-only view of the session, for hosts that want to log it
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// One tick: advance the session, then perform its side effects in
    /// order (catch feedback, frame, cue)
    fn tick<W: WatchHost>(&mut self, watch: &mut W) {
        let effects = self.session.handle_tick(&mut self.rng);

        for &lane in &effects.catches {
            flash_catch(watch, lane);
        }

        // The intro choreography owns the screen for its tick; every
        // other tick redraws the full frame first
        if effects.cue != Some(Cue::Intro) {
            draw_frame(&self.session, watch);
        }

        match effects.cue {
            Some(Cue::Intro) => play_intro(watch),
            Some(Cue::Outro) => play_outro(watch),
            None => {}
        }
    }
}

impl<R: RandomSource, W: WatchHost> WatchFace<W> for GameFace<R> {
    fn activate(&mut self, watch: &mut W) {
        self.session.reset();
        watch.request_tick_frequency(TICK_HZ);
    }

    fn on_event(&mut self, event: FaceEvent, watch: &mut W) -> bool {
        match event {
            FaceEvent::Activate | FaceEvent::Tick => self.tick(watch),
            FaceEvent::PrimaryButtonDown => self.session.handle_primary_press(),
            FaceEvent::ModeButtonUp => {
                watch.request_next_face();
                return false;
            }
            FaceEvent::SecondaryButtonDown | FaceEvent::LowEnergyTick => {}
        }
        true
    }

    fn resign(&mut self, _watch: &mut W) {}
}

/// Replay one frame's draw list onto the display
fn draw_frame<W: WatchHost>(session: &GameSession, watch: &mut W) {
    for op in render(session) {
        match op {
            DrawOp::Clear => watch.clear(),
            DrawOp::Text { col, text } => watch.display_string(&text, col),
            DrawOp::SetPixel { row, col } => watch.set_pixel(row, col),
        }
    }
}

/// Color-coded flash plus a short beep for one caught obstacle
fn flash_catch<W: WatchHost>(watch: &mut W, lane: Lane) {
    let color = match lane {
        Lane::Top => LedColor::Red,
        Lane::Bottom => LedColor::Green,
    };
    watch.set_led(color);
    watch.play_note(Note::A7, CATCH_BEEP_MS);
    watch.set_led(LedColor::Off);
}

/// Title card: three text cards, each held on screen by its note
fn play_intro<W: WatchHost>(watch: &mut W) {
    watch.display_string("     CATCH", 0);
    watch.play_note(Note::C7, 500);
    watch.display_string("     THE  ", 0);
    watch.play_note(Note::D7, 500);
    watch.display_string("     LINES", 0);
    watch.play_note(Note::E7, 800);
}

/// End-of-game jingle, played over the score frame
fn play_outro<W: WatchHost>(watch: &mut W) {
    watch.play_note(Note::G7, 500);
    watch.play_note(Note::E7, 500);
    watch.play_note(Note::B6, 300);
    watch.play_note(Note::C7, 400);
}
