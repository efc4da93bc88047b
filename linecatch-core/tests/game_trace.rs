//! Full-game golden traces through the public face contract
//!
//! A scripted random source makes every spawn deterministic, so a whole
//! game produces a stable sequence of host calls. The landmark ticks
//! are asserted exactly; anything that drifts here changes what the
//! player sees or hears.

use linecatch_core::config::GameTuning;
use linecatch_core::face::{GameFace, WatchFace, TICK_HZ};
use linecatch_core::rng::SequenceSource;
use linecatch_core::state::{FaceEvent, Phase};
use linecatch_core::traits::{Buzzer, HostControl, IndicatorLed, LedColor, Note, SegmentDisplay};

#[derive(Debug, Clone, PartialEq, Eq)]
enum HostCall {
    Clear,
    Text(u8, String),
    Pixel(u8, u8),
    PixelOff(u8, u8),
    Led(LedColor),
    NotePlayed(Note, u16),
    NextFace,
    TickFrequency(u8),
}

#[derive(Default)]
struct RecordingWatch {
    calls: Vec<HostCall>,
}

impl SegmentDisplay for RecordingWatch {
    fn clear(&mut self) {
        self.calls.push(HostCall::Clear);
    }

    fn display_string(&mut self, text: &str, col: u8) {
        self.calls.push(HostCall::Text(col, text.into()));
    }

    fn set_pixel(&mut self, row: u8, col: u8) {
        self.calls.push(HostCall::Pixel(row, col));
    }

    fn clear_pixel(&mut self, row: u8, col: u8) {
        self.calls.push(HostCall::PixelOff(row, col));
    }
}

impl Buzzer for RecordingWatch {
    fn play_note(&mut self, note: Note, duration_ms: u16) {
        self.calls.push(HostCall::NotePlayed(note, duration_ms));
    }
}

impl IndicatorLed for RecordingWatch {
    fn set_led(&mut self, color: LedColor) {
        self.calls.push(HostCall::Led(color));
    }
}

impl HostControl for RecordingWatch {
    fn request_next_face(&mut self) {
        self.calls.push(HostCall::NextFace);
    }

    fn request_tick_frequency(&mut self, hz: u8) {
        self.calls.push(HostCall::TickFrequency(hz));
    }
}

/// A short game: updates every second tick, no difficulty ramp
fn trace_tuning() -> GameTuning {
    GameTuning {
        total_play_ticks: 24,
        initial_ticks_per_update: 2,
        ramp_interval: 100,
        spawn_chance: 50,
    }
}

/// One bottom-lane spawn on the first update, then quiet for the rest
/// of the game's twelve updates
const TRACE_SCRIPT: [u8; 12] = [1, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99];

fn text(col: u8, s: &str) -> HostCall {
    HostCall::Text(col, s.into())
}

fn deliver(
    face: &mut GameFace<SequenceSource<'static>>,
    watch: &mut RecordingWatch,
    event: FaceEvent,
) -> Vec<HostCall> {
    face.on_event(event, watch);
    watch.calls.drain(..).collect()
}

fn bottom_marker() -> Vec<HostCall> {
    vec![
        HostCall::Pixel(1, 19),
        HostCall::Pixel(0, 18),
        HostCall::Pixel(0, 19),
    ]
}

fn playing_frame(countdown: &str, extra_pixels: &[(u8, u8)]) -> Vec<HostCall> {
    let mut frame = vec![HostCall::Clear, text(0, countdown)];
    frame.extend(bottom_marker());
    for &(row, col) in extra_pixels {
        frame.push(HostCall::Pixel(row, col));
    }
    frame
}

#[test]
fn test_full_game_host_call_trace() {
    let mut face = GameFace::with_tuning(SequenceSource::new(&TRACE_SCRIPT), trace_tuning());
    let mut watch = RecordingWatch::default();

    face.activate(&mut watch);
    assert_eq!(
        watch.calls.drain(..).collect::<Vec<_>>(),
        [HostCall::TickFrequency(TICK_HZ)]
    );

    // The activation event doubles as the first idle tick
    let calls = deliver(&mut face, &mut watch, FaceEvent::Activate);
    assert_eq!(calls, [text(0, "     BUTUN")]);

    // The prompt flips after forty idle ticks
    for _ in 0..38 {
        let calls = deliver(&mut face, &mut watch, FaceEvent::Tick);
        assert_eq!(calls, [text(0, "     BUTUN")]);
    }
    let calls = deliver(&mut face, &mut watch, FaceEvent::Tick);
    assert_eq!(calls, [text(0, "     PUSH ")]);

    // Start: the press is silent, the next tick is the title card
    let calls = deliver(&mut face, &mut watch, FaceEvent::PrimaryButtonDown);
    assert!(calls.is_empty());
    let calls = deliver(&mut face, &mut watch, FaceEvent::Tick);
    assert_eq!(
        calls,
        [
            text(0, "     CATCH"),
            HostCall::NotePlayed(Note::C7, 500),
            text(0, "     THE  "),
            HostCall::NotePlayed(Note::D7, 500),
            text(0, "     LINES"),
            HostCall::NotePlayed(Note::E7, 800),
        ]
    );
    assert_eq!(face.session().phase(), Phase::Playing);

    // Tick 1: countdown starts, player waits at the bottom, no spawns yet
    let calls = deliver(&mut face, &mut watch, FaceEvent::Tick);
    assert_eq!(calls, playing_frame("  38", &[]));

    // Tick 2: the scripted roll spawns into the bottom lane
    let calls = deliver(&mut face, &mut watch, FaceEvent::Tick);
    assert_eq!(calls, playing_frame("  36", &[(1, 6)]));

    // Ticks 3..=10: the obstacle walks its path on every update
    for _ in 3..=10 {
        deliver(&mut face, &mut watch, FaceEvent::Tick);
    }

    // Toggling twice between ticks puts the player back where they were
    deliver(&mut face, &mut watch, FaceEvent::PrimaryButtonDown);
    deliver(&mut face, &mut watch, FaceEvent::PrimaryButtonDown);
    let calls = deliver(&mut face, &mut watch, FaceEvent::Tick);
    assert_eq!(calls, playing_frame("  22", &[(0, 1)]));

    // Ticks 12..=21: the obstacle keeps closing in
    for _ in 12..=21 {
        deliver(&mut face, &mut watch, FaceEvent::Tick);
    }

    // Tick 22: the obstacle arrives in the player's lane. Feedback
    // fires before the frame is drawn, and the lane is clear again
    let calls = deliver(&mut face, &mut watch, FaceEvent::Tick);
    let mut expected = vec![
        HostCall::Led(LedColor::Green),
        HostCall::NotePlayed(Note::A7, 20),
        HostCall::Led(LedColor::Off),
    ];
    expected.extend(playing_frame("   4", &[]));
    assert_eq!(calls, expected);
    assert_eq!(face.session().score(), 1);

    // Tick 23 still plays; tick 24 expires the clock and holds the
    // final frame with the countdown pinned at zero
    let calls = deliver(&mut face, &mut watch, FaceEvent::Tick);
    assert_eq!(calls, playing_frame("   2", &[]));
    let calls = deliver(&mut face, &mut watch, FaceEvent::Tick);
    assert_eq!(calls, playing_frame("   0", &[]));
    assert_eq!(face.session().phase(), Phase::Done);

    // The next tick shows the score and plays the outro over it
    let calls = deliver(&mut face, &mut watch, FaceEvent::Tick);
    assert_eq!(
        calls,
        [
            HostCall::Clear,
            text(5, "  1"),
            HostCall::NotePlayed(Note::G7, 500),
            HostCall::NotePlayed(Note::E7, 500),
            HostCall::NotePlayed(Note::B6, 300),
            HostCall::NotePlayed(Note::C7, 400),
        ]
    );
    assert_eq!(face.session().phase(), Phase::Score);

    // The score screen holds and redraws on every tick
    let calls = deliver(&mut face, &mut watch, FaceEvent::Tick);
    assert_eq!(calls, [HostCall::Clear, text(5, "  1")]);

    // Pressing again goes straight back into a fresh game
    deliver(&mut face, &mut watch, FaceEvent::PrimaryButtonDown);
    assert_eq!(face.session().phase(), Phase::Intro);
    deliver(&mut face, &mut watch, FaceEvent::Tick);
    assert_eq!(face.session().phase(), Phase::Playing);
    assert_eq!(face.session().score(), 0);
}

#[test]
fn test_identical_scripts_replay_identically() {
    let run = || {
        let mut face = GameFace::with_tuning(SequenceSource::new(&TRACE_SCRIPT), trace_tuning());
        let mut watch = RecordingWatch::default();
        face.activate(&mut watch);
        face.on_event(FaceEvent::Activate, &mut watch);
        face.on_event(FaceEvent::PrimaryButtonDown, &mut watch);
        for _ in 0..30 {
            face.on_event(FaceEvent::Tick, &mut watch);
        }
        watch.calls
    };

    assert_eq!(run(), run());
}

#[test]
fn test_mode_button_exits_mid_game() {
    let mut face = GameFace::with_tuning(SequenceSource::new(&TRACE_SCRIPT), trace_tuning());
    let mut watch = RecordingWatch::default();

    face.activate(&mut watch);
    face.on_event(FaceEvent::Activate, &mut watch);
    face.on_event(FaceEvent::PrimaryButtonDown, &mut watch);
    for _ in 0..5 {
        face.on_event(FaceEvent::Tick, &mut watch);
    }
    watch.calls.clear();

    let keep = face.on_event(FaceEvent::ModeButtonUp, &mut watch);
    assert!(!keep);
    assert_eq!(watch.calls, [HostCall::NextFace]);

    face.resign(&mut watch);
    assert_eq!(watch.calls, [HostCall::NextFace]);
}
