//! Render adapter
//!
//! Pure translation from a session snapshot to an ordered list of draw
//! primitives. Idempotent: the same snapshot always yields the same
//! list. The layouts, coordinates, and strings here are fixed for the
//! watch's segment LCD; nothing below them is abstracted further.

use core::fmt::Write;

use heapless::{String, Vec};

use crate::state::{GameSession, Phase};
use crate::track::{Lane, SPAWN_TICKS};

/// Most draw calls one frame can produce
pub const MAX_DRAW_OPS: usize = 32;

/// Longest text one draw call carries (the display has 10 positions)
pub const MAX_TEXT: usize = 10;

/// One primitive display operation
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DrawOp {
    /// Clear every segment
    Clear,
    /// Write text starting at a text position
    Text { col: u8, text: String<MAX_TEXT> },
    /// Light one pixel
    SetPixel { row: u8, col: u8 },
}

/// One frame's draw calls, in order
pub type DrawList = Vec<DrawOp, MAX_DRAW_OPS>;

/// Blink period of the idle prompt, in ticks
const PROMPT_BLINK_TICKS: u16 = 40;

/// Top of the countdown shown while playing
const COUNTER_MAX: u16 = 39;

/// Player marker pixels: a shared pivot plus two pixels on the lane side
const PLAYER_TOP: [(u8, u8); 3] = [(1, 19), (2, 18), (2, 19)];
const PLAYER_BOTTOM: [(u8, u8); 3] = [(1, 19), (0, 18), (0, 19)];

/// Obstacle travel paths, indexed by `SPAWN_TICKS - remaining`
const PATH_TOP: [(u8, u8); SPAWN_TICKS as usize] = [
    (2, 5),
    (1, 4),
    (2, 3),
    (1, 2),
    (2, 10),
    (2, 0),
    (2, 23),
    (2, 22),
    (2, 21),
    (1, 17),
];
const PATH_BOTTOM: [(u8, u8); SPAWN_TICKS as usize] = [
    (1, 6),
    (0, 5),
    (0, 4),
    (0, 2),
    (0, 1),
    (1, 0),
    (0, 23),
    (0, 22),
    (0, 21),
    (0, 20),
];

/// Build the draw list for the current session snapshot
pub fn render(session: &GameSession) -> DrawList {
    let mut ops = DrawList::new();
    match session.phase() {
        Phase::Idle => render_prompt(session, &mut ops),
        // The intro choreography owns the screen; draw nothing
        Phase::Intro => {}
        Phase::Playing => render_playing(session, session.elapsed_ticks(), &mut ops),
        // The final frame holds, countdown pinned at zero
        Phase::Done => render_playing(session, session.tuning().total_play_ticks, &mut ops),
        Phase::Score => render_score(session, &mut ops),
    }
    ops
}

fn render_prompt(session: &GameSession, ops: &mut DrawList) {
    let text = if (session.elapsed_ticks() / PROMPT_BLINK_TICKS) % 2 == 0 {
        "     BUTUN"
    } else {
        "     PUSH "
    };
    push_text(ops, 0, text);
}

fn render_playing(session: &GameSession, elapsed: u16, ops: &mut DrawList) {
    let _ = ops.push(DrawOp::Clear);

    let total = session.tuning().total_play_ticks.max(1);
    let spent = u32::from(elapsed) * u32::from(COUNTER_MAX) / u32::from(total);
    let counter = COUNTER_MAX.saturating_sub(spent as u16);
    let mut text: String<MAX_TEXT> = String::new();
    let _ = write!(text, "  {:2}", counter);
    let _ = ops.push(DrawOp::Text { col: 0, text });

    let marker = match session.player_lane() {
        Lane::Top => PLAYER_TOP,
        Lane::Bottom => PLAYER_BOTTOM,
    };
    for (row, col) in marker {
        let _ = ops.push(DrawOp::SetPixel { row, col });
    }

    for lane in [Lane::Top, Lane::Bottom] {
        let path = match lane {
            Lane::Top => &PATH_TOP,
            Lane::Bottom => &PATH_BOTTOM,
        };
        for obstacle in session.lanes().lane(lane).iter() {
            let step = SPAWN_TICKS.saturating_sub(obstacle.remaining) as usize;
            if let Some(&(row, col)) = path.get(step) {
                let _ = ops.push(DrawOp::SetPixel { row, col });
            }
        }
    }
}

fn render_score(session: &GameSession, ops: &mut DrawList) {
    let _ = ops.push(DrawOp::Clear);
    let mut text: String<MAX_TEXT> = String::new();
    let _ = write!(text, "{:3}", session.score());
    let _ = ops.push(DrawOp::Text { col: 5, text });
}

fn push_text(ops: &mut DrawList, col: u8, text: &str) {
    let mut owned: String<MAX_TEXT> = String::new();
    let _ = owned.push_str(text);
    let _ = ops.push(DrawOp::Text { col, text: owned });
}
