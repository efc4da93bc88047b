//! Terminal host for the game face
//!
//! Stands the watch hardware up on a character terminal: the segment
//! display becomes a row of text cells plus a pixel grid, the buzzer
//! becomes a status line and a real blocking delay, and key presses
//! become button events. Useful for playing the game and for watching
//! a tuning change at full speed without flashing a board.

use std::io::{self, stdout, Write};
use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use crossterm::event::{self, Event, KeyCode};
use crossterm::style::{self, Color};
use crossterm::{cursor, execute, queue, terminal};

use linecatch_core::config::GameTuning;
use linecatch_core::face::{GameFace, WatchFace, TICK_HZ};
use linecatch_core::rng::Xorshift32;
use linecatch_core::state::FaceEvent;
use linecatch_core::traits::display::{DISPLAY_COLS, DISPLAY_ROWS, TEXT_POSITIONS};
use linecatch_core::traits::{Buzzer, HostControl, IndicatorLed, LedColor, Note, SegmentDisplay};

// Fixed panel layout, in terminal cells
const LABEL_COL: u16 = 2;
const PANEL_COL: u16 = 10;
const TEXT_ROW: u16 = 2;
const GRID_ROW: u16 = 4;
const STATUS_ROW: u16 = 8;
const HELP_ROW: u16 = 10;

/// Watch hardware emulated on the terminal
struct TermWatch {
    out: io::Stdout,
    text: [char; TEXT_POSITIONS as usize],
    pixels: [[bool; DISPLAY_COLS as usize]; DISPLAY_ROWS as usize],
    led: LedColor,
    last_note: Option<(Note, u16)>,
    tick_hz: u8,
    next_face: bool,
}

impl TermWatch {
    fn new() -> Self {
        Self {
            out: stdout(),
            text: [' '; TEXT_POSITIONS as usize],
            pixels: [[false; DISPLAY_COLS as usize]; DISPLAY_ROWS as usize],
            led: LedColor::Off,
            last_note: None,
            tick_hz: TICK_HZ,
            next_face: false,
        }
    }

    /// Draw the static labels once, then the first panel state
    fn paint_chrome(&mut self) -> io::Result<()> {
        queue!(self.out, terminal::Clear(terminal::ClearType::All))?;
        queue!(
            self.out,
            cursor::MoveTo(LABEL_COL, 0),
            style::Print("catch the lines")
        )?;
        queue!(
            self.out,
            cursor::MoveTo(LABEL_COL, TEXT_ROW),
            style::Print("text")
        )?;
        queue!(
            self.out,
            cursor::MoveTo(LABEL_COL, GRID_ROW + 1),
            style::Print("grid")
        )?;
        queue!(
            self.out,
            cursor::MoveTo(LABEL_COL, STATUS_ROW),
            style::Print("led")
        )?;
        queue!(
            self.out,
            cursor::MoveTo(PANEL_COL + 4, STATUS_ROW),
            style::Print("buzzer")
        )?;
        queue!(
            self.out,
            cursor::MoveTo(LABEL_COL, HELP_ROW),
            style::Print("a/space lane   m next face   q quit")
        )?;
        self.repaint()
    }

    /// Redraw every dynamic cell of the panel
    ///
    /// The capability calls below have no error channel, so they drop
    /// paint failures at the call site instead of propagating them.
    fn repaint(&mut self) -> io::Result<()> {
        queue!(
            self.out,
            cursor::MoveTo(PANEL_COL, TEXT_ROW),
            style::Print('[')
        )?;
        for ch in self.text {
            queue!(self.out, style::Print(ch))?;
        }
        queue!(self.out, style::Print(']'))?;

        // Pixel row 0 is the bottom lane on the watch, so it renders last
        for row in 0..DISPLAY_ROWS {
            let line = GRID_ROW + u16::from(DISPLAY_ROWS - 1 - row);
            queue!(self.out, cursor::MoveTo(PANEL_COL, line))?;
            for col in 0..DISPLAY_COLS {
                let lit = self.pixels[usize::from(row)][usize::from(col)];
                queue!(self.out, style::Print(if lit { '█' } else { '·' }))?;
            }
        }

        queue!(
            self.out,
            cursor::MoveTo(PANEL_COL, STATUS_ROW),
            style::SetForegroundColor(led_color(self.led)),
            style::Print('●'),
            style::ResetColor
        )?;

        queue!(self.out, cursor::MoveTo(PANEL_COL + 11, STATUS_ROW))?;
        match self.last_note {
            Some((note, ms)) => {
                let status = format!("{:?} {} ms", note, ms);
                queue!(self.out, style::Print(format!("{:<10}", status)))?;
            }
            None => queue!(self.out, style::Print("quiet     "))?,
        }

        self.out.flush()
    }
}

impl SegmentDisplay for TermWatch {
    fn clear(&mut self) {
        self.text = [' '; TEXT_POSITIONS as usize];
        self.pixels = [[false; DISPLAY_COLS as usize]; DISPLAY_ROWS as usize];
        let _ = self.repaint();
    }

    fn display_string(&mut self, text: &str, col: u8) {
        let mut pos = usize::from(col);
        for ch in text.chars() {
            if pos >= self.text.len() {
                break;
            }
            self.text[pos] = ch;
            pos += 1;
        }
        let _ = self.repaint();
    }

    fn set_pixel(&mut self, row: u8, col: u8) {
        if row < DISPLAY_ROWS && col < DISPLAY_COLS {
            self.pixels[usize::from(row)][usize::from(col)] = true;
            let _ = self.repaint();
        }
    }

    fn clear_pixel(&mut self, row: u8, col: u8) {
        if row < DISPLAY_ROWS && col < DISPLAY_COLS {
            self.pixels[usize::from(row)][usize::from(col)] = false;
            let _ = self.repaint();
        }
    }
}

impl Buzzer for TermWatch {
    fn play_note(&mut self, note: Note, duration_ms: u16) {
        self.last_note = Some((note, duration_ms));
        // Repaint before the delay so the text under a cue is visible
        // while the note holds
        let _ = self.repaint();
        thread::sleep(Duration::from_millis(u64::from(duration_ms)));
    }
}

impl IndicatorLed for TermWatch {
    fn set_led(&mut self, color: LedColor) {
        self.led = color;
        let _ = self.repaint();
    }
}

impl HostControl for TermWatch {
    fn request_next_face(&mut self) {
        self.next_face = true;
    }

    fn request_tick_frequency(&mut self, hz: u8) {
        self.tick_hz = hz;
    }
}

fn led_color(led: LedColor) -> Color {
    match led {
        LedColor::Off => Color::DarkGrey,
        LedColor::Red => Color::Red,
        LedColor::Green => Color::Green,
        LedColor::Yellow => Color::Yellow,
    }
}

/// Deliver one event and report whether the face keeps the screen
fn deliver(face: &mut GameFace<Xorshift32>, watch: &mut TermWatch, event: FaceEvent) -> bool {
    face.on_event(event, watch) && !watch.next_face
}

fn run(face: &mut GameFace<Xorshift32>) -> io::Result<()> {
    let mut watch = TermWatch::new();
    watch.paint_chrome()?;

    face.activate(&mut watch);

    // Activation doubles as the first tick, like the firmware dispatcher
    if deliver(face, &mut watch, FaceEvent::Activate) {
        'ticks: loop {
            let tick_start = Instant::now();
            let tick_len = Duration::from_millis(1000 / u64::from(watch.tick_hz.max(1)));

            while event::poll(Duration::ZERO)? {
                if let Event::Key(key) = event::read()? {
                    let event = match key.code {
                        KeyCode::Char('a') | KeyCode::Char(' ') => FaceEvent::PrimaryButtonDown,
                        KeyCode::Char('l') => FaceEvent::SecondaryButtonDown,
                        KeyCode::Char('m') => FaceEvent::ModeButtonUp,
                        KeyCode::Char('q') | KeyCode::Esc => break 'ticks,
                        _ => continue,
                    };
                    if !deliver(face, &mut watch, event) {
                        break 'ticks;
                    }
                }
            }

            if !deliver(face, &mut watch, FaceEvent::Tick) {
                break 'ticks;
            }

            let elapsed = tick_start.elapsed();
            if elapsed < tick_len {
                thread::sleep(tick_len - elapsed);
            }
        }
    }

    face.resign(&mut watch);
    Ok(())
}

fn load_tuning(path: &str) -> io::Result<GameTuning> {
    let raw = std::fs::read_to_string(path)?;
    toml::from_str(&raw).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let tuning = match args.get(1).map(String::as_str) {
        Some("--help") | Some("-h") => {
            println!("linecatch-emu - terminal host for the watch game face\n");
            println!("Usage: linecatch-emu [tuning.toml]\n");
            println!("Keys:");
            println!("  a, space   switch lanes");
            println!("  l          light button (this face ignores it)");
            println!("  m          hand the screen back to the watch");
            println!("  q, esc     quit the emulator\n");
            println!("The optional TOML file sets total_play_ticks,");
            println!("initial_ticks_per_update, ramp_interval and spawn_chance.");
            return Ok(());
        }
        Some(path) => load_tuning(path)?,
        None => GameTuning::default(),
    };

    // Sub-second clock bits are as good a seed as a watch gets; zero
    // is fine, the generator lifts it
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.subsec_nanos())
        .unwrap_or(0);
    let mut face = GameFace::with_tuning(Xorshift32::new(seed), tuning);

    terminal::enable_raw_mode()?;
    execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

    let result = run(&mut face);

    execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;
    terminal::disable_raw_mode()?;

    result
}
