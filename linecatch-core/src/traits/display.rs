//! Segment display capability

/// Pixel rows the display can address
pub const DISPLAY_ROWS: u8 = 3;

/// Pixel columns the display can address
pub const DISPLAY_COLS: u8 = 24;

/// Character positions on the display
pub const TEXT_POSITIONS: u8 = 10;

/// Segment LCD primitives
///
/// Mirrors the watch library's display calls: a small character area
/// plus individually addressable segments. Text written past the last
/// position is ignored, and the character positions share physical
/// segments with the pixel grid, so `clear` wipes both.
pub trait SegmentDisplay {
    /// Clear every segment
    fn clear(&mut self);

    /// Write text starting at a position (`0..TEXT_POSITIONS`)
    fn display_string(&mut self, text: &str, col: u8);

    /// Light one pixel (`row < DISPLAY_ROWS`, `col < DISPLAY_COLS`)
    fn set_pixel(&mut self, row: u8, col: u8);

    /// Darken one pixel
    fn clear_pixel(&mut self, row: u8, col: u8);
}
