//! Random source for obstacle spawn decisions
//!
//! Casual-play quality only. The modulo bias of `next_bounded` is
//! accepted; nothing here needs statistical rigor.

/// Bounded uniform integer source
pub trait RandomSource {
    /// Return a value in `[0, bound)`. `bound` must be nonzero.
    fn next_bounded(&mut self, bound: u8) -> u8;
}

/// Xorshift generator (13/17/5 variant)
///
/// Seeded once at face construction from whatever entropy the host has;
/// re-seeding from the wall clock on every game start would correlate
/// spawn sequences with start time, so it never happens mid-session.
#[derive(Debug, Clone)]
pub struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    /// Create a generator from a seed
    ///
    /// Xorshift sticks at zero, so a zero seed is replaced with a fixed
    /// nonzero constant.
    pub const fn new(seed: u32) -> Self {
        let state = if seed == 0 { 0x9E37_79B9 } else { seed };
        Self { state }
    }

    fn next(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }
}

impl RandomSource for Xorshift32 {
    fn next_bounded(&mut self, bound: u8) -> u8 {
        (self.next() % u32::from(bound)) as u8
    }
}

/// Replays a scripted roll sequence, cycling when exhausted
///
/// Used by tests to make spawn timing and lane selection reproducible.
#[derive(Debug, Clone)]
pub struct SequenceSource<'a> {
    script: &'a [u8],
    next: usize,
}

impl<'a> SequenceSource<'a> {
    pub const fn new(script: &'a [u8]) -> Self {
        Self { script, next: 0 }
    }
}

impl RandomSource for SequenceSource<'_> {
    fn next_bounded(&mut self, bound: u8) -> u8 {
        if self.script.is_empty() {
            return 0;
        }
        let roll = self.script[self.next % self.script.len()];
        self.next += 1;
        roll % bound
    }
}
