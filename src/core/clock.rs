//! The elapsed-time clock.
//!
//! The clock is a plain tick counter in 0.1-second units plus a running
//! flag. It is advanced by a periodic external tick (the session's event
//! loop); stopping and starting toggle the flag and never cancel anything.
//! All tick and gesture handling must go through one logical thread — the
//! engine assumes a single writer throughout.

use serde::{Deserialize, Serialize};

/// Tick period the external driver is expected to use, in milliseconds.
pub const TICK_MILLIS: u64 = 100;

/// Ticks per second (the file format stores 0.1 s units).
pub const TICKS_PER_SECOND: i64 = 10;

/// Elapsed-time clock in 0.1 s ticks.
///
/// ```
/// use amaze::core::GameClock;
///
/// let mut clock = GameClock::new();
/// clock.tick(); // not running yet: ignored
/// assert_eq!(clock.ticks(), 0);
///
/// clock.start();
/// clock.tick();
/// assert_eq!(clock.ticks(), 1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameClock {
    ticks: i64,
    /// The tick count the clock rewinds to on [`reset`](Self::reset) —
    /// zero for a new game, the loaded elapsed time for a restored one.
    initial: i64,
    running: bool,
}

impl GameClock {
    /// Create a stopped clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Elapsed ticks (0.1 s units).
    #[must_use]
    pub const fn ticks(&self) -> i64 {
        self.ticks
    }

    /// Whether ticks are currently being counted.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Advance one tick if running; a no-op otherwise.
    pub fn tick(&mut self) {
        if self.running {
            self.ticks += 1;
        }
    }

    /// Begin counting ticks.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Stop counting ticks. Pending external ticks become no-ops.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Rewind to the initial tick count and stop.
    pub fn reset(&mut self) {
        self.ticks = self.initial;
        self.running = false;
    }

    /// Restore a saved tick count without starting the clock.
    ///
    /// Also records it as the initial time [`reset`](Self::reset) rewinds
    /// to.
    pub fn set_ticks(&mut self, ticks: i64) {
        self.ticks = ticks;
        self.initial = ticks;
    }

    /// Render the elapsed time as zero-padded `hh:mm:ss`.
    #[must_use]
    pub fn format(&self) -> String {
        let seconds_total = self.ticks / TICKS_PER_SECOND;
        let hours = seconds_total / 3600;
        let minutes = (seconds_total / 60) % 60;
        let seconds = seconds_total % 60;
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_only_while_running() {
        let mut clock = GameClock::new();
        clock.tick();
        assert_eq!(clock.ticks(), 0);
        clock.start();
        clock.tick();
        clock.tick();
        assert_eq!(clock.ticks(), 2);
        clock.stop();
        clock.tick();
        assert_eq!(clock.ticks(), 2);
    }

    #[test]
    fn test_reset_rewinds_to_zero_for_fresh_clock() {
        let mut clock = GameClock::new();
        clock.start();
        for _ in 0..25 {
            clock.tick();
        }
        clock.reset();
        assert_eq!(clock.ticks(), 0);
        assert!(!clock.is_running());
    }

    #[test]
    fn test_reset_rewinds_to_loaded_time() {
        let mut clock = GameClock::new();
        clock.set_ticks(300);
        clock.start();
        for _ in 0..40 {
            clock.tick();
        }
        clock.reset();
        assert_eq!(clock.ticks(), 300);
    }

    #[test]
    fn test_format_padding() {
        let mut clock = GameClock::new();
        assert_eq!(clock.format(), "00:00:00");

        // 1 h 2 min 3 s = 3723 s = 37230 ticks.
        clock.set_ticks(37230);
        assert_eq!(clock.format(), "01:02:03");

        // Sub-second ticks truncate.
        clock.set_ticks(9);
        assert_eq!(clock.format(), "00:00:00");
        clock.set_ticks(10);
        assert_eq!(clock.format(), "00:00:01");
    }

    #[test]
    fn test_set_ticks_does_not_start() {
        let mut clock = GameClock::new();
        clock.set_ticks(500);
        assert!(!clock.is_running());
        assert_eq!(clock.ticks(), 500);
    }
}
