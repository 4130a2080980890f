//! Count-up stopwatch for untimed strength sessions.
//!
//! Unlike the interval engine there are no phases: the stopwatch counts
//! elapsed seconds against a soft target duration.

use serde::{Deserialize, Serialize};

/// Default session target: 45 minutes.
pub const DEFAULT_TARGET_SECS: u32 = 45 * 60;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStopwatch {
    elapsed_secs: u32,
    target_secs: u32,
    is_running: bool,
}

impl SessionStopwatch {
    pub fn new(target_secs: u32) -> Self {
        Self {
            elapsed_secs: 0,
            target_secs: target_secs.max(1),
            is_running: true,
        }
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    pub fn target_secs(&self) -> u32 {
        self.target_secs
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    /// Progress toward the target, capped at 1.0 (sessions may run long).
    pub fn progress(&self) -> f64 {
        (self.elapsed_secs as f64 / self.target_secs as f64).min(1.0)
    }

    /// "MM:SS" display form.
    pub fn formatted(&self) -> String {
        format!("{:02}:{:02}", self.elapsed_secs / 60, self.elapsed_secs % 60)
    }

    /// Advance one elapsed second. No-op while paused.
    pub fn tick(&mut self) {
        if self.is_running {
            self.elapsed_secs += 1;
        }
    }

    pub fn toggle_running(&mut self) {
        self.is_running = !self.is_running;
    }

    pub fn reset(&mut self) {
        self.elapsed_secs = 0;
        self.is_running = false;
    }
}

impl Default for SessionStopwatch {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_up_while_running() {
        let mut sw = SessionStopwatch::default();
        for _ in 0..90 {
            sw.tick();
        }
        assert_eq!(sw.elapsed_secs(), 90);
        assert_eq!(sw.formatted(), "01:30");
    }

    #[test]
    fn pause_stops_counting() {
        let mut sw = SessionStopwatch::default();
        sw.tick();
        sw.toggle_running();
        sw.tick();
        assert_eq!(sw.elapsed_secs(), 1);
    }

    #[test]
    fn progress_caps_at_one() {
        let mut sw = SessionStopwatch::new(10);
        for _ in 0..25 {
            sw.tick();
        }
        assert_eq!(sw.progress(), 1.0);
    }

    #[test]
    fn reset_clears_and_pauses() {
        let mut sw = SessionStopwatch::default();
        sw.tick();
        sw.reset();
        assert_eq!(sw.elapsed_secs(), 0);
        assert!(!sw.is_running());
    }
}
