//! Interval timer engine.
//!
//! The engine is a tick-driven state machine. It owns no clock and no
//! thread - the caller invokes `tick()` once per elapsed second while the
//! timer is running.
//!
//! ## Phase Transitions
//!
//! ```text
//! Ready -> Work -> (Rest -> Work)* -> Complete
//! ```
//!
//! `Ready` is a fixed 3-second countdown before the first round;
//! `Complete` is terminal.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::config::IntervalConfig;
use crate::events::Event;

/// Countdown before the first work round.
pub const READY_COUNTDOWN_SECS: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerPhase {
    Ready,
    Work,
    Rest,
    Complete,
}

/// Core interval engine.
///
/// State is serializable so the CLI can persist it between invocations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntervalEngine {
    config: IntervalConfig,
    phase: TimerPhase,
    /// 1-based; never exceeds `config.rounds()` and never decreases.
    current_round: u32,
    seconds_remaining: u32,
    is_running: bool,
}

impl IntervalEngine {
    /// Start a new interval workout: ready countdown, round 1, running.
    pub fn new(config: IntervalConfig) -> Self {
        Self {
            config,
            phase: TimerPhase::Ready,
            current_round: 1,
            seconds_remaining: READY_COUNTDOWN_SECS,
            is_running: true,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn config(&self) -> &IntervalConfig {
        &self.config
    }

    pub fn phase(&self) -> TimerPhase {
        self.phase
    }

    pub fn current_round(&self) -> u32 {
        self.current_round
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    /// Overall completion in `[0.0, 1.0]`.
    ///
    /// The ready countdown contributes nothing; a completed timer is
    /// exactly 1.0. Clamped for display safety.
    pub fn progress(&self) -> f64 {
        if self.phase == TimerPhase::Complete {
            return 1.0;
        }
        let work = self.config.work_secs();
        let rest = self.config.rest_secs();
        let completed_rounds = (self.current_round - 1) * (work + rest);
        let in_phase = match self.phase {
            TimerPhase::Work => work - self.seconds_remaining,
            TimerPhase::Rest => work + (rest - self.seconds_remaining),
            TimerPhase::Ready | TimerPhase::Complete => 0,
        };
        let elapsed = (completed_rounds + in_phase) as f64;
        (elapsed / self.config.total_secs() as f64).clamp(0.0, 1.0)
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::Snapshot {
            phase: self.phase,
            round: self.current_round,
            seconds_remaining: self.seconds_remaining,
            is_running: self.is_running,
            progress: self.progress(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Advance the running timer by one elapsed second.
    ///
    /// Returns an event when a phase boundary is crossed (the caller
    /// fires the haptic signal on it). No-op while paused or complete.
    pub fn tick(&mut self) -> Option<Event> {
        if !self.is_running {
            return None;
        }
        self.seconds_remaining = self.seconds_remaining.saturating_sub(1);
        if self.seconds_remaining > 0 {
            return None;
        }
        let mut event = self.advance_phase();
        // A zero-length rest is still a discrete transition (the round
        // increment happens in Rest -> Work) but consumes no tick.
        if self.phase == TimerPhase::Rest && self.seconds_remaining == 0 {
            event = self.advance_phase();
        }
        event
    }

    /// Pause or resume. No-op once complete.
    pub fn toggle_running(&mut self) {
        if self.phase == TimerPhase::Complete {
            return;
        }
        self.is_running = !self.is_running;
    }

    /// Return to the initial ready countdown without changing the config.
    pub fn reset(&mut self) {
        self.phase = TimerPhase::Ready;
        self.current_round = 1;
        self.seconds_remaining = READY_COUNTDOWN_SECS;
        self.is_running = true;
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn advance_phase(&mut self) -> Option<Event> {
        match self.phase {
            TimerPhase::Ready => {
                self.phase = TimerPhase::Work;
                self.seconds_remaining = self.config.work_secs();
                Some(Event::PhaseStarted {
                    phase: TimerPhase::Work,
                    round: self.current_round,
                    seconds: self.seconds_remaining,
                    at: Utc::now(),
                })
            }
            TimerPhase::Work => {
                if self.current_round >= self.config.rounds() {
                    self.phase = TimerPhase::Complete;
                    self.seconds_remaining = 0;
                    self.is_running = false;
                    Some(Event::IntervalCompleted {
                        rounds: self.config.rounds(),
                        at: Utc::now(),
                    })
                } else {
                    self.phase = TimerPhase::Rest;
                    self.seconds_remaining = self.config.rest_secs();
                    Some(Event::PhaseStarted {
                        phase: TimerPhase::Rest,
                        round: self.current_round,
                        seconds: self.seconds_remaining,
                        at: Utc::now(),
                    })
                }
            }
            TimerPhase::Rest => {
                self.current_round += 1;
                self.phase = TimerPhase::Work;
                self.seconds_remaining = self.config.work_secs();
                Some(Event::PhaseStarted {
                    phase: TimerPhase::Work,
                    round: self.current_round,
                    seconds: self.seconds_remaining,
                    at: Utc::now(),
                })
            }
            // Terminal: no outgoing transition.
            TimerPhase::Complete => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn engine(rounds: u32, work: u32, rest: u32) -> IntervalEngine {
        IntervalEngine::new(IntervalConfig::new(rounds, work, rest).unwrap())
    }

    /// Number of ticks that drives any config to completion.
    fn ticks_to_complete(rounds: u32, work: u32, rest: u32) -> u32 {
        rounds * work + (rounds - 1) * rest + READY_COUNTDOWN_SECS
    }

    #[test]
    fn starts_in_ready_countdown() {
        let e = engine(3, 40, 20);
        assert_eq!(e.phase(), TimerPhase::Ready);
        assert_eq!(e.current_round(), 1);
        assert_eq!(e.seconds_remaining(), READY_COUNTDOWN_SECS);
        assert!(e.is_running());
    }

    #[test]
    fn ready_countdown_enters_work() {
        let mut e = engine(3, 40, 20);
        assert!(e.tick().is_none());
        assert!(e.tick().is_none());
        let event = e.tick().expect("third tick crosses into work");
        assert!(matches!(
            event,
            Event::PhaseStarted {
                phase: TimerPhase::Work,
                round: 1,
                seconds: 40,
                ..
            }
        ));
        assert_eq!(e.phase(), TimerPhase::Work);
    }

    #[test]
    fn example_session_completes_in_163_ticks() {
        // 3 rounds x 40s work / 20s rest: 3 + 40 + 20 + 40 + 20 + 40.
        let mut e = engine(3, 40, 20);
        let mut phases = vec![e.phase()];
        for _ in 0..163 {
            if e.tick().is_some() {
                phases.push(e.phase());
            }
        }
        assert_eq!(
            phases,
            vec![
                TimerPhase::Ready,
                TimerPhase::Work,
                TimerPhase::Rest,
                TimerPhase::Work,
                TimerPhase::Rest,
                TimerPhase::Work,
                TimerPhase::Complete,
            ]
        );
        assert_eq!(e.current_round(), 3);
        assert!(!e.is_running());
    }

    #[test]
    fn single_round_skips_rest() {
        let mut e = engine(1, 10, 20);
        let mut phases = vec![e.phase()];
        for _ in 0..ticks_to_complete(1, 10, 20) {
            if e.tick().is_some() {
                phases.push(e.phase());
            }
        }
        assert_eq!(
            phases,
            vec![TimerPhase::Ready, TimerPhase::Work, TimerPhase::Complete]
        );
    }

    #[test]
    fn zero_rest_keeps_round_increment_without_extra_ticks() {
        let mut e = engine(2, 5, 0);
        for _ in 0..ticks_to_complete(2, 5, 0) {
            e.tick();
        }
        assert_eq!(e.phase(), TimerPhase::Complete);
        assert_eq!(e.current_round(), 2);
    }

    #[test]
    fn progress_is_monotonic_and_ends_at_one() {
        let mut e = engine(3, 40, 20);
        let mut last = e.progress();
        for _ in 0..163 {
            e.tick();
            let p = e.progress();
            assert!(p >= last, "progress regressed: {p} < {last}");
            last = p;
        }
        assert_eq!(e.progress(), 1.0);
    }

    #[test]
    fn round_never_exceeds_config() {
        let mut e = engine(4, 7, 3);
        for _ in 0..ticks_to_complete(4, 7, 3) + 50 {
            e.tick();
            assert!(e.current_round() <= 4);
        }
    }

    #[test]
    fn toggle_pauses_and_resumes() {
        let mut e = engine(3, 40, 20);
        e.toggle_running();
        assert!(!e.is_running());
        let before = e.seconds_remaining();
        assert!(e.tick().is_none());
        assert_eq!(e.seconds_remaining(), before);
        e.toggle_running();
        assert!(e.is_running());
    }

    #[test]
    fn toggle_is_noop_when_complete() {
        let mut e = engine(1, 1, 0);
        for _ in 0..ticks_to_complete(1, 1, 0) {
            e.tick();
        }
        assert_eq!(e.phase(), TimerPhase::Complete);
        e.toggle_running();
        assert!(!e.is_running());
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut e = engine(3, 40, 20);
        for _ in 0..50 {
            e.tick();
        }
        e.reset();
        assert_eq!(e.phase(), TimerPhase::Ready);
        assert_eq!(e.current_round(), 1);
        assert_eq!(e.seconds_remaining(), READY_COUNTDOWN_SECS);
        assert!(e.is_running());
    }

    proptest! {
        #[test]
        fn exact_tick_count_reaches_complete(
            rounds in 1u32..=8,
            work in 1u32..=90,
            rest in 0u32..=60,
        ) {
            let mut e = engine(rounds, work, rest);
            let total = ticks_to_complete(rounds, work, rest);
            for _ in 0..total - 1 {
                e.tick();
                prop_assert!(e.phase() != TimerPhase::Complete);
            }
            e.tick();
            prop_assert_eq!(e.phase(), TimerPhase::Complete);
            prop_assert!(!e.is_running());
            prop_assert_eq!(e.current_round(), rounds);
        }
    }
}
