use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::TimerPhase;

/// Every observable timer transition produces an Event.
/// The CLI prints events; the haptic signal fires on each one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// A new phase began (work or rest).
    PhaseStarted {
        phase: TimerPhase,
        round: u32,
        seconds: u32,
        at: DateTime<Utc>,
    },
    /// The final work round finished; the timer is terminal.
    IntervalCompleted {
        rounds: u32,
        at: DateTime<Utc>,
    },
    /// Full state snapshot for display.
    Snapshot {
        phase: TimerPhase,
        round: u32,
        seconds_remaining: u32,
        is_running: bool,
        progress: f64,
        at: DateTime<Utc>,
    },
}
