mod config;
mod engine;
mod stopwatch;

pub use config::IntervalConfig;
pub use engine::{IntervalEngine, TimerPhase, READY_COUNTDOWN_SECS};
pub use stopwatch::{SessionStopwatch, DEFAULT_TARGET_SECS};
