//! # Blaze Core Library
//!
//! Core business logic for Blaze, an 8-week fat-loss program companion.
//! It implements a CLI-first philosophy: every operation is available via
//! the standalone CLI binary, and any richer frontend is a thin layer over
//! this library.
//!
//! ## Architecture
//!
//! - **Timer**: a tick-driven interval state machine plus a count-up
//!   session stopwatch; the caller owns the clock and invokes `tick()`
//!   once per elapsed second
//! - **Training**: the fixed weekly plan and the completed-workout log
//! - **Reminders**: a static weekly trigger table and a full-replace
//!   sync procedure over a pluggable notification scheduler
//! - **Storage**: SQLite document persistence and TOML configuration
//! - **Relay**: HMAC-verified build webhook forwarding to GitHub
//!
//! ## Key Components
//!
//! - [`IntervalEngine`]: interval timer state machine
//! - [`Database`]: document persistence
//! - [`Config`]: application configuration
//! - [`NotificationScheduler`]: seam for platform notification backends

pub mod error;
pub mod events;
pub mod haptics;
pub mod hydration;
pub mod nutrition;
pub mod profile;
pub mod progress;
pub mod relay;
pub mod reminders;
pub mod storage;
pub mod timer;
pub mod training;

pub use error::{
    CapabilityError, ConfigError, CoreError, DatabaseError, RelayError, ValidationError,
};
pub use events::Event;
pub use haptics::{Haptics, SilentHaptics};
pub use profile::UserProfile;
pub use reminders::NotificationScheduler;
pub use storage::{Config, Database};
pub use timer::{IntervalConfig, IntervalEngine, SessionStopwatch, TimerPhase};
