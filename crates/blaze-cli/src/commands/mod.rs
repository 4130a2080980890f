pub mod config;
pub mod hydration;
pub mod nutrition;
pub mod profile;
pub mod progress;
pub mod relay;
pub mod reminders;
pub mod timer;
pub mod workout;
