//! Haptic feedback seam.
//!
//! The engine reports phase boundaries through events; whoever drives
//! it decides how to make them felt. On a headless CLI that is nothing
//! at all, hence [`SilentHaptics`].

/// Vibration length fired on each phase transition.
pub const PHASE_TRANSITION_MS: u64 = 200;

pub trait Haptics {
    fn vibrate(&self, duration_ms: u64);
}

/// No-op backend for environments without a vibration motor.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentHaptics;

impl Haptics for SilentHaptics {
    fn vibrate(&self, _duration_ms: u64) {}
}
