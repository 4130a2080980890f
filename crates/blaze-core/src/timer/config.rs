use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// One interval workout: `rounds` cycles of work, with rest between rounds.
///
/// Validated at construction; an engine never sees an invalid config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalConfig {
    rounds: u32,
    work_secs: u32,
    rest_secs: u32,
}

impl IntervalConfig {
    /// Build a config. `rounds` and `work_secs` must be at least 1;
    /// `rest_secs` may be zero (back-to-back rounds).
    pub fn new(rounds: u32, work_secs: u32, rest_secs: u32) -> Result<Self, ValidationError> {
        if rounds == 0 {
            return Err(ValidationError::InvalidValue {
                field: "rounds".into(),
                message: "must be at least 1".into(),
            });
        }
        if work_secs == 0 {
            return Err(ValidationError::InvalidValue {
                field: "work_secs".into(),
                message: "must be at least 1".into(),
            });
        }
        Ok(Self {
            rounds,
            work_secs,
            rest_secs,
        })
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn work_secs(&self) -> u32 {
        self.work_secs
    }

    pub fn rest_secs(&self) -> u32 {
        self.rest_secs
    }

    /// Total working duration, excluding the ready countdown.
    /// There is no rest after the final round.
    pub fn total_secs(&self) -> u32 {
        self.rounds * self.work_secs + (self.rounds - 1) * self.rest_secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_rounds() {
        assert!(IntervalConfig::new(0, 40, 20).is_err());
    }

    #[test]
    fn rejects_zero_work() {
        assert!(IntervalConfig::new(10, 0, 20).is_err());
    }

    #[test]
    fn zero_rest_is_legal() {
        let cfg = IntervalConfig::new(5, 30, 0).unwrap();
        assert_eq!(cfg.total_secs(), 150);
    }

    #[test]
    fn total_excludes_trailing_rest() {
        let cfg = IntervalConfig::new(3, 40, 20).unwrap();
        assert_eq!(cfg.total_secs(), 3 * 40 + 2 * 20);
    }
}
