//! User profile and program calendar.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Length of the program in weeks.
pub const PROGRAM_WEEKS: u32 = 8;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    /// Day 1 of the program.
    pub start_date: NaiveDate,
    pub start_weight_kg: f64,
    pub goal_weight_kg: f64,
    pub calorie_target: u32,
    pub protein_target_g: u32,
    pub carb_target_g: u32,
    pub fat_target_g: u32,
    pub hydration_target_ml: u32,
    pub onboarding_completed: bool,
}

impl UserProfile {
    pub fn new(
        start_date: NaiveDate,
        start_weight_kg: f64,
        goal_weight_kg: f64,
        calorie_target: u32,
        protein_target_g: u32,
        carb_target_g: u32,
        fat_target_g: u32,
        hydration_target_ml: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            start_date,
            start_weight_kg,
            goal_weight_kg,
            calorie_target,
            protein_target_g,
            carb_target_g,
            fat_target_g,
            hydration_target_ml,
            onboarding_completed: true,
        }
    }

    /// 1-based program week for `today`, clamped to the final week.
    ///
    /// Days before the start date count as week 1.
    pub fn program_week(&self, today: NaiveDate) -> u32 {
        let days = (today - self.start_date).num_days().max(0) as u32;
        (days / 7 + 1).min(PROGRAM_WEEKS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(start: NaiveDate) -> UserProfile {
        UserProfile::new(start, 92.0, 84.0, 2200, 180, 200, 70, 3000)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn week_one_spans_first_seven_days() {
        let p = profile(date(2026, 1, 5));
        assert_eq!(p.program_week(date(2026, 1, 5)), 1);
        assert_eq!(p.program_week(date(2026, 1, 11)), 1);
        assert_eq!(p.program_week(date(2026, 1, 12)), 2);
    }

    #[test]
    fn week_clamps_after_program_ends() {
        let p = profile(date(2026, 1, 5));
        assert_eq!(p.program_week(date(2026, 3, 2)), 8);
        assert_eq!(p.program_week(date(2027, 1, 1)), 8);
    }

    #[test]
    fn dates_before_start_are_week_one() {
        let p = profile(date(2026, 1, 5));
        assert_eq!(p.program_week(date(2025, 12, 1)), 1);
    }
}
