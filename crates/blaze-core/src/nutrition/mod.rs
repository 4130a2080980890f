//! Daily intake logging plus the weekly prep and grocery checklists.

mod plan;

pub use plan::{
    default_grocery_list, default_meal_prep_items, sample_meal_plan, MacroTargets, Meal,
};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day's intake. A single row per date; re-logging overwrites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionLog {
    pub date: NaiveDate,
    pub calories: u32,
    pub protein_g: u32,
    pub carbs_g: u32,
    pub fat_g: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealPrepItem {
    pub id: String,
    pub name: String,
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroceryItem {
    pub id: String,
    pub name: String,
    pub quantity: String,
    pub category: String,
    pub checked: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionTracker {
    logs: Vec<NutritionLog>,
    meal_prep: Vec<MealPrepItem>,
    grocery: Vec<GroceryItem>,
}

impl NutritionTracker {
    /// Fresh tracker with the program's default checklists.
    pub fn new_with_defaults() -> Self {
        Self {
            logs: Vec::new(),
            meal_prep: default_meal_prep_items(),
            grocery: default_grocery_list(),
        }
    }

    // ── Intake ───────────────────────────────────────────────────────

    /// Record a day's intake, replacing any existing entry for the date.
    pub fn log(&mut self, entry: NutritionLog) {
        if let Some(existing) = self.logs.iter_mut().find(|l| l.date == entry.date) {
            *existing = entry;
        } else {
            self.logs.push(entry);
            self.logs.sort_by_key(|l| l.date);
        }
    }

    pub fn log_for(&self, date: NaiveDate) -> Option<&NutritionLog> {
        self.logs.iter().find(|l| l.date == date)
    }

    pub fn logs(&self) -> &[NutritionLog] {
        &self.logs
    }

    // ── Checklists ───────────────────────────────────────────────────

    pub fn meal_prep(&self) -> &[MealPrepItem] {
        &self.meal_prep
    }

    /// Flip one prep item; false when the id is unknown.
    pub fn toggle_meal_prep(&mut self, id: &str) -> bool {
        match self.meal_prep.iter_mut().find(|i| i.id == id) {
            Some(item) => {
                item.completed = !item.completed;
                true
            }
            None => false,
        }
    }

    /// Uncheck every prep item for the new week.
    pub fn reset_meal_prep(&mut self) {
        for item in &mut self.meal_prep {
            item.completed = false;
        }
    }

    pub fn grocery(&self) -> &[GroceryItem] {
        &self.grocery
    }

    pub fn toggle_grocery(&mut self, id: &str) -> bool {
        match self.grocery.iter_mut().find(|i| i.id == id) {
            Some(item) => {
                item.checked = !item.checked;
                true
            }
            None => false,
        }
    }

    pub fn reset_grocery(&mut self) {
        for item in &mut self.grocery {
            item.checked = false;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new_with_defaults();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 4, d).unwrap()
    }

    fn entry(d: u32, calories: u32) -> NutritionLog {
        NutritionLog {
            date: date(d),
            calories,
            protein_g: 180,
            carbs_g: 200,
            fat_g: 70,
        }
    }

    #[test]
    fn intake_log_replaces_same_date() {
        let mut tracker = NutritionTracker::new_with_defaults();
        tracker.log(entry(10, 2100));
        tracker.log(entry(10, 2250));
        assert_eq!(tracker.logs().len(), 1);
        assert_eq!(tracker.log_for(date(10)).unwrap().calories, 2250);
    }

    #[test]
    fn toggle_flips_and_reset_clears() {
        let mut tracker = NutritionTracker::new_with_defaults();
        assert!(tracker.toggle_meal_prep("prep-1"));
        assert!(tracker.meal_prep()[0].completed);
        assert!(tracker.toggle_meal_prep("prep-1"));
        assert!(!tracker.meal_prep()[0].completed);
        assert!(!tracker.toggle_meal_prep("prep-99"));

        tracker.toggle_grocery("g-1");
        tracker.toggle_grocery("g-5");
        tracker.reset_grocery();
        assert!(tracker.grocery().iter().all(|i| !i.checked));
    }

    #[test]
    fn full_reset_restores_defaults_and_drops_logs() {
        let mut tracker = NutritionTracker::new_with_defaults();
        tracker.log(entry(10, 2100));
        tracker.toggle_meal_prep("prep-2");
        tracker.reset();
        assert!(tracker.logs().is_empty());
        assert!(tracker.meal_prep().iter().all(|i| !i.completed));
    }
}
