//! Water intake log.

use std::collections::HashMap;

use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HydrationEntry {
    pub id: String,
    pub date: NaiveDate,
    pub quantity_ml: u32,
    pub logged_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub total_ml: u32,
}

/// All hydration entries, newest last.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HydrationLogbook {
    entries: Vec<HydrationEntry>,
}

impl HydrationLogbook {
    pub fn entries(&self) -> &[HydrationEntry] {
        &self.entries
    }

    /// Record one drink; returns the entry id.
    pub fn add_entry(&mut self, date: NaiveDate, quantity_ml: u32) -> String {
        let id = Uuid::new_v4().to_string();
        self.entries.push(HydrationEntry {
            id: id.clone(),
            date,
            quantity_ml,
            logged_at: Utc::now(),
        });
        id
    }

    /// Remove by id; false when the id is unknown.
    pub fn remove_entry(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    pub fn total_for(&self, date: NaiveDate) -> u32 {
        self.entries
            .iter()
            .filter(|e| e.date == date)
            .map(|e| e.quantity_ml)
            .sum()
    }

    /// Daily totals for the last `days` days ending at `today`,
    /// oldest first. Days with no entries appear as zero.
    pub fn history(&self, days: u32, today: NaiveDate) -> Vec<DailyTotal> {
        (0..days)
            .rev()
            .filter_map(|back| today.checked_sub_days(Days::new(back as u64)))
            .map(|date| DailyTotal {
                date,
                total_ml: self.total_for(date),
            })
            .collect()
    }

    /// Consecutive days at or above `target_ml`, counting back from
    /// yesterday, plus today if today already met the target.
    pub fn streak(&self, target_ml: u32, today: NaiveDate) -> u32 {
        let mut totals: HashMap<NaiveDate, u32> = HashMap::new();
        for e in &self.entries {
            *totals.entry(e.date).or_insert(0) += e.quantity_ml;
        }
        let met = |date: NaiveDate| totals.get(&date).copied().unwrap_or(0) >= target_ml;

        let mut streak = 0;
        for back in 1..=365u64 {
            match today.checked_sub_days(Days::new(back)) {
                Some(date) if met(date) => streak += 1,
                _ => break,
            }
        }
        if met(today) {
            streak += 1;
        }
        streak
    }

    pub fn reset(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
    }

    #[test]
    fn totals_sum_per_day() {
        let mut log = HydrationLogbook::default();
        log.add_entry(date(10), 500);
        log.add_entry(date(10), 250);
        log.add_entry(date(11), 750);
        assert_eq!(log.total_for(date(10)), 750);
        assert_eq!(log.total_for(date(11)), 750);
        assert_eq!(log.total_for(date(12)), 0);
    }

    #[test]
    fn remove_entry_by_id() {
        let mut log = HydrationLogbook::default();
        let id = log.add_entry(date(10), 500);
        assert!(log.remove_entry(&id));
        assert!(!log.remove_entry(&id));
        assert_eq!(log.total_for(date(10)), 0);
    }

    #[test]
    fn history_is_oldest_first_with_gaps_as_zero() {
        let mut log = HydrationLogbook::default();
        log.add_entry(date(13), 1000);
        log.add_entry(date(15), 2000);
        let history = log.history(3, date(15));
        assert_eq!(
            history,
            vec![
                DailyTotal { date: date(13), total_ml: 1000 },
                DailyTotal { date: date(14), total_ml: 0 },
                DailyTotal { date: date(15), total_ml: 2000 },
            ]
        );
    }

    #[test]
    fn streak_counts_back_and_includes_today_when_met() {
        let mut log = HydrationLogbook::default();
        for d in 12..=14 {
            log.add_entry(date(d), 3000);
        }
        assert_eq!(log.streak(3000, date(15)), 3);
        log.add_entry(date(15), 3000);
        assert_eq!(log.streak(3000, date(15)), 4);
    }

    #[test]
    fn streak_breaks_on_missed_day() {
        let mut log = HydrationLogbook::default();
        log.add_entry(date(10), 3000);
        log.add_entry(date(12), 3000);
        // 11th missed, so only the 12th counts back from the 13th.
        assert_eq!(log.streak(3000, date(13)), 1);
    }

    #[test]
    fn streak_requires_target() {
        let mut log = HydrationLogbook::default();
        log.add_entry(date(14), 2999);
        assert_eq!(log.streak(3000, date(15)), 0);
    }
}
