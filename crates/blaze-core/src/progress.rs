//! Weight, measurement and biofeedback tracking.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightLog {
    pub id: String,
    pub date: NaiveDate,
    pub weight_kg: f64,
}

/// Tape measurements; any subset may be recorded on a given day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyMeasurement {
    pub id: String,
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waist_cm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chest_cm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hips_cm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arm_cm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thigh_cm: Option<f64>,
}

/// Subjective daily scores, each on a 1-5 scale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BiofeedbackLog {
    pub id: String,
    pub date: NaiveDate,
    pub energy: u8,
    pub sleep_quality: u8,
    pub hunger: u8,
    pub mood: u8,
}

/// One point of the expected linear weight descent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    pub week: u32,
    pub weight_kg: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProgressTracker {
    weights: Vec<WeightLog>,
    measurements: Vec<BodyMeasurement>,
    biofeedback: Vec<BiofeedbackLog>,
}

fn check_scale(field: &str, value: u8) -> Result<(), ValidationError> {
    if (1..=5).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            field: field.into(),
            value: value as i64,
            min: 1,
            max: 5,
        })
    }
}

impl ProgressTracker {
    // ── Weight ───────────────────────────────────────────────────────

    /// Record a weigh-in. One entry per date: logging twice on the same
    /// day overwrites. Returns the entry id.
    pub fn log_weight(&mut self, date: NaiveDate, weight_kg: f64) -> String {
        if let Some(existing) = self.weights.iter_mut().find(|w| w.date == date) {
            existing.weight_kg = weight_kg;
            return existing.id.clone();
        }
        let id = Uuid::new_v4().to_string();
        self.weights.push(WeightLog {
            id: id.clone(),
            date,
            weight_kg,
        });
        self.weights.sort_by_key(|w| w.date);
        id
    }

    pub fn delete_weight(&mut self, id: &str) -> bool {
        let before = self.weights.len();
        self.weights.retain(|w| w.id != id);
        self.weights.len() != before
    }

    /// Most recent weigh-in by date.
    pub fn latest_weight(&self) -> Option<&WeightLog> {
        self.weights.last()
    }

    /// All weigh-ins, oldest first.
    pub fn weight_history(&self) -> &[WeightLog] {
        &self.weights
    }

    /// Expected weight at the end of each week `0..=weeks`, assuming a
    /// straight line from start to goal. Rounded to 0.1 kg.
    pub fn expected_trajectory(
        start_kg: f64,
        goal_kg: f64,
        weeks: u32,
    ) -> Vec<TrajectoryPoint> {
        let per_week = (start_kg - goal_kg) / weeks as f64;
        (0..=weeks)
            .map(|week| TrajectoryPoint {
                week,
                weight_kg: ((start_kg - per_week * week as f64) * 10.0).round() / 10.0,
            })
            .collect()
    }

    // ── Measurements ─────────────────────────────────────────────────

    pub fn add_measurement(&mut self, measurement: BodyMeasurement) -> String {
        let id = measurement.id.clone();
        self.measurements.push(measurement);
        self.measurements.sort_by_key(|m| m.date);
        id
    }

    pub fn delete_measurement(&mut self, id: &str) -> bool {
        let before = self.measurements.len();
        self.measurements.retain(|m| m.id != id);
        self.measurements.len() != before
    }

    pub fn measurements(&self) -> &[BodyMeasurement] {
        &self.measurements
    }

    // ── Biofeedback ──────────────────────────────────────────────────

    /// Record daily biofeedback; one entry per date, later calls
    /// overwrite. All four scores must be 1-5.
    pub fn log_biofeedback(
        &mut self,
        date: NaiveDate,
        energy: u8,
        sleep_quality: u8,
        hunger: u8,
        mood: u8,
    ) -> Result<String, ValidationError> {
        check_scale("energy", energy)?;
        check_scale("sleep_quality", sleep_quality)?;
        check_scale("hunger", hunger)?;
        check_scale("mood", mood)?;
        if let Some(existing) = self.biofeedback.iter_mut().find(|b| b.date == date) {
            existing.energy = energy;
            existing.sleep_quality = sleep_quality;
            existing.hunger = hunger;
            existing.mood = mood;
            return Ok(existing.id.clone());
        }
        let id = Uuid::new_v4().to_string();
        self.biofeedback.push(BiofeedbackLog {
            id: id.clone(),
            date,
            energy,
            sleep_quality,
            hunger,
            mood,
        });
        self.biofeedback.sort_by_key(|b| b.date);
        Ok(id)
    }

    pub fn biofeedback_history(&self) -> &[BiofeedbackLog] {
        &self.biofeedback
    }

    pub fn reset(&mut self) {
        self.weights.clear();
        self.measurements.clear();
        self.biofeedback.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, d).unwrap()
    }

    #[test]
    fn weight_log_upserts_by_date() {
        let mut tracker = ProgressTracker::default();
        tracker.log_weight(date(10), 92.0);
        tracker.log_weight(date(10), 91.4);
        assert_eq!(tracker.weight_history().len(), 1);
        assert_eq!(tracker.latest_weight().unwrap().weight_kg, 91.4);
    }

    #[test]
    fn weight_history_sorted_by_date() {
        let mut tracker = ProgressTracker::default();
        tracker.log_weight(date(15), 90.8);
        tracker.log_weight(date(8), 92.0);
        let dates: Vec<_> = tracker.weight_history().iter().map(|w| w.date).collect();
        assert_eq!(dates, vec![date(8), date(15)]);
        assert_eq!(tracker.latest_weight().unwrap().date, date(15));
    }

    #[test]
    fn delete_weight_by_id() {
        let mut tracker = ProgressTracker::default();
        let id = tracker.log_weight(date(10), 92.0);
        assert!(tracker.delete_weight(&id));
        assert!(tracker.latest_weight().is_none());
    }

    #[test]
    fn trajectory_is_linear_from_start_to_goal() {
        let points = ProgressTracker::expected_trajectory(92.0, 84.0, 8);
        assert_eq!(points.len(), 9);
        assert_eq!(points[0].weight_kg, 92.0);
        assert_eq!(points[4].weight_kg, 88.0);
        assert_eq!(points[8].weight_kg, 84.0);
    }

    #[test]
    fn trajectory_rounds_to_tenths() {
        let points = ProgressTracker::expected_trajectory(90.0, 85.0, 8);
        // 0.625 kg/week.
        assert_eq!(points[1].weight_kg, 89.4);
        assert_eq!(points[8].weight_kg, 85.0);
    }

    #[test]
    fn biofeedback_rejects_out_of_scale() {
        let mut tracker = ProgressTracker::default();
        assert!(tracker.log_biofeedback(date(10), 0, 3, 3, 3).is_err());
        assert!(tracker.log_biofeedback(date(10), 3, 6, 3, 3).is_err());
        assert!(tracker.log_biofeedback(date(10), 3, 3, 3, 3).is_ok());
    }

    #[test]
    fn biofeedback_upserts_by_date() {
        let mut tracker = ProgressTracker::default();
        tracker.log_biofeedback(date(10), 3, 3, 3, 3).unwrap();
        tracker.log_biofeedback(date(10), 5, 4, 2, 4).unwrap();
        assert_eq!(tracker.biofeedback_history().len(), 1);
        assert_eq!(tracker.biofeedback_history()[0].energy, 5);
    }
}
