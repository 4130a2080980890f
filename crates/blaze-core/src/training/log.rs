//! Completed-workout log.

use chrono::{DateTime, Datelike, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutLog {
    pub id: String,
    /// Id of the plan session this log records.
    pub session_id: String,
    pub date: NaiveDate,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    pub notes: String,
    /// Session rate of perceived exertion, 1-10.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpe: Option<u8>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrainingLogbook {
    logs: Vec<WorkoutLog>,
}

impl TrainingLogbook {
    pub fn logs(&self) -> &[WorkoutLog] {
        &self.logs
    }

    /// Record a session. RPE, when given, must be 1-10. Returns the
    /// log id.
    pub fn add(
        &mut self,
        session_id: &str,
        date: NaiveDate,
        completed: bool,
        notes: &str,
        rpe: Option<u8>,
    ) -> Result<String, ValidationError> {
        if let Some(rpe) = rpe {
            if !(1..=10).contains(&rpe) {
                return Err(ValidationError::OutOfRange {
                    field: "rpe".into(),
                    value: rpe as i64,
                    min: 1,
                    max: 10,
                });
            }
        }
        let id = Uuid::new_v4().to_string();
        self.logs.push(WorkoutLog {
            id: id.clone(),
            session_id: session_id.to_string(),
            date,
            completed,
            start_time: None,
            end_time: None,
            notes: notes.to_string(),
            rpe,
        });
        Ok(id)
    }

    pub fn log_mut(&mut self, id: &str) -> Option<&mut WorkoutLog> {
        self.logs.iter_mut().find(|l| l.id == id)
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.logs.len();
        self.logs.retain(|l| l.id != id);
        self.logs.len() != before
    }

    pub fn by_date(&self, date: NaiveDate) -> Vec<&WorkoutLog> {
        self.logs.iter().filter(|l| l.date == date).collect()
    }

    /// Logs within the Monday-anchored week containing `date`.
    pub fn for_week(&self, date: NaiveDate) -> Vec<&WorkoutLog> {
        let monday = date - Days::new(date.weekday().num_days_from_monday() as u64);
        let sunday = monday + Days::new(6);
        self.logs
            .iter()
            .filter(|l| l.date >= monday && l.date <= sunday)
            .collect()
    }

    pub fn completed_count(&self) -> usize {
        self.logs.iter().filter(|l| l.completed).count()
    }

    pub fn reset(&mut self) {
        self.logs.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, m, d).unwrap()
    }

    #[test]
    fn rejects_rpe_out_of_range() {
        let mut log = TrainingLogbook::default();
        assert!(log.add("strength-a", date(3, 2), true, "", Some(0)).is_err());
        assert!(log.add("strength-a", date(3, 2), true, "", Some(11)).is_err());
        assert!(log.add("strength-a", date(3, 2), true, "", Some(8)).is_ok());
        assert!(log.add("strength-a", date(3, 2), true, "", None).is_ok());
    }

    #[test]
    fn week_window_is_monday_through_sunday() {
        let mut log = TrainingLogbook::default();
        // 2026-03-02 is a Monday.
        log.add("strength-a", date(3, 2), true, "", None).unwrap();
        log.add("rest-sunday", date(3, 8), true, "", None).unwrap();
        log.add("strength-a", date(3, 9), true, "", None).unwrap();
        let week = log.for_week(date(3, 4));
        assert_eq!(week.len(), 2);
        assert!(week.iter().all(|l| l.date <= date(3, 8)));
    }

    #[test]
    fn counts_only_completed_sessions() {
        let mut log = TrainingLogbook::default();
        log.add("strength-a", date(3, 2), true, "", None).unwrap();
        log.add("zone2-cardio", date(3, 3), false, "skipped", None).unwrap();
        assert_eq!(log.completed_count(), 1);
    }

    #[test]
    fn remove_and_mutate_by_id() {
        let mut log = TrainingLogbook::default();
        let id = log.add("strength-a", date(3, 2), false, "", None).unwrap();
        log.log_mut(&id).unwrap().completed = true;
        assert_eq!(log.completed_count(), 1);
        assert!(log.remove(&id));
        assert!(log.logs().is_empty());
    }
}
