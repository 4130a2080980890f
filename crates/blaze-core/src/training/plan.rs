//! The fixed weekly training plan.
//!
//! Seven sessions, one per ISO weekday. The plan is program content,
//! not user data; it never changes at runtime.

use serde::{Deserialize, Serialize};

use crate::timer::IntervalConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutType {
    Strength,
    Cardio,
    Hiit,
    Rest,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    pub name: String,
    pub sets: u32,
    /// Free-form rep prescription ("6-8", "30 min", "10 each leg").
    pub reps: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutSession {
    pub id: String,
    /// ISO weekday: 1 = Monday .. 7 = Sunday.
    pub day_of_week: u8,
    pub title: String,
    pub workout_type: WorkoutType,
    pub duration_min: u32,
    pub warmup: Vec<String>,
    pub main_lifts: Vec<Exercise>,
    pub accessories: Vec<Exercise>,
    pub finisher: String,
    /// Present only for interval-based sessions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval_config: Option<IntervalConfig>,
}

fn lift(name: &str, sets: u32, reps: &str, notes: Option<&str>) -> Exercise {
    Exercise {
        name: name.to_string(),
        sets,
        reps: reps.to_string(),
        notes: notes.map(str::to_string),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// All seven sessions, Monday through Sunday.
pub fn weekly_plan() -> Vec<WorkoutSession> {
    vec![
        WorkoutSession {
            id: "strength-a".into(),
            day_of_week: 1,
            title: "Strength A - Upper Push/Pull".into(),
            workout_type: WorkoutType::Strength,
            duration_min: 45,
            warmup: strings(&[
                "Arm circles - 30 seconds each direction",
                "Band pull-aparts - 15 reps",
                "Push-up plus - 10 reps",
                "Cat-cow stretches - 10 reps",
                "Light row or bike - 3 minutes",
            ]),
            main_lifts: vec![
                lift("Bench Press", 4, "6-8", Some("Focus on controlled descent")),
                lift("Barbell Row", 4, "6-8", Some("Keep back flat, pull to lower chest")),
                lift("Overhead Press", 3, "8-10", Some("Brace core throughout")),
                lift("Pull-ups / Lat Pulldown", 3, "8-10", Some("Full range of motion")),
            ],
            accessories: vec![
                lift("Dumbbell Incline Press", 3, "10-12", None),
                lift("Face Pulls", 3, "15-20", None),
                lift("Tricep Pushdowns", 3, "12-15", None),
                lift("Bicep Curls", 3, "12-15", None),
            ],
            finisher: "Plank hold - 3 sets x 30 seconds with 15 seconds rest".into(),
            interval_config: None,
        },
        WorkoutSession {
            id: "zone2-cardio".into(),
            day_of_week: 2,
            title: "Zone 2 Cardio + Mobility".into(),
            workout_type: WorkoutType::Cardio,
            duration_min: 45,
            warmup: strings(&[
                "Light walk - 3 minutes",
                "Dynamic leg swings - 10 each leg",
                "Hip circles - 10 each direction",
            ]),
            main_lifts: vec![lift(
                "Zone 2 Cardio (Running/Cycling/Rowing)",
                1,
                "30 min",
                Some("Heart rate 120-140 BPM. Should be able to hold a conversation."),
            )],
            accessories: vec![
                lift("90/90 Hip Stretch", 2, "60 sec each side", None),
                lift("Couch Stretch", 2, "60 sec each side", None),
                lift("Thread the Needle", 2, "10 each side", None),
                lift("Cat-Cow", 1, "20 reps", None),
                lift("Pigeon Pose", 2, "60 sec each side", None),
            ],
            finisher: "Foam roll - 5 minutes focusing on tight areas".into(),
            interval_config: None,
        },
        WorkoutSession {
            id: "strength-b".into(),
            day_of_week: 3,
            title: "Strength B - Lower Body + Core".into(),
            workout_type: WorkoutType::Strength,
            duration_min: 45,
            warmup: strings(&[
                "Bodyweight squats - 15 reps",
                "Glute bridges - 15 reps",
                "Walking lunges - 10 each leg",
                "Leg swings - 10 each leg",
                "Light cardio - 3 minutes",
            ]),
            main_lifts: vec![
                lift("Squat (Barbell/Goblet)", 4, "6-8", Some("Depth to parallel or below")),
                lift("Romanian Deadlift", 4, "8-10", Some("Feel the hamstring stretch")),
                lift("Bulgarian Split Squat", 3, "10 each", Some("Control the descent")),
            ],
            accessories: vec![
                lift("Leg Press", 3, "12-15", None),
                lift("Leg Curl", 3, "12-15", None),
                lift("Calf Raises", 4, "15-20", None),
            ],
            finisher: "Core circuit: Dead Bug (15 reps) + Bird Dog (10 each side) + Hollow Hold (20 sec) - 3 rounds".into(),
            interval_config: None,
        },
        WorkoutSession {
            id: "hiit-metcon".into(),
            day_of_week: 4,
            title: "HIIT / MetCon Intervals".into(),
            workout_type: WorkoutType::Hiit,
            duration_min: 30,
            warmup: strings(&[
                "Jumping jacks - 30 seconds",
                "High knees - 30 seconds",
                "Butt kicks - 30 seconds",
                "Arm circles - 30 seconds",
                "Bodyweight squats - 10 reps",
                "Light jog - 2 minutes",
            ]),
            main_lifts: vec![lift(
                "HIIT Intervals",
                10,
                "40s work / 20s rest",
                Some("Choose: Bike, Row, Run, or Burpees"),
            )],
            accessories: vec![],
            finisher: "Cool down walk - 5 minutes, then stretch".into(),
            interval_config: IntervalConfig::new(10, 40, 20).ok(),
        },
        WorkoutSession {
            id: "strength-c".into(),
            day_of_week: 5,
            title: "Strength C - Full Body Volume".into(),
            workout_type: WorkoutType::Strength,
            duration_min: 45,
            warmup: strings(&[
                "Jumping jacks - 30 seconds",
                "Arm circles - 20 each direction",
                "Leg swings - 10 each leg",
                "Bodyweight squats - 10 reps",
                "Push-ups - 10 reps",
                "Light row or bike - 3 minutes",
            ]),
            main_lifts: vec![
                lift("Deadlift", 4, "5-6", Some("Conventional or Sumo. Maintain neutral spine.")),
                lift("Incline Dumbbell Press", 3, "10-12", Some("Control the weight")),
                lift("Cable Row", 3, "10-12", Some("Squeeze shoulder blades")),
            ],
            accessories: vec![
                lift("Lunges (Walking or Reverse)", 3, "10 each leg", None),
                lift("Lateral Raises", 3, "12-15", None),
                lift("Hammer Curls", 3, "12-15", None),
                lift("Skull Crushers", 3, "12-15", None),
            ],
            finisher: "Farmer carries - 3 x 40 meters with heavy dumbbells/kettlebells".into(),
            interval_config: None,
        },
        WorkoutSession {
            id: "rest-saturday".into(),
            day_of_week: 6,
            title: "Rest Day".into(),
            workout_type: WorkoutType::Rest,
            duration_min: 0,
            warmup: vec![],
            main_lifts: vec![],
            accessories: vec![],
            finisher: "Light activity encouraged: walk, stretch, or gentle yoga".into(),
            interval_config: None,
        },
        WorkoutSession {
            id: "rest-sunday".into(),
            day_of_week: 7,
            title: "Rest Day".into(),
            workout_type: WorkoutType::Rest,
            duration_min: 0,
            warmup: vec![],
            main_lifts: vec![],
            accessories: vec![],
            finisher: "Light activity encouraged: walk, stretch, or gentle yoga. Meal prep day!".into(),
            interval_config: None,
        },
    ]
}

pub fn session_by_id(id: &str) -> Option<WorkoutSession> {
    weekly_plan().into_iter().find(|s| s.id == id)
}

/// Session for an ISO weekday (1 = Monday .. 7 = Sunday).
pub fn session_for_day(day_of_week: u8) -> Option<WorkoutSession> {
    weekly_plan().into_iter().find(|s| s.day_of_week == day_of_week)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_covers_every_weekday_once() {
        let plan = weekly_plan();
        assert_eq!(plan.len(), 7);
        let mut days: Vec<_> = plan.iter().map(|s| s.day_of_week).collect();
        days.sort_unstable();
        assert_eq!(days, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn only_hiit_carries_interval_config() {
        for session in weekly_plan() {
            match session.workout_type {
                WorkoutType::Hiit => {
                    let cfg = session.interval_config.expect("hiit has intervals");
                    assert_eq!((cfg.rounds(), cfg.work_secs(), cfg.rest_secs()), (10, 40, 20));
                }
                _ => assert!(session.interval_config.is_none()),
            }
        }
    }

    #[test]
    fn rest_days_have_no_exercises() {
        for session in weekly_plan() {
            if session.workout_type == WorkoutType::Rest {
                assert!(session.main_lifts.is_empty());
                assert!(session.warmup.is_empty());
                assert_eq!(session.duration_min, 0);
            } else {
                assert!(!session.main_lifts.is_empty());
            }
        }
    }

    #[test]
    fn lookup_by_id_and_day_agree() {
        let by_id = session_by_id("hiit-metcon").unwrap();
        let by_day = session_for_day(4).unwrap();
        assert_eq!(by_id.id, by_day.id);
        assert!(session_by_id("leg-day-9000").is_none());
        assert!(session_for_day(0).is_none());
    }
}
