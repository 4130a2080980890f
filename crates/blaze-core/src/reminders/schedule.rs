//! Weekly reminder trigger policy.
//!
//! The trigger table is static domain policy: a constant lookup, not
//! derived from user input. Weekdays are ISO numbered (1 = Monday ..
//! 7 = Sunday); platform conventions are converted at the scheduler
//! boundary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const MONDAY: u8 = 1;
pub const TUESDAY: u8 = 2;
pub const WEDNESDAY: u8 = 3;
pub const THURSDAY: u8 = 4;
pub const FRIDAY: u8 = 5;
pub const SATURDAY: u8 = 6;
pub const SUNDAY: u8 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReminderType {
    Workout,
    Hydration,
    MealPrep,
    CheckIn,
}

impl ReminderType {
    pub const ALL: [ReminderType; 4] = [
        ReminderType::Workout,
        ReminderType::Hydration,
        ReminderType::MealPrep,
        ReminderType::CheckIn,
    ];

    /// Fixed notification title/body for this reminder.
    pub fn content(self) -> ReminderContent {
        match self {
            ReminderType::Workout => ReminderContent {
                title: "Time to train!",
                body: "Your workout is ready. Let's go!",
            },
            ReminderType::Hydration => ReminderContent {
                title: "Hydration Check",
                body: "Time to drink some water!",
            },
            ReminderType::MealPrep => ReminderContent {
                title: "Meal Prep Time",
                body: "Get your meals ready for the week.",
            },
            ReminderType::CheckIn => ReminderContent {
                title: "Weekly Check-in",
                body: "Log your weight and track your progress.",
            },
        }
    }
}

impl fmt::Display for ReminderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ReminderType::Workout => "workout",
            ReminderType::Hydration => "hydration",
            ReminderType::MealPrep => "meal-prep",
            ReminderType::CheckIn => "check-in",
        };
        f.write_str(s)
    }
}

impl FromStr for ReminderType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "workout" => Ok(ReminderType::Workout),
            "hydration" => Ok(ReminderType::Hydration),
            "meal-prep" | "mealprep" | "mealPrep" => Ok(ReminderType::MealPrep),
            "check-in" | "checkin" | "checkIn" => Ok(ReminderType::CheckIn),
            other => Err(format!(
                "unknown reminder type '{other}' (expected workout, hydration, meal-prep or check-in)"
            )),
        }
    }
}

/// Notification text associated with a reminder type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderContent {
    pub title: &'static str,
    pub body: &'static str,
}

/// A recurring weekly notification rule, repeating every calendar week
/// until cancelled. Pure value; never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyTrigger {
    /// ISO weekday: 1 = Monday .. 7 = Sunday.
    pub weekday: u8,
    pub hour: u8,
    pub minute: u8,
}

/// A user's on/off switch for one reminder category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderSetting {
    #[serde(rename = "type")]
    pub kind: ReminderType,
    pub enabled: bool,
}

/// First-launch defaults: every reminder enabled.
pub fn default_reminders() -> Vec<ReminderSetting> {
    ReminderType::ALL
        .iter()
        .map(|&kind| ReminderSetting {
            kind,
            enabled: true,
        })
        .collect()
}

const HYDRATION_TIMES: [(u8, u8); 8] = [
    (8, 0),
    (9, 30),
    (11, 0),
    (12, 30),
    (14, 0),
    (15, 30),
    (17, 0),
    (18, 30),
];

/// The weekly trigger table:
///
/// - Workout: Mon-Fri at 06:45
/// - Hydration: eight fixed times, every day
/// - Meal prep: Sunday 17:00 and Wednesday 18:00
/// - Check-in: Monday 07:30
pub fn weekly_triggers_for(kind: ReminderType) -> Vec<WeeklyTrigger> {
    match kind {
        ReminderType::Workout => (MONDAY..=FRIDAY)
            .map(|weekday| WeeklyTrigger {
                weekday,
                hour: 6,
                minute: 45,
            })
            .collect(),
        ReminderType::Hydration => {
            let mut triggers = Vec::with_capacity(7 * HYDRATION_TIMES.len());
            for weekday in MONDAY..=SUNDAY {
                for &(hour, minute) in &HYDRATION_TIMES {
                    triggers.push(WeeklyTrigger {
                        weekday,
                        hour,
                        minute,
                    });
                }
            }
            triggers
        }
        ReminderType::MealPrep => vec![
            WeeklyTrigger {
                weekday: SUNDAY,
                hour: 17,
                minute: 0,
            },
            WeeklyTrigger {
                weekday: WEDNESDAY,
                hour: 18,
                minute: 0,
            },
        ],
        ReminderType::CheckIn => vec![WeeklyTrigger {
            weekday: MONDAY,
            hour: 7,
            minute: 30,
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workout_is_weekday_mornings_only() {
        let triggers = weekly_triggers_for(ReminderType::Workout);
        assert_eq!(triggers.len(), 5);
        for t in &triggers {
            assert!(t.weekday >= MONDAY && t.weekday <= FRIDAY);
            assert_eq!((t.hour, t.minute), (6, 45));
        }
    }

    #[test]
    fn hydration_covers_all_seven_days() {
        let triggers = weekly_triggers_for(ReminderType::Hydration);
        assert_eq!(triggers.len(), 56);
        for t in &triggers {
            assert!(t.hour <= 23);
            assert!(t.minute <= 59);
        }
        for weekday in MONDAY..=SUNDAY {
            assert_eq!(triggers.iter().filter(|t| t.weekday == weekday).count(), 8);
        }
    }

    #[test]
    fn meal_prep_and_check_in_counts() {
        assert_eq!(weekly_triggers_for(ReminderType::MealPrep).len(), 2);
        assert_eq!(weekly_triggers_for(ReminderType::CheckIn).len(), 1);
    }

    #[test]
    fn defaults_enable_every_type() {
        let defaults = default_reminders();
        assert_eq!(defaults.len(), 4);
        assert!(defaults.iter().all(|r| r.enabled));
    }

    #[test]
    fn settings_serialize_with_camel_case_type_tag() {
        let setting = ReminderSetting {
            kind: ReminderType::MealPrep,
            enabled: false,
        };
        let json = serde_json::to_string(&setting).unwrap();
        assert_eq!(json, r#"{"type":"mealPrep","enabled":false}"#);
    }

    #[test]
    fn parses_reminder_type_names() {
        assert_eq!(
            "meal-prep".parse::<ReminderType>().unwrap(),
            ReminderType::MealPrep
        );
        assert_eq!(
            "checkIn".parse::<ReminderType>().unwrap(),
            ReminderType::CheckIn
        );
        assert!("snacks".parse::<ReminderType>().is_err());
    }
}
