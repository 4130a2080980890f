use chrono::{Local, NaiveDate};
use clap::Subcommand;
use uuid::Uuid;

use blaze_core::profile::PROGRAM_WEEKS;
use blaze_core::progress::{BodyMeasurement, ProgressTracker};
use blaze_core::storage::{keys, Database};

use super::profile::load_profile;

#[derive(Subcommand)]
pub enum ProgressAction {
    /// Record a weigh-in (overwrites the same date)
    LogWeight {
        /// Weight in kg
        weight: f64,
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// All weigh-ins, oldest first
    Weights,
    /// Delete a weigh-in by id
    DeleteWeight {
        id: String,
    },
    /// Expected weekly weights from start to goal
    Trajectory,
    /// Record tape measurements
    LogMeasurement {
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long)]
        waist: Option<f64>,
        #[arg(long)]
        chest: Option<f64>,
        #[arg(long)]
        hips: Option<f64>,
        #[arg(long)]
        arm: Option<f64>,
        #[arg(long)]
        thigh: Option<f64>,
    },
    /// All measurements
    Measurements,
    /// Record daily biofeedback scores (each 1-5)
    LogBio {
        #[arg(long)]
        energy: u8,
        #[arg(long)]
        sleep: u8,
        #[arg(long)]
        hunger: u8,
        #[arg(long)]
        mood: u8,
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// All biofeedback entries
    BioHistory,
}

fn load_tracker(db: &Database) -> Result<ProgressTracker, Box<dyn std::error::Error>> {
    Ok(db.load_doc(keys::PROGRESS)?.unwrap_or_default())
}

pub fn run(action: ProgressAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let today = Local::now().date_naive();

    match action {
        ProgressAction::LogWeight { weight, date } => {
            let mut tracker = load_tracker(&db)?;
            let date = date.unwrap_or(today);
            let id = tracker.log_weight(date, weight);
            db.save_doc(keys::PROGRESS, &tracker)?;
            println!("logged {weight} kg on {date} (id {id})");
        }
        ProgressAction::Weights => {
            let tracker = load_tracker(&db)?;
            println!("{}", serde_json::to_string_pretty(tracker.weight_history())?);
        }
        ProgressAction::DeleteWeight { id } => {
            let mut tracker = load_tracker(&db)?;
            if !tracker.delete_weight(&id) {
                return Err(format!("no weight entry with id '{id}'").into());
            }
            db.save_doc(keys::PROGRESS, &tracker)?;
            println!("removed {id}");
        }
        ProgressAction::Trajectory => {
            let profile = load_profile(&db)?;
            let points = ProgressTracker::expected_trajectory(
                profile.start_weight_kg,
                profile.goal_weight_kg,
                PROGRAM_WEEKS,
            );
            for point in points {
                println!("week {:>2}  {:.1} kg", point.week, point.weight_kg);
            }
        }
        ProgressAction::LogMeasurement {
            date,
            waist,
            chest,
            hips,
            arm,
            thigh,
        } => {
            if [waist, chest, hips, arm, thigh].iter().all(Option::is_none) {
                return Err("provide at least one measurement".into());
            }
            let mut tracker = load_tracker(&db)?;
            let id = tracker.add_measurement(BodyMeasurement {
                id: Uuid::new_v4().to_string(),
                date: date.unwrap_or(today),
                waist_cm: waist,
                chest_cm: chest,
                hips_cm: hips,
                arm_cm: arm,
                thigh_cm: thigh,
            });
            db.save_doc(keys::PROGRESS, &tracker)?;
            println!("recorded measurement {id}");
        }
        ProgressAction::Measurements => {
            let tracker = load_tracker(&db)?;
            println!("{}", serde_json::to_string_pretty(tracker.measurements())?);
        }
        ProgressAction::LogBio {
            energy,
            sleep,
            hunger,
            mood,
            date,
        } => {
            let mut tracker = load_tracker(&db)?;
            let id =
                tracker.log_biofeedback(date.unwrap_or(today), energy, sleep, hunger, mood)?;
            db.save_doc(keys::PROGRESS, &tracker)?;
            println!("recorded biofeedback {id}");
        }
        ProgressAction::BioHistory => {
            let tracker = load_tracker(&db)?;
            println!(
                "{}",
                serde_json::to_string_pretty(tracker.biofeedback_history())?
            );
        }
    }
    Ok(())
}
