use chrono::{Datelike, Local, NaiveDate};
use clap::Subcommand;

use blaze_core::storage::{keys, Database};
use blaze_core::training::{
    session_by_id, session_for_day, weekly_plan, TrainingLogbook, WorkoutSession,
};

#[derive(Subcommand)]
pub enum WorkoutAction {
    /// The full weekly plan
    Plan,
    /// Today's session
    Today,
    /// One session by id (e.g. strength-a)
    Show {
        id: String,
    },
    /// Record a completed (or skipped) session
    Log {
        /// Plan session id
        session: String,
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Mark as skipped rather than completed
        #[arg(long)]
        skipped: bool,
        #[arg(long, default_value = "")]
        notes: String,
        /// Session RPE, 1-10
        #[arg(long)]
        rpe: Option<u8>,
    },
    /// Logs for the week containing a date
    Week {
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Count of completed sessions
    Completed,
}

fn load_logbook(db: &Database) -> Result<TrainingLogbook, Box<dyn std::error::Error>> {
    Ok(db.load_doc(keys::WORKOUT_LOGS)?.unwrap_or_default())
}

fn print_session(session: &WorkoutSession) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(session)?);
    Ok(())
}

pub fn run(action: WorkoutAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let today = Local::now().date_naive();

    match action {
        WorkoutAction::Plan => {
            for session in weekly_plan() {
                println!(
                    "{}  {:<14}  {} min  {}",
                    session.day_of_week, session.id, session.duration_min, session.title
                );
            }
        }
        WorkoutAction::Today => {
            let weekday = today.weekday().number_from_monday() as u8;
            let session = session_for_day(weekday)
                .ok_or_else(|| format!("no session for weekday {weekday}"))?;
            print_session(&session)?;
        }
        WorkoutAction::Show { id } => {
            let session =
                session_by_id(&id).ok_or_else(|| format!("unknown plan session '{id}'"))?;
            print_session(&session)?;
        }
        WorkoutAction::Log {
            session,
            date,
            skipped,
            notes,
            rpe,
        } => {
            if session_by_id(&session).is_none() {
                return Err(format!("unknown plan session '{session}'").into());
            }
            let mut log = load_logbook(&db)?;
            let id = log.add(&session, date.unwrap_or(today), !skipped, &notes, rpe)?;
            db.save_doc(keys::WORKOUT_LOGS, &log)?;
            println!("logged {session} (id {id})");
        }
        WorkoutAction::Week { date } => {
            let log = load_logbook(&db)?;
            let week = log.for_week(date.unwrap_or(today));
            println!("{}", serde_json::to_string_pretty(&week)?);
        }
        WorkoutAction::Completed => {
            let log = load_logbook(&db)?;
            println!("{} sessions completed", log.completed_count());
        }
    }
    Ok(())
}
