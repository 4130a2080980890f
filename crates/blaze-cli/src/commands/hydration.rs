use chrono::{Local, NaiveDate};
use clap::Subcommand;

use blaze_core::hydration::HydrationLogbook;
use blaze_core::storage::{keys, Config, Database};

#[derive(Subcommand)]
pub enum HydrationAction {
    /// Log a drink
    Log {
        /// Amount in ml
        quantity: u32,
        /// Date (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Today's total against the target
    Today,
    /// Consecutive days at or above the target
    Streak,
    /// Daily totals for the last N days
    History {
        #[arg(default_value = "7")]
        days: u32,
    },
    /// Remove one entry by id
    Remove {
        id: String,
    },
}

fn load_logbook(db: &Database) -> Result<HydrationLogbook, Box<dyn std::error::Error>> {
    Ok(db.load_doc(keys::HYDRATION)?.unwrap_or_default())
}

/// Target from the profile when one exists, else the config default.
fn target_ml(db: &Database) -> u32 {
    db.load_doc::<blaze_core::UserProfile>(keys::PROFILE)
        .ok()
        .flatten()
        .map(|p| p.hydration_target_ml)
        .unwrap_or_else(|| Config::load_or_default().targets.hydration_ml)
}

pub fn run(action: HydrationAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let today = Local::now().date_naive();

    match action {
        HydrationAction::Log { quantity, date } => {
            let mut log = load_logbook(&db)?;
            let date = date.unwrap_or(today);
            let id = log.add_entry(date, quantity);
            db.save_doc(keys::HYDRATION, &log)?;
            println!("logged {quantity} ml on {date} (id {id})");
        }
        HydrationAction::Today => {
            let log = load_logbook(&db)?;
            let total = log.total_for(today);
            let target = target_ml(&db);
            println!("{total} / {target} ml");
        }
        HydrationAction::Streak => {
            let log = load_logbook(&db)?;
            let streak = log.streak(target_ml(&db), today);
            println!("{streak} day streak");
        }
        HydrationAction::History { days } => {
            let log = load_logbook(&db)?;
            for day in log.history(days, today) {
                println!("{}  {} ml", day.date, day.total_ml);
            }
        }
        HydrationAction::Remove { id } => {
            let mut log = load_logbook(&db)?;
            if !log.remove_entry(&id) {
                return Err(format!("no hydration entry with id '{id}'").into());
            }
            db.save_doc(keys::HYDRATION, &log)?;
            println!("removed {id}");
        }
    }
    Ok(())
}
