use chrono::{Local, NaiveDate};
use clap::Subcommand;

use blaze_core::reminders::default_reminders;
use blaze_core::storage::{keys, Database};
use blaze_core::UserProfile;

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Create the profile and start the 8-week program
    Init {
        /// Program start date (YYYY-MM-DD, default today)
        #[arg(long)]
        start_date: Option<NaiveDate>,
        /// Starting bodyweight in kg
        #[arg(long)]
        start_weight: f64,
        /// Goal bodyweight in kg
        #[arg(long)]
        goal_weight: f64,
        /// Daily calorie target
        #[arg(long, default_value = "2200")]
        calories: u32,
        /// Daily protein target in grams
        #[arg(long, default_value = "180")]
        protein: u32,
        /// Daily carb target in grams
        #[arg(long, default_value = "200")]
        carbs: u32,
        /// Daily fat target in grams
        #[arg(long, default_value = "70")]
        fat: u32,
        /// Daily hydration target in ml
        #[arg(long, default_value = "3000")]
        hydration: u32,
    },
    /// Print the profile as JSON
    Show,
    /// Print the current program week
    Week,
    /// Delete all app data and restore defaults
    Reset,
}

pub fn load_profile(db: &Database) -> Result<UserProfile, Box<dyn std::error::Error>> {
    db.load_doc(keys::PROFILE)?
        .ok_or_else(|| "no profile (run `blaze profile init` first)".into())
}

pub fn run(action: ProfileAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;

    match action {
        ProfileAction::Init {
            start_date,
            start_weight,
            goal_weight,
            calories,
            protein,
            carbs,
            fat,
            hydration,
        } => {
            if db.kv_get(keys::PROFILE)?.is_some() {
                return Err("profile already exists (use `blaze profile reset` first)".into());
            }
            let start = start_date.unwrap_or_else(|| Local::now().date_naive());
            let profile = UserProfile::new(
                start,
                start_weight,
                goal_weight,
                calories,
                protein,
                carbs,
                fat,
                hydration,
            );
            db.save_doc(keys::PROFILE, &profile)?;
            db.save_doc(keys::REMINDERS, &default_reminders())?;
            println!("{}", serde_json::to_string_pretty(&profile)?);
        }
        ProfileAction::Show => {
            let profile = load_profile(&db)?;
            println!("{}", serde_json::to_string_pretty(&profile)?);
        }
        ProfileAction::Week => {
            let profile = load_profile(&db)?;
            let today = Local::now().date_naive();
            println!(
                "week {} of {}",
                profile.program_week(today),
                blaze_core::profile::PROGRAM_WEEKS
            );
        }
        ProfileAction::Reset => {
            db.clear()?;
            db.save_doc(keys::REMINDERS, &default_reminders())?;
            println!("all data cleared");
        }
    }
    Ok(())
}
