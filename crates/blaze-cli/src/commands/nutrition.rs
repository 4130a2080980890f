use chrono::{Local, NaiveDate};
use clap::Subcommand;

use blaze_core::nutrition::{sample_meal_plan, NutritionLog, NutritionTracker};
use blaze_core::storage::{keys, Config, Database};

#[derive(Subcommand)]
pub enum NutritionAction {
    /// Record a day's intake (overwrites the same date)
    Log {
        #[arg(long)]
        calories: u32,
        #[arg(long)]
        protein: u32,
        #[arg(long)]
        carbs: u32,
        #[arg(long)]
        fat: u32,
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Today's intake against the targets
    Today,
    /// Show macro targets
    Targets,
    /// The sample day of eating
    Plan,
    /// Meal prep checklist
    Prep,
    /// Flip one prep item by id (e.g. prep-3)
    TogglePrep {
        id: String,
    },
    /// Uncheck every prep item
    ResetPrep,
    /// Grocery list
    Grocery,
    /// Flip one grocery item by id (e.g. g-12)
    ToggleGrocery {
        id: String,
    },
    /// Uncheck every grocery item
    ResetGrocery,
}

fn load_tracker(db: &Database) -> Result<NutritionTracker, Box<dyn std::error::Error>> {
    Ok(db
        .load_doc(keys::NUTRITION)?
        .unwrap_or_else(NutritionTracker::new_with_defaults))
}

fn save_tracker(db: &Database, tracker: &NutritionTracker) -> Result<(), Box<dyn std::error::Error>> {
    db.save_doc(keys::NUTRITION, tracker)?;
    Ok(())
}

pub fn run(action: NutritionAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let today = Local::now().date_naive();

    match action {
        NutritionAction::Log {
            calories,
            protein,
            carbs,
            fat,
            date,
        } => {
            let mut tracker = load_tracker(&db)?;
            let date = date.unwrap_or(today);
            tracker.log(NutritionLog {
                date,
                calories,
                protein_g: protein,
                carbs_g: carbs,
                fat_g: fat,
            });
            save_tracker(&db, &tracker)?;
            println!("logged {calories} kcal on {date}");
        }
        NutritionAction::Today => {
            let tracker = load_tracker(&db)?;
            let targets = Config::load_or_default().macro_targets();
            match tracker.log_for(today) {
                Some(log) => println!(
                    "{} / {} kcal   P {} / {} g   C {} / {} g   F {} / {} g",
                    log.calories,
                    targets.calories,
                    log.protein_g,
                    targets.protein_g,
                    log.carbs_g,
                    targets.carbs_g,
                    log.fat_g,
                    targets.fat_g,
                ),
                None => println!("nothing logged today"),
            }
        }
        NutritionAction::Targets => {
            let targets = Config::load_or_default().macro_targets();
            println!("{}", serde_json::to_string_pretty(&targets)?);
        }
        NutritionAction::Plan => {
            for meal in sample_meal_plan() {
                println!(
                    "{:<26} {:>4} kcal  P {:>3}  C {:>3}  F {:>3}   {}",
                    meal.name, meal.calories, meal.protein_g, meal.carbs_g, meal.fat_g,
                    meal.description
                );
            }
        }
        NutritionAction::Prep => {
            let tracker = load_tracker(&db)?;
            for item in tracker.meal_prep() {
                let mark = if item.completed { "x" } else { " " };
                println!("[{mark}] {:<8} {}", item.id, item.name);
            }
        }
        NutritionAction::TogglePrep { id } => {
            let mut tracker = load_tracker(&db)?;
            if !tracker.toggle_meal_prep(&id) {
                return Err(format!("no prep item with id '{id}'").into());
            }
            save_tracker(&db, &tracker)?;
        }
        NutritionAction::ResetPrep => {
            let mut tracker = load_tracker(&db)?;
            tracker.reset_meal_prep();
            save_tracker(&db, &tracker)?;
            println!("prep checklist reset");
        }
        NutritionAction::Grocery => {
            let tracker = load_tracker(&db)?;
            for item in tracker.grocery() {
                let mark = if item.checked { "x" } else { " " };
                println!("[{mark}] {:<6} {:<28} {:<14} {}", item.id, item.name, item.quantity, item.category);
            }
        }
        NutritionAction::ToggleGrocery { id } => {
            let mut tracker = load_tracker(&db)?;
            if !tracker.toggle_grocery(&id) {
                return Err(format!("no grocery item with id '{id}'").into());
            }
            save_tracker(&db, &tracker)?;
        }
        NutritionAction::ResetGrocery => {
            let mut tracker = load_tracker(&db)?;
            tracker.reset_grocery();
            save_tracker(&db, &tracker)?;
            println!("grocery list reset");
        }
    }
    Ok(())
}
