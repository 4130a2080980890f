use clap::Subcommand;

use blaze_core::reminders::{
    default_reminders, sync_reminders, weekly_triggers_for, LocalScheduler, NotificationScheduler,
    ReminderSetting, ReminderType,
};
use blaze_core::storage::{keys, Database};

#[derive(Subcommand)]
pub enum RemindersAction {
    /// Show reminder settings
    List,
    /// Enable a reminder and re-sync
    Enable {
        /// workout, hydration, meal-prep or check-in
        kind: ReminderType,
    },
    /// Disable a reminder and re-sync
    Disable {
        kind: ReminderType,
    },
    /// Replace all scheduled notifications from current settings
    Sync,
    /// Show the weekly trigger table for one reminder
    Preview {
        kind: ReminderType,
    },
    /// Show what is currently scheduled
    Scheduled,
}

fn load_settings(db: &Database) -> Result<Vec<ReminderSetting>, Box<dyn std::error::Error>> {
    Ok(db
        .load_doc(keys::REMINDERS)?
        .unwrap_or_else(default_reminders))
}

fn sync_and_report(
    db: &Database,
    settings: &[ReminderSetting],
) -> Result<(), Box<dyn std::error::Error>> {
    let mut scheduler = LocalScheduler::new(db);
    if !scheduler.request_permission()? {
        return Err("notification permission denied".into());
    }
    let report = sync_reminders(&mut scheduler, settings);
    if !report.cancelled {
        eprintln!("warning: could not cancel existing notifications, nothing changed");
        return Ok(());
    }
    println!("scheduled {} notifications ({} failed)", report.scheduled, report.failed);
    Ok(())
}

pub fn run(action: RemindersAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;

    match action {
        RemindersAction::List => {
            let settings = load_settings(&db)?;
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
        RemindersAction::Enable { kind } => {
            let mut settings = load_settings(&db)?;
            if let Some(s) = settings.iter_mut().find(|s| s.kind == kind) {
                s.enabled = true;
            }
            db.save_doc(keys::REMINDERS, &settings)?;
            sync_and_report(&db, &settings)?;
        }
        RemindersAction::Disable { kind } => {
            let mut settings = load_settings(&db)?;
            if let Some(s) = settings.iter_mut().find(|s| s.kind == kind) {
                s.enabled = false;
            }
            db.save_doc(keys::REMINDERS, &settings)?;
            sync_and_report(&db, &settings)?;
        }
        RemindersAction::Sync => {
            let settings = load_settings(&db)?;
            sync_and_report(&db, &settings)?;
        }
        RemindersAction::Preview { kind } => {
            let content = kind.content();
            println!("{}: {}", content.title, content.body);
            for trigger in weekly_triggers_for(kind) {
                println!(
                    "  weekday {} at {:02}:{:02}",
                    trigger.weekday, trigger.hour, trigger.minute
                );
            }
        }
        RemindersAction::Scheduled => {
            let scheduler = LocalScheduler::new(&db);
            println!("{}", serde_json::to_string_pretty(&scheduler.scheduled())?);
        }
    }
    Ok(())
}
