use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "blaze", version, about = "Blaze 8-week program CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interval timer control
    Timer {
        #[command(subcommand)]
        action: commands::timer::TimerAction,
    },
    /// User profile and program calendar
    Profile {
        #[command(subcommand)]
        action: commands::profile::ProfileAction,
    },
    /// Reminder settings and notification sync
    Reminders {
        #[command(subcommand)]
        action: commands::reminders::RemindersAction,
    },
    /// Water intake tracking
    Hydration {
        #[command(subcommand)]
        action: commands::hydration::HydrationAction,
    },
    /// Weight, measurements and biofeedback
    Progress {
        #[command(subcommand)]
        action: commands::progress::ProgressAction,
    },
    /// Weekly plan and workout logging
    Workout {
        #[command(subcommand)]
        action: commands::workout::WorkoutAction,
    },
    /// Intake logging, meal prep and groceries
    Nutrition {
        #[command(subcommand)]
        action: commands::nutrition::NutritionAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Build webhook relay
    Relay {
        #[command(subcommand)]
        action: commands::relay::RelayAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Timer { action } => commands::timer::run(action),
        Commands::Profile { action } => commands::profile::run(action),
        Commands::Reminders { action } => commands::reminders::run(action),
        Commands::Hydration { action } => commands::hydration::run(action),
        Commands::Progress { action } => commands::progress::run(action),
        Commands::Workout { action } => commands::workout::run(action),
        Commands::Nutrition { action } => commands::nutrition::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Relay { action } => commands::relay::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
