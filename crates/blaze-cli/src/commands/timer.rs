use clap::Subcommand;

use blaze_core::haptics::{Haptics, SilentHaptics, PHASE_TRANSITION_MS};
use blaze_core::storage::{keys, Config, Database};
use blaze_core::training::session_by_id;
use blaze_core::{IntervalConfig, IntervalEngine, SessionStopwatch};

#[derive(Subcommand)]
pub enum TimerAction {
    /// Start a new interval timer
    Start {
        /// Number of work rounds
        #[arg(long)]
        rounds: Option<u32>,
        /// Work phase length in seconds
        #[arg(long)]
        work: Option<u32>,
        /// Rest phase length in seconds
        #[arg(long)]
        rest: Option<u32>,
        /// Take the interval shape from a plan session (e.g. hiit-metcon)
        #[arg(long, conflicts_with_all = ["rounds", "work", "rest"])]
        session: Option<String>,
    },
    /// Advance the timer by N elapsed seconds
    Tick {
        #[arg(default_value = "1")]
        seconds: u32,
    },
    /// Print current timer state as JSON
    Status,
    /// Pause or resume
    Toggle,
    /// Return to the initial countdown
    Reset,
    /// Run the timer to completion in real time
    Run,
    /// Start the count-up session stopwatch
    StopwatchStart,
    /// Advance the stopwatch by N elapsed seconds
    StopwatchTick {
        #[arg(default_value = "1")]
        seconds: u32,
    },
    /// Pause or resume the stopwatch
    StopwatchToggle,
    /// Print elapsed time and progress toward the target
    StopwatchStatus,
}

fn load_engine(db: &Database) -> Result<Option<IntervalEngine>, Box<dyn std::error::Error>> {
    Ok(db.load_doc(keys::TIMER_ENGINE)?)
}

fn save_engine(db: &Database, engine: &IntervalEngine) -> Result<(), Box<dyn std::error::Error>> {
    db.save_doc(keys::TIMER_ENGINE, engine)?;
    Ok(())
}

fn require_engine(db: &Database) -> Result<IntervalEngine, Box<dyn std::error::Error>> {
    load_engine(db)?.ok_or_else(|| "no timer started (run `blaze timer start` first)".into())
}

fn signal_transition(config: &Config) {
    if config.notifications.vibration {
        SilentHaptics.vibrate(PHASE_TRANSITION_MS);
    }
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let config = Config::load_or_default();

    match action {
        TimerAction::Start {
            rounds,
            work,
            rest,
            session,
        } => {
            let interval = if let Some(id) = session {
                let session = session_by_id(&id)
                    .ok_or_else(|| format!("unknown plan session '{id}'"))?;
                session
                    .interval_config
                    .ok_or_else(|| format!("session '{id}' has no interval shape"))?
            } else {
                let defaults = config.interval_config()?;
                IntervalConfig::new(
                    rounds.unwrap_or(defaults.rounds()),
                    work.unwrap_or(defaults.work_secs()),
                    rest.unwrap_or(defaults.rest_secs()),
                )?
            };
            let engine = IntervalEngine::new(interval);
            save_engine(&db, &engine)?;
            println!("{}", serde_json::to_string_pretty(&engine.snapshot())?);
        }
        TimerAction::Tick { seconds } => {
            let mut engine = require_engine(&db)?;
            for _ in 0..seconds {
                if let Some(event) = engine.tick() {
                    signal_transition(&config);
                    println!("{}", serde_json::to_string_pretty(&event)?);
                }
            }
            save_engine(&db, &engine)?;
        }
        TimerAction::Status => {
            let engine = require_engine(&db)?;
            println!("{}", serde_json::to_string_pretty(&engine.snapshot())?);
        }
        TimerAction::Toggle => {
            let mut engine = require_engine(&db)?;
            engine.toggle_running();
            save_engine(&db, &engine)?;
            println!("{}", serde_json::to_string_pretty(&engine.snapshot())?);
        }
        TimerAction::Reset => {
            let mut engine = require_engine(&db)?;
            engine.reset();
            save_engine(&db, &engine)?;
            println!("{}", serde_json::to_string_pretty(&engine.snapshot())?);
        }
        TimerAction::Run => {
            let mut engine = require_engine(&db)?;
            if !engine.is_running() {
                println!("timer is paused (run `blaze timer toggle` to resume)");
                println!("{}", serde_json::to_string_pretty(&engine.snapshot())?);
                return Ok(());
            }
            while engine.is_running() {
                std::thread::sleep(std::time::Duration::from_secs(1));
                if let Some(event) = engine.tick() {
                    signal_transition(&config);
                    println!("{}", serde_json::to_string_pretty(&event)?);
                }
            }
            save_engine(&db, &engine)?;
        }
        TimerAction::StopwatchStart => {
            let sw = SessionStopwatch::new(config.timer.stopwatch_target_min * 60);
            db.save_doc(keys::STOPWATCH, &sw)?;
            println!("{} / target {} min", sw.formatted(), config.timer.stopwatch_target_min);
        }
        TimerAction::StopwatchTick { seconds } => {
            let mut sw = require_stopwatch(&db)?;
            for _ in 0..seconds {
                sw.tick();
            }
            db.save_doc(keys::STOPWATCH, &sw)?;
            println!("{}", sw.formatted());
        }
        TimerAction::StopwatchToggle => {
            let mut sw = require_stopwatch(&db)?;
            sw.toggle_running();
            db.save_doc(keys::STOPWATCH, &sw)?;
            println!("{}", if sw.is_running() { "running" } else { "paused" });
        }
        TimerAction::StopwatchStatus => {
            let sw = require_stopwatch(&db)?;
            println!("{}  ({:.0}% of target)", sw.formatted(), sw.progress() * 100.0);
        }
    }
    Ok(())
}

fn require_stopwatch(db: &Database) -> Result<SessionStopwatch, Box<dyn std::error::Error>> {
    db.load_doc(keys::STOPWATCH)?
        .ok_or_else(|| "no stopwatch started (run `blaze timer stopwatch-start` first)".into())
}
