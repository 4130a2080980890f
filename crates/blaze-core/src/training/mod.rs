mod log;
mod plan;

pub use log::{TrainingLogbook, WorkoutLog};
pub use plan::{
    session_by_id, session_for_day, weekly_plan, Exercise, WorkoutSession, WorkoutType,
};
