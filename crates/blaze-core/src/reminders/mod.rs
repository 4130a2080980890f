mod schedule;
mod sync;

pub use schedule::{
    default_reminders, weekly_triggers_for, ReminderContent, ReminderSetting, ReminderType,
    WeeklyTrigger,
};
pub use sync::{
    sync_reminders, LocalScheduler, NotificationScheduler, ScheduledNotification, SyncReport,
};
