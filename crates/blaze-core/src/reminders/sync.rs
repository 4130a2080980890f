//! Reminder synchronization.
//!
//! Sync is a full replace: cancel everything, then schedule every
//! trigger of every enabled reminder. The platform scheduler is behind
//! a trait so the procedure can be tested with a fake and so the CLI
//! can back it with a local store.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::schedule::{weekly_triggers_for, ReminderContent, ReminderSetting, WeeklyTrigger};
use crate::error::CapabilityError;
use crate::storage::{keys, Database};

/// Platform notification backend.
pub trait NotificationScheduler {
    /// Ask the platform for notification permission.
    fn request_permission(&mut self) -> Result<bool, CapabilityError>;

    /// Cancel every scheduled notification owned by this app.
    fn cancel_all(&mut self) -> Result<(), CapabilityError>;

    /// Schedule one weekly repeating notification; returns its id.
    fn schedule_weekly(
        &mut self,
        content: ReminderContent,
        trigger: WeeklyTrigger,
    ) -> Result<String, CapabilityError>;

    /// Ids of everything currently scheduled.
    fn scheduled_ids(&self) -> Vec<String>;
}

/// Outcome of one sync pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub cancelled: bool,
    pub scheduled: usize,
    pub failed: usize,
}

/// Replace all scheduled notifications with the triggers of the
/// currently enabled reminders.
///
/// If cancellation fails the pass aborts silently (nothing scheduled,
/// nothing reported as failed) so stale notifications are never
/// duplicated. Individual trigger failures are counted and skipped;
/// one bad trigger never aborts the rest.
pub fn sync_reminders(
    scheduler: &mut dyn NotificationScheduler,
    settings: &[ReminderSetting],
) -> SyncReport {
    if scheduler.cancel_all().is_err() {
        return SyncReport::default();
    }
    let mut report = SyncReport {
        cancelled: true,
        ..SyncReport::default()
    };
    for setting in settings.iter().filter(|s| s.enabled) {
        let content = setting.kind.content();
        for trigger in weekly_triggers_for(setting.kind) {
            match scheduler.schedule_weekly(content, trigger) {
                Ok(_) => report.scheduled += 1,
                Err(_) => report.failed += 1,
            }
        }
    }
    report
}

/// One scheduled notification as persisted by [`LocalScheduler`].
///
/// `weekday` here is Sunday-based (1 = Sunday .. 7 = Saturday), the
/// convention of the mobile notification APIs this mirrors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledNotification {
    pub id: String,
    pub title: String,
    pub body: String,
    pub weekday: u8,
    pub hour: u8,
    pub minute: u8,
}

/// Database-backed scheduler used by the CLI.
///
/// There is no OS notification surface here; the schedule is recorded
/// so `reminders scheduled` can show what a device would have pending.
pub struct LocalScheduler<'a> {
    db: &'a Database,
}

impl<'a> LocalScheduler<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    fn load(&self) -> Vec<ScheduledNotification> {
        self.db
            .load_doc(keys::SCHEDULED_NOTIFICATIONS)
            .ok()
            .flatten()
            .unwrap_or_default()
    }

    fn save(&self, entries: &[ScheduledNotification]) -> Result<(), CapabilityError> {
        self.db
            .save_doc(keys::SCHEDULED_NOTIFICATIONS, &entries)
            .map_err(|e| CapabilityError::ScheduleFailed(e.to_string()))
    }

    pub fn scheduled(&self) -> Vec<ScheduledNotification> {
        self.load()
    }
}

/// ISO weekday (1 = Monday .. 7 = Sunday) to Sunday-based (1 = Sunday).
fn weekday_from_sunday(iso: u8) -> u8 {
    iso % 7 + 1
}

impl NotificationScheduler for LocalScheduler<'_> {
    fn request_permission(&mut self) -> Result<bool, CapabilityError> {
        // The local store needs no permission.
        Ok(true)
    }

    fn cancel_all(&mut self) -> Result<(), CapabilityError> {
        self.save(&[])
    }

    fn schedule_weekly(
        &mut self,
        content: ReminderContent,
        trigger: WeeklyTrigger,
    ) -> Result<String, CapabilityError> {
        let mut entries = self.load();
        let id = Uuid::new_v4().to_string();
        entries.push(ScheduledNotification {
            id: id.clone(),
            title: content.title.to_string(),
            body: content.body.to_string(),
            weekday: weekday_from_sunday(trigger.weekday),
            hour: trigger.hour,
            minute: trigger.minute,
        });
        self.save(&entries)?;
        Ok(id)
    }

    fn scheduled_ids(&self) -> Vec<String> {
        self.load().into_iter().map(|n| n.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reminders::schedule::{default_reminders, MONDAY, SUNDAY};

    #[test]
    fn weekday_conversion_wraps_sunday_first() {
        assert_eq!(weekday_from_sunday(MONDAY), 2);
        assert_eq!(weekday_from_sunday(SUNDAY), 1);
        assert_eq!(weekday_from_sunday(6), 7); // Saturday
    }

    #[test]
    fn local_scheduler_full_sync_schedules_64() {
        let db = Database::open_memory().unwrap();
        let mut scheduler = LocalScheduler::new(&db);
        let report = sync_reminders(&mut scheduler, &default_reminders());
        assert!(report.cancelled);
        assert_eq!(report.scheduled, 64);
        assert_eq!(report.failed, 0);
        assert_eq!(scheduler.scheduled_ids().len(), 64);
    }

    #[test]
    fn resync_replaces_instead_of_accumulating() {
        let db = Database::open_memory().unwrap();
        let mut scheduler = LocalScheduler::new(&db);
        sync_reminders(&mut scheduler, &default_reminders());
        let first: std::collections::HashSet<_> =
            scheduler.scheduled_ids().into_iter().collect();
        sync_reminders(&mut scheduler, &default_reminders());
        let second: std::collections::HashSet<_> =
            scheduler.scheduled_ids().into_iter().collect();
        assert_eq!(second.len(), 64);
        assert!(first.is_disjoint(&second));
    }

    #[test]
    fn disabled_reminders_are_skipped() {
        let db = Database::open_memory().unwrap();
        let mut scheduler = LocalScheduler::new(&db);
        let mut settings = default_reminders();
        for s in &mut settings {
            s.enabled = false;
        }
        let report = sync_reminders(&mut scheduler, &settings);
        assert!(report.cancelled);
        assert_eq!(report.scheduled, 0);
        assert!(scheduler.scheduled_ids().is_empty());
    }
}
