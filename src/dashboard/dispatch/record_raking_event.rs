use chrono::{DateTime, Local};

use crate::dashboard::{timestamp::format_log_time, DashboardState, LogEntry, RakeTrigger};

impl DashboardState {
    pub(super) fn record_raking_event(&mut self, payload: &str, now: DateTime<Local>) -> RakeTrigger {
        let trigger = RakeTrigger::classify(payload);
        let line = format!("{} ({})", format_log_time(&now), trigger.describe());
        self.raking_log.push(LogEntry::new(line));
        trigger
    }
}
