use chrono::{DateTime, Local};

use crate::{
    dashboard::{timestamp::format_log_time, DashboardState, LogEntry, Observation},
    log_debug,
};

use super::parse_seconds;

impl DashboardState {
    /// Charts the point if the payload parses; always logs the raw text.
    /// Returns whether a point was charted.
    pub(super) fn record_usage(&mut self, payload: &str, now: DateTime<Local>) -> bool {
        let observation = parse_seconds(payload).and_then(|seconds| Observation::new(now, seconds));

        let charted = match observation {
            Some(observation) => {
                self.usage_series.push(observation);
                true
            }
            None => {
                log_debug!("Usage payload {:?} is not a number, skipping chart", payload);
                false
            }
        };

        let line = format!("Used for {} seconds at {}", payload, format_log_time(&now));
        self.usage_log.push(LogEntry::new(line));

        charted
    }
}
