use chrono::{DateTime, TimeZone};

/// `3:04:05 PM, Mon Oct 19 2026`
pub const LOG_TIME_FORMAT: &str = "%-I:%M:%S %p, %a %b %d %Y";

/// Chart axis labels, e.g. `15:04:05 Oct 19`.
pub const AXIS_TIME_FORMAT: &str = "%H:%M:%S %b %d";

pub fn format_log_time<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    time.format(LOG_TIME_FORMAT).to_string()
}

pub fn format_axis_time<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    time.format(AXIS_TIME_FORMAT).to_string()
}
