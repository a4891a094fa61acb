use chrono::{DateTime, Local};

/// One usage point on the chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub timestamp: DateTime<Local>,
    pub value: f64,
}

impl Observation {
    /// Only finite values make it onto the chart.
    pub fn new(timestamp: DateTime<Local>, value: f64) -> Option<Self> {
        value.is_finite().then_some(Self { timestamp, value })
    }

    /// X coordinate for the chart.
    pub fn timestamp_millis(&self) -> f64 {
        self.timestamp.timestamp_millis() as f64
    }
}
