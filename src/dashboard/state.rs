use std::num::NonZeroUsize;

use crate::config::LimitsConfig;

use super::{LogEntry, Observation, OdorLevel, RollingSeries};

/// Everything the dashboard shows. Owned by the app loop, passed to render.
#[derive(Debug, Clone)]
pub struct DashboardState {
    pub usage_series: RollingSeries<Observation>,
    pub usage_log: RollingSeries<LogEntry>,
    pub raking_log: RollingSeries<LogEntry>,
    pub odor_level: OdorLevel,
}

impl DashboardState {
    pub fn new(
        usage_points: NonZeroUsize,
        usage_log_entries: NonZeroUsize,
        raking_log_entries: NonZeroUsize,
    ) -> Self {
        Self {
            usage_series: RollingSeries::new(usage_points),
            usage_log: RollingSeries::new(usage_log_entries),
            raking_log: RollingSeries::new(raking_log_entries),
            odor_level: OdorLevel::default(),
        }
    }

    /// `None` if any capacity is zero; validated configs never are.
    pub fn from_limits(limits: &LimitsConfig) -> Option<Self> {
        Some(Self::new(
            NonZeroUsize::new(limits.usage_chart_points)?,
            NonZeroUsize::new(limits.usage_log_entries)?,
            NonZeroUsize::new(limits.raking_log_entries)?,
        ))
    }
}

const fn non_zero(n: usize) -> NonZeroUsize {
    match NonZeroUsize::new(n) {
        Some(n) => n,
        None => panic!("capacity must be positive"),
    }
}

pub const USAGE_CHART_POINTS: NonZeroUsize = non_zero(10);
pub const USAGE_LOG_ENTRIES: NonZeroUsize = non_zero(10);
pub const RAKING_LOG_ENTRIES: NonZeroUsize = non_zero(3);

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(USAGE_CHART_POINTS, USAGE_LOG_ENTRIES, RAKING_LOG_ENTRIES)
    }
}
