mod parse_seconds;
mod record_raking_event;
mod record_usage;
mod update_odor_level;

use chrono::{DateTime, Local};

use crate::{config::TopicConfig, log_debug};

use super::{DashboardState, RakeTrigger};

pub use parse_seconds::parse_seconds;

/// The three inbound topics the dashboard understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Raking,
    Odor,
    Usage,
}

impl Topic {
    pub fn resolve(topics: &TopicConfig, name: &str) -> Option<Self> {
        if name == topics.raking {
            Some(Topic::Raking)
        } else if name == topics.odor {
            Some(Topic::Odor)
        } else if name == topics.usage {
            Some(Topic::Usage)
        } else {
            None
        }
    }
}

/// What a dispatched message changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatched {
    Raking(RakeTrigger),
    Odor,
    /// `charted` is false when the payload was not a finite number.
    Usage { charted: bool },
}

/// Route one inbound message to its handler. Unknown topics change nothing.
pub fn dispatch(
    state: &mut DashboardState,
    topics: &TopicConfig,
    topic: &str,
    payload: &str,
    now: DateTime<Local>,
) -> Option<Dispatched> {
    let Some(resolved) = Topic::resolve(topics, topic) else {
        log_debug!("Ignoring message on unhandled topic '{}'", topic);
        return None;
    };

    let outcome = match resolved {
        Topic::Raking => Dispatched::Raking(state.record_raking_event(payload, now)),
        Topic::Odor => {
            state.update_odor_level(payload);
            Dispatched::Odor
        }
        Topic::Usage => Dispatched::Usage { charted: state.record_usage(payload, now) },
    };

    log_debug!("Dispatched '{}' on {}: {:?}", payload, topic, outcome);
    Some(outcome)
}
