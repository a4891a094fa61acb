/// Why the rake ran, classified from the raking-topic payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RakeTrigger {
    Manual,
    Odor,
    Unknown,
}

impl RakeTrigger {
    /// Exact match only; anything else is `Unknown`.
    pub fn classify(payload: &str) -> Self {
        match payload {
            "manual" => RakeTrigger::Manual,
            "odor" => RakeTrigger::Odor,
            _ => RakeTrigger::Unknown,
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            RakeTrigger::Manual => "manually triggered",
            RakeTrigger::Odor => "auto triggered by odor",
            RakeTrigger::Unknown => "triggered by unknown event",
        }
    }
}
