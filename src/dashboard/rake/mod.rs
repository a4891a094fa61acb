mod effect;

pub use effect::RakeEffect;

use crate::{config::TopicConfig, error::Result, log_error, log_info};

pub const RAKE_PAYLOAD: &str = "rake";

/// Outbound seam: the MQTT link in production, a recorder in tests.
pub trait CommandPublisher {
    /// Fire-and-forget; must not block the UI loop.
    fn publish_command(&self, topic: &str, payload: &str) -> Result<()>;
}

/// The fixed rake command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RakeCommand {
    pub topic: String,
    pub payload: &'static str,
}

impl RakeCommand {
    pub fn new(topics: &TopicConfig) -> Self {
        Self {
            topic: topics.rake_command.clone(),
            payload: RAKE_PAYLOAD,
        }
    }

    /// Errors are logged, never surfaced; the button animates either way.
    pub fn send(&self, publisher: &dyn CommandPublisher) -> bool {
        match publisher.publish_command(&self.topic, self.payload) {
            Ok(()) => {
                log_info!("Sent '{}' to {}", self.payload, self.topic);
                true
            }
            Err(e) => {
                log_error!("Failed to send rake command: {}", e);
                false
            }
        }
    }
}
