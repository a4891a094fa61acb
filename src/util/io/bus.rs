use tokio::sync::mpsc;

use crate::error::{DashboardError, Result};

/// A message received from the broker.
#[derive(Debug, Clone, PartialEq)]
pub struct BusMessage {
    pub topic: String,
    pub payload: String,
}

impl BusMessage {
    pub fn new(topic: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            payload: payload.into(),
        }
    }
}

/// Broker connection state, for the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkStatus {
    Connecting,
    Connected,
    Disconnected(String),
}

impl LinkStatus {
    pub fn label(&self) -> String {
        match self {
            LinkStatus::Connecting => "connecting".to_string(),
            LinkStatus::Connected => "connected".to_string(),
            LinkStatus::Disconnected(reason) => format!("disconnected: {}", reason),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BusEvent {
    Message(BusMessage),
    Link(LinkStatus),
}

pub type BusReceiver = mpsc::UnboundedReceiver<BusEvent>;
pub type BusSender = mpsc::UnboundedSender<BusEvent>;

/// Carries broker traffic into the app loop.
#[derive(Debug, Clone)]
pub struct MessageBus {
    sender: BusSender,
}

impl MessageBus {
    pub fn new() -> (Self, BusReceiver) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }

    pub fn publish(&self, message: BusMessage) -> Result<()> {
        self.send(BusEvent::Message(message))
    }

    pub fn report_link(&self, status: LinkStatus) -> Result<()> {
        self.send(BusEvent::Link(status))
    }

    fn send(&self, event: BusEvent) -> Result<()> {
        self.sender
            .send(event)
            .map_err(|e| DashboardError::ChannelError(format!("bus receiver dropped: {:?}", e.0)))
    }
}
