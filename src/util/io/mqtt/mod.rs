// src/util/io/mqtt/mod.rs
//! Broker link - subscribes to the telemetry topics and forwards them to the bus

mod options;
mod run;

use std::time::Duration;

use rumqttc::{AsyncClient, QoS};
use tokio::task::JoinHandle;

use crate::{
    config::DashboardConfig,
    dashboard::CommandPublisher,
    error::Result,
    log_info, log_warn,
    util::io::bus::MessageBus,
};

pub use options::{broker_address, build_options, client_id};

/// Requests that can be queued before `try_publish` starts failing.
const REQUEST_CAPACITY: usize = 10;

/// State owned by the event-loop task.
struct MqttLink {
    client: AsyncClient,
    subscriptions: Vec<String>,
    message_bus: MessageBus,
    reconnect_delay: Duration,
    /// Subscribes queued after the latest ConnAck.
    pending_subscribe: Option<JoinHandle<()>>,
}

/// Owned by the app. Publishes commands and stops the link on drop.
pub struct MqttHandle {
    client: AsyncClient,
    task: JoinHandle<()>,
}

impl MqttHandle {
    /// Spawn the event loop. Connection happens on the first poll.
    pub fn start(config: &DashboardConfig, message_bus: MessageBus) -> Self {
        let options = build_options(&config.broker);
        log_info!(
            "Starting broker link to {} as {}",
            broker_address(&config.broker),
            options.client_id()
        );

        let (client, eventloop) = AsyncClient::new(options, REQUEST_CAPACITY);

        let link = MqttLink {
            client: client.clone(),
            subscriptions: config.topics.inbound().iter().map(|t| t.to_string()).collect(),
            message_bus,
            reconnect_delay: config.broker.reconnect_delay(),
            pending_subscribe: None,
        };

        let task = tokio::spawn(link.run(eventloop));

        Self { client, task }
    }
}

impl Drop for MqttHandle {
    fn drop(&mut self) {
        // Best effort, the abort may win the race.
        if let Err(e) = self.client.try_disconnect() {
            log_warn!("Disconnect request failed: {}", e);
        }
        self.task.abort();
    }
}

impl std::fmt::Debug for MqttHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MqttHandle")
            .field("finished", &self.task.is_finished())
            .finish()
    }
}

impl CommandPublisher for MqttHandle {
    fn publish_command(&self, topic: &str, payload: &str) -> Result<()> {
        self.client
            .try_publish(topic, QoS::AtMostOnce, false, payload.as_bytes().to_vec())?;
        Ok(())
    }
}
