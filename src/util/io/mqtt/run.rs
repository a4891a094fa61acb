use rumqttc::{Event, EventLoop, Packet, QoS, SubscribeFilter};

use crate::{
    error::Result,
    log_debug, log_error, log_info, log_warn,
    util::io::bus::{BusMessage, LinkStatus},
};

use super::MqttLink;

impl MqttLink {
    /// Poll until the app drops the bus receiver. Reconnecting is left to
    /// rumqttc: after an error the next poll dials again.
    pub(super) async fn run(mut self, mut eventloop: EventLoop) {
        let _ = self.message_bus.report_link(LinkStatus::Connecting);

        loop {
            let outcome = match eventloop.poll().await {
                Ok(event) => self.on_event(event),
                Err(e) => {
                    self.cancel_pending_subscribe();
                    log_error!("Connection lost: {}", e);
                    let reported = self
                        .message_bus
                        .report_link(LinkStatus::Disconnected(e.to_string()));
                    if reported.is_ok() {
                        tokio::time::sleep(self.reconnect_delay).await;
                        self.message_bus.report_link(LinkStatus::Connecting)
                    } else {
                        reported
                    }
                }
            };

            if outcome.is_err() {
                log_info!("Bus closed, stopping broker link");
                break;
            }
        }

        self.cancel_pending_subscribe();
    }

    pub(super) fn on_event(&mut self, event: Event) -> Result<()> {
        match event {
            Event::Incoming(Packet::ConnAck(ack)) => {
                log_info!("Connected to broker ({:?}), subscribing", ack.code);
                self.spawn_subscribe();
                Ok(())
            }
            Event::Incoming(Packet::Publish(publish)) => {
                let payload = String::from_utf8_lossy(&publish.payload).into_owned();
                log_debug!("📨 {} <- {}", publish.topic, payload);
                self.message_bus.publish(BusMessage::new(publish.topic, payload))
            }
            Event::Incoming(Packet::SubAck(ack)) => {
                log_debug!("Subscription acknowledged: {:?}", ack.return_codes);
                Ok(())
            }
            Event::Incoming(Packet::Disconnect) => {
                log_warn!("Broker sent disconnect");
                self.message_bus
                    .report_link(LinkStatus::Disconnected("broker sent disconnect".to_string()))
            }
            _ => Ok(()),
        }
    }

    /// Re-run on every ConnAck; a fresh session has no subscriptions.
    ///
    /// The request queue is shared with rake commands and only drains while
    /// `poll` runs, so the subscribe waits for room in its own task and the
    /// link reports `Connected` once it is queued.
    fn spawn_subscribe(&mut self) {
        self.cancel_pending_subscribe();

        let client = self.client.clone();
        let message_bus = self.message_bus.clone();
        let topics = self.subscriptions.clone();

        self.pending_subscribe = Some(tokio::spawn(async move {
            let filters = topics
                .iter()
                .map(|topic| SubscribeFilter::new(topic.clone(), QoS::AtMostOnce));

            match client.subscribe_many(filters).await {
                Ok(()) => {
                    log_info!("Subscribed to {}", topics.join(", "));
                    let _ = message_bus.report_link(LinkStatus::Connected);
                }
                Err(e) => {
                    log_error!("Failed to subscribe to {}: {}", topics.join(", "), e);
                    let _ = message_bus
                        .report_link(LinkStatus::Disconnected(format!("subscribe failed: {}", e)));
                }
            }
        }));
    }

    fn cancel_pending_subscribe(&mut self) {
        if let Some(handle) = self.pending_subscribe.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use rumqttc::{AsyncClient, ConnAck, ConnectReturnCode, MqttOptions, Publish};
    use tokio::time::timeout;

    use super::*;
    use crate::util::io::bus::{BusEvent, BusReceiver, MessageBus};

    fn link(host: &str, port: u16) -> (MqttLink, EventLoop, BusReceiver) {
        let (message_bus, rx) = MessageBus::new();
        let (client, eventloop) = AsyncClient::new(MqttOptions::new("test", host, port), 10);
        let link = MqttLink {
            client,
            subscriptions: vec!["ece445/rh".into(), "ece445/odor".into(), "ece445/weight".into()],
            message_bus,
            reconnect_delay: Duration::from_millis(2000),
            pending_subscribe: None,
        };
        (link, eventloop, rx)
    }

    async fn next_event(rx: &mut BusReceiver) -> Option<BusEvent> {
        timeout(Duration::from_secs(60), rx.recv())
            .await
            .expect("no bus event within a minute")
    }

    fn connack() -> Event {
        let ack = ConnAck { session_present: false, code: ConnectReturnCode::Success };
        Event::Incoming(Packet::ConnAck(ack))
    }

    #[tokio::test]
    async fn test_connack_reports_connected_after_subscribe() {
        let (mut link, _eventloop, mut rx) = link("localhost", 1883);

        link.on_event(connack()).unwrap();

        let event = timeout(Duration::from_secs(5), rx.recv()).await.unwrap();
        assert_eq!(event, Some(BusEvent::Link(LinkStatus::Connected)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_full_request_queue_delays_connected() {
        let (mut link, _eventloop, mut rx) = link("localhost", 1883);

        // Rake presses while the link was down.
        for _ in 0..10 {
            link.client.try_publish("ece445/rake", QoS::AtMostOnce, false, "rake").unwrap();
        }

        link.on_event(connack()).unwrap();

        // The subscribe is still waiting for room, so the header must not claim Connected.
        assert!(timeout(Duration::from_secs(30), rx.recv()).await.is_err());
        assert!(link.pending_subscribe.as_ref().is_some_and(|h| !h.is_finished()));
    }

    #[tokio::test]
    async fn test_subscribe_failure_reports_disconnected() {
        let (mut link, eventloop, mut rx) = link("localhost", 1883);
        drop(eventloop);

        link.on_event(connack()).unwrap();

        match timeout(Duration::from_secs(5), rx.recv()).await.unwrap() {
            Some(BusEvent::Link(LinkStatus::Disconnected(reason))) => {
                assert!(reason.starts_with("subscribe failed"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_publish_forwarded_to_bus() {
        let (mut link, _eventloop, mut rx) = link("localhost", 1883);

        let publish = Publish::new("ece445/weight", QoS::AtMostOnce, "12.5");
        link.on_event(Event::Incoming(Packet::Publish(publish))).unwrap();

        match rx.recv().await {
            Some(BusEvent::Message(msg)) => {
                assert_eq!(msg.topic, "ece445/weight");
                assert_eq!(msg.payload, "12.5");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_lossy() {
        let (mut link, _eventloop, mut rx) = link("localhost", 1883);

        let publish = Publish::new("ece445/odor", QoS::AtMostOnce, vec![0x34, 0xff]);
        link.on_event(Event::Incoming(Packet::Publish(publish))).unwrap();

        match rx.recv().await {
            Some(BusEvent::Message(msg)) => assert_eq!(msg.payload, "4\u{fffd}"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_closed_bus_stops_link() {
        let (mut link, _eventloop, rx) = link("localhost", 1883);
        drop(rx);

        let publish = Publish::new("ece445/odor", QoS::AtMostOnce, "1");
        assert!(link.on_event(Event::Incoming(Packet::Publish(publish))).is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_connection_loss_backs_off_and_retries() {
        let (link, eventloop, mut rx) = link("127.0.0.1", 1);
        let task = tokio::spawn(link.run(eventloop));

        assert_eq!(next_event(&mut rx).await, Some(BusEvent::Link(LinkStatus::Connecting)));
        assert!(matches!(
            next_event(&mut rx).await,
            Some(BusEvent::Link(LinkStatus::Disconnected(_)))
        ));
        assert_eq!(next_event(&mut rx).await, Some(BusEvent::Link(LinkStatus::Connecting)));
        assert!(matches!(
            next_event(&mut rx).await,
            Some(BusEvent::Link(LinkStatus::Disconnected(_)))
        ));

        // Dropping the receiver is how the app tells the link to stop.
        drop(rx);
        timeout(Duration::from_secs(60), task).await.unwrap().unwrap();
    }
}
