use std::io::Write;
use std::sync::{Arc, Mutex};

use chrono::Local;
use litterbox_dashboard::{
    dashboard::{dispatch, CommandPublisher, DashboardState, Dispatched, RakeTrigger},
    event::{AppEvent, Event, EventHandler},
    util::io::bus::{BusEvent, BusMessage, LinkStatus, MessageBus},
    App, DashboardConfig, DashboardError,
};
use tempfile::NamedTempFile;

#[derive(Clone, Default)]
struct Recorder(Arc<Mutex<Vec<(String, String)>>>);

impl CommandPublisher for Recorder {
    fn publish_command(&self, topic: &str, payload: &str) -> litterbox_dashboard::Result<()> {
        self.0.lock().unwrap().push((topic.to_string(), payload.to_string()));
        Ok(())
    }
}

#[test]
fn test_mixed_traffic_respects_caps() {
    let config = DashboardConfig::default();
    let mut state = DashboardState::from_limits(&config.limits).unwrap();
    let topics = &config.topics;

    let mut charted = 0;
    for i in 0..100 {
        let (topic, payload) = match i % 4 {
            0 => ("ece445/rh", if i % 8 == 0 { "manual" } else { "odor" }),
            1 => ("ece445/odor", "250"),
            2 => ("ece445/weight", "31.5"),
            _ => ("ece445/weight", "scale error"),
        };

        let usage_log_before = state.usage_log.len();
        let series_before = state.usage_series.len();

        match dispatch(&mut state, topics, topic, payload, Local::now()) {
            Some(Dispatched::Usage { charted: true }) => {
                charted += 1;
                assert_eq!(state.usage_series.len(), (series_before + 1).min(10));
                assert_eq!(state.usage_log.len(), (usage_log_before + 1).min(10));
            }
            Some(Dispatched::Usage { charted: false }) => {
                assert_eq!(state.usage_series.len(), series_before);
                assert_eq!(state.usage_log.len(), (usage_log_before + 1).min(10));
            }
            Some(Dispatched::Raking(trigger)) => {
                assert_ne!(trigger, RakeTrigger::Unknown);
            }
            Some(Dispatched::Odor) => {}
            None => panic!("{} should be handled", topic),
        }

        assert!(state.raking_log.len() <= 3);
        assert!(state.usage_log.len() <= 10);
        assert!(state.usage_series.len() <= 10);
    }

    assert_eq!(charted, 25);
    assert_eq!(state.usage_series.len(), 10);
    assert_eq!(state.raking_log.len(), 3);
    assert_eq!(state.odor_level.get(), Some("250"));
}

#[test]
fn test_config_file_drives_topics_and_caps() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
topics:
  raking: "box/rake-events"
  odor: "box/odor"
  usage: "box/usage"
  rake_command: "box/rake"
limits:
  raking_log_entries: 5
"#
    )
    .unwrap();

    let config = DashboardConfig::load_from_path(file.path()).unwrap();
    let mut state = DashboardState::from_limits(&config.limits).unwrap();

    for _ in 0..8 {
        dispatch(&mut state, &config.topics, "box/rake-events", "manual", Local::now());
    }
    assert_eq!(state.raking_log.len(), 5);

    // The stock topics no longer route anywhere.
    assert_eq!(dispatch(&mut state, &config.topics, "ece445/rh", "manual", Local::now()), None);
}

#[test]
fn test_invalid_config_file_lists_fields() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "limits:\n  usage_chart_points: 0\n  usage_log_entries: 0\n").unwrap();

    match DashboardConfig::load_from_path(file.path()) {
        Err(DashboardError::ConfigError(errors)) => {
            let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
            assert_eq!(fields, vec!["limits.usage_chart_points", "limits.usage_log_entries"]);
        }
        other => panic!("expected config error, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test(start_paused = true)]
async fn test_rake_round_trip_through_app() {
    let recorder = Recorder::default();
    let (bus, rx) = MessageBus::new();
    let mut app = App::with_parts(
        DashboardConfig::default(),
        Box::new(recorder.clone()),
        rx,
        EventHandler::detached(),
    )
    .unwrap();

    bus.report_link(LinkStatus::Connected).unwrap();
    bus.publish(BusMessage::new("ece445/rh", "odor")).unwrap();
    while let Ok(event) = app.bus_receiver.try_recv() {
        app.handle_bus_event(event);
    }
    assert_eq!(app.link_status, LinkStatus::Connected);
    assert!(app
        .state
        .raking_log
        .newest()
        .unwrap()
        .text
        .contains("auto triggered by odor"));

    // Two quick presses: two commands, one highlight reset.
    app.handle_event(Event::App(AppEvent::Rake)).unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(300)).await;
    app.handle_event(Event::App(AppEvent::Rake)).unwrap();
    assert_eq!(recorder.0.lock().unwrap().len(), 2);
    assert!(app.rake_effect.is_active());

    tokio::time::sleep(std::time::Duration::from_millis(1000)).await;
    let event = app.events.next().await.unwrap();
    assert!(matches!(event, Event::App(AppEvent::RakeEffectElapsed(_))));
    assert!(app.handle_event(event).unwrap());
    assert!(!app.rake_effect.is_active());

    drop(bus);
    assert!(matches!(app.bus_receiver.recv().await, None));
}

#[test]
fn test_bus_event_is_plain_data() {
    let message = BusMessage::new("ece445/odor", "3");
    assert_eq!(BusEvent::Message(message.clone()), BusEvent::Message(message));
}
