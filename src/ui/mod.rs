mod event_log;
mod header;
mod rake_button;
mod style;
pub mod usage_chart;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Widget,
};

use crate::{
    app::App,
    config::TopicConfig,
    dashboard::DashboardState,
    util::io::bus::LinkStatus,
};

/// Everything a frame needs, borrowed from the app.
pub struct ViewData<'a> {
    pub state: &'a DashboardState,
    pub link_status: &'a LinkStatus,
    pub topics: &'a TopicConfig,
    pub rake_active: bool,
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let view = ViewData {
            state: &self.state,
            link_status: &self.link_status,
            topics: &self.config.topics,
            rake_active: self.rake_effect.is_active(),
        };
        render_dashboard(&view, area, buf);
    }
}

pub fn render_dashboard(view: &ViewData, area: Rect, buf: &mut Buffer) {
    let log_rows = view.state.usage_log.capacity().max(view.state.raking_log.capacity());
    let log_height = u16::try_from(log_rows).unwrap_or(u16::MAX).saturating_add(2);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),          // Header
            Constraint::Min(8),             // Chart
            Constraint::Length(log_height), // Event logs
            Constraint::Length(3),          // Rake button
            Constraint::Length(1),          // Key hints
        ])
        .split(area);

    header::render_header(view, chunks[0], buf);
    usage_chart::render_usage_chart(&view.state.usage_series, chunks[1], buf);

    let logs = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[2]);

    event_log::render_event_log("Usage Events", &view.state.usage_log, logs[0], buf);
    event_log::render_event_log("Raking Events", &view.state.raking_log, logs[1], buf);

    rake_button::render_rake_button(view.rake_active, &view.topics.rake_command, chunks[3], buf);
    rake_button::render_key_hints(chunks[4], buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::DashboardConfig,
        dashboard::{dispatch, rake::testing::RecordingPublisher},
        event::EventHandler,
        util::io::bus::MessageBus,
    };
    use chrono::Local;

    fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        let mut out = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn app() -> App {
        app_with(DashboardConfig::default())
    }

    fn app_with(config: DashboardConfig) -> App {
        let (_bus, rx) = MessageBus::new();
        App::with_parts(
            config,
            Box::new(RecordingPublisher::default()),
            rx,
            EventHandler::detached(),
        )
        .unwrap()
    }

    #[test]
    fn test_renders_empty_dashboard() {
        let app = app();
        let area = Rect::new(0, 0, 100, 40);
        let mut buf = Buffer::empty(area);

        (&app).render(area, &mut buf);
        let text = buffer_text(&buf);

        assert!(text.contains("Litter Box Controller"));
        assert!(text.contains("Odor level: --"));
        assert!(text.contains("connecting"));
        assert!(text.contains("RAKE"));
        assert!(text.contains("No events yet"));
    }

    #[test]
    fn test_renders_logs_newest_first() {
        let mut app = app();
        let topics = app.config.topics.clone();
        dispatch(&mut app.state, &topics, "ece445/weight", "12.5", Local::now());
        dispatch(&mut app.state, &topics, "ece445/weight", "abc", Local::now());
        dispatch(&mut app.state, &topics, "ece445/odor", "7", Local::now());
        dispatch(&mut app.state, &topics, "ece445/rh", "odor", Local::now());

        let area = Rect::new(0, 0, 160, 40);
        let mut buf = Buffer::empty(area);
        (&app).render(area, &mut buf);
        let text = buffer_text(&buf);

        assert!(text.contains("Odor level: 7"));
        assert!(text.contains("auto triggered by odor"));

        let newer = text.find("Used for abc seconds").expect("abc entry missing");
        let older = text.find("Used for 12.5 seconds").expect("12.5 entry missing");
        assert!(newer < older, "usage log is not newest-first");
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut app = app();
        let topics = app.config.topics.clone();
        for v in 0..20 {
            dispatch(&mut app.state, &topics, "ece445/weight", &v.to_string(), Local::now());
        }

        let area = Rect::new(0, 0, 10, 5);
        let mut buf = Buffer::empty(area);
        (&app).render(area, &mut buf);
    }

    #[test]
    fn test_huge_log_capacity_does_not_panic() {
        // with_parts skips config validation, so the cap can exceed what fits on screen.
        let mut config = DashboardConfig::default();
        config.limits.raking_log_entries = 65535;
        let mut app = app_with(config);
        let topics = app.config.topics.clone();
        dispatch(&mut app.state, &topics, "ece445/rh", "manual", Local::now());

        let area = Rect::new(0, 0, 100, 40);
        let mut buf = Buffer::empty(area);
        (&app).render(area, &mut buf);
    }
}
