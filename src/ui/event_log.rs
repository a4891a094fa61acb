use ratatui::{
    buffer::Buffer,
    layout::Rect,
    prelude::{Color, Style, Widget},
    widgets::{Block, Borders, List, ListItem},
};

use crate::dashboard::{LogEntry, RollingSeries};

use super::style::dim;

/// Newest entry on top.
pub(super) fn render_event_log(title: &str, log: &RollingSeries<LogEntry>, area: Rect, buf: &mut Buffer) {
    let items: Vec<ListItem> = if log.is_empty() {
        vec![ListItem::new("No events yet").style(dim(Style::default().fg(Color::DarkGray)))]
    } else {
        log.iter_newest_first()
            .map(|entry| ListItem::new(entry.text.as_str()))
            .collect()
    };

    let block = Block::default()
        .title(format!(" {} ({}/{}) ", title, log.len(), log.capacity()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    Widget::render(List::new(items).block(block), area, buf);
}
