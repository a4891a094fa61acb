use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    prelude::{Color, Style, Widget},
    widgets::{Block, Borders, Paragraph},
};

use super::style::{dim, rake_button_style};

pub(super) fn render_rake_button(is_active: bool, topic: &str, area: Rect, buf: &mut Buffer) {
    let style = rake_button_style(is_active);
    let label = if is_active { "[ RAKING... ]" } else { "[ RAKE ]" };

    Paragraph::new(label)
        .style(style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(format!(" {} ", topic))
                .borders(Borders::ALL)
                .border_style(style),
        )
        .render(area, buf);
}

pub(super) fn render_key_hints(area: Rect, buf: &mut Buffer) {
    Paragraph::new("r / Enter: rake   q / Esc: quit")
        .style(dim(Style::default().fg(Color::DarkGray)))
        .alignment(Alignment::Center)
        .render(area, buf);
}
