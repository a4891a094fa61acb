use ratatui::{
    buffer::Buffer,
    layout::Rect,
    prelude::{Color, Style, Widget},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::{style::link_color, ViewData};

pub(super) fn render_header(view: &ViewData, area: Rect, buf: &mut Buffer) {
    let color = link_color(view.link_status);

    let line = Line::from(vec![
        Span::styled("Broker: ", Style::default().fg(Color::Gray)),
        Span::styled(view.link_status.label(), Style::default().fg(color)),
        Span::raw("   "),
        Span::styled(
            format!("Odor level: {}", view.state.odor_level.display()),
            Style::default().fg(Color::White),
        ),
    ]);

    Paragraph::new(line)
        .block(
            Block::default()
                .title(" Litter Box Controller ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        )
        .render(area, buf);
}
