use ratatui::style::{Color, Style, Stylize};

use crate::util::io::bus::LinkStatus;

pub fn link_color(status: &LinkStatus) -> Color {
    match status {
        LinkStatus::Connected => Color::Green,
        LinkStatus::Connecting => Color::Yellow,
        LinkStatus::Disconnected(_) => Color::Red,
    }
}

/// Highlighted while the rake effect is running.
pub fn rake_button_style(is_active: bool) -> Style {
    if is_active {
        Style::default().fg(Color::Black).bg(Color::Yellow).bold()
    } else {
        Style::default().fg(Color::Green).bold()
    }
}

pub fn dim(style: Style) -> Style {
    style.dim().italic()
}
