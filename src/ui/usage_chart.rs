use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    prelude::{Color, Style, Widget},
    symbols::Marker,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
};

use crate::dashboard::{timestamp::format_axis_time, Observation, RollingSeries};

use super::style::dim;

/// Headroom above the tallest point.
const Y_HEADROOM: f64 = 0.2;

pub(super) fn render_usage_chart(series: &RollingSeries<Observation>, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .title(" Usage Time (seconds) ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    if series.is_empty() {
        Paragraph::new("Waiting for usage data...")
            .style(dim(Style::default().fg(Color::DarkGray)))
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
        return;
    }

    let points: Vec<(f64, f64)> = series.iter().map(|o| (o.timestamp_millis(), o.value)).collect();
    let [y_min, y_max] = y_bounds(series);

    let datasets = vec![
        Dataset::default()
            .name("Usage Time (seconds)")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Green))
            .data(&points),
        Dataset::default()
            .marker(Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(Color::LightGreen))
            .data(&points),
    ];

    let chart = Chart::new(datasets)
        .block(block)
        .legend_position(None)
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds(x_bounds(series))
                .labels(x_labels(series)),
        )
        .y_axis(
            Axis::default()
                .title("Usage Time [s]")
                .style(Style::default().fg(Color::Gray))
                .bounds([y_min, y_max])
                .labels([format!("{:.1}", y_min), format!("{:.1}", y_max)]),
        );

    Widget::render(chart, area, buf);
}

/// Epoch-millisecond range; a lone point gets a second either side.
pub fn x_bounds(series: &RollingSeries<Observation>) -> [f64; 2] {
    match (series.oldest(), series.newest()) {
        (Some(first), Some(last)) if last.timestamp > first.timestamp => {
            [first.timestamp_millis(), last.timestamp_millis()]
        }
        (Some(only), _) => [only.timestamp_millis() - 1000.0, only.timestamp_millis() + 1000.0],
        _ => [0.0, 1.0],
    }
}

/// Oldest and newest timestamps.
pub fn x_labels(series: &RollingSeries<Observation>) -> Vec<String> {
    match (series.oldest(), series.newest()) {
        (Some(first), Some(last)) => vec![
            format_axis_time(&first.timestamp),
            format_axis_time(&last.timestamp),
        ],
        _ => Vec::new(),
    }
}

/// Not anchored at zero; the top sits 20% above the largest value.
pub fn y_bounds(series: &RollingSeries<Observation>) -> [f64; 2] {
    let mut values = series.iter().map(|o| o.value);
    let Some(first) = values.next() else {
        return [0.0, 1.0];
    };
    let (min, max) = values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));

    let upper = max + max.abs() * Y_HEADROOM;
    let lower = min - min.abs() * Y_HEADROOM;

    if upper > lower {
        [lower, upper]
    } else {
        [lower, lower + 1.0]
    }
}
