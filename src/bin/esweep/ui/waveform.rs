//! Composite waveform widget

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

/// Reduce `samples` to a min/max envelope of at most `columns` columns.
///
/// Each column contributes its minimum and maximum at the column's start
/// time, so a line chart draws it as a vertical stroke.
pub fn envelope_points(samples: &[f64], sample_rate: f64, columns: usize) -> Vec<(f64, f64)> {
    if samples.is_empty() || columns == 0 {
        return Vec::new();
    }
    let per_column = samples.len().div_ceil(columns);

    let mut points = Vec::with_capacity(2 * columns);
    for (i, chunk) in samples.chunks(per_column).enumerate() {
        let t = (i * per_column) as f64 / sample_rate;
        let (lo, hi) = chunk
            .iter()
            .fold((f64::MAX, f64::MIN), |(lo, hi), &s| (lo.min(s), hi.max(s)));
        points.push((t, lo));
        points.push((t, hi));
    }
    points
}

/// Render the composite waveform over `[0, duration]` seconds
pub fn render_waveform(frame: &mut Frame, area: Rect, data: &[(f64, f64)], duration: f64) {
    let block = Block::default()
        .title(" Composite waveform ")
        .borders(Borders::ALL);

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Cyan))
        .data(data);

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .title("s")
                .bounds([0.0, duration.max(f64::EPSILON)])
                .labels(vec![
                    "0".to_string(),
                    format!("{:.2}", duration / 2.0),
                    format!("{duration:.2}"),
                ])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds([-1.0, 1.0])
                .labels(vec!["-1", "0", "1"])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}
