//! Log-log spectrum widget
//!
//! Chart axes are linear, so the points arrive already in `(log10 Hz, dB)`.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

/// Dynamic range shown below the loudest bin
const DISPLAY_RANGE_DB: f64 = 80.0;

/// Keep the loudest point in each of `buckets` equal-width log-frequency bands.
///
/// FFT bins crowd together at the top of a log axis; this keeps the chart
/// readable without hiding peaks.
pub fn thin_log_points(points: &[(f64, f64)], buckets: usize) -> Vec<(f64, f64)> {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return Vec::new();
    };
    let (lo, hi) = (first.0, last.0);
    if buckets == 0 || hi <= lo {
        return points.to_vec();
    }

    let width = (hi - lo) / buckets as f64;
    let mut thinned: Vec<(f64, f64)> = Vec::with_capacity(buckets);
    let mut current: Option<(usize, (f64, f64))> = None;

    for &(x, db) in points {
        let bucket = (((x - lo) / width) as usize).min(buckets - 1);
        match current {
            Some((b, best)) if b == bucket => {
                if db > best.1 {
                    current = Some((b, (x, db)));
                }
            }
            Some((_, best)) => {
                thinned.push(best);
                current = Some((bucket, (x, db)));
            }
            None => current = Some((bucket, (x, db))),
        }
    }
    if let Some((_, best)) = current {
        thinned.push(best);
    }
    thinned
}

/// Render the magnitude spectrum on log-frequency and dB axes
pub fn render_spectrum(frame: &mut Frame, area: Rect, points: &[(f64, f64)]) {
    let block = Block::default()
        .title(" Sweep spectrum ")
        .borders(Borders::ALL);

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Green))
        .data(points);

    let min_x = points.first().map_or(0.0, |p| p.0);
    let max_x = points.last().map_or(1.0, |p| p.0).max(min_x + 1.0);
    let max_db = points.iter().map(|p| p.1).fold(f64::MIN, f64::max);
    let max_db = if max_db.is_finite() { max_db.ceil() } else { 0.0 };
    let min_db = max_db - DISPLAY_RANGE_DB;

    let hz_label = |log_hz: f64| {
        let hz = 10f64.powf(log_hz);
        if hz >= 1_000.0 {
            format!("{:.1}k", hz / 1_000.0)
        } else {
            format!("{hz:.0}")
        }
    };

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .title("Hz")
                .bounds([min_x, max_x])
                .labels(vec![
                    hz_label(min_x),
                    hz_label((min_x + max_x) / 2.0),
                    hz_label(max_x),
                ])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .title("dB")
                .bounds([min_db, max_db])
                .labels(vec![format!("{min_db:.0}"), format!("{max_db:.0}")])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}
