//! Summary bar widget - sweep parameters and signal levels

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Signal statistics for display
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalStats {
    pub peak: f64,
    pub rms: f64,
}

impl SignalStats {
    /// Compute peak and RMS level of a buffer
    pub fn from_buffer(buffer: &[f64]) -> Self {
        if buffer.is_empty() {
            return Self { peak: 0.0, rms: 0.0 };
        }
        let peak = buffer.iter().fold(0.0f64, |acc, &x| acc.max(x.abs()));
        let rms = (buffer.iter().map(|&x| x * x).sum::<f64>() / buffer.len() as f64).sqrt();
        Self { peak, rms }
    }
}

/// Static facts about the synthesized signal
pub struct SweepSummary {
    pub sample_rate: f64,
    pub sweep_samples: usize,
    pub repetitions: u32,
    pub interval: f64,
    pub composite_samples: usize,
    pub stats: SignalStats,
}

/// Render the summary bar
pub fn render_summary(frame: &mut Frame, area: Rect, summary: &SweepSummary) {
    let block = Block::default().title(" esweep ").borders(Borders::ALL);

    let to_db = |x: f64| if x > 0.0 { 20.0 * x.log10() } else { f64::NEG_INFINITY };
    let line = Line::from(vec![
        Span::styled(
            format!(" {:.1} kHz  ", summary.sample_rate / 1_000.0),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(format!("Sweep: {} smp  ", summary.sweep_samples)),
        Span::raw(format!(
            "Reps: {} (gap {:.3} s)  ",
            summary.repetitions, summary.interval
        )),
        Span::raw(format!("Total: {} smp  ", summary.composite_samples)),
        Span::styled(
            format!(
                "Peak: {:.1} dBFS  RMS: {:.1} dBFS",
                to_db(summary.stats.peak),
                to_db(summary.stats.rms)
            ),
            Style::default().fg(Color::Yellow),
        ),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}
