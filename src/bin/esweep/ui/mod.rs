//! TUI module for esweep
//!
//! Static view of one synthesis: composite waveform over time and the
//! log-log magnitude spectrum of the single sweep.

mod spectrum;
mod summary;
mod waveform;

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use esweep::{
    analysis::{magnitude_spectrum, time_axis},
    Synthesis,
};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    DefaultTerminal, Frame,
};
use std::time::Duration;

use spectrum::{render_spectrum, thin_log_points};
use summary::{render_summary, SignalStats, SweepSummary};
use waveform::{envelope_points, render_waveform};

/// Columns kept from the composite waveform
const WAVEFORM_COLUMNS: usize = 1024;
/// Log-frequency bands kept from the spectrum
const SPECTRUM_BANDS: usize = 512;

/// UI application state
pub struct UiApp {
    /// Summary bar contents
    summary: SweepSummary,
    /// Min/max envelope of the composite signal
    waveform: Vec<(f64, f64)>,
    /// Composite duration in seconds
    duration: f64,
    /// `(log10 Hz, dB)` points of the single sweep
    spectrum: Vec<(f64, f64)>,
    /// Whether the app should quit
    should_quit: bool,
}

impl UiApp {
    /// Precompute chart data from a synthesis result
    pub fn new(synthesis: &Synthesis) -> Self {
        let rate = synthesis.sample_rate;
        let composite = &synthesis.composite;

        let duration = time_axis(composite.len(), rate)
            .last()
            .copied()
            .unwrap_or(0.0);
        let waveform = envelope_points(composite, rate, WAVEFORM_COLUMNS);
        let spectrum = thin_log_points(
            &magnitude_spectrum(&synthesis.single, rate).log_log_points(),
            SPECTRUM_BANDS,
        );

        let summary = SweepSummary {
            sample_rate: rate,
            sweep_samples: synthesis.single.len(),
            repetitions: synthesis.repetition_count,
            interval: synthesis.inter_sweep_interval,
            composite_samples: composite.len(),
            stats: SignalStats::from_buffer(&synthesis.single),
        };

        Self {
            summary,
            waveform,
            duration,
            spectrum,
            should_quit: false,
        }
    }

    /// Run the UI event loop
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.render(frame))?;

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }

        Ok(())
    }

    /// Handle keyboard input
    fn handle_key(&mut self, key: KeyCode) {
        if let KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc = key {
            self.should_quit = true;
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        // Main layout: summary, waveform, spectrum, help
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),      // Summary bar
                Constraint::Percentage(50), // Waveform
                Constraint::Min(8),         // Spectrum
                Constraint::Length(1),      // Help bar
            ])
            .split(area);

        render_summary(frame, chunks[0], &self.summary);
        render_waveform(frame, chunks[1], &self.waveform, self.duration);
        render_spectrum(frame, chunks[2], &self.spectrum);

        let help = Paragraph::new(" [Q] Quit").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, chunks[3]);
    }
}
