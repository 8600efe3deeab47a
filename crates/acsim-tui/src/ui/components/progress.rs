//! Progress bar and spinner components

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};

use crate::ui::Theme;

/// Progress bar with percentage display
pub struct ProgressBar {
    /// Current progress (0.0 - 1.0)
    progress: f64,
    /// Label text
    label: String,
}

impl ProgressBar {
    /// Create a new progress bar
    pub fn new(progress: f64, label: impl Into<String>) -> Self {
        Self {
            progress: progress.clamp(0.0, 1.0),
            label: label.into(),
        }
    }

    /// Render the progress bar
    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let percent = (self.progress * 100.0) as u16;

        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::NONE))
            .gauge_style(
                Style::default()
                    .fg(theme.progress_filled)
                    .bg(theme.progress_empty),
            )
            .percent(percent)
            .label(self.label.clone());

        frame.render_widget(gauge, area);
    }
}

/// Spinner animation for indeterminate progress
pub struct Spinner {
    /// Current frame
    frame: usize,
    /// Spinner characters
    chars: Vec<char>,
    /// Label text
    label: String,
}

impl Spinner {
    /// Create a new spinner
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            frame: 0,
            chars: vec!['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'],
            label: label.into(),
        }
    }

    /// Set frame based on tick counter
    pub fn set_tick(&mut self, tick: u64) {
        self.frame = (tick as usize / 5) % self.chars.len();
    }

    /// Render the spinner
    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let spinner_char = self.chars[self.frame];
        let text = format!("{} {}", spinner_char, self.label);

        let paragraph = Paragraph::new(text)
            .style(theme.text_highlight())
            .alignment(Alignment::Center);

        frame.render_widget(paragraph, area);
    }
}
