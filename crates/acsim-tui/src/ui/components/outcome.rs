//! Outcome-choice dialog
//!
//! Shown after a syntactically valid OTP submission. The operator picks
//! which bank response to simulate; in production this step would be
//! automatic based on the issuer's answer.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::ui::{layout::centered_rect, Theme};

/// Simulation-result dialog
pub struct OutcomeDialog {
    title: &'static str,
    message: &'static str,
}

impl OutcomeDialog {
    pub fn new() -> Self {
        Self {
            title: "Simulation Result",
            message: "Choose the result you want to simulate for this \
                      authentication attempt.",
        }
    }

    /// Render the dialog
    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let dialog_area = centered_rect(60, 50, area);

        // Clear the background
        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .title(format!(" {} ", self.title))
            .title_style(theme.title())
            .borders(Borders::ALL)
            .border_style(theme.border_focused());

        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Min(3),    // Message
                Constraint::Length(2), // Choices
                Constraint::Length(2), // Production note
                Constraint::Length(1), // Help text
            ])
            .split(inner);

        // Message
        let message_widget = Paragraph::new(self.message)
            .style(theme.text())
            .wrap(Wrap { trim: true });
        frame.render_widget(message_widget, chunks[0]);

        // Choices
        let choices = Line::from(vec![
            Span::styled("[S] Simulate Success", theme.success()),
            Span::raw("      "),
            Span::styled("[F] Simulate Failure", theme.danger()),
        ]);
        let choices_widget = Paragraph::new(choices).alignment(Alignment::Center);
        frame.render_widget(choices_widget, chunks[1]);

        // Production note
        let note = Paragraph::new(
            "In production this step will be automatic based on the bank's response.",
        )
        .style(theme.text_muted())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
        frame.render_widget(note, chunks[2]);

        // Help text
        let help = Paragraph::new("[Esc] Cancel")
            .style(theme.text_muted())
            .alignment(Alignment::Center);
        frame.render_widget(help, chunks[3]);
    }
}

impl Default for OutcomeDialog {
    fn default() -> Self {
        Self::new()
    }
}
