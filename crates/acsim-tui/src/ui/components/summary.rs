//! Transaction summary panel
//!
//! The fixed demo transaction (amount, masked card, merchant) shown on the
//! redirect and OTP screens. Display only; the flow never reads it back.

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use acsim_core::DemoConfig;

use crate::ui::layout::section_block;
use crate::ui::Theme;

/// Transaction summary block
pub struct TransactionSummary<'a> {
    config: &'a DemoConfig,
}

impl<'a> TransactionSummary<'a> {
    pub fn new(config: &'a DemoConfig) -> Self {
        Self { config }
    }

    /// Height the panel needs, including its border
    pub const HEIGHT: u16 = 7;

    /// Render the summary panel
    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let block = section_block("Transaction", theme);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Amount
                Constraint::Length(1), // Card
                Constraint::Length(1), // Merchant
                Constraint::Length(1), // Spacer
                Constraint::Length(1), // Footnote
            ])
            .split(inner);

        let pairs = [
            ("Amount:", self.config.amount.as_str()),
            ("Card:", self.config.card_mask.as_str()),
            ("Merchant:", self.config.merchant.as_str()),
        ];

        for (i, (label, value)) in pairs.iter().enumerate() {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(12), Constraint::Min(10)])
                .split(rows[i]);

            let label_widget = Paragraph::new(*label).style(theme.text_muted());
            frame.render_widget(label_widget, cols[0]);

            let value_widget = Paragraph::new(*value)
                .style(theme.text())
                .alignment(Alignment::Right);
            frame.render_widget(value_widget, cols[1]);
        }

        let footnote = Paragraph::new("🔒 Your details are protected and encrypted.")
            .style(theme.text_muted());
        frame.render_widget(footnote, rows[4]);
    }
}
