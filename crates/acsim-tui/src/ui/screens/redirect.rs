//! Bank-redirect screen with the 10-second countdown

use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

use crate::app::App;
use crate::ui::components::progress::{ProgressBar, Spinner};
use crate::ui::components::summary::TransactionSummary;
use crate::ui::layout::{centered_rect_fixed, render_footer, render_header, ScreenLayout};

/// Draw the redirect screen
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let layout = ScreenLayout::new(area);

    render_header(frame, layout.header, "Connecting to your bank", theme);

    let content = centered_rect_fixed(58, 19, layout.content);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                          // Secure connection
            Constraint::Length(1),                          // Progress bar
            Constraint::Length(2),                          // Spinner
            Constraint::Length(4),                          // Message
            Constraint::Length(TransactionSummary::HEIGHT), // Summary
            Constraint::Length(2),                          // Countdown
        ])
        .split(content);

    // Secure connection line
    let secure = Paragraph::new("🔒 Secure connection")
        .style(theme.text_muted())
        .alignment(Alignment::Center);
    frame.render_widget(secure, chunks[0]);

    // Progress over the redirect wait
    if let Some(countdown) = app.controller.countdown() {
        ProgressBar::new(countdown.progress(), "").render(frame, chunks[1], theme);
    }

    // Spinner
    let mut spinner = Spinner::new("Verifying transaction");
    spinner.set_tick(app.tick);
    spinner.render(frame, chunks[2], theme);

    // Main message
    let message = Paragraph::new(
        "Please wait — we are redirecting you to your bank for \
         authentication.\nThis may take a few seconds while we verify your \
         transaction for security.",
    )
    .style(theme.text())
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    frame.render_widget(message, chunks[3]);

    // Transaction summary
    TransactionSummary::new(app.controller.config()).render(frame, chunks[4], theme);

    // Countdown line
    if let Some(countdown) = app.controller.countdown() {
        let text = format!(
            "Redirecting to 3D Secure page in {} seconds",
            countdown.remaining()
        );
        let countdown_widget = Paragraph::new(text)
            .style(theme.text_secondary())
            .alignment(Alignment::Center);
        frame.render_widget(countdown_widget, chunks[5]);
    }

    render_footer(frame, layout.footer, &[("Enter", "Continue now")], theme);
}
