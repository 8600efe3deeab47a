//! Success screen with the auto-return countdown

use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

use crate::app::App;
use crate::ui::components::progress::Spinner;
use crate::ui::layout::{centered_rect_fixed, render_footer, render_header, ScreenLayout};

/// Draw the success screen
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let layout = ScreenLayout::new(area);

    render_header(frame, layout.header, "Authentication Successful", theme);

    let content = centered_rect_fixed(56, 13, layout.content);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Icon
            Constraint::Length(2), // Title
            Constraint::Length(4), // Message
            Constraint::Length(2), // Spinner
            Constraint::Length(2), // Countdown
        ])
        .split(content);

    // Success icon
    let icon = Paragraph::new("✓")
        .style(theme.success().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(icon, chunks[0]);

    // Title
    let title = Paragraph::new("Authentication Successful")
        .style(theme.success().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[1]);

    // Message
    let merchant = &app.controller.config().merchant;
    let message = Paragraph::new(format!(
        "Your payment has been authenticated. Returning to merchant…\n\
         You are being redirected to {}.",
        merchant
    ))
    .style(theme.text_secondary())
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    frame.render_widget(message, chunks[2]);

    // Spinner
    let mut spinner = Spinner::new("Returning");
    spinner.set_tick(app.tick);
    spinner.render(frame, chunks[3], theme);

    // Countdown
    if let Some(countdown) = app.controller.countdown() {
        let text = format!(
            "This window will close automatically in {} seconds.",
            countdown.remaining()
        );
        let countdown_widget = Paragraph::new(text)
            .style(theme.text_muted())
            .alignment(Alignment::Center);
        frame.render_widget(countdown_widget, chunks[4]);
    }

    render_footer(frame, layout.footer, &[("Enter", "Return to Merchant")], theme);
}
