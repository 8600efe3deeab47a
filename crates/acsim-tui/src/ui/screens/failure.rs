//! Failure screen
//!
//! A declined authentication is a normal flow outcome, so this screen offers
//! both recovery paths instead of treating the state as an error.

use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

use crate::app::App;
use crate::ui::layout::{centered_rect_fixed, render_footer, render_header, ScreenLayout};

/// Draw the failure screen
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let layout = ScreenLayout::new(area);

    render_header(frame, layout.header, "Authentication Failed", theme);

    let content = centered_rect_fixed(56, 11, layout.content);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Icon
            Constraint::Length(2), // Title
            Constraint::Length(4), // Message
            Constraint::Length(2), // Actions
        ])
        .split(content);

    // Error icon
    let icon = Paragraph::new("✗")
        .style(theme.danger())
        .alignment(Alignment::Center);
    frame.render_widget(icon, chunks[0]);

    // Title
    let title = Paragraph::new("Authentication Failed")
        .style(theme.danger())
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[1]);

    // Message
    let message = Paragraph::new(
        "The authentication could not be completed. Please try again or \
         contact your bank.",
    )
    .style(theme.text_secondary())
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    frame.render_widget(message, chunks[2]);

    // Actions
    let actions = Line::from(vec![
        Span::styled("[Enter] Try Again", theme.text_highlight()),
        Span::raw("      "),
        Span::styled("[Esc] Return to Start", theme.text()),
    ]);
    let actions_widget = Paragraph::new(actions).alignment(Alignment::Center);
    frame.render_widget(actions_widget, chunks[3]);

    render_footer(
        frame,
        layout.footer,
        &[("Enter", "Try Again"), ("Esc", "Return to Start")],
        theme,
    );
}
