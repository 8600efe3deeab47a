//! Landing screen with the demo introduction

use ratatui::prelude::*;
use ratatui::widgets::{List, ListItem, Paragraph, Wrap};

use crate::app::App;
use crate::ui::layout::{
    centered_rect_fixed, render_footer, render_header, section_block, ScreenLayout,
};

/// Flow overview shown before the demo starts
const FLOW_STEPS: [&str; 4] = [
    "1. Redirect screen with 10-second countdown",
    "2. OTP authentication page",
    "3. Choose success or failure simulation",
    "4. View result confirmation screen",
];

/// Draw the landing screen
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let layout = ScreenLayout::new(area);

    render_header(frame, layout.header, "3D Secure Authentication Demo", theme);

    let content = centered_rect_fixed(64, 18, layout.content);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Length(4), // Intro
            Constraint::Length(6), // Flow overview
            Constraint::Length(2), // Start prompt
            Constraint::Length(2), // Test notice
        ])
        .split(content);

    // Title
    let title = Paragraph::new("🛡  3D Secure Authentication Demo")
        .style(theme.title())
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    // Intro
    let intro = Paragraph::new(
        "Experience a realistic bank-grade 3D Secure (3DS) OTP verification \
         flow. This demo simulates the complete authentication process used \
         by major card networks.",
    )
    .style(theme.text_secondary())
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    frame.render_widget(intro, chunks[1]);

    // Flow overview
    let items: Vec<ListItem> = FLOW_STEPS
        .iter()
        .map(|step| ListItem::new(format!("  {}", step)).style(theme.text()))
        .collect();
    let overview = List::new(items).block(section_block("Flow Overview", theme));
    frame.render_widget(overview, chunks[2]);

    // Start prompt with a blink, so an idle demo still draws the eye
    let visible = (app.tick / 5) % 2 == 0;
    if visible {
        let prompt = Paragraph::new("Press Enter to begin the authentication flow")
            .style(theme.text_highlight())
            .alignment(Alignment::Center);
        frame.render_widget(prompt, chunks[3]);
    }

    // Test notice
    let notice = Paragraph::new(
        "🔒 This is a testing environment - no real transactions will occur",
    )
    .style(theme.text_muted())
    .alignment(Alignment::Center);
    frame.render_widget(notice, chunks[4]);

    render_footer(
        frame,
        layout.footer,
        &[("Enter", "Begin Demo"), ("Q", "Quit")],
        theme,
    );
}
