//! Cardholder OTP entry screen

use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

use acsim_core::OTP_LENGTH;

use crate::app::App;
use crate::ui::components::summary::TransactionSummary;
use crate::ui::layout::{
    centered_rect_fixed, render_footer, render_header, section_block, ScreenLayout,
};

/// Draw the OTP entry screen
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let layout = ScreenLayout::new(area);

    render_header(frame, layout.header, "Cardholder Authentication", theme);

    let content = centered_rect_fixed(58, 21, layout.content);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                          // Instructions
            Constraint::Length(4),                          // Demo info box
            Constraint::Length(TransactionSummary::HEIGHT), // Summary
            Constraint::Length(3),                          // OTP boxes
            Constraint::Length(1),                          // Attempts
            Constraint::Length(1),                          // Expiry
            Constraint::Length(2),                          // Charge notice
        ])
        .split(content);

    // Instructions
    let contact = &app.controller.config().contact_mask;
    let instructions = Paragraph::new(format!(
        "Please verify your transaction by entering the One-Time Password \
         (OTP) sent to your registered mobile number ending {} or your email.",
        contact
    ))
    .style(theme.text_secondary())
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    frame.render_widget(instructions, chunks[0]);

    // Demo info box
    let demo_code = &app.controller.config().demo_code;
    let info_block = section_block("Demo", theme);
    let info_inner = info_block.inner(chunks[1]);
    frame.render_widget(info_block, chunks[1]);
    let info = Paragraph::new(format!(
        "For demo/testing environment enter: {}\nThis is a test environment — \
         no real money will be deducted.",
        demo_code
    ))
    .style(theme.text())
    .wrap(Wrap { trim: true });
    frame.render_widget(info, info_inner);

    // Transaction summary
    TransactionSummary::new(app.controller.config()).render(frame, chunks[2], theme);

    // OTP digit boxes
    let entered = app.controller.otp_input();
    let mut display = String::from("[ ");
    for i in 0..OTP_LENGTH {
        match entered.as_bytes().get(i) {
            Some(b) => display.push(*b as char),
            None => display.push('_'),
        }
        if i < OTP_LENGTH - 1 {
            display.push(' ');
        }
    }
    display.push_str(" ]");

    let otp_style = if entered.len() == OTP_LENGTH {
        theme.text_highlight()
    } else {
        theme.text()
    };
    let otp_widget = Paragraph::new(display)
        .style(otp_style)
        .alignment(Alignment::Center);
    frame.render_widget(otp_widget, chunks[3]);

    // Attempts line (informational)
    let attempts = format!(
        "You have {} attempts remaining.",
        app.controller.attempts_remaining()
    );
    let attempts_widget = Paragraph::new(attempts)
        .style(theme.text_muted())
        .alignment(Alignment::Center);
    frame.render_widget(attempts_widget, chunks[4]);

    // Expiry line: live countdown, or the frozen 00:00 once expired
    let (expiry_text, expiry_style) = if app.controller.otp_expired() {
        (
            "OTP expired (00:00) — press R to request a new code".to_string(),
            theme.warning(),
        )
    } else if let Some(countdown) = app.controller.countdown() {
        (
            format!("OTP expires in {}", countdown.remaining_formatted()),
            theme.text_secondary(),
        )
    } else {
        (String::new(), theme.text_muted())
    };
    let expiry_widget = Paragraph::new(expiry_text)
        .style(expiry_style)
        .alignment(Alignment::Center);
    frame.render_widget(expiry_widget, chunks[5]);

    // Charge notice
    let notice = Paragraph::new("No funds will be charged unless authentication succeeds.")
        .style(theme.text_muted())
        .alignment(Alignment::Center);
    frame.render_widget(notice, chunks[6]);

    render_footer(
        frame,
        layout.footer,
        &[
            ("0-9", "Enter OTP"),
            ("Enter", "Submit"),
            ("R", "Resend OTP"),
            ("Esc", "Back"),
        ],
        theme,
    );
}
