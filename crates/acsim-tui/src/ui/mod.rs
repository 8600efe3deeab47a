//! UI rendering

pub mod components;
pub mod layout;
pub mod screens;
pub mod theme;

pub use theme::Theme;

use ratatui::prelude::*;

use acsim_core::Screen;

use crate::app::App;
use components::outcome::OutcomeDialog;

/// Main render function - delegates to the active screen, then overlays
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    match app.controller.screen() {
        Screen::Landing => screens::landing::draw(frame, area, app),
        Screen::Redirect => screens::redirect::draw(frame, area, app),
        Screen::OtpEntry => screens::otp_entry::draw(frame, area, app),
        Screen::Success => screens::success::draw(frame, area, app),
        Screen::Failure => screens::failure::draw(frame, area, app),
    }

    // Outcome-choice prompt sits above the OTP form
    if app.controller.prompt_open() {
        OutcomeDialog::new().render(frame, area, &app.theme);
    }

    // Toasts render last so they are never covered
    app.notifications.render(frame, area, &app.theme);
}
