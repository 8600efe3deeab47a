//! Application shell and event handling
//!
//! [`App`] owns the flow controller and the terminal-side bookkeeping: the
//! frame tick for animations and toast expiry, the one-second tick that
//! drives the flow countdowns, and the per-screen key handlers that turn
//! key presses into [`FlowEvent`]s.

pub mod config;

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;

use acsim_core::{Effect, FlowController, FlowEvent, NotifyLevel, Outcome, Screen};

use crate::ui;
use crate::ui::components::notification::{Notification, NotificationManager};
use crate::ui::Theme;

/// Application result type
pub type AppResult<T> = anyhow::Result<T>;

/// Main application struct
pub struct App {
    /// Authentication flow state machine
    pub controller: FlowController,

    /// Active toast notifications
    pub notifications: NotificationManager,

    /// Visual theme
    pub theme: Theme,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Frame tick counter for animations
    pub tick: u64,

    /// Last frame tick time
    last_tick: Instant,

    /// Last whole-second flow tick
    last_flow_tick: Instant,
}

impl App {
    /// Create a new application instance
    pub fn new() -> Self {
        let demo_config = config::load_or_init();
        let now = Instant::now();
        Self {
            controller: FlowController::new(demo_config),
            notifications: NotificationManager::new(),
            theme: Theme::default(),
            should_quit: false,
            tick: 0,
            last_tick: now,
            last_flow_tick: now,
        }
    }

    /// Run the application main loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> AppResult<()> {
        let tick_rate = Duration::from_millis(100);

        while !self.should_quit {
            // Draw UI
            terminal.draw(|frame| ui::render(frame, self))?;

            // Handle events
            let timeout = tick_rate
                .checked_sub(self.last_tick.elapsed())
                .unwrap_or(Duration::ZERO);

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code, key.modifiers);
                    }
                }
            }

            // Frame tick: animations and toast expiry
            if self.last_tick.elapsed() >= tick_rate {
                self.tick = self.tick.wrapping_add(1);
                self.last_tick = Instant::now();
                self.notifications.tick();
            }

            // Flow tick: the countdowns decrement once per elapsed second
            while self.last_flow_tick.elapsed() >= Duration::from_secs(1) {
                self.last_flow_tick += Duration::from_secs(1);
                let effects = self.controller.tick();
                self.apply_effects(effects);
            }
        }

        Ok(())
    }

    /// Handle key press events
    fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        // Global quit handler
        if key == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // The outcome prompt traps input while it is open
        if self.controller.prompt_open() {
            self.handle_outcome_prompt_key(key);
            return;
        }

        // Delegate to screen-specific handlers
        match self.controller.screen() {
            Screen::Landing => self.handle_landing_key(key),
            Screen::Redirect => self.handle_redirect_key(key),
            Screen::OtpEntry => self.handle_otp_entry_key(key),
            Screen::Success => self.handle_success_key(key),
            Screen::Failure => self.handle_failure_key(key),
        }
    }

    fn handle_landing_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.dispatch(FlowEvent::BeginAuthentication);
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            _ => {}
        }
    }

    fn handle_redirect_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter => {
                self.dispatch(FlowEvent::ProceedToOtp);
            }
            _ => {}
        }
    }

    fn handle_otp_entry_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char(c) if c.is_ascii_digit() => {
                self.dispatch(FlowEvent::OtpChar(c));
            }
            KeyCode::Backspace => {
                self.dispatch(FlowEvent::OtpBackspace);
            }
            KeyCode::Enter => {
                self.dispatch(FlowEvent::SubmitOtp);
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.dispatch(FlowEvent::ResendOtp);
            }
            KeyCode::Esc | KeyCode::Char('b') => {
                self.dispatch(FlowEvent::BackToRedirect);
            }
            _ => {}
        }
    }

    fn handle_outcome_prompt_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('s') | KeyCode::Char('S') => {
                self.dispatch(FlowEvent::ChooseOutcome(Outcome::Authenticated));
            }
            KeyCode::Char('f') | KeyCode::Char('F') => {
                self.dispatch(FlowEvent::ChooseOutcome(Outcome::Declined));
            }
            KeyCode::Esc => {
                self.dispatch(FlowEvent::CancelOutcome);
            }
            _ => {}
        }
    }

    fn handle_success_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Esc => {
                self.dispatch(FlowEvent::ReturnToStart);
            }
            _ => {}
        }
    }

    fn handle_failure_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char('t') => {
                self.dispatch(FlowEvent::RetryAuthentication);
            }
            KeyCode::Esc | KeyCode::Char('b') => {
                self.dispatch(FlowEvent::ReturnToStart);
            }
            _ => {}
        }
    }

    /// Send one event into the controller and apply whatever comes back
    fn dispatch(&mut self, event: FlowEvent) {
        let effects = self.controller.handle(event);
        self.apply_effects(effects);
    }

    /// Apply controller effects to the collaborator surfaces
    fn apply_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Navigate(screen) => {
                    // The render loop already follows the controller's
                    // current screen; the request is logged for traceability.
                    tracing::debug!(to = screen.id(), "navigate");
                }
                Effect::Notify { level, message } => {
                    let notification = match level {
                        NotifyLevel::Info => Notification::info(message),
                        NotifyLevel::Success => Notification::success(message),
                        NotifyLevel::Error => Notification::error(message),
                    };
                    self.notifications.push(notification);
                }
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
