//! Flow controller
//!
//! The single authoritative state machine behind the demo. All user actions
//! and timer expiries arrive as [`FlowEvent`]s; the controller mutates its
//! state and answers with [`Effect`]s for the navigation and notification
//! surfaces. Screens never mutate state directly — they render the
//! controller's projection and dispatch events.

use tracing::{debug, trace};

use crate::config::DemoConfig;
use crate::error::ValidationError;
use crate::event::{Effect, FlowEvent, Outcome};
use crate::otp::OtpInput;
use crate::screen::Screen;
use crate::timer::{Countdown, TimerKind};
use crate::OTP_ATTEMPTS;

/// Authentication flow state machine
///
/// Owns the current [`Screen`], the OTP input buffer, the outcome-prompt and
/// expiry sub-states, and the single active [`Countdown`]. The countdown
/// lives in one slot: entering any screen replaces it (or drops it), so a
/// timer belonging to a screen that was left can never fire.
pub struct FlowController {
    config: DemoConfig,
    screen: Screen,
    otp: OtpInput,
    attempts_remaining: u32,
    otp_expired: bool,
    prompt_open: bool,
    countdown: Option<Countdown>,
}

impl FlowController {
    /// Create a controller at the landing screen
    pub fn new(config: DemoConfig) -> Self {
        Self {
            config,
            screen: Screen::Landing,
            otp: OtpInput::new(),
            attempts_remaining: OTP_ATTEMPTS,
            otp_expired: false,
            prompt_open: false,
            countdown: None,
        }
    }

    // ─── Projection ──────────────────────────────────────────────────────

    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn otp_input(&self) -> &str {
        self.otp.as_str()
    }

    /// Informational only; never enforced as a lockout
    pub fn attempts_remaining(&self) -> u32 {
        self.attempts_remaining
    }

    /// Whether the OTP validity window has run out
    pub fn otp_expired(&self) -> bool {
        self.otp_expired
    }

    /// Whether the outcome-choice prompt is showing
    pub fn prompt_open(&self) -> bool {
        self.prompt_open
    }

    /// The active countdown, if any
    pub fn countdown(&self) -> Option<&Countdown> {
        self.countdown.as_ref()
    }

    // ─── Ticking ─────────────────────────────────────────────────────────

    /// Advance the flow by one second
    ///
    /// Decrements the active countdown and, on the tick that reaches zero,
    /// routes the expiry through [`handle`](Self::handle) like any other
    /// event. The spent countdown is dropped before the transition runs.
    pub fn tick(&mut self) -> Vec<Effect> {
        let mut fired = None;
        if let Some(countdown) = self.countdown.as_mut() {
            if countdown.tick() {
                fired = Some(countdown.kind());
            }
        }

        match fired {
            Some(kind) => {
                self.countdown = None;
                self.handle(FlowEvent::TimerElapsed(kind))
            }
            None => Vec::new(),
        }
    }

    // ─── Transitions ─────────────────────────────────────────────────────

    /// Process one event and return the effects it produced
    pub fn handle(&mut self, event: FlowEvent) -> Vec<Effect> {
        // The outcome prompt is modal: while it is open, only a choice or a
        // dismissal gets through. This is what makes a double submit unable
        // to stack a second prompt.
        if self.prompt_open
            && !matches!(
                event,
                FlowEvent::ChooseOutcome(_) | FlowEvent::CancelOutcome
            )
        {
            trace!(?event, "ignored while outcome prompt open");
            return Vec::new();
        }

        match (self.screen, event) {
            (Screen::Landing, FlowEvent::BeginAuthentication) => {
                self.enter(Screen::Redirect)
            }

            (Screen::Redirect, FlowEvent::ProceedToOtp)
            | (Screen::Redirect, FlowEvent::TimerElapsed(TimerKind::Redirect)) => {
                self.enter(Screen::OtpEntry)
            }

            (Screen::OtpEntry, FlowEvent::BackToRedirect) => self.enter(Screen::Redirect),

            (Screen::OtpEntry, FlowEvent::OtpChar(c)) => {
                self.otp.push(c);
                Vec::new()
            }

            (Screen::OtpEntry, FlowEvent::OtpBackspace) => {
                self.otp.pop();
                Vec::new()
            }

            (Screen::OtpEntry, FlowEvent::SubmitOtp) => self.submit_otp(),

            (Screen::OtpEntry, FlowEvent::ResendOtp) => self.resend_otp(),

            (Screen::OtpEntry, FlowEvent::TimerElapsed(TimerKind::OtpExpiry)) => {
                debug!("otp validity window elapsed");
                self.otp_expired = true;
                vec![Effect::error(ValidationError::OtpExpired.user_message())]
            }

            // An outcome can only be chosen through the prompt a valid
            // submission opened
            (Screen::OtpEntry, FlowEvent::ChooseOutcome(outcome)) if self.prompt_open => {
                self.prompt_open = false;
                match outcome {
                    Outcome::Authenticated => self.enter(Screen::Success),
                    Outcome::Declined => self.enter(Screen::Failure),
                }
            }

            (Screen::OtpEntry, FlowEvent::CancelOutcome) if self.prompt_open => {
                self.prompt_open = false;
                Vec::new()
            }

            (Screen::Success, FlowEvent::ReturnToStart)
            | (Screen::Success, FlowEvent::TimerElapsed(TimerKind::ReturnToMerchant)) => {
                self.enter(Screen::Landing)
            }

            (Screen::Failure, FlowEvent::RetryAuthentication) => self.enter(Screen::OtpEntry),

            (Screen::Failure, FlowEvent::ReturnToStart) => self.enter(Screen::Landing),

            (screen, event) => {
                trace!(?screen, ?event, "event not valid for current screen");
                Vec::new()
            }
        }
    }

    /// Transition to `next`, tearing down the old countdown and starting the
    /// one the new screen owns
    ///
    /// This is the only place the screen field changes, so teardown holds on
    /// every exit path, not just the happy one.
    fn enter(&mut self, next: Screen) -> Vec<Effect> {
        debug!(from = self.screen.id(), to = next.id(), "transition");

        self.countdown = None;
        self.prompt_open = false;
        self.screen = next;

        match next {
            Screen::Landing => {
                // Full reset: a replayed demo starts from identical state
                self.otp.clear();
                self.otp_expired = false;
                self.attempts_remaining = OTP_ATTEMPTS;
            }
            Screen::Redirect => {
                self.countdown = Some(Countdown::new(
                    TimerKind::Redirect,
                    self.config.redirect_secs,
                ));
            }
            Screen::OtpEntry => {
                // Fresh OTP session on every (re-)entry
                self.otp.clear();
                self.otp_expired = false;
                self.attempts_remaining = OTP_ATTEMPTS;
                self.countdown = Some(Countdown::new(
                    TimerKind::OtpExpiry,
                    self.config.otp_expiry_secs,
                ));
            }
            Screen::Success => {
                self.countdown = Some(Countdown::new(
                    TimerKind::ReturnToMerchant,
                    self.config.return_to_merchant_secs,
                ));
            }
            Screen::Failure => {}
        }

        vec![Effect::Navigate(next)]
    }

    fn submit_otp(&mut self) -> Vec<Effect> {
        if self.otp_expired {
            debug!("submit rejected: otp expired");
            return vec![Effect::error(ValidationError::OtpExpired.user_message())];
        }

        match self.otp.validate() {
            Ok(()) => {
                debug!("otp accepted, opening outcome prompt");
                self.prompt_open = true;
                Vec::new()
            }
            Err(err) => {
                debug!(code = %err, "submit rejected");
                vec![Effect::error(err.user_message())]
            }
        }
    }

    fn resend_otp(&mut self) -> Vec<Effect> {
        debug!("otp resent, restarting expiry window");
        self.otp.clear();
        self.otp_expired = false;
        self.countdown = Some(Countdown::new(
            TimerKind::OtpExpiry,
            self.config.otp_expiry_secs,
        ));
        vec![Effect::success(
            "OTP has been resent to your registered contact",
        )]
    }
}

impl Default for FlowController {
    fn default() -> Self {
        Self::new(DemoConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::NotifyLevel;
    use rstest::rstest;

    fn controller_at_otp() -> FlowController {
        let mut controller = FlowController::default();
        controller.handle(FlowEvent::BeginAuthentication);
        controller.handle(FlowEvent::ProceedToOtp);
        controller
    }

    fn type_otp(controller: &mut FlowController, digits: &str) {
        for c in digits.chars() {
            controller.handle(FlowEvent::OtpChar(c));
        }
    }

    fn error_count(effects: &[Effect]) -> usize {
        effects
            .iter()
            .filter(|e| {
                matches!(
                    e,
                    Effect::Notify {
                        level: NotifyLevel::Error,
                        ..
                    }
                )
            })
            .count()
    }

    #[test]
    fn test_begin_starts_redirect_countdown() {
        let mut controller = FlowController::default();
        let effects = controller.handle(FlowEvent::BeginAuthentication);

        assert_eq!(controller.screen(), Screen::Redirect);
        assert_eq!(effects, vec![Effect::Navigate(Screen::Redirect)]);

        let countdown = controller.countdown().unwrap();
        assert_eq!(countdown.kind(), TimerKind::Redirect);
        assert_eq!(countdown.remaining(), 10);
    }

    #[test]
    fn test_redirect_auto_fires_after_ten_ticks() {
        let mut controller = FlowController::default();
        controller.handle(FlowEvent::BeginAuthentication);

        for _ in 0..9 {
            assert!(controller.tick().is_empty());
            assert_eq!(controller.screen(), Screen::Redirect);
        }

        let effects = controller.tick();
        assert_eq!(effects, vec![Effect::Navigate(Screen::OtpEntry)]);
        assert_eq!(controller.screen(), Screen::OtpEntry);
        // The OTP expiry countdown took the slot
        assert_eq!(
            controller.countdown().unwrap().kind(),
            TimerKind::OtpExpiry
        );
    }

    #[test]
    fn test_manual_proceed_cancels_redirect_countdown() {
        let mut controller = FlowController::default();
        controller.handle(FlowEvent::BeginAuthentication);
        controller.tick();
        controller.handle(FlowEvent::ProceedToOtp);
        assert_eq!(controller.screen(), Screen::OtpEntry);

        // 120 ticks of the expiry window later, the redirect timer is gone
        // and only the expiry consequence shows up.
        for _ in 0..119 {
            assert!(controller.tick().is_empty());
        }
        let effects = controller.tick();
        assert_eq!(error_count(&effects), 1);
        assert_eq!(controller.screen(), Screen::OtpEntry);
        assert!(controller.otp_expired());
    }

    #[rstest]
    #[case("")]
    #[case("12")]
    #[case("12345")]
    fn test_short_otp_rejected(#[case] digits: &str) {
        let mut controller = controller_at_otp();
        type_otp(&mut controller, digits);

        let effects = controller.handle(FlowEvent::SubmitOtp);
        assert_eq!(error_count(&effects), 1);
        assert_eq!(controller.screen(), Screen::OtpEntry);
        assert!(!controller.prompt_open());
        // Input preserved for correction
        assert_eq!(controller.otp_input(), digits);
    }

    #[test]
    fn test_non_digits_never_enter_buffer() {
        let mut controller = controller_at_otp();
        type_otp(&mut controller, "12ab!@34");
        assert_eq!(controller.otp_input(), "1234");
    }

    #[test]
    fn test_valid_submit_opens_prompt_once() {
        let mut controller = controller_at_otp();
        type_otp(&mut controller, "123456");

        let effects = controller.handle(FlowEvent::SubmitOtp);
        assert!(effects.is_empty());
        assert!(controller.prompt_open());

        // Double submit while the prompt is open is swallowed
        let effects = controller.handle(FlowEvent::SubmitOtp);
        assert!(effects.is_empty());
        assert!(controller.prompt_open());
    }

    #[test]
    fn test_outcome_value_not_derived_from_code() {
        // Any 6 digits reach the prompt; the instructional code is not special
        let mut controller = controller_at_otp();
        type_otp(&mut controller, "999999");
        controller.handle(FlowEvent::SubmitOtp);
        assert!(controller.prompt_open());
    }

    #[test]
    fn test_choose_success_starts_return_countdown() {
        let mut controller = controller_at_otp();
        type_otp(&mut controller, "123456");
        controller.handle(FlowEvent::SubmitOtp);

        let effects = controller.handle(FlowEvent::ChooseOutcome(Outcome::Authenticated));
        assert_eq!(effects, vec![Effect::Navigate(Screen::Success)]);
        assert_eq!(
            controller.countdown().unwrap().kind(),
            TimerKind::ReturnToMerchant
        );

        for _ in 0..2 {
            assert!(controller.tick().is_empty());
        }
        let effects = controller.tick();
        assert_eq!(effects, vec![Effect::Navigate(Screen::Landing)]);
        assert_eq!(controller.screen(), Screen::Landing);
    }

    #[test]
    fn test_choose_failure_has_no_countdown() {
        let mut controller = controller_at_otp();
        type_otp(&mut controller, "123456");
        controller.handle(FlowEvent::SubmitOtp);

        controller.handle(FlowEvent::ChooseOutcome(Outcome::Declined));
        assert_eq!(controller.screen(), Screen::Failure);
        assert!(controller.countdown().is_none());

        // The failure screen waits for the user indefinitely
        for _ in 0..1000 {
            assert!(controller.tick().is_empty());
        }
        assert_eq!(controller.screen(), Screen::Failure);
    }

    #[test]
    fn test_cancel_outcome_returns_to_form() {
        let mut controller = controller_at_otp();
        type_otp(&mut controller, "123456");
        controller.handle(FlowEvent::SubmitOtp);
        controller.handle(FlowEvent::CancelOutcome);

        assert!(!controller.prompt_open());
        assert_eq!(controller.screen(), Screen::OtpEntry);
        // Input is preserved; the user may resubmit
        assert_eq!(controller.otp_input(), "123456");
    }

    #[test]
    fn test_retry_resets_otp_session() {
        let mut controller = controller_at_otp();
        type_otp(&mut controller, "123456");
        controller.handle(FlowEvent::SubmitOtp);
        controller.handle(FlowEvent::ChooseOutcome(Outcome::Declined));

        let effects = controller.handle(FlowEvent::RetryAuthentication);
        assert_eq!(effects, vec![Effect::Navigate(Screen::OtpEntry)]);
        assert_eq!(controller.otp_input(), "");
        assert!(!controller.otp_expired());
        let countdown = controller.countdown().unwrap();
        assert_eq!(countdown.kind(), TimerKind::OtpExpiry);
        assert_eq!(countdown.remaining(), 120);
    }

    #[test]
    fn test_resend_clears_input_and_restarts_window() {
        let mut controller = controller_at_otp();
        type_otp(&mut controller, "12");

        // Burn part of the window first
        for _ in 0..30 {
            controller.tick();
        }

        let effects = controller.handle(FlowEvent::ResendOtp);
        assert_eq!(controller.otp_input(), "");
        assert_eq!(controller.countdown().unwrap().remaining(), 120);
        assert!(matches!(
            effects.as_slice(),
            [Effect::Notify {
                level: NotifyLevel::Success,
                ..
            }]
        ));
    }

    #[test]
    fn test_expired_blocks_submit_until_resend() {
        let mut controller = controller_at_otp();
        type_otp(&mut controller, "123456");

        for _ in 0..120 {
            controller.tick();
        }
        assert!(controller.otp_expired());
        assert!(controller.countdown().is_none());

        let effects = controller.handle(FlowEvent::SubmitOtp);
        assert_eq!(error_count(&effects), 1);
        assert!(!controller.prompt_open());

        controller.handle(FlowEvent::ResendOtp);
        assert!(!controller.otp_expired());
        type_otp(&mut controller, "123456");
        controller.handle(FlowEvent::SubmitOtp);
        assert!(controller.prompt_open());
    }

    #[test]
    fn test_back_to_redirect_restarts_countdown() {
        let mut controller = controller_at_otp();
        type_otp(&mut controller, "123");

        controller.handle(FlowEvent::BackToRedirect);
        assert_eq!(controller.screen(), Screen::Redirect);
        let countdown = controller.countdown().unwrap();
        assert_eq!(countdown.kind(), TimerKind::Redirect);
        assert_eq!(countdown.remaining(), 10);

        // Coming forward again is a fresh OTP session
        controller.handle(FlowEvent::ProceedToOtp);
        assert_eq!(controller.otp_input(), "");
    }

    #[test]
    fn test_attempts_counter_is_informational() {
        let mut controller = controller_at_otp();
        assert_eq!(controller.attempts_remaining(), 3);

        type_otp(&mut controller, "12");
        controller.handle(FlowEvent::SubmitOtp);
        controller.handle(FlowEvent::SubmitOtp);

        // Displayed but never decremented or enforced
        assert_eq!(controller.attempts_remaining(), 3);
    }

    #[test]
    fn test_outcome_choice_requires_open_prompt() {
        let mut controller = controller_at_otp();
        type_otp(&mut controller, "123456");

        // No submit yet, so there is no prompt to answer
        let effects = controller.handle(FlowEvent::ChooseOutcome(Outcome::Authenticated));
        assert!(effects.is_empty());
        assert_eq!(controller.screen(), Screen::OtpEntry);
    }

    #[test]
    fn test_events_invalid_for_screen_are_ignored() {
        let mut controller = FlowController::default();

        // None of these belong to the landing screen
        assert!(controller.handle(FlowEvent::SubmitOtp).is_empty());
        assert!(controller.handle(FlowEvent::ResendOtp).is_empty());
        assert!(controller
            .handle(FlowEvent::ChooseOutcome(Outcome::Authenticated))
            .is_empty());
        assert!(controller
            .handle(FlowEvent::TimerElapsed(TimerKind::Redirect))
            .is_empty());
        assert_eq!(controller.screen(), Screen::Landing);
    }

    #[test]
    fn test_full_cycle_restores_initial_state() {
        let mut controller = FlowController::default();

        for _ in 0..3 {
            controller.handle(FlowEvent::BeginAuthentication);
            controller.handle(FlowEvent::ProceedToOtp);
            type_otp(&mut controller, "123456");
            controller.handle(FlowEvent::SubmitOtp);
            controller.handle(FlowEvent::ChooseOutcome(Outcome::Authenticated));
            for _ in 0..3 {
                controller.tick();
            }

            assert_eq!(controller.screen(), Screen::Landing);
            assert_eq!(controller.otp_input(), "");
            assert!(controller.countdown().is_none());
            assert!(!controller.prompt_open());
            assert!(!controller.otp_expired());
            assert_eq!(controller.attempts_remaining(), 3);
        }
    }
}
