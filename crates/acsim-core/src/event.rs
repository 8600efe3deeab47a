//! Flow events and effects
//!
//! Every state change enters the controller as a [`FlowEvent`] — user actions
//! and timer expiries go through the same path, so the transition table stays
//! exhaustively enumerable. The controller answers with [`Effect`]s for the
//! collaborators (navigation surface, notification surface).

use crate::screen::Screen;
use crate::timer::TimerKind;

/// Simulated authentication outcome picked by the demo operator
///
/// Stands in for the bank's real response; never derived from the OTP value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Simulate the bank approving the authentication
    Authenticated,
    /// Simulate the bank declining the authentication
    Declined,
}

/// Inputs to the flow controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowEvent {
    /// User starts the demo from the landing screen
    BeginAuthentication,

    /// User skips the redirect wait instead of letting the countdown finish
    ProceedToOtp,

    /// User navigates back from OTP entry to the redirect screen
    BackToRedirect,

    /// User typed a character into the OTP field
    OtpChar(char),

    /// User deleted the last OTP digit
    OtpBackspace,

    /// User submitted the OTP form
    SubmitOtp,

    /// User asked for the OTP to be resent
    ResendOtp,

    /// Operator picked an outcome while the simulation prompt is open
    ChooseOutcome(Outcome),

    /// Operator dismissed the simulation prompt without choosing
    CancelOutcome,

    /// User retries authentication from the failure screen
    RetryAuthentication,

    /// User returns to the landing screen
    ReturnToStart,

    /// An active countdown reached zero
    TimerElapsed(TimerKind),
}

/// Severity of a user-facing notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyLevel {
    Info,
    Success,
    Error,
}

/// Requests the controller makes of its collaborators
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Show the view for the given screen
    Navigate(Screen),

    /// Display a transient notification
    Notify {
        level: NotifyLevel,
        message: String,
    },
}

impl Effect {
    /// Shorthand for an error notification
    pub fn error(message: impl Into<String>) -> Self {
        Effect::Notify {
            level: NotifyLevel::Error,
            message: message.into(),
        }
    }

    /// Shorthand for a success notification
    pub fn success(message: impl Into<String>) -> Self {
        Effect::Notify {
            level: NotifyLevel::Success,
            message: message.into(),
        }
    }
}
