//! Flow screens

/// Current screen/view of the authentication flow
///
/// Exactly one screen is active at any time; every change goes through the
/// [`FlowController`](crate::FlowController).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Landing page with the demo introduction
    #[default]
    Landing,

    /// "Redirecting you to your bank" interstitial
    Redirect,

    /// Cardholder OTP entry form
    OtpEntry,

    /// Authentication succeeded, returning to merchant
    Success,

    /// Authentication failed
    Failure,
}

impl Screen {
    /// Stable string id, usable as a navigation address
    pub fn id(&self) -> &'static str {
        match self {
            Screen::Landing => "landing",
            Screen::Redirect => "redirect",
            Screen::OtpEntry => "otp-entry",
            Screen::Success => "success",
            Screen::Failure => "failure",
        }
    }

    /// Resolve a navigation address back to a screen
    ///
    /// Unknown ids return `None`; the front end is responsible for its own
    /// "not found" fallback.
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "landing" => Some(Screen::Landing),
            "redirect" => Some(Screen::Redirect),
            "otp-entry" => Some(Screen::OtpEntry),
            "success" => Some(Screen::Success),
            "failure" => Some(Screen::Failure),
            _ => None,
        }
    }

    /// Human-readable title for headers and breadcrumbs
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Landing => "3D Secure Demo",
            Screen::Redirect => "Connecting to Bank",
            Screen::OtpEntry => "Cardholder Authentication",
            Screen::Success => "Authentication Successful",
            Screen::Failure => "Authentication Failed",
        }
    }
}
