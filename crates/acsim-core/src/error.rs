//! Error types for the acsim core

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ValidationError>;

/// Validation failures raised by the flow controller
///
/// These are always recovered locally — the flow stays on the current screen
/// and the user sees a transient notification. A declined authentication is
/// a simulated business outcome, not an error, and never appears here.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid_otp_length")]
    InvalidOtpLength,

    #[error("otp_expired")]
    OtpExpired,
}

impl ValidationError {
    /// Message shown to the user in the notification toast
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::InvalidOtpLength => "Please enter a 6-digit OTP",
            ValidationError::OtpExpired => {
                "The OTP has expired. Please request a new code."
            }
        }
    }
}
