//! acsim Core - Flow controller for the 3D Secure authentication demo
//!
//! This crate owns the authentication flow state machine: which screen is
//! active, the countdowns that drive auto-transitions, OTP input validation,
//! and the simulated outcome resolution. It performs no I/O and has no
//! terminal dependency; front ends feed it [`FlowEvent`]s and apply the
//! [`Effect`]s it emits.

pub mod config;
pub mod controller;
pub mod error;
pub mod event;
pub mod otp;
pub mod screen;
pub mod timer;

pub use config::DemoConfig;
pub use controller::FlowController;
pub use error::{Result, ValidationError};
pub use event::{Effect, FlowEvent, NotifyLevel, Outcome};
pub use otp::OtpInput;
pub use screen::Screen;
pub use timer::{Countdown, TimerKind};

/// Seconds the bank-redirect screen waits before moving to OTP entry
pub const REDIRECT_SECS: u32 = 10;

/// Seconds before an issued OTP expires
pub const OTP_EXPIRY_SECS: u32 = 120;

/// Seconds the success screen waits before returning to the landing screen
pub const RETURN_TO_MERCHANT_SECS: u32 = 3;

/// Required OTP length in digits
pub const OTP_LENGTH: usize = 6;

/// Informational attempts counter shown on the OTP screen
pub const OTP_ATTEMPTS: u32 = 3;
