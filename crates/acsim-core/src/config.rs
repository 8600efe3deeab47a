//! Demo configuration
//!
//! Fixed display values shown to the user (amount, masked card, merchant,
//! masked contact) plus the countdown durations. None of these affect the
//! transition table; the controller carries them so screens render a single
//! authoritative projection of state.

use serde::{Deserialize, Serialize};

use crate::{OTP_EXPIRY_SECS, REDIRECT_SECS, RETURN_TO_MERCHANT_SECS};

/// Static configuration for the simulated transaction and flow timing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DemoConfig {
    /// Merchant name shown in the transaction summary
    #[serde(default = "default_merchant")]
    pub merchant: String,

    /// Display amount, already formatted with its currency
    #[serde(default = "default_amount")]
    pub amount: String,

    /// Masked card number
    #[serde(default = "default_card_mask")]
    pub card_mask: String,

    /// Masked registered contact the OTP is "sent" to
    #[serde(default = "default_contact_mask")]
    pub contact_mask: String,

    /// Instructional code shown in the demo info box; not enforced
    #[serde(default = "default_demo_code")]
    pub demo_code: String,

    /// Bank-redirect wait in seconds
    #[serde(default = "default_redirect_secs")]
    pub redirect_secs: u32,

    /// OTP validity window in seconds
    #[serde(default = "default_otp_expiry_secs")]
    pub otp_expiry_secs: u32,

    /// Success auto-return delay in seconds
    #[serde(default = "default_return_secs")]
    pub return_to_merchant_secs: u32,
}

fn default_merchant() -> String {
    "ExampleStore.com".to_string()
}

fn default_amount() -> String {
    "INR 1,234.56".to_string()
}

fn default_card_mask() -> String {
    "•••• 4321".to_string()
}

fn default_contact_mask() -> String {
    "••45".to_string()
}

fn default_demo_code() -> String {
    "123456".to_string()
}

fn default_redirect_secs() -> u32 {
    REDIRECT_SECS
}

fn default_otp_expiry_secs() -> u32 {
    OTP_EXPIRY_SECS
}

fn default_return_secs() -> u32 {
    RETURN_TO_MERCHANT_SECS
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            merchant: default_merchant(),
            amount: default_amount(),
            card_mask: default_card_mask(),
            contact_mask: default_contact_mask(),
            demo_code: default_demo_code(),
            redirect_secs: default_redirect_secs(),
            otp_expiry_secs: default_otp_expiry_secs(),
            return_to_merchant_secs: default_return_secs(),
        }
    }
}
