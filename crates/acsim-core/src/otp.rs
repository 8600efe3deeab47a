//! OTP input buffer
//!
//! Holds the digits the cardholder has typed so far. Edits are sanitized at
//! the point of entry: only ASCII digits are accepted and the buffer never
//! grows past [`OTP_LENGTH`](crate::OTP_LENGTH).

use crate::error::ValidationError;
use crate::OTP_LENGTH;

/// Digit-only OTP input buffer, length 0 to 6
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OtpInput {
    digits: String,
}

impl OtpInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a typed character; non-digits and overflow are dropped
    pub fn push(&mut self, c: char) {
        if c.is_ascii_digit() && self.digits.len() < OTP_LENGTH {
            self.digits.push(c);
        }
    }

    /// Delete the last digit
    pub fn pop(&mut self) {
        self.digits.pop();
    }

    /// Reset to empty (OTP session entry, resend)
    pub fn clear(&mut self) {
        self.digits.clear();
    }

    pub fn as_str(&self) -> &str {
        &self.digits
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Check the buffer is submittable: exactly 6 digits
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.digits.len() == OTP_LENGTH {
            Ok(())
        } else {
            Err(ValidationError::InvalidOtpLength)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[test]
    fn test_push_sanitizes() {
        let mut otp = OtpInput::new();
        for c in "1a2b3-4 5x6".chars() {
            otp.push(c);
        }
        assert_eq!(otp.as_str(), "123456");
    }

    #[test]
    fn test_push_caps_length() {
        let mut otp = OtpInput::new();
        for c in "123456789".chars() {
            otp.push(c);
        }
        assert_eq!(otp.as_str(), "123456");
    }

    #[test]
    fn test_pop_and_clear() {
        let mut otp = OtpInput::new();
        otp.push('1');
        otp.push('2');
        otp.pop();
        assert_eq!(otp.as_str(), "1");
        otp.clear();
        assert!(otp.is_empty());
    }

    #[rstest]
    #[case("")]
    #[case("1")]
    #[case("12345")]
    fn test_validate_rejects_short(#[case] input: &str) {
        let mut otp = OtpInput::new();
        for c in input.chars() {
            otp.push(c);
        }
        assert_eq!(otp.validate(), Err(ValidationError::InvalidOtpLength));
    }

    #[test]
    fn test_validate_accepts_six_digits() {
        let mut otp = OtpInput::new();
        for c in "000000".chars() {
            otp.push(c);
        }
        assert!(otp.validate().is_ok());
    }

    proptest! {
        /// The buffer only ever contains digits and never exceeds 6 of them,
        /// regardless of what is typed.
        #[test]
        fn prop_buffer_always_sanitized(input in "\\PC*") {
            let mut otp = OtpInput::new();
            for c in input.chars() {
                otp.push(c);
            }
            prop_assert!(otp.len() <= OTP_LENGTH);
            prop_assert!(otp.as_str().chars().all(|c| c.is_ascii_digit()));
        }
    }
}
