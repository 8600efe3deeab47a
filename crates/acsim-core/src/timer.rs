//! Countdown timers
//!
//! Each screen that auto-transitions owns exactly one [`Countdown`]. The
//! controller holds it in a single slot, so starting a new countdown or
//! leaving the owning screen always drops the previous one — a cancelled
//! countdown can never fire.

/// Which countdown is running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Bank-redirect wait, auto-advances to OTP entry
    Redirect,
    /// OTP validity window on the entry screen
    OtpExpiry,
    /// Success screen auto-return to the merchant
    ReturnToMerchant,
}

/// An owned, cancellable one-second countdown
///
/// Decrements once per [`tick`](Countdown::tick) and reports completion
/// exactly once; after that, further ticks are no-ops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    kind: TimerKind,
    initial: u32,
    remaining: u32,
}

impl Countdown {
    /// Start a countdown of `secs` whole seconds
    pub fn new(kind: TimerKind, secs: u32) -> Self {
        Self {
            kind,
            initial: secs,
            remaining: secs,
        }
    }

    /// Advance by one second; returns `true` on the tick that reaches zero
    pub fn tick(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        self.remaining == 0
    }

    pub fn kind(&self) -> TimerKind {
        self.kind
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn initial(&self) -> u32 {
        self.initial
    }

    /// Elapsed fraction in `0.0..=1.0`, for progress bars
    pub fn progress(&self) -> f64 {
        if self.initial == 0 {
            return 1.0;
        }
        f64::from(self.initial - self.remaining) / f64::from(self.initial)
    }

    /// Format remaining time as MM:SS
    pub fn remaining_formatted(&self) -> String {
        let mins = self.remaining / 60;
        let secs = self.remaining % 60;
        format!("{:02}:{:02}", mins, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_fires_exactly_once() {
        let mut countdown = Countdown::new(TimerKind::ReturnToMerchant, 3);
        assert!(!countdown.tick());
        assert!(!countdown.tick());
        assert!(countdown.tick());
        // Exhausted countdowns never fire again
        assert!(!countdown.tick());
        assert_eq!(countdown.remaining(), 0);
    }

    #[test]
    fn test_remaining_formatted() {
        let countdown = Countdown::new(TimerKind::OtpExpiry, 120);
        assert_eq!(countdown.remaining_formatted(), "02:00");

        let mut countdown = Countdown::new(TimerKind::OtpExpiry, 61);
        countdown.tick();
        assert_eq!(countdown.remaining_formatted(), "01:00");
    }

    #[test]
    fn test_zero_length_never_fires() {
        let mut countdown = Countdown::new(TimerKind::Redirect, 0);
        assert!(!countdown.tick());
        assert_eq!(countdown.remaining(), 0);
    }

    proptest! {
        /// After M < N ticks, remaining == N - M and the countdown has not
        /// fired; after N ticks it has fired exactly once.
        #[test]
        fn prop_countdown_invariant(n in 1u32..600, m_ratio in 0.0f64..1.0) {
            let m = ((f64::from(n) * m_ratio) as u32).min(n - 1);
            let mut countdown = Countdown::new(TimerKind::Redirect, n);

            for _ in 0..m {
                prop_assert!(!countdown.tick());
            }
            prop_assert_eq!(countdown.remaining(), n - m);

            let mut fired = 0;
            for _ in m..n {
                if countdown.tick() {
                    fired += 1;
                }
            }
            prop_assert_eq!(fired, 1);
            prop_assert_eq!(countdown.remaining(), 0);
            prop_assert!(!countdown.tick());
        }

        #[test]
        fn prop_progress_bounded(n in 1u32..600, ticks in 0u32..700) {
            let mut countdown = Countdown::new(TimerKind::OtpExpiry, n);
            for _ in 0..ticks {
                countdown.tick();
            }
            let p = countdown.progress();
            prop_assert!((0.0..=1.0).contains(&p));
        }
    }
}
