//! Betting screen stepper
//!
//! The wager lives in a text input, so every step starts by re-reading
//! whatever the player typed.

use std::fmt;

/// Current bet amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Wager {
    pub amount: u64,
}

impl Wager {
    pub fn new(amount: u64) -> Self {
        Self { amount }
    }

    /// Read a wager from input text.
    ///
    /// Leading digits are used (`"250 coins"` is 250); anything without
    /// leading digits counts as 0.
    pub fn parse(input: &str) -> Self {
        let digits: String = input
            .trim_start()
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        Self::new(digits.parse().unwrap_or(0))
    }

    /// Raise the wager by `step`
    pub fn increment(self, step: u64) -> Self {
        Self::new(self.amount.saturating_add(step))
    }

    /// Lower the wager by `step`, stopping at zero
    pub fn decrement(self, step: u64) -> Self {
        Self::new(self.amount.saturating_sub(step))
    }
}

impl fmt::Display for Wager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.amount)
    }
}
