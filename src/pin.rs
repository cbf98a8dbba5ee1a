//! PIN lock gate
//!
//! A fixed 4-digit code compared against keypad input. This is a privacy
//! curtain for the screen, not access control: the code is a literal.

/// The unlock code
pub const PIN: &str = "1235";

/// Number of digits collected before checking
pub const PIN_LEN: usize = 4;

/// Result of feeding one digit to the gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinOutcome {
    /// Fewer than four digits entered
    Pending,
    /// Correct code; the gate is open
    Unlocked,
    /// Wrong code; input was cleared
    Rejected,
}

/// Keypad input state
#[derive(Debug, Clone, Default)]
pub struct PinGate {
    input: String,
    /// Set by a rejected attempt until the next key press (drives the bell
    /// and the error styling of the dots)
    pub rejected: bool,
}

impl PinGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of digits entered so far
    pub fn entered(&self) -> usize {
        self.input.len()
    }

    /// Append a digit; non-digits and digits past the fourth are ignored
    pub fn push(&mut self, digit: char) -> PinOutcome {
        self.rejected = false;
        if !digit.is_ascii_digit() || self.input.len() >= PIN_LEN {
            return PinOutcome::Pending;
        }

        self.input.push(digit);
        if self.input.len() < PIN_LEN {
            return PinOutcome::Pending;
        }

        let matched = self.input == PIN;
        self.input.clear();
        if matched {
            PinOutcome::Unlocked
        } else {
            self.rejected = true;
            PinOutcome::Rejected
        }
    }

    /// Remove the last digit
    pub fn backspace(&mut self) {
        self.rejected = false;
        self.input.pop();
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.rejected = false;
    }
}
