//! Shared PIN pad
//!
//! Digits accumulate up to [`PIN_LENGTH`]; the entry is checked as soon as
//! the last digit lands. A wrong PIN resets the entry.

/// Number of digits in the PIN
pub const PIN_LENGTH: usize = 4;

/// PIN used when none is configured
pub const DEFAULT_PIN: &str = "0000";

/// One key on the pad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinKey {
    Digit(char),
    Backspace,
}

impl PinKey {
    /// Map a typed character; anything but a digit or backspace is ignored
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => Some(Self::Digit(c)),
            '\u{8}' | '\u{7f}' | '<' => Some(Self::Backspace),
            _ => None,
        }
    }
}

/// State after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinState {
    /// Still collecting; number of digits entered so far (for the dots)
    Incomplete(usize),
    Unlocked,
    /// Wrong PIN, entry was reset
    Rejected,
}

#[derive(Debug, Clone)]
pub struct PinPad {
    expected: String,
    entered: String,
    unlocked: bool,
}

impl PinPad {
    pub fn new(expected: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
            entered: String::with_capacity(PIN_LENGTH),
            unlocked: false,
        }
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    /// Number of digits currently entered
    pub fn entered_len(&self) -> usize {
        self.entered.len()
    }

    pub fn press(&mut self, key: PinKey) -> PinState {
        if self.unlocked {
            return PinState::Unlocked;
        }

        match key {
            PinKey::Backspace => {
                self.entered.pop();
            }
            PinKey::Digit(d) if d.is_ascii_digit() && self.entered.len() < PIN_LENGTH => {
                self.entered.push(d);
            }
            PinKey::Digit(_) => {}
        }

        if self.entered.len() < PIN_LENGTH {
            return PinState::Incomplete(self.entered.len());
        }

        if self.entered == self.expected {
            tracing::info!("PIN accepted");
            self.unlocked = true;
            PinState::Unlocked
        } else {
            tracing::warn!("Wrong PIN entered");
            self.entered.clear();
            PinState::Rejected
        }
    }

    /// Feed a whole line of typed characters, stopping at the first check
    pub fn press_str(&mut self, input: &str) -> PinState {
        let mut state = PinState::Incomplete(self.entered.len());
        for key in input.chars().filter_map(PinKey::from_char) {
            state = self.press(key);
            if !matches!(state, PinState::Incomplete(_)) {
                break;
            }
        }
        state
    }
}

impl Default for PinPad {
    fn default() -> Self {
        Self::new(DEFAULT_PIN)
    }
}
