//! Access gate
//!
//! The app is unlocked with one PIN shared by all waitstaff:
//! - [`PinPad`] - digit entry and check

pub mod pin;

pub use pin::{DEFAULT_PIN, PIN_LENGTH, PinKey, PinPad, PinState};
