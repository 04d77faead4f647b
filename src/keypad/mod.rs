//! Keypad calculator
//!
//! The desktop calculator's widget state modeled as an explicit struct. Each
//! key press is a state transition; the caller renders `display_text()`.
//! - `key`: key events parsed from button labels
//! - `state`: `KeypadState` and its transitions

mod key;
mod state;

pub use key::Key;
pub use state::{Display, KeypadState};
