//! Line-oriented front end for the keypad calculator

use anyhow::Result;
use std::io::{BufRead, Write};

use super::Console;
use crate::keypad::{Key, KeypadState};

impl<R: BufRead, W: Write> Console<R, W> {
    /// Read whitespace-separated keys per line and print the display after each line.
    ///
    /// Digit runs such as `12.5` are accepted as a shorthand for pressing each
    /// key. `q` or `quit` ends the session.
    pub fn run_keypad(&mut self) -> Result<KeypadState> {
        let mut state = KeypadState::new();
        self.say("Keypad calculator. Keys: 0-9 . + - * / ^ = C sqrt (q to quit)")?;
        self.say(format!("[{}]", state.display_text()))?;

        while let Some(line) = self.prompt("> ")? {
            if line == "q" || line == "quit" {
                break;
            }

            for token in line.split_whitespace() {
                let keys = match Key::parse_number_run(token) {
                    Some(keys) => keys,
                    None => match token.parse::<Key>() {
                        Ok(key) => vec![key],
                        Err(e) => {
                            self.say(e)?;
                            continue;
                        }
                    },
                };
                state.press_all(keys);
            }

            self.say(format!("[{}]", state.display_text()))?;
        }

        Ok(state)
    }
}
