use super::key::Key;
use crate::arith::{self, Operator};
use crate::formatting::format_number;
use std::fmt;

/// What the keypad screen currently shows
#[derive(Debug, Clone, PartialEq)]
pub enum Display {
    /// Number being typed or the last result; always parses as `f64`
    Entry(String),
    /// Error message from the last evaluation
    Error(String),
}

impl Display {
    pub fn text(&self) -> &str {
        match self {
            Display::Entry(s) | Display::Error(s) => s,
        }
    }
}

/// Calculator state threaded through key events
///
/// An error display is never read back as an operand: operator, equals and
/// square-root keys are ignored until a digit, point or clear key starts a new
/// entry.
#[derive(Debug, Clone, PartialEq)]
pub struct KeypadState {
    display: Display,
    first_operand: Option<f64>,
    operator: Option<Operator>,
    new_input_needed: bool,
}

impl Default for KeypadState {
    fn default() -> Self {
        Self {
            display: Display::Entry("0".to_string()),
            first_operand: None,
            operator: None,
            new_input_needed: true,
        }
    }
}

impl KeypadState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn display(&self) -> &Display {
        &self.display
    }

    pub fn display_text(&self) -> &str {
        self.display.text()
    }

    pub fn is_error(&self) -> bool {
        matches!(self.display, Display::Error(_))
    }

    pub fn first_operand(&self) -> Option<f64> {
        self.first_operand
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.operator
    }

    /// Apply one key press
    pub fn press(&mut self, key: Key) {
        match key {
            Key::Digit(c) => self.input_char(c),
            Key::Point => self.input_char('.'),
            Key::Operator(op) => self.set_operator(op),
            Key::Equals => self.calculate(),
            Key::Clear => self.clear(),
            Key::SquareRoot => self.square_root(),
        }
    }

    /// Apply a sequence of key presses in order
    pub fn press_all(&mut self, keys: impl IntoIterator<Item = Key>) {
        for key in keys {
            self.press(key);
        }
    }

    fn input_char(&mut self, c: char) {
        let starts_new = self.new_input_needed
            || match &self.display {
                Display::Entry(s) => s == "0",
                Display::Error(_) => true,
            };

        if starts_new {
            let text = if c == '.' {
                "0.".to_string()
            } else {
                c.to_string()
            };
            self.display = Display::Entry(text);
            self.new_input_needed = false;
            return;
        }

        if let Display::Entry(s) = &mut self.display {
            if c == '.' && s.contains('.') {
                return;
            }
            s.push(c);
        }
    }

    fn clear(&mut self) {
        *self = Self::default();
    }

    /// Current entry as a number, or `None` while an error is shown
    fn entry_value(&self) -> Option<f64> {
        match &self.display {
            Display::Entry(s) => s.parse().ok(),
            Display::Error(_) => None,
        }
    }

    fn set_operator(&mut self, op: Operator) {
        let Some(current) = self.entry_value() else {
            return;
        };

        // Chained calculation; `5 + *` evaluates `5 + 5` before storing `*`
        if self.first_operand.is_some() && self.operator.is_some() {
            self.calculate();
            if self.is_error() {
                return;
            }
        } else {
            self.first_operand = Some(current);
        }

        self.operator = Some(op);
        self.new_input_needed = true;
    }

    fn calculate(&mut self) {
        let (Some(first), Some(op)) = (self.first_operand, self.operator) else {
            return;
        };
        let Some(second) = self.entry_value() else {
            return;
        };

        match op.apply(first, second) {
            Ok(result) => self.show_result(result),
            Err(e) => self.fail(e),
        }
    }

    fn square_root(&mut self) {
        let Some(current) = self.entry_value() else {
            return;
        };

        match arith::square_root(current) {
            Ok(result) => self.show_result(result),
            Err(e) => self.fail(e),
        }
    }

    /// Show `result`, or an error if it overflowed or is not a number
    fn show_result(&mut self, result: f64) {
        if !result.is_finite() {
            self.fail("Result is not a finite number.");
            return;
        }
        self.display = Display::Entry(format_number(result));
        self.first_operand = Some(result);
        self.operator = None;
        self.new_input_needed = true;
    }

    fn fail(&mut self, message: impl fmt::Display) {
        self.display = Display::Error(format!("Error: {}", message));
        self.first_operand = None;
        self.operator = None;
        self.new_input_needed = true;
    }
}
