use crate::arith::Operator;
use std::str::FromStr;

/// A single key press on the keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Decimal digit 0-9
    Digit(char),
    /// Decimal point
    Point,
    /// Binary operator (+, -, *, /, ^)
    Operator(Operator),
    /// `=`
    Equals,
    /// `C`: reset display and pending operation
    Clear,
    /// `√`: square root of the displayed value
    SquareRoot,
}

impl Key {
    /// Expand a run of digits and points such as `12.5` into single keys.
    ///
    /// Returns `None` if the token contains anything else.
    pub fn parse_number_run(token: &str) -> Option<Vec<Key>> {
        if token.is_empty() {
            return None;
        }
        token
            .chars()
            .map(|c| match c {
                '0'..='9' => Some(Key::Digit(c)),
                '.' => Some(Key::Point),
                _ => None,
            })
            .collect()
    }
}

impl FromStr for Key {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "=" => Ok(Key::Equals),
            "C" | "c" => Ok(Key::Clear),
            "√" | "sqrt" => Ok(Key::SquareRoot),
            "." => Ok(Key::Point),
            _ => {
                let mut chars = s.chars();
                if let (Some(c), None) = (chars.next(), chars.next())
                    && c.is_ascii_digit()
                {
                    return Ok(Key::Digit(c));
                }
                s.parse::<Operator>().map(Key::Operator).map_err(|_| {
                    format!(
                        "Invalid key '{}'. Valid keys: 0-9, ., +, -, *, /, ^, =, C, sqrt",
                        s
                    )
                })
            }
        }
    }
}
