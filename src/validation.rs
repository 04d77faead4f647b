//! Input validation for the console shells
//!
//! The evaluator only ever sees numbers; text typed at a prompt is checked
//! here first.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid input '{0}'. Please enter a valid number.")]
    InvalidNumber(String),
    #[error("Invalid task number '{0}'. Please enter a valid number.")]
    InvalidTaskNumber(String),
}

/// Parse a floating-point operand typed by the user
///
/// Surrounding whitespace is ignored; `inf` and `nan` are accepted the way
/// `f64::from_str` accepts them.
///
/// # Examples
/// ```
/// # use toolbelt::validation::parse_number;
/// assert_eq!(parse_number(" 2.5 "), Ok(2.5));
/// assert!(parse_number("two").is_err());
/// ```
pub fn parse_number(input: &str) -> Result<f64, InputError> {
    let trimmed = input.trim();
    trimmed
        .parse::<f64>()
        .map_err(|_| InputError::InvalidNumber(trimmed.to_string()))
}

/// Parse a 1-based task number; range checking is left to the list
pub fn parse_task_number(input: &str) -> Result<usize, InputError> {
    let trimmed = input.trim();
    trimmed
        .parse::<usize>()
        .map_err(|_| InputError::InvalidTaskNumber(trimmed.to_string()))
}

/// `true` when the user typed the end-of-operands marker (`done`, any case)
pub fn is_done_marker(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("done")
}
