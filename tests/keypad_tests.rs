//! Keypad state transitions
mod common;

use common::press;
use toolbelt::keypad::Display;
use toolbelt::{KeypadState, Operator};

#[test]
fn test_chained_calculation() {
    let mut state = KeypadState::new();
    press(&mut state, "2 + 3 * 4 =");
    assert_eq!(state.display_text(), "20");
}

#[test]
fn test_result_can_be_used_as_first_operand() {
    let mut state = KeypadState::new();
    press(&mut state, "6 * 7 = - 2 =");
    assert_eq!(state.display_text(), "40");
}

#[test]
fn test_pending_operator_is_tracked() {
    let mut state = KeypadState::new();
    press(&mut state, "9 ^");
    assert_eq!(state.first_operand(), Some(9.0));
    assert_eq!(state.pending_operator(), Some(Operator::Power));
    press(&mut state, "2 =");
    assert_eq!(state.display_text(), "81");
}

#[test]
fn test_decimal_entry() {
    let mut state = KeypadState::new();
    press(&mut state, "1.5 * .5 =");
    assert_eq!(state.display_text(), "0.75");
}

#[test]
fn test_error_is_a_distinct_display_variant() {
    let mut state = KeypadState::new();
    press(&mut state, "5 / 0 =");
    assert_eq!(
        state.display(),
        &Display::Error("Error: Division by zero is not allowed.".to_string())
    );

    // Operators cannot pick the error text up as an operand
    press(&mut state, "* 2 =");
    assert_eq!(state.display_text(), "2");
    assert_eq!(state.first_operand(), None);
}

#[test]
fn test_clear_after_error() {
    let mut state = KeypadState::new();
    press(&mut state, "0 - 9 = sqrt C");
    assert_eq!(state, KeypadState::new());
}

#[test]
fn test_repeated_operator_chains_with_display_value() {
    let mut state = KeypadState::new();
    press(&mut state, "5 + *");
    assert_eq!(state.display_text(), "10");
    assert_eq!(state.pending_operator(), Some(Operator::Multiply));
    press(&mut state, "3 =");
    assert_eq!(state.display_text(), "30");
}

#[test]
fn test_overflowing_power_is_an_error() {
    let mut state = KeypadState::new();
    press(&mut state, "2 ^ 2000 =");
    assert_eq!(
        state.display(),
        &Display::Error("Error: Result is not a finite number.".to_string())
    );
}
