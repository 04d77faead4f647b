//! Variadic arithmetic evaluator
//!
//! Pure functions over an ordered operand sequence. Every call is
//! side-effect free, so repeating a call with the same operands always
//! yields the same result.
//! - `evaluator`: add, subtract, multiply, divide, power, square_root
//! - `operator`: binary operator symbols used by the keypad and console shells

mod evaluator;
mod operator;

pub use evaluator::{EvalError, EvalResult, add, divide, multiply, power, square_root, subtract};
pub use operator::Operator;
