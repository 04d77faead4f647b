use thiserror::Error;

/// Errors the evaluator reports instead of returning a sentinel number
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    /// A divisor in a division chain was exactly zero
    #[error("Division by zero is not allowed.")]
    DivisionByZero,
    /// Square root of a negative number was requested
    #[error("Cannot calculate the square root of a negative number.")]
    NegativeRoot,
}

pub type EvalResult<T> = Result<T, EvalError>;

/// Sum of all operands; 0 when empty.
pub fn add(numbers: &[f64]) -> f64 {
    numbers.iter().fold(0.0, |acc, n| acc + n)
}

/// First operand minus each subsequent one, left to right; 0 when empty.
pub fn subtract(numbers: &[f64]) -> f64 {
    match numbers.split_first() {
        Some((first, rest)) => rest.iter().fold(*first, |acc, n| acc - n),
        None => 0.0,
    }
}

/// Product of all operands; 1 when empty.
pub fn multiply(numbers: &[f64]) -> f64 {
    numbers.iter().fold(1.0, |acc, n| acc * n)
}

/// First operand divided by each subsequent one, left to right; 1 when empty.
///
/// # Errors
/// Returns [`EvalError::DivisionByZero`] if any divisor is zero, even when it
/// appears after other divisors.
///
/// # Examples
/// ```
/// use toolbelt::arith::{EvalError, divide};
///
/// assert_eq!(divide(&[100.0, 5.0, 2.0]), Ok(10.0));
/// assert_eq!(divide(&[1.0, 0.0]), Err(EvalError::DivisionByZero));
/// ```
pub fn divide(numbers: &[f64]) -> EvalResult<f64> {
    let Some((first, rest)) = numbers.split_first() else {
        return Ok(1.0);
    };

    rest.iter().try_fold(*first, |acc, divisor| {
        // -0.0 == 0.0 holds, so negative zero is rejected too
        if *divisor == 0.0 {
            Err(EvalError::DivisionByZero)
        } else {
            Ok(acc / divisor)
        }
    })
}

/// `base` raised to `exponent`; fractional and negative exponents are allowed.
pub fn power(base: f64, exponent: f64) -> f64 {
    base.powf(exponent)
}

/// Principal (non-negative) square root.
///
/// # Errors
/// Returns [`EvalError::NegativeRoot`] when `number` is negative.
pub fn square_root(number: f64) -> EvalResult<f64> {
    if number < 0.0 {
        return Err(EvalError::NegativeRoot);
    }
    Ok(number.sqrt())
}
