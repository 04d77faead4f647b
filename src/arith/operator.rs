use super::evaluator::{self, EvalResult};
use std::fmt;
use std::str::FromStr;

/// Binary operator entered on the keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl Operator {
    /// Symbol shown to the user for this operator
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
            Operator::Power => "^",
        }
    }

    /// Apply the operator to two operands via the variadic evaluator
    pub fn apply(self, lhs: f64, rhs: f64) -> EvalResult<f64> {
        match self {
            Operator::Add => Ok(evaluator::add(&[lhs, rhs])),
            Operator::Subtract => Ok(evaluator::subtract(&[lhs, rhs])),
            Operator::Multiply => Ok(evaluator::multiply(&[lhs, rhs])),
            Operator::Divide => evaluator::divide(&[lhs, rhs]),
            Operator::Power => Ok(evaluator::power(lhs, rhs)),
        }
    }
}

impl FromStr for Operator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Subtract),
            "*" | "x" | "×" => Ok(Operator::Multiply),
            "/" | "÷" => Ok(Operator::Divide),
            "^" => Ok(Operator::Power),
            _ => Err(format!(
                "Invalid operator '{}'. Valid operators are: +, -, *, /, ^",
                s
            )),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arith::EvalError;

    #[test]
    fn test_operator_from_str() {
        assert_eq!("+".parse::<Operator>(), Ok(Operator::Add));
        assert_eq!("-".parse::<Operator>(), Ok(Operator::Subtract));
        assert_eq!("*".parse::<Operator>(), Ok(Operator::Multiply));
        assert_eq!("x".parse::<Operator>(), Ok(Operator::Multiply));
        assert_eq!("/".parse::<Operator>(), Ok(Operator::Divide));
        assert_eq!("^".parse::<Operator>(), Ok(Operator::Power));
        assert!("%".parse::<Operator>().is_err());
    }

    #[test]
    fn test_operator_apply() {
        assert_eq!(Operator::Add.apply(5.0, 3.0), Ok(8.0));
        assert_eq!(Operator::Subtract.apply(5.0, 3.0), Ok(2.0));
        assert_eq!(Operator::Multiply.apply(5.0, 3.0), Ok(15.0));
        assert_eq!(Operator::Divide.apply(6.0, 3.0), Ok(2.0));
        assert_eq!(Operator::Power.apply(2.0, 3.0), Ok(8.0));
        assert_eq!(
            Operator::Divide.apply(6.0, 0.0),
            Err(EvalError::DivisionByZero)
        );
    }

    #[test]
    fn test_operator_display_round_trips_symbol() {
        for op in [
            Operator::Add,
            Operator::Subtract,
            Operator::Multiply,
            Operator::Divide,
            Operator::Power,
        ] {
            assert_eq!(op.to_string().parse::<Operator>(), Ok(op));
        }
    }
}
