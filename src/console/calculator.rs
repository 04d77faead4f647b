//! Menu-driven calculator shell

use anyhow::Result;
use std::io::{BufRead, Write};

use super::Console;
use crate::arith::{self, EvalResult};
use crate::formatting::format_eval_result;
use crate::validation::{is_done_marker, parse_number};

const MENU: &str = "\n--- Select an operation ---
1. Addition (+)
2. Subtraction (-)
3. Multiplication (*)
4. Division (/)
5. Power (^)
6. Square Root (√)
7. Exit";

impl<R: BufRead, W: Write> Console<R, W> {
    /// Run the calculator menu until the user exits or input ends.
    pub fn run_calculator(&mut self) -> Result<()> {
        self.say("Welcome to the Simple Calculator!")?;

        loop {
            self.say(MENU)?;
            let Some(choice) = self.prompt("Enter your choice (1-7): ")? else {
                return Ok(());
            };

            let outcome = match choice.as_str() {
                "1" => self.variadic("addition", |n| Ok(arith::add(n)))?,
                "2" => self.variadic("subtraction", |n| Ok(arith::subtract(n)))?,
                "3" => self.variadic("multiplication", |n| Ok(arith::multiply(n)))?,
                "4" => self.variadic("division", arith::divide)?,
                "5" => self.prompt_power()?,
                "6" => self.prompt_square_root()?,
                "7" => {
                    self.say("Exiting calculator. Goodbye!")?;
                    return Ok(());
                }
                _ => {
                    self.say("Invalid choice. Please enter a number between 1 and 7.")?;
                    continue;
                }
            };

            match outcome {
                Some(line) => self.say(line)?,
                // Input ended mid-operation
                None => return Ok(()),
            }
        }
    }

    /// Collect operands until `done` and apply `op` to them
    fn variadic(
        &mut self,
        name: &str,
        op: impl Fn(&[f64]) -> EvalResult<f64>,
    ) -> Result<Option<String>> {
        match self.read_numbers(name, 1)? {
            Some(numbers) => Ok(Some(format_eval_result(op(&numbers)))),
            None => Ok(None),
        }
    }

    /// Read numbers until `done`, insisting on at least `min_count` of them
    fn read_numbers(&mut self, operation_name: &str, min_count: usize) -> Result<Option<Vec<f64>>> {
        let mut numbers = Vec::new();
        self.say(format!(
            "\nEnter numbers for {} (type 'done' when finished):",
            operation_name
        ))?;

        loop {
            let message = format!("Enter number {}: ", numbers.len() + 1);
            let Some(line) = self.prompt(&message)? else {
                return Ok(None);
            };

            if is_done_marker(&line) {
                if numbers.len() < min_count {
                    self.say(format!(
                        "Please enter at least {} number(s) for this operation.",
                        min_count
                    ))?;
                    continue;
                }
                return Ok(Some(numbers));
            }

            match parse_number(&line) {
                Ok(n) => numbers.push(n),
                Err(_) => self.say("Invalid input. Please enter a valid number or 'done'.")?,
            }
        }
    }

    fn prompt_power(&mut self) -> Result<Option<String>> {
        let Some(base) = self.prompt("Enter the base number: ")? else {
            return Ok(None);
        };
        let Some(exponent) = self.prompt("Enter the exponent: ")? else {
            return Ok(None);
        };

        match (parse_number(&base), parse_number(&exponent)) {
            (Ok(b), Ok(e)) => Ok(Some(format_eval_result(Ok(arith::power(b, e))))),
            _ => Ok(Some("Invalid input. Please enter valid numbers.".to_string())),
        }
    }

    fn prompt_square_root(&mut self) -> Result<Option<String>> {
        let Some(line) = self.prompt("Enter the number to find the square root of: ")? else {
            return Ok(None);
        };

        match parse_number(&line) {
            Ok(n) => Ok(Some(format_eval_result(arith::square_root(n)))),
            Err(_) => Ok(Some("Invalid input. Please enter a valid number.".to_string())),
        }
    }
}
