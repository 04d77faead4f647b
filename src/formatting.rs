//! Formatting helpers shared by the console shells and the MCP tools

use crate::arith::EvalResult;
use crate::currency::RateTable;
use crate::todo::TodoList;

/// Render a number using the shortest representation that round-trips
///
/// Whole numbers print without a fractional part (`10`, not `10.0`).
pub fn format_number(value: f64) -> String {
    format!("{}", value)
}

/// `Result: <value>` or `Error: <message>`
pub fn format_eval_result(result: EvalResult<f64>) -> String {
    match result {
        Ok(value) => format!("Result: {}", format_number(value)),
        Err(e) => format!("Error: {}", e),
    }
}

pub fn format_conversion(converted: f64, to: &str) -> String {
    format!("Converted Amount: {:.2} {}", converted, to.trim().to_uppercase())
}

/// List supported currencies with their rate against the base currency
pub fn format_rates(table: &RateTable) -> String {
    let mut result = format!("Exchange rates (1 unit in {}):\n", table.base());
    for code in table.currencies() {
        if let Some(rate) = table.rate(code) {
            result.push_str(&format!("  {}: {}\n", code, format_number(rate)));
        }
    }
    if let Some(date) = table.as_of() {
        result.push_str(&format!("As of: {}\n", date));
    }
    result
}

/// Numbered task listing, or a notice when the list is empty
pub fn format_tasks(list: &TodoList) -> String {
    if list.is_empty() {
        return "No tasks in your list.".to_string();
    }

    let mut result = "Your To-Do List:\n".to_string();
    for (idx, task) in list.tasks().iter().enumerate() {
        result.push_str(&format!("{}. {}\n", idx + 1, task));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arith::EvalError;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(10.0), "10");
        assert_eq!(format_number(0.25), "0.25");
        assert_eq!(format_number(-3.5), "-3.5");
    }

    #[test]
    fn test_format_eval_result() {
        assert_eq!(format_eval_result(Ok(6.0)), "Result: 6");
        assert_eq!(
            format_eval_result(Err(EvalError::DivisionByZero)),
            "Error: Division by zero is not allowed."
        );
    }

    #[test]
    fn test_format_conversion_rounds_to_cents() {
        assert_eq!(format_conversion(10.5, "ghs"), "Converted Amount: 10.50 GHS");
        assert_eq!(format_conversion(1.0 / 3.0, "USD"), "Converted Amount: 0.33 USD");
    }

    #[test]
    fn test_format_rates() {
        let text = format_rates(&RateTable::default());
        assert!(text.starts_with("Exchange rates (1 unit in GHS):"));
        assert!(text.contains("  USD: 10.5\n"));
        assert!(!text.contains("As of"));
    }

    #[test]
    fn test_format_tasks() {
        assert_eq!(format_tasks(&TodoList::new()), "No tasks in your list.");

        let list = TodoList::from_tasks(["read".to_string(), "write".to_string()]);
        assert_eq!(format_tasks(&list), "Your To-Do List:\n1. read\n2. write\n");
    }
}
