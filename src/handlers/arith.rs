//! Arithmetic tool handlers

use crate::ToolbeltServerHandler;
use crate::arith::{self, EvalResult};
use crate::formatting::format_number;
use mcp_attr::{Result as McpResult, bail_public};
use tracing::debug;

/// Turn an evaluator result into tool output, surfacing errors to the client
fn respond(operation: &str, result: EvalResult<f64>) -> McpResult<String> {
    match result {
        Ok(value) => {
            debug!(operation, value, "evaluated");
            Ok(format_number(value))
        }
        Err(e) => {
            debug!(operation, error = %e, "evaluation failed");
            bail_public!(_, "{}", e);
        }
    }
}

impl ToolbeltServerHandler {
    pub async fn handle_add(&self, numbers: Vec<f64>) -> McpResult<String> {
        respond("add", Ok(arith::add(&numbers)))
    }

    pub async fn handle_subtract(&self, numbers: Vec<f64>) -> McpResult<String> {
        respond("subtract", Ok(arith::subtract(&numbers)))
    }

    pub async fn handle_multiply(&self, numbers: Vec<f64>) -> McpResult<String> {
        respond("multiply", Ok(arith::multiply(&numbers)))
    }

    /// Division chain; any zero divisor fails the whole call.
    pub async fn handle_divide(&self, numbers: Vec<f64>) -> McpResult<String> {
        respond("divide", arith::divide(&numbers))
    }

    pub async fn handle_power(&self, base: f64, exponent: f64) -> McpResult<String> {
        respond("power", Ok(arith::power(base, exponent)))
    }

    pub async fn handle_square_root(&self, number: f64) -> McpResult<String> {
        respond("square_root", arith::square_root(number))
    }
}
