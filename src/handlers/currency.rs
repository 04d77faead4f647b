//! Currency tool handlers

use crate::ToolbeltServerHandler;
use crate::formatting::{format_conversion, format_rates};
use mcp_attr::{Result as McpResult, bail_public};

impl ToolbeltServerHandler {
    /// Converts through the base currency and formats with two decimals.
    pub async fn handle_convert(&self, amount: f64, from: String, to: String) -> McpResult<String> {
        if !amount.is_finite() {
            bail_public!(_, "Invalid amount {}. Please enter a finite number.", amount);
        }

        match self.rates.convert(amount, &from, &to) {
            Ok(converted) => Ok(format_conversion(converted, &to)),
            Err(e) => {
                bail_public!(
                    _,
                    "{} Supported currencies: {}",
                    e,
                    self.rates.currencies().join(", ")
                );
            }
        }
    }

    pub async fn handle_currencies(&self) -> McpResult<String> {
        Ok(format_rates(&self.rates))
    }
}
