//! Toolbelt Library
//!
//! A handful of small everyday utilities sharing one crate: a variadic
//! arithmetic evaluator, a keypad calculator, a currency converter over
//! static exchange rates, and a line-delimited to-do list.
//!
//! # Architecture
//!
//! - **Domain Layer**: `arith`, `keypad`, `currency`, `todo` - pure logic, no I/O
//! - **Persistence Layer**: `storage` - the to-do file, `config` - TOML settings
//! - **Shell Layer**: `console` - interactive prompts, `ToolbeltServerHandler` - MCP tools
//!
//! # Example
//!
//! ```
//! use toolbelt::arith::{self, EvalError};
//!
//! assert_eq!(arith::add(&[1.0, 2.0, 3.0]), 6.0);
//! assert_eq!(arith::divide(&[10.0, 0.0]), Err(EvalError::DivisionByZero));
//! ```

pub mod arith;
pub mod config;
pub mod console;
pub mod currency;
pub mod formatting;
pub mod handlers;
pub mod keypad;
pub mod logging;
pub mod storage;
pub mod todo;
pub mod validation;

use anyhow::Result;
use std::path::Path;
use std::sync::Mutex;
use tracing::info;

use mcp_attr::Result as McpResult;
use mcp_attr::server::{McpServer, mcp_server};

// Re-export commonly used types
pub use arith::{EvalError, Operator};
pub use config::Config;
pub use currency::{CurrencyError, RateTable};
pub use keypad::{Key, KeypadState};
pub use storage::Storage;
pub use todo::{TodoError, TodoList};

/// MCP server handler exposing the toolbelt utilities
///
/// Arithmetic and currency tools are stateless. The to-do list is loaded
/// once and written back to its file after every change.
pub struct ToolbeltServerHandler {
    pub(crate) rates: RateTable,
    pub(crate) todo: Mutex<TodoList>,
    pub(crate) storage: Storage,
}

impl ToolbeltServerHandler {
    /// Create a new server handler
    ///
    /// # Arguments
    /// * `todo_path` - Path to the line-delimited to-do file
    /// * `rates` - Exchange-rate table used by `convert`
    ///
    /// # Example
    /// ```no_run
    /// # use toolbelt::{RateTable, ToolbeltServerHandler};
    /// # use anyhow::Result;
    /// # fn main() -> Result<()> {
    /// let handler = ToolbeltServerHandler::new("todo_list.txt", RateTable::default())?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(todo_path: impl AsRef<Path>, rates: RateTable) -> Result<Self> {
        let storage = Storage::new(todo_path);
        let todo = Mutex::new(storage.load()?);
        info!(path = %storage.file_path().display(), "server handler ready");
        Ok(Self {
            rates,
            todo,
            storage,
        })
    }

    fn save_todo(&self) -> Result<()> {
        let list = self.todo.lock().unwrap();
        self.storage.save(&list)?;
        Ok(())
    }
}

/// Everyday utilities: a calculator, a currency converter and a to-do list.
///
/// - **add / subtract / multiply / divide**: operate on an ordered list of numbers,
///   left to right. Empty lists give the identity (0 for add/subtract, 1 for multiply/divide).
/// - **power / square_root**: two-operand and one-operand helpers.
/// - **convert / currencies**: static exchange rates relative to the Ghana cedi (GHS).
/// - **todo_list / todo_add / todo_delete**: a numbered to-do list saved to a text file.
#[mcp_server]
impl McpServer for ToolbeltServerHandler {
    /// Sum numbers. []=0.
    #[tool]
    async fn add(
        &self,
        /// Numbers to add, in order
        numbers: Vec<f64>,
    ) -> McpResult<String> {
        self.handle_add(numbers).await
    }

    /// Subtract each following number from the first: [10, 3, 2] = 5. []=0.
    #[tool]
    async fn subtract(
        &self,
        /// Numbers; the first is the starting value
        numbers: Vec<f64>,
    ) -> McpResult<String> {
        self.handle_subtract(numbers).await
    }

    /// Multiply numbers. []=1.
    #[tool]
    async fn multiply(
        &self,
        /// Numbers to multiply, in order
        numbers: Vec<f64>,
    ) -> McpResult<String> {
        self.handle_multiply(numbers).await
    }

    /// Divide the first number by each following one: [100, 5, 2] = 10. []=1.
    /// Fails if any divisor is zero.
    #[tool]
    async fn divide(
        &self,
        /// Numbers; the first is the dividend
        numbers: Vec<f64>,
    ) -> McpResult<String> {
        self.handle_divide(numbers).await
    }

    /// Raise base to exponent. Exponent may be fractional or negative.
    #[tool]
    async fn power(
        &self,
        /// Base
        base: f64,
        /// Exponent
        exponent: f64,
    ) -> McpResult<String> {
        self.handle_power(base, exponent).await
    }

    /// Principal square root. Fails for negative numbers.
    #[tool]
    async fn square_root(
        &self,
        /// Non-negative number
        number: f64,
    ) -> McpResult<String> {
        self.handle_square_root(number).await
    }

    /// Convert an amount between currencies (e.g., USD to GHS). Result has two decimals.
    #[tool]
    async fn convert(
        &self,
        /// Amount in the source currency
        amount: f64,
        /// Source currency code (e.g., "USD")
        from: String,
        /// Target currency code (e.g., "GHS")
        to: String,
    ) -> McpResult<String> {
        self.handle_convert(amount, from, to).await
    }

    /// List supported currencies and their rates against the base currency.
    #[tool]
    async fn currencies(&self) -> McpResult<String> {
        self.handle_currencies().await
    }

    /// Show the to-do list, numbered from 1.
    #[tool]
    async fn todo_list(&self) -> McpResult<String> {
        self.handle_todo_list().await
    }

    /// Add a task to the end of the to-do list.
    #[tool]
    async fn todo_add(
        &self,
        /// Task description (one line)
        task: String,
    ) -> McpResult<String> {
        self.handle_todo_add(task).await
    }

    /// Delete a task by the number shown in todo_list.
    #[tool]
    async fn todo_delete(
        &self,
        /// 1-based task number
        number: usize,
    ) -> McpResult<String> {
        self.handle_todo_delete(number).await
    }
}
