//! To-do tool handlers
//!
//! Unlike the console menu, every change is written to disk immediately.

use crate::ToolbeltServerHandler;
use crate::formatting::format_tasks;
use mcp_attr::{Result as McpResult, bail_public};

impl ToolbeltServerHandler {
    pub async fn handle_todo_list(&self) -> McpResult<String> {
        let list = self.todo.lock().unwrap();
        Ok(format_tasks(&list))
    }

    pub async fn handle_todo_add(&self, task: String) -> McpResult<String> {
        let mut list = self.todo.lock().unwrap();

        let added = match list.add(&task).map(str::to_string) {
            Ok(t) => t,
            Err(e) => {
                drop(list);
                bail_public!(_, "{}", e);
            }
        };
        let number = list.len();
        drop(list);

        if let Err(e) = self.save_todo() {
            bail_public!(_, "Failed to save: {}", e);
        }

        Ok(format!("Task {} added: {}", number, added))
    }

    /// Deletes by the 1-based number shown in `todo_list`.
    pub async fn handle_todo_delete(&self, number: usize) -> McpResult<String> {
        let mut list = self.todo.lock().unwrap();

        let removed = match list.delete(number) {
            Ok(t) => t,
            Err(e) => {
                drop(list);
                bail_public!(_, "{}", e);
            }
        };
        drop(list);

        if let Err(e) = self.save_todo() {
            bail_public!(_, "Failed to save: {}", e);
        }

        Ok(format!("Removed task: {}", removed))
    }
}
