//! To-do list menu

use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::info;

use super::Console;
use crate::formatting::format_tasks;
use crate::storage::Storage;
use crate::todo::TodoList;
use crate::validation::parse_task_number;

const MENU: &str = "=== To-Do List Menu ===
1. View tasks
2. Add task
3. Delete task
4. Exit";

impl<R: BufRead, W: Write> Console<R, W> {
    /// Run the to-do menu against `storage`.
    ///
    /// Tasks are loaded once at start and saved when the user exits. End of
    /// input also saves, so piped sessions keep their changes.
    pub fn run_todo(&mut self, storage: &Storage) -> Result<TodoList> {
        let mut list = storage.load()?;

        loop {
            self.say(MENU)?;
            let Some(choice) = self.prompt("Choose an option (1-4): ")? else {
                break;
            };

            match choice.as_str() {
                "1" => self.show_tasks(&list)?,
                "2" => {
                    if !self.add_task(&mut list)? {
                        break;
                    }
                }
                "3" => {
                    if !self.delete_task(&mut list)? {
                        break;
                    }
                }
                "4" => {
                    storage.save(&list)?;
                    self.say("Goodbye! Tasks saved.")?;
                    return Ok(list);
                }
                _ => self.say("Invalid option. Try again.\n")?,
            }
        }

        storage.save(&list)?;
        info!(path = %storage.file_path().display(), "input ended, tasks saved");
        Ok(list)
    }

    fn show_tasks(&mut self, list: &TodoList) -> Result<()> {
        self.say(format!("\n{}", format_tasks(list)))
    }

    /// Returns `false` if input ended at the prompt
    fn add_task(&mut self, list: &mut TodoList) -> Result<bool> {
        let Some(task) = self.prompt("Enter a new task: ")? else {
            return Ok(false);
        };

        match list.add(&task) {
            Ok(_) => self.say("Task added!\n")?,
            Err(e) => self.say(format!("{}\n", e))?,
        }
        Ok(true)
    }

    /// Returns `false` if input ended at the prompt
    fn delete_task(&mut self, list: &mut TodoList) -> Result<bool> {
        self.show_tasks(list)?;
        let Some(line) = self.prompt("Enter the number of the task to delete: ")? else {
            return Ok(false);
        };

        let message = match parse_task_number(&line) {
            Ok(index) => match list.delete(index) {
                Ok(removed) => format!("Removed task: {}\n", removed),
                Err(_) => "Invalid task number.\n".to_string(),
            },
            Err(_) => "Please enter a valid number.\n".to_string(),
        };
        self.say(message)?;
        Ok(true)
    }
}
