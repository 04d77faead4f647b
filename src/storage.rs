use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::todo::TodoList;

/// Default to-do file name, relative to the working directory
pub const DEFAULT_TODO_FILE: &str = "todo_list.txt";

/// Line-delimited to-do file: one task per line
pub struct Storage {
    file_path: PathBuf,
}

impl Storage {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Load tasks; a missing file is an empty list
    pub fn load(&self) -> Result<TodoList> {
        if !self.file_path.exists() {
            debug!(path = %self.file_path.display(), "to-do file not found, starting empty");
            return Ok(TodoList::new());
        }

        let content = fs::read_to_string(&self.file_path)
            .with_context(|| format!("Failed to read {}", self.file_path.display()))?;
        let list = TodoList::from_tasks(content.lines().map(str::to_string));
        debug!(path = %self.file_path.display(), count = list.len(), "loaded tasks");
        Ok(list)
    }

    pub fn save(&self, list: &TodoList) -> Result<()> {
        let content: String = list
            .tasks()
            .iter()
            .map(|task| format!("{}\n", task))
            .collect();
        fs::write(&self.file_path, content)
            .with_context(|| format!("Failed to write {}", self.file_path.display()))?;
        debug!(path = %self.file_path.display(), count = list.len(), "saved tasks");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path().join("missing.txt"));
        assert!(storage.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_writes_one_task_per_line() {
        let temp_file = NamedTempFile::new().unwrap();
        let storage = Storage::new(temp_file.path());

        let mut list = TodoList::new();
        list.add("buy milk").unwrap();
        list.add("call mum").unwrap();
        storage.save(&list).unwrap();

        let content = fs::read_to_string(temp_file.path()).unwrap();
        assert_eq!(content, "buy milk\ncall mum\n");
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp_file = NamedTempFile::new().unwrap();
        let storage = Storage::new(temp_file.path());

        let mut list = TodoList::new();
        list.add("water plants").unwrap();
        storage.save(&list).unwrap();

        let loaded = Storage::new(temp_file.path()).load().unwrap();
        assert_eq!(loaded, list);
    }

    #[test]
    fn test_load_trims_lines_and_skips_blanks() {
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(temp_file.path(), "  first  \r\n\nsecond\n").unwrap();

        let loaded = Storage::new(temp_file.path()).load().unwrap();
        assert_eq!(loaded.tasks(), &["first", "second"]);
    }

    #[test]
    fn test_save_empty_list_truncates_file() {
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(temp_file.path(), "old task\n").unwrap();

        Storage::new(temp_file.path()).save(&TodoList::new()).unwrap();
        assert_eq!(fs::read_to_string(temp_file.path()).unwrap(), "");
    }
}
