use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TodoError {
    #[error("No task entered.")]
    EmptyTask,
    /// The to-do file stores one task per line
    #[error("A task must fit on a single line.")]
    MultiLineTask,
    /// 1-based index outside `1..=len`
    #[error("Invalid task number {index}. The list has {len} task(s).")]
    InvalidIndex { index: usize, len: usize },
}

/// Ordered list of tasks; numbering shown to users starts at 1
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoList {
    tasks: Vec<String>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from already-stored task lines, dropping blank ones
    pub fn from_tasks(tasks: impl IntoIterator<Item = String>) -> Self {
        let tasks = tasks
            .into_iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();
        Self { tasks }
    }

    pub fn tasks(&self) -> &[String] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Append a task after trimming it
    ///
    /// # Returns
    /// The stored (trimmed) task, `EmptyTask` if nothing remains after trimming,
    /// or `MultiLineTask` if a line break is left inside it
    pub fn add(&mut self, task: &str) -> Result<&str, TodoError> {
        let task = task.trim();
        if task.is_empty() {
            return Err(TodoError::EmptyTask);
        }
        if task.contains(['\n', '\r']) {
            return Err(TodoError::MultiLineTask);
        }
        self.tasks.push(task.to_string());
        Ok(self.tasks.last().map(String::as_str).unwrap_or_default())
    }

    /// Remove the task at a 1-based position and return it
    pub fn delete(&mut self, index: usize) -> Result<String, TodoError> {
        if index == 0 || index > self.tasks.len() {
            return Err(TodoError::InvalidIndex {
                index,
                len: self.tasks.len(),
            });
        }
        Ok(self.tasks.remove(index - 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_trims_and_appends() {
        let mut list = TodoList::new();
        assert_eq!(list.add("  buy milk "), Ok("buy milk"));
        list.add("call mum").unwrap();
        assert_eq!(list.tasks(), &["buy milk", "call mum"]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_add_rejects_blank_task() {
        let mut list = TodoList::new();
        assert_eq!(list.add("   "), Err(TodoError::EmptyTask));
        assert!(list.is_empty());
    }

    #[test]
    fn test_add_rejects_line_breaks() {
        let mut list = TodoList::new();
        assert_eq!(list.add("first\nsecond"), Err(TodoError::MultiLineTask));
        assert_eq!(list.add("first\r\nsecond"), Err(TodoError::MultiLineTask));
        assert_eq!(list.add("lone\rreturn"), Err(TodoError::MultiLineTask));
        assert!(list.is_empty());

        // Surrounding line breaks are trimmed away
        assert_eq!(list.add("\nsingle\r\n"), Ok("single"));
    }

    #[test]
    fn test_delete_is_one_based() {
        let mut list = TodoList::from_tasks(["a", "b", "c"].map(String::from));
        assert_eq!(list.delete(2), Ok("b".to_string()));
        assert_eq!(list.tasks(), &["a", "c"]);
    }

    #[test]
    fn test_delete_out_of_range() {
        let mut list = TodoList::from_tasks(["a".to_string()]);
        assert_eq!(
            list.delete(0),
            Err(TodoError::InvalidIndex { index: 0, len: 1 })
        );
        assert_eq!(
            list.delete(2),
            Err(TodoError::InvalidIndex { index: 2, len: 1 })
        );
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_from_tasks_drops_blank_lines() {
        let list = TodoList::from_tasks(["one", "", "  ", " two "].map(String::from));
        assert_eq!(list.tasks(), &["one", "two"]);
    }
}
