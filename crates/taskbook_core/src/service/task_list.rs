//! Owning task collection and its user-facing operations.
//!
//! # Responsibility
//! - Hold every tracked task in insertion order.
//! - Perform add/mark/delete/find/render with 1-based indices at the API
//!   surface and 0-based positions internally.
//!
//! # Invariants
//! - No two tasks in the list are duplicates of each other.
//! - Mutation happens only through indexed operations on this type; no task
//!   reference escapes the list.

use crate::model::task::Task;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Reply sent back when an add is rejected by the duplicate scan.
pub const DUPLICATE_REPLY: &str = "Input already exists. Please try again";

pub type ListResult<T> = Result<T, ListError>;

/// Validation failure for indexed task list operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// The done/delete index text is non-numeric or outside 1..=len.
    InvalidTaskNumber { input: String, count: usize },
}

impl Display for ListError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTaskNumber { input, count } => write!(
                f,
                "`{input}` is not a valid task number; the list has {count} tasks."
            ),
        }
    }
}

impl Error for ListError {}

/// Ordered, owning collection of tasks.
#[derive(Debug, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole list wholesale, as done once on load.
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// Read-only view for persistence flushes.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Appends `task` unless an exact duplicate already exists.
    ///
    /// # Contract
    /// - A rejected add leaves the list untouched and returns
    ///   [`DUPLICATE_REPLY`].
    /// - An accepted add returns the rendered task plus the updated count.
    pub fn add(&mut self, task: Task) -> String {
        if self.tasks.iter().any(|existing| existing.duplicates(&task)) {
            return DUPLICATE_REPLY.to_string();
        }
        let rendered = task.to_string();
        self.tasks.push(task);
        format!(
            "Got it. I've added this task:\n  {rendered}\n{}",
            self.status()
        )
    }

    /// Marks the task at the user's 1-based index as done.
    ///
    /// Re-marking an already-done task re-confirms without complaint.
    pub fn mark_done(&mut self, index_text: &str) -> ListResult<String> {
        let slot = self.resolve_index(index_text)?;
        self.tasks[slot].mark_done();
        Ok(format!(
            "Nice! I've marked this task as done:\n  {}",
            self.tasks[slot]
        ))
    }

    /// Removes the task at the user's 1-based index.
    ///
    /// Later tasks shift down by one position.
    pub fn delete(&mut self, index_text: &str) -> ListResult<String> {
        let slot = self.resolve_index(index_text)?;
        let removed = self.tasks.remove(slot);
        Ok(format!(
            "Noted. I've removed this task:\n  {removed}\n{}",
            self.status()
        ))
    }

    /// Renders the whole list as numbered lines.
    ///
    /// An empty list renders as the empty string; the console layer prints
    /// the frame either way.
    pub fn render(&self) -> String {
        self.tasks
            .iter()
            .enumerate()
            .map(|(position, task)| format!("{}. {task}", position + 1))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Case-sensitive substring search over descriptions.
    ///
    /// Matches keep their original relative order and are renumbered from 1
    /// in the reply. No matches yields the header alone.
    pub fn find(&self, keyword: &str) -> String {
        let matches = self
            .tasks
            .iter()
            .filter(|task| task.description.contains(keyword))
            .enumerate()
            .map(|(position, task)| format!("{}. {task}", position + 1))
            .collect::<Vec<_>>();
        if matches.is_empty() {
            return "Here are the matching tasks in your list:".to_string();
        }
        format!(
            "Here are the matching tasks in your list:\n{}",
            matches.join("\n")
        )
    }

    /// Count line appended to add/delete confirmations.
    pub fn status(&self) -> String {
        format!("Now you have {} tasks in the list.", self.tasks.len())
    }

    /// Converts the user's 1-based index text into a 0-based slot.
    ///
    /// Non-numeric text and out-of-range numbers fail the same way, so the
    /// caller can surface one message for both.
    fn resolve_index(&self, index_text: &str) -> ListResult<usize> {
        let invalid = || ListError::InvalidTaskNumber {
            input: index_text.to_string(),
            count: self.tasks.len(),
        };
        let number: usize = index_text.parse().map_err(|_| invalid())?;
        if number == 0 || number > self.tasks.len() {
            return Err(invalid());
        }
        Ok(number - 1)
    }
}
