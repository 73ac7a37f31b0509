//! To-do list model.
//!
//! # Responsibility
//! - Own the ordered pending list and the ordered completed list.
//! - Provide add/complete mutations with validation.
//!
//! # Invariants
//! - Stored text is trimmed, whitespace-collapsed and never empty.
//! - A text is stored at most once across both lists, so no item is ever
//!   pending and completed at the same time.
//! - Failed mutations leave both lists unchanged.

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Upper bound for one task text, counted in chars after normalization.
pub const MAX_TASK_CHARS: usize = 500;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Recoverable model error. State is untouched whenever one is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// Text is empty after normalization.
    EmptyTask,
    /// Text exceeds `MAX_TASK_CHARS`.
    TaskTooLong { chars: usize, max: usize },
    /// No pending task matches the requested text.
    TaskNotFound(String),
    /// Completion requested while the pending list is empty.
    NoPendingTasks,
    /// Text is already pending or completed.
    DuplicateTask(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTask => write!(f, "task text cannot be empty"),
            Self::TaskTooLong { chars, max } => {
                write!(f, "task text is {chars} chars; limit is {max}")
            }
            Self::TaskNotFound(text) => write!(f, "task not found: `{text}`"),
            Self::NoPendingTasks => write!(f, "no pending tasks to complete"),
            Self::DuplicateTask(text) => write!(f, "task already listed: `{text}`"),
        }
    }
}

impl Error for ModelError {}

pub type ModelResult<T> = Result<T, ModelError>;

/// Serializable read-only copy of both lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TodoSnapshot {
    pub tasks: Vec<String>,
    pub completed: Vec<String>,
}

/// Pending and completed task lists for one process lifetime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoModel {
    tasks: Vec<String>,
    completed: Vec<String>,
}

impl TodoModel {
    /// Creates a model with both lists empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one task to the pending list.
    ///
    /// Returns the normalized text that was stored.
    ///
    /// # Errors
    /// - `EmptyTask` when nothing remains after normalization.
    /// - `TaskTooLong` when the text exceeds `MAX_TASK_CHARS`.
    /// - `DuplicateTask` when the text is already pending or completed.
    pub fn add_task(&mut self, text: &str) -> ModelResult<&str> {
        let normalized = validate_task_text(text)?;
        if self.contains(&normalized) {
            return Err(ModelError::DuplicateTask(normalized));
        }
        self.tasks.push(normalized);
        debug!(
            "event=task_added module=model status=ok pending={}",
            self.tasks.len()
        );
        Ok(self.tasks.last().map(String::as_str).unwrap_or_default())
    }

    /// Moves the pending task matching `text` to the completed list.
    ///
    /// `text` is normalized the same way `add_task` normalizes input, so
    /// `"  buy   milk "` completes `"buy milk"`.
    pub fn complete_task(&mut self, text: &str) -> ModelResult<()> {
        let normalized = normalize_task_text(text);
        let position = self
            .tasks
            .iter()
            .position(|task| *task == normalized)
            .ok_or_else(|| ModelError::TaskNotFound(normalized.clone()))?;
        self.move_to_completed(position);
        Ok(())
    }

    /// Completes the oldest pending task and returns its text.
    pub fn complete_first(&mut self) -> ModelResult<&str> {
        if self.tasks.is_empty() {
            return Err(ModelError::NoPendingTasks);
        }
        self.move_to_completed(0);
        Ok(self.completed.last().map(String::as_str).unwrap_or_default())
    }

    pub fn tasks(&self) -> &[String] {
        &self.tasks
    }

    pub fn completed(&self) -> &[String] {
        &self.completed
    }

    pub fn pending_count(&self) -> usize {
        self.tasks.len()
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    /// Returns an owned copy of both lists.
    pub fn snapshot(&self) -> TodoSnapshot {
        TodoSnapshot {
            tasks: self.tasks.clone(),
            completed: self.completed.clone(),
        }
    }

    fn contains(&self, text: &str) -> bool {
        self.tasks.iter().chain(&self.completed).any(|task| task == text)
    }

    fn move_to_completed(&mut self, position: usize) {
        let task = self.tasks.remove(position);
        self.completed.push(task);
        debug!(
            "event=task_completed module=model status=ok pending={} completed={}",
            self.tasks.len(),
            self.completed.len()
        );
    }
}

/// Trims the text and collapses inner whitespace runs to a single space.
pub fn normalize_task_text(text: &str) -> String {
    WHITESPACE_RE.replace_all(text.trim(), " ").into_owned()
}

fn validate_task_text(text: &str) -> ModelResult<String> {
    let normalized = normalize_task_text(text);
    if normalized.is_empty() {
        return Err(ModelError::EmptyTask);
    }
    let chars = normalized.chars().count();
    if chars > MAX_TASK_CHARS {
        return Err(ModelError::TaskTooLong {
            chars,
            max: MAX_TASK_CHARS,
        });
    }
    Ok(normalized)
}
