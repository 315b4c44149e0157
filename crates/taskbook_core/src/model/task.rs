//! Task record and rendering.
//!
//! # Responsibility
//! - Define the tagged task shape shared by all three task kinds.
//! - Render a task into its fixed console form.
//! - Decide duplicate equality for the add path.
//!
//! # Invariants
//! - `description` is never empty once a task exists.
//! - `timestamp` is `None` exactly when `kind == TaskKind::Todo`.
//! - Duplicate equality ignores the completion flag.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Console display format for deadline/event timestamps,
/// e.g. `Nov 5 2026, 6:00 PM`.
const TIMESTAMP_DISPLAY_FORMAT: &str = "%b %-d %Y, %-I:%M %p";

/// Discriminator for the three task variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    /// Plain to-do with no time attached.
    Todo,
    /// Task due by a point in time.
    Deadline,
    /// Event occurring at a point in time.
    Event,
}

impl TaskKind {
    /// Single-letter marker used in the rendered form.
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Todo => "T",
            Self::Deadline => "D",
            Self::Event => "E",
        }
    }
}

/// Canonical record for one tracked task.
///
/// Variant-specific data is kept optional so one storage shape covers all
/// three kinds without separate record types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Serialized as `type` to keep the persisted field naming neutral.
    #[serde(rename = "type")]
    pub kind: TaskKind,
    pub description: String,
    pub done: bool,
    /// `Some` for deadline ("due by") and event ("occurs at") tasks.
    pub timestamp: Option<NaiveDateTime>,
}

impl Task {
    /// Creates an unfinished to-do.
    pub fn todo(description: impl Into<String>) -> Self {
        Self {
            kind: TaskKind::Todo,
            description: description.into(),
            done: false,
            timestamp: None,
        }
    }

    /// Creates an unfinished deadline task due by `when`.
    pub fn deadline(description: impl Into<String>, when: NaiveDateTime) -> Self {
        Self {
            kind: TaskKind::Deadline,
            description: description.into(),
            done: false,
            timestamp: Some(when),
        }
    }

    /// Creates an unfinished event occurring at `when`.
    pub fn event(description: impl Into<String>, when: NaiveDateTime) -> Self {
        Self {
            kind: TaskKind::Event,
            description: description.into(),
            done: false,
            timestamp: Some(when),
        }
    }

    /// Flips the completion flag to done.
    ///
    /// Re-marking an already-done task is allowed and keeps it done.
    pub fn mark_done(&mut self) {
        self.done = true;
    }

    /// Duplicate equality used before every add.
    ///
    /// # Contract
    /// - Kind, description and timestamp must all match exactly.
    /// - No normalization, no case folding.
    /// - The completion flag does not participate.
    pub fn duplicates(&self, other: &Task) -> bool {
        self.kind == other.kind
            && self.description == other.description
            && self.timestamp == other.timestamp
    }
}

impl Display for Task {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let done_marker = if self.done { "X" } else { " " };
        write!(
            f,
            "[{}][{}] {}",
            self.kind.marker(),
            done_marker,
            self.description
        )?;
        match (self.kind, self.timestamp) {
            (TaskKind::Deadline, Some(when)) => {
                write!(f, " (by: {})", when.format(TIMESTAMP_DISPLAY_FORMAT))
            }
            (TaskKind::Event, Some(when)) => {
                write!(f, " (at: {})", when.format(TIMESTAMP_DISPLAY_FORMAT))
            }
            _ => Ok(()),
        }
    }
}
