//! Command-line parser for the fixed task vocabulary.
//!
//! # Responsibility
//! - Turn one line of user text into a structured [`Command`].
//! - Reject malformed input with a semantic error before any mutation runs.
//!
//! # Invariants
//! - Parsing has no side effects.
//! - A returned task-building command always carries a non-empty description,
//!   and a timestamp exactly when its kind requires one.
//! - Keyword matching is exact and case-sensitive.

use crate::model::task::Task;
use chrono::NaiveDateTime;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Accepted input format for deadline/event timestamps,
/// e.g. `2026-11-05 18:00`.
pub const TIMESTAMP_INPUT_FORMAT: &str = "%Y-%m-%d %H:%M";

const DEADLINE_SEPARATOR: &str = "/by";
const EVENT_SEPARATOR: &str = "/at";

pub type ParseResult<T> = Result<T, ParseError>;

/// Semantic parse failure for one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The command keyword was recognized but its required text was blank.
    /// Carries the keyword so the message can name it.
    EmptyDescription(&'static str),
    /// The leading keyword is not part of the vocabulary.
    InvalidTaskType(String),
    /// A deadline/event line is missing its `/by` or `/at` section.
    MissingTimestamp {
        keyword: &'static str,
        separator: &'static str,
    },
    /// The timestamp text after the separator did not parse.
    InvalidTimestamp(String),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDescription(keyword) => {
                write!(f, "The description of a {keyword} cannot be empty.")
            }
            Self::InvalidTaskType(keyword) => {
                write!(f, "I'm sorry, but I don't know what `{keyword}` means.")
            }
            Self::MissingTimestamp { keyword, separator } => write!(
                f,
                "A {keyword} needs `{separator} <datetime>` after its description."
            ),
            Self::InvalidTimestamp(text) => write!(
                f,
                "Could not read `{text}` as a date and time; expected e.g. 2026-11-05 18:00."
            ),
        }
    }
}

impl Error for ParseError {}

/// Command discriminator matching the input vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Todo,
    Deadline,
    Event,
    List,
    Done,
    Delete,
    Find,
    Bye,
}

impl CommandKind {
    /// Whether executing this command changes the task list and therefore
    /// requires a save afterwards.
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Self::Todo | Self::Deadline | Self::Event | Self::Done | Self::Delete
        )
    }
}

/// Structured form of one input line. Lives only for that line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub kind: CommandKind,
    /// Free text after the keyword; an index string for done/delete.
    pub description: String,
    pub timestamp: Option<NaiveDateTime>,
}

impl Command {
    fn bare(kind: CommandKind) -> Self {
        Self {
            kind,
            description: String::new(),
            timestamp: None,
        }
    }

    fn with_description(kind: CommandKind, description: &str) -> Self {
        Self {
            kind,
            description: description.to_string(),
            timestamp: None,
        }
    }

    /// Builds the task this command describes.
    ///
    /// Returns `None` for command kinds that do not create tasks.
    pub fn to_task(&self) -> Option<Task> {
        match self.kind {
            CommandKind::Todo => Some(Task::todo(&self.description)),
            CommandKind::Deadline => self
                .timestamp
                .map(|when| Task::deadline(&self.description, when)),
            CommandKind::Event => self
                .timestamp
                .map(|when| Task::event(&self.description, when)),
            _ => None,
        }
    }
}

/// Parses one line of user input into a [`Command`].
///
/// # Contract
/// - The line splits at the first whitespace into keyword + remainder.
/// - `list` and `bye` ignore any remainder.
/// - `done`/`delete` keep the remainder verbatim as an index string; range
///   and numeric validation happen in the task list, not here.
///
/// # Errors
/// - [`ParseError::InvalidTaskType`] for an unknown keyword.
/// - [`ParseError::EmptyDescription`] when required text is blank.
/// - [`ParseError::MissingTimestamp`] / [`ParseError::InvalidTimestamp`] for
///   malformed deadline/event lines.
pub fn parse(line: &str) -> ParseResult<Command> {
    let trimmed = line.trim();
    let (keyword, remainder) = match trimmed.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (trimmed, ""),
    };

    match keyword {
        "todo" => {
            require_text("todo", remainder)?;
            Ok(Command::with_description(CommandKind::Todo, remainder))
        }
        "deadline" => parse_timed(CommandKind::Deadline, "deadline", DEADLINE_SEPARATOR, remainder),
        "event" => parse_timed(CommandKind::Event, "event", EVENT_SEPARATOR, remainder),
        "list" => Ok(Command::bare(CommandKind::List)),
        "done" => {
            require_text("done", remainder)?;
            Ok(Command::with_description(CommandKind::Done, remainder))
        }
        "delete" => {
            require_text("delete", remainder)?;
            Ok(Command::with_description(CommandKind::Delete, remainder))
        }
        "find" => {
            require_text("find", remainder)?;
            Ok(Command::with_description(CommandKind::Find, remainder))
        }
        "bye" => Ok(Command::bare(CommandKind::Bye)),
        other => Err(ParseError::InvalidTaskType(other.to_string())),
    }
}

fn require_text(keyword: &'static str, remainder: &str) -> ParseResult<()> {
    if remainder.is_empty() {
        return Err(ParseError::EmptyDescription(keyword));
    }
    Ok(())
}

fn parse_timed(
    kind: CommandKind,
    keyword: &'static str,
    separator: &'static str,
    remainder: &str,
) -> ParseResult<Command> {
    require_text(keyword, remainder)?;

    let (description, when_text) = match remainder.split_once(separator) {
        Some((description, when_text)) => (description.trim(), when_text.trim()),
        None => return Err(ParseError::MissingTimestamp { keyword, separator }),
    };
    if description.is_empty() {
        return Err(ParseError::EmptyDescription(keyword));
    }

    let when = NaiveDateTime::parse_from_str(when_text, TIMESTAMP_INPUT_FORMAT)
        .map_err(|_| ParseError::InvalidTimestamp(when_text.to_string()))?;

    Ok(Command {
        kind,
        description: description.to_string(),
        timestamp: Some(when),
    })
}

#[cfg(test)]
mod tests {
    use super::{parse, CommandKind, ParseError};

    #[test]
    fn keyword_match_is_case_sensitive() {
        let err = parse("TODO read book").unwrap_err();
        assert_eq!(err, ParseError::InvalidTaskType("TODO".to_string()));
    }

    #[test]
    fn remainder_is_trimmed_but_kept_verbatim_inside() {
        let command = parse("todo   buy  milk  ").unwrap();
        assert_eq!(command.description, "buy  milk");
    }

    #[test]
    fn list_and_bye_ignore_trailing_text() {
        assert_eq!(parse("list everything").unwrap().kind, CommandKind::List);
        assert_eq!(parse("bye now").unwrap().kind, CommandKind::Bye);
    }

    #[test]
    fn done_keeps_index_text_verbatim() {
        let command = parse("done 3").unwrap();
        assert_eq!(command.kind, CommandKind::Done);
        assert_eq!(command.description, "3");
        assert_eq!(command.timestamp, None);
    }

    #[test]
    fn mutating_kinds_are_flagged() {
        assert!(parse("todo x").unwrap().kind.is_mutating());
        assert!(parse("done 1").unwrap().kind.is_mutating());
        assert!(!parse("list").unwrap().kind.is_mutating());
        assert!(!parse("find x").unwrap().kind.is_mutating());
    }
}
