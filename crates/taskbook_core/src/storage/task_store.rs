//! Task persistence contract and JSON Lines implementation.
//!
//! # Responsibility
//! - Load the task list once at startup and flush it after every mutation.
//! - Surface decode failures with the offending line number instead of
//!   masking corrupt state.
//!
//! # Invariants
//! - One JSON object per task per line; file order is list order.
//! - Loading a path that does not exist yields an empty list.

use crate::model::task::Task;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::{Path, PathBuf};

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence failure for task load/save operations.
#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Encode(serde_json::Error),
    /// A persisted line did not decode as a task record. `line` is 1-based.
    Decode {
        line: usize,
        source: serde_json::Error,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "could not encode task record: {err}"),
            Self::Decode { line, source } => {
                write!(f, "invalid task record on line {line}: {source}")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Encode(err) => Some(err),
            Self::Decode { source, .. } => Some(source),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Persistence seam for the task list.
pub trait TaskStore {
    fn load(&self) -> StoreResult<Vec<Task>>;
    fn save(&self, tasks: &[Task]) -> StoreResult<()>;
}

/// File-backed store writing one JSON object per task per line.
pub struct JsonlTaskStore {
    path: PathBuf,
}

impl JsonlTaskStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TaskStore for JsonlTaskStore {
    fn load(&self) -> StoreResult<Vec<Task>> {
        let file = match fs::File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    "event=store_load module=storage status=ok path={} tasks=0 missing_file=true",
                    self.path.display()
                );
                return Ok(Vec::new());
            }
            Err(err) => return Err(StoreError::Io(err)),
        };

        let reader = BufReader::new(file);
        let mut tasks = Vec::new();
        for (number, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let task = serde_json::from_str(&line).map_err(|source| StoreError::Decode {
                line: number + 1,
                source,
            })?;
            tasks.push(task);
        }

        info!(
            "event=store_load module=storage status=ok path={} tasks={}",
            self.path.display(),
            tasks.len()
        );
        Ok(tasks)
    }

    fn save(&self, tasks: &[Task]) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut body = String::new();
        for task in tasks {
            let record = serde_json::to_string(task).map_err(StoreError::Encode)?;
            body.push_str(&record);
            body.push('\n');
        }
        fs::write(&self.path, body)?;

        info!(
            "event=store_save module=storage status=ok path={} tasks={}",
            self.path.display(),
            tasks.len()
        );
        Ok(())
    }
}
