//! Core domain logic for Taskbook.
//! This crate is the single source of truth for task-tracking invariants.

pub mod logging;
pub mod model;
pub mod parser;
pub mod service;
pub mod storage;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Task, TaskKind};
pub use parser::{parse, Command, CommandKind, ParseError, ParseResult};
pub use service::task_list::{ListError, ListResult, TaskList};
pub use storage::task_store::{JsonlTaskStore, StoreError, StoreResult, TaskStore};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
