//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate task list mutations into user-facing replies.
//! - Keep the console layer decoupled from list internals.

pub mod task_list;
