//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record shared by parser, list and storage.
//!
//! # Invariants
//! - Every task carries a non-empty description (enforced by the parser
//!   before construction).
//! - Deadline and event tasks carry exactly one timestamp; todos carry none.

pub mod task;
