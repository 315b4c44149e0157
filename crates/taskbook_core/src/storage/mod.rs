//! Storage layer contract and file-backed persistence.
//!
//! # Responsibility
//! - Define the persistence seam used at session boundaries.
//! - Keep file format details inside the storage boundary.
//!
//! # Invariants
//! - `save` followed by `load` reproduces the same tasks in the same order.
//! - A missing data file reads as an empty list, never as an error.

pub mod task_store;
