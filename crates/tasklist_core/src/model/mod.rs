//! Domain model for the task list.
//!
//! # Responsibility
//! - Define the task record shared by persistence, controller and render.
//! - Define the view-only filter predicate.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId` that is never reused.
//! - Task text is immutable after creation; only `completed` changes.

pub mod filter;
pub mod task;
