//! Persistence adapter between the task list and the key-value store.
//!
//! # Responsibility
//! - Load and save the full task list under one fixed storage key.
//! - Keep JSON wire details out of the controller.
//!
//! # Invariants
//! - Malformed persisted data degrades to fewer (or zero) tasks, never to an
//!   error.
//! - Only store transport failures surface as `RepoError`.

pub mod task_repo;
