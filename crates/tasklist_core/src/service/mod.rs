//! Task list use-case layer.
//!
//! # Responsibility
//! - Own the in-memory task list and active filter.
//! - Route UI events to mutations and keep store and view in sync.
//!
//! # Invariants
//! - Every applied mutation is persisted and repainted before returning.
//! - Filter changes repaint but never persist.

pub mod events;
pub mod task_list_controller;
