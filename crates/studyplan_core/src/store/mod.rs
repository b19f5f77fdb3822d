//! Entity store layer.
//!
//! # Responsibility
//! - Own the in-memory Subject/StudyEvent collections.
//! - Provide the only mutation path, persisting on every change.
//!
//! # Invariants
//! - Every mutation serializes its collection(s) to storage before the
//!   operation returns.
//! - Event completion credits the owning subject exactly once.

pub mod planner_store;
