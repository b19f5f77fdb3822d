//! Domain model for the study planner.
//!
//! # Responsibility
//! - Define the canonical Subject and StudyEvent records shared by store,
//!   calendar projection and metrics.
//! - Keep serde field names aligned with the persisted blob layout.
//!
//! # Invariants
//! - `Subject::id` and `StudyEvent::id` are unique within their collection
//!   and never reused.
//! - `StudyEvent::completed` only ever transitions false -> true.

pub mod event;
pub mod subject;
