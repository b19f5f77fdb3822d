//! Core domain logic for StudyPlan.
//! This crate is the single source of truth for business invariants; view
//! shells render its state and call its mutation operations.

pub mod calendar;
pub mod db;
pub mod forms;
pub mod logging;
pub mod metrics;
pub mod model;
pub mod storage;
pub mod store;

pub use calendar::{
    day_hours, events_at_hour, events_on_date, month_grid_of, week_dates_of, DAY_END_HOUR,
    DAY_START_HOUR,
};
pub use forms::{
    EventDraft, EventForm, EventFormError, SubjectDraft, SubjectForm, SubjectFormError,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use metrics::{study_metrics, study_metrics_now, subject_progress, StudyMetrics};
pub use model::event::{EventId, StudyEvent};
pub use model::subject::{default_color, Subject, SubjectId, SUBJECT_COLORS};
pub use storage::{
    MemoryKvStorage, SqliteKvStorage, StorageAdapter, StorageError, EVENTS_KEY, SUBJECTS_KEY,
};
pub use store::planner_store::{CompletionOutcome, PlannerStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
