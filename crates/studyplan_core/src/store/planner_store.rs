//! Planner entity store.
//!
//! # Responsibility
//! - Load the two collections from storage at startup and keep them in
//!   memory as the single source of truth.
//! - Apply add/complete mutations and mirror them to storage in the same
//!   call, so memory and storage never disagree across operations.
//!
//! # Invariants
//! - Ids are generated fresh per record and never collide within a session.
//! - `complete_event` is idempotent: hours are credited at most once per
//!   event, and a dangling subject reference is silently skipped.
//! - Malformed persisted blobs fail the load with a parse error instead of
//!   propagating half-read state.

use crate::model::event::{EventId, StudyEvent};
use crate::model::subject::{Subject, SubjectId};
use crate::storage::{StorageAdapter, StorageError, EVENTS_KEY, SUBJECTS_KEY};
use chrono::{NaiveDate, NaiveTime};
use log::info;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Error for entity store load/persist operations.
#[derive(Debug)]
pub enum StoreError {
    Storage(StorageError),
    Parse { key: &'static str, detail: String },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::Parse { key, detail } => {
                write!(f, "malformed persisted blob for key `{key}`: {detail}")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Parse { .. } => None,
        }
    }
}

impl From<StorageError> for StoreError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

/// Semantic result of a `complete_event` call.
///
/// All variants are successful outcomes; unknown ids and repeat completions
/// are no-ops by contract, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// The event was pending and is now completed. `subject_credited` is
    /// false when the owning subject no longer exists.
    Completed { subject_credited: bool },
    /// The event was already completed; nothing changed.
    AlreadyCompleted,
    /// No event with the given id exists; nothing changed.
    UnknownEvent,
}

/// Entity store over a key-value storage adapter.
///
/// There is exactly one logical writer (the UI thread), so the store is a
/// plain `&mut`-driven object with no internal locking.
#[derive(Debug)]
pub struct PlannerStore<S: StorageAdapter> {
    storage: S,
    subjects: Vec<Subject>,
    events: Vec<StudyEvent>,
}

impl<S: StorageAdapter> PlannerStore<S> {
    /// Loads both collections from storage.
    ///
    /// Absent keys yield empty collections (first run); malformed blobs
    /// fail with `StoreError::Parse`.
    pub fn load(storage: S) -> StoreResult<Self> {
        let subjects: Vec<Subject> = read_collection(&storage, SUBJECTS_KEY)?;
        let events: Vec<StudyEvent> = read_collection(&storage, EVENTS_KEY)?;

        info!(
            "event=store_load module=store status=ok subjects={} events={}",
            subjects.len(),
            events.len()
        );

        Ok(Self {
            storage,
            subjects,
            events,
        })
    }

    /// Subjects in insertion order.
    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    /// Events in insertion order.
    pub fn events(&self) -> &[StudyEvent] {
        &self.events
    }

    /// Looks up one subject by id.
    pub fn subject(&self, id: &str) -> Option<&Subject> {
        self.subjects.iter().find(|subject| subject.id == id)
    }

    /// Looks up one event by id.
    pub fn event(&self, id: &str) -> Option<&StudyEvent> {
        self.events.iter().find(|event| event.id == id)
    }

    /// Appends a new subject and persists the subjects blob.
    ///
    /// Inputs are pre-validated by the form layer; the store accepts them
    /// as given. Returns the generated id.
    pub fn add_subject(
        &mut self,
        name: impl Into<String>,
        weekly_hours: u32,
        color: impl Into<String>,
    ) -> StoreResult<SubjectId> {
        let subject = Subject::new(name, weekly_hours, color);
        let id = subject.id.clone();
        self.subjects.push(subject);
        self.persist_subjects()?;

        info!(
            "event=subject_add module=store status=ok id={id} weekly_hours={weekly_hours} total={}",
            self.subjects.len()
        );
        Ok(id)
    }

    /// Appends a new pending event and persists the events blob.
    ///
    /// The duration is derived as the signed wall-clock difference in hours;
    /// zero and negative durations are accepted. `subject_id` is not checked
    /// against the subjects collection.
    pub fn add_event(
        &mut self,
        subject_id: SubjectId,
        title: impl Into<String>,
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> StoreResult<EventId> {
        let event = StudyEvent::new(subject_id, title, date, start_time, end_time);
        let id = event.id.clone();
        let duration_hours = event.duration_hours;
        self.events.push(event);
        self.persist_events()?;

        info!(
            "event=event_add module=store status=ok id={id} date={date} duration_hours={duration_hours} total={}",
            self.events.len()
        );
        Ok(id)
    }

    /// Completes an event and credits its duration to the owning subject.
    ///
    /// Idempotent: unknown ids and already-completed events are no-ops, so
    /// hours can never be double-counted. When the owning subject is absent
    /// the event is still completed and the credit is skipped.
    pub fn complete_event(&mut self, event_id: &str) -> StoreResult<CompletionOutcome> {
        let Some(event) = self.events.iter_mut().find(|event| event.id == event_id) else {
            return Ok(CompletionOutcome::UnknownEvent);
        };
        if event.completed {
            return Ok(CompletionOutcome::AlreadyCompleted);
        }

        event.complete();
        let duration_hours = event.duration_hours;
        let subject_id = event.subject_id.clone();

        let subject_credited = match self
            .subjects
            .iter_mut()
            .find(|subject| subject.id == subject_id)
        {
            Some(subject) => {
                subject.credit_hours(duration_hours);
                true
            }
            None => false,
        };

        self.persist_events()?;
        if subject_credited {
            self.persist_subjects()?;
        }

        info!(
            "event=event_complete module=store status=ok id={event_id} subject_credited={subject_credited} duration_hours={duration_hours}"
        );
        Ok(CompletionOutcome::Completed { subject_credited })
    }

    fn persist_subjects(&self) -> StoreResult<()> {
        write_collection(&self.storage, SUBJECTS_KEY, &self.subjects)
    }

    fn persist_events(&self) -> StoreResult<()> {
        write_collection(&self.storage, EVENTS_KEY, &self.events)
    }
}

fn read_collection<S: StorageAdapter, T: DeserializeOwned>(
    storage: &S,
    key: &'static str,
) -> StoreResult<Vec<T>> {
    match storage.get(key)? {
        Some(blob) => serde_json::from_str(&blob).map_err(|err| StoreError::Parse {
            key,
            detail: err.to_string(),
        }),
        None => Ok(Vec::new()),
    }
}

fn write_collection<S: StorageAdapter, T: Serialize>(
    storage: &S,
    key: &'static str,
    items: &[T],
) -> StoreResult<()> {
    let blob = serde_json::to_string(items).map_err(|err| StoreError::Parse {
        key,
        detail: err.to_string(),
    })?;
    storage.set(key, &blob)?;
    Ok(())
}
