//! Form validation gates.
//!
//! # Responsibility
//! - Turn raw form field text into typed drafts before store mutations.
//! - Report which field blocked submission.
//!
//! # Invariants
//! - Validation never mutates anything; a failed parse leaves no trace.
//! - The event gate deliberately does not compare start and end times and
//!   does not check for double-booking; both are permitted downstream.

use crate::model::subject::{default_color, SubjectId, SUBJECT_COLORS};
use chrono::{NaiveDate, NaiveTime};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Lower bound of the weekly-hours target.
pub const WEEKLY_HOURS_MIN: u32 = 1;
/// Upper bound of the weekly-hours target.
pub const WEEKLY_HOURS_MAX: u32 = 40;

/// Validation error for the subject form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubjectFormError {
    EmptyName,
    InvalidWeeklyHours(String),
    UnknownColor(String),
}

impl Display for SubjectFormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "subject name must not be empty"),
            Self::InvalidWeeklyHours(value) => write!(
                f,
                "weekly hours `{value}` must be an integer in {WEEKLY_HOURS_MIN}..={WEEKLY_HOURS_MAX}"
            ),
            Self::UnknownColor(value) => write!(f, "color `{value}` is not in the palette"),
        }
    }
}

impl Error for SubjectFormError {}

/// Raw subject form fields as entered by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubjectForm {
    pub name: String,
    pub weekly_hours: String,
    pub color: String,
}

/// Validated subject form output, ready for `PlannerStore::add_subject`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectDraft {
    pub name: String,
    pub weekly_hours: u32,
    pub color: String,
}

impl SubjectForm {
    /// Validates the form fields into a draft.
    ///
    /// An empty color selection falls back to the first palette entry; a
    /// non-empty selection must be a palette color.
    pub fn parse(&self) -> Result<SubjectDraft, SubjectFormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(SubjectFormError::EmptyName);
        }

        let weekly_hours = self
            .weekly_hours
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|hours| (WEEKLY_HOURS_MIN..=WEEKLY_HOURS_MAX).contains(hours))
            .ok_or_else(|| SubjectFormError::InvalidWeeklyHours(self.weekly_hours.clone()))?;

        let color = self.color.trim();
        let color = if color.is_empty() {
            default_color().to_string()
        } else if SUBJECT_COLORS.contains(&color) {
            color.to_string()
        } else {
            return Err(SubjectFormError::UnknownColor(color.to_string()));
        };

        Ok(SubjectDraft {
            name: name.to_string(),
            weekly_hours,
            color,
        })
    }
}

/// Validation error for the event form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventFormError {
    MissingField(&'static str),
    InvalidDate(String),
    InvalidTime {
        field: &'static str,
        value: String,
    },
}

impl Display for EventFormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "field `{field}` must not be empty"),
            Self::InvalidDate(value) => {
                write!(f, "date `{value}` is not a valid YYYY-MM-DD calendar date")
            }
            Self::InvalidTime { field, value } => {
                write!(f, "field `{field}` value `{value}` is not a valid HH:MM time")
            }
        }
    }
}

impl Error for EventFormError {}

/// Raw event form fields as entered by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventForm {
    pub subject_id: String,
    pub title: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
}

/// Validated event form output, ready for `PlannerStore::add_event`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub subject_id: SubjectId,
    pub title: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

impl EventForm {
    /// Validates the form fields into a draft.
    ///
    /// All five fields must be present; date and times must parse. The
    /// draft may still describe a zero or negative time range.
    pub fn parse(&self) -> Result<EventDraft, EventFormError> {
        let subject_id = required(&self.subject_id, "subject_id")?;
        let title = required(&self.title, "title")?;
        let date_text = required(&self.date, "date")?;
        let start_text = required(&self.start_time, "start_time")?;
        let end_text = required(&self.end_time, "end_time")?;

        let date = NaiveDate::parse_from_str(date_text, "%Y-%m-%d")
            .map_err(|_| EventFormError::InvalidDate(date_text.to_string()))?;
        let start_time = parse_time(start_text, "start_time")?;
        let end_time = parse_time(end_text, "end_time")?;

        Ok(EventDraft {
            subject_id: subject_id.to_string(),
            title: title.to_string(),
            date,
            start_time,
            end_time,
        })
    }
}

fn required<'a>(value: &'a str, field: &'static str) -> Result<&'a str, EventFormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EventFormError::MissingField(field));
    }
    Ok(trimmed)
}

fn parse_time(value: &str, field: &'static str) -> Result<NaiveTime, EventFormError> {
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|_| EventFormError::InvalidTime {
        field,
        value: value.to_string(),
    })
}
