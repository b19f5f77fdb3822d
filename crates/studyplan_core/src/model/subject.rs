//! Subject domain model.
//!
//! # Responsibility
//! - Define the study subject record with its weekly-hour target.
//! - Own the fixed display color palette.
//!
//! # Invariants
//! - `id` is stable and never reused for another subject.
//! - `studied_hours` is mutated only through event completion crediting.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable opaque identifier for a subject.
///
/// Persisted blobs carry ids as plain strings, so the alias keeps the wire
/// shape while making semantic intent explicit in signatures.
pub type SubjectId = String;

/// Fixed display palette for subjects. The first entry is the default
/// selection when no color was picked.
pub const SUBJECT_COLORS: [&str; 8] = [
    "#EF4444", "#F97316", "#EAB308", "#22C55E", "#06B6D4", "#3B82F6", "#8B5CF6", "#EC4899",
];

/// Returns the default palette color used when none was selected.
pub fn default_color() -> &'static str {
    SUBJECT_COLORS[0]
}

/// A user-defined study topic with a weekly time target.
///
/// Field names serialize in camelCase so blobs written by earlier versions
/// of the product load verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    /// Stable opaque id used for event ownership.
    pub id: SubjectId,
    /// Display name, non-empty after form validation.
    pub name: String,
    /// Display color from `SUBJECT_COLORS`.
    pub color: String,
    /// Weekly target in whole hours (1..=40 at the form layer).
    #[serde(rename = "weeklyHours")]
    pub weekly_hours: u32,
    /// Reserved accumulator, always 0 in current scope. Kept for
    /// persisted-schema fidelity.
    #[serde(rename = "totalHours")]
    pub total_hours: f64,
    /// Hours credited by completed events. May decrease when a completed
    /// event carried a negative duration (accepted edge case).
    #[serde(rename = "studiedHours")]
    pub studied_hours: f64,
}

impl Subject {
    /// Creates a new subject with a generated stable id and zeroed counters.
    pub fn new(name: impl Into<String>, weekly_hours: u32, color: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            color: color.into(),
            weekly_hours,
            total_hours: 0.0,
            studied_hours: 0.0,
        }
    }

    /// Credits studied hours from a completed event.
    ///
    /// The amount is applied as-is; negative durations reduce the total.
    pub fn credit_hours(&mut self, hours: f64) {
        self.studied_hours += hours;
    }
}

#[cfg(test)]
mod tests {
    use super::{default_color, Subject, SUBJECT_COLORS};

    #[test]
    fn new_subject_starts_with_zeroed_counters() {
        let subject = Subject::new("Math", 5, "#3B82F6");
        assert_eq!(subject.weekly_hours, 5);
        assert_eq!(subject.studied_hours, 0.0);
        assert_eq!(subject.total_hours, 0.0);
        assert!(!subject.id.is_empty());
    }

    #[test]
    fn default_color_is_first_palette_entry() {
        assert_eq!(default_color(), SUBJECT_COLORS[0]);
    }

    #[test]
    fn serde_uses_camel_case_wire_names() {
        let subject = Subject::new("History", 3, "#EF4444");
        let json = serde_json::to_value(&subject).unwrap();
        assert!(json.get("weeklyHours").is_some());
        assert!(json.get("studiedHours").is_some());
        assert!(json.get("totalHours").is_some());
    }
}
