//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `studyplan_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use studyplan_core::{
    study_metrics, EventForm, MemoryKvStorage, PlannerStore, SubjectForm,
};

fn main() {
    if let Err(err) = run() {
        eprintln!("studyplan_cli error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("studyplan_core version={}", studyplan_core::core_version());

    // End-to-end probe over volatile storage: one subject, one completed
    // session, metrics derived from both.
    let mut store = PlannerStore::load(MemoryKvStorage::new())?;

    let subject_draft = SubjectForm {
        name: "Math".to_string(),
        weekly_hours: "5".to_string(),
        color: String::new(),
    }
    .parse()?;
    let subject_id = store.add_subject(
        subject_draft.name,
        subject_draft.weekly_hours,
        subject_draft.color,
    )?;

    let event_draft = EventForm {
        subject_id,
        title: "Review".to_string(),
        date: "2024-01-15".to_string(),
        start_time: "10:00".to_string(),
        end_time: "11:30".to_string(),
    }
    .parse()?;
    let event_id = store.add_event(
        event_draft.subject_id,
        event_draft.title,
        event_draft.date,
        event_draft.start_time,
        event_draft.end_time,
    )?;
    store.complete_event(&event_id)?;

    let metrics = study_metrics(store.subjects(), store.events(), event_draft.date);
    println!(
        "subjects={} events={} planned_hours={} studied_hours={} completion_rate={:.1}%",
        store.subjects().len(),
        store.events().len(),
        metrics.total_planned_hours,
        metrics.total_studied_hours,
        metrics.completion_rate
    );

    Ok(())
}
