use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Weekday};
use studyplan_core::{
    events_at_hour, events_on_date, month_grid_of, week_dates_of, StudyEvent,
};

fn date(text: &str) -> NaiveDate {
    NaiveDate::parse_from_str(text, "%Y-%m-%d").unwrap()
}

fn time(text: &str) -> NaiveTime {
    NaiveTime::parse_from_str(text, "%H:%M").unwrap()
}

fn event(title: &str, date_text: &str, start: &str) -> StudyEvent {
    StudyEvent::new(
        "s1".to_string(),
        title,
        date(date_text),
        time(start),
        time("22:00"),
    )
}

#[test]
fn week_is_seven_consecutive_days_containing_the_input() {
    // Sweep a stretch of dates covering month and year boundaries.
    let mut day = date("2023-12-20");
    let end = date("2024-02-10");
    while day <= end {
        let week = week_dates_of(day);
        assert_eq!(week[0].weekday(), Weekday::Sun, "{day}");
        for pair in week.windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::days(1), "{day}");
        }
        assert!(week.contains(&day), "{day}");
        day += Duration::days(1);
    }
}

#[test]
fn month_grid_is_42_ascending_gap_free_days() {
    for sample in [
        "2024-01-01",
        "2024-02-29",
        "2024-06-15",
        "2024-09-01",
        "2024-12-31",
        "2025-03-31",
    ] {
        let grid = month_grid_of(date(sample));
        assert_eq!(grid.len(), 42, "{sample}");
        assert_eq!(grid[0].weekday(), Weekday::Sun, "{sample}");
        for pair in grid.windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::days(1), "{sample}");
        }
        // The whole month is covered.
        assert!(grid[0] <= date(sample).with_day(1).unwrap(), "{sample}");
        assert!(grid.contains(&date(sample)), "{sample}");
    }
}

#[test]
fn outside_month_cells_are_detectable_by_month_inequality() {
    // February 2024 starts on a Thursday: the grid leads with January cells.
    let cursor = date("2024-02-15");
    let grid = month_grid_of(cursor);
    let outside = grid
        .iter()
        .filter(|cell| cell.month() != cursor.month())
        .count();
    assert_eq!(outside, 42 - 29);
}

#[test]
fn events_on_date_matches_exact_date_in_insertion_order() {
    let events = vec![
        event("monday-early", "2024-01-15", "09:00"),
        event("tuesday", "2024-01-16", "09:00"),
        event("monday-late", "2024-01-15", "19:00"),
    ];

    let monday = events_on_date(date("2024-01-15"), &events);
    let titles: Vec<_> = monday.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, ["monday-early", "monday-late"]);

    assert!(events_on_date(date("2024-01-17"), &events).is_empty());
}

#[test]
fn events_at_hour_matches_start_hour_component() {
    let events = vec![
        event("nine-sharp", "2024-01-15", "09:00"),
        event("nine-thirty", "2024-01-15", "09:30"),
        event("ten", "2024-01-15", "10:00"),
        event("other-day-nine", "2024-01-16", "09:00"),
    ];

    let at_nine = events_at_hour(date("2024-01-15"), 9, &events);
    let titles: Vec<_> = at_nine.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, ["nine-sharp", "nine-thirty"]);

    assert!(events_at_hour(date("2024-01-15"), 8, &events).is_empty());
}
