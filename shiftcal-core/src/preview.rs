//! Schedule preview rows and shift statistics.

use chrono::NaiveDate;
use serde::Serialize;

use crate::event::{CalendarEvent, EventTime};
use crate::sequence::is_free_code;

/// One line of the schedule table shown before exporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleRow {
    pub date: NaiveDate,
    pub weekday: String,
    pub code: String,
    pub description: String,
    /// `All day`, `HH:MM - HH:MM` or `HH:MM - HH:MM (+1 day)`
    pub time: String,
}

impl From<&CalendarEvent> for ScheduleRow {
    fn from(event: &CalendarEvent) -> Self {
        let date = event.day();
        ScheduleRow {
            date,
            weekday: date.format("%A").to_string(),
            code: event.code.clone(),
            description: event.description.clone(),
            time: time_label(&event.start, &event.end),
        }
    }
}

fn time_label(start: &EventTime, end: &EventTime) -> String {
    match (start, end) {
        (EventTime::DateTimeFloating(start), EventTime::DateTimeFloating(end)) => {
            let span = format!("{} - {}", start.format("%H:%M"), end.format("%H:%M"));
            match (end.date() - start.date()).num_days() {
                0 => span,
                days => format!("{span} (+{days} day{})", if days == 1 { "" } else { "s" }),
            }
        }
        _ => "All day".to_string(),
    }
}

/// Build preview rows for already translated events.
pub fn schedule_rows(events: &[CalendarEvent]) -> Vec<ScheduleRow> {
    events.iter().map(ScheduleRow::from).collect()
}

/// Counts over a previewed schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScheduleStats {
    pub total: usize,
    pub work_shifts: usize,
    pub free_days: usize,
    /// Events per code, most frequent first; ties keep first appearance
    pub distribution: Vec<(String, usize)>,
}

impl ScheduleStats {
    pub fn from_rows(rows: &[ScheduleRow]) -> Self {
        let free_days = rows.iter().filter(|r| is_free_code(&r.code)).count();

        let mut distribution: Vec<(String, usize)> = Vec::new();
        for row in rows {
            match distribution.iter_mut().find(|(code, _)| *code == row.code) {
                Some((_, count)) => *count += 1,
                None => distribution.push((row.code.clone(), 1)),
            }
        }
        // Stable sort keeps first-appearance order among equal counts
        distribution.sort_by(|a, b| b.1.cmp(&a.1));

        ScheduleStats {
            total: rows.len(),
            work_shifts: rows.len() - free_days,
            free_days,
            distribution,
        }
    }
}
