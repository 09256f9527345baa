//! Shift-to-event translation: walks the plan one calendar day per code.

use std::borrow::Cow;

use chrono::{DateTime, NaiveDate, Utc};
use tracing::{debug, warn};

use crate::error::{ShiftCalError, ShiftCalResult};
use crate::event::{CalendarEvent, EventTime};
use crate::sequence::{is_free_code, normalize_code};
use crate::shift::{ShiftDefinition, ShiftTable};

/// Domain part of generated UIDs
const UID_DOMAIN: &str = "shiftcalendar.com";

/// Translate a shift plan into calendar events, stamping each with the
/// current time.
///
/// `codes[i]` is the shift for `start + i` days. With `exclude_free`, free
/// days (`DF` / `Free`) produce no event but still consume their day.
pub fn translate<S: AsRef<str>>(
    codes: &[S],
    start: NaiveDate,
    table: &ShiftTable,
    exclude_free: bool,
) -> ShiftCalResult<Vec<CalendarEvent>> {
    translate_with_clock(codes, start, table, exclude_free, Utc::now)
}

/// [`translate`] with an injectable clock for the DTSTAMP of each event.
pub fn translate_with_clock<S, F>(
    codes: &[S],
    start: NaiveDate,
    table: &ShiftTable,
    exclude_free: bool,
    mut now: F,
) -> ShiftCalResult<Vec<CalendarEvent>>
where
    S: AsRef<str>,
    F: FnMut() -> DateTime<Utc>,
{
    let mut events = Vec::with_capacity(codes.len());
    let mut day = start;

    for (index, raw) in codes.iter().enumerate() {
        let code = normalize_code(raw.as_ref());

        if exclude_free && is_free_code(code) {
            debug!(%day, index, code, "skipping free day");
        } else {
            let definition = table.resolve(code);
            if let Cow::Owned(_) = definition {
                debug!(code, "unknown shift code, using all-day fallback");
            }
            events.push(build_event(code, index, day, &definition, now())?);
        }

        day = day.succ_opt().ok_or(ShiftCalError::DateOutOfRange(day))?;
    }

    debug!(
        codes = codes.len(),
        events = events.len(),
        %start,
        exclude_free,
        "translated shift plan"
    );

    Ok(events)
}

fn build_event(
    code: &str,
    index: usize,
    day: NaiveDate,
    definition: &ShiftDefinition,
    created_at: DateTime<Utc>,
) -> ShiftCalResult<CalendarEvent> {
    let next_day = day.succ_opt().ok_or(ShiftCalError::DateOutOfRange(day))?;

    let (start, end) = if definition.all_day {
        (EventTime::Date(day), EventTime::Date(next_day))
    } else {
        let (start_time, end_time) = definition.time_span(code)?;
        let end_day = if definition.ends_next_day { next_day } else { day };
        let start = day.and_time(start_time.as_naive());
        let end = end_day.and_time(end_time.as_naive());
        if end <= start {
            warn!(code, %day, "shift ends before it starts; is next_day missing?");
        }
        (EventTime::DateTimeFloating(start), EventTime::DateTimeFloating(end))
    };

    Ok(CalendarEvent {
        uid: event_uid(day, index),
        created_at,
        code: code.to_string(),
        summary: format!("{} - {}", code, definition.description),
        description: definition.description.clone(),
        start,
        end,
    })
}

/// UID for the event at plan position `index` on `day`. Stable across runs.
pub fn event_uid(day: NaiveDate, index: usize) -> String {
    format!("shift-{}-{}@{}", day.format("%Y%m%d"), index, UID_DOMAIN)
}
