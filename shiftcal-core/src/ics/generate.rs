//! ICS text generation.
//!
//! Lines are written in a fixed order and joined with CRLF, including after
//! the last line. Text values are emitted verbatim: shift codes and
//! descriptions are assumed to contain no characters that need escaping.

use crate::event::{CalendarEvent, EventTime};

/// Product identifier written into every exported calendar
pub const PRODID: &str = "-//Shift Calendar Generator//EN";

const CRLF: &str = "\r\n";

/// Generate a complete VCALENDAR document for `events`, in order.
pub fn generate_ics(events: &[CalendarEvent]) -> String {
    let mut out = String::with_capacity(160 + events.len() * 220);

    push_line(&mut out, "BEGIN:VCALENDAR");
    push_line(&mut out, "VERSION:2.0");
    push_property(&mut out, "PRODID", PRODID);
    push_line(&mut out, "CALSCALE:GREGORIAN");
    push_line(&mut out, "METHOD:PUBLISH");

    for event in events {
        push_event(&mut out, event);
    }

    push_line(&mut out, "END:VCALENDAR");
    out
}

fn push_event(out: &mut String, event: &CalendarEvent) {
    push_line(out, "BEGIN:VEVENT");
    push_property(out, "UID", &event.uid);

    // DTSTAMP is always UTC
    let dtstamp = event.created_at.format("%Y%m%dT%H%M%SZ").to_string();
    push_property(out, "DTSTAMP", &dtstamp);

    push_property(out, "SUMMARY", &event.summary);
    push_datetime_property(out, "DTSTART", &event.start);
    push_datetime_property(out, "DTEND", &event.end);
    push_property(out, "DESCRIPTION", &event.description);
    push_line(out, "END:VEVENT");
}

/// Add a datetime property with proper formatting based on EventTime variant
fn push_datetime_property(out: &mut String, name: &str, time: &EventTime) {
    match time {
        EventTime::Date(d) => {
            let value = d.format("%Y%m%d").to_string();
            push_property(out, &format!("{name};VALUE=DATE"), &value);
        }
        EventTime::DateTimeFloating(dt) => {
            // Floating datetime (no Z, no TZID)
            push_property(out, name, &dt.format("%Y%m%dT%H%M%S").to_string());
        }
    }
}

fn push_property(out: &mut String, name: &str, value: &str) {
    out.push_str(name);
    out.push(':');
    out.push_str(value);
    out.push_str(CRLF);
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push_str(CRLF);
}
