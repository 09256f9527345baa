//! iCalendar (RFC 5545) export.

mod generate;

pub use generate::{PRODID, generate_ics};
