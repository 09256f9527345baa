//! Core types for shiftcal.
//!
//! This crate turns a shift plan (one shift code per calendar day) into
//! calendar events and serializes them as an iCalendar document:
//! - `shift` holds shift definitions and the default shift table
//! - `sequence` parses and normalizes raw shift-code input
//! - `translate` walks the days and builds `CalendarEvent`s
//! - `ics` emits the `.ics` text
//! - `preview` summarizes a schedule for display

pub mod config;
pub mod error;
pub mod event;
pub mod ics;
pub mod preview;
pub mod sequence;
pub mod shift;
pub mod translate;

pub use error::{ShiftCalError, ShiftCalResult};
pub use event::{CalendarEvent, EventTime};
pub use shift::{ShiftDefinition, ShiftTable, ShiftTime};
pub use translate::{translate, translate_with_clock};
