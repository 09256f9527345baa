pub mod generate;
pub mod preview;
pub mod shifts;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use shiftcal_core::config::Config;
use shiftcal_core::{CalendarEvent, ShiftTable, translate};
use tracing::{info, warn};

use crate::PlanArgs;
use crate::input::{InputSource, resolve_start_date};

/// Everything needed to translate one shift plan, loaded once per command.
pub struct Plan {
    pub source: InputSource,
    pub codes: Vec<String>,
    pub start: NaiveDate,
    pub exclude_free: bool,
    pub table: ShiftTable,
}

impl Plan {
    /// Resolve command-line arguments against the config and read the input.
    pub fn load(config: &Config, args: &PlanArgs) -> Result<Self> {
        let table = config.shift_table().context("Invalid shift definitions in config")?;

        let source = InputSource::from_arg(&args.input);
        let codes = source.read_codes()?;
        let start = resolve_start_date(args.start.as_deref(), Local::now().date_naive());
        let exclude_free = args.exclude_free || config.exclude_free;

        for code in table.unknown_codes(&codes) {
            warn!("Shift code '{}' is not defined; it will be an all-day event", code);
        }

        info!(
            source = %source,
            codes = codes.len(),
            %start,
            exclude_free,
            "loaded shift plan"
        );

        Ok(Plan {
            source,
            codes,
            start,
            exclude_free,
            table,
        })
    }

    pub fn translate(&self) -> Result<Vec<CalendarEvent>> {
        translate(&self.codes, self.start, &self.table, self.exclude_free)
            .with_context(|| format!("Failed to convert shift plan from {}", self.source))
    }
}
