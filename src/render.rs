//! TUI rendering for shiftcal types.
//!
//! Extension traits that add colored terminal output to shiftcal-core
//! types using owo_colors.

use owo_colors::OwoColorize;
use shiftcal_core::ShiftDefinition;
use shiftcal_core::preview::{ScheduleRow, ScheduleStats};
use shiftcal_core::sequence::is_free_code;

/// Widest bar in the distribution chart
const MAX_BAR_WIDTH: usize = 40;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for ScheduleRow {
    fn render(&self) -> String {
        let code = format!("{:<6}", self.code);
        let code = if is_free_code(&self.code) {
            code.green().to_string()
        } else {
            code.bold().to_string()
        };

        format!(
            "{}  {:<9}  {} {:<24} {}",
            self.date,
            self.weekday,
            code,
            self.description,
            self.time.dimmed()
        )
    }
}

impl Render for (&str, &ShiftDefinition) {
    fn render(&self) -> String {
        let (code, def) = self;
        let time = match (def.all_day, &def.start_time, &def.end_time) {
            (true, _, _) => "All day".to_string(),
            (false, Some(start), Some(end)) if def.ends_next_day => {
                format!("{start} - {end} (+1 day)")
            }
            (false, Some(start), Some(end)) => format!("{start} - {end}"),
            (false, _, _) => "(missing times)".red().to_string(),
        };

        format!("{}  {:<24} {}", format!("{code:<6}").bold(), def.description, time.dimmed())
    }
}

impl Render for ScheduleStats {
    fn render(&self) -> String {
        let mut lines = vec![
            format!(
                "{} total   {} work   {} free",
                self.total.bold(),
                self.work_shifts.bold(),
                self.free_days.green()
            ),
            String::new(),
        ];

        let max = self.distribution.first().map(|(_, n)| *n).unwrap_or(0);
        for (code, count) in &self.distribution {
            lines.push(format!(
                "{:<6} {} {}",
                code,
                "█".repeat(bar_width(*count, max)).cyan(),
                count
            ));
        }

        lines.join("\n")
    }
}

/// Bar length for `count`, scaled so the largest count fills the chart.
fn bar_width(count: usize, max: usize) -> usize {
    if max <= MAX_BAR_WIDTH {
        count
    } else {
        (count * MAX_BAR_WIDTH).div_ceil(max)
    }
}
