use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;
use shiftcal_core::config::Config;
use shiftcal_core::preview::{ScheduleRow, ScheduleStats, schedule_rows};

use super::Plan;
use crate::PlanArgs;
use crate::render::Render;

/// JSON shape of `shiftcal preview --json`
#[derive(Serialize)]
struct PreviewReport {
    rows: Vec<ScheduleRow>,
    stats: ScheduleStats,
}

pub fn run(config: &Config, args: &PlanArgs, json: bool) -> Result<()> {
    let plan = Plan::load(config, args)?;
    let events = plan.translate()?;

    let rows = schedule_rows(&events);
    let stats = ScheduleStats::from_rows(&rows);

    if json {
        let report = PreviewReport { rows, stats };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", "Schedule".bold());
    if rows.is_empty() {
        println!("   {}", "(no events)".dimmed());
    }
    for row in &rows {
        println!("   {}", row.render());
    }

    println!();
    println!("{}", "Shift distribution".bold());
    for line in stats.render().lines() {
        println!("   {}", line);
    }

    Ok(())
}
