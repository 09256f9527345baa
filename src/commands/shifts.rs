use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use shiftcal_core::config::Config;
use shiftcal_core::sequence::{FREE_ALIAS, FREE_CODE};

use crate::render::Render;

pub fn run(config: &Config) -> Result<()> {
    let table = config.shift_table().context("Invalid shift definitions in config")?;

    if table.is_empty() {
        println!("{}", "No shift definitions. Every code becomes an all-day event.".dimmed());
        return Ok(());
    }

    for entry in table.iter() {
        println!("{}", entry.render());
    }

    println!();
    println!(
        "{}",
        format!(
            "'{FREE_ALIAS}' is read as '{FREE_CODE}'. Codes not listed become all-day events."
        )
        .dimmed()
    );

    Ok(())
}
