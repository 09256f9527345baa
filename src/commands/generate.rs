use anyhow::Result;
use shiftcal_core::config::Config;
use shiftcal_core::ics::generate_ics;
use std::io::Write;
use std::path::PathBuf;

use super::Plan;
use crate::PlanArgs;
use crate::output::{OutputTarget, write_atomic};

pub fn run(config: &Config, args: &PlanArgs, output: Option<PathBuf>) -> Result<()> {
    let plan = Plan::load(config, args)?;

    // Build the whole document before touching the destination
    let events = plan.translate()?;
    let ics = generate_ics(&events);

    let target = OutputTarget::resolve(output.as_deref(), &plan.source, plan.start, plan.exclude_free);

    match target {
        OutputTarget::Stdout => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(ics.as_bytes())?;
            stdout.flush()?;
            tracing::info!(events = events.len(), "calendar written to stdout");
        }
        OutputTarget::File(path) => {
            write_atomic(&path, &ics)?;
            println!("Calendar generated successfully: {}", path.display());
            println!(
                "Found {} shifts, exported {} events",
                plan.codes.len(),
                events.len()
            );
        }
    }

    Ok(())
}
