mod commands;
mod input;
mod logging;
mod output;
mod render;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use shiftcal_core::config::Config;

#[derive(Parser)]
#[command(name = "shiftcal")]
#[command(about = "Convert a shift plan (one shift code per day) into an .ics calendar")]
struct Cli {
    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Config file (defaults to ~/.config/shiftcal/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the shift plan as an .ics calendar file
    Generate {
        #[command(flatten)]
        plan: PlanArgs,

        /// Output file ("-" for stdout). Defaults to <input>_calendar.ics
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show the schedule and shift statistics without writing anything
    Preview {
        #[command(flatten)]
        plan: PlanArgs,

        /// Print rows and statistics as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the shift definitions in effect
    Shifts,
}

#[derive(Args)]
pub struct PlanArgs {
    /// Shift plan file, one shift code per line ("-" for stdin)
    pub input: PathBuf,

    /// First day of the plan (YYYY-MM-DD, defaults to today)
    #[arg(short, long)]
    pub start: Option<String>,

    /// Leave free days (DF / Free) out of the calendar
    #[arg(short = 'x', long)]
    pub exclude_free: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Generate { plan, output } => commands::generate::run(&config, &plan, output),
        Commands::Preview { plan, json } => commands::preview::run(&config, &plan, json),
        Commands::Shifts => commands::shifts::run(&config),
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config file at {}", path.display())),
        None => Config::load_default().context("Failed to load config file"),
    }
}
