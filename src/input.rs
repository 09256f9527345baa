//! Reading the shift plan and its start date.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use shiftcal_core::sequence::{parse_codes_non_empty, parse_start_date};
use tracing::warn;

/// Where the shift plan comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// `-` means stdin, anything else is a file path.
    pub fn from_arg(arg: &Path) -> Self {
        if arg == Path::new("-") {
            InputSource::Stdin
        } else {
            InputSource::File(arg.to_path_buf())
        }
    }

    pub fn read_to_string(&self) -> Result<String> {
        match self {
            InputSource::Stdin => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .context("Failed to read shift plan from stdin")?;
                Ok(text)
            }
            InputSource::File(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read shift plan at {}", path.display())),
        }
    }

    /// Read and parse the shift codes. An input without codes is an error.
    pub fn read_codes(&self) -> Result<Vec<String>> {
        let text = self.read_to_string()?;
        parse_codes_non_empty(&text).with_context(|| format!("Nothing to convert in {}", self))
    }
}

impl std::fmt::Display for InputSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputSource::Stdin => write!(f, "stdin"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Start date from the command line, or `today` when absent or unparseable.
pub fn resolve_start_date(arg: Option<&str>, today: NaiveDate) -> NaiveDate {
    let Some(arg) = arg else {
        return today;
    };

    parse_start_date(arg).unwrap_or_else(|err| {
        warn!("{err}. Using today's date ({today})");
        today
    })
}
