//! Choosing where the calendar goes and writing it without leaving partial files.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tempfile::NamedTempFile;

use crate::input::InputSource;

/// Where the generated calendar is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// Explicit `--output` (`-` is stdout), else a name derived from the input.
    pub fn resolve(
        arg: Option<&Path>,
        source: &InputSource,
        start: NaiveDate,
        exclude_free: bool,
    ) -> Self {
        match arg {
            Some(path) if path == Path::new("-") => OutputTarget::Stdout,
            Some(path) => OutputTarget::File(path.to_path_buf()),
            None => OutputTarget::File(default_output_path(source, start, exclude_free)),
        }
    }
}

/// `<dir>/<stem>_calendar[_work_only].ics` next to an input file, or
/// `shift_calendar_<YYYY_MM_DD>.ics` in the working directory for stdin.
pub fn default_output_path(source: &InputSource, start: NaiveDate, exclude_free: bool) -> PathBuf {
    match source {
        InputSource::File(path) => {
            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_else(|| "shifts".to_string());
            let suffix = if exclude_free { "_work_only" } else { "" };
            path.with_file_name(format!("{stem}_calendar{suffix}.ics"))
        }
        InputSource::Stdin => PathBuf::from(format!("shift_calendar_{}.ics", start.format("%Y_%m_%d"))),
    }
}

/// Write `content` to `path` through a temporary sibling file, so the
/// destination is either the complete new calendar or untouched.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write calendar for {}", path.display()))?;
    file.persist(path)
        .with_context(|| format!("Failed to write calendar to {}", path.display()))?;

    Ok(())
}
