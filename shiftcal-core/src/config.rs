//! shiftcal configuration file.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{ShiftCalError, ShiftCalResult};
use crate::shift::{ShiftDefinition, ShiftTable};

fn default_true() -> bool {
    true
}

/// Configuration at ~/.config/shiftcal/config.toml
///
/// ```toml
/// exclude_free = true
///
/// [shifts.LD]
/// description = "Langdienst"
/// all_day = false
/// start_time = "07:30"
/// end_time = "20:00"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Default for `--exclude-free`; the flag can only turn exclusion on
    #[serde(default)]
    pub exclude_free: bool,

    /// Start from the built-in shift table (`[shifts]` entries override it)
    #[serde(default = "default_true")]
    pub include_default_shifts: bool,

    #[serde(default)]
    pub shifts: BTreeMap<String, ShiftDefinition>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            exclude_free: false,
            include_default_shifts: true,
            shifts: BTreeMap::new(),
        }
    }
}

impl Config {
    pub fn config_path() -> ShiftCalResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ShiftCalError::Config("Could not determine config directory".into()))?
            .join("shiftcal");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config at the default location, or defaults if there is none.
    pub fn load_default() -> ShiftCalResult<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            Self::load(&path)
        } else {
            debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Load config from an explicit path. The file must exist.
    pub fn load(path: &Path) -> ShiftCalResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content)
            .map_err(|e| ShiftCalError::Config(format!("{}: {}", path.display(), e)))?;
        debug!(path = %path.display(), shifts = config.shifts.len(), "loaded config");
        Ok(config)
    }

    pub fn from_toml(content: &str) -> ShiftCalResult<Self> {
        toml::from_str(content).map_err(|e| ShiftCalError::Config(e.to_string()))
    }

    /// The effective, validated shift table.
    pub fn shift_table(&self) -> ShiftCalResult<ShiftTable> {
        let mut table = if self.include_default_shifts {
            ShiftTable::defaults()
        } else {
            ShiftTable::new()
        };
        table.extend(self.shifts.clone());
        table.validate()?;
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config = Config::from_toml("").unwrap();
        assert!(!config.exclude_free);
        assert!(config.include_default_shifts);
        assert_eq!(config.shift_table().unwrap(), ShiftTable::defaults());
    }

    #[test]
    fn test_shifts_extend_defaults() {
        let config = Config::from_toml(
            r#"
            exclude_free = true

            [shifts.LD]
            description = "Langdienst"
            all_day = false
            start_time = "07:30"
            end_time = "20:00"

            [shifts.SN]
            description = "Spätnacht neu"
            all_day = false
            start_time = "16:00"
            end_time = "09:00"
            ends_next_day = true

            [shifts.U]
            description = "Urlaub"
            "#,
        )
        .unwrap();

        assert!(config.exclude_free);
        let table = config.shift_table().unwrap();
        assert_eq!(table.len(), 10);

        let ld = table.get("LD").unwrap();
        assert_eq!(ld.start_time.as_deref(), Some("07:30"));
        assert!(!ld.ends_next_day);

        let sn = table.get("SN").unwrap();
        assert_eq!(sn.description, "Spätnacht neu");
        assert!(sn.ends_next_day);

        // all_day defaults to true
        assert!(table.get("U").unwrap().all_day);
    }

    #[test]
    fn test_next_day_key() {
        let config = Config::from_toml(
            r#"
            include_default_shifts = false

            [shifts.N]
            description = "Nacht"
            all_day = false
            start_time = "21:00"
            end_time = "06:00"
            next_day = true
            "#,
        )
        .unwrap();

        let table = config.shift_table().unwrap();
        assert_eq!(table.len(), 1);
        assert!(table.get("N").unwrap().ends_next_day);
    }

    #[test]
    fn test_invalid_shift_fails_validation() {
        let config = Config::from_toml(
            r#"
            [shifts.X]
            description = "Broken"
            all_day = false
            start_time = "25:00"
            end_time = "06:00"
            "#,
        )
        .unwrap();

        let err = config.shift_table().unwrap_err();
        assert!(matches!(err, ShiftCalError::MalformedTimeField { .. }), "got {err:?}");
        assert!(err.to_string().contains("'X'"));
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let err = Config::from_toml("exclude_fre = true").unwrap_err();
        assert!(matches!(err, ShiftCalError::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "exclude_free = true\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert!(config.exclude_free);

        let missing = Config::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(missing, ShiftCalError::Io(_)));

        std::fs::write(&path, "exclude_free = \"maybe\"\n").unwrap();
        let bad = Config::load(&path).unwrap_err();
        assert!(bad.to_string().contains("config.toml"));
    }
}
