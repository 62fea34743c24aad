//! User configuration.
//!
//! Layered with the `config` crate: built-in defaults, then the TOML file
//! (`~/.config/luach/config.toml` unless `--config` names another), then
//! `LUACH_*` environment variables with `__` between nested keys
//! (`LUACH_ONOT__INCLUDE_OR_ZARUA=false`).

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::calendar::{StandardCalendar, WeekStart};
use crate::error::{LuachError, LuachResult};
use crate::onot::OnotOptions;

static DEFAULT_EVENTS_FILE: &str = "~/.local/share/luach/events.json";
const DEFAULT_SEPARATOR_WIDTH: usize = 25;

fn default_events_file() -> PathBuf {
    PathBuf::from(DEFAULT_EVENTS_FILE)
}

/// Text report layout, the `[output]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub show_cycle_intervals: bool,
    pub separator: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            show_cycle_intervals: true,
            separator: "-".repeat(DEFAULT_SEPARATOR_WIDTH),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LuachConfig {
    pub week_start: WeekStart,
    pub events_file: PathBuf,
    pub onot: OnotOptions,
    pub output: OutputConfig,
}

impl Default for LuachConfig {
    fn default() -> Self {
        LuachConfig {
            week_start: WeekStart::default(),
            events_file: default_events_file(),
            onot: OnotOptions::default(),
            output: OutputConfig::default(),
        }
    }
}

impl LuachConfig {
    pub fn config_path() -> LuachResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| LuachError::Config("Could not determine config directory".into()))?
            .join("luach");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads from the default location, writing a commented-out default
    /// file first if there is none.
    pub fn load() -> LuachResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::build(&config_path, false, true)
    }

    /// Loads from an explicit file, which must exist. It is never written.
    pub fn load_from(path: &Path) -> LuachResult<Self> {
        Self::build(path, true, true)
    }

    /// Settings stored in `path` alone, without `LUACH_*` overrides. A
    /// missing file reads as the defaults.
    pub fn read_file(path: &Path) -> LuachResult<Self> {
        Self::build(path, false, false)
    }

    fn build(path: &Path, required: bool, with_env: bool) -> LuachResult<Self> {
        let mut builder = Config::builder().add_source(
            File::from(path.to_path_buf())
                .format(FileFormat::Toml)
                .required(required),
        );
        if with_env {
            builder = builder.add_source(
                Environment::with_prefix("LUACH")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );
        }

        builder
            .build()
            .map_err(|e| LuachError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| LuachError::Config(e.to_string()))
    }

    /// Event file with `~` expanded.
    pub fn events_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.events_file.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    pub fn calendar(&self) -> StandardCalendar {
        StandardCalendar::new(self.week_start)
    }

    /// Resolved settings as TOML.
    pub fn to_toml(&self) -> LuachResult<String> {
        toml::to_string_pretty(self).map_err(|e| LuachError::Config(e.to_string()))
    }

    /// Changes one setting named by its dotted key, e.g. `week_start` or
    /// `onot.include_or_zarua`. `value` is read as the type the setting
    /// already has.
    pub fn set(&mut self, key: &str, value: &str) -> LuachResult<()> {
        let unknown = || LuachError::Config(format!("Unknown setting '{key}'"));
        let invalid = |reason: String| {
            LuachError::Config(format!("Invalid value '{value}' for '{key}': {reason}"))
        };

        let mut root =
            toml::Value::try_from(&*self).map_err(|e| LuachError::Config(e.to_string()))?;

        let mut slot = &mut root;
        for part in key.split('.') {
            slot = slot.get_mut(part).ok_or_else(unknown)?;
        }

        let replacement = match slot {
            toml::Value::Boolean(_) => toml::Value::Boolean(
                value
                    .parse()
                    .map_err(|_| invalid("expected true or false".into()))?,
            ),
            toml::Value::String(_) => toml::Value::String(value.to_string()),
            _ => return Err(unknown()),
        };
        *slot = replacement;

        *self = root.try_into().map_err(|e| invalid(e.to_string()))?;
        Ok(())
    }

    /// Writes the settings to `path`, replacing the file.
    pub fn save_to(&self, path: &Path) -> LuachResult<()> {
        let content = self.to_toml()?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                LuachError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, content)
            .map_err(|e| LuachError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> LuachResult<()> {
        let contents = format!(
            "\
# luach configuration

# First day of the displayed week (sunday or monday):
# week_start = \"sunday\"

# Where events are stored:
# events_file = \"{DEFAULT_EVENTS_FILE}\"

# [onot]
# include_or_zarua = true
# include_kartyupleity = true
# include_standard_cycles = true
# include_personal_intervals = true
# include_unbroken_patterns = true

# [output]
# show_cycle_intervals = true
# separator = \"{}\"
",
            "-".repeat(DEFAULT_SEPARATOR_WIDTH)
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                LuachError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| LuachError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
