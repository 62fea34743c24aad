//! State owned by one CLI invocation.

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::NaiveDate;
use luach_core::StandardCalendar;
use luach_core::config::LuachConfig;
use luach_core::store::EventBook;
use tracing::debug;

pub struct Context {
    pub config: LuachConfig,
    config_path: PathBuf,
    events_path: PathBuf,
}

impl Context {
    /// Resolves settings from `--config` (or the default file) and the event
    /// file from `--events` (or the configured one).
    pub fn load(config: Option<PathBuf>, events: Option<PathBuf>) -> Result<Self> {
        let (config, config_path) = match config {
            Some(path) => (LuachConfig::load_from(&path)?, path),
            None => (LuachConfig::load()?, LuachConfig::config_path()?),
        };

        let events_path = events.unwrap_or_else(|| config.events_path());
        debug!(
            config = %config_path.display(),
            events = %events_path.display(),
            "resolved paths"
        );

        Ok(Context {
            config,
            config_path,
            events_path,
        })
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn events_path(&self) -> &Path {
        &self.events_path
    }

    pub fn book(&self) -> Result<EventBook> {
        Ok(EventBook::load(&self.events_path)?)
    }

    pub fn calendar(&self) -> StandardCalendar {
        self.config.calendar()
    }

    pub fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}
