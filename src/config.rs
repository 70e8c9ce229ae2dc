use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::analyzers::arrival::DEFAULT_TARGET_TIME;
use crate::clock::ClockTime;

pub const TARGET_TIME_VAR: &str = "BUS_TARGET_TIME";
pub const LOG_FILE_VAR: &str = "LOG_FILE_PATH";
const DEFAULT_LOG_FILE: &str = "logs/bus_tracker.log";

/// Runtime settings read from the environment (and `.env`, once loaded).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub target_time: ClockTime,
    pub log_file_path: PathBuf,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup; unset keys fall back to
    /// the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let target_time = match lookup(TARGET_TIME_VAR) {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("{TARGET_TIME_VAR} is not a valid HH:MM time"))?,
            None => DEFAULT_TARGET_TIME,
        };

        let log_file_path = lookup(LOG_FILE_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

        Ok(Self {
            target_time,
            log_file_path,
        })
    }

    /// Replaces the target time when an override is given.
    pub fn with_target(mut self, target: Option<ClockTime>) -> Self {
        if let Some(target) = target {
            self.target_time = target;
        }
        self
    }
}
