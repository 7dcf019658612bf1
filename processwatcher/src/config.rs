//! On-disk locations and user settings.
//! Stored under XDG config dir: $XDG_CONFIG_HOME/processwatcher (fallback ~/.config/processwatcher)

use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, time::Duration};

use crate::monitor::DEFAULT_INTERVAL;

pub const LOG_FILE_NAME: &str = "resource_log.txt";

/// Optional `settings.json`; every field falls back to its default when absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub list_limit: usize,
    pub history_lines: usize,
    pub monitor_interval_secs: u64,
    pub cpu_sample_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            list_limit: 20,
            history_lines: 20,
            monitor_interval_secs: DEFAULT_INTERVAL.as_secs(),
            cpu_sample_ms: 1000,
            log_file: None,
        }
    }
}

impl Settings {
    pub fn monitor_interval(&self) -> Duration {
        Duration::from_secs(self.monitor_interval_secs.max(1))
    }

    pub fn cpu_sample(&self) -> Duration {
        Duration::from_millis(self.cpu_sample_ms)
    }

    /// The resource log path: explicit setting, else the default under [`config_dir`].
    pub fn log_path(&self) -> PathBuf {
        self.log_file.clone().unwrap_or_else(log_path)
    }
}

pub fn config_dir() -> PathBuf {
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
        PathBuf::from(xdg).join("processwatcher")
    } else {
        dirs_next::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("processwatcher")
    }
}

/// Create the config dir if missing. Safe to call repeatedly.
pub fn ensure_config_dir() -> std::io::Result<PathBuf> {
    let dir = config_dir();
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

pub fn log_path() -> PathBuf {
    config_dir().join(LOG_FILE_NAME)
}

pub fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

pub fn load_settings() -> Settings {
    let path = settings_path();
    match fs::read_to_string(&path) {
        Ok(s) => serde_json::from_str(&s).unwrap_or_else(|e| {
            tracing::warn!("ignoring unreadable {}: {e}", path.display());
            Settings::default()
        }),
        Err(_) => Settings::default(),
    }
}
