//! Configuration loading
//!
//! Settings come from a TOML file. Resolution order: an explicit path from
//! the command line, the `CHIRP_CONFIG` environment variable, then the
//! platform config directory. A missing file yields the defaults.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context as _, Result};
use directories::ProjectDirs;
use serde::Deserialize;

pub const CONFIG_ENV: &str = "CHIRP_CONFIG";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Handle shown in the overview header
    pub handle: String,

    /// Simulated latency of a data refresh, in milliseconds
    pub refresh_latency_ms: u64,

    /// Duration of the metric mount animation, in milliseconds
    pub animation_duration_ms: u64,

    /// Number of interpolation steps in the mount animation
    pub animation_steps: u32,

    /// How long a toast stays on screen, in milliseconds
    pub toast_ttl_ms: u64,

    /// Event-loop tick rate, in milliseconds
    pub tick_rate_ms: u64,

    /// Directory exports are written to; defaults to the working directory
    pub export_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            handle: crate::domain::fixtures::PRIMARY_HANDLE.to_string(),
            refresh_latency_ms: 1500,
            animation_duration_ms: 2000,
            animation_steps: 60,
            toast_ttl_ms: 4000,
            tick_rate_ms: 200,
            export_dir: None,
        }
    }
}

impl Config {
    pub fn refresh_latency(&self) -> Duration {
        Duration::from_millis(self.refresh_latency_ms)
    }

    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    pub fn toast_ttl(&self) -> Duration {
        Duration::from_millis(self.toast_ttl_ms)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    pub fn export_dir(&self) -> PathBuf {
        self.export_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Load the configuration, falling back to defaults when no file exists
pub fn load(explicit: Option<PathBuf>) -> Result<Config> {
    let path = match explicit {
        Some(path) => Some(path),
        None => match env::var_os(CONFIG_ENV) {
            Some(value) => Some(PathBuf::from(value)),
            None => ProjectDirs::from("", "", "chirp")
                .map(|dirs| dirs.config_dir().join("config.toml")),
        },
    };

    match path {
        Some(path) if path.exists() => {
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("failed to read config at {}", path.display()))?;
            let config = toml::from_str(&raw)
                .with_context(|| format!("failed to parse config at {}", path.display()))?;
            Ok(config)
        }
        _ => Ok(Config::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_demo_timings() {
        let config = Config::default();
        assert_eq!(config.refresh_latency(), Duration::from_millis(1500));
        assert_eq!(config.animation_duration(), Duration::from_millis(2000));
        assert_eq!(config.animation_steps, 60);
    }

    #[test]
    fn partial_file_keeps_unset_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "refresh_latency_ms = 250").unwrap();

        let config = load(Some(path)).unwrap();
        assert_eq!(config.refresh_latency_ms, 250);
        assert_eq!(config.animation_steps, 60);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let config = load(Some(PathBuf::from("/nonexistent/chirp.toml"))).unwrap();
        assert_eq!(config.toast_ttl_ms, 4000);
    }
}
