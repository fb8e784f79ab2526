// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Optional TOML configuration with per-section defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::logic::publish::sane_step_range;
use crate::models::draft::DEFAULT_MAX_MEDIA_BYTES;
use crate::models::platform::{Platform, PlatformSelection};

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "POSTPILOT_CONFIG";

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub publish: PublishConfig,
    pub media: MediaConfig,
    pub session: SessionConfig,
    pub window: WindowConfig,
}

/// Pacing of the simulated publish progress.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct PublishConfig {
    /// Delay between progress updates, in milliseconds.
    pub tick_interval_ms: u64,
    /// Smallest progress increment (percentage points).
    pub min_step: f32,
    /// Largest progress increment (exclusive).
    pub max_step: f32,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 200,
            min_step: 1.0,
            max_step: 15.0,
        }
    }
}

impl PublishConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct MediaConfig {
    /// Largest accepted media file, in bytes.
    pub max_file_size: u64,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_MEDIA_BYTES,
        }
    }
}

/// Initial session state.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct SessionConfig {
    /// Platform ids selected at startup, e.g. `["tiktok", "youtube"]`.
    pub default_platforms: Vec<String>,
}

impl SessionConfig {
    /// Parse the configured ids, skipping (and logging) unknown ones.
    pub fn platforms(&self) -> PlatformSelection {
        self.default_platforms
            .iter()
            .filter_map(|id| match Platform::from_id(id) {
                Ok(platform) => Some(platform),
                Err(err) => {
                    tracing::warn!("ignoring configured platform: {err}");
                    None
                }
            })
            .collect()
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1100.0,
            height: 800.0,
        }
    }
}

impl Config {
    /// Load from the resolved config path; missing or malformed files yield defaults.
    pub fn load_or_default() -> Self {
        let Some(path) = config_path() else {
            return Config::default();
        };
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Config::default();
        }
        match Config::load(&path) {
            Ok(cfg) => {
                tracing::info!(path = %path.display(), "loaded config");
                cfg
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), "ignoring config: {err:#}");
                Config::default()
            }
        }
    }

    /// Parse a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Config::parse(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn parse(contents: &str) -> Result<Self> {
        let mut cfg: Config = toml::from_str(contents)?;
        cfg.publish.normalize();
        Ok(cfg)
    }
}

impl PublishConfig {
    /// Keep the step range finite and non-empty so progress always reaches 100.
    fn normalize(&mut self) {
        let (min_step, max_step) = sane_step_range(self.min_step, self.max_step);
        if (min_step, max_step) != (self.min_step, self.max_step) {
            tracing::warn!(
                configured_min = self.min_step,
                configured_max = self.max_step,
                min_step,
                max_step,
                "adjusted publish step range"
            );
        }
        self.min_step = min_step;
        self.max_step = max_step;
    }
}

fn config_path() -> Option<PathBuf> {
    if let Some(custom) = std::env::var_os(CONFIG_ENV) {
        return Some(PathBuf::from(custom));
    }
    dirs::config_dir().map(|base| base.join("postpilot").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config() {
        let cfg = Config::default();
        assert_eq!(cfg.publish.tick_interval_ms, 200);
        assert_eq!(cfg.publish.max_step, 15.0);
        assert_eq!(cfg.media.max_file_size, 100 * 1024 * 1024);
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let cfg = Config::parse(
            r#"
[publish]
tick_interval_ms = 50
"#,
        )
        .unwrap();

        assert_eq!(cfg.publish.tick_interval(), Duration::from_millis(50));
        assert_eq!(cfg.publish.min_step, 1.0);
        assert_eq!(cfg.window, WindowConfig::default());
    }

    #[test]
    fn inverted_step_range_is_repaired() {
        let cfg = Config::parse(
            r#"
[publish]
min_step = 5.0
max_step = 2.0
"#,
        )
        .unwrap();

        assert!(cfg.publish.max_step > cfg.publish.min_step);
    }

    #[test]
    fn degenerate_step_ranges_still_reach_hundred() {
        use rand::SeedableRng;
        use rand::rngs::StdRng;

        use crate::logic::publish::{MIN_STEP, PROGRESS_DONE, ProgressTicker};

        let cases = [
            "min_step = 0.0",
            "min_step = -1.0",
            "min_step = nan",
            "max_step = nan",
            "max_step = inf",
            "min_step = -inf\nmax_step = inf",
            "min_step = 1e-9\nmax_step = 2e-9",
        ];
        let max_ticks = (PROGRESS_DONE / MIN_STEP) as usize + 2;

        for case in cases {
            let cfg = Config::parse(&format!("[publish]\n{case}\n")).unwrap();
            let PublishConfig {
                min_step, max_step, ..
            } = cfg.publish;

            assert!(min_step.is_finite() && max_step.is_finite(), "{case}");
            assert!(min_step >= MIN_STEP && max_step > min_step, "{case}");

            let ticks: Vec<f32> = ProgressTicker::new(StdRng::seed_from_u64(7), min_step, max_step)
                .take(max_ticks + 1)
                .collect();
            assert!(ticks.len() <= max_ticks, "{case}: progress did not finish");
            assert_eq!(ticks.last().copied(), Some(PROGRESS_DONE), "{case}");
        }
    }

    #[test]
    fn session_platforms_skip_unknown_ids() {
        let cfg = Config::parse(
            r#"
[session]
default_platforms = ["tiktok", "myspace", "LinkedIn"]
"#,
        )
        .unwrap();

        let selection = cfg.session.platforms();

        assert_eq!(selection.len(), 2);
        assert!(selection.contains(Platform::TikTok));
        assert!(selection.contains(Platform::LinkedIn));
    }

    #[test]
    fn malformed_file_reports_path() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[publish\n").unwrap();

        let err = Config::load(&path).unwrap_err();

        assert!(format!("{err:#}").contains("config.toml"));
    }

    #[test]
    fn load_reads_media_section() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[media]\nmax_file_size = 1024\n").unwrap();

        let cfg = Config::load(&path).unwrap();

        assert_eq!(cfg.media.max_file_size, 1024);
    }
}
