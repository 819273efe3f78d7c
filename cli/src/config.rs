use std::path::{Path, PathBuf};

use anyhow::Context;
use calculator::EnhancementRequest;
use models::{EnhancementKind, Level, RepetitionCount};
use serde::Deserialize;

pub const DEFAULT_CONFIG_FILE_NAME: &str = ".ghec.toml";

/// Pricing parameters that may be left unset. Used both for the config file
/// and for command line flags.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub level: Option<i32>,
    pub targets: Option<u32>,
    pub previous: Option<i32>,
}

impl Config {
    /// Reads the config file at `explicit`, or `$HOME/.ghec.toml` when no path
    /// is given. Only the default file may be absent.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Option<(PathBuf, Config)>> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match default_config_path() {
                Some(path) if path.exists() => path,
                _ => return Ok(None),
            },
        };
        let config = Self::read(&path)?;
        Ok(Some((path, config)))
    }

    fn read(path: &Path) -> anyhow::Result<Config> {
        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("unable to read config file {path:?}"))?;
        toml::from_str::<Config>(&config_str)
            .with_context(|| format!("invalid config file {path:?}"))
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(DEFAULT_CONFIG_FILE_NAME))
}

/// Parameters after applying flags over config over defaults.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settings {
    pub level: Level,
    pub targets: u32,
    pub previous: RepetitionCount,
}

impl Default for Settings {
    fn default() -> Self {
        let request = EnhancementRequest::new(EnhancementKind::Move);
        Self {
            level: request.level(),
            targets: request.targets(),
            previous: request.repetition(),
        }
    }
}

impl Settings {
    pub fn resolve(overrides: &Config, config: &Config) -> Self {
        let defaults = Settings::default();
        Self {
            level: overrides
                .level
                .or(config.level)
                .map(Level)
                .unwrap_or(defaults.level),
            targets: overrides
                .targets
                .or(config.targets)
                .unwrap_or(defaults.targets),
            previous: overrides
                .previous
                .or(config.previous)
                .map(RepetitionCount)
                .unwrap_or(defaults.previous),
        }
    }

    pub fn request(&self, kind: EnhancementKind) -> EnhancementRequest {
        EnhancementRequest::new(kind)
            .with_level(self.level)
            .with_target_count(self.targets)
            .with_repetition_count(self.previous)
    }
}

impl std::fmt::Display for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Level: {}, Targets: {}, Previous: {}",
            self.level, self.targets, self.previous
        )
    }
}
