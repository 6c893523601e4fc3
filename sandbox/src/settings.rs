// settings.rs - Persisted sandbox preferences

use anyhow::{Context, Result};
use conway::RuleConfig;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::playback::DEFAULT_SPEED;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModeKind {
    Editor,
    Life,
}

/// Everything the sandbox remembers between runs. Missing fields take their
/// defaults, so older files keep loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub last_mode: ModeKind,
    /// Generations per second.
    pub speed: f32,
    pub grid_lines: bool,
    pub dimensions: (usize, usize),
    pub rule: RuleConfig,
    pub invert_colors: bool,
    /// Drawing surface size in pixels at zoom 1.
    pub surface_size: (usize, usize),
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            last_mode: ModeKind::Editor,
            speed: DEFAULT_SPEED,
            grid_lines: true,
            dimensions: (25, 25),
            rule: RuleConfig::CLASSIC,
            invert_colors: false,
            surface_size: (600, 600),
        }
    }
}

impl Settings {
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("conway-sandbox")
            .join("settings.json")
    }

    /// Reads settings from `path`. A missing or unreadable file yields the
    /// defaults.
    pub fn load_from(path: &Path) -> Self {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(_) => {
                info!("no settings at {}, using defaults", path.display());
                return Self::default();
            }
        };
        match serde_json::from_str(&content) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("ignoring malformed settings at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("conway-sandbox-test-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let settings = Settings::load_from(&scratch("does-not-exist.json"));
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.speed, 10.0);
        assert_eq!(settings.dimensions, (25, 25));
    }

    #[test]
    fn test_save_then_load() {
        let path = scratch("round/settings.json");
        let settings = Settings {
            last_mode: ModeKind::Life,
            speed: 2.5,
            grid_lines: false,
            dimensions: (40, 30),
            invert_colors: true,
            ..Settings::default()
        };
        settings.save_to(&path).unwrap();
        assert_eq!(Settings::load_from(&path), settings);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_partial_and_malformed_files() {
        let path = scratch("partial.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, r#"{ "speed": 30.0, "last_mode": "Life" }"#).unwrap();
        let settings = Settings::load_from(&path);
        assert_eq!(settings.speed, 30.0);
        assert_eq!(settings.last_mode, ModeKind::Life);
        assert!(settings.grid_lines);

        fs::write(&path, "{ not json").unwrap();
        assert_eq!(Settings::load_from(&path), Settings::default());
        let _ = fs::remove_file(&path);
    }
}
