//! Editor configuration
//!
//! Tuning values for snapping, zoom and caption derivation. Every field has a default,
//! so a partial (or missing) `editor.json` is always accepted.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{EditorError, Result};

/// Environment variable that points at an explicit config file.
pub const CONFIG_ENV_VAR: &str = "STORYREEL_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Frame rate used for new projects and payload imports.
    pub default_fps: u32,
    /// Maximum pointer distance, in pixels, at which a drag snaps.
    pub snap_threshold_px: f64,
    pub min_pixels_per_second: f64,
    pub max_pixels_per_second: f64,
    /// Multiplier applied by the zoom in/out controls.
    pub zoom_step: f64,
    /// Projects at or below this length open at the short-project zoom.
    pub short_project_seconds: f64,
    pub short_project_pixels_per_second: f64,
    pub long_project_pixels_per_second: f64,
    /// Shortest visible caption cue.
    pub min_cue_seconds: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            default_fps: 30,
            snap_threshold_px: 8.0,
            min_pixels_per_second: 10.0,
            max_pixels_per_second: 400.0,
            zoom_step: 1.25,
            short_project_seconds: 30.0,
            short_project_pixels_per_second: 100.0,
            long_project_pixels_per_second: 40.0,
            min_cue_seconds: 1.0 / 30.0,
        }
    }
}

impl EditorConfig {
    /// Read a config file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => return Err(EditorError::io("failed to read config", path, err)),
        };
        let config: Self =
            serde_json::from_str(&json).map_err(|err| EditorError::json(path, err))?;
        Ok(config.sanitized())
    }

    /// Load from the default location, falling back to defaults on any error.
    pub fn load_or_default() -> Self {
        let path = default_config_path();
        match Self::load(&path) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "editor config loaded");
                config
            }
            Err(err) => {
                tracing::warn!(error = %err, "using default editor config");
                Self::default()
            }
        }
    }

    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if self.default_fps == 0 {
            self.default_fps = defaults.default_fps;
        }
        if !(self.snap_threshold_px >= 0.0) {
            self.snap_threshold_px = defaults.snap_threshold_px;
        }
        if !(self.min_pixels_per_second > 0.0) {
            self.min_pixels_per_second = defaults.min_pixels_per_second;
        }
        if !(self.max_pixels_per_second >= self.min_pixels_per_second) {
            self.max_pixels_per_second = self.min_pixels_per_second.max(defaults.max_pixels_per_second);
        }
        if !(self.zoom_step > 1.0) {
            self.zoom_step = defaults.zoom_step;
        }
        if !(self.min_cue_seconds > 0.0) {
            self.min_cue_seconds = defaults.min_cue_seconds;
        }
        self
    }
}

/// `$STORYREEL_CONFIG`, or `editor.json` under the platform config directory.
pub fn default_config_path() -> PathBuf {
    if let Ok(explicit) = std::env::var(CONFIG_ENV_VAR) {
        return PathBuf::from(explicit);
    }
    let base = std::env::var("APPDATA")
        .or_else(|_| std::env::var("XDG_CONFIG_HOME"))
        .map(PathBuf::from)
        .or_else(|_| std::env::var("HOME").map(|home| PathBuf::from(home).join(".config")))
        .unwrap_or_else(|_| std::env::temp_dir());
    base.join("storyreel").join("editor.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("storyreel-config-does-not-exist.json");
        let config = EditorConfig::load(&path).unwrap();
        assert_eq!(config, EditorConfig::default());
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_fields() {
        let path = std::env::temp_dir().join(format!("storyreel-config-{}.json", uuid::Uuid::new_v4()));
        fs::write(&path, r#"{ "snap_threshold_px": 12.0 }"#).unwrap();
        let config = EditorConfig::load(&path).unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(config.snap_threshold_px, 12.0);
        assert_eq!(config.default_fps, 30);
    }

    #[test]
    fn invalid_values_are_replaced() {
        let path = std::env::temp_dir().join(format!("storyreel-config-{}.json", uuid::Uuid::new_v4()));
        fs::write(&path, r#"{ "default_fps": 0, "zoom_step": 0.5 }"#).unwrap();
        let config = EditorConfig::load(&path).unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(config.default_fps, 30);
        assert_eq!(config.zoom_step, 1.25);
    }

    #[test]
    fn malformed_json_is_an_error() {
        let path = std::env::temp_dir().join(format!("storyreel-config-{}.json", uuid::Uuid::new_v4()));
        fs::write(&path, "{ not json").unwrap();
        let result = EditorConfig::load(&path);
        fs::remove_file(&path).ok();
        assert!(matches!(result, Err(EditorError::Json { .. })));
    }
}
