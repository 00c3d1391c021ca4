//! Persistent studio settings
//!
//! Saves and loads render preferences (canvas size, seed, font path, output
//! directory) to/from a studio_settings.json file in the config directory.

use std::fs;
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::constants::{CANVAS_HEIGHT, CANVAS_WIDTH};

/// Path to the settings file
pub const SETTINGS_FILE: &str = "config/studio_settings.json";

/// Persistent settings that survive between sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudioSettings {
    /// Texture width in pixels (2:1 with height for sphere mapping)
    pub canvas_width: u32,
    /// Texture height in pixels
    pub canvas_height: u32,
    /// Layout seed; None means pick a fresh one per render
    pub seed: Option<String>,
    /// Script font for signature ink; None means search system fonts
    pub font_path: Option<String>,
    /// Where rendered textures and manifests land
    pub output_dir: String,
}

impl Default for StudioSettings {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            seed: None,
            font_path: None,
            output_dir: "showcase".to_string(),
        }
    }
}

impl StudioSettings {
    /// Load settings from file, or return defaults if file doesn't exist
    pub fn load() -> Self {
        Self::load_from(SETTINGS_FILE)
    }

    /// Load settings from a specific path
    pub fn load_from(path: &str) -> Self {
        if !Path::new(path).exists() {
            info!("No {} found, using defaults", path);
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(settings) => {
                    info!("Loaded settings from {}", path);
                    settings
                }
                Err(e) => {
                    warn!("Failed to parse {}: {}, using defaults", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read {}: {}, using defaults", path, e);
                Self::default()
            }
        }
    }

    /// Save settings to file
    pub fn save(&self) -> std::io::Result<()> {
        self.save_to(SETTINGS_FILE)
    }

    /// Save settings to a specific path
    pub fn save_to(&self, path: &str) -> std::io::Result<()> {
        if let Some(parent) = Path::new(path).parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = StudioSettings::default();
        assert_eq!(settings.canvas_width, 2048);
        assert_eq!(settings.canvas_height, 1024);
        assert!(settings.seed.is_none());
    }

    #[test]
    fn test_save_load_roundtrip() {
        let path = std::env::temp_dir().join(format!("sigball_settings_{}.json", std::process::id()));
        let path_str = path.to_str().unwrap();

        let mut settings = StudioSettings::default();
        settings.seed = Some("k3y".to_string());
        settings.canvas_width = 1024;
        settings.canvas_height = 512;
        settings.save_to(path_str).unwrap();

        let loaded = StudioSettings::load_from(path_str);
        let _ = fs::remove_file(&path);
        assert_eq!(settings, loaded);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let loaded = StudioSettings::load_from("/no/such/dir/settings.json");
        assert_eq!(loaded, StudioSettings::default());
    }
}
