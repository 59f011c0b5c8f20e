use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::app::infrastructure::error::KioskError;

pub const DEFAULT_LOCALE: &str = "pt-BR";

/// Accessibility state for the lifetime of the process. Independent of orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessibilityFlags {
    pub voice_enabled: bool,
    pub color_vision_mode: bool,
    pub sign_language_overlay: bool,
}

impl Default for AccessibilityFlags {
    fn default() -> Self {
        Self {
            voice_enabled: true,
            color_vision_mode: false,
            sign_language_overlay: false,
        }
    }
}

impl From<&KioskSettings> for AccessibilityFlags {
    fn from(settings: &KioskSettings) -> Self {
        Self {
            voice_enabled: settings.voice_enabled,
            color_vision_mode: settings.color_vision_mode,
            sign_language_overlay: settings.sign_language_overlay,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KioskSettings {
    #[serde(default = "default_voice_enabled")]
    pub voice_enabled: bool,

    #[serde(default)]
    pub color_vision_mode: bool,

    #[serde(default)]
    pub sign_language_overlay: bool,

    /// Speech synthesizer invoked once per announcement
    #[serde(default = "default_speech_program")]
    pub speech_program: String,

    #[serde(default = "default_overlay_script_url")]
    pub overlay_script_url: String,

    #[serde(default = "default_overlay_app_url")]
    pub overlay_app_url: String,

    /// Replaces the built-in menu when set
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    #[serde(default)]
    pub fullscreen: bool,
}

fn default_voice_enabled() -> bool {
    true
}

fn default_speech_program() -> String {
    "espeak-ng".to_string()
}

fn default_overlay_script_url() -> String {
    "https://vlibras.gov.br/app/vlibras-plugin.js".to_string()
}

fn default_overlay_app_url() -> String {
    "https://vlibras.gov.br/app".to_string()
}

impl Default for KioskSettings {
    fn default() -> Self {
        Self {
            voice_enabled: default_voice_enabled(),
            color_vision_mode: false,
            sign_language_overlay: false,
            speech_program: default_speech_program(),
            overlay_script_url: default_overlay_script_url(),
            overlay_app_url: default_overlay_app_url(),
            catalog_path: None,
            fullscreen: false,
        }
    }
}

impl KioskSettings {
    /// Load settings from disk, or create default if not exists
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    tracing::warn!(path = %path.display(), "Failed to parse settings: {}. Using defaults.", e);
                    Self::default()
                }
            },
            Err(_) => {
                // First run: write defaults so operators have a file to edit
                let default = Self::default();
                if let Err(e) = default.save_to(path) {
                    tracing::debug!(path = %path.display(), "Could not write default settings: {}", e);
                }
                default
            }
        }
    }

    pub fn save(&self) -> Result<(), KioskError> {
        self.save_to(&Self::get_config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), KioskError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;

        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("inclusive-eats");
        path.push("settings.json");
        path
    }
}
