//! Player preferences
//!
//! Persisted separately from the score list.

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_BUBBLES, MAX_ROUND_SECS};
use crate::sim::{Playfield, RoundConfig};

/// Round setup chosen on the settings screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Name recorded with the score
    pub player_name: String,
    /// Round length in seconds (0 - 60)
    pub round_secs: u32,
    /// Max bubbles on screen at once (0 - 15)
    pub max_bubbles: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            player_name: String::new(),
            round_secs: MAX_ROUND_SECS,
            max_bubbles: MAX_BUBBLES,
        }
    }
}

impl Settings {
    /// Copy with values pulled back into slider range
    pub fn clamped(&self) -> Self {
        Self {
            player_name: self.player_name.trim().to_string(),
            round_secs: self.round_secs.min(MAX_ROUND_SECS),
            max_bubbles: self.max_bubbles.min(MAX_BUBBLES),
        }
    }

    /// Round parameters for a playfield of the given size
    pub fn round_config(&self, playfield: Playfield) -> RoundConfig {
        let s = self.clamped();
        RoundConfig::new(playfield, s.max_bubbles, s.round_secs)
    }

    /// LocalStorage key / file stem
    const STORAGE_KEY: &'static str = "bubble_pop_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(settings) = serde_json::from_str::<Settings>(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings.clamped();
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        let Some(storage) = storage else {
            log::warn!("LocalStorage unavailable, settings not saved");
            return;
        };
        let saved = crate::persistence::persist_json("settings", self, |json| {
            storage.set_item(Self::STORAGE_KEY, json)
        });
        if saved {
            log::info!("Settings saved");
        }
    }

    /// Default settings file next to the working directory
    #[cfg(not(target_arch = "wasm32"))]
    pub fn default_path() -> std::path::PathBuf {
        std::path::PathBuf::from(format!("{}.json", Self::STORAGE_KEY))
    }

    /// Load settings from a JSON file, falling back to defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<Settings>(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings.clamped()
                }
                Err(e) => {
                    log::warn!("Ignoring corrupt settings at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Save settings as JSON
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to(&self, path: &std::path::Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_slider_maximums() {
        let s = Settings::default();
        assert_eq!(s.round_secs, 60);
        assert_eq!(s.max_bubbles, 15);
        assert!(s.player_name.is_empty());
    }

    #[test]
    fn test_clamped() {
        let s = Settings {
            player_name: "  ana ".to_string(),
            round_secs: 600,
            max_bubbles: 99,
        }
        .clamped();
        assert_eq!(s.player_name, "ana");
        assert_eq!(s.round_secs, 60);
        assert_eq!(s.max_bubbles, 15);
    }

    #[test]
    fn test_round_config_uses_clamped_values() {
        let s = Settings {
            player_name: String::new(),
            round_secs: 90,
            max_bubbles: 4,
        };
        let cfg = s.round_config(Playfield::new(390.0, 844.0));
        assert_eq!(cfg.duration_secs, 60);
        assert_eq!(cfg.max_bubbles, 4);
        assert_eq!(cfg.playfield.width, 390.0);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let s: Settings = serde_json::from_str(r#"{"player_name":"bo"}"#).unwrap();
        assert_eq!(s.player_name, "bo");
        assert_eq!(s.round_secs, 60);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_file_round_trip() {
        let dir = std::env::temp_dir().join(format!("bubble-pop-settings-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("settings.json");

        let s = Settings {
            player_name: "cy".to_string(),
            round_secs: 30,
            max_bubbles: 8,
        };
        s.save_to(&path).unwrap();
        assert_eq!(Settings::load_from(&path), s);

        let _ = std::fs::remove_file(&path);
        assert_eq!(Settings::load_from(&path), Settings::default());
    }
}
