//! Game settings and preferences
//!
//! Read from LocalStorage once at startup. Missing fields fall back to defaults so older
//! saved settings keep loading.

use serde::{Deserialize, Serialize};

use crate::sim::SoundCue;

/// Paths of the page's media files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
    pub hit_sound: String,
    pub miss_sound: String,
    pub rocket_sound: String,
    /// Rocket sprite drawn during the flight
    pub rocket_sprite: String,
    /// Image shown over a missed cell
    pub miss_image: String,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            hit_sound: "boom.mp3".into(),
            miss_sound: "sfx.mp3".into(),
            rocket_sound: "fired.mp3".into(),
            rocket_sprite: "rocket.png".into(),
            miss_image: "angry.gif".into(),
        }
    }
}

impl AssetPaths {
    pub fn sound(&self, cue: SoundCue) -> &str {
        match cue {
            SoundCue::Hit => &self.hit_sound,
            SoundCue::Miss => &self.miss_sound,
            SoundCue::Rocket => &self.rocket_sound,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Silence all cues
    pub muted: bool,
    /// Amount added/removed by the wager buttons
    pub wager_step: u64,
    pub assets: AssetPaths,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sfx_volume: 1.0,
            muted: false,
            wager_step: 100,
            assets: AssetPaths::default(),
        }
    }
}

impl Settings {
    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "battleshot_settings";

    /// Volume actually applied to audio elements
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.sfx_volume.clamp(0.0, 1.0)
        }
    }

    /// Parse settings JSON, falling back to defaults on bad input
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring unreadable settings: {}", e);
                Self::default()
            }
        }
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                log::info!("Loaded settings from LocalStorage");
                return Self::from_json(&json);
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
