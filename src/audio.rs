//! Sound cue playback
//!
//! Cues are preloaded audio files. Playback is best effort: a failure (most
//! often the browser refusing autoplay) is logged and the game carries on.

use crate::error::AudioPlaybackError;
use crate::sim::SoundCue;

#[cfg(target_arch = "wasm32")]
pub use web::AudioManager;

/// Log a failed playback; never propagates
pub fn settle(cue: SoundCue, result: Result<(), AudioPlaybackError>) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            log::error!("Error playing {} sound: {}", cue.as_str(), err);
            false
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod web {
    use std::collections::HashMap;
    use std::future::Future;

    use wasm_bindgen::JsValue;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::HtmlAudioElement;

    use super::settle;
    use crate::error::AudioPlaybackError;
    use crate::settings::Settings;
    use crate::sim::SoundCue;

    fn rejected(err: JsValue) -> AudioPlaybackError {
        AudioPlaybackError::Rejected(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
    }

    /// Audio manager for the game
    pub struct AudioManager {
        cues: HashMap<SoundCue, HtmlAudioElement>,
        volume: f32,
    }

    impl AudioManager {
        /// Create and preload an audio element per cue
        pub fn new(settings: &Settings) -> Self {
            let volume = settings.effective_volume();
            let mut cues = HashMap::new();
            for cue in SoundCue::ALL {
                match HtmlAudioElement::new_with_src(settings.assets.sound(cue)) {
                    Ok(el) => {
                        el.set_preload("auto");
                        el.set_volume(volume as f64);
                        cues.insert(cue, el);
                    }
                    Err(e) => log::warn!("Failed to create {} audio: {:?}", cue.as_str(), e),
                }
            }
            Self { cues, volume }
        }

        /// Start a cue; the future settles when playback starts or is refused
        pub fn play(
            &self,
            cue: SoundCue,
        ) -> impl Future<Output = Result<(), AudioPlaybackError>> + 'static {
            let muted = self.volume <= 0.0;
            let el = self.cues.get(&cue).cloned();
            async move {
                if muted {
                    return Ok(());
                }
                let el = el.ok_or(AudioPlaybackError::Unavailable)?;
                let promise = el.play().map_err(rejected)?;
                JsFuture::from(promise).await.map_err(rejected)?;
                Ok(())
            }
        }

        /// Fire and forget
        pub fn play_detached(&self, cue: SoundCue) {
            let playback = self.play(cue);
            wasm_bindgen_futures::spawn_local(async move {
                settle(cue, playback.await);
            });
        }
    }
}
