//! Battleshot - a one-shot battleship mini-game for the browser
//!
//! Core modules:
//! - `sim`: Deterministic session logic (grid, flight path, resolution, overlays)
//! - `renderer`: Canvas 2D drawing for the board and the rocket sprite
//! - `platform`: Browser glue (DOM lookups, timers, overlay elements)
//! - `audio`: Sound cue playback
//! - `settings`: Player preferences and asset paths
//! - `wager`: Betting screen stepper

pub mod audio;
pub mod error;
#[cfg(target_arch = "wasm32")]
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod wager;

pub use error::{AudioPlaybackError, GridError};
pub use settings::Settings;
pub use wager::Wager;

/// Game configuration constants
pub mod consts {
    /// Cells per side of the board
    pub const GRID_SIZE: u32 = 2;
    /// Ships hidden per session
    pub const SHIP_COUNT: usize = 1;

    /// Board canvas edge length when the page does not size it
    pub const BOARD_PIXELS: f64 = 400.0;
    /// Board grid stroke
    pub const GRID_STROKE_STYLE: &str = "#000080";
    pub const GRID_LINE_WIDTH: f64 = 4.0;

    /// Rocket flight duration (ms, wall clock)
    pub const FLIGHT_DURATION_MS: f64 = 2000.0;
    /// How far beyond the viewport edge a rocket starts (px)
    pub const LAUNCH_CORNER_OFFSET: f64 = 50.0;
    /// Rocket sprite edge length (50px art at 2x)
    pub const ROCKET_SPRITE_SIZE: f64 = 50.0 * 2.0;

    /// Explosion overlay edge length (px)
    pub const EXPLOSION_SIZE: f64 = 100.0;
    /// Explosion stays fully shown this long before fading (ms)
    pub const EXPLOSION_SHOWN_MS: f64 = 2000.0;
    /// Explosion fade duration before removal (ms)
    pub const EXPLOSION_FADE_MS: f64 = 2000.0;
    /// Miss marker lifetime (ms)
    pub const MISS_MARKER_MS: f64 = 3000.0;
}
