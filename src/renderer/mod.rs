//! Canvas 2D rendering module
//!
//! Two layers, each with a single writer:
//! - the board canvas, drawn by [`board::render_board`]
//! - the full-window rocket canvas, drawn by [`rocket::RocketRenderer`]
//!
//! Drawing goes through the [`Surface`] trait so layouts can be checked
//! without a browser.

pub mod board;
#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod rocket;

pub use board::render_board;
#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use rocket::RocketRenderer;

/// Minimal 2D drawing target
pub trait Surface {
    /// Image type accepted by [`Surface::draw_sprite`]
    type Sprite;

    /// Surface size in pixels
    fn size(&self) -> (f64, f64);

    /// Wipe the whole surface
    fn clear(&mut self);

    /// Outline a rectangle
    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64, style: &str, line_width: f64);

    /// Draw an image scaled into the given rectangle
    fn draw_sprite(&mut self, sprite: &Self::Sprite, x: f64, y: f64, w: f64, h: f64);
}
