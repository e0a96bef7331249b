//! Rocket sprite layer

use glam::DVec2;

use super::Surface;
use crate::consts::ROCKET_SPRITE_SIZE;
use crate::sim::Frame;

/// Draws the rocket onto the full-window overlay surface.
///
/// Holding a renderer means the sprite has finished loading.
pub struct RocketRenderer<S: Surface> {
    surface: S,
    sprite: S::Sprite,
}

impl<S: Surface> RocketRenderer<S> {
    pub fn new(surface: S, sprite: S::Sprite) -> Self {
        Self { surface, sprite }
    }

    /// Redraw the sprite centred on `center`
    pub fn draw(&mut self, center: DVec2) {
        let half = ROCKET_SPRITE_SIZE / 2.0;
        self.surface.clear();
        self.surface.draw_sprite(
            &self.sprite,
            center.x - half,
            center.y - half,
            ROCKET_SPRITE_SIZE,
            ROCKET_SPRITE_SIZE,
        );
    }

    pub fn clear(&mut self) {
        self.surface.clear();
    }

    /// Draw whatever a simulation frame calls for
    pub fn present(&mut self, frame: Frame) {
        match frame {
            Frame::Rocket(center) => self.draw(center),
            Frame::Landed(_) => self.clear(),
            Frame::Idle => {}
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
