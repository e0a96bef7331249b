//! Transient hit/miss overlays
//!
//! The simulation only describes an overlay (kind, cell, creation time). The
//! presentation layer attaches a view to it through [`OverlayTracker`], which
//! drops the view once the overlay's lifetime ends. Dropping the view is what
//! removes it from the page.

use glam::DVec2;

use super::flight::BoardPlacement;
use super::grid::Cell;
use crate::consts::{EXPLOSION_FADE_MS, EXPLOSION_SHOWN_MS, EXPLOSION_SIZE, MISS_MARKER_MS};

/// Overlay types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    /// Shown on a hit; fades before removal
    Explosion,
    /// Shown on a miss; removed in one step
    MissMarker,
}

/// Lifecycle of an overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayPhase {
    Shown,
    Fading,
    Destroyed,
}

/// An overlay placed over a board cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overlay {
    pub id: u32,
    pub kind: OverlayKind,
    pub cell: Cell,
    /// Timestamp of creation (ms)
    pub created_at: f64,
}

impl Overlay {
    pub fn new(id: u32, kind: OverlayKind, cell: Cell, created_at: f64) -> Self {
        Self {
            id,
            kind,
            cell,
            created_at,
        }
    }

    /// When the overlay starts fading, if it ever does
    pub fn fade_at(&self) -> Option<f64> {
        match self.kind {
            OverlayKind::Explosion => Some(self.created_at + EXPLOSION_SHOWN_MS),
            OverlayKind::MissMarker => None,
        }
    }

    /// When the overlay is removed
    pub fn destroy_at(&self) -> f64 {
        match self.kind {
            OverlayKind::Explosion => self.created_at + (EXPLOSION_SHOWN_MS + EXPLOSION_FADE_MS),
            OverlayKind::MissMarker => self.created_at + MISS_MARKER_MS,
        }
    }

    pub fn phase_at(&self, now: f64) -> OverlayPhase {
        if now >= self.destroy_at() {
            OverlayPhase::Destroyed
        } else if self.fade_at().is_some_and(|fade| now >= fade) {
            OverlayPhase::Fading
        } else {
            OverlayPhase::Shown
        }
    }

    /// Screen rectangle (top-left, edge length) in viewport coordinates.
    ///
    /// Explosions are a fixed square centred on the cell; miss markers cover
    /// the whole cell.
    pub fn screen_rect(&self, board: &BoardPlacement) -> (DVec2, f64) {
        match self.kind {
            OverlayKind::Explosion => (
                board.cell_center(self.cell) - DVec2::splat(EXPLOSION_SIZE / 2.0),
                EXPLOSION_SIZE,
            ),
            OverlayKind::MissMarker => (board.cell_top_left(self.cell), board.cell_size),
        }
    }
}

/// Something that displays an overlay.
///
/// Implementors release their resources on drop.
pub trait OverlayView {
    /// Called once with `Shown` on insert, then on each later phase change
    /// short of `Destroyed`.
    fn enter_phase(&mut self, phase: OverlayPhase);
}

struct Tracked<V> {
    overlay: Overlay,
    phase: OverlayPhase,
    view: V,
}

/// Owns live overlay views and disposes of them on schedule
pub struct OverlayTracker<V> {
    live: Vec<Tracked<V>>,
}

impl<V> Default for OverlayTracker<V> {
    fn default() -> Self {
        Self { live: Vec::new() }
    }
}

impl<V: OverlayView> OverlayTracker<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking an overlay; its view enters `Shown` immediately
    pub fn insert(&mut self, overlay: Overlay, mut view: V) {
        view.enter_phase(OverlayPhase::Shown);
        self.live.push(Tracked {
            overlay,
            phase: OverlayPhase::Shown,
            view,
        });
    }

    /// Move every overlay to its phase at `now`; destroyed views are dropped.
    ///
    /// Returns the number of overlays removed.
    pub fn advance(&mut self, now: f64) -> usize {
        let before = self.live.len();
        for tracked in &mut self.live {
            let phase = tracked.overlay.phase_at(now);
            if phase != tracked.phase {
                tracked.phase = phase;
                if phase != OverlayPhase::Destroyed {
                    tracked.view.enter_phase(phase);
                }
            }
        }
        self.live.retain(|t| t.phase != OverlayPhase::Destroyed);
        before - self.live.len()
    }

    /// Earliest pending phase change after `now`
    pub fn next_deadline(&self, now: f64) -> Option<f64> {
        self.live
            .iter()
            .flat_map(|t| [t.overlay.fade_at(), Some(t.overlay.destroy_at())])
            .flatten()
            .filter(|deadline| *deadline > now)
            .min_by(|a, b| a.total_cmp(b))
    }

    pub fn phase_of(&self, id: u32) -> Option<OverlayPhase> {
        self.live
            .iter()
            .find(|t| t.overlay.id == id)
            .map(|t| t.phase)
    }

    /// Drop every view at once (new session)
    pub fn clear(&mut self) {
        self.live.clear();
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}
