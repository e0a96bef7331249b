//! Rocket flight planning
//!
//! A flight is a cubic Bézier from an off-screen corner to the centre of the
//! target cell, sampled by wall-clock time so speed does not depend on the
//! display refresh rate.

use glam::DVec2;
use rand::Rng;

use super::bezier::CubicBezier;
use super::grid::Cell;
use crate::consts::{FLIGHT_DURATION_MS, LAUNCH_CORNER_OFFSET};

/// Size of the full-window rocket layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The four launch points, each just outside a viewport corner
    pub fn launch_corners(&self) -> [DVec2; 4] {
        let o = LAUNCH_CORNER_OFFSET;
        [
            DVec2::new(-o, -o),
            DVec2::new(self.width + o, -o),
            DVec2::new(self.width + o, self.height + o),
            DVec2::new(-o, self.height + o),
        ]
    }

    /// Whether a point lies inside the viewport rectangle
    pub fn contains(&self, p: DVec2) -> bool {
        p.x >= 0.0 && p.y >= 0.0 && p.x <= self.width && p.y <= self.height
    }
}

/// Where the board sits on screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardPlacement {
    /// Board top-left in viewport coordinates
    pub origin: DVec2,
    /// Edge length of one cell (px)
    pub cell_size: f64,
}

impl BoardPlacement {
    pub fn new(origin: DVec2, cell_size: f64) -> Self {
        Self { origin, cell_size }
    }

    /// Cell centre in viewport coordinates
    pub fn cell_center(&self, cell: Cell) -> DVec2 {
        self.origin + cell.center(self.cell_size)
    }

    /// Cell top-left in viewport coordinates
    pub fn cell_top_left(&self, cell: Cell) -> DVec2 {
        self.origin + cell.top_left(self.cell_size)
    }
}

/// A single rocket flight, created at launch and dropped on landing
#[derive(Debug, Clone, PartialEq)]
pub struct FlightPlan {
    pub target: Cell,
    pub path: CubicBezier,
    /// Timestamp of launch (ms)
    pub started_at: f64,
    /// Flight length (ms)
    pub duration: f64,
}

impl FlightPlan {
    /// Plan a flight toward `target` starting at `now`
    pub fn plan<R: Rng + ?Sized>(
        target: Cell,
        board: &BoardPlacement,
        viewport: &Viewport,
        now: f64,
        rng: &mut R,
    ) -> Self {
        let corners = viewport.launch_corners();
        let start = corners[rng.random_range(0..corners.len())];
        let control1 = DVec2::new(
            rng.random::<f64>() * viewport.width,
            rng.random::<f64>() * viewport.height,
        );
        let control2 = DVec2::new(
            rng.random::<f64>() * viewport.width,
            rng.random::<f64>() * viewport.height,
        );
        let end = board.cell_center(target);

        log::debug!(
            "Flight to {:?}: start {:?}, controls {:?} {:?}, end {:?}",
            target,
            start,
            control1,
            control2,
            end
        );

        Self {
            target,
            path: CubicBezier::new(start, control1, control2, end),
            started_at: now,
            duration: FLIGHT_DURATION_MS,
        }
    }

    /// Normalized time in [0, 1]
    pub fn progress(&self, now: f64) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((now - self.started_at) / self.duration).clamp(0.0, 1.0)
    }

    /// Rocket centre at `now`
    pub fn position_at(&self, now: f64) -> DVec2 {
        self.path.point_at(self.progress(now))
    }

    pub fn is_complete(&self, now: f64) -> bool {
        self.progress(now) >= 1.0
    }
}
