//! Cubic Bézier curve in pixel space
//!
//! P(t) = (1−t)³·S + 3(1−t)²t·C1 + 3(1−t)t²·C2 + t³·E

use glam::DVec2;

/// A cubic Bézier with two control points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub start: DVec2,
    pub control1: DVec2,
    pub control2: DVec2,
    pub end: DVec2,
}

impl CubicBezier {
    pub fn new(start: DVec2, control1: DVec2, control2: DVec2, end: DVec2) -> Self {
        Self {
            start,
            control1,
            control2,
            end,
        }
    }

    /// Evaluate the curve at `t`, clamped to [0, 1]
    pub fn point_at(&self, t: f64) -> DVec2 {
        let t = t.clamp(0.0, 1.0);
        let u = 1.0 - t;
        self.start * (u * u * u)
            + self.control1 * (3.0 * u * u * t)
            + self.control2 * (3.0 * u * t * t)
            + self.end * (t * t * t)
    }
}
