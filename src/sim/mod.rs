//! Deterministic session logic
//!
//! All gameplay lives here. This module must stay free of browser APIs:
//! - Timestamps are passed in (ms), never read
//! - Randomness comes from the session's seeded RNG
//! - Side effects leave as `GameEvent`s for the platform layer

pub mod bezier;
pub mod flight;
pub mod grid;
pub mod messages;
pub mod overlay;
pub mod state;
pub mod tick;

pub use bezier::CubicBezier;
pub use flight::{BoardPlacement, FlightPlan, Viewport};
pub use grid::{Cell, GridModel, map_pointer_to_cell};
pub use messages::{HIT_MESSAGES, MISS_MESSAGES};
pub use overlay::{Overlay, OverlayKind, OverlayPhase, OverlayTracker, OverlayView};
pub use state::{GameEvent, Outcome, Session, SessionPhase, SoundCue};
pub use tick::{Frame, begin_flight, fire, resolve, tick};
