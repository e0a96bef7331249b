//! Session state and core simulation types
//!
//! A session is one playthrough: a freshly placed ship, one shot, one outcome.
//! Starting over means building a new `Session`, never resetting an old one.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::flight::{BoardPlacement, FlightPlan};
use super::grid::{Cell, GridModel};
use super::overlay::{Overlay, OverlayKind};
use crate::consts::{GRID_SIZE, SHIP_COUNT};
use crate::error::GridError;

/// Result of a shot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Hit,
    Miss,
}

/// Named sound cues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    /// Shot landed on the ship
    Hit,
    /// Shot landed in open water
    Miss,
    /// Rocket launched
    Rocket,
}

impl SoundCue {
    pub const ALL: [SoundCue; 3] = [SoundCue::Hit, SoundCue::Miss, SoundCue::Rocket];

    pub fn as_str(&self) -> &'static str {
        match self {
            SoundCue::Hit => "hit",
            SoundCue::Miss => "miss",
            SoundCue::Rocket => "rocket",
        }
    }
}

/// Where the session is in its single-shot lifecycle
#[derive(Debug, Clone, PartialEq)]
pub enum SessionPhase {
    /// Board drawn, waiting for the click
    Armed,
    /// Shot fired; launch sound and sprite are being readied
    Launching { target: Cell },
    /// Rocket in the air
    Animating(FlightPlan),
    /// Shot landed
    Resolved(Outcome),
}

/// Side effects for the presentation layer, in the order they occurred
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    PlaySound(SoundCue),
    ShowMessage(&'static str),
    /// Rocket layer should be wiped (flight over)
    ClearRocket,
    SpawnOverlay(Overlay),
}

/// Complete state of one session
#[derive(Debug, Clone)]
pub struct Session {
    /// Seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    /// Hidden ships
    pub grid: GridModel,
    /// Board position on screen, refreshed on click and on launch
    pub board: BoardPlacement,
    /// Current phase
    pub phase: SessionPhase,
    /// Latest message shown to the player
    pub message: Option<&'static str>,
    shot_fired: bool,
    events: Vec<GameEvent>,
    next_overlay_id: u32,
}

impl Session {
    /// Start a session with randomly placed ships
    pub fn new(seed: u64, board: BoardPlacement) -> Result<Self, GridError> {
        let mut rng = Pcg32::seed_from_u64(seed);
        let grid = GridModel::initialize(GRID_SIZE, SHIP_COUNT, &mut rng)?;
        log::info!("Session started with seed: {}", seed);
        Ok(Self::from_parts(seed, rng, grid, board))
    }

    /// Start a session with known ship positions
    pub fn with_grid(seed: u64, grid: GridModel, board: BoardPlacement) -> Self {
        Self::from_parts(seed, Pcg32::seed_from_u64(seed), grid, board)
    }

    fn from_parts(seed: u64, rng: Pcg32, grid: GridModel, board: BoardPlacement) -> Self {
        Self {
            seed,
            rng,
            grid,
            board,
            phase: SessionPhase::Armed,
            message: None,
            shot_fired: false,
            events: Vec::new(),
            next_overlay_id: 1,
        }
    }

    pub fn shot_fired(&self) -> bool {
        self.shot_fired
    }

    pub(crate) fn mark_shot_fired(&mut self) {
        self.shot_fired = true;
    }

    pub(crate) fn rng(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }

    /// Current flight, if the rocket is in the air
    pub fn flight(&self) -> Option<&FlightPlan> {
        match &self.phase {
            SessionPhase::Animating(plan) => Some(plan),
            _ => None,
        }
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            SessionPhase::Resolved(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn spawn_overlay(&mut self, kind: OverlayKind, cell: Cell, now: f64) -> Overlay {
        let overlay = Overlay::new(self.next_overlay_id, kind, cell, now);
        self.next_overlay_id += 1;
        self.push_event(GameEvent::SpawnOverlay(overlay));
        overlay
    }
}
