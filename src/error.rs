//! Error types shared by the simulation and the browser layer.

use thiserror::Error;

use crate::sim::Cell;

/// Error returned when a grid cannot hold the requested ships.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    /// More ships were requested than the grid has cells.
    #[error("cannot place {ship_count} ships on a grid with {capacity} cells")]
    TooManyShips { ship_count: usize, capacity: usize },
    /// A seeded ship lies outside the grid.
    #[error("ship at {cell:?} is outside a {grid_size}x{grid_size} grid")]
    OutOfBounds { cell: Cell, grid_size: u32 },
    /// Two seeded ships share a cell.
    #[error("more than one ship at {0:?}")]
    DuplicateShip(Cell),
}

/// Why a sound cue did not play.
///
/// Playback is best effort: callers log this and carry on.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AudioPlaybackError {
    /// No audio element exists for the cue (or audio is unsupported).
    #[error("audio is unavailable")]
    Unavailable,
    /// The browser refused or aborted playback, e.g. autoplay was denied.
    #[error("playback rejected: {0}")]
    Rejected(String),
}
