//! Browser platform layer
//!
//! Handles everything the simulation must not touch:
//! - DOM lookups and screen switching
//! - Frame and timer callbacks
//! - Overlay elements with drop-driven removal

pub mod dom;
pub mod overlay;
pub mod timer;

pub use overlay::DomOverlay;
