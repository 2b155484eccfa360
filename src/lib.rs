//! Para Drop - a side-scrolling paratrooper base-defense sim
//!
//! Core modules:
//! - `sim`: Deterministic simulation (trooper lifecycle, walking/stacking)
//!
//! Rendering, input, and audio live in external clients: a renderer draws
//! from the read-only trooper state after each tick, and the driver maps
//! drained `GameEvent`s to sound playback and dialogs.

pub mod sim;

pub use sim::{GameEvent, GamePhase, GameState, Geometry, Paratrooper};

/// Game configuration constants
pub mod consts {
    /// Logical screen dimensions (pixels, y grows downward)
    pub const SCREEN_WIDTH: f32 = 640.0;
    pub const SCREEN_HEIGHT: f32 = 480.0;

    /// Ground line; landed troopers rest with their feet on it
    pub const GROUND_Y: f32 = 480.0;

    /// Main base footprint - centered horizontally, sitting on the bottom edge
    pub const BASE_WIDTH: f32 = 90.0;
    pub const BASE_HEIGHT: f32 = 45.0;

    /// Trooper body sprite
    pub const TROOPER_WIDTH: f32 = 10.0;
    pub const TROOPER_HEIGHT: f32 = 20.0;
    /// Canopy radius while descending (renderer-facing)
    pub const PARACHUTE_RADIUS: f32 = 12.0;

    /// Movement per tick (pixels)
    pub const TROOPER_FALL_SPEED: f32 = 1.5;
    pub const TROOPER_WALK_SPEED: f32 = 0.5;

    /// Tolerance for same-position and same-height comparisons
    pub const POS_EPSILON: f32 = 1e-6;
}
