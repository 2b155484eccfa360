//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Stable iteration order (collection order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::overlap_1d;
pub use state::{GameEvent, GamePhase, GameState, Geometry, Paratrooper};
pub use tick::tick;
