//! Game state and core simulation types
//!
//! All state that must be persisted for a session snapshot lives here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Troopers fall, land, and walk
    #[default]
    Playing,
    /// A trooper reached the critical zone; walking is frozen
    GameOver,
}

/// Signals for the external driver (sound playback, dialogs)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The base is lost - play the game-over cue and raise the dialog
    GameOver,
}

/// Screen and base dimensions for one session
///
/// Immutable once a [`GameState`] is constructed with it. Defaults come
/// from [`crate::consts`]; tests supply their own dimensions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Geometry {
    pub screen_width: f32,
    pub screen_height: f32,
    /// Troopers land with their feet on this line
    pub ground_y: f32,
    pub base_width: f32,
    pub base_height: f32,
    pub trooper_width: f32,
    pub trooper_height: f32,
    pub fall_speed: f32,
    pub walk_speed: f32,
    /// Canopy radius, read by the renderer only
    pub parachute_radius: f32,
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            ground_y: GROUND_Y,
            base_width: BASE_WIDTH,
            base_height: BASE_HEIGHT,
            trooper_width: TROOPER_WIDTH,
            trooper_height: TROOPER_HEIGHT,
            fall_speed: TROOPER_FALL_SPEED,
            walk_speed: TROOPER_WALK_SPEED,
            parachute_radius: PARACHUTE_RADIUS,
        }
    }
}

impl Geometry {
    /// Left edge of the base (centered horizontally)
    #[inline]
    pub fn base_x(&self) -> f32 {
        (self.screen_width - self.base_width) / 2.0
    }

    /// Top of the base; troopers at or below this height are blocked by it
    #[inline]
    pub fn base_top(&self) -> f32 {
        self.screen_height - self.base_height
    }

    /// Left edge of the critical zone (one third of the base, centered)
    #[inline]
    pub fn critical_x(&self) -> f32 {
        (self.screen_width - self.base_width / 3.0) / 2.0
    }

    /// Width of the critical zone
    #[inline]
    pub fn critical_width(&self) -> f32 {
        self.base_width / 3.0
    }

    /// Resting y for a trooper standing on the ground
    #[inline]
    pub fn landing_y(&self) -> f32 {
        self.ground_y - self.trooper_height
    }
}

/// A paratrooper entity
///
/// `pos.x` is the horizontal center of the body, `pos.y` its top edge.
/// Stack links are indices into the owning [`GameState::troopers`] vector;
/// troopers are never removed during a session, so the indices stay valid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paratrooper {
    pub pos: Vec2,
    /// Descending under canopy
    pub parachute: bool,
    /// Reached ground (or a perch) height
    pub landed: bool,
    /// Actively moving horizontally; cleared when blocked
    pub walking: bool,
    /// Trooper standing on this one's shoulders, if any
    pub above: Option<usize>,
    /// Trooper this one stands on, if any
    pub below: Option<usize>,
}

impl Paratrooper {
    /// A fresh drop: under canopy, not yet landed
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            parachute: true,
            landed: false,
            walking: false,
            above: None,
            below: None,
        }
    }
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed, recorded for reproducibility of the drop schedule
    pub seed: u64,
    /// Session dimensions, fixed at construction
    pub geometry: Geometry,
    /// All troopers, in spawn order; never removed during a session
    pub troopers: Vec<Paratrooper>,
    /// Playing until a trooper reaches the critical zone
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Pending signals for the driver; drained via [`GameState::take_events`]
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new session with the default geometry
    pub fn new(seed: u64) -> Self {
        Self::with_geometry(seed, Geometry::default())
    }

    /// Create a new session with explicit dimensions
    pub fn with_geometry(seed: u64, geometry: Geometry) -> Self {
        Self {
            seed,
            geometry,
            troopers: Vec::new(),
            phase: GamePhase::Playing,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    /// Drop a new paratrooper at the given coordinates
    pub fn spawn(&mut self, x: f32, y: f32) {
        self.troopers.push(Paratrooper::new(x, y));
    }

    /// Whether the game-over condition has been raised
    #[inline]
    pub fn game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Drain pending events for the driver
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_defaults() {
        let mut state = GameState::new(1);
        state.spawn(100.0, 0.0);

        let p = &state.troopers[0];
        assert_eq!(p.pos, Vec2::new(100.0, 0.0));
        assert!(p.parachute);
        assert!(!p.landed);
        assert!(!p.walking);
        assert_eq!(p.above, None);
        assert_eq!(p.below, None);
    }

    #[test]
    fn test_geometry_spans() {
        let g = Geometry {
            screen_width: 640.0,
            base_width: 90.0,
            ..Geometry::default()
        };
        assert!((g.base_x() - 275.0).abs() < 1e-4);
        assert!((g.critical_width() - 30.0).abs() < 1e-4);
        assert!((g.critical_x() - 305.0).abs() < 1e-4);
        // Critical zone sits centered inside the base footprint
        assert!(g.critical_x() > g.base_x());
        assert!(g.critical_x() + g.critical_width() < g.base_x() + g.base_width);
    }

    #[test]
    fn test_take_events_drains() {
        let mut state = GameState::new(1);
        state.events.push(GameEvent::GameOver);
        assert_eq!(state.take_events(), vec![GameEvent::GameOver]);
        assert!(state.take_events().is_empty());
    }
}
