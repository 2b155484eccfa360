//! Fixed timestep simulation tick
//!
//! Advances every trooper one step in collection order: airborne troopers
//! fall and land, landed troopers walk toward screen center and resolve
//! base blocking and stacking. Collection order is the observable
//! iteration order, so runs are deterministic.

use crate::consts::POS_EPSILON;

use super::collision::overlap_1d;
use super::state::{GameEvent, GamePhase, GameState};

/// Advance the simulation by one tick
pub fn tick(state: &mut GameState) {
    state.time_ticks += 1;
    for i in 0..state.troopers.len() {
        if !state.troopers[i].landed {
            fall(state, i);
        } else {
            walk(state, i);
        }
    }
}

/// Descend under canopy; clamp to ground height on touchdown
fn fall(state: &mut GameState, i: usize) {
    let g = state.geometry;
    let p = &mut state.troopers[i];
    p.pos.y += g.fall_speed;
    if p.pos.y >= g.landing_y() {
        p.pos.y = g.landing_y();
        p.landed = true;
        p.walking = true;
        p.parachute = false;
    }
}

/// One horizontal step with base and stacking resolution
///
/// Landed troopers converge on screen center from both sides. A trooper
/// whose candidate footprint overlaps the base is blocked at base height;
/// above base height it keeps going, and crossing the critical zone loses
/// the game. A trooper meeting a stopped trooper at its own height climbs
/// onto it if the shoulders are free, and is blocked otherwise.
fn walk(state: &mut GameState, i: usize) {
    if state.phase == GamePhase::GameOver {
        return;
    }

    let g = state.geometry;
    let (px, py) = {
        let p = &state.troopers[i];
        (p.pos.x, p.pos.y)
    };
    let half_w = g.trooper_width / 2.0;

    let mut vx = g.walk_speed;
    if px > g.screen_width / 2.0 {
        vx = -vx;
    }
    let new_x = px + vx;

    if overlap_1d(new_x - half_w, g.trooper_width, g.base_x(), g.base_width) {
        if py >= g.base_top() {
            state.troopers[i].walking = false;
            return;
        }
        // Above base height: walking across the critical zone loses the
        // game. The current footprint decides, not the candidate.
        if overlap_1d(px - half_w, g.trooper_width, g.critical_x(), g.critical_width()) {
            state.phase = GamePhase::GameOver;
            state.events.push(GameEvent::GameOver);
        }
    }

    // First stopped trooper at the same height whose footprint the
    // candidate step overlaps wins; later candidates are not considered.
    for q in 0..state.troopers.len() {
        let cand = &state.troopers[q];
        let colocated = (cand.pos.x - px).abs() < POS_EPSILON && (cand.pos.y - py).abs() < POS_EPSILON;
        if colocated || !cand.landed || cand.walking {
            continue;
        }
        if (py - cand.pos.y).abs() >= POS_EPSILON
            || !overlap_1d(new_x - half_w, g.trooper_width, cand.pos.x - half_w, g.trooper_width)
        {
            continue;
        }

        let slot_free = cand.above.is_none();
        let (qx, qy) = (cand.pos.x, cand.pos.y);
        if slot_free {
            // Climb onto the shoulders; a previous perch loses its occupant
            // but keeps its height.
            state.troopers[i].pos.x = qx;
            state.troopers[i].pos.y = qy - g.trooper_height;
            state.troopers[q].above = Some(i);
            if let Some(b) = state.troopers[i].below {
                state.troopers[b].above = None;
            }
            state.troopers[i].below = Some(q);
        } else {
            state.troopers[i].walking = false;
        }
        return;
    }

    state.troopers[i].pos.x = new_x;
}
