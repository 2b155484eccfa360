//! Para Drop entry point
//!
//! Headless demo driver: seeds the simulation, schedules drops on a fixed
//! cadence, and runs the tick loop until the base falls. A graphical
//! client would render between ticks and map drained events to sounds and
//! dialogs; here they go to the log, and the final state is dumped as JSON.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use para_drop::consts::{SCREEN_WIDTH, TROOPER_WIDTH};
use para_drop::sim::{GameEvent, GameState, tick};

/// Ticks between scheduled drops
const DROP_INTERVAL_TICKS: u64 = 90;
/// Hard stop for the demo run
const MAX_DEMO_TICKS: u64 = 50_000;

fn main() {
    env_logger::init();

    let seed = std::env::var("PARA_DROP_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xC0FFEE);
    log::info!("Para Drop (headless) starting with seed {seed}");

    let mut rng = Pcg32::seed_from_u64(seed);
    let mut state = GameState::new(seed);

    while state.time_ticks < MAX_DEMO_TICKS {
        if state.time_ticks % DROP_INTERVAL_TICKS == 0 {
            let x = rng.random_range(TROOPER_WIDTH..SCREEN_WIDTH - TROOPER_WIDTH);
            state.spawn(x, 0.0);
            log::debug!("drop #{} at x={x:.1}", state.troopers.len());
        }

        tick(&mut state);

        for event in state.take_events() {
            match event {
                GameEvent::GameOver => {
                    log::info!("base breached at tick {}", state.time_ticks);
                }
            }
        }
        if state.game_over() {
            break;
        }
    }

    let landed = state.troopers.iter().filter(|p| p.landed).count();
    log::info!(
        "run finished after {} ticks: {} dropped, {} landed, game over: {}",
        state.time_ticks,
        state.troopers.len(),
        landed,
        state.game_over(),
    );

    match serde_json::to_string_pretty(&state) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("failed to encode final state: {e}"),
    }
}
