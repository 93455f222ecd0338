//! Headless demo driver
//!
//! Runs the simulation at the fixed tick rate with a scripted input feed and
//! prints the final snapshot. Useful for smoke-testing balance changes and
//! for profiling the sim without a renderer attached.

use glam::Vec2;

use std::path::Path;

use showdown::Settings;
use showdown::consts::*;
use showdown::sim::{GameMode, Phase, SimState, StageId, TickInput, project, tick};

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0xD00D);
    let settings = Settings::load_from(Path::new("showdown_settings.json"));
    let mut state = SimState::new(seed);
    state.set_difficulty(settings.difficulty);
    log::info!("seed {seed}, difficulty {}", settings.difficulty.as_str());

    state.select_mode(GameMode::Endless);
    state.confirm_roster();
    state.select_stage(StageId::Backlot);
    state.start_match(true);

    // Ninety seconds of scripted play: hold the trigger, weave vertically,
    // aim at the right edge.
    let mut input = TickInput {
        fire: true,
        aim: Vec2::new(VIEW_WIDTH, VIEW_HEIGHT * 0.6),
        ..Default::default()
    };
    for frame in 0..(TICK_RATE as u64 * 90) {
        input.move_y = (frame as f32 * 0.02).sin();
        let out = tick(&mut state, &input);
        if let Some(snapshot) = out.snapshot {
            if frame % (TICK_RATE as u64 * 5) == 0 {
                log::info!(
                    "wave {} score {} hp {:.0}/{:.0}",
                    snapshot.wave,
                    snapshot.score,
                    snapshot.hp,
                    snapshot.max_hp
                );
            }
            if snapshot.phase == Phase::GameOver {
                log::info!("run ended at frame {frame}");
                break;
            }
        }
    }

    match serde_json::to_string_pretty(&project(&state)) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("snapshot serialization failed: {err}"),
    }
}
