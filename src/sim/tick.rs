//! Fixed timestep orchestrator
//!
//! Advances every subsystem once per tick in a fixed order: input sampling,
//! player, weapons, spawning, motion/AI, collisions, pickups, cosmetics,
//! prune pass, scheduled events. Sim time freezes while paused; the backdrop
//! keeps drifting and snapshots keep publishing on the host-frame cadence.

use glam::Vec2;

use crate::consts::*;
use crate::sim::events::{self, SideEffect};
use crate::sim::snapshot::{self, UiSnapshot};
use crate::sim::state::{Phase, SimState};
use crate::sim::{combat, spawn};

/// Input sample for one tick. Movement/aim are level states; `pause`,
/// `swap` and `blazin` are edge-triggered and cleared by the host after
/// they are consumed.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Raw movement axes, each in -1..=1 (normalized in the tick)
    pub move_x: f32,
    pub move_y: f32,
    /// Pointer target in playfield coordinates
    pub aim: Vec2,
    /// Held trigger
    pub fire: bool,
    /// Toggle pause
    pub pause: bool,
    /// Tag in the next fighter
    pub swap: bool,
    /// Activate the special
    pub blazin: bool,
}

/// What one tick hands back to the host
#[derive(Debug, Clone, Default)]
pub struct TickOutput {
    /// Fire-and-forget requests for collaborators (sound, unlock, effects)
    pub effects: Vec<SideEffect>,
    /// Published every [`SNAPSHOT_INTERVAL`]th host frame
    pub snapshot: Option<UiSnapshot>,
}

/// Advance the simulation by one fixed step
pub fn tick(state: &mut SimState, input: &TickInput) -> TickOutput {
    state.frames += 1;
    state.backdrop.advance();

    if input.pause {
        match state.phase {
            Phase::Playing => state.pause(),
            Phase::Paused => state.resume(),
            _ => {}
        }
    }

    if state.phase == Phase::Playing {
        state.tick += 1;
        if input.swap {
            state.swap_fighter();
        }
        if input.blazin {
            state.activate_blazin();
        }

        combat::advance_player(state, input);
        combat::fire_weapons(state, input);
        spawn::advance_spawning(state);
        combat::advance_bullets(state);
        combat::advance_enemies(state);
        combat::resolve_bullet_hits(state);
        combat::collect_powerups(state);
        combat::advance_cosmetics(state);
        prune(state);
        events::drain_due(state);
    }

    let snapshot = (state.frames % SNAPSHOT_INTERVAL == 0).then(|| snapshot::project(state));
    TickOutput {
        effects: std::mem::take(&mut state.effects),
        snapshot,
    }
}

/// End-of-tick removal pass. Nothing leaves a collection before this runs,
/// so every reference taken during the tick stayed valid.
fn prune(state: &mut SimState) {
    state.enemies.retain(|e| e.hp > 0.0);
    state.bullets.retain(|b| b.life > 0);
    state.powerups.retain(|p| p.life > 0);
    state.particles.retain(|p| p.life > 0);
    state.texts.retain(|t| t.life > 0);
}
