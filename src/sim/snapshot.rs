//! Read-only UI projection
//!
//! Published at a throttled rate so the presentation layer never touches
//! live simulation state. Everything here is derived; mutating a snapshot
//! affects nothing.

use serde::Serialize;

use crate::roster;
use crate::sim::entity::PowerupKind;
use crate::sim::state::{GameMode, Phase, SimState, StageId};

/// Boss or rival readout for the big top-of-screen health bar
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpponentStatus {
    pub name: &'static str,
    pub hp: f32,
    pub max_hp: f32,
}

/// Derived view of the simulation for the UI layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UiSnapshot {
    pub phase: Phase,
    pub mode: GameMode,
    pub stage: StageId,
    pub score: u64,
    pub hp: f32,
    pub max_hp: f32,
    pub wave: u32,
    pub powerup: Option<PowerupKind>,
    /// Boss (endless) or the active rival (shootout), when present
    pub opponent: Option<OpponentStatus>,
    pub round: u32,
    pub player_wins: u32,
    pub enemy_wins: u32,
    pub blazin_meter: f32,
    pub blazin_active: bool,
    pub player_team: Vec<&'static str>,
    pub player_active_idx: usize,
    pub enemy_team: Vec<&'static str>,
    pub enemy_active_idx: usize,
    /// Active warning overlay text (boss incoming)
    pub warning: Option<String>,
    pub screen_shake: f32,
}

/// Pure projection of the current state
pub fn project(state: &SimState) -> UiSnapshot {
    let opponent = match state.mode {
        GameMode::Shootout => state.enemies.iter().find(|e| e.is_rival()),
        GameMode::Endless => state.enemies.iter().find(|e| e.is_boss()),
    }
    .map(|e| OpponentStatus {
        name: e
            .variant()
            .map(|id| roster::character(id).name)
            .unwrap_or("???"),
        hp: e.hp.max(0.0),
        max_hp: e.max_hp,
    });

    UiSnapshot {
        phase: state.phase,
        mode: state.mode,
        stage: state.stage,
        score: state.player.score,
        hp: state.player.hp.clamp(0.0, state.player.max_hp),
        max_hp: state.player.max_hp,
        wave: state.wave,
        powerup: state.player.active_powerup,
        opponent,
        round: state.match_state.round,
        player_wins: state.match_state.player_wins,
        enemy_wins: state.match_state.enemy_wins,
        blazin_meter: state.player.blazin.meter.clamp(0.0, 100.0),
        blazin_active: state.player.blazin.active,
        player_team: state.player_team.roster.clone(),
        player_active_idx: state.player_team.active_idx,
        enemy_team: state.enemy_team.roster.clone(),
        enemy_active_idx: state.enemy_team.active_idx,
        warning: state.warning.as_ref().map(|(text, _)| text.clone()),
        screen_shake: state.screen_shake,
    }
}
