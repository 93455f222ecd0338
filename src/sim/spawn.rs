//! Wave, boss and rival spawning
//!
//! Endless mode runs on an owed-enemy counter and a spawn timer that
//! tightens as waves climb. Every third wave trades the refill for a boss
//! encounter: warning banner first, then a delayed arrival that is dropped
//! if the match is no longer being played.

use glam::Vec2;
use rand::Rng;

use crate::colors;
use crate::consts::*;
use crate::roster::{self, CharacterId};
use crate::sim::entity::{Enemy, EnemyKind};
use crate::sim::events::EventKind;
use crate::sim::state::{GameMode, SimState};

/// Per-tick spawning step for endless mode
pub(crate) fn advance_spawning(state: &mut SimState) {
    if state.mode != GameMode::Endless || state.boss_active {
        return;
    }
    if state.to_spawn > 0 {
        if state.spawn_timer <= 0 {
            spawn_wave_enemy(state);
            state.to_spawn -= 1;
            state.spawn_timer = (60 - state.wave as i32 * 2).max(20);
        } else {
            state.spawn_timer -= 1;
        }
    } else if state.enemies.is_empty() {
        // Wave cleared: run the intermission, then refill or summon a boss
        if state.wave_timer == 0 {
            state.wave_timer = WAVE_DELAY;
            let next = state.wave + 1;
            state.banner(&format!("WAVE {next}"), colors::WHITE);
        } else {
            state.wave_timer -= 1;
            if state.wave_timer <= 0 {
                state.wave += 1;
                if state.wave % 3 == 0 {
                    begin_boss_sequence(state);
                } else {
                    state.to_spawn = wave_refill(state.wave);
                }
            }
        }
    }
}

/// Enemies owed for a fresh (non-boss) wave
pub(crate) fn wave_refill(wave: u32) -> u32 {
    6 + wave * 2
}

fn spawn_wave_enemy(state: &mut SimState) {
    let wave_mult = 1.0 + state.wave as f32 * 0.15;
    let diff_mult = state.settings.difficulty.stat_multiplier();
    let roll: f32 = state.rng.random_range(0.0..1.0);

    // Weighted pick; tougher kinds unlock as waves climb
    let (kind, base_hp, speed, radius, value) = if state.wave > 2 && roll > 0.85 {
        (EnemyKind::Tank, 150.0, 1.2, 75.0, 300)
    } else if state.wave > 1 && roll > 0.7 {
        (EnemyKind::Fast, 25.0, 5.0, 40.0, 100)
    } else {
        (EnemyKind::Basic, 40.0, 2.5, 55.0, 50)
    };
    let hp = base_hp * wave_mult * diff_mult;
    let y = state.rng.random_range(HORIZON_Y..PLAYER_FLOOR_Y);
    state.enemies.push(Enemy::new(
        Vec2::new(VIEW_WIDTH + 80.0, y),
        radius,
        hp,
        speed,
        value,
        kind,
    ));
    log::debug!("spawned {kind:?} (wave {}, hp {hp:.0})", state.wave);
}

/// Start a boss encounter: warning overlay now, arrival after a delay.
/// The arrival re-checks the match state when it fires.
pub(crate) fn begin_boss_sequence(state: &mut SimState) {
    state.boss_active = true;
    let boss = roster::boss_for_wave(state.wave);
    state.warning = Some((format!("{} DETECTED", boss.name), BOSS_WARNING_TICKS));
    state.schedule(BOSS_SPAWN_DELAY, EventKind::SpawnBoss { variant: boss.id });
    log::info!("boss sequence: {} at wave {}", boss.name, state.wave);
}

/// Materialize the boss (called by the scheduled event once guards pass)
pub(crate) fn spawn_boss_now(state: &mut SimState, variant: CharacterId) {
    let hp = (250.0 + state.wave as f32 * 60.0) * state.settings.difficulty.stat_multiplier();
    state.enemies.push(Enemy::boss(
        Vec2::new(VIEW_WIDTH + 150.0, VIEW_HEIGHT / 2.0),
        hp,
        variant,
    ));
    state.screen_shake = 25.0;
}

/// Spawn the opposing team's current fighter for a shootout round
pub(crate) fn spawn_rival(state: &mut SimState) {
    let variant = state
        .enemy_team
        .active()
        .unwrap_or(roster::DEFAULT_OPPONENT);
    let max_hp = SHOOTOUT_MAX_HP * state.settings.difficulty.stat_multiplier();
    let hp = state
        .enemy_team
        .banked_hp
        .get(variant)
        .copied()
        .unwrap_or(max_hp);
    state.enemies.push(Enemy::rival(
        Vec2::new(VIEW_WIDTH - 200.0, VIEW_HEIGHT / 2.0),
        hp,
        max_hp,
        variant,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::events;
    use crate::sim::state::Phase;

    fn playing_endless() -> SimState {
        let mut state = SimState::new(7);
        state.select_mode(GameMode::Endless);
        state.confirm_roster();
        state.start_match(true);
        state
    }

    #[test]
    fn wave_one_spawns_on_schedule() {
        let mut state = playing_endless();
        advance_spawning(&mut state);
        assert_eq!(state.enemies.len(), 1);
        assert_eq!(state.to_spawn, FIRST_WAVE_COUNT - 1);
        assert_eq!(state.spawn_timer, 58);
        // Nothing more until the timer runs down
        advance_spawning(&mut state);
        assert_eq!(state.enemies.len(), 1);
    }

    #[test]
    fn wave_one_only_spawns_basics() {
        let mut state = playing_endless();
        for _ in 0..1000 {
            if state.to_spawn == 0 {
                break;
            }
            state.spawn_timer = 0;
            advance_spawning(&mut state);
        }
        assert!(
            state
                .enemies
                .iter()
                .all(|e| matches!(e.kind, EnemyKind::Basic))
        );
    }

    #[test]
    fn intermission_then_refill() {
        let mut state = playing_endless();
        state.to_spawn = 0;
        // First cleared tick arms the intermission and announces the wave
        advance_spawning(&mut state);
        assert_eq!(state.wave_timer, WAVE_DELAY);
        assert!(state.texts.iter().any(|t| t.text == "WAVE 2"));
        for _ in 0..WAVE_DELAY {
            advance_spawning(&mut state);
        }
        assert_eq!(state.wave, 2);
        assert_eq!(state.to_spawn, wave_refill(2));
        assert!(!state.boss_active);
    }

    #[test]
    fn third_wave_triggers_boss_not_refill() {
        let mut state = playing_endless();
        state.wave = 2;
        state.to_spawn = 0;
        advance_spawning(&mut state);
        for _ in 0..WAVE_DELAY {
            advance_spawning(&mut state);
        }
        assert_eq!(state.wave, 3);
        assert!(state.boss_active);
        assert_eq!(state.to_spawn, 0);
        assert!(state.warning.is_some());
        assert_eq!(state.events.len(), 1);
    }

    #[test]
    fn boss_spawning_suppresses_wave_spawns() {
        let mut state = playing_endless();
        state.boss_active = true;
        state.spawn_timer = 0;
        advance_spawning(&mut state);
        assert!(state.enemies.is_empty());
    }

    #[test]
    fn boss_arrival_cancelled_if_no_longer_playing() {
        let mut state = playing_endless();
        state.wave = 3;
        begin_boss_sequence(&mut state);
        state.tick += BOSS_SPAWN_DELAY;
        state.phase = Phase::GameOver;
        events::drain_due(&mut state);
        assert!(state.enemies.is_empty());
        assert!(state.events.is_empty());
    }

    #[test]
    fn boss_arrival_fires_while_playing() {
        let mut state = playing_endless();
        state.wave = 3;
        begin_boss_sequence(&mut state);
        state.tick += BOSS_SPAWN_DELAY;
        events::drain_due(&mut state);
        assert_eq!(state.enemies.len(), 1);
        assert!(state.enemies[0].is_boss());
        // Wave 3, normal difficulty
        assert_eq!(state.enemies[0].max_hp, 250.0 + 3.0 * 60.0);
    }

    #[test]
    fn rival_spawns_with_banked_hp() {
        let mut state = SimState::new(7);
        state.unlocks.unlock_all();
        state.select_mode(GameMode::Shootout);
        state.toggle_pick("ace");
        state.confirm_roster();
        state.toggle_pick("viper");
        state.confirm_roster();
        state.start_match(true);
        state.enemy_team.banked_hp.insert("viper", 42.0);
        state.enemies.clear();
        spawn_rival(&mut state);
        assert_eq!(state.enemies[0].hp, 42.0);
        assert_eq!(state.enemies[0].max_hp, SHOOTOUT_MAX_HP);
    }
}
