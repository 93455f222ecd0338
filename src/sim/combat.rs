//! Movement, AI and combat resolution
//!
//! Runs once per tick in a fixed order: player, weapons, bullets, enemy
//! AI plus contact damage, then bullet hits. Damage lands on entity fields
//! only; the prune pass in the tick removes whatever died.

use std::f32::consts::PI;

use glam::Vec2;
use rand::Rng;

use crate::consts::*;
use crate::roster;
use crate::sim::entity::{Bullet, EnemyKind, PowerupKind};
use crate::sim::events::{EventKind, FeedbackKind, SideEffect, SoundKind};
use crate::sim::state::{GameMode, SimState};
use crate::sim::tick::TickInput;
use crate::{circles_overlap, colors};

/// Player movement, aim, and personal timers
pub(crate) fn advance_player(state: &mut SimState, input: &TickInput) {
    {
        let p = &mut state.player;
        if p.blazin.active {
            p.blazin.timer -= 1;
            if p.blazin.timer <= 0 {
                p.blazin.active = false;
            }
        }
        let mut dir = Vec2::new(input.move_x, input.move_y);
        if dir.length_squared() > 0.0 {
            dir = dir.normalize();
        }
        p.vel = dir * PLAYER_SPEED;
        p.pos.x = (p.pos.x + p.vel.x).clamp(p.radius, VIEW_WIDTH - p.radius);
        p.pos.y = (p.pos.y + p.vel.y).clamp(HORIZON_Y, PLAYER_FLOOR_Y);
        p.rotation = (input.aim.y - p.pos.y).atan2(input.aim.x - p.pos.x);

        if p.fire_cooldown > 0 {
            p.fire_cooldown -= 1;
        }
        if p.muzzle_flash > 0 {
            p.muzzle_flash -= 1;
        }
        if p.recoil > 0.0 {
            p.recoil *= 0.8;
        }
        if p.powerup_ticks > 0 {
            p.powerup_ticks -= 1;
            if p.powerup_ticks <= 0 {
                p.active_powerup = None;
            }
        }
    }
    // Blazin aura trail
    if state.player.blazin.active && state.tick % 4 == 0 {
        let pos = state.player.pos;
        state.spawn_particles(pos, colors::BLAZE, 2, 5.0, 4.0);
    }
}

/// Fire on held trigger when the cooldown allows it
pub(crate) fn fire_weapons(state: &mut SimState, input: &TickInput) {
    if !input.fire || state.player.fire_cooldown > 0 {
        return;
    }
    let p = &state.player;
    let rapid = p.active_powerup == Some(PowerupKind::RapidFire);
    let triple = p.active_powerup == Some(PowerupKind::TripleShot) || p.blazin.active;
    let blazin = p.blazin.active;
    let sprite = roster::character(p.character).bullet_sprite;
    let (origin, rotation, radius) = (p.pos, p.rotation, p.radius);

    state.effect(SideEffect::PlaySound(SoundKind::Gunshot));
    let offsets: &[f32] = if triple {
        &[-TRIPLE_SPREAD, 0.0, TRIPLE_SPREAD]
    } else {
        &[0.0]
    };
    for &offset in offsets {
        let angle = rotation + offset;
        let muzzle = origin
            + Vec2::new(angle.cos(), angle.sin()) * (radius * 1.3)
            + Vec2::new(0.0, 5.0);
        state.bullets.push(Bullet::player(muzzle, angle, sprite));
        let flash = if blazin { colors::BLAZE } else { colors::GOLD };
        state.spawn_particles(muzzle, flash, 5, 4.0, 3.0);
    }

    let p = &mut state.player;
    p.fire_cooldown = if blazin {
        FIRE_RATE_BLAZIN
    } else if rapid {
        FIRE_RATE_RAPID
    } else {
        FIRE_RATE_DEFAULT
    };
    p.recoil = 8.0;
    p.muzzle_flash = 3;
    state.screen_shake = (state.screen_shake + 2.0).min(SHAKE_FIRE_CAP);
}

pub(crate) fn advance_bullets(state: &mut SimState) {
    for b in &mut state.bullets {
        b.pos += b.vel;
        b.life -= 1;
    }
}

/// Per-kind steering, attacks, and contact damage against the player
pub(crate) fn advance_enemies(state: &mut SimState) {
    let player_pos = state.player.pos;
    let player_vel = state.player.vel;
    let player_radius = state.player.radius;
    let dmg_mult = state.settings.difficulty.damage_multiplier();
    let now = state.tick as f32;
    // Positions snapshot for peer separation
    let peers: Vec<(Vec2, f32)> = state.enemies.iter().map(|e| (e.pos, e.radius)).collect();

    let mut new_bullets: Vec<Bullet> = Vec::new();
    let mut muzzle_bursts: Vec<Vec2> = Vec::new();
    let mut contact_damage = 0.0f32;
    let mut contact_shake = 0.0f32;

    for index in 0..state.enemies.len() {
        let mut vel = Vec2::ZERO;
        let is_fast = matches!(state.enemies[index].kind, EnemyKind::Fast);
        let enemy = &mut state.enemies[index];
        match &mut enemy.kind {
            EnemyKind::Rival {
                attack_cooldown, ..
            } => {
                // Hold a firing anchor near the right, mirroring the player's height
                let dx = (VIEW_WIDTH - 250.0) - enemy.pos.x;
                let dy = player_pos.y - enemy.pos.y;
                vel.x = dx * 0.05 + (now * 0.05).sin() * 2.0;
                vel.y = dy * 0.05;
                if enemy.pos.y + vel.y < HORIZON_Y || enemy.pos.y + vel.y > PLAYER_FLOOR_Y {
                    vel.y = 0.0;
                }
                enemy.rotation = PI;
                if *attack_cooldown > 0 {
                    *attack_cooldown -= 1;
                } else if (player_pos.y - enemy.pos.y).abs() < 200.0 {
                    let origin = Vec2::new(enemy.pos.x - (enemy.radius + 10.0), enemy.pos.y);
                    muzzle_bursts.push(Vec2::new(enemy.pos.x - enemy.radius, enemy.pos.y));
                    let jitter = state.rng.random_range(-1.0..1.0);
                    new_bullets.push(Bullet::rival_shot(origin, jitter, 25.0 * dmg_mult));
                    *attack_cooldown = 30 + state.rng.random_range(0..20);
                }
            }
            EnemyKind::Boss {
                attack_cooldown, ..
            } => {
                if enemy.pos.x > VIEW_WIDTH - 200.0 {
                    vel.x = -2.0;
                } else {
                    let target_y = VIEW_HEIGHT / 2.0 + (now * 0.02).sin() * 150.0;
                    vel.y = (target_y - enemy.pos.y) * 0.02;
                }
                if *attack_cooldown > 0 {
                    *attack_cooldown -= 1;
                } else {
                    let aim =
                        (player_pos.y - enemy.pos.y).atan2(player_pos.x - enemy.pos.x);
                    let origin = Vec2::new(enemy.pos.x - 80.0, enemy.pos.y);
                    for step in -1..=1 {
                        let angle = aim + step as f32 * 0.3;
                        new_bullets.push(Bullet::boss_shot(origin, angle, 10.0 * dmg_mult));
                    }
                    *attack_cooldown = 120;
                }
            }
            EnemyKind::Tank => {
                vel.x = -enemy.speed;
                enemy.pos.y = GROUND_Y - enemy.radius + 10.0;
            }
            EnemyKind::Basic | EnemyKind::Fast => {
                let lead = if is_fast { player_vel * 20.0 } else { Vec2::ZERO };
                let to_target = player_pos + lead - enemy.pos;
                let angle = to_target.y.atan2(to_target.x);
                vel = Vec2::new(angle.cos(), angle.sin()) * enemy.speed;
                // Push apart from overlapping peers
                for (peer_index, &(peer_pos, peer_radius)) in peers.iter().enumerate() {
                    if peer_index == index {
                        continue;
                    }
                    if enemy.pos.distance(peer_pos) < enemy.radius + peer_radius {
                        let away =
                            (enemy.pos.y - peer_pos.y).atan2(enemy.pos.x - peer_pos.x);
                        vel += Vec2::new(away.cos(), away.sin()) * 0.5;
                    }
                }
            }
        }
        enemy.pos += vel;
        if enemy.hit_flash > 0 {
            enemy.hit_flash -= 1;
        }
        if circles_overlap(enemy.pos, enemy.radius, player_pos, player_radius) {
            contact_damage += CONTACT_DAMAGE * dmg_mult;
            contact_shake += 1.0;
        }
    }

    state.bullets.extend(new_bullets);
    for pos in muzzle_bursts {
        state.spawn_particles(pos, colors::GOLD, 5, 4.0, 3.0);
    }
    if contact_damage > 0.0 {
        state.player.hp = (state.player.hp - contact_damage).max(0.0);
        state.screen_shake += contact_shake;
        if state.player.hp <= 0.0 {
            state.player_down();
        }
    }
}

/// Bullet collisions, in order: enemy fire against the player, then player
/// fire against enemies. A bullet is consumed by its first hit.
pub(crate) fn resolve_bullet_hits(state: &mut SimState) {
    let player_pos = state.player.pos;
    let player_radius = state.player.radius;

    let mut damage_taken = 0.0f32;
    let mut hits_taken = 0u32;
    for b in &mut state.bullets {
        if !b.from_enemy || b.life <= 0 {
            continue;
        }
        if circles_overlap(b.pos, b.radius, player_pos, player_radius) {
            damage_taken += b.damage;
            hits_taken += 1;
            b.life = 0;
        }
    }
    if hits_taken > 0 {
        state.player.hp = (state.player.hp - damage_taken).max(0.0);
        state.screen_shake += 5.0 * hits_taken as f32;
        if state.player.hp <= 0.0 {
            state.player_down();
        }
    }

    for bullet_index in 0..state.bullets.len() {
        if state.bullets[bullet_index].from_enemy || state.bullets[bullet_index].life <= 0 {
            continue;
        }
        for enemy_index in 0..state.enemies.len() {
            let (b_pos, b_radius, b_damage) = {
                let b = &state.bullets[bullet_index];
                (b.pos, b.radius, b.damage)
            };
            let enemy = &mut state.enemies[enemy_index];
            if enemy.hp <= 0.0 {
                // Died earlier this tick; waiting for the prune pass
                continue;
            }
            if !circles_overlap(b_pos, b_radius, enemy.pos, enemy.radius) {
                continue;
            }
            enemy.hp -= b_damage;
            enemy.hit_flash = 4;
            state.bullets[bullet_index].life = 0;
            state.spawn_particles(b_pos, colors::GOLD, 4, 5.0, 3.0);
            if state.enemies[enemy_index].hp <= 0.0 {
                on_enemy_killed(state, enemy_index);
            }
            break;
        }
    }
}

fn on_enemy_killed(state: &mut SimState, enemy_index: usize) {
    match state.mode {
        GameMode::Shootout => advance_rival_roster(state, enemy_index),
        GameMode::Endless => reward_kill(state, enemy_index),
    }
}

/// The rival fell: bring in the opposing roster's next fighter in place,
/// or hand the round to the player if the roster is spent.
fn advance_rival_roster(state: &mut SimState, enemy_index: usize) {
    if state.enemy_team.active_idx + 1 < state.enemy_team.roster.len() {
        state.enemy_team.active_idx += 1;
        let next = state.enemy_team.roster[state.enemy_team.active_idx];
        let max_hp = SHOOTOUT_MAX_HP * state.settings.difficulty.stat_multiplier();
        let hp = state
            .enemy_team
            .banked_hp
            .get(next)
            .copied()
            .unwrap_or(max_hp);
        let enemy = &mut state.enemies[enemy_index];
        enemy.hp = hp;
        enemy.max_hp = max_hp;
        if let EnemyKind::Rival { variant, .. } = &mut enemy.kind {
            *variant = next;
        }
        let pos = enemy.pos;
        state.spawn_text(pos, "NEXT CHALLENGER!", colors::RED);
        state.spawn_particles(pos, colors::RED, 30, 10.0, 8.0);
    } else {
        state.round_end(true);
    }
}

/// Endless-mode kill rewards: score, meter, drops, boss celebrations
fn reward_kill(state: &mut SimState, enemy_index: usize) {
    let enemy = &state.enemies[enemy_index];
    let pos = enemy.pos;
    let value = enemy.value;
    let gain = enemy.meter_gain();
    let shake = enemy.kill_shake();
    let is_boss = enemy.is_boss();
    let variant = enemy.variant();

    state.player.score += value;
    if state.player.score / 1000 > state.last_milestone / 1000 {
        state.last_milestone = state.player.score;
        let player_pos = state.player.pos;
        state.effect(SideEffect::VisualFeedback(FeedbackKind::Milestone, player_pos));
    }

    let p = &mut state.player;
    if !p.blazin.active && p.blazin.meter < BLAZIN_METER_MAX {
        p.blazin.meter = (p.blazin.meter + gain).min(BLAZIN_METER_MAX);
        if p.blazin.meter >= BLAZIN_METER_MAX {
            let player_pos = p.pos;
            state.spawn_text(player_pos, "BLAZIN READY!", colors::BLAZE);
        }
    }

    state.screen_shake += shake;
    state.spawn_text(pos, format!("+{value}"), colors::WHITE);

    if is_boss {
        state.boss_active = false;
        state.spawn_particles(pos, colors::RED, 50, 10.0, 10.0);
        state.effect(SideEffect::VisualFeedback(FeedbackKind::BossDown, pos));
        if let Some(id) = variant {
            if state.unlocks.add(id) {
                state.effect(SideEffect::UnlockCharacter(id));
                state.effect(SideEffect::PlaySound(SoundKind::Unlock));
                state.schedule(
                    60,
                    EventKind::Banner {
                        text: "NEW FIGHTER UNLOCKED!".into(),
                        color: colors::GREEN,
                    },
                );
            }
        }
        // Beating the boss rolls straight into the next wave
        state.wave += 1;
        state.to_spawn = crate::sim::spawn::wave_refill(state.wave);
    } else {
        state.spawn_particles(pos, colors::SMOKE, 12, 6.0, 8.0);
    }
    state.roll_powerup(pos);
}

/// Powerup aging, pickup, and application
pub(crate) fn collect_powerups(state: &mut SimState) {
    let player_pos = state.player.pos;
    let player_radius = state.player.radius;
    let mut collected: Vec<PowerupKind> = Vec::new();
    for powerup in &mut state.powerups {
        powerup.life -= 1;
        if powerup.life > 0
            && circles_overlap(powerup.pos, powerup.radius, player_pos, player_radius)
        {
            collected.push(powerup.kind);
            powerup.life = 0;
        }
    }
    for kind in collected {
        let pos = state.player.pos;
        state.spawn_text(pos, kind.label(), colors::GREEN);
        state.effect(SideEffect::PlaySound(SoundKind::Powerup));
        let p = &mut state.player;
        match kind {
            PowerupKind::Heal => p.hp = (p.hp + HEAL_AMOUNT).min(p.max_hp),
            timed => {
                // Overwrites any running buff and restarts the clock
                p.active_powerup = Some(timed);
                p.powerup_ticks = POWERUP_DURATION;
            }
        }
    }
}

/// Particles, floating texts, shake decay, warning countdown
pub(crate) fn advance_cosmetics(state: &mut SimState) {
    for particle in &mut state.particles {
        particle.pos += particle.vel;
        particle.vel.x *= 0.95;
        particle.vel.y += 0.2;
        if particle.pos.y > GROUND_Y {
            particle.pos.y = GROUND_Y;
            particle.vel.y *= -0.6;
        }
        particle.life -= 1;
        particle.rotation += 0.1;
    }
    for text in &mut state.texts {
        text.pos += text.vel;
        text.life -= 1;
    }
    if state.screen_shake > 0.0 {
        state.screen_shake *= 0.9;
        if state.screen_shake < 0.05 {
            state.screen_shake = 0.0;
        }
    }
    if let Some((_, ticks)) = &mut state.warning {
        *ticks -= 1;
        if *ticks <= 0 {
            state.warning = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::Enemy;
    use crate::sim::state::Phase;

    fn playing_endless() -> SimState {
        let mut state = SimState::new(3);
        state.select_mode(GameMode::Endless);
        state.confirm_roster();
        state.start_match(true);
        state
    }

    fn basic_at(pos: Vec2, hp: f32) -> Enemy {
        Enemy::new(pos, 55.0, hp, 2.5, 50, EnemyKind::Basic)
    }

    #[test]
    fn two_hits_kill_a_wave_one_basic() {
        let mut state = playing_endless();
        let spot = Vec2::new(600.0, 500.0);
        state.enemies.push(basic_at(spot, 40.0));
        for _ in 0..2 {
            state
                .bullets
                .push(Bullet::player(spot - Vec2::new(30.0, 0.0), 0.0, None));
            resolve_bullet_hits(&mut state);
        }
        assert!(state.enemies[0].hp <= 0.0);
        assert_eq!(state.player.score, 50);
        assert!(state.bullets.iter().all(|b| b.life == 0));
    }

    #[test]
    fn score_awarded_exactly_once() {
        let mut state = playing_endless();
        let spot = Vec2::new(600.0, 500.0);
        state.enemies.push(basic_at(spot, 20.0));
        state.bullets.push(Bullet::player(spot, 0.0, None));
        resolve_bullet_hits(&mut state);
        assert_eq!(state.player.score, 50);
        // A second volley against the corpse does nothing
        state.bullets.push(Bullet::player(spot, 0.0, None));
        resolve_bullet_hits(&mut state);
        assert_eq!(state.player.score, 50);
    }

    #[test]
    fn bullet_damages_at_most_one_target() {
        let mut state = playing_endless();
        let spot = Vec2::new(600.0, 500.0);
        state.enemies.push(basic_at(spot, 100.0));
        state.enemies.push(basic_at(spot + Vec2::new(10.0, 0.0), 100.0));
        state.bullets.push(Bullet::player(spot, 0.0, None));
        resolve_bullet_hits(&mut state);
        let damaged = state
            .enemies
            .iter()
            .filter(|e| e.hp < 100.0)
            .count();
        assert_eq!(damaged, 1);
        assert_eq!(state.bullets[0].life, 0);
    }

    #[test]
    fn kill_charges_blazin_meter() {
        let mut state = playing_endless();
        let spot = Vec2::new(600.0, 500.0);
        state.enemies.push(basic_at(spot, 10.0));
        state.bullets.push(Bullet::player(spot, 0.0, None));
        resolve_bullet_hits(&mut state);
        assert_eq!(state.player.blazin.meter, 7.0);
    }

    #[test]
    fn meter_does_not_charge_while_blazin() {
        let mut state = playing_endless();
        state.player.blazin.active = true;
        let spot = Vec2::new(600.0, 500.0);
        state.enemies.push(basic_at(spot, 10.0));
        state.bullets.push(Bullet::player(spot, 0.0, None));
        resolve_bullet_hits(&mut state);
        assert_eq!(state.player.blazin.meter, 0.0);
    }

    #[test]
    fn enemy_bullet_hurts_player_and_is_consumed() {
        let mut state = playing_endless();
        let pos = state.player.pos;
        state.bullets.push(Bullet::rival_shot(pos, 0.0, 25.0));
        resolve_bullet_hits(&mut state);
        assert_eq!(state.player.hp, PLAYER_MAX_HP - 25.0);
        assert_eq!(state.bullets[0].life, 0);
    }

    #[test]
    fn lethal_enemy_bullet_ends_endless_run() {
        let mut state = playing_endless();
        state.player.hp = 10.0;
        let pos = state.player.pos;
        state.bullets.push(Bullet::rival_shot(pos, 0.0, 25.0));
        resolve_bullet_hits(&mut state);
        assert_eq!(state.player.hp, 0.0);
        assert_eq!(state.phase, Phase::GameOver);
    }

    #[test]
    fn heal_caps_at_max_hp() {
        let mut state = playing_endless();
        state.player.hp = 10.0;
        state.powerups.push(crate::sim::entity::Powerup {
            pos: state.player.pos,
            radius: POWERUP_RADIUS,
            kind: PowerupKind::Heal,
            life: POWERUP_LIFE,
        });
        collect_powerups(&mut state);
        assert_eq!(state.player.hp, 35.0);

        state.player.hp = state.player.max_hp - 5.0;
        state.powerups.push(crate::sim::entity::Powerup {
            pos: state.player.pos,
            radius: POWERUP_RADIUS,
            kind: PowerupKind::Heal,
            life: POWERUP_LIFE,
        });
        collect_powerups(&mut state);
        assert_eq!(state.player.hp, state.player.max_hp);
    }

    #[test]
    fn timed_powerup_overwrites_and_restarts() {
        let mut state = playing_endless();
        state.player.active_powerup = Some(PowerupKind::RapidFire);
        state.player.powerup_ticks = 3;
        state.powerups.push(crate::sim::entity::Powerup {
            pos: state.player.pos,
            radius: POWERUP_RADIUS,
            kind: PowerupKind::TripleShot,
            life: POWERUP_LIFE,
        });
        collect_powerups(&mut state);
        assert_eq!(state.player.active_powerup, Some(PowerupKind::TripleShot));
        assert_eq!(state.player.powerup_ticks, POWERUP_DURATION);
    }

    #[test]
    fn firing_respects_cooldown_and_spread() {
        let mut state = playing_endless();
        let input = TickInput {
            fire: true,
            aim: Vec2::new(VIEW_WIDTH, state.player.pos.y),
            ..Default::default()
        };
        fire_weapons(&mut state, &input);
        assert_eq!(state.bullets.len(), 1);
        assert_eq!(state.player.fire_cooldown, FIRE_RATE_DEFAULT);
        // Held trigger during cooldown does nothing
        fire_weapons(&mut state, &input);
        assert_eq!(state.bullets.len(), 1);

        state.player.fire_cooldown = 0;
        state.player.active_powerup = Some(PowerupKind::TripleShot);
        fire_weapons(&mut state, &input);
        assert_eq!(state.bullets.len(), 4);
        state.player.fire_cooldown = 0;
        state.player.blazin.active = true;
        fire_weapons(&mut state, &input);
        assert_eq!(state.player.fire_cooldown, FIRE_RATE_BLAZIN);
    }

    #[test]
    fn contact_damage_scales_with_difficulty() {
        let mut state = playing_endless();
        state.set_difficulty(crate::Difficulty::Hard);
        state.enemies.push(basic_at(state.player.pos, 100.0));
        let hp_before = state.player.hp;
        advance_enemies(&mut state);
        assert!((hp_before - state.player.hp - CONTACT_DAMAGE * 1.5).abs() < 1e-4);
    }

    #[test]
    fn tank_stays_on_the_ground_line() {
        let mut state = playing_endless();
        state
            .enemies
            .push(Enemy::new(Vec2::new(900.0, 200.0), 75.0, 150.0, 1.2, 300, EnemyKind::Tank));
        advance_enemies(&mut state);
        let tank = &state.enemies[0];
        assert_eq!(tank.pos.y, GROUND_Y - tank.radius + 10.0);
        assert!(tank.pos.x < 900.0);
    }

    #[test]
    fn rival_kill_with_partner_swaps_in_next_challenger() {
        let mut state = SimState::new(3);
        state.unlocks.unlock_all();
        state.set_team_size(2);
        state.select_mode(GameMode::Shootout);
        state.toggle_pick("ace");
        state.confirm_roster();
        state.toggle_pick("viper");
        state.toggle_pick("goliath");
        state.confirm_roster();
        state.start_match(true);

        let spot = state.enemies[0].pos;
        state.enemies[0].hp = 10.0;
        state.bullets.push(Bullet::player(spot, 0.0, None));
        resolve_bullet_hits(&mut state);

        // Roster advanced in place; round still running
        assert!(state.match_state.round_active);
        assert_eq!(state.enemy_team.active_idx, 1);
        assert_eq!(state.enemies[0].variant(), Some("goliath"));
        assert!(state.enemies[0].hp > 0.0);
    }

    #[test]
    fn rival_kill_on_last_fighter_ends_round() {
        let mut state = SimState::new(3);
        state.unlocks.unlock_all();
        state.select_mode(GameMode::Shootout);
        state.toggle_pick("ace");
        state.confirm_roster();
        state.toggle_pick("viper");
        state.confirm_roster();
        state.start_match(true);

        let spot = state.enemies[0].pos;
        state.enemies[0].hp = 10.0;
        state.bullets.push(Bullet::player(spot, 0.0, None));
        resolve_bullet_hits(&mut state);

        assert!(!state.match_state.round_active);
        assert_eq!(state.match_state.player_wins, 1);
        assert_eq!(state.match_state.round, 2);
    }

    #[test]
    fn boss_kill_unlocks_and_refills_wave() {
        let mut state = playing_endless();
        state.wave = 3;
        state.boss_active = true;
        state.to_spawn = 0;
        let spot = Vec2::new(900.0, 360.0);
        let mut boss = Enemy::boss(spot, 10.0, "viper");
        boss.value = 5000;
        state.enemies.push(boss);
        state.bullets.push(Bullet::player(spot, 0.0, None));
        resolve_bullet_hits(&mut state);

        assert!(!state.boss_active);
        assert_eq!(state.player.score, 5000);
        assert_eq!(state.wave, 4);
        assert_eq!(state.to_spawn, crate::sim::spawn::wave_refill(4));
        assert!(state.unlocks.contains("viper"));
        assert!(
            state
                .effects
                .iter()
                .any(|e| matches!(e, SideEffect::UnlockCharacter("viper")))
        );
    }
}
