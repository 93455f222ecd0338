//! Showdown - a side-view arcade shooter simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, combat, match state)
//! - `roster`: Fighter catalog and boss rotation
//! - `settings`: Difficulty scalars and persisted unlocks
//!
//! Rendering, audio playback and menu chrome are external consumers: they
//! read the published [`sim::UiSnapshot`] and feed commands/input back in.

pub mod roster;
pub mod settings;
pub mod sim;

pub use settings::{Difficulty, Settings, Unlocks};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 60;
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f32 = 1.0 / TICK_RATE as f32;

    /// Playfield dimensions
    pub const VIEW_WIDTH: f32 = 1280.0;
    pub const VIEW_HEIGHT: f32 = 720.0;
    pub const GROUND_HEIGHT: f32 = 120.0;
    /// Top of the walkable band (fake depth horizon)
    pub const HORIZON_Y: f32 = VIEW_HEIGHT * 0.45;
    /// Ground line where particles bounce and tanks roll
    pub const GROUND_Y: f32 = VIEW_HEIGHT - GROUND_HEIGHT;
    /// Lowest y the player may occupy
    pub const PLAYER_FLOOR_Y: f32 = GROUND_Y - 30.0;

    /// Player defaults
    pub const PLAYER_MAX_HP: f32 = 100.0;
    pub const PLAYER_SPEED: f32 = 6.0;
    pub const PLAYER_RADIUS: f32 = 55.0;
    /// Fighters are drawn much larger in shootout duels
    pub const PLAYER_RADIUS_SHOOTOUT: f32 = 110.0;
    pub const PLAYER_START_X: f32 = 150.0;

    /// Player bullets
    pub const BULLET_SPEED: f32 = 18.0;
    pub const BULLET_DAMAGE: f32 = 20.0;
    pub const BULLET_RADIUS: f32 = 10.0;
    pub const BULLET_LIFE: i32 = 80;
    /// Ticks between shots: baseline, rapid-fire powerup, blazin mode
    pub const FIRE_RATE_DEFAULT: i32 = 12;
    pub const FIRE_RATE_RAPID: i32 = 4;
    pub const FIRE_RATE_BLAZIN: i32 = 4;
    /// Angular offset of the outer bullets in a triple shot (radians)
    pub const TRIPLE_SPREAD: f32 = 0.15;

    /// Powerups
    pub const POWERUP_DROP_CHANCE: f32 = 0.15;
    pub const POWERUP_DURATION: i32 = 500;
    pub const POWERUP_RADIUS: f32 = 25.0;
    pub const POWERUP_LIFE: i32 = 600;
    pub const HEAL_AMOUNT: f32 = 25.0;

    /// Wave pacing
    pub const WAVE_DELAY: i32 = 180;
    pub const FIRST_WAVE_COUNT: u32 = 5;

    /// Blazin special ability
    pub const BLAZIN_METER_MAX: f32 = 100.0;
    pub const BLAZIN_DURATION: i32 = 600;

    /// Boss encounter timing (ticks)
    pub const BOSS_WARNING_TICKS: i32 = 240;
    pub const BOSS_SPAWN_DELAY: u64 = 150;

    /// Shootout mode
    pub const SHOOTOUT_MAX_HP: f32 = 500.0;
    pub const ROUND_END_DELAY: u64 = 120;
    pub const WINS_PER_MATCH: u32 = 2;

    /// Continuous damage per tick while an enemy overlaps the player
    pub const CONTACT_DAMAGE: f32 = 0.5;
    /// Screen shake added per shot is capped so sustained fire stays readable
    pub const SHAKE_FIRE_CAP: f32 = 20.0;

    /// UI snapshots are published every Nth host frame
    pub const SNAPSHOT_INTERVAL: u64 = 5;
}

/// Particle / floating-text tint
pub type Rgb = [u8; 3];

/// Palette shared by cosmetic spawners
pub mod colors {
    use super::Rgb;

    pub const WHITE: Rgb = [255, 255, 255];
    pub const RED: Rgb = [239, 68, 68];
    pub const GREEN: Rgb = [34, 197, 94];
    /// Muzzle flashes and player bullets
    pub const GOLD: Rgb = [251, 191, 36];
    /// Blazin mode aura
    pub const BLAZE: Rgb = [249, 115, 22];
    /// Rank-and-file enemy debris
    pub const SMOKE: Rgb = [156, 163, 175];
}

/// Distance between two points
#[inline]
pub fn dist(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Circle-circle overlap test (strict, touching circles do not overlap)
#[inline]
pub fn circles_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    a.distance_squared(b) < (ra + rb) * (ra + rb)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlap_is_strict() {
        let a = Vec2::ZERO;
        let b = Vec2::new(10.0, 0.0);
        assert!(!circles_overlap(a, 5.0, b, 5.0));
        assert!(circles_overlap(a, 5.1, b, 5.0));
    }

    #[test]
    fn dist_matches_hypot() {
        let d = dist(Vec2::new(3.0, 0.0), Vec2::new(0.0, 4.0));
        assert!((d - 5.0).abs() < 1e-6);
    }
}
