//! Simulation entities
//!
//! Plain data plus constructors. Entities are damaged/expired in place
//! during a tick; only the end-of-tick prune pass removes them from their
//! collections, so nothing iterating this tick sees a vanished entity.

use glam::Vec2;
use serde::Serialize;

use crate::Rgb;
use crate::consts::*;
use crate::roster::CharacterId;

/// Enemy behavior variant. Kind-specific state lives on the variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EnemyKind {
    /// Steers straight at the player
    Basic,
    /// Quicker, leads the player's movement
    Fast,
    /// Slow ground crawler, rolls left along the ground line
    Tank,
    /// Wave boss: holds the right edge, oscillates, fires spreads
    Boss {
        variant: CharacterId,
        attack_cooldown: i32,
    },
    /// Shootout opponent: seeks an anchor, fires aimed shots
    Rival {
        variant: CharacterId,
        attack_cooldown: i32,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub pos: Vec2,
    pub radius: f32,
    pub hp: f32,
    /// Captured at spawn; health bars scale against this, not the live wave
    pub max_hp: f32,
    pub speed: f32,
    /// Score awarded on kill (endless mode)
    pub value: u64,
    pub rotation: f32,
    /// Ticks of hit feedback remaining
    pub hit_flash: i32,
    pub kind: EnemyKind,
}

impl Enemy {
    /// A rank-and-file wave enemy
    pub fn new(pos: Vec2, radius: f32, hp: f32, speed: f32, value: u64, kind: EnemyKind) -> Self {
        Self {
            pos,
            radius,
            hp,
            max_hp: hp,
            speed,
            value,
            rotation: 0.0,
            hit_flash: 0,
            kind,
        }
    }

    pub fn boss(pos: Vec2, hp: f32, variant: CharacterId) -> Self {
        Self {
            pos,
            radius: 130.0,
            hp,
            max_hp: hp,
            speed: 2.0,
            value: 5000,
            rotation: 0.0,
            hit_flash: 0,
            kind: EnemyKind::Boss {
                variant,
                attack_cooldown: 120,
            },
        }
    }

    pub fn rival(pos: Vec2, hp: f32, max_hp: f32, variant: CharacterId) -> Self {
        Self {
            pos,
            radius: 110.0,
            hp,
            max_hp,
            speed: 5.0,
            value: 0,
            rotation: std::f32::consts::PI,
            hit_flash: 0,
            kind: EnemyKind::Rival {
                variant,
                attack_cooldown: 60,
            },
        }
    }

    pub fn is_boss(&self) -> bool {
        matches!(self.kind, EnemyKind::Boss { .. })
    }

    pub fn is_rival(&self) -> bool {
        matches!(self.kind, EnemyKind::Rival { .. })
    }

    /// Boss/rival skin identity, if any
    pub fn variant(&self) -> Option<CharacterId> {
        match self.kind {
            EnemyKind::Boss { variant, .. } | EnemyKind::Rival { variant, .. } => Some(variant),
            _ => None,
        }
    }

    /// Blazin meter awarded for this kill; tougher kinds charge faster
    pub fn meter_gain(&self) -> f32 {
        match self.kind {
            EnemyKind::Basic => 7.0,
            _ => 15.0,
        }
    }

    /// Screen shake on kill
    pub fn kill_shake(&self) -> f32 {
        if self.is_boss() { 30.0 } else { 5.0 }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bullet {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub damage: f32,
    /// Remaining ticks; a hit zeroes this so the prune pass removes it
    pub life: i32,
    pub from_enemy: bool,
    pub rotation: f32,
    /// Optional sprite override for fighters with signature projectiles
    pub sprite: Option<&'static str>,
}

impl Bullet {
    /// Player shot along `angle`
    pub fn player(pos: Vec2, angle: f32, sprite: Option<&'static str>) -> Self {
        Self {
            pos,
            vel: Vec2::new(angle.cos(), angle.sin()) * BULLET_SPEED,
            radius: BULLET_RADIUS,
            damage: BULLET_DAMAGE,
            life: BULLET_LIFE,
            from_enemy: false,
            rotation: angle,
            sprite,
        }
    }

    /// Boss spread shot along `angle`
    pub fn boss_shot(pos: Vec2, angle: f32, damage: f32) -> Self {
        Self {
            pos,
            vel: Vec2::new(angle.cos(), angle.sin()) * 8.0,
            radius: 12.0,
            damage,
            life: 140,
            from_enemy: true,
            rotation: angle,
            sprite: None,
        }
    }

    /// Rival's flat aimed shot with slight vertical jitter
    pub fn rival_shot(pos: Vec2, jitter_y: f32, damage: f32) -> Self {
        Self {
            pos,
            vel: Vec2::new(-15.0, jitter_y),
            radius: 12.0,
            damage,
            life: 100,
            from_enemy: true,
            rotation: std::f32::consts::PI,
            sprite: None,
        }
    }
}

/// Cosmetic debris; never affects gameplay
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub rotation: f32,
    pub life: i32,
    pub max_life: i32,
    pub color: Rgb,
    pub size: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PowerupKind {
    Heal,
    RapidFire,
    TripleShot,
}

impl PowerupKind {
    pub fn label(&self) -> &'static str {
        match self {
            PowerupKind::Heal => "HEAL",
            PowerupKind::RapidFire => "RAPID FIRE",
            PowerupKind::TripleShot => "TRIPLE SHOT",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Powerup {
    pub pos: Vec2,
    pub radius: f32,
    pub kind: PowerupKind,
    /// Despawns when this runs out uncollected
    pub life: i32,
}

/// Transient score popups and event banners
#[derive(Debug, Clone, PartialEq)]
pub struct FloatingText {
    pub pos: Vec2,
    pub text: String,
    pub color: Rgb,
    pub life: i32,
    pub vel: Vec2,
}

impl FloatingText {
    pub fn new(pos: Vec2, text: impl Into<String>, color: Rgb) -> Self {
        Self {
            pos: Vec2::new(pos.x, pos.y - 30.0),
            text: text.into(),
            color,
            life: 50,
            vel: Vec2::new(0.0, -0.8),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_hp_is_captured_at_spawn() {
        let e = Enemy::new(Vec2::ZERO, 75.0, 180.0, 1.2, 300, EnemyKind::Tank);
        assert_eq!(e.max_hp, 180.0);
    }

    #[test]
    fn meter_gain_scales_with_toughness() {
        let basic = Enemy::new(Vec2::ZERO, 55.0, 40.0, 2.5, 50, EnemyKind::Basic);
        let fast = Enemy::new(Vec2::ZERO, 40.0, 25.0, 5.0, 100, EnemyKind::Fast);
        assert_eq!(basic.meter_gain(), 7.0);
        assert_eq!(fast.meter_gain(), 15.0);
    }

    #[test]
    fn variant_only_on_boss_and_rival() {
        let boss = Enemy::boss(Vec2::ZERO, 300.0, "viper");
        let tank = Enemy::new(Vec2::ZERO, 75.0, 150.0, 1.2, 300, EnemyKind::Tank);
        assert_eq!(boss.variant(), Some("viper"));
        assert_eq!(tank.variant(), None);
    }
}
