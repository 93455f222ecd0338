//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Damage and expiry land on entity fields; membership changes only in the
//!   end-of-tick prune pass
//! - No rendering, audio or platform dependencies

pub mod combat;
pub mod entity;
pub mod events;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;

pub use entity::{Bullet, Enemy, EnemyKind, FloatingText, Particle, Powerup, PowerupKind};
pub use events::{EventKind, FeedbackKind, ScheduledEvent, SideEffect, SoundKind};
pub use snapshot::{OpponentStatus, UiSnapshot, project};
pub use state::{
    Backdrop, Blazin, GameMode, MatchState, Phase, Player, SimState, StageId, TeamSide,
};
pub use tick::{TickInput, TickOutput, tick};
