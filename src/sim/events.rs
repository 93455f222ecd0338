//! Scheduled events and outbound side effects
//!
//! Anything the game defers (boss arrivals, round transitions, delayed
//! banners) is queued as a [`ScheduledEvent`] with an absolute fire tick and
//! re-checked against the live state when it fires: if the match ended or a
//! new one began in the interim, the event is a silent no-op.

use glam::Vec2;

use crate::Rgb;
use crate::roster::CharacterId;
use crate::sim::state::{GameMode, Phase, SimState};
use crate::sim::spawn;

/// Deferred effect payload
#[derive(Debug, Clone, PartialEq)]
pub enum EventKind {
    /// Boss arrival after the warning banner
    SpawnBoss { variant: CharacterId },
    /// Centered floating banner
    Banner { text: String, color: Rgb },
    /// Begin the next shootout round
    NextRound,
    /// Close out the match after the round-end celebration
    EndMatch { player_won: bool },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledEvent {
    /// Absolute sim tick this fires at (sim time freezes while paused)
    pub fire_at: u64,
    /// Match generation the event belongs to; stale generations are dropped
    pub generation: u32,
    pub kind: EventKind,
}

/// Sounds the host may play; purely observational
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundKind {
    Gunshot,
    Powerup,
    GameOver,
    Unlock,
    Select,
}

/// One-off visual celebrations rendered outside the playfield
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    /// Every 1000 points
    Milestone,
    BossDown,
    TagIn,
}

/// Fire-and-forget requests to collaborators. Never read back by the sim.
#[derive(Debug, Clone, PartialEq)]
pub enum SideEffect {
    PlaySound(SoundKind),
    UnlockCharacter(CharacterId),
    VisualFeedback(FeedbackKind, Vec2),
}

/// Fire every due event whose guard still holds
pub(crate) fn drain_due(state: &mut SimState) {
    if state.events.is_empty() {
        return;
    }
    let now = state.tick;
    let mut due = Vec::new();
    state.events.retain(|ev| {
        if ev.fire_at <= now {
            due.push(ev.clone());
            false
        } else {
            true
        }
    });
    for ev in due {
        fire(state, ev);
    }
}

fn fire(state: &mut SimState, ev: ScheduledEvent) {
    // Guards: the delay may have outlived the match that scheduled this.
    if ev.generation != state.match_generation || state.phase != Phase::Playing {
        log::debug!("dropping stale event {:?}", ev.kind);
        return;
    }
    match ev.kind {
        EventKind::SpawnBoss { variant } => {
            if state.mode == GameMode::Endless && state.boss_active {
                spawn::spawn_boss_now(state, variant);
            }
        }
        EventKind::Banner { text, color } => state.banner(&text, color),
        EventKind::NextRound => state.start_match(false),
        EventKind::EndMatch { player_won } => {
            if player_won {
                state.phase = Phase::Victory;
                log::info!("match won {}-{}", state.match_state.player_wins, state.match_state.enemy_wins);
            } else {
                state.end_game();
            }
        }
    }
}
