//! Game state and command entry points
//!
//! All mutable simulation state lives in one [`SimState`] aggregate owned by
//! the tick function. External code interacts through the command methods
//! here (menu flow, pause, swap, special activation) and through
//! [`crate::sim::tick::TickInput`]; nothing outside the sim mutates fields
//! directly.

use std::collections::HashMap;
use std::f32::consts::TAU;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;

use crate::consts::*;
use crate::roster::{self, CharacterId};
use crate::settings::{Difficulty, Settings, Unlocks};
use crate::sim::entity::{
    Bullet, Enemy, FloatingText, Particle, Powerup, PowerupKind,
};
use crate::sim::events::{EventKind, ScheduledEvent, SideEffect, SoundKind};
use crate::sim::spawn;
use crate::{Rgb, colors};

/// Top-level flow state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    Menu,
    CharacterSelect,
    /// Shootout only: pick the opposing team
    OpponentSelect,
    StageSelect,
    Playing,
    Paused,
    GameOver,
    Victory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameMode {
    /// Endless wave survival, scored by wave/score
    Endless,
    /// Best-of-three team elimination
    Shootout,
}

/// Cosmetic arena selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub enum StageId {
    #[default]
    Backlot,
    NeonClub,
    Rooftop,
}

impl StageId {
    pub fn as_str(&self) -> &'static str {
        match self {
            StageId::Backlot => "THE BACKLOT",
            StageId::NeonClub => "NEON CLUB",
            StageId::Rooftop => "ROOFTOP ROW",
        }
    }
}

/// Meter-gated temporary combat buff
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Blazin {
    /// 0..=100; fills on kills while inactive
    pub meter: f32,
    pub active: bool,
    pub timer: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub pos: Vec2,
    /// Movement applied this tick; fast enemies lead against it
    pub vel: Vec2,
    pub radius: f32,
    /// Aim angle toward the pointer target (radians)
    pub rotation: f32,
    pub hp: f32,
    pub max_hp: f32,
    pub score: u64,
    pub fire_cooldown: i32,
    /// Cosmetic kickback, decays multiplicatively
    pub recoil: f32,
    pub muzzle_flash: i32,
    pub active_powerup: Option<PowerupKind>,
    pub powerup_ticks: i32,
    pub character: CharacterId,
    pub blazin: Blazin,
}

impl Player {
    pub fn new(character: CharacterId, pos: Vec2, radius: f32, hp: f32, max_hp: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius,
            rotation: 0.0,
            hp,
            max_hp,
            score: 0,
            fire_cooldown: 0,
            recoil: 0.0,
            muzzle_flash: 0,
            active_powerup: None,
            powerup_ticks: 0,
            character,
            blazin: Blazin::default(),
        }
    }
}

/// Shootout match bookkeeping; first to [`WINS_PER_MATCH`] takes it
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MatchState {
    pub player_wins: u32,
    pub enemy_wins: u32,
    pub round: u32,
    pub round_active: bool,
}

/// One side's roster with per-fighter banked HP
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamSide {
    pub roster: Vec<CharacterId>,
    /// HP carried across tags and rounds, keyed by fighter
    pub banked_hp: HashMap<CharacterId, f32>,
    pub active_idx: usize,
}

impl TeamSide {
    pub fn active(&self) -> Option<CharacterId> {
        self.roster.get(self.active_idx).copied()
    }
}

/// Drifting background cloud; animates even while paused
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cloud {
    pub pos: Vec2,
    pub scale: f32,
    pub speed: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Backdrop {
    pub clouds: Vec<Cloud>,
}

impl Backdrop {
    fn new(rng: &mut Pcg32) -> Self {
        let clouds = (0..8)
            .map(|_| Cloud {
                pos: Vec2::new(
                    rng.random_range(0.0..VIEW_WIDTH),
                    rng.random_range(0.0..VIEW_HEIGHT * 0.4),
                ),
                scale: rng.random_range(0.5..1.0),
                speed: rng.random_range(0.1..0.3),
            })
            .collect();
        Self { clouds }
    }

    pub(crate) fn advance(&mut self) {
        for cloud in &mut self.clouds {
            cloud.pos.x -= cloud.speed;
            if cloud.pos.x < -200.0 {
                cloud.pos.x = VIEW_WIDTH + 200.0;
            }
        }
    }
}

/// The complete simulation state
#[derive(Debug, Clone)]
pub struct SimState {
    pub phase: Phase,
    pub mode: GameMode,
    pub stage: StageId,
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    /// Sim time in ticks; frozen while paused
    pub tick: u64,
    /// Host callback count; keeps advancing while paused
    pub frames: u64,

    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub bullets: Vec<Bullet>,
    pub particles: Vec<Particle>,
    pub powerups: Vec<Powerup>,
    pub texts: Vec<FloatingText>,

    pub match_state: MatchState,
    pub player_team: TeamSide,
    pub enemy_team: TeamSide,

    pub wave: u32,
    /// Intermission countdown between waves
    pub wave_timer: i32,
    /// Enemies still owed this wave
    pub to_spawn: u32,
    pub spawn_timer: i32,
    /// Suppresses normal spawning during a boss encounter
    pub boss_active: bool,

    pub screen_shake: f32,
    /// Active warning overlay (text, ticks remaining)
    pub warning: Option<(String, i32)>,
    /// Score at the last 1000-point celebration
    pub last_milestone: u64,

    pub events: Vec<ScheduledEvent>,
    /// Bumped on every fresh match; invalidates pending events
    pub match_generation: u32,
    /// Outbox drained into each TickOutput
    pub effects: Vec<SideEffect>,

    pub settings: Settings,
    pub unlocks: Unlocks,
    pub backdrop: Backdrop,

    /// Select-screen scratch: toggled picks for the current side
    pub pick_buffer: Vec<CharacterId>,
    pub team_size: usize,
}

impl SimState {
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let backdrop = Backdrop::new(&mut rng);
        Self {
            phase: Phase::Menu,
            mode: GameMode::Endless,
            stage: StageId::default(),
            seed,
            rng,
            tick: 0,
            frames: 0,
            player: Player::new(
                roster::DEFAULT_CHARACTER,
                Vec2::new(PLAYER_START_X, PLAYER_FLOOR_Y),
                PLAYER_RADIUS,
                PLAYER_MAX_HP,
                PLAYER_MAX_HP,
            ),
            enemies: Vec::new(),
            bullets: Vec::new(),
            particles: Vec::new(),
            powerups: Vec::new(),
            texts: Vec::new(),
            match_state: MatchState::default(),
            player_team: TeamSide::default(),
            enemy_team: TeamSide::default(),
            wave: 1,
            wave_timer: 0,
            to_spawn: 0,
            spawn_timer: 0,
            boss_active: false,
            screen_shake: 0.0,
            warning: None,
            last_milestone: 0,
            events: Vec::new(),
            match_generation: 0,
            effects: Vec::new(),
            settings: Settings::default(),
            unlocks: Unlocks::default(),
            backdrop,
            pick_buffer: Vec::new(),
            team_size: 1,
        }
    }

    // === Command entry points (consumed by the UI layer) ===

    pub fn select_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.pick_buffer.clear();
        self.player_team = TeamSide::default();
        self.enemy_team = TeamSide::default();
        self.phase = Phase::CharacterSelect;
        self.effect(SideEffect::PlaySound(SoundKind::Select));
    }

    /// Fighters per side in shootout mode
    pub fn set_team_size(&mut self, size: usize) {
        self.team_size = size.clamp(1, 3);
    }

    /// Toggle a fighter on the current select screen. Locked or unknown ids
    /// are rejected; picking past the cap replaces the selection.
    pub fn toggle_pick(&mut self, id: &str) {
        if !matches!(self.phase, Phase::CharacterSelect | Phase::OpponentSelect) {
            return;
        }
        if !roster::is_known(id) || !self.unlocks.contains(id) {
            log::debug!("rejected pick {id:?}");
            return;
        }
        let id = roster::character(id).id;
        let cap = match (self.phase, self.mode) {
            (Phase::CharacterSelect, GameMode::Endless) => 1,
            _ => self.team_size,
        };
        if let Some(at) = self.pick_buffer.iter().position(|&p| p == id) {
            self.pick_buffer.remove(at);
        } else if self.pick_buffer.len() < cap {
            self.pick_buffer.push(id);
        } else {
            self.pick_buffer.clear();
            self.pick_buffer.push(id);
        }
        self.effect(SideEffect::PlaySound(SoundKind::Select));
    }

    /// Lock in the current side's picks and advance the select flow
    pub fn confirm_roster(&mut self) {
        match self.phase {
            Phase::CharacterSelect => {
                if self.pick_buffer.is_empty() {
                    if self.mode == GameMode::Shootout {
                        return;
                    }
                    self.pick_buffer.push(roster::DEFAULT_CHARACTER);
                }
                self.player_team.roster = std::mem::take(&mut self.pick_buffer);
                self.phase = match self.mode {
                    GameMode::Shootout => Phase::OpponentSelect,
                    GameMode::Endless => Phase::StageSelect,
                };
            }
            Phase::OpponentSelect => {
                if self.pick_buffer.is_empty() {
                    return;
                }
                self.enemy_team.roster = std::mem::take(&mut self.pick_buffer);
                self.phase = Phase::StageSelect;
            }
            _ => {}
        }
    }

    pub fn select_stage(&mut self, stage: StageId) {
        self.stage = stage;
        self.effect(SideEffect::PlaySound(SoundKind::Select));
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.settings.difficulty = difficulty;
    }

    /// Begin play. `reset` starts a fresh match; `false` starts the next
    /// shootout round with banked HP and win counters intact.
    pub fn start_match(&mut self, reset: bool) {
        let shootout = self.mode == GameMode::Shootout;
        if reset {
            self.match_generation += 1;
            self.events.clear();
            self.player_team.active_idx = 0;
            self.enemy_team.active_idx = 0;
            self.player_team.banked_hp.clear();
            self.enemy_team.banked_hp.clear();
            if shootout {
                let enemy_hp = SHOOTOUT_MAX_HP * self.settings.difficulty.stat_multiplier();
                for &id in &self.player_team.roster {
                    self.player_team.banked_hp.insert(id, SHOOTOUT_MAX_HP);
                }
                for &id in &self.enemy_team.roster {
                    self.enemy_team.banked_hp.insert(id, enemy_hp);
                }
            }
            self.match_state = MatchState {
                player_wins: 0,
                enemy_wins: 0,
                round: 1,
                round_active: shootout,
            };
            self.wave = 1;
            self.wave_timer = 0;
            self.to_spawn = FIRST_WAVE_COUNT;
            self.spawn_timer = 0;
            self.player.score = 0;
        } else {
            self.match_state.round_active = true;
        }

        let character = self
            .player_team
            .active()
            .unwrap_or(roster::DEFAULT_CHARACTER);
        let (hp, max_hp, radius) = if shootout {
            let banked = self
                .player_team
                .banked_hp
                .get(character)
                .copied()
                .unwrap_or(SHOOTOUT_MAX_HP);
            (banked, SHOOTOUT_MAX_HP, PLAYER_RADIUS_SHOOTOUT)
        } else {
            (PLAYER_MAX_HP, PLAYER_MAX_HP, PLAYER_RADIUS)
        };
        let score = self.player.score;
        self.player = Player::new(
            character,
            Vec2::new(PLAYER_START_X, PLAYER_FLOOR_Y),
            radius,
            hp,
            max_hp,
        );
        self.player.score = score;

        self.enemies.clear();
        self.bullets.clear();
        self.particles.clear();
        self.powerups.clear();
        self.texts.clear();
        self.screen_shake = 0.0;
        self.boss_active = false;
        self.warning = None;
        self.last_milestone = 0;

        if shootout {
            spawn::spawn_rival(self);
            let round = self.match_state.round;
            self.banner(&format!("ROUND {round}"), colors::GOLD);
            self.schedule(
                60,
                EventKind::Banner {
                    text: "FIGHT!".into(),
                    color: colors::RED,
                },
            );
        }
        self.phase = Phase::Playing;
        log::info!(
            "match {} started: mode={:?} reset={reset} difficulty={}",
            self.match_generation,
            self.mode,
            self.settings.difficulty.as_str()
        );
    }

    pub fn pause(&mut self) {
        if self.phase == Phase::Playing {
            self.phase = Phase::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.phase == Phase::Paused {
            self.phase = Phase::Playing;
        }
    }

    pub fn exit_to_menu(&mut self) {
        self.match_generation += 1;
        self.events.clear();
        self.enemies.clear();
        self.bullets.clear();
        self.particles.clear();
        self.powerups.clear();
        self.texts.clear();
        self.warning = None;
        self.boss_active = false;
        self.phase = Phase::Menu;
    }

    /// From a terminal screen, run it back
    pub fn restart(&mut self) {
        if matches!(self.phase, Phase::GameOver | Phase::Victory) {
            self.start_match(true);
        }
    }

    /// Tag in the next fighter on the roster, banking the outgoing HP
    pub fn swap_fighter(&mut self) {
        if self.mode != GameMode::Shootout
            || !self.match_state.round_active
            || self.player_team.roster.len() < 2
        {
            return;
        }
        let outgoing = self.player_team.roster[self.player_team.active_idx];
        self.player_team.banked_hp.insert(outgoing, self.player.hp);
        self.player_team.active_idx =
            (self.player_team.active_idx + 1) % self.player_team.roster.len();
        let incoming = self.player_team.roster[self.player_team.active_idx];
        self.player.character = incoming;
        self.player.hp = self
            .player_team
            .banked_hp
            .get(incoming)
            .copied()
            .unwrap_or(SHOOTOUT_MAX_HP);
        let pos = self.player.pos;
        self.spawn_text(pos, "TAG IN!", colors::WHITE);
        self.spawn_particles(pos, colors::WHITE, 20, 10.0, 5.0);
        self.effect(SideEffect::VisualFeedback(
            crate::sim::events::FeedbackKind::TagIn,
            pos,
        ));
        self.effect(SideEffect::PlaySound(SoundKind::Select));
    }

    /// Fire the special: requires a full meter and not already active
    pub fn activate_blazin(&mut self) {
        if self.player.blazin.meter < BLAZIN_METER_MAX || self.player.blazin.active {
            return;
        }
        self.player.blazin = Blazin {
            meter: 0.0,
            active: true,
            timer: BLAZIN_DURATION,
        };
        let pos = self.player.pos;
        self.spawn_text(pos, "BLAZIN MODE!", colors::BLAZE);
        self.spawn_particles(pos, colors::BLAZE, 50, 15.0, 10.0);
        self.screen_shake = 10.0;
        self.effect(SideEffect::PlaySound(SoundKind::Powerup));
    }

    // === Internal transitions ===

    /// Resolve a finished shootout round and schedule what follows
    pub(crate) fn round_end(&mut self, player_won: bool) {
        if !self.match_state.round_active {
            return;
        }
        self.match_state.round_active = false;
        let center = Vec2::new(VIEW_WIDTH / 2.0, VIEW_HEIGHT / 2.0);
        if player_won {
            self.match_state.player_wins += 1;
            self.spawn_text(center, "YOU WIN THE ROUND!", colors::GREEN);
        } else {
            self.match_state.enemy_wins += 1;
            self.spawn_text(center, "ROUND LOST!", colors::RED);
        }
        if self.match_state.player_wins >= WINS_PER_MATCH {
            self.schedule(ROUND_END_DELAY, EventKind::EndMatch { player_won: true });
        } else if self.match_state.enemy_wins >= WINS_PER_MATCH {
            self.schedule(ROUND_END_DELAY, EventKind::EndMatch { player_won: false });
        } else {
            self.match_state.round += 1;
            self.schedule(ROUND_END_DELAY, EventKind::NextRound);
        }
        log::info!(
            "round over ({}): {}-{}",
            if player_won { "player" } else { "enemy" },
            self.match_state.player_wins,
            self.match_state.enemy_wins
        );
    }

    /// Player HP hit zero; ends the run or the round depending on mode
    pub(crate) fn player_down(&mut self) {
        if self.phase != Phase::Playing {
            return;
        }
        self.player.hp = 0.0;
        match self.mode {
            GameMode::Endless => self.end_game(),
            GameMode::Shootout => self.round_end(false),
        }
    }

    pub(crate) fn end_game(&mut self) {
        self.phase = Phase::GameOver;
        self.effect(SideEffect::PlaySound(SoundKind::GameOver));
        log::info!(
            "game over: wave {} score {}",
            self.wave,
            self.player.score
        );
    }

    // === Spawn helpers ===

    pub(crate) fn schedule(&mut self, delay: u64, kind: EventKind) {
        self.events.push(ScheduledEvent {
            fire_at: self.tick + delay,
            generation: self.match_generation,
            kind,
        });
    }

    pub(crate) fn effect(&mut self, effect: SideEffect) {
        self.effects.push(effect);
    }

    pub(crate) fn spawn_particles(
        &mut self,
        pos: Vec2,
        color: Rgb,
        count: usize,
        speed: f32,
        size: f32,
    ) {
        for _ in 0..count {
            let angle = self.rng.random_range(0.0..TAU);
            let vel = self.rng.random_range(1.0..speed);
            self.particles.push(Particle {
                pos,
                vel: Vec2::new(angle.cos(), angle.sin()) * vel,
                radius: self.rng.random_range(1.0..size),
                rotation: self.rng.random_range(0.0..TAU),
                life: self.rng.random_range(20..50),
                max_life: 50,
                color,
                size,
            });
        }
    }

    pub(crate) fn spawn_text(&mut self, pos: Vec2, text: impl Into<String>, color: Rgb) {
        self.texts.push(FloatingText::new(pos, text, color));
    }

    /// Centered event banner
    pub(crate) fn banner(&mut self, text: &str, color: Rgb) {
        self.spawn_text(
            Vec2::new(VIEW_WIDTH / 2.0, VIEW_HEIGHT / 2.0),
            text,
            color,
        );
    }

    /// Chance-based powerup drop at a kill site
    pub(crate) fn roll_powerup(&mut self, pos: Vec2) {
        if self.rng.random_range(0.0..1.0f32) > POWERUP_DROP_CHANCE {
            return;
        }
        let kind = match self.rng.random_range(0..3) {
            0 => PowerupKind::Heal,
            1 => PowerupKind::RapidFire,
            _ => PowerupKind::TripleShot,
        };
        self.powerups.push(Powerup {
            pos,
            radius: POWERUP_RADIUS,
            kind,
            life: POWERUP_LIFE,
        });
    }
}
