//! Difficulty scalars and persisted unlocks
//!
//! Configuration the simulation consumes but does not own. Difficulty feeds
//! two independent multipliers (enemy stats, damage taken); unlocks gate the
//! select screens and grow when bosses fall.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::roster::{self, CharacterId};

/// Difficulty presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "normal" | "default" => Some(Difficulty::Normal),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Multiplier applied to enemy HP at spawn time
    pub fn stat_multiplier(&self) -> f32 {
        match self {
            Difficulty::Easy => 0.7,
            Difficulty::Normal => 1.0,
            Difficulty::Hard => 1.5,
        }
    }

    /// Multiplier applied to damage the player takes
    pub fn damage_multiplier(&self) -> f32 {
        match self {
            Difficulty::Easy => 0.5,
            Difficulty::Normal => 1.0,
            Difficulty::Hard => 1.5,
        }
    }
}

/// Player preferences sampled by the simulation
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Settings {
    pub difficulty: Difficulty,
}

impl Settings {
    /// Load settings from a JSON file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("settings file unreadable ({err}), using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no settings file, using defaults");
                Self::default()
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, json)
    }
}

/// The set of fighters available on the select screens.
///
/// Seeded with the three starters; boss defeats add entries. Ids are stored
/// owned so the file survives catalog reshuffles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Unlocks {
    ids: Vec<String>,
}

impl Default for Unlocks {
    fn default() -> Self {
        Self {
            ids: roster::default_unlocked(),
        }
    }
}

impl Unlocks {
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|u| u == id)
    }

    /// Add an unlock. Returns true if it was newly added.
    pub fn add(&mut self, id: CharacterId) -> bool {
        if !roster::is_known(id) || self.contains(id) {
            return false;
        }
        self.ids.push(id.to_string());
        log::info!("fighter unlocked: {id}");
        true
    }

    /// Unlock the whole catalog (cheat/debug path)
    pub fn unlock_all(&mut self) {
        self.ids = roster::CHARACTERS.iter().map(|c| c.id.to_string()).collect();
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Load unlocks from a JSON file, falling back to the starter set
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<Unlocks>(&json) {
                Ok(unlocks) => {
                    log::info!("loaded {} unlocks", unlocks.ids.len());
                    unlocks
                }
                Err(err) => {
                    log::warn!("unlock file unreadable ({err}), starting fresh");
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no unlock file, starting fresh");
                Self::default()
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, json)
    }
}
