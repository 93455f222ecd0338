//! Fighter catalog and boss rotation
//!
//! Static data: every playable identity, which ones start unlocked, and the
//! ordered roster bosses are drawn from. Lookups never fail - an unknown id
//! resolves to the default fighter so a bad selector can't break a tick.

/// Stable identity key for a fighter
pub type CharacterId = &'static str;

/// One entry of the fighter catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Character {
    pub id: CharacterId,
    /// Display name (upper-case, marquee style)
    pub name: &'static str,
    pub hometown: &'static str,
    pub weapon: &'static str,
    /// Some fighters shoot a custom projectile sprite
    pub bullet_sprite: Option<&'static str>,
    /// Available from a fresh save
    pub default_unlocked: bool,
}

/// Full catalog. Order is cosmetic (select-screen grid order).
pub const CHARACTERS: &[Character] = &[
    Character {
        id: "ace",
        name: "ACE",
        hometown: "SOUTHSIDE",
        weapon: "RIFLE",
        bullet_sprite: None,
        default_unlocked: true,
    },
    Character {
        id: "nova",
        name: "NOVA",
        hometown: "EASTGATE",
        weapon: "TOMMY GUN",
        bullet_sprite: None,
        default_unlocked: true,
    },
    Character {
        id: "frank",
        name: "FRANKS",
        hometown: "BOARDWALK",
        weapon: "DOG CANNON",
        bullet_sprite: Some("bullet_frank"),
        default_unlocked: true,
    },
    Character {
        id: "viper",
        name: "VIPER",
        hometown: "OLD DOCKS",
        weapon: "HAND GUN",
        bullet_sprite: None,
        default_unlocked: false,
    },
    Character {
        id: "goliath",
        name: "GOLIATH",
        hometown: "IRONWORKS",
        weapon: "PISTOL",
        bullet_sprite: None,
        default_unlocked: false,
    },
    Character {
        id: "specter",
        name: "SPECTER",
        hometown: "MIDTOWN",
        weapon: "MACHINE GUN",
        bullet_sprite: None,
        default_unlocked: false,
    },
    Character {
        id: "duchess",
        name: "DUCHESS",
        hometown: "UPTOWN",
        weapon: "GOLDEN REVOLVER",
        bullet_sprite: None,
        default_unlocked: false,
    },
    Character {
        id: "torch",
        name: "TORCH",
        hometown: "FURNACE ROW",
        weapon: "FLARE GUN",
        bullet_sprite: Some("bullet_flare"),
        default_unlocked: false,
    },
    Character {
        id: "malice",
        name: "MALICE",
        hometown: "THE PITS",
        weapon: "MACHINE GUN",
        bullet_sprite: None,
        default_unlocked: false,
    },
    Character {
        id: "sable",
        name: "SABLE",
        hometown: "HARBORVIEW",
        weapon: "CROSSBOW",
        bullet_sprite: Some("bullet_bolt"),
        default_unlocked: false,
    },
    Character {
        id: "riot",
        name: "RIOT",
        hometown: "BLOCK 55",
        weapon: "SCATTER GUN",
        bullet_sprite: None,
        default_unlocked: false,
    },
    Character {
        id: "omen",
        name: "OMEN",
        hometown: "UNKNOWN",
        weapon: "REVOLVER",
        bullet_sprite: None,
        default_unlocked: false,
    },
];

/// Fallback identity for failed lookups
pub const DEFAULT_CHARACTER: CharacterId = "ace";

/// Fallback opponent when a shootout roster is somehow empty
pub const DEFAULT_OPPONENT: CharacterId = "viper";

/// Fixed rotation bosses are drawn from, wrapping past the end.
/// Independent of the unlock roster: defeating a boss is what unlocks it.
pub const BOSS_ROSTER: &[CharacterId] = &[
    "viper", "goliath", "specter", "duchess", "torch", "malice", "sable", "riot", "omen",
];

/// Look up a fighter by id, falling back to the default fighter
pub fn character(id: &str) -> &'static Character {
    CHARACTERS
        .iter()
        .find(|c| c.id == id)
        .unwrap_or(&CHARACTERS[0])
}

/// Whether an id names a real catalog entry
pub fn is_known(id: &str) -> bool {
    CHARACTERS.iter().any(|c| c.id == id)
}

/// Ids unlocked on a fresh save
pub fn default_unlocked() -> Vec<String> {
    CHARACTERS
        .iter()
        .filter(|c| c.default_unlocked)
        .map(|c| c.id.to_string())
        .collect()
}

/// Boss identity for a given wave: every third wave indexes into the
/// rotation by `wave / 3 - 1`, wrapping.
pub fn boss_for_wave(wave: u32) -> &'static Character {
    let index = (wave / 3).saturating_sub(1) as usize % BOSS_ROSTER.len();
    character(BOSS_ROSTER[index])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_id_falls_back_to_default() {
        assert_eq!(character("nobody").id, DEFAULT_CHARACTER);
    }

    #[test]
    fn boss_rotation_wraps() {
        assert_eq!(boss_for_wave(3).id, BOSS_ROSTER[0]);
        assert_eq!(boss_for_wave(6).id, BOSS_ROSTER[1]);
        let wraps_at = (BOSS_ROSTER.len() as u32 + 1) * 3;
        assert_eq!(boss_for_wave(wraps_at).id, BOSS_ROSTER[0]);
    }

    #[test]
    fn defaults_are_known() {
        assert!(is_known(DEFAULT_CHARACTER));
        assert!(is_known(DEFAULT_OPPONENT));
        assert_eq!(default_unlocked().len(), 3);
    }

    #[test]
    fn boss_roster_ids_are_known() {
        for id in BOSS_ROSTER {
            assert!(is_known(id), "{id} missing from catalog");
        }
    }
}
