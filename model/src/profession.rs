//! Profession and game-mode enumerations.
//!
//! Both enums are packed into fixed-width wire fields by index, so their
//! declaration order is frozen. See the binary codec for the packed layout.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownName;

/// The nine playable professions.
///
/// Declaration order is the wire index order (0-8) and must never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Profession {
    Guardian,
    Warrior,
    Engineer,
    Ranger,
    Thief,
    Elementalist,
    Mesmer,
    Necromancer,
    Revenant,
}

impl Profession {
    /// All professions in wire index order.
    pub const ALL: [Self; 9] = [
        Self::Guardian,
        Self::Warrior,
        Self::Engineer,
        Self::Ranger,
        Self::Thief,
        Self::Elementalist,
        Self::Mesmer,
        Self::Necromancer,
        Self::Revenant,
    ];

    /// Returns the wire index (0-8).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Resolves a wire index back to a profession.
    ///
    /// Returns `None` for indices outside 0-8; the caller decides how to
    /// report that (it is corrupt wire data, not a wrappable value).
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Guardian),
            1 => Some(Self::Warrior),
            2 => Some(Self::Engineer),
            3 => Some(Self::Ranger),
            4 => Some(Self::Thief),
            5 => Some(Self::Elementalist),
            6 => Some(Self::Mesmer),
            7 => Some(Self::Necromancer),
            8 => Some(Self::Revenant),
            _ => None,
        }
    }

    /// Returns the canonical name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Guardian => "Guardian",
            Self::Warrior => "Warrior",
            Self::Engineer => "Engineer",
            Self::Ranger => "Ranger",
            Self::Thief => "Thief",
            Self::Elementalist => "Elementalist",
            Self::Mesmer => "Mesmer",
            Self::Necromancer => "Necromancer",
            Self::Revenant => "Revenant",
        }
    }
}

impl fmt::Display for Profession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Profession {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| UnknownName::new("profession", s))
    }
}

/// The three game modes a build can target.
///
/// Declaration order is the wire index order (0-2) and must never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameMode {
    #[default]
    PvE,
    PvP,
    WvW,
}

impl GameMode {
    /// All game modes in wire index order.
    pub const ALL: [Self; 3] = [Self::PvE, Self::PvP, Self::WvW];

    /// Returns the wire index (0-2).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Resolves a wire index back to a game mode.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::PvE),
            1 => Some(Self::PvP),
            2 => Some(Self::WvW),
            _ => None,
        }
    }

    /// Returns the canonical name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PvE => "PvE",
            Self::PvP => "PvP",
            Self::WvW => "WvW",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameMode {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| UnknownName::new("game mode", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profession_indices_are_frozen() {
        assert_eq!(Profession::Guardian.index(), 0);
        assert_eq!(Profession::Warrior.index(), 1);
        assert_eq!(Profession::Engineer.index(), 2);
        assert_eq!(Profession::Ranger.index(), 3);
        assert_eq!(Profession::Thief.index(), 4);
        assert_eq!(Profession::Elementalist.index(), 5);
        assert_eq!(Profession::Mesmer.index(), 6);
        assert_eq!(Profession::Necromancer.index(), 7);
        assert_eq!(Profession::Revenant.index(), 8);
    }

    #[test]
    fn profession_index_roundtrip() {
        for profession in Profession::ALL {
            assert_eq!(Profession::from_index(profession.index()), Some(profession));
        }
    }

    #[test]
    fn profession_from_index_rejects_out_of_range() {
        assert_eq!(Profession::from_index(9), None);
        assert_eq!(Profession::from_index(255), None);
    }

    #[test]
    fn profession_name_roundtrip() {
        for profession in Profession::ALL {
            assert_eq!(profession.as_str().parse(), Ok(profession));
        }
    }

    #[test]
    fn profession_rejects_unknown_name() {
        let err = "Bard".parse::<Profession>().unwrap_err();
        assert_eq!(err.kind, "profession");
        assert_eq!(err.name, "Bard");
    }

    #[test]
    fn profession_serde_uses_canonical_names() {
        let json = serde_json::to_string(&Profession::Elementalist).unwrap();
        assert_eq!(json, "\"Elementalist\"");
        let back: Profession = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Profession::Elementalist);
    }

    #[test]
    fn game_mode_indices_are_frozen() {
        assert_eq!(GameMode::PvE.index(), 0);
        assert_eq!(GameMode::PvP.index(), 1);
        assert_eq!(GameMode::WvW.index(), 2);
    }

    #[test]
    fn game_mode_index_roundtrip() {
        for mode in GameMode::ALL {
            assert_eq!(GameMode::from_index(mode.index()), Some(mode));
        }
        assert_eq!(GameMode::from_index(3), None);
    }

    #[test]
    fn game_mode_name_roundtrip() {
        for mode in GameMode::ALL {
            assert_eq!(mode.as_str().parse(), Ok(mode));
        }
    }

    #[test]
    fn game_mode_default_is_pve() {
        assert_eq!(GameMode::default(), GameMode::PvE);
    }
}
