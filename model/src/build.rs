//! The build descriptor and its skill/trait sections.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::equipment::{duplicate_slot, EquipmentPiece, EquipmentSlot};
use crate::profession::{GameMode, Profession};

/// The five fixed skill slots.
///
/// Slot identity matters: a build with only `utility2` set is a different
/// build from one with only `heal` set, and every codec preserves that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SkillSelection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heal: Option<NonZeroU32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utility1: Option<NonZeroU32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utility2: Option<NonZeroU32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utility3: Option<NonZeroU32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elite: Option<NonZeroU32>,
}

impl SkillSelection {
    /// The fixed wire order: heal, utility1, utility2, utility3, elite.
    #[must_use]
    pub const fn as_array(self) -> [Option<NonZeroU32>; 5] {
        [
            self.heal,
            self.utility1,
            self.utility2,
            self.utility3,
            self.elite,
        ]
    }

    /// Rebuilds a selection from the fixed wire order.
    #[must_use]
    pub const fn from_array(slots: [Option<NonZeroU32>; 5]) -> Self {
        Self {
            heal: slots[0],
            utility1: slots[1],
            utility2: slots[2],
            utility3: slots[3],
            elite: slots[4],
        }
    }

    /// Returns `true` if no skill slot is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.as_array().iter().all(Option::is_none)
    }
}

/// One specialization line: the specialization and its three tier choices.
///
/// The choice triple always has exactly three positions; `None` at any
/// position independently means that tier is not chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpecLine {
    pub spec: Option<NonZeroU32>,
    pub choices: [Option<NonZeroU32>; 3],
}

impl SpecLine {
    /// Creates a line.
    #[must_use]
    pub const fn new(spec: Option<NonZeroU32>, choices: [Option<NonZeroU32>; 3]) -> Self {
        Self { spec, choices }
    }

    /// Returns `true` if neither the specialization nor any choice is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spec.is_none() && self.choices.iter().all(Option::is_none)
    }
}

fn choices_empty(choices: &[Option<NonZeroU32>; 3]) -> bool {
    choices.iter().all(Option::is_none)
}

/// The up-to-three specialization lines of a build.
///
/// Stored flat because the serde field names (`spec1`, `spec1Choices`, ...)
/// are frozen wire contract; [`TraitSelection::lines`] gives the indexed
/// view the codecs work with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TraitSelection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec1: Option<NonZeroU32>,
    #[serde(
        rename = "spec1Choices",
        default,
        skip_serializing_if = "choices_empty"
    )]
    pub spec1_choices: [Option<NonZeroU32>; 3],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec2: Option<NonZeroU32>,
    #[serde(
        rename = "spec2Choices",
        default,
        skip_serializing_if = "choices_empty"
    )]
    pub spec2_choices: [Option<NonZeroU32>; 3],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec3: Option<NonZeroU32>,
    #[serde(
        rename = "spec3Choices",
        default,
        skip_serializing_if = "choices_empty"
    )]
    pub spec3_choices: [Option<NonZeroU32>; 3],
}

impl TraitSelection {
    /// The three lines in slot order.
    #[must_use]
    pub const fn lines(self) -> [SpecLine; 3] {
        [
            SpecLine::new(self.spec1, self.spec1_choices),
            SpecLine::new(self.spec2, self.spec2_choices),
            SpecLine::new(self.spec3, self.spec3_choices),
        ]
    }

    /// Rebuilds a selection from three lines in slot order.
    #[must_use]
    pub const fn from_lines(lines: [SpecLine; 3]) -> Self {
        Self {
            spec1: lines[0].spec,
            spec1_choices: lines[0].choices,
            spec2: lines[1].spec,
            spec2_choices: lines[1].choices,
            spec3: lines[2].spec,
            spec3_choices: lines[2].choices,
        }
    }

    /// Returns `true` if no line is occupied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines().iter().all(SpecLine::is_empty)
    }
}

/// The complete, serializable description of one character build.
///
/// A descriptor is transient: the UI constructs one to produce a share
/// string, or a decoder reconstructs one to populate the UI. The codec holds
/// no storage of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildDescriptor {
    pub profession: Profession,
    #[serde(rename = "gameMode")]
    pub game_mode: GameMode,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub equipment: Vec<EquipmentPiece>,
    #[serde(default, skip_serializing_if = "SkillSelection::is_empty")]
    pub skills: SkillSelection,
    #[serde(default, skip_serializing_if = "TraitSelection::is_empty")]
    pub traits: TraitSelection,
    #[serde(rename = "runeId", default, skip_serializing_if = "Option::is_none")]
    pub rune_id: Option<NonZeroU32>,
    #[serde(rename = "relicId", default, skip_serializing_if = "Option::is_none")]
    pub relic_id: Option<NonZeroU32>,
}

impl BuildDescriptor {
    /// Creates an empty build for a profession and game mode.
    #[must_use]
    pub const fn new(profession: Profession, game_mode: GameMode) -> Self {
        Self {
            profession,
            game_mode,
            equipment: Vec::new(),
            skills: SkillSelection {
                heal: None,
                utility1: None,
                utility2: None,
                utility3: None,
                elite: None,
            },
            traits: TraitSelection {
                spec1: None,
                spec1_choices: [None; 3],
                spec2: None,
                spec2_choices: [None; 3],
                spec3: None,
                spec3_choices: [None; 3],
            },
            rune_id: None,
            relic_id: None,
        }
    }

    /// Returns the first equipment slot claimed twice, if any.
    #[must_use]
    pub fn duplicate_slot(&self) -> Option<EquipmentSlot> {
        duplicate_slot(&self.equipment)
    }
}
