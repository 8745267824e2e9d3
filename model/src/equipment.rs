//! Equipment pieces and the enumerations they draw from.

use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownName;

/// The sixteen equipment slots.
///
/// Declaration order is the wire index order (0-15) and must never change:
/// the six armor slots, the six trinket slots, then the four weapon slots.
/// A descriptor may fill any subset, but each slot at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipmentSlot {
    Helm,
    Shoulders,
    Coat,
    Gloves,
    Leggings,
    Boots,
    Backpack,
    Accessory1,
    Accessory2,
    Amulet,
    Ring1,
    Ring2,
    MainHand1,
    OffHand1,
    MainHand2,
    OffHand2,
}

impl EquipmentSlot {
    /// All slots in wire index order.
    pub const ALL: [Self; 16] = [
        Self::Helm,
        Self::Shoulders,
        Self::Coat,
        Self::Gloves,
        Self::Leggings,
        Self::Boots,
        Self::Backpack,
        Self::Accessory1,
        Self::Accessory2,
        Self::Amulet,
        Self::Ring1,
        Self::Ring2,
        Self::MainHand1,
        Self::OffHand1,
        Self::MainHand2,
        Self::OffHand2,
    ];

    /// Returns the wire index (0-15).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Resolves a wire index back to a slot.
    #[must_use]
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Returns the canonical name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Helm => "Helm",
            Self::Shoulders => "Shoulders",
            Self::Coat => "Coat",
            Self::Gloves => "Gloves",
            Self::Leggings => "Leggings",
            Self::Boots => "Boots",
            Self::Backpack => "Backpack",
            Self::Accessory1 => "Accessory1",
            Self::Accessory2 => "Accessory2",
            Self::Amulet => "Amulet",
            Self::Ring1 => "Ring1",
            Self::Ring2 => "Ring2",
            Self::MainHand1 => "MainHand1",
            Self::OffHand1 => "OffHand1",
            Self::MainHand2 => "MainHand2",
            Self::OffHand2 => "OffHand2",
        }
    }

    /// Returns `true` for the four weapon slots.
    #[must_use]
    pub const fn is_weapon(self) -> bool {
        matches!(
            self,
            Self::MainHand1 | Self::OffHand1 | Self::MainHand2 | Self::OffHand2
        )
    }
}

impl fmt::Display for EquipmentSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EquipmentSlot {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|slot| slot.as_str() == s)
            .ok_or_else(|| UnknownName::new("equipment slot", s))
    }
}

macro_rules! stat_combos {
    ($($variant:ident),+ $(,)?) => {
        /// The named stat combinations a piece of equipment can carry.
        ///
        /// The set is closed but large, and it grows when the game adds new
        /// combinations. It travels on the wire by name, never by index, so
        /// appending a variant is not a format change.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum StatCombo {
            $($variant,)+
        }

        impl StatCombo {
            /// All stat combinations.
            pub const ALL: [Self; stat_combos!(@count $($variant)+)] = [
                $(Self::$variant,)+
            ];

            /// Returns the canonical name.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant),)+
                }
            }
        }
    };
    (@count $($variant:ident)+) => {
        [$(stat_combos!(@unit $variant)),+].len()
    };
    (@unit $variant:ident) => { () };
}

stat_combos! {
    Apothecary,
    Assassin,
    Avatar,
    Barbarian,
    Berserker,
    Bringer,
    Captain,
    Carrion,
    Cavalier,
    Celestial,
    Cleric,
    Commander,
    Crusader,
    Deadshot,
    Demolisher,
    Destroyer,
    Dire,
    Diviner,
    Dragon,
    Forsaken,
    Giver,
    Grieving,
    Harrier,
    Knight,
    Magi,
    Marauder,
    Marshal,
    Mender,
    Minstrel,
    Nomad,
    Paladin,
    Plaguedoctor,
    Rabid,
    Rampager,
    Ritualist,
    Sage,
    Sentinel,
    Seraph,
    Settler,
    Shaman,
    Sinister,
    Soldier,
    Swashbuckler,
    Trailblazer,
    Valkyrie,
    Vigilant,
    Viper,
    Wanderer,
    Wizard,
    Zealot,
}

impl fmt::Display for StatCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatCombo {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|stat| stat.as_str() == s)
            .ok_or_else(|| UnknownName::new("stat combo", s))
    }
}

/// The eight agony infusion stat bonuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Infusion {
    Mighty,
    Precise,
    Malign,
    Expertise,
    Resilient,
    Vital,
    Healing,
    Concentration,
}

impl Infusion {
    /// All infusion kinds.
    pub const ALL: [Self; 8] = [
        Self::Mighty,
        Self::Precise,
        Self::Malign,
        Self::Expertise,
        Self::Resilient,
        Self::Vital,
        Self::Healing,
        Self::Concentration,
    ];

    /// Returns the canonical name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mighty => "Mighty",
            Self::Precise => "Precise",
            Self::Malign => "Malign",
            Self::Expertise => "Expertise",
            Self::Resilient => "Resilient",
            Self::Vital => "Vital",
            Self::Healing => "Healing",
            Self::Concentration => "Concentration",
        }
    }
}

impl fmt::Display for Infusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Infusion {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|infusion| infusion.as_str() == s)
            .ok_or_else(|| UnknownName::new("infusion", s))
    }
}

/// One equipped item: a slot, its stat combination, and optional upgrades.
///
/// The serde field names are frozen; historical JSON payloads deserialize
/// directly into this shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentPiece {
    pub slot: EquipmentSlot,
    pub stat: StatCombo,
    #[serde(rename = "weaponType", default, skip_serializing_if = "Option::is_none")]
    pub weapon_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upgrade: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sigil1: Option<NonZeroU32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sigil2: Option<NonZeroU32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub infusion1: Option<Infusion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub infusion2: Option<Infusion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub infusion3: Option<Infusion>,
}

impl EquipmentPiece {
    /// Creates a piece with no upgrades.
    #[must_use]
    pub const fn new(slot: EquipmentSlot, stat: StatCombo) -> Self {
        Self {
            slot,
            stat,
            weapon_type: None,
            upgrade: None,
            sigil1: None,
            sigil2: None,
            infusion1: None,
            infusion2: None,
            infusion3: None,
        }
    }

    /// The three infusion positions in order.
    #[must_use]
    pub const fn infusions(&self) -> [Option<Infusion>; 3] {
        [self.infusion1, self.infusion2, self.infusion3]
    }
}

/// Returns the first slot claimed by more than one piece, if any.
///
/// Slot uniqueness is a descriptor invariant; both encode and decode paths
/// refuse a sequence that violates it.
#[must_use]
pub fn duplicate_slot(pieces: &[EquipmentPiece]) -> Option<EquipmentSlot> {
    let mut seen: u16 = 0;
    for piece in pieces {
        let bit = 1u16 << piece.slot.index();
        if seen & bit != 0 {
            return Some(piece.slot);
        }
        seen |= bit;
    }
    None
}
