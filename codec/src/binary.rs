//! The binary build format, generation 2 (current).

use std::str::FromStr;

use bytestream::{ByteReader, ByteWriter};
use model::{
    BuildDescriptor, EquipmentPiece, EquipmentSlot, GameMode, Infusion, Profession,
    SkillSelection, SpecLine, StatCombo, TraitSelection, UnknownName,
};

use crate::error::{DecodeError, DecodeResult, EncodeError, EncodeResult};

/// Version byte of the current binary generation.
///
/// Every generation keeps its marker as the first payload byte and bumps the
/// value on any incompatible layout change.
pub const GENERATION_BINARY: u8 = 2;

/// Ceiling on equipment pieces imposed by the one-byte count field.
pub const MAX_EQUIPMENT_PIECES: usize = 255;

/// The packed profession/game-mode byte.
///
/// This struct is the single place the packed layout lives: the game-mode
/// index occupies the low two bits, the profession index the bits above
/// (`(profession << 2) | mode`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderByte(u8);

impl HeaderByte {
    /// Packs a profession and game mode.
    #[must_use]
    pub const fn new(profession: Profession, mode: GameMode) -> Self {
        Self((profession.index() << 2) | mode.index())
    }

    /// Wraps a raw byte read from the wire.
    #[must_use]
    pub const fn from_raw(raw: u8) -> Self {
        Self(raw)
    }

    /// Returns the raw byte.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Unpacks the profession.
    pub fn profession(self) -> DecodeResult<Profession> {
        let index = self.0 >> 2;
        Profession::from_index(index).ok_or_else(|| {
            DecodeError::UnknownName(UnknownName {
                kind: "profession index",
                name: index.to_string(),
            })
        })
    }

    /// Unpacks the game mode.
    pub fn game_mode(self) -> DecodeResult<GameMode> {
        let index = self.0 & 0b11;
        GameMode::from_index(index).ok_or_else(|| {
            DecodeError::UnknownName(UnknownName {
                kind: "game mode index",
                name: index.to_string(),
            })
        })
    }
}

/// Encodes a build descriptor into the generation-2 byte layout.
pub fn encode_binary(build: &BuildDescriptor) -> EncodeResult<Vec<u8>> {
    if build.equipment.len() > MAX_EQUIPMENT_PIECES {
        return Err(EncodeError::TooManyPieces {
            count: build.equipment.len(),
        });
    }
    if let Some(slot) = build.duplicate_slot() {
        return Err(EncodeError::DuplicateSlot { slot });
    }

    let mut writer = ByteWriter::with_capacity(64);
    writer.write_u8(GENERATION_BINARY);
    writer.write_u8(HeaderByte::new(build.profession, build.game_mode).raw());

    writer.write_u8(build.equipment.len() as u8);
    for piece in &build.equipment {
        write_piece(&mut writer, piece);
    }

    for skill in build.skills.as_array() {
        writer.write_id(skill);
    }

    for line in build.traits.lines() {
        writer.write_id(line.spec);
        for choice in line.choices {
            writer.write_id(choice);
        }
    }

    writer.write_id(build.rune_id);
    writer.write_id(build.relic_id);
    Ok(writer.finish())
}

fn write_piece(writer: &mut ByteWriter, piece: &EquipmentPiece) {
    writer.write_u8(piece.slot.index());
    writer.write_string(piece.stat.as_str());
    writer.write_opt_string(piece.weapon_type.as_deref());
    writer.write_opt_string(piece.upgrade.as_deref());
    // Sigils travel as varints while infusions travel as name strings. The
    // asymmetry is frozen: changing either side is a generation bump.
    writer.write_id(piece.sigil1);
    writer.write_id(piece.sigil2);
    for infusion in piece.infusions() {
        writer.write_opt_string(infusion.map(Infusion::as_str));
    }
}

/// Decodes a generation-2 payload back into a build descriptor.
///
/// Optional fields materialize only for non-zero / non-empty wire values;
/// the zero varint means "absent", never "ID 0".
pub fn decode_binary(payload: &[u8]) -> DecodeResult<BuildDescriptor> {
    let mut reader = ByteReader::new(payload);

    let version = reader.read_u8()?;
    if version != GENERATION_BINARY {
        return Err(DecodeError::UnknownVersion { found: version });
    }

    let header = HeaderByte::from_raw(reader.read_u8()?);
    let mut build = BuildDescriptor::new(header.profession()?, header.game_mode()?);

    let count = reader.read_u8()?;
    let mut seen_slots: u16 = 0;
    for _ in 0..count {
        let piece = read_piece(&mut reader)?;
        let bit = 1u16 << piece.slot.index();
        if seen_slots & bit != 0 {
            return Err(DecodeError::DuplicateSlot { slot: piece.slot });
        }
        seen_slots |= bit;
        build.equipment.push(piece);
    }

    let mut skills = [None; 5];
    for slot in &mut skills {
        *slot = reader.read_id()?;
    }
    build.skills = SkillSelection::from_array(skills);

    let mut lines = [SpecLine::default(); 3];
    for line in &mut lines {
        line.spec = reader.read_id()?;
        for choice in &mut line.choices {
            *choice = reader.read_id()?;
        }
    }
    build.traits = TraitSelection::from_lines(lines);

    build.rune_id = reader.read_id()?;
    build.relic_id = reader.read_id()?;

    if !reader.is_empty() {
        return Err(DecodeError::TrailingBytes {
            remaining: reader.remaining(),
        });
    }
    Ok(build)
}

fn read_piece(reader: &mut ByteReader<'_>) -> DecodeResult<EquipmentPiece> {
    let slot_index = reader.read_u8()?;
    let slot = EquipmentSlot::from_index(slot_index).ok_or_else(|| {
        DecodeError::UnknownName(UnknownName {
            kind: "equipment slot index",
            name: slot_index.to_string(),
        })
    })?;
    let stat = StatCombo::from_str(&reader.read_string()?)?;

    let mut piece = EquipmentPiece::new(slot, stat);
    piece.weapon_type = reader.read_opt_string()?;
    piece.upgrade = reader.read_opt_string()?;
    piece.sigil1 = reader.read_id()?;
    piece.sigil2 = reader.read_id()?;

    let mut infusions: [Option<Infusion>; 3] = [None; 3];
    for infusion in &mut infusions {
        *infusion = match reader.read_opt_string()? {
            Some(name) => Some(Infusion::from_str(&name)?),
            None => None,
        };
    }
    [piece.infusion1, piece.infusion2, piece.infusion3] = infusions;

    Ok(piece)
}
