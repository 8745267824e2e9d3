//! Generation dispatch and the two legacy JSON decoders.
//!
//! Three wire generations circulate and all of them must decode forever:
//!
//! - **Generation 2** (current): the binary layout, marked by a leading
//!   version byte of `2`.
//! - **Generation 1**: a compact-key JSON schema (`p`, `g`, `e`, ...).
//! - **Generation 0**: the original literal JSON schema with full field
//!   names, which deserializes directly into [`BuildDescriptor`].
//!
//! Legacy generations are decode-only; the encoder always emits the current
//! generation. A future generation adds a new leading-marker check here
//! without touching the existing ones.

use std::num::NonZeroU32;

use serde::Deserialize;

use model::{
    BuildDescriptor, EquipmentPiece, EquipmentSlot, GameMode, Infusion, Profession,
    SkillSelection, SpecLine, StatCombo, TraitSelection,
};

use crate::binary::{decode_binary, GENERATION_BINARY};
use crate::error::{DecodeError, DecodeResult};

/// The wire generations, as discriminated by [`detect_generation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generation {
    /// Generation 0: literal JSON with full field names.
    LiteralJson,
    /// Generation 1: compact-key JSON.
    CompactJson,
    /// Generation 2: the current binary layout.
    Binary,
}

/// Discriminates an inflated payload into its format generation.
///
/// Dispatch is by leading marker byte where one exists, else by structural
/// probe: a JSON object with a top-level `"p"` field is the compact schema,
/// a JSON object without one is the literal schema. This ordering is frozen.
pub fn detect_generation(payload: &[u8]) -> DecodeResult<Generation> {
    let Some(&first) = payload.first() else {
        return Err(bytestream::ByteError::UnexpectedEof {
            requested: 1,
            available: 0,
        }
        .into());
    };
    if first == GENERATION_BINARY {
        return Ok(Generation::Binary);
    }
    match serde_json::from_slice::<serde_json::Value>(payload) {
        Ok(serde_json::Value::Object(map)) => Ok(if map.contains_key("p") {
            Generation::CompactJson
        } else {
            Generation::LiteralJson
        }),
        Ok(_) => Err(DecodeError::MalformedJson {
            reason: "top-level JSON value is not an object".to_owned(),
        }),
        Err(_) => Err(DecodeError::UnknownVersion { found: first }),
    }
}

/// Decodes an inflated payload of any generation into a build descriptor.
pub fn decode_payload(payload: &[u8]) -> DecodeResult<BuildDescriptor> {
    let build = match detect_generation(payload)? {
        Generation::Binary => decode_binary(payload)?,
        Generation::CompactJson => {
            let compact: CompactBuild =
                serde_json::from_slice(payload).map_err(|err| DecodeError::MalformedJson {
                    reason: err.to_string(),
                })?;
            BuildDescriptor::from(compact)
        }
        Generation::LiteralJson => {
            serde_json::from_slice(payload).map_err(|err| DecodeError::MalformedJson {
                reason: err.to_string(),
            })?
        }
    };
    if let Some(slot) = build.duplicate_slot() {
        return Err(DecodeError::DuplicateSlot { slot });
    }
    Ok(build)
}

/// The generation-1 compact-key schema.
///
/// `sk` is the five skill slots in the fixed wire order; `t` is up to three
/// `[specId, [tier1, tier2, tier3]]` pairs.
#[derive(Debug, Deserialize)]
struct CompactBuild {
    p: Profession,
    #[serde(default)]
    g: Option<GameMode>,
    #[serde(default)]
    e: Vec<CompactPiece>,
    #[serde(default)]
    sk: Option<[Option<NonZeroU32>; 5]>,
    #[serde(default)]
    t: Option<Vec<CompactSpecLine>>,
    #[serde(default)]
    r: Option<NonZeroU32>,
    #[serde(default)]
    rl: Option<NonZeroU32>,
}

type CompactSpecLine = (Option<NonZeroU32>, [Option<NonZeroU32>; 3]);

#[derive(Debug, Deserialize)]
struct CompactPiece {
    s: EquipmentSlot,
    st: StatCombo,
    #[serde(default)]
    w: Option<String>,
    #[serde(default)]
    u: Option<String>,
    #[serde(default)]
    s1: Option<NonZeroU32>,
    #[serde(default)]
    s2: Option<NonZeroU32>,
    #[serde(default)]
    i1: Option<Infusion>,
    #[serde(default)]
    i2: Option<Infusion>,
    #[serde(default)]
    i3: Option<Infusion>,
}

impl From<CompactBuild> for BuildDescriptor {
    fn from(compact: CompactBuild) -> Self {
        let mut build = Self::new(compact.p, compact.g.unwrap_or_default());
        build.equipment = compact.e.into_iter().map(EquipmentPiece::from).collect();
        if let Some(slots) = compact.sk {
            build.skills = SkillSelection::from_array(slots);
        }
        if let Some(compact_lines) = compact.t {
            let mut lines = [SpecLine::default(); 3];
            for (line, (spec, choices)) in lines.iter_mut().zip(compact_lines) {
                *line = SpecLine::new(spec, choices);
            }
            build.traits = TraitSelection::from_lines(lines);
        }
        build.rune_id = compact.r;
        build.relic_id = compact.rl;
        build
    }
}

impl From<CompactPiece> for EquipmentPiece {
    fn from(compact: CompactPiece) -> Self {
        let mut piece = Self::new(compact.s, compact.st);
        piece.weapon_type = compact.w;
        piece.upgrade = compact.u;
        piece.sigil1 = compact.s1;
        piece.sigil2 = compact.s2;
        piece.infusion1 = compact.i1;
        piece.infusion2 = compact.i2;
        piece.infusion3 = compact.i3;
        piece
    }
}
