//! The human-readable query-string format.
//!
//! Trades token size for inspectability: profession, mode, skills, and trait
//! choices are plain delimited query parameters, while the equipment list
//! stays a compressed blob (stat and upgrade names are too verbose to be
//! worth reading in a URL).

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use model::{
    BuildDescriptor, EquipmentPiece, GameMode, Profession, SkillSelection, SpecLine,
    TraitSelection, UnknownName,
};

use crate::error::{DecodeError, DecodeResult, EncodeError, EncodeResult};
use crate::tiers::TierLookup;

/// The five query parameters of the readable format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadableQuery {
    /// `c` - profession as a 1-based index.
    pub c: String,
    /// `m` - game mode as a 0-based index.
    pub m: String,
    /// `g` - equipment plus rune/relic IDs as a compressed blob.
    pub g: String,
    /// `s` - the five skill slots, `_`-separated, empty token = unset.
    pub s: String,
    /// `t` - specialization ID / tier-letter pairs, `_`-separated.
    pub t: String,
}

impl ReadableQuery {
    /// The parameters in URL emission order.
    #[must_use]
    pub fn pairs(&self) -> [(&'static str, &str); 5] {
        [
            ("c", &self.c),
            ("m", &self.m),
            ("g", &self.g),
            ("s", &self.s),
            ("t", &self.t),
        ]
    }
}

/// The compressed portion of the readable format.
#[derive(Debug, Default, Serialize, Deserialize)]
struct GearBlob {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    equipment: Vec<EquipmentPiece>,
    #[serde(rename = "runeId", default, skip_serializing_if = "Option::is_none")]
    rune_id: Option<NonZeroU32>,
    #[serde(rename = "relicId", default, skip_serializing_if = "Option::is_none")]
    relic_id: Option<NonZeroU32>,
}

/// Encodes a build descriptor into the readable query parameters.
///
/// Tier-order lookups that fail degrade the affected specialization's tier
/// string to `"---"`; sharing a build never hard-fails on metadata.
pub fn encode_readable(
    build: &BuildDescriptor,
    tiers: &dyn TierLookup,
) -> EncodeResult<ReadableQuery> {
    if let Some(slot) = build.duplicate_slot() {
        return Err(EncodeError::DuplicateSlot { slot });
    }

    let blob = GearBlob {
        equipment: build.equipment.clone(),
        rune_id: build.rune_id,
        relic_id: build.relic_id,
    };
    let json = serde_json::to_vec(&blob).map_err(|err| EncodeError::Json {
        reason: err.to_string(),
    })?;

    let skill_tokens: Vec<String> = build
        .skills
        .as_array()
        .iter()
        .map(|slot| slot.map_or_else(String::new, |id| id.to_string()))
        .collect();

    let mut trait_tokens = Vec::new();
    for line in build.traits.lines() {
        if let Some(spec) = line.spec {
            trait_tokens.push(spec.to_string());
            trait_tokens.push(tier_letters(spec.get(), line.choices, tiers));
        }
    }

    Ok(ReadableQuery {
        c: (build.profession.index() + 1).to_string(),
        m: build.game_mode.index().to_string(),
        g: wire::pack(&json)?,
        s: skill_tokens.join("_"),
        t: trait_tokens.join("_"),
    })
}

/// Decodes the readable query parameters back into a build descriptor.
pub fn decode_readable(
    query: &ReadableQuery,
    tiers: &dyn TierLookup,
) -> DecodeResult<BuildDescriptor> {
    let profession_raw: u8 = query.c.parse().map_err(|_| DecodeError::MalformedQuery {
        param: "c",
        reason: format!("not a number: {:?}", query.c),
    })?;
    let profession = profession_raw
        .checked_sub(1)
        .and_then(Profession::from_index)
        .ok_or_else(|| {
            DecodeError::UnknownName(UnknownName {
                kind: "profession index",
                name: profession_raw.to_string(),
            })
        })?;

    let mode_raw: u8 = query.m.parse().map_err(|_| DecodeError::MalformedQuery {
        param: "m",
        reason: format!("not a number: {:?}", query.m),
    })?;
    let game_mode = GameMode::from_index(mode_raw).ok_or_else(|| {
        DecodeError::UnknownName(UnknownName {
            kind: "game mode index",
            name: mode_raw.to_string(),
        })
    })?;

    let blob = if query.g.is_empty() {
        GearBlob::default()
    } else {
        let json = wire::unpack(&query.g)?;
        serde_json::from_slice(&json).map_err(|err| DecodeError::MalformedJson {
            reason: err.to_string(),
        })?
    };
    if let Some(slot) = model::duplicate_slot(&blob.equipment) {
        return Err(DecodeError::DuplicateSlot { slot });
    }

    let mut build = BuildDescriptor::new(profession, game_mode);
    build.equipment = blob.equipment;
    build.rune_id = blob.rune_id;
    build.relic_id = blob.relic_id;
    build.skills = parse_skill_list(&query.s)?;
    build.traits = parse_trait_list(&query.t, tiers)?;
    Ok(build)
}

/// Letters for the three tier positions, in display order.
const fn letter_for_position(position: usize) -> Option<char> {
    match position {
        0 => Some('t'),
        1 => Some('m'),
        2 => Some('b'),
        _ => None,
    }
}

const fn position_for_letter(letter: char) -> Option<usize> {
    match letter {
        't' => Some(0),
        'm' => Some(1),
        'b' => Some(2),
        _ => None,
    }
}

fn tier_letters(
    specialization: u32,
    choices: [Option<NonZeroU32>; 3],
    tiers: &dyn TierLookup,
) -> String {
    let Ok(order) = tiers.tier_order(specialization) else {
        return "---".to_owned();
    };
    let mut letters = String::with_capacity(3);
    for (tier, choice) in choices.iter().enumerate() {
        let letter = choice
            .and_then(|id| order.position_of(tier, id.get()))
            .and_then(letter_for_position)
            .unwrap_or('-');
        letters.push(letter);
    }
    letters
}

fn parse_opt_id(token: &str, param: &'static str) -> DecodeResult<Option<NonZeroU32>> {
    if token.is_empty() {
        return Ok(None);
    }
    let value: u32 = token.parse().map_err(|_| DecodeError::MalformedQuery {
        param,
        reason: format!("not a number: {token:?}"),
    })?;
    // 0 is the absent sentinel here as everywhere else.
    Ok(NonZeroU32::new(value))
}

fn parse_skill_list(s: &str) -> DecodeResult<SkillSelection> {
    if s.is_empty() {
        return Ok(SkillSelection::default());
    }
    let tokens: Vec<&str> = s.split('_').collect();
    if tokens.len() > 5 {
        return Err(DecodeError::MalformedQuery {
            param: "s",
            reason: format!("{} slots, expected at most 5", tokens.len()),
        });
    }
    // The encoder always emits five positional tokens. Historical links
    // collapsed unset slots instead, so shorter lists fill from the front.
    let mut slots = [None; 5];
    for (slot, token) in slots.iter_mut().zip(&tokens) {
        *slot = parse_opt_id(token, "s")?;
    }
    Ok(SkillSelection::from_array(slots))
}

fn parse_trait_list(t: &str, tiers: &dyn TierLookup) -> DecodeResult<TraitSelection> {
    if t.is_empty() {
        return Ok(TraitSelection::default());
    }
    let tokens: Vec<&str> = t.split('_').collect();
    if tokens.len() % 2 != 0 {
        return Err(DecodeError::MalformedQuery {
            param: "t",
            reason: "dangling specialization token".to_owned(),
        });
    }
    if tokens.len() > 6 {
        return Err(DecodeError::MalformedQuery {
            param: "t",
            reason: format!("{} tokens, expected at most 3 pairs", tokens.len()),
        });
    }

    let mut lines = [SpecLine::default(); 3];
    for (line, pair) in lines.iter_mut().zip(tokens.chunks(2)) {
        let Some(spec) = parse_opt_id(pair[0], "t")? else {
            return Err(DecodeError::MalformedQuery {
                param: "t",
                reason: format!("missing specialization id before {:?}", pair[1]),
            });
        };
        line.spec = Some(spec);
        line.choices = parse_tier_letters(spec.get(), pair[1], tiers)?;
    }
    Ok(TraitSelection::from_lines(lines))
}

fn parse_tier_letters(
    specialization: u32,
    letters: &str,
    tiers: &dyn TierLookup,
) -> DecodeResult<[Option<NonZeroU32>; 3]> {
    if letters.chars().count() != 3
        || letters.chars().any(|ch| !matches!(ch, 't' | 'm' | 'b' | '-'))
    {
        return Err(DecodeError::MalformedQuery {
            param: "t",
            reason: format!("bad tier string {letters:?}"),
        });
    }
    // A failed lookup degrades every choice in the line to "not chosen";
    // the rest of the build still decodes.
    let Ok(order) = tiers.tier_order(specialization) else {
        return Ok([None; 3]);
    };
    let mut choices = [None; 3];
    for (tier, letter) in letters.chars().enumerate() {
        choices[tier] = position_for_letter(letter)
            .and_then(|position| order.trait_at(tier, position))
            .and_then(NonZeroU32::new);
    }
    Ok(choices)
}
