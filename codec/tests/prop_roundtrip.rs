use std::num::NonZeroU32;

use codec::{
    decode_binary, decode_share_token, detect_generation, encode_binary, encode_share_token,
    BuildDescriptor, EquipmentPiece, EquipmentSlot, GameMode, Generation, Infusion, Profession,
    SkillSelection, SpecLine, StatCombo, TraitSelection,
};
use proptest::prelude::*;

fn id_strategy() -> impl Strategy<Value = Option<NonZeroU32>> {
    prop::option::of((1u32..200_000).prop_map(|n| NonZeroU32::new(n).unwrap()))
}

fn infusion_strategy() -> impl Strategy<Value = Option<Infusion>> {
    prop::option::of(prop::sample::select(Infusion::ALL.to_vec()))
}

fn piece_strategy(slot: EquipmentSlot) -> impl Strategy<Value = EquipmentPiece> {
    (
        prop::sample::select(StatCombo::ALL.to_vec()),
        prop::option::of("[A-Za-z][A-Za-z ]{0,15}"),
        prop::option::of("[A-Za-z][A-Za-z ]{0,25}"),
        id_strategy(),
        id_strategy(),
        infusion_strategy(),
        infusion_strategy(),
        infusion_strategy(),
    )
        .prop_map(
            move |(stat, weapon_type, upgrade, sigil1, sigil2, i1, i2, i3)| {
                let mut piece = EquipmentPiece::new(slot, stat);
                piece.weapon_type = weapon_type;
                piece.upgrade = upgrade;
                piece.sigil1 = sigil1;
                piece.sigil2 = sigil2;
                piece.infusion1 = i1;
                piece.infusion2 = i2;
                piece.infusion3 = i3;
                piece
            },
        )
}

/// Equipment with structurally valid (unique) slots in arbitrary order.
fn equipment_strategy() -> impl Strategy<Value = Vec<EquipmentPiece>> {
    prop::sample::subsequence(EquipmentSlot::ALL.to_vec(), 0..=EquipmentSlot::ALL.len())
        .prop_shuffle()
        .prop_flat_map(|slots| {
            slots
                .into_iter()
                .map(|slot| piece_strategy(slot).boxed())
                .collect::<Vec<_>>()
        })
}

fn skills_strategy() -> impl Strategy<Value = SkillSelection> {
    [id_strategy(), id_strategy(), id_strategy(), id_strategy(), id_strategy()]
        .prop_map(SkillSelection::from_array)
}

fn traits_strategy() -> impl Strategy<Value = TraitSelection> {
    let line = (id_strategy(), [id_strategy(), id_strategy(), id_strategy()])
        .prop_map(|(spec, choices)| SpecLine::new(spec, choices))
        .boxed();
    [line.clone(), line.clone(), line].prop_map(TraitSelection::from_lines)
}

prop_compose! {
    fn build_strategy()(
        profession in prop::sample::select(Profession::ALL.to_vec()),
        game_mode in prop::sample::select(GameMode::ALL.to_vec()),
        equipment in equipment_strategy(),
        skills in skills_strategy(),
        traits in traits_strategy(),
        rune_id in id_strategy(),
        relic_id in id_strategy(),
    ) -> BuildDescriptor {
        let mut build = BuildDescriptor::new(profession, game_mode);
        build.equipment = equipment;
        build.skills = skills;
        build.traits = traits;
        build.rune_id = rune_id;
        build.relic_id = relic_id;
        build
    }
}

proptest! {
    #[test]
    fn prop_binary_roundtrip(build in build_strategy()) {
        let payload = encode_binary(&build).unwrap();
        prop_assert_eq!(decode_binary(&payload).unwrap(), build);
    }

    #[test]
    fn prop_share_token_roundtrip(build in build_strategy()) {
        let token = encode_share_token(&build).unwrap();
        prop_assert_eq!(decode_share_token(&token).unwrap(), build);
    }

    #[test]
    fn prop_binary_payload_dispatches_as_current_generation(build in build_strategy()) {
        let payload = encode_binary(&build).unwrap();
        prop_assert_eq!(detect_generation(&payload).unwrap(), Generation::Binary);
    }

    #[test]
    fn prop_slot_sets_survive_roundtrip(build in build_strategy()) {
        let payload = encode_binary(&build).unwrap();
        let decoded = decode_binary(&payload).unwrap();
        let before: Vec<EquipmentSlot> = build.equipment.iter().map(|p| p.slot).collect();
        let after: Vec<EquipmentSlot> = decoded.equipment.iter().map(|p| p.slot).collect();
        prop_assert_eq!(before, after);
    }
}
