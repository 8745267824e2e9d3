//! Truncation safety: a cut-off payload must always fail to decode, never
//! silently produce a wrong build.

use std::num::NonZeroU32;

use codec::{
    decode_binary, decode_share_token, encode_binary, encode_share_token, BuildDescriptor,
    DecodeError, EquipmentPiece, EquipmentSlot, GameMode, Infusion, Profession, StatCombo,
};

fn id(n: u32) -> Option<NonZeroU32> {
    NonZeroU32::new(n)
}

/// A build whose payload exercises every field kind: strings, multi-byte
/// varints, absent options.
fn rich_build() -> BuildDescriptor {
    let mut build = BuildDescriptor::new(Profession::Revenant, GameMode::WvW);
    let mut weapon = EquipmentPiece::new(EquipmentSlot::MainHand1, StatCombo::Diviner);
    weapon.weapon_type = Some("Hammer".to_owned());
    weapon.upgrade = Some("Superior Sigil of Accuracy".to_owned());
    weapon.sigil1 = id(24618);
    weapon.infusion2 = Some(Infusion::Precise);
    build.equipment.push(weapon);
    build
        .equipment
        .push(EquipmentPiece::new(EquipmentSlot::Ring2, StatCombo::Diviner));
    build.skills.heal = id(27372);
    build.skills.elite = id(28406);
    build.traits.spec2 = id(15);
    build.traits.spec2_choices = [None, id(1823), None];
    build.rune_id = id(24836);
    build.relic_id = id(100916);
    build
}

#[test]
fn every_binary_prefix_fails_to_decode() {
    let payload = encode_binary(&rich_build()).unwrap();
    assert!(decode_binary(&payload).is_ok());

    for cut in 0..payload.len() {
        let result = decode_binary(&payload[..cut]);
        match result {
            Err(DecodeError::Bytes(_)) => {}
            Err(other) => panic!("prefix of {cut} bytes failed oddly: {other}"),
            Ok(_) => panic!("prefix of {cut} bytes decoded successfully"),
        }
    }
}

#[test]
fn every_token_prefix_fails_to_decode() {
    let token = encode_share_token(&rich_build()).unwrap();
    assert!(decode_share_token(&token).is_ok());

    for cut in 0..token.len() {
        assert!(
            decode_share_token(&token[..cut]).is_err(),
            "token prefix of {cut} chars decoded successfully"
        );
    }
}

#[test]
fn corrupted_token_bytes_never_decode_to_a_different_build() {
    // Flip each character to 'A'; every mutation must either fail or decode
    // to the identical build (a flip inside the base64 padding region of the
    // last quantum can be absorbed by the checksum-verified stream).
    let build = rich_build();
    let token = encode_share_token(&build).unwrap();

    for position in 0..token.len() {
        let mut mutated: Vec<char> = token.chars().collect();
        if mutated[position] == 'A' {
            continue;
        }
        mutated[position] = 'A';
        let mutated: String = mutated.into_iter().collect();
        if let Ok(decoded) = decode_share_token(&mutated) {
            assert_eq!(decoded, build, "mutation at {position} changed the build");
        }
    }
}
