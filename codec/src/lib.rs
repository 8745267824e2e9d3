//! Build share-link encoding/decoding for the buildlink codec.
//!
//! This is the main codec crate. It ties together model, bytestream, and
//! wire to turn a [`BuildDescriptor`] into a shareable URL and back, across
//! every wire-format generation ever emitted.
//!
//! # Features
//!
//! - The current binary layout (generation 2) behind the compression envelope
//! - Permanent decoders for the two legacy JSON generations
//! - The human-readable query-parameter format
//! - Share-URL assembly and format dispatch
//!
//! # Design Principles
//!
//! - **Old links never die** - every generation that ever shipped decodes
//!   forever; dispatch checks are only ever added, never changed.
//! - **All or nothing** - a corrupt or unrecognized payload is an error, not
//!   a partially populated build.
//! - **Synchronous throughout** - every operation runs to completion on one
//!   call; the only external dependency is the injected [`TierLookup`].

mod binary;
mod error;
mod legacy;
mod readable;
mod share;
mod tiers;

pub use binary::{
    decode_binary, encode_binary, HeaderByte, GENERATION_BINARY, MAX_EQUIPMENT_PIECES,
};
pub use error::{DecodeError, DecodeResult, EncodeError, EncodeResult};
pub use legacy::{decode_payload, detect_generation, Generation};
pub use readable::{decode_readable, encode_readable, ReadableQuery};
pub use share::{
    build_from_url, decode_share_token, encode_share_token, shareable_url, ShareFormat,
};
pub use tiers::{TierLookup, TierLookupError, TierOrder};

pub use model::{
    BuildDescriptor, EquipmentPiece, EquipmentSlot, GameMode, Infusion, Profession,
    SkillSelection, SpecLine, StatCombo, TraitSelection,
};
pub use wire::Limits as TransportLimits;
