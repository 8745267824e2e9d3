//! Build descriptor data model for the buildlink codec.
//!
//! This crate defines [`BuildDescriptor`] and the closed enumerations it is
//! built from. It carries no wire-format knowledge; the codec crates consume
//! these types and are responsible for every byte-level decision.
//!
//! # Design Principles
//!
//! - **Frozen indices** - Enum declaration order is the wire index order and
//!   must never be reordered. New values are appended.
//! - **Zero is never a valid ID** - Optional numeric IDs are
//!   `Option<NonZeroU32>`; the wire formats use 0 as the "absent" sentinel,
//!   so a legitimate ID can never be 0 by construction.
//! - **Serde names are a wire contract** - The oldest JSON generation
//!   deserializes directly into these types, so the serde field names
//!   (`gameMode`, `spec1Choices`, ...) are frozen alongside the indices.

mod build;
mod equipment;
mod error;
mod profession;

pub use build::{BuildDescriptor, SkillSelection, SpecLine, TraitSelection};
pub use equipment::{duplicate_slot, EquipmentPiece, EquipmentSlot, Infusion, StatCombo};
pub use error::UnknownName;
pub use profession::{GameMode, Profession};
