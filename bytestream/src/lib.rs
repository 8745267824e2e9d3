//! Byte-level varint and string primitives for the buildlink codec.
//!
//! This crate provides [`ByteWriter`] and [`ByteReader`] for encoding and
//! decoding the flat byte sequences the binary build format is made of.
//! It is designed for bounded, panic-free operation with explicit error
//! handling.
//!
//! # Design Principles
//!
//! - **No unsafe code** - Safety is paramount.
//! - **Bounded operations** - All reads are bounds-checked.
//! - **No domain knowledge** - This crate knows nothing about builds,
//!   professions, or equipment.
//! - **Zero means absent** - Optional IDs travel as a varint with 0 as the
//!   sentinel; [`ByteWriter::write_id`] / [`ByteReader::read_id`] are the
//!   only place that convention lives.
//!
//! # Example
//!
//! ```
//! use bytestream::{ByteReader, ByteWriter};
//!
//! let mut writer = ByteWriter::new();
//! writer.write_varu32(9153);
//! writer.write_string("Berserker");
//!
//! let bytes = writer.finish();
//!
//! let mut reader = ByteReader::new(&bytes);
//! assert_eq!(reader.read_varu32().unwrap(), 9153);
//! assert_eq!(reader.read_string().unwrap(), "Berserker");
//! ```

mod error;
mod reader;
mod writer;

pub use error::{ByteError, ByteResult};
pub use reader::ByteReader;
pub use writer::ByteWriter;

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use super::*;

    #[test]
    fn empty_roundtrip() {
        let writer = ByteWriter::new();
        let bytes = writer.finish();
        assert!(bytes.is_empty());

        let reader = ByteReader::new(&bytes);
        assert!(reader.is_empty());
    }

    #[test]
    fn mixed_roundtrip() {
        let mut writer = ByteWriter::new();
        writer.write_u8(2);
        writer.write_varu32(300);
        writer.write_string("Celestial");
        writer.write_opt_string(None);
        writer.write_id(NonZeroU32::new(24836));
        writer.write_id(None);
        let bytes = writer.finish();

        let mut reader = ByteReader::new(&bytes);
        assert_eq!(reader.read_u8().unwrap(), 2);
        assert_eq!(reader.read_varu32().unwrap(), 300);
        assert_eq!(reader.read_string().unwrap(), "Celestial");
        assert_eq!(reader.read_opt_string().unwrap(), None);
        assert_eq!(reader.read_id().unwrap(), NonZeroU32::new(24836));
        assert_eq!(reader.read_id().unwrap(), None);
        assert!(reader.is_empty());
    }

    #[test]
    fn doctest_example() {
        let mut writer = ByteWriter::new();
        writer.write_varu32(9153);
        writer.write_string("Berserker");

        let bytes = writer.finish();

        let mut reader = ByteReader::new(&bytes);
        assert_eq!(reader.read_varu32().unwrap(), 9153);
        assert_eq!(reader.read_string().unwrap(), "Berserker");
    }
}
