//! Compression and URL-safe transport envelope for the buildlink codec.
//!
//! This crate turns an opaque payload (the binary build format, or a legacy
//! JSON document) into a string safe for direct inclusion in a URL, and
//! back. It does not know what the payload means, only how to compress it
//! and map it through a text alphabet.
//!
//! # Design Principles
//!
//! - **Stable envelope** - zlib deflate + URL-safe base64 without padding,
//!   unchanged since the first format generation.
//! - **Lenient intake** - both base64 alphabets and optional padding are
//!   accepted on decode; historical links circulate in several shapes.
//! - **Bounded decoding** - inflation is capped by [`Limits`] so a hostile
//!   token cannot balloon in memory.

mod envelope;
mod error;
mod limits;

pub use envelope::{pack, unpack, unpack_with};
pub use error::{TransportError, TransportResult};
pub use limits::Limits;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_api_exports() {
        let _ = Limits::default();
        let _: TransportResult<()> = Ok(());
        let token = pack(b"payload").unwrap();
        assert_eq!(unpack(&token).unwrap(), b"payload");
        assert_eq!(
            unpack_with(&token, &Limits::for_testing()).unwrap(),
            b"payload"
        );
    }

    #[test]
    fn json_payload_roundtrip() {
        // The legacy generations ship JSON text through the same envelope.
        let json = br#"{"profession":"Guardian","gameMode":"PvE"}"#;
        let token = pack(json).unwrap();
        assert_eq!(unpack(&token).unwrap(), json);
    }
}
