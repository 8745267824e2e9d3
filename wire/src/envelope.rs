//! Deflate compression and URL-safe text mapping.

use std::io::Read;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use flate2::read::{ZlibDecoder, ZlibEncoder};
use flate2::Compression;

use crate::error::{TransportError, TransportResult};
use crate::limits::Limits;

/// Compresses a payload and maps it to a URL-safe token.
///
/// The payload is deflated (zlib container, best compression) and encoded
/// with URL-safe base64 without padding. The result is equivalent to
/// standard base64 with `+`→`-`, `/`→`_` substituted and `=` stripped,
/// which is what historical encoders emitted.
pub fn pack(payload: &[u8]) -> TransportResult<String> {
    let mut encoder = ZlibEncoder::new(payload, Compression::best());
    let mut compressed = Vec::new();
    encoder
        .read_to_end(&mut compressed)
        .map_err(|err| TransportError::Deflate {
            reason: err.to_string(),
        })?;
    Ok(URL_SAFE_NO_PAD.encode(compressed))
}

/// Reverses [`pack`] with the default [`Limits`].
pub fn unpack(token: &str) -> TransportResult<Vec<u8>> {
    unpack_with(token, &Limits::default())
}

/// Reverses [`pack`] with explicit limits.
///
/// Accepts tokens in either base64 alphabet, with or without `=` padding:
/// links in the wild predate the URL-safe substitution, and some relays
/// re-pad query parameters.
pub fn unpack_with(token: &str, limits: &Limits) -> TransportResult<Vec<u8>> {
    if token.len() > limits.max_token_chars {
        return Err(TransportError::InvalidBase64 {
            reason: format!(
                "token length {} exceeds {} characters",
                token.len(),
                limits.max_token_chars
            ),
        });
    }

    let normalized = normalize_alphabet(token);
    let compressed =
        URL_SAFE_NO_PAD
            .decode(normalized.as_bytes())
            .map_err(|err| TransportError::InvalidBase64 {
                reason: err.to_string(),
            })?;

    let mut inflated = Vec::new();
    let decoder = ZlibDecoder::new(compressed.as_slice());
    decoder
        .take(limits.max_inflated_bytes as u64 + 1)
        .read_to_end(&mut inflated)
        .map_err(|err| TransportError::CorruptStream {
            reason: err.to_string(),
        })?;
    if inflated.len() > limits.max_inflated_bytes {
        return Err(TransportError::InflatedTooLarge {
            limit: limits.max_inflated_bytes,
        });
    }
    Ok(inflated)
}

/// Maps the standard base64 alphabet onto the URL-safe one and drops padding.
fn normalize_alphabet(token: &str) -> String {
    token
        .trim_end_matches('=')
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect()
}
