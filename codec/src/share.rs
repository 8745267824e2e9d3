//! Share-link orchestration: codec selection and URL assembly.

use url::Url;

use model::BuildDescriptor;

use crate::binary::encode_binary;
use crate::error::{DecodeError, DecodeResult, EncodeResult};
use crate::legacy::decode_payload;
use crate::readable::{decode_readable, encode_readable, ReadableQuery};
use crate::tiers::TierLookup;

/// Which wire representation a share link uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareFormat {
    /// A single opaque `build` parameter: binary layout through the
    /// compression envelope. Smallest URL.
    Compressed,
    /// The inspectable `c`/`m`/`g`/`s`/`t` parameter set.
    Readable,
}

/// Encodes a build descriptor into a bare compressed share token.
pub fn encode_share_token(build: &BuildDescriptor) -> EncodeResult<String> {
    Ok(wire::pack(&encode_binary(build)?)?)
}

/// Decodes a compressed share token of any generation.
pub fn decode_share_token(token: &str) -> DecodeResult<BuildDescriptor> {
    decode_payload(&wire::unpack(token)?)
}

/// Builds a full shareable URL, preserving the base's origin and path.
///
/// Any pre-existing query parameters are cleared first: the two formats are
/// mutually exclusive on one URL, and a stale `build` parameter next to a
/// fresh readable set (or vice versa) would change what a reload decodes.
pub fn shareable_url(
    base: &Url,
    build: &BuildDescriptor,
    format: ShareFormat,
    tiers: &dyn TierLookup,
) -> EncodeResult<Url> {
    let mut url = base.clone();
    url.set_query(None);
    match format {
        ShareFormat::Compressed => {
            url.query_pairs_mut()
                .append_pair("build", &encode_share_token(build)?);
        }
        ShareFormat::Readable => {
            let query = encode_readable(build, tiers)?;
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query.pairs() {
                pairs.append_pair(key, value);
            }
        }
    }
    Ok(url)
}

/// Loads a build from a URL's query parameters, if one is present.
///
/// Presence of `c` selects the readable decoder; otherwise presence of
/// `build` selects the compressed/legacy chain; neither present is
/// `Ok(None)`, not an error.
pub fn build_from_url(url: &Url, tiers: &dyn TierLookup) -> DecodeResult<Option<BuildDescriptor>> {
    let mut c = None;
    let mut m = None;
    let mut g = None;
    let mut s = None;
    let mut t = None;
    let mut token = None;
    for (key, value) in url.query_pairs() {
        let slot = match key.as_ref() {
            "c" => &mut c,
            "m" => &mut m,
            "g" => &mut g,
            "s" => &mut s,
            "t" => &mut t,
            "build" => &mut token,
            _ => continue,
        };
        if slot.is_none() {
            *slot = Some(value.into_owned());
        }
    }

    if let Some(c) = c {
        let query = ReadableQuery {
            c,
            m: m.ok_or(DecodeError::MissingParam { param: "m" })?,
            g: g.unwrap_or_default(),
            s: s.unwrap_or_default(),
            t: t.unwrap_or_default(),
        };
        return decode_readable(&query, tiers).map(Some);
    }
    if let Some(token) = token {
        return decode_share_token(&token).map(Some);
    }
    Ok(None)
}
