use std::fmt;

use base64::engine::general_purpose::URL_SAFE_NO_PAD as B64;
use base64::Engine as _;

use crate::errors::SignError;

/// Marker field appended to every payload before signing. The signing
/// transform covers it; it is not a literal empty query parameter the
/// caller is expected to fill in.
pub const MARKER: &str = "hash=";

/// Shared signing secret. Held for the signer's whole lifetime, never
/// transmitted, and redacted from `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(Vec<u8>);

impl Secret {
    /// Wrap secret bytes. Empty secrets are rejected: signing with an empty
    /// key gives no security guarantee, so construction fails fast instead.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self, SignError> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err(SignError::EmptySecret);
        }
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(..)")
    }
}

/// Canonicalize a payload for signing: append the [`MARKER`] field, joining
/// with `&` when the payload already carries a query string and `?` otherwise,
/// so the marker never corrupts existing URL structure.
pub fn canonicalize(payload: &str) -> String {
    if payload.contains('?') {
        format!("{payload}&{MARKER}")
    } else {
        format!("{payload}?{MARKER}")
    }
}

/// Decoded view of a token. Decoding recovers the fields but performs no
/// digest check; authenticity is [`crate::TokenSigner::verify`]'s job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenParts<'a> {
    /// Canonical payload, marker included.
    pub payload: &'a str,
    /// The signed prefix of the token: `<payload>.<timestamp>`.
    pub signed: &'a str,
    /// Issue time embedded at signing, Unix seconds.
    pub timestamp: i64,
    /// Raw digest bytes carried by the token.
    pub digest: Vec<u8>,
}

impl<'a> TokenParts<'a> {
    /// Split a token into payload, timestamp, and digest.
    ///
    /// Splits on the last two `.` separators, so payloads containing dots
    /// decode unambiguously. The timestamp field must be bare ASCII digits
    /// fitting an `i64`; the digest must be base64url without padding.
    pub fn decode(token: &'a str) -> Result<Self, SignError> {
        let (signed, digest_b64) = token
            .rsplit_once('.')
            .ok_or_else(|| SignError::Malformed("missing digest field".into()))?;
        let (payload, ts_str) = signed
            .rsplit_once('.')
            .ok_or_else(|| SignError::Malformed("missing timestamp field".into()))?;

        if ts_str.is_empty() || !ts_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(SignError::Malformed("timestamp is not a decimal integer".into()));
        }
        let timestamp: i64 = ts_str
            .parse()
            .map_err(|_| SignError::Malformed("timestamp out of range".into()))?;

        let digest = B64
            .decode(digest_b64.as_bytes())
            .map_err(|_| SignError::Malformed("digest is not base64url".into()))?;

        Ok(Self { payload, signed, timestamp, digest })
    }
}
