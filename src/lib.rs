//! urlsign core library: tamper-evident, time-bound tokens over a shared secret.
//!
//! Implements one stable token wire format:
//! - query-aware canonicalization (`?hash=` / `&hash=` marker append)
//! - embedded Unix-second issue timestamp, part of the signed content
//! - HMAC-SHA256 keyed digest, base64url-encoded (no padding)
//!
//! A token is `<canonical-payload>.<timestamp>.<digest>`. The payload may
//! contain dots; decoding splits on the last two separators, which the
//! timestamp (ASCII digits) and digest (base64url alphabet) can never contain.
//!
//! Authenticity and freshness are separate checks by design: [`TokenSigner::verify`]
//! proves the token was produced with the secret and is unaltered,
//! [`TokenSigner::expired`] judges the embedded timestamp against a threshold.

pub mod errors;
pub mod signer;
pub mod types;

pub use errors::SignError;
pub use signer::TokenSigner;
pub use types::{canonicalize, Secret, TokenParts, MARKER};

/// Library version string.
pub fn version() -> &'static str {
    "urlsign 0.1.0"
}
