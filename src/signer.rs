use base64::engine::general_purpose::URL_SAFE_NO_PAD as B64;
use base64::Engine as _;
use chrono::Utc;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::errors::SignError;
use crate::types::{canonicalize, Secret, TokenParts};

type HmacSha256 = Hmac<Sha256>;

/// Stateless signer/verifier keyed by a shared secret.
///
/// One instance per secret, reused for any number of calls; every operation is
/// pure given the secret and inputs, so instances are freely shared across
/// threads. Rotate by constructing a new instance.
#[derive(Debug)]
pub struct TokenSigner {
    secret: Secret,
}

impl TokenSigner {
    /// Create a signer from raw secret bytes. Fails with
    /// [`SignError::EmptySecret`] for an empty secret.
    pub fn new(secret: impl Into<Vec<u8>>) -> Result<Self, SignError> {
        Ok(Self::with_secret(Secret::new(secret)?))
    }

    /// Create a signer from an already-validated [`Secret`].
    pub fn with_secret(secret: Secret) -> Self {
        Self { secret }
    }

    /// Sign a payload, embedding the current time as the issue timestamp.
    ///
    /// Two signs of the same payload at different instants yield different
    /// tokens, both valid until they expire.
    pub fn sign(&self, payload: &str) -> String {
        self.sign_at(payload, Utc::now().timestamp())
    }

    /// Sign a payload with an explicit issue timestamp (Unix seconds).
    /// Deterministic given payload, instant, and secret.
    pub fn sign_at(&self, payload: &str, issued_at: i64) -> String {
        let canonical = canonicalize(payload);
        let message = format!("{canonical}.{issued_at}");
        let digest = self.keyed_mac(&message).finalize().into_bytes();
        format!("{message}.{}", B64.encode(digest))
    }

    /// Verify a token's authenticity: true iff it decodes and its digest
    /// matches one recomputed with this signer's secret (compared in constant
    /// time). Malformed input is reported as `false`, never a panic.
    ///
    /// No expiry check is performed here; freshness is [`Self::expired`]'s
    /// concern.
    pub fn verify(&self, token: &str) -> bool {
        let parts = match TokenParts::decode(token) {
            Ok(parts) => parts,
            Err(err) => {
                log::debug!("rejecting token: {err}");
                return false;
            }
        };
        self.keyed_mac(parts.signed).verify_slice(&parts.digest).is_ok()
    }

    /// Check whether a token's embedded timestamp is older than
    /// `minutes_until_expire` minutes. A token exactly at the boundary is not
    /// expired.
    ///
    /// The digest is NOT re-validated here: a tampered but parseable token
    /// still yields a verdict from its (possibly forged) timestamp. Call
    /// [`Self::verify`] first whenever authenticity matters. A token that
    /// cannot be decoded surfaces [`SignError::Malformed`].
    pub fn expired(&self, token: &str, minutes_until_expire: i64) -> Result<bool, SignError> {
        self.expired_at(token, minutes_until_expire, Utc::now().timestamp())
    }

    /// [`Self::expired`] against an explicit `now` (Unix seconds).
    pub fn expired_at(
        &self,
        token: &str,
        minutes_until_expire: i64,
        now: i64,
    ) -> Result<bool, SignError> {
        let parts = TokenParts::decode(token)?;
        Ok(now - parts.timestamp > minutes_until_expire * 60)
    }

    fn keyed_mac(&self, message: &str) -> HmacSha256 {
        let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes())
            .expect("HMAC accepts keys of any length");
        mac.update(message.as_bytes());
        mac
    }
}
