use thiserror::Error;

/// Errors that can arise while constructing a signer or decoding a token.
///
/// A digest mismatch is not represented here: a token that parses but was
/// tampered with or forged is the expected rejection case, reported as
/// `false` by [`crate::TokenSigner::verify`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SignError {
    #[error("secret must not be empty")]
    EmptySecret,
    #[error("malformed token: {0}")]
    Malformed(String),
}
