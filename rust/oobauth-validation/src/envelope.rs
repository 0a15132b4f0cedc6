// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Signed response envelope decoding.
//!
//! Wire format (JSON):
//!
//! ```text
//! { "payload": "<base64 JSON>", "signature": "<base64>", "algorithm": "sha256" | <other> }
//! ```
//!
//! The decoded payload is itself JSON carrying `authStatus`.
//!
//! Order matters: the signature is checked against the payload string as
//! received, and only a verified payload is base64-decoded and parsed. A bad
//! signature is not an error; it yields the `"invalid"` status.

use base64::Engine as _;
use oobauth_abstractions::AuthStatus;
use serde::Deserialize;

use crate::signature_verifier::ENVELOPE_BASE64;
use crate::{verify_payload_signature, SignatureAlgorithm, TrustedPublicKey};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("malformed envelope: {0}")]
    MalformedEnvelope(String),

    #[error("malformed payload: {0}")]
    MalformedPayload(String),
}

/// Outer envelope. All three fields are required strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Envelope {
    pub payload: String,
    pub signature: String,
    pub algorithm: String,
}

#[derive(Deserialize)]
struct InnerPayload {
    #[serde(rename = "authStatus")]
    auth_status: String,
}

impl Envelope {
    /// Parse an entity body into an envelope.
    pub fn parse(body: &[u8]) -> Result<Self, DecodeError> {
        serde_json::from_slice(body).map_err(|e| DecodeError::MalformedEnvelope(e.to_string()))
    }

    pub fn signature_algorithm(&self) -> SignatureAlgorithm {
        SignatureAlgorithm::from_hint(Some(&self.algorithm))
    }

    /// Check the signature over the raw payload string.
    pub fn verify(&self, key: &TrustedPublicKey) -> bool {
        verify_payload_signature(self.payload.as_bytes(), &self.signature, self.signature_algorithm(), key)
    }

    /// Decode `payload` and extract `authStatus`. Does not check the signature.
    pub fn decode_payload(&self) -> Result<AuthStatus, DecodeError> {
        let json = ENVELOPE_BASE64
            .decode(&self.payload)
            .map_err(|e| DecodeError::MalformedPayload(format!("payload is not valid base64: {e}")))?;
        let inner: InnerPayload =
            serde_json::from_slice(&json).map_err(|e| DecodeError::MalformedPayload(e.to_string()))?;
        Ok(AuthStatus::new(inner.auth_status))
    }
}

/// Extract the authentication status from a signed entity body.
pub fn decode_status(body: &[u8], key: &TrustedPublicKey) -> Result<AuthStatus, DecodeError> {
    let envelope = Envelope::parse(body)?;

    if !envelope.verify(key) {
        tracing::warn!(algorithm = %envelope.algorithm, "invalid envelope signature");
        return Ok(AuthStatus::invalid());
    }

    envelope.decode_payload()
}
