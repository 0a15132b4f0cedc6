// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Detached signature verification for out-of-band response envelopes.
//!
//! The remote party signs the base64 payload *string* (not the decoded JSON)
//! with RSASSA-PKCS1-v1_5. The digest is chosen by the envelope's `algorithm`
//! hint:
//! - `"sha256"` selects SHA-256.
//! - Anything else, including no hint at all, selects SHA-1.
//!
//! The SHA-1 default is kept for wire compatibility with existing responders.
//!
//! Verification is binary. Every failure (wrong key type, bad base64,
//! cryptographic mismatch) collapses to `false`; the reason is only logged.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine as _;
use rsa::pkcs1v15;
use rsa::RsaPublicKey;
use sha1::Sha1;
use sha2::Sha256;
use signature::Verifier as _;

use crate::TrustedPublicKey;

/// Standard alphabet; `=` padding is optional on decode, as responders may omit it.
pub(crate) const ENVELOPE_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SignatureAlgorithm {
    /// RSASSA-PKCS1-v1_5 w/ SHA-256.
    RsaSha256,
    /// RSASSA-PKCS1-v1_5 w/ SHA-1.
    RsaSha1,
}

impl SignatureAlgorithm {
    /// The only hint value that selects SHA-256.
    pub const SHA256_HINT: &'static str = "sha256";

    pub fn from_hint(hint: Option<&str>) -> Self {
        match hint {
            Some(Self::SHA256_HINT) => SignatureAlgorithm::RsaSha256,
            _ => SignatureAlgorithm::RsaSha1,
        }
    }
}

/// Verify `signature_b64` over `payload` with the trusted key.
pub fn verify_payload_signature(
    payload: &[u8],
    signature_b64: &str,
    algorithm: SignatureAlgorithm,
    key: &TrustedPublicKey,
) -> bool {
    if algorithm == SignatureAlgorithm::RsaSha1 {
        tracing::debug!("verifying envelope with legacy SHA-1 signature scheme");
    }

    match try_verify(payload, signature_b64, algorithm, key) {
        Ok(()) => true,
        Err((code, msg)) => {
            tracing::debug!(code = %code, ?algorithm, "{msg}");
            false
        }
    }
}

fn try_verify(
    payload: &[u8],
    signature_b64: &str,
    algorithm: SignatureAlgorithm,
    key: &TrustedPublicKey,
) -> Result<(), (String, String)> {
    let rsa_key = key.rsa().ok_or_else(|| {
        (
            "INVALID_PUBLIC_KEY".to_string(),
            format!("expected an RSA public key, got algorithm {}", key.algorithm_oid()),
        )
    })?;

    let sig = ENVELOPE_BASE64
        .decode(signature_b64)
        .map_err(|e| ("BAD_SIGNATURE".to_string(), format!("signature is not valid base64: {e}")))?;

    verify_rsa_pkcs1(rsa_key, algorithm, payload, &sig)
}

fn verify_rsa_pkcs1(
    key: &RsaPublicKey,
    algorithm: SignatureAlgorithm,
    msg: &[u8],
    sig: &[u8],
) -> Result<(), (String, String)> {
    let signature = pkcs1v15::Signature::try_from(sig)
        .map_err(|e| ("BAD_SIGNATURE".to_string(), format!("bad RSA signature bytes: {e}")))?;

    let verified = match algorithm {
        SignatureAlgorithm::RsaSha256 => pkcs1v15::VerifyingKey::<Sha256>::new(key.clone()).verify(msg, &signature),
        SignatureAlgorithm::RsaSha1 => pkcs1v15::VerifyingKey::<Sha1>::new(key.clone()).verify(msg, &signature),
    };

    verified.map_err(|_| ("BAD_SIGNATURE".to_string(), "signature verification failed".to_string()))
}
