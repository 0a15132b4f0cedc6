// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Trusted key loading from the node's certificate configuration string.
//!
//! Accepted inputs:
//! - PEM `CERTIFICATE` (the SubjectPublicKeyInfo is extracted)
//! - PEM `PUBLIC KEY` (DER SPKI)
//! - Bare standard base64 of a DER certificate or DER SPKI; embedded
//!   whitespace and line breaks are ignored.
//!
//! The certificate itself is not validated (no chain, no validity window).
//! It is configured out-of-band by an administrator and only serves as a
//! carrier for the responder's public key.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use oobauth_validation::{PublicKeyError, TrustedPublicKey};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyLoadError {
    #[error("certificate configuration is empty")]
    Empty,

    #[error("invalid PEM: {0}")]
    InvalidPem(String),

    #[error("unsupported PEM label '{0}'")]
    UnsupportedPemLabel(String),

    #[error("certificate configuration is not valid base64: {0}")]
    InvalidBase64(String),

    #[error(transparent)]
    PublicKey(#[from] PublicKeyError),
}

/// Load the trusted public key from a certificate configuration string.
pub fn load_public_key(cert_config: &str) -> Result<TrustedPublicKey, KeyLoadError> {
    let trimmed = cert_config.trim();
    if trimmed.is_empty() {
        return Err(KeyLoadError::Empty);
    }

    let key = if trimmed.starts_with("-----BEGIN") {
        load_pem(trimmed)?
    } else {
        let compact: String = trimmed.chars().filter(|c| !c.is_whitespace()).collect();
        let der = STANDARD
            .decode(compact)
            .map_err(|e| KeyLoadError::InvalidBase64(e.to_string()))?;
        from_der_key_or_cert(&der)?
    };

    tracing::debug!(algorithm = key.algorithm_oid(), rsa = key.is_rsa(), "loaded trusted public key");
    if !key.is_rsa() {
        tracing::warn!(
            algorithm = key.algorithm_oid(),
            "trusted key is not RSA; response signatures will never verify"
        );
    }

    Ok(key)
}

fn load_pem(pem_text: &str) -> Result<TrustedPublicKey, KeyLoadError> {
    let (_, pem) =
        x509_parser::pem::parse_x509_pem(pem_text.as_bytes()).map_err(|e| KeyLoadError::InvalidPem(e.to_string()))?;

    match pem.label.as_str() {
        "CERTIFICATE" => {
            let (_, cert) = x509_parser::parse_x509_certificate(&pem.contents)
                .map_err(|e| KeyLoadError::InvalidPem(format!("invalid cert DER: {e}")))?;
            Ok(TrustedPublicKey::from_spki_der(cert.tbs_certificate.subject_pki.raw)?)
        }
        "PUBLIC KEY" => Ok(TrustedPublicKey::from_spki_der(&pem.contents)?),
        other => Err(KeyLoadError::UnsupportedPemLabel(other.to_string())),
    }
}

/// Normalize DER input: a certificate yields its SPKI, anything else is taken as SPKI.
fn from_der_key_or_cert(der: &[u8]) -> Result<TrustedPublicKey, KeyLoadError> {
    if let Ok((_, cert)) = x509_parser::parse_x509_certificate(der) {
        // `raw` is the DER encoding of the SPKI structure inside the certificate.
        return Ok(TrustedPublicKey::from_spki_der(cert.tbs_certificate.subject_pki.raw)?);
    }
    Ok(TrustedPublicKey::from_spki_der(der)?)
}
