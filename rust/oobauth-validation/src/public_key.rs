// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Trusted public key material.
//!
//! The key is decoded once from DER SubjectPublicKeyInfo and then shared
//! read-only by every verification call. Non-RSA keys are accepted here so
//! that configuration does not depend on the key type; they simply never
//! verify a signature.

use rsa::pkcs8::DecodePublicKey as _;
use rsa::RsaPublicKey;
use x509_parser::prelude::FromDer as _;

/// `rsaEncryption` algorithm OID from PKCS#1.
pub const RSA_ENCRYPTION_OID: &str = "1.2.840.113549.1.1.1";

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PublicKeyError {
    #[error("invalid SubjectPublicKeyInfo: {0}")]
    InvalidSpki(String),

    #[error("bad RSA public key: {0}")]
    InvalidRsaKey(String),
}

#[derive(Debug, Clone)]
pub struct TrustedPublicKey {
    spki_der: Vec<u8>,
    algorithm_oid: String,
    rsa: Option<RsaPublicKey>,
}

impl TrustedPublicKey {
    /// Decode a DER SubjectPublicKeyInfo.
    pub fn from_spki_der(spki_der: &[u8]) -> Result<Self, PublicKeyError> {
        let (_, spki) = x509_parser::x509::SubjectPublicKeyInfo::from_der(spki_der)
            .map_err(|e| PublicKeyError::InvalidSpki(e.to_string()))?;
        let algorithm_oid = spki.algorithm.algorithm.to_string();

        let rsa = if algorithm_oid == RSA_ENCRYPTION_OID {
            let key = RsaPublicKey::from_public_key_der(spki_der)
                .map_err(|e| PublicKeyError::InvalidRsaKey(e.to_string()))?;
            Some(key)
        } else {
            None
        };

        Ok(Self {
            spki_der: spki_der.to_vec(),
            algorithm_oid,
            rsa,
        })
    }

    pub fn spki_der(&self) -> &[u8] {
        &self.spki_der
    }

    /// Dotted OID of the SPKI algorithm identifier.
    pub fn algorithm_oid(&self) -> &str {
        &self.algorithm_oid
    }

    /// The RSA key, if this is one.
    pub fn rsa(&self) -> Option<&RsaPublicKey> {
        self.rsa.as_ref()
    }

    pub fn is_rsa(&self) -> bool {
        self.rsa.is_some()
    }
}
