// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Shared helpers for `oobauth-validation` integration tests.
//!
//! RSA key generation is expensive, so each test binary generates its keys
//! once and reuses them.

#![allow(dead_code)]

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use once_cell::sync::Lazy;
use oobauth_validation::TrustedPublicKey;
use rsa::pkcs1v15;
use rsa::pkcs8::EncodePublicKey as _;
use rsa::RsaPrivateKey;
use signature::SignatureEncoding as _;
use signature::Signer as _;

pub(crate) static SIGNING_KEY: Lazy<RsaPrivateKey> = Lazy::new(generate_key);
pub(crate) static OTHER_SIGNING_KEY: Lazy<RsaPrivateKey> = Lazy::new(generate_key);

fn generate_key() -> RsaPrivateKey {
    let mut rng = rsa::rand_core::OsRng;
    RsaPrivateKey::new(&mut rng, 2048).unwrap()
}

pub(crate) fn trusted_key_for(sk: &RsaPrivateKey) -> TrustedPublicKey {
    let der = sk.to_public_key().to_public_key_der().unwrap();
    TrustedPublicKey::from_spki_der(der.as_bytes()).unwrap()
}

/// The key matching `SIGNING_KEY`.
pub(crate) fn trusted_key() -> TrustedPublicKey {
    trusted_key_for(&SIGNING_KEY)
}

/// A P-256 SubjectPublicKeyInfo with a dummy point.
///
/// The point is never decoded; only the algorithm OID matters to the verifier.
pub(crate) fn ec_spki_der() -> Vec<u8> {
    let mut der = vec![
        0x30, 0x59, 0x30, 0x13, 0x06, 0x07, 0x2a, 0x86, 0x48, 0xce, 0x3d, 0x02, 0x01, 0x06, 0x08, 0x2a, 0x86, 0x48,
        0xce, 0x3d, 0x03, 0x01, 0x07, 0x03, 0x42, 0x00, 0x04,
    ];
    der.extend_from_slice(&[0x11; 64]);
    der
}

pub(crate) fn sign_sha256(sk: &RsaPrivateKey, msg: &[u8]) -> String {
    let signing_key = pkcs1v15::SigningKey::<sha2::Sha256>::new(sk.clone());
    let signature: pkcs1v15::Signature = signing_key.sign(msg);
    STANDARD.encode(signature.to_bytes())
}

pub(crate) fn sign_sha1(sk: &RsaPrivateKey, msg: &[u8]) -> String {
    let signing_key = pkcs1v15::SigningKey::<sha1::Sha1>::new(sk.clone());
    let signature: pkcs1v15::Signature = signing_key.sign(msg);
    STANDARD.encode(signature.to_bytes())
}

/// Base64 of `{"authStatus": status}`.
pub(crate) fn encode_payload(status: &str) -> String {
    STANDARD.encode(serde_json::json!({ "authStatus": status }).to_string())
}

pub(crate) fn envelope_json(payload: &str, signature: &str, algorithm: &str) -> Vec<u8> {
    serde_json::json!({
        "payload": payload,
        "signature": signature,
        "algorithm": algorithm,
    })
    .to_string()
    .into_bytes()
}

/// An envelope over `payload` signed by `SIGNING_KEY` with the scheme `algorithm` selects.
pub(crate) fn signed_envelope_for_payload(payload: &str, algorithm: &str) -> Vec<u8> {
    let signature = if algorithm == "sha256" {
        sign_sha256(&SIGNING_KEY, payload.as_bytes())
    } else {
        sign_sha1(&SIGNING_KEY, payload.as_bytes())
    };
    envelope_json(payload, &signature, algorithm)
}

pub(crate) fn signed_envelope(status: &str, algorithm: &str) -> Vec<u8> {
    signed_envelope_for_payload(&encode_payload(status), algorithm)
}
