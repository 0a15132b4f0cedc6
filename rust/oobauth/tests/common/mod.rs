// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Shared helpers for `oobauth` integration tests.
//!
//! Provides a signing key generated once per test binary, envelope builders,
//! and store doubles that count removals.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use oobauth::{
    InMemoryPendingResponseStore, PendingResponse, PendingResponseStore, ResolvedResponse, StoreError,
    TrustedPublicKey,
};
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use rsa::pkcs1v15;
use rsa::pkcs8::{EncodePublicKey as _, LineEnding};
use rsa::RsaPrivateKey;
use signature::SignatureEncoding as _;
use signature::Signer as _;

pub(crate) static SIGNING_KEY: Lazy<RsaPrivateKey> = Lazy::new(|| {
    let mut rng = rsa::rand_core::OsRng;
    RsaPrivateKey::new(&mut rng, 2048).unwrap()
});

pub(crate) fn trusted_key() -> Arc<TrustedPublicKey> {
    let der = SIGNING_KEY.to_public_key().to_public_key_der().unwrap();
    Arc::new(TrustedPublicKey::from_spki_der(der.as_bytes()).unwrap())
}

pub(crate) fn public_key_pem() -> String {
    SIGNING_KEY.to_public_key().to_public_key_pem(LineEnding::LF).unwrap()
}

pub(crate) fn sign_sha256(msg: &[u8]) -> String {
    let signing_key = pkcs1v15::SigningKey::<sha2::Sha256>::new(SIGNING_KEY.clone());
    let signature: pkcs1v15::Signature = signing_key.sign(msg);
    STANDARD.encode(signature.to_bytes())
}

pub(crate) fn sign_sha1(msg: &[u8]) -> String {
    let signing_key = pkcs1v15::SigningKey::<sha1::Sha1>::new(SIGNING_KEY.clone());
    let signature: pkcs1v15::Signature = signing_key.sign(msg);
    STANDARD.encode(signature.to_bytes())
}

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

/// Envelope with `authStatus = status`, signed with SHA-256.
pub(crate) fn signed_envelope(status: &str) -> Vec<u8> {
    let payload = encode_payload(status);
    let signature = sign_sha256(payload.as_bytes());
    envelope_json(&payload, &signature, "sha256")
}

pub(crate) fn ok_response(body: Vec<u8>) -> ResolvedResponse {
    ResolvedResponse::new(200, body)
}

/// In-memory store that records every `remove` call.
#[derive(Default)]
pub(crate) struct RecordingStore {
    pub(crate) inner: InMemoryPendingResponseStore,
    removals: Mutex<HashMap<String, usize>>,
}

impl RecordingStore {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Register `response_id` and, if given, answer it.
    pub(crate) fn seed(&self, response_id: &str, response: Option<ResolvedResponse>) {
        self.inner.register(response_id);
        if let Some(response) = response {
            self.inner.complete(response_id, response).unwrap();
        }
    }

    pub(crate) fn removals(&self, response_id: &str) -> usize {
        self.removals.lock().get(response_id).copied().unwrap_or(0)
    }

    pub(crate) fn total_removals(&self) -> usize {
        self.removals.lock().values().sum()
    }
}

impl PendingResponseStore for RecordingStore {
    fn poll(&self, response_id: &str) -> Result<PendingResponse, StoreError> {
        self.inner.poll(response_id)
    }

    fn remove(&self, response_id: &str) {
        *self.removals.lock().entry(response_id.to_string()).or_default() += 1;
        self.inner.remove(response_id);
    }
}

/// A store whose backend is down.
#[derive(Default)]
pub(crate) struct UnavailableStore {
    pub(crate) removals: Mutex<usize>,
}

impl PendingResponseStore for UnavailableStore {
    fn poll(&self, _response_id: &str) -> Result<PendingResponse, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    fn remove(&self, _response_id: &str) {
        *self.removals.lock() += 1;
    }
}
