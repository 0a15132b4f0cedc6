// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

pub mod envelope;
pub mod public_key;
pub mod signature_verifier;

pub use envelope::{decode_status, DecodeError, Envelope};
pub use public_key::{PublicKeyError, TrustedPublicKey, RSA_ENCRYPTION_OID};
pub use signature_verifier::{verify_payload_signature, SignatureAlgorithm};
