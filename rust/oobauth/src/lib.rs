// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Out-of-band response decision facade.
//!
//! This crate is the primary entry point for hosts: it polls the
//! pending-response store, verifies the signed envelope, and maps the result to
//! one of three decisions (`true`, `false`, `unanswered`).
//!
//! Design note: the types hosts need are re-exported at the crate root so that
//! callers never have to depend on the lower-level crates directly.

mod config;
mod memory_store;
mod node;
mod resolver;
mod retirement;
mod settings;

pub use config::NodeConfig;
pub use memory_store::InMemoryPendingResponseStore;
pub use node::{NodeError, ResponseDecisionNode, RESPONSE_ID_KEY};
pub use resolver::{DecisionResolver, ResolveError};
pub use retirement::Retirement;
pub use settings::{ResolverSettings, StoreFailurePolicy};

pub use oobauth_abstractions::{
    AuthStatus, Decision, PendingResponse, PendingResponseStore, ResolvedResponse, StoreError,
};
pub use oobauth_validation::{DecodeError, TrustedPublicKey};
pub use oobauth_x509::{load_public_key, KeyLoadError};
