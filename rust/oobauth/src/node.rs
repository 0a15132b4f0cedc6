// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Host-facing decision node.
//!
//! The host runtime constructs one node per configured tree step, then calls
//! `process` with the flow's shared state on every poll.

use std::sync::Arc;

use oobauth_abstractions::{Decision, PendingResponseStore, StoreError};
use oobauth_validation::TrustedPublicKey;
use oobauth_x509::{load_public_key, KeyLoadError};
use serde_json::Value;

use crate::{DecisionResolver, NodeConfig, ResolveError, ResolverSettings};

/// Shared-state key holding the response id written when the challenge was issued.
pub const RESPONSE_ID_KEY: &str = "oobResponseId";

#[derive(thiserror::Error, Debug)]
pub enum NodeError {
    #[error("invalid responder certificate: {0}")]
    Config(#[from] KeyLoadError),

    #[error(transparent)]
    Process(#[from] ResolveError),
}

pub struct ResponseDecisionNode {
    resolver: DecisionResolver<Arc<dyn PendingResponseStore>>,
}

impl ResponseDecisionNode {
    /// Build a node, loading the trusted key from `config`.
    ///
    /// Fails if the certificate cannot be loaded; no request is ever processed
    /// with a missing key.
    pub fn new(config: &NodeConfig, store: Arc<dyn PendingResponseStore>) -> Result<Self, NodeError> {
        let key = load_public_key(&config.service_cert)?;
        Ok(Self::with_key(Arc::new(key), store, config.resolver_settings()))
    }

    pub fn with_key(
        key: Arc<TrustedPublicKey>,
        store: Arc<dyn PendingResponseStore>,
        settings: ResolverSettings,
    ) -> Self {
        Self {
            resolver: DecisionResolver::new(store, key).with_settings(settings),
        }
    }

    /// Branch targets in display order.
    pub fn outcomes() -> [Decision; 3] {
        Decision::ALL
    }

    pub fn process(&self, shared_state: &Value) -> Result<Decision, NodeError> {
        let Some(response_id) = shared_state.get(RESPONSE_ID_KEY).and_then(Value::as_str) else {
            return Ok(self.resolver.store_failure(StoreError::MissingResponseId)?);
        };

        Ok(self.resolver.resolve(response_id)?)
    }
}
