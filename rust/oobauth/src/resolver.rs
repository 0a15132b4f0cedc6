// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Decision resolution for a single response id.
//!
//! Flow:
//! 1) Poll the store. A lookup failure goes through `StoreFailurePolicy`;
//!    nothing is retired.
//! 2) Unanswered: `Pending`, no side effects.
//! 3) Answered: arm the retirement guard, then
//!    - non-2xx transport status: `Rejected`
//!    - decode the signed envelope: `"accept"` is `Accepted`, anything else
//!      (including `"invalid"` from a bad signature) is `Rejected`
//!    - a malformed envelope or payload is a hard error, still retired.

use std::sync::Arc;

use oobauth_abstractions::{Decision, PendingResponse, PendingResponseStore, ResolvedResponse, StoreError};
use oobauth_validation::{decode_status, DecodeError, TrustedPublicKey};

use crate::{ResolverSettings, Retirement, StoreFailurePolicy};

#[derive(thiserror::Error, Debug)]
pub enum ResolveError {
    #[error("pending-response store lookup failed")]
    Store(#[source] StoreError),

    /// The responder broke the envelope contract. Details are in `source()`.
    #[error("out-of-band response could not be processed")]
    Protocol(#[source] DecodeError),
}

pub struct DecisionResolver<S> {
    store: S,
    key: Arc<TrustedPublicKey>,
    settings: ResolverSettings,
}

impl<S: PendingResponseStore> DecisionResolver<S> {
    pub fn new(store: S, key: Arc<TrustedPublicKey>) -> Self {
        Self {
            store,
            key,
            settings: ResolverSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: ResolverSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn resolve(&self, response_id: &str) -> Result<Decision, ResolveError> {
        let span = tracing::debug_span!("resolve_response", response_id = %response_id);
        let _enter = span.enter();

        let pending = match self.store.poll(response_id) {
            Ok(p) => p,
            Err(e) => return self.store_failure(e),
        };

        let response = match pending {
            PendingResponse::Unanswered => {
                tracing::debug!("no answer yet");
                return Ok(Decision::Pending);
            }
            PendingResponse::Answered(response) => response,
        };

        // Dropped after `decide` returns, on every path.
        let _retirement = Retirement::new(&self.store, response_id);
        let decision = self.decide(&response)?;
        tracing::debug!(%decision, "resolved");
        Ok(decision)
    }

    fn decide(&self, response: &ResolvedResponse) -> Result<Decision, ResolveError> {
        if !response.is_success() {
            tracing::debug!(status = response.status, "responder returned a non-success status");
            return Ok(Decision::Rejected);
        }

        let status = decode_status(&response.body, &self.key).map_err(|e| {
            tracing::error!(error = %e, "malformed out-of-band response");
            ResolveError::Protocol(e)
        })?;
        tracing::debug!(auth_status = %status, "decoded response status");

        Ok(status.decision())
    }

    /// Apply the configured policy to a failed lookup.
    pub(crate) fn store_failure(&self, error: StoreError) -> Result<Decision, ResolveError> {
        let policy = self.settings.store_failure_policy;
        if policy == StoreFailurePolicy::Reject {
            tracing::warn!(error = %error, "pending-response lookup failed; rejecting");
        }
        policy.apply(error).map_err(ResolveError::Store)
    }
}
