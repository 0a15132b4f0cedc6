// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use oobauth_abstractions::{Decision, StoreError};
use serde::Deserialize;

/// What to do when the pending-response store cannot be queried.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreFailurePolicy {
    /// Treat the failure as a rejection. Nothing is retired.
    #[default]
    Reject,
    /// Surface the failure to the caller as an error.
    Propagate,
}

impl StoreFailurePolicy {
    pub fn apply(self, error: StoreError) -> Result<Decision, StoreError> {
        match self {
            StoreFailurePolicy::Reject => Ok(Decision::Rejected),
            StoreFailurePolicy::Propagate => Err(error),
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct ResolverSettings {
    pub(crate) store_failure_policy: StoreFailurePolicy,
}

impl ResolverSettings {
    pub fn with_store_failure_policy(mut self, policy: StoreFailurePolicy) -> Self {
        self.store_failure_policy = policy;
        self
    }

    pub fn store_failure_policy(&self) -> StoreFailurePolicy {
        self.store_failure_policy
    }
}
