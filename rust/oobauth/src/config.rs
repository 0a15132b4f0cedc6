// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Node configuration.
//!
//! ```json
//! { "serviceCert": "-----BEGIN CERTIFICATE-----\n...", "storeFailurePolicy": "reject" }
//! ```

use std::fmt;

use serde::Deserialize;

use crate::{ResolverSettings, StoreFailurePolicy};

#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeConfig {
    /// Certificate (or public key) of the out-of-band responder. See `oobauth_x509`.
    pub service_cert: String,

    #[serde(default)]
    pub store_failure_policy: StoreFailurePolicy,
}

impl NodeConfig {
    pub fn new(service_cert: impl Into<String>) -> Self {
        Self {
            service_cert: service_cert.into(),
            store_failure_policy: StoreFailurePolicy::default(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn with_store_failure_policy(mut self, policy: StoreFailurePolicy) -> Self {
        self.store_failure_policy = policy;
        self
    }

    pub fn resolver_settings(&self) -> ResolverSettings {
        ResolverSettings::default().with_store_failure_policy(self.store_failure_policy)
    }
}

// The certificate is configured as a secret attribute; keep it out of logs.
impl fmt::Debug for NodeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeConfig")
            .field("service_cert", &"<redacted>")
            .field("store_failure_policy", &self.store_failure_policy)
            .finish()
    }
}
