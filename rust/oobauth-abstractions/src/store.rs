// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Pending-response store interface.
//!
//! The store is populated by whatever receives the out-of-band answer. The
//! resolver only polls and removes.

use crate::PendingResponse;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("unknown response id '{0}'")]
    UnknownResponseId(String),

    #[error("no response id in shared state")]
    MissingResponseId,

    #[error("pending-response store unavailable: {0}")]
    Unavailable(String),
}

/// Holder of pending out-of-band responses keyed by response id.
///
/// Contract:
/// - `poll` never blocks; it reports what the store holds at call time.
/// - `poll` returns `Err(StoreError::UnknownResponseId)` for ids that were never
///   registered or have already been removed.
/// - `remove` is idempotent; removing an unknown id is a no-op.
pub trait PendingResponseStore: Send + Sync {
    fn poll(&self, response_id: &str) -> Result<PendingResponse, StoreError>;

    fn remove(&self, response_id: &str);
}

impl<S: PendingResponseStore + ?Sized> PendingResponseStore for std::sync::Arc<S> {
    fn poll(&self, response_id: &str) -> Result<PendingResponse, StoreError> {
        (**self).poll(response_id)
    }

    fn remove(&self, response_id: &str) {
        (**self).remove(response_id)
    }
}
