// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::collections::HashMap;

use oobauth_abstractions::{PendingResponse, PendingResponseStore, ResolvedResponse, StoreError};
use parking_lot::Mutex;

/// Process-local pending-response store.
///
/// `register` is called when a challenge is issued, `complete` when the
/// out-of-band answer arrives. An answer is recorded once; later answers for
/// the same id are ignored.
#[derive(Debug, Default)]
pub struct InMemoryPendingResponseStore {
    entries: Mutex<HashMap<String, PendingResponse>>,
}

impl InMemoryPendingResponseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking `response_id`. Returns false if it was already tracked.
    pub fn register(&self, response_id: impl Into<String>) -> bool {
        let mut entries = self.entries.lock();
        let response_id = response_id.into();
        if entries.contains_key(&response_id) {
            return false;
        }
        entries.insert(response_id, PendingResponse::Unanswered);
        true
    }

    /// Record the answer for `response_id`. Returns false if it was already answered.
    pub fn complete(&self, response_id: &str, response: ResolvedResponse) -> Result<bool, StoreError> {
        let mut entries = self.entries.lock();
        let entry = entries
            .get_mut(response_id)
            .ok_or_else(|| StoreError::UnknownResponseId(response_id.to_string()))?;

        if entry.is_answered() {
            tracing::debug!(response_id, "ignoring duplicate answer");
            return Ok(false);
        }
        *entry = PendingResponse::Answered(response);
        Ok(true)
    }

    pub fn contains(&self, response_id: &str) -> bool {
        self.entries.lock().contains_key(response_id)
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl PendingResponseStore for InMemoryPendingResponseStore {
    fn poll(&self, response_id: &str) -> Result<PendingResponse, StoreError> {
        self.entries
            .lock()
            .get(response_id)
            .cloned()
            .ok_or_else(|| StoreError::UnknownResponseId(response_id.to_string()))
    }

    fn remove(&self, response_id: &str) {
        self.entries.lock().remove(response_id);
    }
}
