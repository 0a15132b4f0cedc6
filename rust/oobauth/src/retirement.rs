// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use oobauth_abstractions::PendingResponseStore;

/// Removes a pending response from the store when dropped.
///
/// Created as soon as a resolved response has been observed, so every exit
/// from the decision path retires the record exactly once: normal return,
/// early return, `?` propagation, or unwinding.
#[must_use = "the record is retired when the guard is dropped"]
pub struct Retirement<'a, S: PendingResponseStore + ?Sized> {
    store: &'a S,
    response_id: &'a str,
}

impl<'a, S: PendingResponseStore + ?Sized> Retirement<'a, S> {
    pub fn new(store: &'a S, response_id: &'a str) -> Self {
        Self { store, response_id }
    }
}

impl<S: PendingResponseStore + ?Sized> Drop for Retirement<'_, S> {
    fn drop(&mut self) {
        self.store.remove(self.response_id);
        tracing::debug!(response_id = %self.response_id, "retired pending response");
    }
}
