// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Transport-level response types held by the pending-response store.

/// A response the out-of-band party has delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedResponse {
    /// HTTP-like status code.
    pub status: u16,
    /// Raw entity body; expected to carry the signed JSON envelope.
    pub body: Vec<u8>,
}

impl ResolvedResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 2xx status codes count as transport success.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Snapshot of a pending record at poll time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingResponse {
    /// The challenge was issued but nothing has arrived yet.
    Unanswered,
    /// The remote party answered.
    Answered(ResolvedResponse),
}

impl PendingResponse {
    pub fn is_answered(&self) -> bool {
        matches!(self, PendingResponse::Answered(_))
    }
}
