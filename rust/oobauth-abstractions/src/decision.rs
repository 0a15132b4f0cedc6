// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Decision and status types.
//!
//! `Decision` is the three-valued result the host runtime branches on.
//! `AuthStatus` is the status string carried inside a verified envelope.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Outcome of resolving one out-of-band response.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decision {
    /// The remote party accepted and the envelope verified.
    #[serde(rename = "true")]
    Accepted,
    /// Rejected, forged, failed transport, or unknown response.
    #[serde(rename = "false")]
    Rejected,
    /// No answer yet; poll again later.
    #[serde(rename = "unanswered")]
    Pending,
}

impl Decision {
    /// All decisions in branch order.
    pub const ALL: [Decision; 3] = [Decision::Accepted, Decision::Rejected, Decision::Pending];

    /// Branch target id exposed to the host runtime.
    pub fn outcome_id(self) -> &'static str {
        match self {
            Decision::Accepted => "true",
            Decision::Rejected => "false",
            Decision::Pending => "unanswered",
        }
    }

    /// True when the challenge lifecycle ends with this decision.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Decision::Pending)
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.outcome_id())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown outcome id: {0}")]
pub struct ParseDecisionError(pub String);

impl FromStr for Decision {
    type Err = ParseDecisionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decision::ALL
            .into_iter()
            .find(|d| d.outcome_id() == s)
            .ok_or_else(|| ParseDecisionError(s.to_string()))
    }
}

/// Authentication status reported by the remote party.
///
/// Any literal is allowed; only `"accept"` leads to `Decision::Accepted`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AuthStatus(String);

impl AuthStatus {
    /// The literal the remote party sends to approve the challenge.
    pub const ACCEPT: &'static str = "accept";
    /// Sentinel used when the envelope signature did not verify.
    pub const INVALID: &'static str = "invalid";

    pub fn new(status: impl Into<String>) -> Self {
        Self(status.into())
    }

    pub fn invalid() -> Self {
        Self::new(Self::INVALID)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_accept(&self) -> bool {
        self.0 == Self::ACCEPT
    }

    /// Map the status onto a terminal decision.
    pub fn decision(&self) -> Decision {
        if self.is_accept() {
            Decision::Accepted
        } else {
            Decision::Rejected
        }
    }
}

impl fmt::Display for AuthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
