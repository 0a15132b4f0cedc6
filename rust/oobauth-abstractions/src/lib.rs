// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Shared interfaces and datatypes for the out-of-band response crates.
//!
//! This crate exists to prevent circular dependencies across:
//! - signature/envelope validation (`oobauth-validation`)
//! - key loading (`oobauth-x509`)
//! - the resolver facade (`oobauth`)
//!
//! It is intentionally kept small and stable.

pub mod decision;
pub mod response;
pub mod store;

pub use decision::{AuthStatus, Decision, ParseDecisionError};
pub use response::{PendingResponse, ResolvedResponse};
pub use store::{PendingResponseStore, StoreError};
