// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

pub mod key_loader;

pub use key_loader::{load_public_key, KeyLoadError};
