// SPDX-License-Identifier: MIT

//! Error types for preference storage.

use thiserror::Error;

/// Errors that can occur when interacting with a preference store.
#[derive(Debug, Error)]
pub enum PrefError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Plist error: {0}")]
    Plist(#[from] plist::Error),
    #[error("Key not found")]
    KeyNotFound,
    #[error("Invalid type: expected {expected}, found {found}")]
    InvalidType {
        expected: &'static str,
        found: &'static str,
    },
    #[error("{0}")]
    Other(String),
}
