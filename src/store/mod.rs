// SPDX-License-Identifier: MIT

//! Key-value preference stores.
//!
//! Everything above this module talks to a [`PreferenceStore`]; it never knows
//! whether values live in memory or in a plist file. Reads are infallible (a
//! missing or mistyped value reads as absent), writes report I/O failures.

mod memory;
mod plist_file;

pub use memory::MemoryStore;
pub use plist_file::PlistStore;

use crate::core::{error::PrefError, types::PrefValue};

/// Synchronous, single-key-atomic preference storage.
pub trait PreferenceStore {
    /// Returns the raw value stored under `key`.
    fn get_value(&self, key: &str) -> Option<PrefValue>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set_value(&mut self, key: &str, value: PrefValue) -> Result<(), PrefError>;

    /// Removes `key`. Fails with [`PrefError::KeyNotFound`] when it is not set.
    fn remove(&mut self, key: &str) -> Result<(), PrefError>;

    /// Returns the string under `key`; values of any other type read as absent.
    fn get_string(&self, key: &str) -> Option<String> {
        match self.get_value(key)? {
            PrefValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the boolean under `key`, or `default` when unset or not a boolean.
    fn get_bool(&self, key: &str, default: bool) -> bool {
        self.get_value(key)
            .and_then(|v| v.as_bool())
            .unwrap_or(default)
    }

    fn set_string(&mut self, key: &str, value: &str) -> Result<(), PrefError> {
        self.set_value(key, PrefValue::String(value.to_string()))
    }

    fn set_bool(&mut self, key: &str, value: bool) -> Result<(), PrefError> {
        self.set_value(key, PrefValue::Boolean(value))
    }
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for &mut S {
    fn get_value(&self, key: &str) -> Option<PrefValue> {
        (**self).get_value(key)
    }

    fn set_value(&mut self, key: &str, value: PrefValue) -> Result<(), PrefError> {
        (**self).set_value(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), PrefError> {
        (**self).remove(key)
    }
}
