// SPDX-License-Identifier: MIT

//! Per-backend preference resolution.
//!
//! [`ServicePrefs`] ties a [`PreferenceStore`] to the persisted key names and
//! exposes the two stateful operations of this crate: choosing the active
//! backend and pushing stored credentials into a [`registry::BackendRegistry`].
//! Both are total; every failure degrades to a default.

mod init;
pub mod lookup;
pub mod registry;
pub mod schema;
mod selection;

use crate::{config::PrefKeys, store::PreferenceStore};

/// Preference-backed view of the service catalog.
pub struct ServicePrefs<S> {
    store: S,
    keys: PrefKeys,
}

impl<S: PreferenceStore> ServicePrefs<S> {
    pub fn new(store: S, keys: PrefKeys) -> Self {
        Self { store, keys }
    }

    pub fn keys(&self) -> &PrefKeys {
        &self.keys
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
