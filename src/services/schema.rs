// SPDX-License-Identifier: MIT

//! Typed description of the persisted credentials each backend consumes.
//!
//! Every field carries its key, its type and its default, so the initializer
//! handles "missing" and "malformed" with one exhaustive `match` per backend
//! instead of ad hoc lookups.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;

use crate::{
    config::PrefKeys,
    services::registry::{InstanceDescriptor, ServiceId},
    store::PreferenceStore,
};

/// Optional string preference; absent by default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringField {
    pub key: String,
}

impl StringField {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
        }
    }

    pub fn read<S: PreferenceStore + ?Sized>(&self, store: &S) -> Option<String> {
        store.get_string(&self.key)
    }
}

/// Boolean preference with an explicit default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoolField {
    pub key: String,
    pub default: bool,
}

impl BoolField {
    pub fn new(key: &str, default: bool) -> Self {
        Self {
            key: key.to_string(),
            default,
        }
    }

    pub fn read<S: PreferenceStore + ?Sized>(&self, store: &S) -> bool {
        store.get_bool(&self.key, self.default)
    }
}

/// Outcome of reading a JSON-encoded preference.
#[derive(Debug)]
pub enum JsonRead<T> {
    Missing,
    Malformed(serde_json::Error),
    Value(T),
}

/// String preference holding a JSON document of shape `T`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonField<T> {
    pub key: String,
    shape: PhantomData<fn() -> T>,
}

impl<T: DeserializeOwned> JsonField<T> {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
            shape: PhantomData,
        }
    }

    pub fn read<S: PreferenceStore + ?Sized>(&self, store: &S) -> JsonRead<T> {
        match store.get_string(&self.key) {
            None => JsonRead::Missing,
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(value) => JsonRead::Value(value),
                Err(e) => JsonRead::Malformed(e),
            },
        }
    }
}

/// Credentials a backend reads at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialSchema {
    /// Nothing beyond the static definition.
    None,
    /// A selected instance of a federated backend.
    Instance {
        selected: JsonField<InstanceDescriptor>,
    },
    /// A cookie blob used as auth token, with a user-supplied override.
    CookieToken {
        cookies: StringField,
        override_enabled: BoolField,
        override_value: StringField,
    },
}

impl CredentialSchema {
    pub fn for_service(id: ServiceId, keys: &PrefKeys) -> Self {
        match id {
            ServiceId::PEERTUBE => CredentialSchema::Instance {
                selected: JsonField::new(&keys.peertube_selected_instance),
            },
            ServiceId::NICONICO => CredentialSchema::CookieToken {
                cookies: StringField::new(&keys.niconico_cookies),
                override_enabled: BoolField::new(&keys.override_cookies_niconico, false),
                override_value: StringField::new(&keys.override_cookies_niconico_value),
            },
            ServiceId::BILIBILI => CredentialSchema::CookieToken {
                cookies: StringField::new(&keys.bilibili_cookies),
                override_enabled: BoolField::new(&keys.override_cookies_bilibili, false),
                override_value: StringField::new(&keys.override_cookies_bilibili_value),
            },
            _ => CredentialSchema::None,
        }
    }
}
