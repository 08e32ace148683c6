// SPDX-License-Identifier: MIT

//! Library API for service-prefs: per-backend preference resolution for
//! multi-service content clients.

mod core;

pub mod config;
pub mod services;
pub mod store;

#[cfg(feature = "cli")]
pub mod cli;

pub use config::{PrefKeys, Settings};
pub use crate::core::error::PrefError;
pub use crate::core::types::{DEFAULT_DOMAIN, Domain, PrefValue};
pub use services::ServicePrefs;
pub use services::registry::{
    BackendRegistry, BackendRuntimeConfig, DEFAULT_FALLBACK_SERVICE, InstanceDescriptor,
    RegistryError, ServiceId,
};
pub use store::{MemoryStore, PlistStore, PreferenceStore};
