// SPDX-License-Identifier: MIT

//! The catalog of supported backends and their mutable runtime configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable numeric identifier of a backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceId(pub u32);

impl ServiceId {
    pub const YOUTUBE: ServiceId = ServiceId(0);
    pub const SOUNDCLOUD: ServiceId = ServiceId(1);
    pub const MEDIA_CCC: ServiceId = ServiceId(2);
    pub const PEERTUBE: ServiceId = ServiceId(3);
    pub const BANDCAMP: ServiceId = ServiceId(4);
    pub const BILIBILI: ServiceId = ServiceId(5);
    pub const NICONICO: ServiceId = ServiceId(6);
}

impl std::fmt::Display for ServiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A backend's id together with its persisted name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceRef {
    pub id: ServiceId,
    pub name: &'static str,
}

/// Backend substituted whenever a selection cannot be resolved.
pub const DEFAULT_FALLBACK_SERVICE: ServiceRef = ServiceRef {
    id: ServiceId::YOUTUBE,
    name: "YouTube",
};

/// Built-in catalog, in registry enumeration order.
pub const BUILTIN_SERVICES: [ServiceRef; 7] = [
    DEFAULT_FALLBACK_SERVICE,
    ServiceRef {
        id: ServiceId::SOUNDCLOUD,
        name: "SoundCloud",
    },
    ServiceRef {
        id: ServiceId::MEDIA_CCC,
        name: "media.ccc.de",
    },
    ServiceRef {
        id: ServiceId::PEERTUBE,
        name: "PeerTube",
    },
    ServiceRef {
        id: ServiceId::BANDCAMP,
        name: "Bandcamp",
    },
    ServiceRef {
        id: ServiceId::BILIBILI,
        name: "BiliBili",
    },
    ServiceRef {
        id: ServiceId::NICONICO,
        name: "NicoNico",
    },
];

pub const DEFAULT_PEERTUBE_URL: &str = "https://framatube.org";
pub const DEFAULT_PEERTUBE_NAME: &str = "FramaTube";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("No service named `{0}`")]
    UnknownName(String),
    #[error("No service with id {0}")]
    UnknownId(ServiceId),
    #[error("Service {id} (`{name}`) is already registered")]
    Duplicate { id: ServiceId, name: String },
}

/// A specific deployment of a federated backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceDescriptor {
    pub url: String,
    pub name: String,
}

impl InstanceDescriptor {
    pub fn new(url: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            name: name.into(),
        }
    }
}

/// Runtime state a backend needs beyond its static definition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackendRuntimeConfig {
    pub instance: Option<InstanceDescriptor>,
    pub auth_token: Option<String>,
}

impl BackendRuntimeConfig {
    pub fn set_instance(&mut self, url: impl Into<String>, name: impl Into<String>) {
        self.instance = Some(InstanceDescriptor::new(url, name));
    }

    pub fn set_auth_token(&mut self, token: Option<String>) {
        self.auth_token = token;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceEntry {
    pub id: ServiceId,
    pub name: String,
    pub runtime: BackendRuntimeConfig,
}

/// Owns one [`ServiceEntry`] per backend, in registration order.
#[derive(Debug, Clone, Default)]
pub struct BackendRegistry {
    services: Vec<ServiceEntry>,
}

impl BackendRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in catalog with default runtime configuration.
    pub fn builtin() -> Self {
        let services = BUILTIN_SERVICES
            .iter()
            .map(|service| {
                let mut runtime = BackendRuntimeConfig::default();
                if service.id == ServiceId::PEERTUBE {
                    runtime.set_instance(DEFAULT_PEERTUBE_URL, DEFAULT_PEERTUBE_NAME);
                }
                ServiceEntry {
                    id: service.id,
                    name: service.name.to_string(),
                    runtime,
                }
            })
            .collect();
        Self { services }
    }

    /// Adds a backend. Both its id and its name must be unused.
    pub fn register(
        &mut self,
        id: ServiceId,
        name: impl Into<String>,
        runtime: BackendRuntimeConfig,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        if self.services.iter().any(|s| s.id == id || s.name == name) {
            return Err(RegistryError::Duplicate { id, name });
        }
        self.services.push(ServiceEntry { id, name, runtime });
        Ok(())
    }

    pub fn resolve_by_name(&self, name: &str) -> Result<ServiceId, RegistryError> {
        self.services
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.id)
            .ok_or_else(|| RegistryError::UnknownName(name.to_string()))
    }

    pub fn resolve_by_id(&self, id: ServiceId) -> Result<&str, RegistryError> {
        self.entry(id)
            .map(|s| s.name.as_str())
            .ok_or(RegistryError::UnknownId(id))
    }

    /// Backend substituted for an unresolvable selection.
    ///
    /// [`DEFAULT_FALLBACK_SERVICE`] when it is registered, otherwise the first
    /// registered backend, so the result always resolves in a non-empty registry.
    pub fn fallback(&self) -> (ServiceId, &str) {
        self.entry(DEFAULT_FALLBACK_SERVICE.id)
            .filter(|s| s.name == DEFAULT_FALLBACK_SERVICE.name)
            .or_else(|| self.services.first())
            .map_or(
                (DEFAULT_FALLBACK_SERVICE.id, DEFAULT_FALLBACK_SERVICE.name),
                |s| (s.id, s.name.as_str()),
            )
    }

    /// Ids of every registered backend, in enumeration order.
    pub fn all_services(&self) -> Vec<ServiceId> {
        self.services.iter().map(|s| s.id).collect()
    }

    pub fn entries(&self) -> &[ServiceEntry] {
        &self.services
    }

    pub fn get(&self, id: ServiceId) -> Option<&BackendRuntimeConfig> {
        self.entry(id).map(|s| &s.runtime)
    }

    pub fn get_mut(&mut self, id: ServiceId) -> Option<&mut BackendRuntimeConfig> {
        self.services
            .iter_mut()
            .find(|s| s.id == id)
            .map(|s| &mut s.runtime)
    }

    fn entry(&self, id: ServiceId) -> Option<&ServiceEntry> {
        self.services.iter().find(|s| s.id == id)
    }
}
