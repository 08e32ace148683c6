// SPDX-License-Identifier: MIT

//! Where preferences are stored and which keys hold what.

use std::path::PathBuf;

use crate::core::types::Domain;

/// Explicit plist file to use as the preference store.
pub const ENV_PREFS_FILE: &str = "SERVICE_PREFS_FILE";
/// Application id whose preference file should be used.
pub const ENV_PREFS_DOMAIN: &str = "SERVICE_PREFS_DOMAIN";

/// Names of every persisted key this crate reads or writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefKeys {
    pub current_service: String,
    /// Service name assumed when nothing has been selected yet.
    pub default_service: String,
    pub peertube_selected_instance: String,
    pub niconico_cookies: String,
    pub override_cookies_niconico: String,
    pub override_cookies_niconico_value: String,
    pub bilibili_cookies: String,
    pub override_cookies_bilibili: String,
    pub override_cookies_bilibili_value: String,
}

impl Default for PrefKeys {
    fn default() -> Self {
        Self {
            current_service: "service".into(),
            default_service: "YouTube".into(),
            peertube_selected_instance: "peertube_selected_instance".into(),
            niconico_cookies: "niconico_cookies".into(),
            override_cookies_niconico: "override_cookies_niconico".into(),
            override_cookies_niconico_value: "override_cookies_niconico_value".into(),
            bilibili_cookies: "bilibili_cookies".into(),
            override_cookies_bilibili: "override_cookies_bilibili".into(),
            override_cookies_bilibili_value: "override_cookies_bilibili_value".into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub domain: Domain,
    pub keys: PrefKeys,
}

impl Settings {
    /// Reads the store location from the environment.
    ///
    /// `SERVICE_PREFS_FILE` wins over `SERVICE_PREFS_DOMAIN`; with neither set
    /// the default application domain is used.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let domain = match (non_empty(ENV_PREFS_FILE), non_empty(ENV_PREFS_DOMAIN)) {
            (Some(file), _) => Domain::Path(PathBuf::from(file)),
            (None, Some(app_id)) => Domain::User(app_id),
            (None, None) => Domain::default(),
        };
        Self {
            domain,
            keys: PrefKeys::default(),
        }
    }
}
