// SPDX-License-Identifier: MIT

use tracing::debug;

use crate::{
    services::{
        ServicePrefs,
        registry::{BackendRegistry, ServiceId},
        schema::{CredentialSchema, JsonRead},
    },
    store::PreferenceStore,
};

impl<S: PreferenceStore> ServicePrefs<S> {
    /// Applies every registered backend's stored credentials, in registry order.
    pub fn init_services(&self, registry: &mut BackendRegistry) {
        for id in registry.all_services() {
            self.init_service(registry, id);
        }
    }

    /// Applies the stored credentials of one backend to its runtime record.
    ///
    /// Missing or malformed preferences leave the record as it was. Calling
    /// this repeatedly with unchanged preferences yields the same record.
    pub fn init_service(&self, registry: &mut BackendRegistry, id: ServiceId) {
        let Some(runtime) = registry.get_mut(id) else {
            debug!(service = %id, "service not registered, nothing to initialize");
            return;
        };

        match CredentialSchema::for_service(id, &self.keys) {
            CredentialSchema::None => {}
            CredentialSchema::Instance { selected } => match selected.read(&self.store) {
                JsonRead::Missing => {
                    debug!(service = %id, "no instance selected, keeping default");
                }
                JsonRead::Malformed(e) => {
                    debug!(service = %id, error = %e, "ignoring unreadable instance preference");
                }
                JsonRead::Value(instance) => {
                    debug!(service = %id, url = %instance.url, name = %instance.name, "applying instance");
                    runtime.set_instance(instance.url, instance.name);
                }
            },
            CredentialSchema::CookieToken {
                cookies,
                override_enabled,
                override_value,
            } => {
                let primary = cookies.read(&self.store);
                if override_enabled.read(&self.store) {
                    // an enabled override wins even when its own value is unset
                    debug!(service = %id, "applying override cookies");
                    runtime.set_auth_token(override_value.read(&self.store));
                } else if primary.is_some() {
                    debug!(service = %id, "applying stored cookies");
                    runtime.set_auth_token(primary);
                } else {
                    debug!(service = %id, "no cookies stored, keeping current token");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        config::PrefKeys,
        services::{
            ServicePrefs,
            registry::{
                BackendRegistry, BackendRuntimeConfig, DEFAULT_PEERTUBE_NAME,
                DEFAULT_PEERTUBE_URL, InstanceDescriptor, ServiceId,
            },
        },
        store::{MemoryStore, PreferenceStore},
    };

    fn prefs_with(entries: &[(&str, &str)]) -> ServicePrefs<MemoryStore> {
        let mut store = MemoryStore::new();
        for (key, value) in entries {
            store.set_string(key, value).unwrap();
        }
        ServicePrefs::new(store, PrefKeys::default())
    }

    fn default_instance() -> Option<InstanceDescriptor> {
        Some(InstanceDescriptor::new(
            DEFAULT_PEERTUBE_URL,
            DEFAULT_PEERTUBE_NAME,
        ))
    }

    #[test]
    fn stored_instance_replaces_default() {
        let prefs = prefs_with(&[(
            "peertube_selected_instance",
            r#"{"name":"Sepia","url":"https://sepia.example"}"#,
        )]);
        let mut registry = BackendRegistry::builtin();
        prefs.init_service(&mut registry, ServiceId::PEERTUBE);

        assert_eq!(
            registry.get(ServiceId::PEERTUBE).unwrap().instance,
            Some(InstanceDescriptor::new("https://sepia.example", "Sepia"))
        );
    }

    #[test]
    fn truncated_instance_json_is_ignored() {
        let prefs = prefs_with(&[(
            "peertube_selected_instance",
            r#"{"name":"Sepia","url":"https://sep"#,
        )]);
        let mut registry = BackendRegistry::builtin();
        prefs.init_service(&mut registry, ServiceId::PEERTUBE);

        assert_eq!(
            registry.get(ServiceId::PEERTUBE).unwrap().instance,
            default_instance()
        );
    }

    #[test]
    fn instance_missing_a_field_is_ignored() {
        let prefs = prefs_with(&[("peertube_selected_instance", r#"{"name":"Sepia"}"#)]);
        let mut registry = BackendRegistry::builtin();
        prefs.init_service(&mut registry, ServiceId::PEERTUBE);

        assert_eq!(
            registry.get(ServiceId::PEERTUBE).unwrap().instance,
            default_instance()
        );
    }

    #[test]
    fn missing_keys_leave_runtime_untouched() {
        let prefs = prefs_with(&[]);
        let mut registry = BackendRegistry::builtin();
        registry
            .get_mut(ServiceId::NICONICO)
            .unwrap()
            .set_auth_token(Some("existing".into()));
        let before = registry.clone();

        prefs.init_services(&mut registry);

        assert_eq!(registry.entries(), before.entries());
    }

    #[test]
    fn stored_cookies_become_auth_token() {
        let prefs = prefs_with(&[("bilibili_cookies", "SESSDATA=abc")]);
        let mut registry = BackendRegistry::builtin();
        prefs.init_service(&mut registry, ServiceId::BILIBILI);

        assert_eq!(
            registry.get(ServiceId::BILIBILI).unwrap().auth_token.as_deref(),
            Some("SESSDATA=abc")
        );
        assert_eq!(
            registry.get(ServiceId::NICONICO),
            Some(&BackendRuntimeConfig::default())
        );
    }

    #[test]
    fn enabled_override_wins() {
        let mut prefs = prefs_with(&[
            ("niconico_cookies", "T1"),
            ("override_cookies_niconico_value", "T2"),
        ]);
        prefs
            .store_mut()
            .set_bool("override_cookies_niconico", true)
            .unwrap();
        let mut registry = BackendRegistry::builtin();
        prefs.init_service(&mut registry, ServiceId::NICONICO);

        assert_eq!(
            registry.get(ServiceId::NICONICO).unwrap().auth_token.as_deref(),
            Some("T2")
        );
    }

    #[test]
    fn disabled_override_is_ignored() {
        let mut prefs = prefs_with(&[
            ("niconico_cookies", "T1"),
            ("override_cookies_niconico_value", "T2"),
        ]);
        prefs
            .store_mut()
            .set_bool("override_cookies_niconico", false)
            .unwrap();
        let mut registry = BackendRegistry::builtin();
        prefs.init_service(&mut registry, ServiceId::NICONICO);

        assert_eq!(
            registry.get(ServiceId::NICONICO).unwrap().auth_token.as_deref(),
            Some("T1")
        );
    }

    #[test]
    fn enabled_override_without_value_clears_token() {
        let mut prefs = prefs_with(&[("bilibili_cookies", "T1")]);
        prefs
            .store_mut()
            .set_bool("override_cookies_bilibili", true)
            .unwrap();
        let mut registry = BackendRegistry::builtin();
        prefs.init_service(&mut registry, ServiceId::BILIBILI);

        assert_eq!(registry.get(ServiceId::BILIBILI).unwrap().auth_token, None);
    }

    #[test]
    fn enabled_override_applies_without_stored_cookies() {
        let mut prefs = prefs_with(&[("override_cookies_niconico_value", "T2")]);
        prefs
            .store_mut()
            .set_bool("override_cookies_niconico", true)
            .unwrap();
        let mut registry = BackendRegistry::builtin();
        prefs.init_service(&mut registry, ServiceId::NICONICO);

        assert_eq!(
            registry.get(ServiceId::NICONICO).unwrap().auth_token.as_deref(),
            Some("T2")
        );
    }

    #[test]
    fn enabled_empty_override_without_stored_cookies_clears_token() {
        let mut prefs = prefs_with(&[]);
        prefs
            .store_mut()
            .set_bool("override_cookies_bilibili", true)
            .unwrap();
        let mut registry = BackendRegistry::builtin();
        registry
            .get_mut(ServiceId::BILIBILI)
            .unwrap()
            .set_auth_token(Some("old".into()));
        prefs.init_service(&mut registry, ServiceId::BILIBILI);

        assert_eq!(registry.get(ServiceId::BILIBILI).unwrap().auth_token, None);
    }

    #[test]
    fn initialization_is_idempotent() {
        let mut prefs = prefs_with(&[
            (
                "peertube_selected_instance",
                r#"{"name":"Sepia","url":"https://sepia.example"}"#,
            ),
            ("niconico_cookies", "T1"),
        ]);
        prefs
            .store_mut()
            .set_bool("override_cookies_bilibili", true)
            .unwrap();
        let mut registry = BackendRegistry::builtin();

        prefs.init_services(&mut registry);
        let once = registry.clone();
        prefs.init_services(&mut registry);
        prefs.init_service(&mut registry, ServiceId::PEERTUBE);

        assert_eq!(registry.entries(), once.entries());
    }

    #[test]
    fn unknown_service_is_a_no_op() {
        let prefs = prefs_with(&[("niconico_cookies", "T1")]);
        let mut registry = BackendRegistry::builtin();
        let before = registry.clone();
        prefs.init_service(&mut registry, ServiceId(40));
        assert_eq!(registry.entries(), before.entries());
    }
}
