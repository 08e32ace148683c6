// SPDX-License-Identifier: MIT

use tracing::{debug, warn};

use crate::{
    services::{
        ServicePrefs,
        registry::{BackendRegistry, ServiceId},
    },
    store::PreferenceStore,
};

impl<S: PreferenceStore> ServicePrefs<S> {
    /// Returns the id of the active backend.
    ///
    /// The selection is persisted by name; a name the registry does not know
    /// resolves to the registry's fallback backend.
    pub fn selected_service_id(&self, registry: &BackendRegistry) -> ServiceId {
        let name = self
            .store
            .get_string(&self.keys.current_service)
            .unwrap_or_else(|| self.keys.default_service.clone());

        registry.resolve_by_name(&name).unwrap_or_else(|e| {
            debug!(error = %e, "selected service unresolved, using fallback");
            registry.fallback().0
        })
    }

    /// Persists `id` as the active backend, or the fallback if `id` is unknown.
    pub fn set_selected_service_id(&mut self, registry: &BackendRegistry, id: ServiceId) {
        let name = match registry.resolve_by_id(id) {
            Ok(name) => name.to_string(),
            Err(e) => {
                debug!(error = %e, "cannot select unknown service, using fallback");
                registry.fallback().1.to_string()
            }
        };
        self.write_selection(&name);
    }

    /// Persists `name` as the active backend, or the fallback if `name` is unknown.
    pub fn set_selected_service_name(&mut self, registry: &BackendRegistry, name: &str) {
        match registry.resolve_by_name(name) {
            Ok(_) => self.write_selection(name),
            Err(e) => {
                debug!(error = %e, "cannot select unknown service, using fallback");
                let fallback = registry.fallback().1;
                self.write_selection(fallback);
            }
        }
    }

    fn write_selection(&mut self, name: &str) {
        if let Err(e) = self.store.set_string(&self.keys.current_service, name) {
            warn!(error = %e, service = name, "failed to persist selected service");
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        config::PrefKeys,
        core::types::PrefValue,
        services::{
            ServicePrefs,
            registry::{BackendRegistry, BackendRuntimeConfig, ServiceId},
        },
        store::{MemoryStore, PreferenceStore},
    };

    fn prefs() -> ServicePrefs<MemoryStore> {
        ServicePrefs::new(MemoryStore::new(), PrefKeys::default())
    }

    #[test]
    fn unset_selection_uses_default_service_name() {
        let registry = BackendRegistry::builtin();
        let mut keys = PrefKeys::default();
        keys.default_service = "Bandcamp".into();
        let prefs = ServicePrefs::new(MemoryStore::new(), keys);

        assert_eq!(prefs.selected_service_id(&registry), ServiceId::BANDCAMP);
    }

    #[test]
    fn stale_name_reads_as_fallback() {
        let registry = BackendRegistry::builtin();
        let mut prefs = prefs();
        prefs.store_mut().set_string("service", "Vimeo").unwrap();
        assert_eq!(prefs.selected_service_id(&registry), ServiceId::YOUTUBE);

        prefs
            .store_mut()
            .set_value("service", PrefValue::Integer(3))
            .unwrap();
        assert_eq!(prefs.selected_service_id(&registry), ServiceId::YOUTUBE);
    }

    #[test]
    fn selection_by_id_round_trips_for_every_service() {
        let registry = BackendRegistry::builtin();
        let mut prefs = prefs();
        for id in registry.all_services() {
            prefs.set_selected_service_id(&registry, id);
            assert_eq!(prefs.selected_service_id(&registry), id);
        }
    }

    #[test]
    fn selection_is_persisted_by_name() {
        let registry = BackendRegistry::builtin();
        let mut prefs = prefs();
        prefs.set_selected_service_id(&registry, ServiceId::NICONICO);
        assert_eq!(prefs.store().get_string("service").as_deref(), Some("NicoNico"));

        prefs.set_selected_service_name(&registry, "SoundCloud");
        assert_eq!(
            prefs.store().get_string("service").as_deref(),
            Some("SoundCloud")
        );
    }

    #[test]
    fn unknown_selection_persists_fallback_name() {
        let registry = BackendRegistry::builtin();
        let mut prefs = prefs();
        prefs.set_selected_service_id(&registry, ServiceId::BILIBILI);

        prefs.set_selected_service_id(&registry, ServiceId(77));
        assert_eq!(prefs.store().get_string("service").as_deref(), Some("YouTube"));

        prefs.set_selected_service_id(&registry, ServiceId::BILIBILI);
        prefs.set_selected_service_name(&registry, "Not A Service");
        assert_eq!(prefs.store().get_string("service").as_deref(), Some("YouTube"));
        assert_eq!(prefs.selected_service_id(&registry), ServiceId::YOUTUBE);
    }

    #[test]
    fn fallback_resolves_in_registry_without_youtube() {
        let mut registry = BackendRegistry::new();
        registry
            .register(ServiceId(10), "Odysee", BackendRuntimeConfig::default())
            .unwrap();
        let mut prefs = prefs();

        assert_eq!(prefs.selected_service_id(&registry), ServiceId(10));

        prefs.set_selected_service_name(&registry, "Nope");
        assert_eq!(prefs.store().get_string("service").as_deref(), Some("Odysee"));
        assert_eq!(prefs.selected_service_id(&registry), ServiceId(10));

        prefs.set_selected_service_id(&registry, ServiceId::YOUTUBE);
        assert_eq!(prefs.store().get_string("service").as_deref(), Some("Odysee"));
        assert!(registry.resolve_by_id(prefs.selected_service_id(&registry)).is_ok());
    }
}
