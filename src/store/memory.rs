// SPDX-License-Identifier: MIT

use std::collections::HashMap;

use crate::core::{error::PrefError, types::PrefValue};

use super::PreferenceStore;

/// Store that keeps values in process memory only.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, PrefValue>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, PrefValue)> for MemoryStore {
    fn from_iter<I: IntoIterator<Item = (K, PrefValue)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn get_value(&self, key: &str) -> Option<PrefValue> {
        self.values.get(key).cloned()
    }

    fn set_value(&mut self, key: &str, value: PrefValue) -> Result<(), PrefError> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), PrefError> {
        self.values
            .remove(key)
            .map(|_| ())
            .ok_or(PrefError::KeyNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_reports_missing_key() {
        let mut store: MemoryStore = [("service", PrefValue::String("YouTube".into()))]
            .into_iter()
            .collect();
        assert_eq!(store.len(), 1);

        store.remove("service").unwrap();
        assert!(store.is_empty());
        assert!(matches!(store.remove("service"), Err(PrefError::KeyNotFound)));
    }
}
