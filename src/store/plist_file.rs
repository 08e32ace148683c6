// SPDX-License-Identifier: MIT

use std::{
    collections::HashMap,
    fs::{self, File},
    io::{Cursor, Write},
    path::{Path, PathBuf},
};

use plist::Value;
use tracing::debug;

use crate::core::{
    convert::{plist_to_prefvalue, prefvalue_to_plist},
    error::PrefError,
    types::{Domain, PrefValue},
};

use super::PreferenceStore;

/// Store backed by a dictionary-rooted plist file.
///
/// The file is read once when the store is opened; every write replaces the
/// file atomically, keeping the format (XML or binary) it was read in.
#[derive(Debug)]
pub struct PlistStore {
    path: PathBuf,
    values: HashMap<String, PrefValue>,
    is_binary: bool,
}

impl PlistStore {
    /// Opens the plist file for `domain`. A missing file is an empty store.
    pub fn open(domain: &Domain) -> Result<Self, PrefError> {
        Self::open_path(domain.get_path()?)
    }

    pub fn open_path(path: impl Into<PathBuf>) -> Result<Self, PrefError> {
        let path = path.into();
        let (values, is_binary) = Self::load(&path)?;
        debug!(path = %path.display(), keys = values.len(), is_binary, "opened plist store");
        Ok(Self {
            path,
            values,
            is_binary,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Re-reads the file, discarding the in-memory snapshot.
    pub fn reload(&mut self) -> Result<(), PrefError> {
        let (values, is_binary) = Self::load(&self.path)?;
        self.values = values;
        self.is_binary = is_binary;
        Ok(())
    }

    /// Returns every stored key and value.
    pub fn entries(&self) -> &HashMap<String, PrefValue> {
        &self.values
    }

    fn load(path: &Path) -> Result<(HashMap<String, PrefValue>, bool), PrefError> {
        let buf = match fs::read(path) {
            Ok(buf) => buf,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok((HashMap::new(), false));
            }
            Err(e) => return Err(PrefError::Io(e)),
        };

        // try to parse as XML first, and if that fails, fallback to another format
        let (plist, is_binary) = match Value::from_reader_xml(Cursor::new(&buf[..])) {
            Ok(plist) => (plist, false),
            Err(_) => (Value::from_reader(Cursor::new(&buf[..]))?, true),
        };

        match plist_to_prefvalue(&plist)? {
            PrefValue::Dictionary(dict) => Ok((dict, is_binary)),
            other => Err(PrefError::InvalidType {
                expected: "dictionary",
                found: other.get_type(),
            }),
        }
    }

    /// Writes the snapshot to a temporary file next to the target and renames it into place.
    fn save(&self) -> Result<(), PrefError> {
        let mut buf = Vec::new();
        let root = prefvalue_to_plist(&PrefValue::Dictionary(self.values.clone()));
        if self.is_binary {
            root.to_writer_binary(&mut buf)?;
        } else {
            root.to_writer_xml(&mut buf)?;
        }

        let dir = self
            .path
            .parent()
            .ok_or_else(|| PrefError::Other("Invalid path: no parent directory".into()))?;
        let file_name = self
            .path
            .file_name()
            .ok_or_else(|| PrefError::Other("Invalid path: no file name".into()))?;
        fs::create_dir_all(dir)?;

        let orig_perm = fs::metadata(&self.path).ok().map(|m| m.permissions());
        let tmp_path = dir.join(format!("{}.tmp", file_name.to_string_lossy()));

        let written = File::create(&tmp_path).and_then(|mut tmp_file| {
            tmp_file.write_all(&buf)?;
            tmp_file.sync_all()
        });
        if let Err(e) = written.and_then(|()| fs::rename(&tmp_path, &self.path)) {
            // never leave a partial temporary file next to the store
            let _ = fs::remove_file(&tmp_path);
            return Err(PrefError::Io(e));
        }
        if let Some(perm) = orig_perm {
            fs::set_permissions(&self.path, perm)?;
        }

        debug!(path = %self.path.display(), bytes = buf.len(), "saved plist store");
        Ok(())
    }
}

impl PreferenceStore for PlistStore {
    fn get_value(&self, key: &str) -> Option<PrefValue> {
        self.values.get(key).cloned()
    }

    fn set_value(&mut self, key: &str, value: PrefValue) -> Result<(), PrefError> {
        let previous = self.values.insert(key.to_string(), value);
        if let Err(e) = self.save() {
            // keep the snapshot in line with what is on disk
            match previous {
                Some(v) => self.values.insert(key.to_string(), v),
                None => self.values.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), PrefError> {
        let previous = self.values.remove(key).ok_or(PrefError::KeyNotFound)?;
        if let Err(e) = self.save() {
            self.values.insert(key.to_string(), previous);
            return Err(e);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_opens_empty_and_is_created_on_write() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("prefs.plist");

        let mut store = PlistStore::open_path(&path).unwrap();
        assert!(store.entries().is_empty());
        assert!(!path.exists());

        store.set_string("service", "SoundCloud").unwrap();
        assert!(path.exists());
        assert!(!dir.path().join("nested").join("prefs.plist.tmp").exists());

        let reopened = PlistStore::open(&Domain::Path(path)).unwrap();
        assert_eq!(reopened.get_string("service").as_deref(), Some("SoundCloud"));
    }

    #[test]
    fn binary_files_stay_binary() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.plist");
        let mut root = plist::Dictionary::new();
        root.insert("override_cookies_niconico".into(), Value::Boolean(true));
        Value::Dictionary(root).to_file_binary(&path).unwrap();

        let mut store = PlistStore::open_path(&path).unwrap();
        assert!(store.get_bool("override_cookies_niconico", false));
        store.set_string("niconico_cookies", "user_session=abc").unwrap();

        let bytes = fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"bplist00"));
        store.reload().unwrap();
        assert_eq!(
            store.get_string("niconico_cookies").as_deref(),
            Some("user_session=abc")
        );
    }

    #[test]
    fn non_dictionary_root_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.plist");
        Value::Array(vec![Value::Boolean(true)])
            .to_file_xml(&path)
            .unwrap();

        let err = PlistStore::open_path(&path).unwrap_err();
        assert!(matches!(
            err,
            PrefError::InvalidType {
                expected: "dictionary",
                found: "array"
            }
        ));
    }

    #[test]
    fn failed_save_leaves_no_temporary_file() {
        let dir = TempDir::new().unwrap();
        // a directory in place of the store file makes the final rename fail
        let path = dir.path().join("prefs.plist");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), b"x").unwrap();

        let mut store = PlistStore {
            path: path.clone(),
            values: HashMap::new(),
            is_binary: false,
        };
        assert!(store.set_string("service", "YouTube").is_err());
        assert_eq!(store.get_string("service"), None);
        assert!(!dir.path().join("prefs.plist.tmp").exists());
    }

    #[test]
    fn remove_persists() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.plist");
        let mut store = PlistStore::open_path(&path).unwrap();
        store.set_string("bilibili_cookies", "SESSDATA=1").unwrap();
        store.remove("bilibili_cookies").unwrap();

        let reopened = PlistStore::open_path(&path).unwrap();
        assert_eq!(reopened.get_string("bilibili_cookies"), None);
        assert!(matches!(
            store.remove("bilibili_cookies"),
            Err(PrefError::KeyNotFound)
        ));
    }
}
