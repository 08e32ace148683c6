// SPDX-License-Identifier: MIT

//! This module defines the types for representing stored preferences.
//!
//! Stores hand out [`PrefValue`]s; a [`Domain`] names the file a store lives in.

use std::{collections::HashMap, path::PathBuf, time::SystemTime};

use crate::core::error::PrefError;

/// Application id used when neither a domain nor a file is configured.
pub const DEFAULT_DOMAIN: &str = "org.schabi.newpipe";

/// Preferences domain (application id or explicit file).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Domain {
    /// An application domain, e.g., "org.schabi.newpipe"
    User(String),
    /// A direct path to a plist file
    Path(PathBuf),
}

impl Default for Domain {
    fn default() -> Self {
        Domain::User(DEFAULT_DOMAIN.to_string())
    }
}

impl Domain {
    /// Returns the filesystem path for a given domain.
    ///
    /// Application domains live in the platform preference directory, or the
    /// config directory on platforms that have no dedicated one.
    pub fn get_path(&self) -> Result<PathBuf, PrefError> {
        match self {
            Domain::User(name) => {
                let dir = dirs::preference_dir()
                    .or_else(dirs::config_dir)
                    .ok_or_else(|| {
                        PrefError::Other("No preference directory on this platform".into())
                    })?;
                Ok(dir.join(format!("{name}.plist")))
            }
            Domain::Path(path) => Ok(path.clone()),
        }
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Domain::User(s) => write!(f, "{s}"),
            Domain::Path(p) => write!(f, "{}", p.display()),
        }
    }
}

/// Value stored in preferences.
#[derive(Debug, Clone, PartialEq)]
pub enum PrefValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Array(Vec<PrefValue>),
    Dictionary(HashMap<String, PrefValue>),
    Data(Vec<u8>),
    Date(SystemTime),
    Uid(u64),
}

impl std::fmt::Display for PrefValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PrefValue::Boolean(b) => write!(f, "{b}"),
            PrefValue::Integer(i) => write!(f, "{i}"),
            PrefValue::Float(fl) => write!(f, "{fl}"),
            PrefValue::String(s) => write!(f, "{s}"),
            PrefValue::Array(arr) => {
                let items = arr.iter().map(|v| v.to_string()).collect::<Vec<_>>();
                write!(f, "[{}]", items.join(", "))
            }
            PrefValue::Dictionary(dict) => {
                let mut entries = dict
                    .iter()
                    .map(|(k, v)| format!("{k}: {v}"))
                    .collect::<Vec<_>>();
                entries.sort();
                write!(f, "{{{}}}", entries.join(", "))
            }
            PrefValue::Data(data) => write!(f, "<Data: {} bytes>", data.len()),
            PrefValue::Date(dt) => write!(f, "<Date: {dt:?}>"),
            PrefValue::Uid(uid) => write!(f, "<Uid: {uid}>"),
        }
    }
}

impl PrefValue {
    /// Returns the name of the type for the PrefValue instance.
    pub fn get_type(&self) -> &'static str {
        match self {
            PrefValue::String(_) => "string",
            PrefValue::Integer(_) => "integer",
            PrefValue::Float(_) => "float",
            PrefValue::Boolean(_) => "boolean",
            PrefValue::Array(_) => "array",
            PrefValue::Dictionary(_) => "dictionary",
            PrefValue::Data(_) => "data",
            PrefValue::Date(_) => "date",
            PrefValue::Uid(_) => "uid",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            PrefValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PrefValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Parses a command-line value for the given type flag (`string` or `bool`).
    pub fn from_flag(type_flag: &str, raw: &str) -> Result<PrefValue, PrefError> {
        match type_flag {
            "string" => Ok(PrefValue::String(raw.to_string())),
            "bool" => match raw.to_ascii_lowercase().as_str() {
                "true" | "yes" | "1" => Ok(PrefValue::Boolean(true)),
                "false" | "no" | "0" => Ok(PrefValue::Boolean(false)),
                _ => Err(PrefError::Other(format!("Invalid boolean value: {raw}"))),
            },
            other => Err(PrefError::Other(format!("Unsupported value type: {other}"))),
        }
    }
}
