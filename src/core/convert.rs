// SPDX-License-Identifier: MIT

use std::{collections::HashMap, time::SystemTime};

use plist::{Uid, Value};

use crate::core::{error::PrefError, types::PrefValue};

pub(crate) fn plist_to_prefvalue(val: &Value) -> Result<PrefValue, PrefError> {
    let val = match val {
        Value::String(s) => PrefValue::String(s.clone()),
        Value::Integer(i) => match i.as_signed() {
            Some(i) => PrefValue::Integer(i),
            None => {
                return Err(PrefError::Other(format!(
                    "Integer {i} does not fit in a signed 64-bit value"
                )));
            }
        },
        Value::Real(f) => PrefValue::Float(*f),
        Value::Boolean(b) => PrefValue::Boolean(*b),
        Value::Array(arr) => {
            let mut result = Vec::with_capacity(arr.len());
            for v in arr {
                result.push(plist_to_prefvalue(v)?);
            }
            PrefValue::Array(result)
        }
        Value::Dictionary(dict) => {
            let mut result = HashMap::with_capacity(dict.len());
            for (k, v) in dict {
                result.insert(k.clone(), plist_to_prefvalue(v)?);
            }
            PrefValue::Dictionary(result)
        }
        Value::Data(data) => PrefValue::Data(data.clone()),
        Value::Date(date) => PrefValue::Date(SystemTime::from(date.clone())),
        Value::Uid(uid) => PrefValue::Uid(uid.get()),
        _ => return Err(PrefError::Other("Unsupported plist value".into())),
    };

    Ok(val)
}

pub(crate) fn prefvalue_to_plist(val: &PrefValue) -> Value {
    match val {
        PrefValue::String(s) => Value::String(s.clone()),
        PrefValue::Integer(i) => Value::Integer((*i).into()),
        PrefValue::Float(f) => Value::Real(*f),
        PrefValue::Boolean(b) => Value::Boolean(*b),
        PrefValue::Array(arr) => Value::Array(arr.iter().map(prefvalue_to_plist).collect()),
        PrefValue::Dictionary(dict) => Value::Dictionary(
            dict.iter()
                .map(|(k, v)| (k.clone(), prefvalue_to_plist(v)))
                .collect(),
        ),
        PrefValue::Data(data) => Value::Data(data.clone()),
        PrefValue::Date(dt) => Value::Date(plist::Date::from(*dt)),
        PrefValue::Uid(uid) => Value::Uid(Uid::new(*uid)),
    }
}
