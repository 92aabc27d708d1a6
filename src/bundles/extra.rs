//! Untyped `extra` metadata from Composer manifests.
//!
//! Composer hands `extra` over as a PHP-style array, so JSON arrays and JSON
//! objects both end up as ordered key/value lists here. Object key order is
//! kept exactly as written in the manifest.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};

/// Key of an entry in an array-like metadata value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ArrayKey {
    Index(usize),
    Name(String),
}

impl ArrayKey {
    /// Builds a key from an object member name. Canonical decimal names such
    /// as `"3"` become integer keys, matching how Composer decodes them.
    pub fn from_name(name: impl Into<String>) -> Self {
        let name = name.into();
        let canonical = !name.is_empty()
            && name.bytes().all(|b| b.is_ascii_digit())
            && (name == "0" || !name.starts_with('0'));
        match name.parse::<usize>() {
            Ok(index) if canonical => ArrayKey::Index(index),
            _ => ArrayKey::Name(name),
        }
    }

    /// Whether `key` names this entry. Lookup keys are normalized like
    /// member names, so `"01"` or `"+1"` never match index 1.
    pub fn matches(&self, key: &str) -> bool {
        ArrayKey::from_name(key) == *self
    }
}

impl fmt::Display for ArrayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArrayKey::Index(index) => write!(f, "{}", index),
            ArrayKey::Name(name) => f.write_str(name),
        }
    }
}

impl From<usize> for ArrayKey {
    fn from(index: usize) -> Self {
        ArrayKey::Index(index)
    }
}

impl From<&str> for ArrayKey {
    fn from(name: &str) -> Self {
        ArrayKey::from_name(name)
    }
}

/// A metadata value as found in a package's `extra` block.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ExtraValue {
    #[default]
    Null,
    String(String),
    Array(Vec<(ArrayKey, ExtraValue)>),
    /// Booleans and numbers. Never valid where this crate expects a value.
    Other(serde_json::Value),
}

impl ExtraValue {
    pub fn empty_array() -> Self {
        ExtraValue::Array(Vec::new())
    }

    /// Looks up `key` in an array-like value. Returns `None` for scalars.
    pub fn get(&self, key: &str) -> Option<&ExtraValue> {
        self.as_array()?
            .iter()
            .find(|(k, _)| k.matches(key))
            .map(|(_, v)| v)
    }

    /// Looks up `key`, treating a `null` value the same as a missing key.
    pub fn get_set(&self, key: &str) -> Option<&ExtraValue> {
        self.get(key).filter(|v| !v.is_null())
    }

    pub fn as_array(&self) -> Option<&[(ArrayKey, ExtraValue)]> {
        match self {
            ExtraValue::Array(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ExtraValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ExtraValue::Null)
    }

    pub fn is_array(&self) -> bool {
        matches!(self, ExtraValue::Array(_))
    }

    /// Short name of the value's kind, used in log output.
    pub fn kind(&self) -> &'static str {
        match self {
            ExtraValue::Null => "null",
            ExtraValue::String(_) => "string",
            ExtraValue::Array(_) => "array",
            ExtraValue::Other(serde_json::Value::Bool(_)) => "bool",
            ExtraValue::Other(_) => "number",
        }
    }

    /// Inserts or replaces `key`. A replaced entry keeps its position.
    /// Scalars are turned into an empty array first.
    pub fn insert(&mut self, key: impl Into<ArrayKey>, value: ExtraValue) {
        if !self.is_array() {
            *self = ExtraValue::empty_array();
        }
        if let ExtraValue::Array(entries) = self {
            push_or_replace(entries, key.into(), value);
        }
    }
}

fn push_or_replace(entries: &mut Vec<(ArrayKey, ExtraValue)>, key: ArrayKey, value: ExtraValue) {
    match entries.iter_mut().find(|(k, _)| *k == key) {
        Some(entry) => entry.1 = value,
        None => entries.push((key, value)),
    }
}

impl From<&str> for ExtraValue {
    fn from(s: &str) -> Self {
        ExtraValue::String(s.to_string())
    }
}

impl From<String> for ExtraValue {
    fn from(s: String) -> Self {
        ExtraValue::String(s)
    }
}

impl From<serde_json::Value> for ExtraValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => ExtraValue::Null,
            serde_json::Value::String(s) => ExtraValue::String(s),
            serde_json::Value::Array(items) => ExtraValue::Array(
                items
                    .into_iter()
                    .enumerate()
                    .map(|(i, v)| (ArrayKey::Index(i), v.into()))
                    .collect(),
            ),
            serde_json::Value::Object(map) => {
                let mut entries = Vec::with_capacity(map.len());
                for (k, v) in map {
                    push_or_replace(&mut entries, ArrayKey::from_name(k), v.into());
                }
                ExtraValue::Array(entries)
            }
            other => ExtraValue::Other(other),
        }
    }
}

impl<K: Into<ArrayKey>, V: Into<ExtraValue>> FromIterator<(K, V)> for ExtraValue {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut value = ExtraValue::empty_array();
        for (k, v) in iter {
            value.insert(k, v.into());
        }
        value
    }
}

impl<'de> Deserialize<'de> for ExtraValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ExtraValueVisitor)
    }
}

struct ExtraValueVisitor;

impl<'de> Visitor<'de> for ExtraValueVisitor {
    type Value = ExtraValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any JSON value")
    }

    fn visit_unit<E: de::Error>(self) -> Result<ExtraValue, E> {
        Ok(ExtraValue::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<ExtraValue, E> {
        Ok(ExtraValue::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<ExtraValue, D::Error>
    where
        D: Deserializer<'de>,
    {
        ExtraValue::deserialize(deserializer)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<ExtraValue, E> {
        Ok(ExtraValue::Other(v.into()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<ExtraValue, E> {
        Ok(ExtraValue::Other(v.into()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<ExtraValue, E> {
        Ok(ExtraValue::Other(v.into()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<ExtraValue, E> {
        Ok(ExtraValue::Other(v.into()))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<ExtraValue, E> {
        Ok(ExtraValue::String(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<ExtraValue, E> {
        Ok(ExtraValue::String(v))
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<ExtraValue, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut entries = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(value) = seq.next_element::<ExtraValue>()? {
            entries.push((ArrayKey::Index(entries.len()), value));
        }
        Ok(ExtraValue::Array(entries))
    }

    fn visit_map<A>(self, mut map: A) -> Result<ExtraValue, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, value)) = map.next_entry::<String, ExtraValue>()? {
            push_or_replace(&mut entries, ArrayKey::from_name(key), value);
        }
        Ok(ExtraValue::Array(entries))
    }
}
