//! # Properties Module
//!
//! The flat key/value configuration the host hands to the plugin.
//!
//! Keys come in two shapes:
//!
//! - `<feature>` with a `true`/`false` value enables or disables a feature
//! - `<feature>.<option>` attaches an option to an enabled feature
//!
//! [`Properties`] keeps insertion order, which decides option order.
//!
//! ## Loading From Disk
//!
//! [`load_properties`] reads TOML (default), YAML (`.yaml`/`.yml`) or JSON
//! (`.json`). Scalars are stringified, arrays are joined with `,` and nested
//! tables are flattened into dotted keys:
//!
//! ```toml
//! builder = true
//! "builder.toBuilder" = true
//!
//! [toString]
//! exclude = ["password", "salt"]   # becomes toString.exclude = "password,salt"
//! ```
//!
//! A feature that needs both a flag and options uses quoted dotted keys, since a
//! TOML key cannot be a scalar and a table at once.

use anyhow::{bail, Context};
use indexmap::IndexMap;
use serde_json::Value;
use std::path::Path;

#[cfg(test)]
mod tests;

/// Ordered flat string-to-string configuration mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    entries: IndexMap<String, String>,
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace `key`. A replaced key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Properties
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut props = Properties::new();
        for (k, v) in iter {
            props.insert(k, v);
        }
        props
    }
}

/// Load plugin properties from a TOML, YAML or JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, does not parse, is not a
/// table at the top level, or contains a value that cannot be flattened.
pub fn load_properties(path: &Path) -> anyhow::Result<Properties> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read plugin properties: {}", path.display()))?;

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let value: Value = match ext.as_str() {
        "yaml" | "yml" => serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse YAML properties: {}", path.display()))?,
        "json" => serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse JSON properties: {}", path.display()))?,
        _ => {
            let table: toml::Table = toml::from_str(&contents).with_context(|| {
                format!("Failed to parse TOML properties: {}", path.display())
            })?;
            serde_json::to_value(table).with_context(|| {
                format!("Failed to convert TOML properties: {}", path.display())
            })?
        }
    };

    properties_from_value(&value)
        .with_context(|| format!("Invalid plugin properties: {}", path.display()))
}

/// Flatten a parsed document into [`Properties`].
///
/// # Errors
///
/// Fails if `value` is not an object, or if a leaf is null or an array of
/// non-scalars.
pub fn properties_from_value(value: &Value) -> anyhow::Result<Properties> {
    let Value::Object(map) = value else {
        bail!("expected a table of properties at the top level");
    };
    let mut props = Properties::new();
    for (key, value) in map {
        flatten_into(&mut props, key, value)?;
    }
    Ok(props)
}

fn flatten_into(props: &mut Properties, key: &str, value: &Value) -> anyhow::Result<()> {
    match value {
        Value::Object(map) => {
            for (child, value) in map {
                flatten_into(props, &format!("{key}.{child}"), value)?;
            }
        }
        Value::Array(items) => {
            let parts = items
                .iter()
                .map(|item| {
                    scalar_to_string(item)
                        .with_context(|| format!("array element of '{key}' must be a scalar"))
                })
                .collect::<anyhow::Result<Vec<_>>>()?;
            props.insert(key, parts.join(","));
        }
        other => {
            let text = scalar_to_string(other)
                .with_context(|| format!("property '{key}' has no value"))?;
            props.insert(key, text);
        }
    }
    Ok(())
}

fn scalar_to_string(value: &Value) -> anyhow::Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => bail!("null is not a valid property value"),
        Value::Array(_) | Value::Object(_) => bail!("nested value is not a scalar"),
    }
}
