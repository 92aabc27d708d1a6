//! File-based Configuration Provider
//!
//! Loads configuration from a JSON object file. A missing file is an empty
//! configuration.

use std::path::{Path, PathBuf};

use super::provider::ConfigProvider;
use super::{ConfigError, ConfigResult};

pub struct FileConfigProvider {
    path: PathBuf,
    data: serde_json::Map<String, serde_json::Value>,
}

impl FileConfigProvider {
    /// Reads and parses the file at `path`
    pub fn open(path: impl Into<PathBuf>) -> ConfigResult<Self> {
        let path = path.into();
        let data = Self::load(&path)?;
        Ok(Self { path, data })
    }

    fn load(path: &Path) -> ConfigResult<serde_json::Map<String, serde_json::Value>> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No configuration file, using defaults");
            return Ok(serde_json::Map::new());
        }

        let content = std::fs::read_to_string(path)?;
        match serde_json::from_str(&content) {
            Ok(serde_json::Value::Object(map)) => Ok(map),
            Ok(other) => Err(ConfigError::InvalidFile {
                path: path.to_path_buf(),
                reason: format!("expected a JSON object, found {}", json_kind(&other)),
            }),
            Err(e) => Err(ConfigError::InvalidFile {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

impl ConfigProvider for FileConfigProvider {
    fn name(&self) -> &str {
        "file"
    }

    fn get_raw(&self, key: &str) -> ConfigResult<Option<String>> {
        // Support nested keys with dot notation
        let mut parts = key.split('.');
        let mut current = parts.next().and_then(|first| self.data.get(first));
        for part in parts {
            current = current.and_then(|v| v.get(part));
        }

        match current {
            None | Some(serde_json::Value::Null) => Ok(None),
            Some(serde_json::Value::String(s)) => Ok(Some(s.clone())),
            Some(v) => Ok(Some(v.to_string())),
        }
    }
}

impl std::fmt::Debug for FileConfigProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileConfigProvider")
            .field("path", &self.path)
            .field("keys", &self.data.len())
            .finish()
    }
}
