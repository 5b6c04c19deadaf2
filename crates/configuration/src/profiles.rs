//! Named configuration snapshots ("profiles").
//!
//! A profile is an arbitrary JSON document saved under a name, used by the
//! terminal to stash and recall form values for repeated runs. The store is
//! an explicit instance over one directory; nothing is shared implicitly
//! between stores. Writes are last-write-wins.

use crate::error::ConfigError;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// A directory of JSON profile snapshots with load/save/clear semantics.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    dir: PathBuf,
}

impl ProfileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Persists `snapshot` under `name`, replacing any previous snapshot.
    pub fn save(&self, name: &str, snapshot: &Value) -> Result<(), ConfigError> {
        let path = self.path_for(name)?;
        fs::create_dir_all(&self.dir)?;
        fs::write(&path, serde_json::to_string_pretty(snapshot)?)?;
        debug!(profile = name, path = %path.display(), "Profile saved.");
        Ok(())
    }

    /// Loads the snapshot saved under `name`.
    pub fn load(&self, name: &str) -> Result<Value, ConfigError> {
        let path = self.path_for(name)?;
        if !path.is_file() {
            return Err(ConfigError::ProfileNotFound(name.to_string()));
        }
        let raw = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Lists saved profile names, sorted.
    pub fn list(&self) -> Result<Vec<String>, ConfigError> {
        if !self.dir.is_dir() {
            return Ok(Vec::new());
        }
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    names.push(stem.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }

    /// Removes one profile.
    pub fn delete(&self, name: &str) -> Result<(), ConfigError> {
        let path = self.path_for(name)?;
        if !path.is_file() {
            return Err(ConfigError::ProfileNotFound(name.to_string()));
        }
        fs::remove_file(path)?;
        Ok(())
    }

    /// Removes every profile in the store.
    pub fn clear(&self) -> Result<(), ConfigError> {
        for name in self.list()? {
            self.delete(&name)?;
        }
        Ok(())
    }

    fn path_for(&self, name: &str) -> Result<PathBuf, ConfigError> {
        // Profile names are plain identifiers, never paths.
        if name.is_empty()
            || name
                .chars()
                .any(|c| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'))
        {
            return Err(ConfigError::InvalidProfileName(name.to_string()));
        }
        Ok(self.dir.join(format!("{name}.json")))
    }
}
