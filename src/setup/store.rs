use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::config_dir;
use crate::error::AppError;

const ENTRIES_FILE: &str = "entries.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryData {
    pub url: String,
}

/// A configured device, created once its URL has been validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigEntry {
    pub entry_id: Uuid,
    pub title: String,
    pub data: EntryData,
    pub created_at: DateTime<Utc>,
}

impl ConfigEntry {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            entry_id: Uuid::new_v4(),
            title: title.into(),
            data: EntryData { url: url.into() },
            created_at: Utc::now(),
        }
    }
}

/// JSON file of config entries.
pub struct EntryStore {
    path: PathBuf,
}

impl EntryStore {
    pub fn open_default() -> Result<Self, AppError> {
        Ok(Self::at(config_dir()?))
    }

    pub fn at(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(ENTRIES_FILE),
        }
    }

    pub fn list(&self) -> Result<Vec<ConfigEntry>, AppError> {
        if !self.path.exists() {
            return Ok(vec![]);
        }
        let data = fs::read_to_string(&self.path)?;
        if data.trim().is_empty() {
            return Ok(vec![]);
        }
        Ok(serde_json::from_str(&data)?)
    }

    fn save(&self, entries: &[ConfigEntry]) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(entries)?)?;
        Ok(())
    }

    pub fn find_by_title(&self, title: &str) -> Result<Option<ConfigEntry>, AppError> {
        Ok(self.list()?.into_iter().find(|e| e.title == title))
    }

    pub fn add(&self, entry: ConfigEntry) -> Result<ConfigEntry, AppError> {
        if self.find_by_title(&entry.title)?.is_some() {
            return Err(AppError::AlreadyConfigured(entry.title));
        }
        let mut entries = self.list()?;
        entries.push(entry.clone());
        self.save(&entries)?;
        Ok(entry)
    }

    pub fn remove(&self, entry_id: Uuid) -> Result<ConfigEntry, AppError> {
        let mut entries = self.list()?;
        let pos = entries
            .iter()
            .position(|e| e.entry_id == entry_id)
            .ok_or_else(|| AppError::EntryNotFound(entry_id.to_string()))?;
        let removed = entries.remove(pos);
        self.save(&entries)?;
        Ok(removed)
    }
}

/// Store in a fresh directory that is deleted when the guard drops.
#[cfg(test)]
pub(crate) fn temp_store() -> (tempfile::TempDir, EntryStore) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let store = EntryStore::at(dir.path());
    (dir, store)
}
