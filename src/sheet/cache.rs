//! Time-bounded local cache of the raw sheet grid, keyed by source id.
//! One JSON file in the config dir; a stale or mismatched entry is simply a
//! miss, never a failure.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::sheet::Grid;
use crate::ui::messages::warning;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Cache {
    /// Epoch milliseconds after which the entry is stale.
    pub cache_expiry: i64,
    pub id: String,
    pub data: Grid,
}

pub fn cache_file() -> PathBuf {
    Config::config_dir().join("cache.json")
}

/// The raw cache entry, if one can be read at all (regardless of expiry).
pub fn read_entry() -> Option<Cache> {
    let raw = fs::read_to_string(cache_file()).ok()?;
    match serde_json::from_str(&raw) {
        Ok(entry) => Some(entry),
        Err(e) => {
            warning(format!("Ignoring unreadable cache file: {e}"));
            None
        }
    }
}

/// The cached grid, only when the id matches and the entry has not expired.
pub fn load(id: &str) -> Option<Grid> {
    let entry = read_entry()?;
    let now = Utc::now().timestamp_millis();

    if entry.cache_expiry < now || entry.id != id {
        return None;
    }

    Some(entry.data)
}

pub fn store(id: &str, minutes: i64, data: &Grid) -> AppResult<()> {
    let entry = Cache {
        cache_expiry: Utc::now().timestamp_millis() + minutes * 60 * 1000,
        id: id.to_string(),
        data: data.clone(),
    };

    fs::create_dir_all(Config::config_dir())?;
    let json = serde_json::to_string(&entry)
        .map_err(|e| AppError::Cache(format!("Failed to serialize cache: {e}")))?;
    fs::write(cache_file(), json)?;

    Ok(())
}

/// Remove the cache file. Returns whether there was one to remove.
pub fn clear() -> AppResult<bool> {
    let path = cache_file();
    if !path.exists() {
        return Ok(false);
    }
    fs::remove_file(&path)?;
    Ok(true)
}
