//! Sheet retrieval: reading the exported spreadsheet grid and the
//! time-bounded local cache in front of it.

pub mod cache;
pub mod grid;

use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::path::expand_tilde;

/// One sheet in column-major order: each inner vector is a column of raw
/// cell strings, padded with empty strings to the sheet's height.
pub type Grid = Vec<Vec<String>>;

/// Load the raw grid for the configured source, going through the cache
/// unless `refresh` forces a re-read. Test mode (`cache_enabled = false`)
/// bypasses the cache entirely so runs stay hermetic.
pub fn load_sheet(cfg: &Config, refresh: bool, cache_enabled: bool) -> AppResult<Grid> {
    let path = expand_tilde(&cfg.source);
    let id = path.to_string_lossy().to_string();

    if cache_enabled && !refresh {
        if let Some(data) = cache::load(&id) {
            info("Sheet cache hit");
            return Ok(data);
        }
        info("Sheet cache miss");
    }

    let data = grid::load_grid(&path)?;

    if cache_enabled {
        cache::store(&id, cfg.cache_minutes, &data)?;
    }

    Ok(data)
}
