// src/export/sleep_csv.rs

use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::ui::messages::info;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Write the folded CSV text byte-for-byte. The renderer's contract forbids
/// a trailing newline, so this must not go through a record-oriented writer.
pub(crate) fn write_sleep_csv(csv: &str, path: &Path) -> AppResult<()> {
    info(format!("Writing sleep data: {}", path.display()));

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut file = File::create(path)?;
    file.write_all(csv.as_bytes())?;

    notify_export_success("Sleep data", path);
    Ok(())
}
