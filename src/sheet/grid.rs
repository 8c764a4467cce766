use crate::errors::{AppError, AppResult};
use crate::sheet::Grid;
use std::io;
use std::path::Path;

/// Read a sheet export (plain CSV, row-major) and hand back the column-major
/// grid the parser works on.
pub fn load_grid(path: &Path) -> AppResult<Grid> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| AppError::from(io::Error::other(format!("Sheet open error: {e}"))))?;

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in rdr.records() {
        let record = record
            .map_err(|e| AppError::from(io::Error::other(format!("Sheet read error: {e}"))))?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    let grid = transpose(&rows);
    if grid.is_empty() {
        return Err(AppError::EmptySheet);
    }

    Ok(grid)
}

/// Ragged rows are padded with empty cells so every column has the full
/// sheet height; the column parser treats those as terminating padding.
fn transpose(rows: &[Vec<String>]) -> Grid {
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);

    (0..width)
        .map(|c| {
            rows.iter()
                .map(|r| r.get(c).cloned().unwrap_or_default())
                .collect()
        })
        .collect()
}
