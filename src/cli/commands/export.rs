use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::parser::parse_columns;
use crate::errors::{AppError, AppResult};
use crate::export::range::{in_bounds, resolve_bounds};
use crate::export::{EventExport, ExportFormat, ensure_writable, export_csv, export_json};
use crate::models::event::TimeEvent;
use crate::sheet;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;
use crate::utils::time::Zone;
use chrono::{Local, TimeZone};
use std::io;

/// Handle the `export` command: flat dump of the parsed event stream.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = &cli.command
    {
        let path = expand_tilde(file);

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(&path, *force)?;

        let bounds = resolve_bounds(range)?;

        let events = match cfg.zone()? {
            Zone::Local => load_events(&Local, cli, cfg)?,
            Zone::Fixed(off) => load_events(&off, cli, cfg)?,
        };

        let events_vec: Vec<EventExport> = events
            .iter()
            .filter(|ev| in_bounds(ev.time.date_naive(), &bounds))
            .map(EventExport::from)
            .collect();

        if events_vec.is_empty() {
            warning("No events found for selected range.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&events_vec, &path)?,
            ExportFormat::Json => export_json(&events_vec, &path)?,
        }
    }

    Ok(())
}

fn load_events<Tz: TimeZone>(tz: &Tz, cli: &Cli, cfg: &Config) -> AppResult<Vec<TimeEvent>> {
    let grid = sheet::load_sheet(cfg, false, !cli.test)?;
    let days = parse_columns(tz, &grid)?;
    Ok(days.into_iter().flat_map(|d| d.values).collect())
}
