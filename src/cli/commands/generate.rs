use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::folder::{check_renderer_contract, fold_events};
use crate::core::parser::parse_columns;
use crate::errors::AppResult;
use crate::export::{ensure_writable, write_sleep_csv};
use crate::models::event::TimeEvent;
use crate::sheet;
use crate::ui::messages::info;
use crate::utils::path::expand_tilde;
use crate::utils::time::Zone;
use chrono::{Local, TimeZone};
use std::path::Path;

/// Handle the `generate` command: the full sheet → CSV pipeline.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Generate {
        out,
        refresh,
        force,
    } = &cli.command
    {
        let out_path = expand_tilde(out.as_deref().unwrap_or(cfg.output.as_str()));

        match cfg.zone()? {
            Zone::Local => run(&Local, cli, cfg, &out_path, *refresh, *force),
            Zone::Fixed(off) => run(&off, cli, cfg, &out_path, *refresh, *force),
        }
    } else {
        Ok(())
    }
}

fn run<Tz: TimeZone>(
    tz: &Tz,
    cli: &Cli,
    cfg: &Config,
    out: &Path,
    refresh: bool,
    force: bool,
) -> AppResult<()> {
    let grid = sheet::load_sheet(cfg, refresh, !cli.test)?;

    // A malformed cell fails the whole run: a CSV silently missing a day is
    // worse than no CSV.
    let days = parse_columns(tz, &grid)?;
    info(format!("Parsed {} day column(s)", days.len()));

    // Flatten in column order. The folder trusts the sheet's chronological
    // column layout and performs no sorting of its own.
    let events: Vec<TimeEvent> = days.into_iter().flat_map(|d| d.values).collect();

    let csv = fold_events(tz, &events)?;
    check_renderer_contract(&csv)?;

    ensure_writable(out, force)?;
    write_sleep_csv(&csv, out)?;

    let sessions = csv.lines().count().saturating_sub(1);
    info(format!("{} sleep session(s) written", sessions));

    Ok(())
}
