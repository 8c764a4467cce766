use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::folder::{ROW_DATETIME_FMT, fold_rows};
use crate::core::parser::parse_columns;
use crate::errors::AppResult;
use crate::export::range::{in_bounds, resolve_bounds};
use crate::models::event::TimeEvent;
use crate::sheet;
use crate::utils::colors::{RESET, color_for_duration, colorize_kind};
use crate::utils::formatting::bold;
use crate::utils::mins2readable;
use crate::utils::table::{Column, Table};
use crate::utils::time::{Zone, minutes_between};
use chrono::{Local, NaiveDate, TimeZone};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period, events } = &cli.command {
        match cfg.zone()? {
            Zone::Local => run(&Local, cli, cfg, period, *events),
            Zone::Fixed(off) => run(&off, cli, cfg, period, *events),
        }
    } else {
        Ok(())
    }
}

fn run<Tz: TimeZone>(
    tz: &Tz,
    cli: &Cli,
    cfg: &Config,
    period: &Option<String>,
    events_only: bool,
) -> AppResult<()> {
    let bounds = resolve_bounds(period)?;

    let grid = sheet::load_sheet(cfg, false, !cli.test)?;
    let days = parse_columns(tz, &grid)?;
    let events: Vec<TimeEvent> = days.into_iter().flat_map(|d| d.values).collect();

    if events_only {
        print_events(&events, &bounds);
        return Ok(());
    }

    let rows: Vec<_> = fold_rows(tz, &events)?
        .into_iter()
        .filter(|r| in_bounds(r.sleep.date(), &bounds))
        .collect();

    if rows.is_empty() {
        println!("No sleep sessions for the selected period.");
        return Ok(());
    }

    let mut table = Table::new(vec![
        Column::new("Sleep", 19),
        Column::new("Wake", 19),
        Column::new("Duration", 9),
    ]);

    for r in &rows {
        let mins = minutes_between(r.sleep, r.wake);
        table.add_row(vec![
            r.sleep.format(ROW_DATETIME_FMT).to_string(),
            r.wake.format(ROW_DATETIME_FMT).to_string(),
            format!(
                "{}{}{}",
                color_for_duration(mins),
                mins2readable(mins, false),
                RESET
            ),
        ]);
    }

    print!("{}", table.render());
    println!("{} session(s)", rows.len());

    Ok(())
}

fn print_events(events: &[TimeEvent], bounds: &Option<(NaiveDate, NaiveDate)>) {
    println!("{}", bold("EVENTS:"));
    for ev in events
        .iter()
        .filter(|ev| in_bounds(ev.time.date_naive(), bounds))
    {
        println!(
            "{}  {}",
            ev.time.format("%Y-%m-%d %H:%M:%S"),
            colorize_kind(ev.kind.et_as_str(), ev.kind.is_sleep())
        );
    }
}
