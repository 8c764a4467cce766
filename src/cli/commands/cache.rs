use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::sheet::cache;
use crate::ui::messages::{info, success};
use chrono::Utc;

/// Handle the `cache` subcommand (inspect / clear the sheet cache).
pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Cache {
        info: show_info,
        clear,
    } = cmd
    {
        if *show_info {
            print_info();
        }

        if *clear {
            if cache::clear()? {
                success("Cache cleared.");
            } else {
                info("No cache file to clear.");
            }
        }
    }

    Ok(())
}

fn print_info() {
    println!("🗂️  Cache file : {}", cache::cache_file().display());

    match cache::read_entry() {
        None => println!("   (no cache present)"),
        Some(entry) => {
            let left_minutes = (entry.cache_expiry - Utc::now().timestamp_millis()) / 60_000;

            println!("   Source id  : {}", entry.id);
            println!("   Columns    : {}", entry.data.len());
            if left_minutes >= 0 {
                println!("   Expires in : {} minute(s)", left_minutes);
            } else {
                println!("   Expired    : {} minute(s) ago", -left_minutes);
            }
        }
    }
}
