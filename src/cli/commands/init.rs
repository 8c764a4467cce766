use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the output directory for generated CSV data
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing sleepcharter…");

    Config::init_all(cli.source.clone(), cli.test)?;

    let cfg = Config::load();

    println!("📄 Config file : {}", Config::config_file().display());
    println!("📈 Output file : {}", cfg.output);
    println!("🎉 sleepcharter initialization completed!");
    println!();
    println!("Export your sleep spreadsheet as CSV to the sheet source path,");
    println!("then run `sleepcharter generate`.");

    Ok(())
}
