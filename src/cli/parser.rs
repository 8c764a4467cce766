use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for sleepcharter
/// CLI application to convert a sleep-tracking spreadsheet into sleep/wake CSV
#[derive(Parser)]
#[command(
    name = "sleepcharter",
    version = env!("CARGO_PKG_VERSION"),
    about = "Convert a hand-maintained sleep-tracking spreadsheet into normalized sleep/wake CSV data",
    long_about = None
)]
pub struct Cli {
    /// Override the sheet source path (useful for tests or one-off files)
    #[arg(global = true, long = "source")]
    pub source: Option<String>,

    /// Override the configured timezone (local, UTC, or a fixed offset like +02:00)
    #[arg(global = true, long = "tz")]
    pub tz: Option<String>,

    /// Run in test mode (no config file update, no cache)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and output directory
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Generate the sleep/wake CSV from the spreadsheet export
    Generate {
        /// Output file path (defaults to the configured output)
        #[arg(long = "out", value_name = "FILE")]
        out: Option<String>,

        /// Ignore the cached grid and re-read the source sheet
        #[arg(long = "refresh")]
        refresh: bool,

        /// Overwrite the output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// List parsed sleep sessions
    List {
        /// Filter by period.
        ///
        /// Supported formats:
        /// - YYYY                  → entire year  (e.g. "2024")
        /// - YYYY-MM               → entire month (e.g. "2024-03")
        /// - YYYY-MM-DD            → specific day (e.g. "2024-03-05")
        ///
        /// Ranges (start:end) in the same format, and the special value
        /// "all" to bypass date filtering. If omitted, everything is shown.
        #[arg(
            long,
            short,
            help = "Filter by year/month/day or a custom range (YYYY, YYYY-MM, YYYY-MM-DD, or ranges)"
        )]
        period: Option<String>,

        /// Show the raw sleep/wake event stream instead of folded sessions
        #[arg(long = "events", help = "List raw sleep/wake events")]
        events: bool,
    },

    /// Inspect or clear the sheet cache
    Cache {
        #[arg(long = "info", help = "Show cache file information")]
        info: bool,

        #[arg(long = "clear", help = "Delete the cache file")]
        clear: bool,
    },

    /// Export the parsed event stream in various formats
    Export {
        /// Export format: csv, json
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Date range to export (same formats as `list --period`)
        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
