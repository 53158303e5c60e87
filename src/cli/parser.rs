use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for kintai
/// CLI application to track club attendance and shift schedules
#[derive(Parser)]
#[command(
    name = "kintai",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple attendance CLI: clock members in and out, follow shifts, total worked time",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or portable setups)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    /// Override the attendance data directory
    #[arg(global = true, long = "data-dir")]
    pub data_dir: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and data directory
    Init,

    /// Manage the configuration file (view or check)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for problems")]
        check: bool,
    },

    /// Clock a member in
    In {
        /// Member display name as listed in the roster
        name: String,
    },

    /// Clock a member out
    Out {
        /// Member display name as listed in the roster
        name: String,
    },

    /// Show today's attendance board
    Status {
        #[arg(long, short, help = "Filter members by phonetic initial")]
        filter: Option<String>,

        #[arg(long, help = "Re-render once per second until interrupted")]
        watch: bool,

        /// Bounded watch: stop after N refreshes
        #[arg(long = "ticks", hide = true)]
        ticks: Option<u32>,
    },

    /// List today's remaining shifts for a member
    Shifts {
        name: String,
    },

    /// Admin report: total worked time per member
    Report {
        #[arg(long, help = "Admin secret from the configuration file")]
        secret: String,

        #[arg(long, help = "Report a specific day (YYYY-MM-DD) instead of today")]
        date: Option<String>,
    },

    /// Export the admin report to a file
    Export {
        #[arg(long, help = "Admin secret from the configuration file")]
        secret: String,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Export a specific day (YYYY-MM-DD) instead of today")]
        date: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of a day's attendance file
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, help = "Back up a specific day (YYYY-MM-DD) instead of today")]
        date: Option<String>,
    },
}
