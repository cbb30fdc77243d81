use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimeclock
/// Terminal time clock: clock in/out, breaks and a rolling activity log
#[derive(Parser)]
#[command(
    name = "rtimeclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "A terminal time clock: clock in/out, track breaks and keep a rolling activity log",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the backend base URL
    #[arg(global = true, long = "backend")]
    pub backend: Option<String>,

    /// Do not contact the backend
    #[arg(global = true, long = "offline")]
    pub offline: bool,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Clock in
    In,

    /// Clock out (ends a running break)
    Out,

    /// Start or end a break
    Break,

    /// Show the current state, timers and the filtered log
    Status,

    /// Refresh the timers every second
    Watch {
        /// Stop after N refreshes (runs until interrupted otherwise)
        #[arg(long = "ticks")]
        ticks: Option<u64>,
    },

    /// Print the activity log
    Logs {
        #[arg(long = "all", help = "Ignore the saved date filter")]
        all: bool,
    },

    /// Set, clear or show the log date filter
    Filter {
        #[arg(
            long = "from",
            help = "Lower bound (YYYY-MM-DD, YYYY-MM-DD HH:MM or RFC 3339)"
        )]
        from: Option<String>,

        #[arg(
            long = "to",
            help = "Upper bound (YYYY-MM-DD, YYYY-MM-DD HH:MM or RFC 3339)"
        )]
        to: Option<String>,

        #[arg(long = "clear", conflicts_with_all = ["from", "to", "show"], help = "Remove the filter")]
        clear: bool,

        #[arg(long = "show", conflicts_with_all = ["from", "to"], help = "Print the current filter")]
        show: bool,
    },

    /// Clear all logs locally and on the backend
    Clear {
        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Replace the local log with the backend's
    Sync,

    /// Import a JSON array of log entries through the backend
    Import {
        #[arg(long = "file", help = "JSON file to import")]
        file: String,
    },

    /// Export the filtered log
    Export {
        #[arg(long = "file", help = "Output file (default: clocklogs.csv, or clocklogs.json for a local JSON export)")]
        file: Option<String>,

        #[arg(long = "local", help = "Export the local log instead of the backend's")]
        local: bool,

        #[arg(
            long = "format",
            value_enum,
            default_value = "csv",
            help = "Format of a local export (with --local)"
        )]
        format: ExportFormat,

        #[arg(long = "force", help = "Overwrite the output file without asking")]
        force: bool,
    },

    /// Print the internal audit log
    Audit,
}
