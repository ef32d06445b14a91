use crate::codec::RecordFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rkwhcalc
/// CLI application to estimate energy consumption with SQLite
#[derive(Parser)]
#[command(
    name = "rkwhcalc",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple energy calculator: estimate device consumption in kWh, keep history and favourites in SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

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

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage the device catalog
    Device {
        #[command(subcommand)]
        action: DeviceAction,
    },

    /// Compute energy for a list of usage rows and record it in history
    Calc {
        /// Usage row as QTY:DURATION:DEVICE (DEVICE = #id, label or name)
        #[arg(
            long = "row",
            short = 'r',
            required = true,
            value_name = "QTY:DURATION:DEVICE"
        )]
        rows: Vec<String>,

        /// Also store the calculation as a favourite with this label
        #[arg(long = "save", value_name = "LABEL")]
        save: Option<String>,

        /// Record format for this calculation (overrides the configuration)
        #[arg(long = "format", value_enum)]
        format: Option<RecordFormat>,
    },

    /// Browse stored calculations
    History {
        #[command(subcommand)]
        action: RecordAction,
    },

    /// Browse favourite calculations
    Fav {
        #[command(subcommand)]
        action: RecordAction,
    },
}

#[derive(Subcommand)]
pub enum DeviceAction {
    /// Add a device with its rated power in watts
    Add {
        /// Device name
        name: String,

        /// Rated power [W]
        power: String,
    },

    /// List devices as "<name> <power> W"
    List,
}

#[derive(Subcommand)]
pub enum RecordAction {
    /// List records, most recent first
    List,

    /// Reopen a record and recompute it
    Show {
        /// History timestamp or favourite label
        key: String,
    },

    /// Delete a record
    Del {
        /// History timestamp or favourite label
        key: String,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },
}
