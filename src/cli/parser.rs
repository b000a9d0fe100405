//! Command-line interface definition for rdayplan.

use clap::{Parser, Subcommand};

/// CLI application to plan one day of time-bounded activities
#[derive(Parser)]
#[command(
    name = "rdayplan",
    version = env!("CARGO_PKG_VERSION"),
    about = "A single-day planner CLI: ordered items, overlap checks and free-slot search",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the fixed demonstration sequence (includes an interactive edit)
    Demo,

    /// Find the earliest free slot of the given length
    Find {
        /// Slot length in minutes
        minutes: i64,

        #[arg(long = "from", help = "Lower bound for the search (HH:MM)")]
        from: Option<String>,

        #[arg(long = "to", help = "Upper bound for the search (HH:MM)")]
        to: Option<String>,

        #[arg(
            long = "busy",
            help = "Busy interval HH:MM-HH:MM[=description]; repeatable"
        )]
        busy: Vec<String>,

        #[arg(long = "json", help = "Print the found slot as JSON")]
        json: bool,
    },

    /// Check whether a free slot of the given length exists
    Check {
        /// Slot length in minutes
        minutes: i64,

        #[arg(long = "from", help = "Lower bound for the check (HH:MM)")]
        from: Option<String>,

        #[arg(long = "to", help = "Upper bound for the check (HH:MM)")]
        to: Option<String>,

        #[arg(
            long = "busy",
            help = "Busy interval HH:MM-HH:MM[=description]; repeatable"
        )]
        busy: Vec<String>,

        #[arg(long = "details", help = "List every window the scan examines")]
        details: bool,
    },

    /// Manage the configuration file (view or create)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "path", help = "Print the configuration file path")]
        path: bool,

        #[arg(long = "init", help = "Write a default configuration file")]
        init: bool,
    },
}
