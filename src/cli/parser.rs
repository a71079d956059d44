use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimetable
/// CLI client to look up college timetables by batch code over HTTP
#[derive(Parser)]
#[command(
    name = "rtimetable",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple timetable lookup CLI: fetch a batch's weekly schedule and show it grouped by day",
    long_about = None
)]
pub struct Cli {
    /// Override the API base URL (useful for tests or alternate servers)
    #[arg(global = true, long = "api")]
    pub api: Option<String>,

    /// Override the request timeout in seconds
    #[arg(global = true, long = "timeout")]
    pub timeout: Option<u64>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file
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

    /// Fetch and display the timetable for a batch
    Show {
        /// Batch code to look up (e.g. F7, E16). Matching is
        /// case-insensitive on the server side.
        batch: String,

        /// Print the fetched rows as JSON instead of tables
        #[arg(long = "raw")]
        raw: bool,
    },

    /// Interactive mode: enter batch codes one per line
    Shell,

    /// Check that the timetable server is reachable
    Ping,
}
